pub mod engine;
pub mod rate_limiter;
pub mod tracing_resolver;
pub mod validator;
pub mod vehicle_resolver;

pub use crate::domain::model::{FieldMap, Identity, LookupReport, QueryKind};
pub use crate::domain::ports::{Clock, ConfigProvider, LookupTransport, TraceStrategy};
pub use crate::utils::error::Result;
