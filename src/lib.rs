pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Command};
pub use config::LookupConfig;

pub use core::engine::LookupEngine;
pub use core::rate_limiter::{Admission, RateLimitConfig, RateLimiter};
pub use core::tracing_resolver::{Trace, TracingResolver};
pub use core::vehicle_resolver::VehicleResolver;
pub use domain::model::{FieldMap, Identity, LookupReport, QueryKind};
pub use utils::error::{LookupError, Result};
