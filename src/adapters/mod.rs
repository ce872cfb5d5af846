// Adapters layer: concrete implementations for external systems (http, clock).

pub mod clock;
pub mod http;

pub use clock::SystemClock;
pub use http::HttpTransport;
