pub mod format_strategy;
pub mod network_strategy;
pub mod remote_strategy;

pub use format_strategy::FormatStrategy;
pub use network_strategy::NetworkStrategy;
pub use remote_strategy::RemoteStrategy;
