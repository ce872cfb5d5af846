use crate::domain::model::FieldMap;
use crate::utils::error::StrategyResult;
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// One independently failable way of producing a phone trace.
#[async_trait]
pub trait TraceStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, query: &str) -> StrategyResult<FieldMap>;
}

/// Outbound lookup call used by the remote strategy. Returns the raw markup body.
#[async_trait]
pub trait LookupTransport: Send + Sync {
    async fn fetch(&self, country_hint: &str, query: &str) -> StrategyResult<String>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub trait ConfigProvider: Send + Sync {
    fn max_requests(&self) -> usize;
    fn rate_window(&self) -> Duration;
    fn remote_enabled(&self) -> bool;
    fn remote_endpoint(&self) -> &str;
    fn country_hint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn retry_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn user_agent(&self) -> &str;
}
