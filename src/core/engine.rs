use crate::adapters::http::HttpTransport;
use crate::app::strategies::RemoteStrategy;
use crate::core::rate_limiter::{Admission, RateLimitConfig, RateLimiter};
use crate::core::tracing_resolver::TracingResolver;
use crate::core::validator;
use crate::core::vehicle_resolver::VehicleResolver;
use crate::domain::model::{Identity, LookupReport, QueryKind};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LookupError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// 一次查詢的流程：格式檢查 → 限流 → 對應的 resolver
pub struct LookupEngine {
    limiter: Arc<RateLimiter>,
    tracer: TracingResolver,
    vehicles: VehicleResolver,
}

impl LookupEngine {
    pub fn new(
        limiter: Arc<RateLimiter>,
        tracer: TracingResolver,
        vehicles: VehicleResolver,
    ) -> Self {
        Self {
            limiter,
            tracer,
            vehicles,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let limiter = Arc::new(RateLimiter::new(RateLimitConfig {
            max_requests: config.max_requests(),
            window: config.rate_window(),
        }));

        let remote = if config.remote_enabled() {
            let transport = HttpTransport::from_config(config)?;
            tracing::debug!("📡 Remote tracer endpoint: {}", transport.endpoint());
            Some(RemoteStrategy::new(Arc::new(transport), config.country_hint()))
        } else {
            tracing::info!("📴 Remote tracer disabled, using local strategies only");
            None
        };

        Ok(Self::new(
            limiter,
            TracingResolver::with_defaults(remote),
            VehicleResolver::new(),
        ))
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    pub fn tracer(&self) -> &TracingResolver {
        &self.tracer
    }

    pub async fn lookup(
        &self,
        identity: &Identity,
        kind: QueryKind,
        input: &str,
        cancel: &CancellationToken,
    ) -> Result<LookupReport> {
        match kind {
            QueryKind::Phone => self.trace_phone(identity, input, cancel).await,
            QueryKind::Vehicle => self.lookup_vehicle(identity, input),
        }
    }

    pub async fn trace_phone(
        &self,
        identity: &Identity,
        input: &str,
        cancel: &CancellationToken,
    ) -> Result<LookupReport> {
        if !validator::is_valid_phone(input) {
            return Err(LookupError::InvalidFormat {
                kind: QueryKind::Phone,
                input: input.to_string(),
            });
        }
        self.admit(identity)?;

        let number = validator::normalize_phone(input);
        tracing::info!("📱 {} tracing {}", identity, number);

        let trace = self.tracer.resolve_with_cancel(&number, cancel).await?;
        tracing::debug!("Trace for {} answered by '{}'", number, trace.strategy);
        Ok(LookupReport::new(QueryKind::Phone, number, trace.fields))
    }

    pub fn lookup_vehicle(&self, identity: &Identity, input: &str) -> Result<LookupReport> {
        if !validator::is_valid_vehicle(input) {
            return Err(LookupError::InvalidFormat {
                kind: QueryKind::Vehicle,
                input: input.to_string(),
            });
        }
        self.admit(identity)?;

        let record = self.vehicles.resolve(input)?;
        tracing::info!("🚗 {} looked up {}", identity, record.key.original);
        Ok(LookupReport::new(
            QueryKind::Vehicle,
            record.key.original.clone(),
            record.to_fields(),
        ))
    }

    fn admit(&self, identity: &Identity) -> Result<()> {
        match self.limiter.check(identity) {
            Admission::Allowed { .. } => Ok(()),
            Admission::Denied { retry_after } => Err(LookupError::RateLimited {
                retry_after_secs: ceil_secs(retry_after),
            }),
        }
    }
}

fn ceil_secs(duration: Duration) -> u64 {
    duration
        .as_secs()
        .saturating_add(u64::from(duration.subsec_nanos() > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(max_requests: usize) -> LookupEngine {
        let limiter = Arc::new(RateLimiter::new(RateLimitConfig {
            max_requests,
            window: Duration::from_secs(60),
        }));
        LookupEngine::new(
            limiter,
            TracingResolver::with_defaults(None),
            VehicleResolver::new(),
        )
    }

    #[tokio::test]
    async fn test_invalid_phone_does_not_consume_quota() {
        let engine = engine(1);
        let user = Identity::from("u1");
        let cancel = CancellationToken::new();

        let err = engine
            .trace_phone(&user, "12345", &cancel)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LookupError::InvalidFormat {
                kind: QueryKind::Phone,
                ..
            }
        ));
        assert_eq!(engine.limiter().remaining(&user), 1);
    }

    #[tokio::test]
    async fn test_phone_trace_normalizes_number() {
        let engine = engine(5);
        let report = engine
            .trace_phone(&Identity::from("u1"), "+91 98765-43210", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.kind, QueryKind::Phone);
        assert_eq!(report.query, "+919876543210");
        assert_eq!(report.fields.get("Country"), Some("India"));
    }

    #[test]
    fn test_vehicle_lookup_report() {
        let engine = engine(5);
        let report = engine
            .lookup_vehicle(&Identity::from("u1"), "mh-01-ab-1234")
            .unwrap();

        assert_eq!(report.query, "MH01AB1234");
        assert_eq!(report.fields.get("State"), Some("Maharashtra"));
        assert_eq!(report.fields.get("RTO Office"), Some("Mumbai Central RTO"));
    }

    #[test]
    fn test_rate_limit_is_shared_across_lookup_kinds() {
        let engine = engine(2);
        let user = Identity::from("u1");

        assert!(engine.lookup_vehicle(&user, "MH01AB1234").is_ok());
        assert!(engine.lookup_vehicle(&user, "DL05CD5678").is_ok());

        let err = engine.lookup_vehicle(&user, "KA51MN1").unwrap_err();
        match err {
            LookupError::RateLimited { retry_after_secs } => {
                assert!(retry_after_secs > 0 && retry_after_secs <= 60)
            }
            other => panic!("expected rate limit, got {:?}", other),
        }
    }

    #[test]
    fn test_ceil_secs() {
        assert_eq!(ceil_secs(Duration::from_secs(3)), 3);
        assert_eq!(ceil_secs(Duration::from_millis(2500)), 3);
        assert_eq!(ceil_secs(Duration::ZERO), 0);
        assert_eq!(ceil_secs(Duration::MAX), u64::MAX);
    }
}
