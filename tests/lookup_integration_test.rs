use httpmock::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use trace_lookup::domain::ports::Clock;
use trace_lookup::{
    Identity, LookupConfig, LookupEngine, LookupError, QueryKind, RateLimitConfig, RateLimiter,
    TracingResolver, VehicleResolver,
};

const TRACER_PAGE: &str = r#"
<html><body>
<table>
  <tr><th>Owner Name</th><td>Suresh Patil</td></tr>
  <tr><th>SIM card</th><td>Jio 4G</td></tr>
  <tr><th>Mobile State</th><td>Maharashtra</td></tr>
  <tr><th>Refrence City</th><td>Nagpur</td></tr>
  <tr><th>Country</th><td>India</td></tr>
</table>
</body></html>
"#;

struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Instant::now()),
        })
    }

    fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

fn remote_config(endpoint: String) -> LookupConfig {
    let mut config = LookupConfig::default();
    config.remote.endpoint = endpoint;
    config.remote.timeout_seconds = 1;
    config.remote.retry_attempts = 1;
    config.remote.retry_delay_ms = 10;
    config
}

#[tokio::test]
async fn test_remote_tracer_answers_first() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/").body_contains("country=IN");
            then.status(200).body(TRACER_PAGE);
        })
        .await;

    let engine = LookupEngine::from_config(&remote_config(server.url("/"))).unwrap();
    let report = engine
        .trace_phone(
            &Identity::from(1u64),
            "+91 98765 43210",
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(report.kind, QueryKind::Phone);
    assert_eq!(report.fields.get("Number"), Some("+919876543210"));
    assert_eq!(report.fields.get("Owner Name"), Some("Suresh Patil"));
    assert_eq!(report.fields.get("SIM Card"), Some("Jio 4G"));
    assert_eq!(report.fields.get("Reference City"), Some("Nagpur"));
    assert_eq!(report.fields.get("Tracker ID"), Some("N/A"));
}

#[tokio::test]
async fn test_server_error_falls_back_to_network_heuristic() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(500);
        })
        .await;

    let engine = LookupEngine::from_config(&remote_config(server.url("/"))).unwrap();
    let report = engine
        .trace_phone(
            &Identity::from(1u64),
            "+919876543210",
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    // 一次原始請求加一次重試
    assert_eq!(mock.hits_async().await, 2);
    assert_eq!(report.fields.get("Country"), Some("India"));
    assert_eq!(report.fields.get("Network Type"), Some("Mobile"));
    assert!(report.fields.get("Owner Name").is_none());
}

#[tokio::test]
async fn test_page_without_known_labels_falls_back() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200).body("<html><body><p>No records</p></body></html>");
        })
        .await;

    let engine = LookupEngine::from_config(&remote_config(server.url("/"))).unwrap();
    let report = engine
        .trace_phone(
            &Identity::from(1u64),
            "+919876543210",
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(report.fields.get("Country"), Some("India"));
}

#[tokio::test]
async fn test_slow_tracer_times_out_and_falls_back() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .body(TRACER_PAGE)
                .delay(Duration::from_secs(3));
        })
        .await;

    let mut config = remote_config(server.url("/"));
    config.remote.retry_attempts = 0;
    let engine = LookupEngine::from_config(&config).unwrap();

    let started = Instant::now();
    let report = engine
        .trace_phone(
            &Identity::from(1u64),
            "9876543210",
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(report.fields.get("Owner Name").is_none());
    assert_eq!(report.fields.get("Number"), Some("9876543210"));
}

#[tokio::test]
async fn test_cancel_aborts_remote_lookup() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .body(TRACER_PAGE)
                .delay(Duration::from_secs(5));
        })
        .await;

    let mut config = remote_config(server.url("/"));
    config.remote.timeout_seconds = 30;
    let engine = LookupEngine::from_config(&config).unwrap();
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = engine
        .trace_phone(&Identity::from(1u64), "+919876543210", &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_sixth_request_in_window_is_rate_limited() {
    let clock = ManualClock::new();
    let limiter = Arc::new(RateLimiter::with_clock(
        RateLimitConfig {
            max_requests: 5,
            window: Duration::from_secs(60),
        },
        clock.clone(),
    ));
    let engine = LookupEngine::new(
        limiter,
        TracingResolver::with_defaults(None),
        VehicleResolver::new(),
    );
    let user = Identity::from(7u64);
    let cancel = CancellationToken::new();

    for _ in 0..5 {
        engine
            .trace_phone(&user, "+919876543210", &cancel)
            .await
            .unwrap();
        clock.advance(Duration::from_secs(1));
    }

    let err = engine
        .trace_phone(&user, "+919876543210", &cancel)
        .await
        .unwrap_err();
    match err {
        LookupError::RateLimited { retry_after_secs } => assert_eq!(retry_after_secs, 55),
        other => panic!("expected rate limit, got {:?}", other),
    }

    // 其他使用者不受影響
    assert!(engine
        .lookup_vehicle(&Identity::from(8u64), "MH01AB1234")
        .is_ok());

    // 最早的一筆滑出視窗後恢復
    clock.advance(Duration::from_secs(55));
    assert!(engine
        .trace_phone(&user, "+919876543210", &cancel)
        .await
        .is_ok());
}

#[test]
fn test_vehicle_lookup_scenarios() {
    let mut config = LookupConfig::default();
    config.remote.enabled = false;
    let engine = LookupEngine::from_config(&config).unwrap();
    let user = Identity::from("driver");

    let known = engine.lookup_vehicle(&user, "MH01AB1234").unwrap();
    assert_eq!(known.kind, QueryKind::Vehicle);
    assert_eq!(known.fields.get("Registration Number"), Some("MH01AB1234"));
    assert_eq!(known.fields.get("State"), Some("Maharashtra"));
    assert_eq!(known.fields.get("RTO Office"), Some("Mumbai Central RTO"));
    assert_eq!(known.fields.get("Registration Region"), Some("MH-01"));

    let unknown = engine.lookup_vehicle(&user, "XY99ZZ9999").unwrap();
    assert_eq!(unknown.fields.get("State"), Some("Unknown State"));
    assert_eq!(unknown.fields.get("RTO Office"), Some("Unknown RTO"));

    let err = engine.lookup_vehicle(&user, "1234").unwrap_err();
    assert!(matches!(
        err,
        LookupError::InvalidFormat {
            kind: QueryKind::Vehicle,
            ..
        }
    ));
}

#[tokio::test]
async fn test_local_number_is_classified_without_remote() {
    let mut config = LookupConfig::default();
    config.remote.enabled = false;
    let engine = LookupEngine::from_config(&config).unwrap();

    let report = engine
        .trace_phone(
            &Identity::from("tester"),
            "9999999999",
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(report.fields.get("Number"), Some("9999999999"));
    assert_eq!(report.fields.get("Country"), Some("India"));
    assert_eq!(report.fields.get("Region"), Some("Northern/Western India"));
}
