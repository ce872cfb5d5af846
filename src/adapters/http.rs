use crate::domain::ports::{ConfigProvider, LookupTransport};
use crate::utils::error::{Result, StrategyError, StrategyResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// reqwest 實作的查詢通道，重試只在這一層做
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl HttpTransport {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        retry_attempts: u32,
        retry_delay: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            retry_attempts,
            retry_delay,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.remote_endpoint(),
            config.request_timeout(),
            config.retry_attempts(),
            config.retry_delay(),
            config.user_agent(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_once(&self, country_hint: &str, query: &str) -> StrategyResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("country", country_hint), ("q", query)])
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        tracing::debug!("Tracer response status: {}", status);
        if !status.is_success() {
            return Err(StrategyError::Status(status.as_u16()));
        }

        response.text().await.map_err(classify_send_error)
    }
}

#[async_trait]
impl LookupTransport for HttpTransport {
    async fn fetch(&self, country_hint: &str, query: &str) -> StrategyResult<String> {
        let mut attempt = 0;
        loop {
            match self.send_once(country_hint, query).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retry_attempts && is_retryable(&e) => {
                    attempt += 1;
                    tracing::warn!(
                        "🔁 Tracer request failed ({}), retry {}/{}",
                        e,
                        attempt,
                        self.retry_attempts
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

// 送出與讀取 body 共用：逾時一律視為 Timeout 才會被重試
fn classify_send_error(error: reqwest::Error) -> StrategyError {
    if error.is_timeout() {
        StrategyError::Timeout
    } else {
        StrategyError::Transport(error)
    }
}

// 4xx 重試也沒用
fn is_retryable(error: &StrategyError) -> bool {
    match error {
        StrategyError::Timeout => true,
        StrategyError::Transport(e) => e.is_connect() || e.is_request(),
        StrategyError::Status(code) => StatusCode::from_u16(*code)
            .map(|status| status.is_server_error())
            .unwrap_or(false),
        StrategyError::NoUsableFields | StrategyError::Panicked(_) => false,
    }
}
