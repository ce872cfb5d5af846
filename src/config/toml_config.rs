use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub rate_limit: RateLimitSection,
    pub remote: RemoteSection,
    pub logging: LoggingSection,
    /// 實際讀到的設定檔，使用預設值時為 None
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// 一天
pub const MAX_WINDOW_SECONDS: u64 = 86_400;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitSection {
    pub max_requests: usize,
    pub window_seconds: u64,
}

impl Default for RateLimitSection {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSection {
    pub enabled: bool,
    pub endpoint: String,
    pub country_hint: String,
    pub timeout_seconds: u64,
    pub retry_attempts: u32,
    pub retry_delay_ms: u64,
    pub user_agent: String,
}

impl Default for RemoteSection {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://calltracer.in".to_string(),
            country_hint: "IN".to_string(),
            timeout_seconds: 10,
            retry_attempts: 3,
            retry_delay_ms: 500,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub json: bool,
}

impl LookupConfig {
    /// 載入設定檔並套用環境變數覆寫
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file_or_default(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// 檔案不存在時使用預設值，`source` 維持 None
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.source = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| LookupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRACER_ENDPOINT})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 部署環境沿用的覆寫變數
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("RATE_LIMIT_REQUESTS") {
            self.rate_limit.max_requests = parse_override("RATE_LIMIT_REQUESTS", &value)?;
        }
        if let Some(value) = lookup("RATE_LIMIT_WINDOW") {
            self.rate_limit.window_seconds = parse_override("RATE_LIMIT_WINDOW", &value)?;
        }
        if let Some(value) = lookup("REQUEST_TIMEOUT") {
            self.remote.timeout_seconds = parse_override("REQUEST_TIMEOUT", &value)?;
        }
        if let Some(value) = lookup("MAX_RETRIES") {
            self.remote.retry_attempts = parse_override("MAX_RETRIES", &value)?;
        }
        Ok(())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_number(
            "rate_limit.max_requests",
            self.rate_limit.max_requests as u64,
            1,
        )?;
        validation::validate_range(
            "rate_limit.window_seconds",
            self.rate_limit.window_seconds,
            1,
            MAX_WINDOW_SECONDS,
        )?;

        // 關閉遠端查詢時其餘欄位用不到
        if !self.remote.enabled {
            return Ok(());
        }

        if self.remote.endpoint.trim().is_empty() {
            return Err(LookupError::MissingConfigError {
                field: "remote.endpoint".to_string(),
            });
        }
        validation::validate_url("remote.endpoint", &self.remote.endpoint)?;
        validation::validate_country_hint("remote.country_hint", &self.remote.country_hint)?;
        validation::validate_range("remote.timeout_seconds", self.remote.timeout_seconds, 1, 120)?;
        validation::validate_range("remote.retry_attempts", self.remote.retry_attempts, 0, 10)?;
        validation::validate_non_empty_string("remote.user_agent", &self.remote.user_agent)?;

        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| LookupError::InvalidConfigValueError {
            field: name.to_string(),
            value: value.to_string(),
            reason: "Expected a non-negative integer".to_string(),
        })
}

impl ConfigProvider for LookupConfig {
    fn max_requests(&self) -> usize {
        self.rate_limit.max_requests
    }

    fn rate_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit.window_seconds)
    }

    fn remote_enabled(&self) -> bool {
        self.remote.enabled
    }

    fn remote_endpoint(&self) -> &str {
        &self.remote.endpoint
    }

    fn country_hint(&self) -> &str {
        &self.remote.country_hint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.remote.timeout_seconds)
    }

    fn retry_attempts(&self) -> u32 {
        self.remote.retry_attempts
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.remote.retry_delay_ms)
    }

    fn user_agent(&self) -> &str {
        &self.remote.user_agent
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
