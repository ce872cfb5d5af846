use crate::domain::model::QueryKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid {kind} format: {input}")]
    InvalidFormat { kind: QueryKind, input: String },

    #[error("Rate limit exceeded, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("All {attempted} tracing strategies failed")]
    Exhausted { attempted: usize },

    #[error("No registration pattern matched: {input}")]
    NotFound { input: String },

    #[error("Lookup cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Admission,
    Lookup,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::InvalidFormat { .. } | LookupError::NotFound { .. } => {
                ErrorCategory::Input
            }
            LookupError::RateLimited { .. } => ErrorCategory::Admission,
            LookupError::Exhausted { .. } | LookupError::Cancelled => ErrorCategory::Lookup,
            LookupError::ConfigError { .. }
            | LookupError::ConfigValidationError { .. }
            | LookupError::InvalidConfigValueError { .. }
            | LookupError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LookupError::IoError(_) | LookupError::HttpClientError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Admission => ErrorSeverity::Low,
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::InvalidFormat {
                kind: QueryKind::Phone,
                ..
            } => "Invalid phone number format.".to_string(),
            LookupError::InvalidFormat {
                kind: QueryKind::Vehicle,
                ..
            }
            | LookupError::NotFound { .. } => "Invalid vehicle registration format.".to_string(),
            LookupError::RateLimited { retry_after_secs } => format!(
                "Rate limit exceeded. Please wait {}s before making another request.",
                retry_after_secs
            ),
            LookupError::Exhausted { .. } => {
                "Unable to trace this phone number. Please try again later.".to_string()
            }
            LookupError::Cancelled => "Lookup cancelled.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LookupError::InvalidFormat {
                kind: QueryKind::Phone,
                ..
            } => "Use international format (+1234567890) or local format (9876543210)",
            LookupError::InvalidFormat {
                kind: QueryKind::Vehicle,
                ..
            }
            | LookupError::NotFound { .. } => "Use a format like MH01AB1234 or DL05CD5678",
            LookupError::RateLimited { .. } => "Wait for the rate limit window to pass",
            LookupError::Exhausted { .. } => "Check network connectivity and retry later",
            LookupError::Cancelled => "Run the lookup again",
            LookupError::IoError(_) => "Check that the file exists and is readable",
            LookupError::HttpClientError(_) => "Check TLS and proxy settings",
            _ => "Fix the configuration file and try again",
        }
    }
}

/// 單一追蹤策略的失敗原因，只在 resolver 內部使用
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("response contained no usable fields")]
    NoUsableFields,

    #[error("strategy panicked: {0}")]
    Panicked(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;
pub type StrategyResult<T> = std::result::Result<T, StrategyError>;
