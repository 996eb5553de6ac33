use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Backend request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{kind} not found: {key}")]
    NotFound { kind: String, key: String },

    #[error("Authentication failed: {message}")]
    AuthError { message: String },

    #[error("Backend returned {status}: {message}")]
    BackendError { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    Authentication,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StorefrontError {
    pub fn not_found(kind: &str, key: impl std::fmt::Display) -> Self {
        StorefrontError::NotFound {
            kind: kind.to_string(),
            key: key.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        StorefrontError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StorefrontError::ConfigError { .. }
            | StorefrontError::ConfigValidationError { .. }
            | StorefrontError::InvalidConfigValueError { .. }
            | StorefrontError::MissingConfigError { .. } => ErrorCategory::Configuration,
            StorefrontError::ApiError(_) | StorefrontError::BackendError { .. } => {
                ErrorCategory::Network
            }
            StorefrontError::SerializationError(_)
            | StorefrontError::ValidationError { .. }
            | StorefrontError::NotFound { .. } => ErrorCategory::Data,
            StorefrontError::AuthError { .. } => ErrorCategory::Authentication,
            StorefrontError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StorefrontError::NotFound { .. } => ErrorSeverity::Low,
            StorefrontError::ApiError(_)
            | StorefrontError::BackendError { .. }
            | StorefrontError::AuthError { .. } => ErrorSeverity::Medium,
            StorefrontError::ConfigError { .. }
            | StorefrontError::ConfigValidationError { .. }
            | StorefrontError::InvalidConfigValueError { .. }
            | StorefrontError::MissingConfigError { .. }
            | StorefrontError::ValidationError { .. }
            | StorefrontError::SerializationError(_) => ErrorSeverity::High,
            StorefrontError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the TOML configuration file and fix the reported field",
            ErrorCategory::Network => "Check the backend URL and network connectivity, then retry",
            ErrorCategory::Data => "Verify the catalog records and cart snapshot are well formed",
            ErrorCategory::Authentication => "Check the email and password and try signing in again",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StorefrontError::NotFound { kind, key } => {
                format!("Could not find {} '{}'", kind.to_lowercase(), key)
            }
            StorefrontError::AuthError { message } => message.clone(),
            StorefrontError::ApiError(_) | StorefrontError::BackendError { .. } => {
                "The store backend could not be reached".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
