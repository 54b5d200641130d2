use std::io;

use thiserror::Error;

/// Library-wide error type for memforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Form attributes could not be interpreted.
    #[error("Invalid attributes: {0}")]
    InvalidAttributes(String),

    /// Image generation API call failed.
    #[error("{message}")]
    ImageApi { message: String, status: Option<u16> },

    /// A prompt template could not be compiled or rendered.
    #[error("Failed to render template {template}: {reason}")]
    PromptTemplate { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn image_api<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::ImageApi { message: message.into(), status }
    }
}
