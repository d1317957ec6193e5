//! Error types for the esaop CLI

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for esaop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// A local precondition failed; no request was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The service answered with an unexpected status
    #[error("Service returned {status}: {body}")]
    Service { status: StatusCode, body: String },

    /// The body did not match the expected JSON shape
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
impl ApiError {
    /// Raw response body for service errors
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Service { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Access token not configured. Set ESA_AUTH or pass --token.")]
    MissingToken,

    #[error("Team not configured. Set ESA_TEAM or pass --team.")]
    MissingTeam,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
