//! Woongkir Error Types
//!
//! Every failure a request can end in, each carrying the error code the
//! RajaOngkir integration has always reported.

use thiserror::Error;

/// Main error type for Woongkir operations
#[derive(Debug, Error)]
pub enum WoongkirError {
    /// The HTTP transport failed (connection refused, TLS, DNS, ...)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with an empty body
    #[error("API response is empty.")]
    EmptyResponse,

    /// The body is not JSON, or decodes to a falsy value
    #[error("API response is invalid.")]
    InvalidResponse,

    /// The envelope carries a status code other than 200
    #[error("{message}")]
    Upstream { code: String, message: String },

    /// The envelope holds neither `results` nor `result`
    #[error("Unknown error")]
    UnknownError,

    /// Invalid client configuration (bad option value, unreadable file, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request cannot be built from the supplied input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl WoongkirError {
    /// Machine readable error code
    pub fn code(&self) -> String {
        match self {
            WoongkirError::Transport(_) => "http_request_failed".to_string(),
            WoongkirError::EmptyResponse => "api_response_empty".to_string(),
            WoongkirError::InvalidResponse => "api_response_invalid".to_string(),
            WoongkirError::Upstream { code, .. } => format!("api_response_error_{}", code),
            WoongkirError::UnknownError => "unknown_error".to_string(),
            WoongkirError::Config(_) => "invalid_config".to_string(),
            WoongkirError::InvalidRequest(_) => "invalid_request".to_string(),
        }
    }

    /// Human readable message; the upstream description for API errors
    pub fn message(&self) -> String {
        match self {
            WoongkirError::Upstream { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for Woongkir operations
pub type Result<T> = std::result::Result<T, WoongkirError>;
