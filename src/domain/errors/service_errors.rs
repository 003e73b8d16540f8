use thiserror::Error;

use crate::domain::errors::ValidationError;

/// Errors that can occur while executing a use case or calling an
/// external provider
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed domain validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// External API returned an error payload or non-success status
    #[error("{service} error: {message}")]
    Upstream { service: String, message: String },

    /// Image generation produced no usable result
    #[error("Image generation failed: {message}")]
    Generation { message: String },

    /// Video processing produced no usable asset
    #[error("Video processing failed: {message}")]
    Processing { message: String },

    /// Requested resource does not exist
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// HTTP transport failure before any response was received
    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl ServiceError {
    pub fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            service: service.into(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
