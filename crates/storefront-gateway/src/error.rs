//! Gateway error types.
//!
//! `ServiceError` is what route handlers return; the resolver renders it as
//! a proxy response. `GatewayError` covers failures outside any route, such
//! as an event that is not a proxy event at all.

use serde_json::{Value, json};
use storefront_core::{CoreError, RepositoryError};
use thiserror::Error;

/// Errors a route handler can raise, each tied to an HTTP status.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 400 - the request is invalid.
    #[error("{0}")]
    BadRequest(String),

    /// 401 - the caller is not authenticated.
    #[error("{0}")]
    Unauthorized(String),

    /// 404 - the resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// 500 - unexpected failure.
    #[error("{0}")]
    InternalServerError(String),

    /// Any other status.
    #[error("{message}")]
    Custom { status: u16, message: String },
}

impl ServiceError {
    /// HTTP status code for this error.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) => 404,
            Self::InternalServerError(_) => 500,
            Self::Custom { status, .. } => *status,
        }
    }

    /// Client-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::InternalServerError(msg) => msg,
            Self::Custom { message, .. } => message,
        }
    }

    /// JSON body rendered for this error: `{"statusCode": 404, "message": "..."}`.
    pub fn to_json(&self) -> Value {
        json!({
            "statusCode": self.status_code(),
            "message": self.message(),
        })
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(msg)) => Self::NotFound(msg),
            CoreError::Repository(RepositoryError::AlreadyExists(msg)) => Self::Custom {
                status: 409,
                message: msg,
            },
            CoreError::Repository(RepositoryError::Storage(msg)) | CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal failure while handling request");
                Self::InternalServerError("Internal server error".to_string())
            }
            CoreError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

/// Failures that happen before or after routing.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The invocation payload is not a valid proxy event.
    #[error("Malformed proxy event: {0}")]
    MalformedEvent(#[source] serde_json::Error),

    /// The proxy response could not be serialized.
    #[error("Failed to serialize proxy response: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Errors raised while registering routes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The route pattern is not well formed.
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The same method and pattern were registered twice.
    #[error("Route already registered: {method} {pattern}")]
    Duplicate { method: String, pattern: String },
}
