//! Gateway error translation.
//!
//! Transport and HTTP failures are translated once, here, into a fixed set
//! of user-facing messages. Everything above the gateway only ever sees
//! the `Display` text of these variants.

use thiserror::Error;

/// Errors that can come out of a catalog request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// HTTP 401
    #[error("Invalid API key. Please check your configuration.")]
    InvalidApiKey,

    /// HTTP 404
    #[error("Resource not found.")]
    NotFound,

    /// HTTP 429
    #[error("Too many requests. Please try again later.")]
    RateLimited,

    /// HTTP 500, 502, 503
    #[error("Server error. Please try again later.")]
    Server { status: u16 },

    /// Any other non-success status.
    #[error("An error occurred. Please try again.")]
    Status { status: u16 },

    /// The request went out but no response came back.
    #[error("Network error. Please check your internet connection.")]
    Network,

    /// Request could not be built, body could not be decoded, or a task died.
    #[error("An unexpected error occurred.")]
    Unexpected,
}

impl GatewayError {
    /// Map a non-success HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => GatewayError::InvalidApiKey,
            404 => GatewayError::NotFound,
            429 => GatewayError::RateLimited,
            500 | 502 | 503 => GatewayError::Server { status },
            _ => GatewayError::Status { status },
        }
    }

    /// Map a reqwest failure that happened before a status was available.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16());
        }
        if err.is_timeout() || err.is_connect() || err.is_request() {
            return GatewayError::Network;
        }
        GatewayError::Unexpected
    }

    /// Short machine-readable tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            GatewayError::InvalidApiKey => "invalid_api_key",
            GatewayError::NotFound => "not_found",
            GatewayError::RateLimited => "rate_limited",
            GatewayError::Server { .. } => "server_error",
            GatewayError::Status { .. } => "http_error",
            GatewayError::Network => "network_error",
            GatewayError::Unexpected => "unexpected_error",
        }
    }
}
