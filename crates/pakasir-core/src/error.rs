//! # Error Types
//!
//! Typed error handling for the Pakasir SDK.
//! All fallible operations return `Result<T, PakasirError>`.

use thiserror::Error;

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum PakasirError {
    /// Configuration errors (missing project slug or API key)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Order id rejected before any network access
    #[error("Invalid order ID: {0}")]
    InvalidOrderId(String),

    /// Amount rejected before any network access
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Payment method / option combination rejected
    #[error("Invalid payment method: {0}")]
    InvalidMethod(String),

    /// Network-level failure talking to the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx HTTP response from the gateway
    #[error("Request failed with status {status} {status_text}, URL: {url}, Method: {method}, Body: {body}")]
    Http {
        status: u16,
        status_text: String,
        method: String,
        url: String,
        body: String,
    },

    /// Serialization/deserialization error (request body or 2xx response)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A gateway call that failed, labeled with the operation that issued it
    #[error("Failed to {action}: {source}")]
    Operation {
        action: &'static str,
        #[source]
        source: Box<PakasirError>,
    },
}

impl PakasirError {
    /// Wrap a transport-side error with the operation that issued it
    pub fn operation(action: &'static str, source: PakasirError) -> Self {
        PakasirError::Operation {
            action,
            source: Box::new(source),
        }
    }

    /// Returns true if this error was raised locally, before any network call
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PakasirError::Configuration(_)
                | PakasirError::InvalidOrderId(_)
                | PakasirError::InvalidAmount(_)
                | PakasirError::InvalidMethod(_)
        )
    }

    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            PakasirError::Network(_) => true,
            PakasirError::Http { status, .. } => *status >= 500,
            PakasirError::Operation { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// The HTTP status carried by this error, looking through operation wrappers
    pub fn http_status(&self) -> Option<u16> {
        match self {
            PakasirError::Http { status, .. } => Some(*status),
            PakasirError::Operation { source, .. } => source.http_status(),
            _ => None,
        }
    }
}

/// Result type alias for gateway operations
pub type PakasirResult<T> = Result<T, PakasirError>;
