//! # Payment Error Types
//!
//! Typed error handling for the esewa-checkout payment engine.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Message shown to clients when an unexpected error carries no text of its own
pub const DEFAULT_FAILURE_MESSAGE: &str = "Payment failed";

/// Core error type for all payment operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Missing or malformed request fields. The message is client-facing.
    #[error("{0}")]
    Validation(String),

    /// Required process-wide configuration is missing
    #[error("{0}")]
    Configuration(String),

    /// Anything else (malformed body, serialization, ...)
    #[error("{0}")]
    Unexpected(String),
}

impl PaymentError {
    /// Shorthand for `PaymentError::Validation`
    pub fn validation(message: impl Into<String>) -> Self {
        PaymentError::Validation(message.into())
    }

    /// Shorthand for `PaymentError::Unexpected`
    pub fn unexpected(message: impl Into<String>) -> Self {
        PaymentError::Unexpected(message.into())
    }

    /// Returns true if the caller can fix this by correcting its input
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaymentError::Validation(_))
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Validation(_) => 400,
            PaymentError::Configuration(_) => 500,
            PaymentError::Unexpected(_) => 500,
        }
    }

    /// Message safe to hand back to the client.
    ///
    /// Falls back to [`DEFAULT_FAILURE_MESSAGE`] when the error has no text.
    pub fn client_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            DEFAULT_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(err: serde_json::Error) -> Self {
        PaymentError::Unexpected(err.to_string())
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
