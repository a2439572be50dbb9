//! Error types for the chain client.
//!
//! # Design
//! Transport failures and non-2xx statuses are not errors here: the
//! dispatcher absorbs them into `Outcome::Absent`. `ApiError` only covers
//! the cases that must fail loudly: a payload that cannot be encoded, and a
//! JSON-typed success body that cannot be decoded.

use thiserror::Error;

/// Errors returned by terminal chain calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A 2xx response declared `application/json` but its body is not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// Failure reported by a `Transport` when no usable response came back
/// (DNS, connection refused, TLS, timeout, truncated body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_messages_name_the_direction() {
        let err = ApiError::Deserialization("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "deserialization failed: expected value at line 1");
        let err = ApiError::Serialization("key must be a string".to_string());
        assert_eq!(err.to_string(), "serialization failed: key must be a string");
    }

    #[test]
    fn transport_error_display() {
        let err = TransportError::new("connection refused");
        assert_eq!(err.to_string(), "transport failure: connection refused");
    }
}
