//! Error types for the execflow core.
//!
//! Every fallible operation in this crate is local and synchronous. Nothing
//! here retries or talks to an external system; callers decide what to do
//! with the error.

use crate::failure::FailureType;
use std::collections::HashMap;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ExecflowError>;

/// The main error type for execflow operations.
#[derive(Debug, Error)]
pub enum ExecflowError {
    /// An accessor was called on a context that cannot answer it.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// An internal failure type has no external counterpart.
    #[error("Failure type {failure_type} is not supported by the external taxonomy")]
    UnsupportedFailureType {
        /// The internal failure type that could not be mapped.
        failure_type: FailureType,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A global tracing subscriber could not be installed.
    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

impl ExecflowError {
    /// Creates an invalid state error.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates an unsupported failure type error.
    #[must_use]
    pub fn unsupported_failure_type(failure_type: FailureType) -> Self {
        Self::UnsupportedFailureType { failure_type }
    }

    /// Returns a stable code for the error variant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidState(_) => "INVALID_STATE",
            Self::UnsupportedFailureType { .. } => "UNSUPPORTED_FAILURE_TYPE",
            Self::Serialization(_) => "SERIALIZATION",
            Self::TracingInit(_) => "TRACING_INIT",
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("code".to_string(), serde_json::json!(self.code()));
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        if let Self::UnsupportedFailureType { failure_type } = self {
            map.insert("failure_type".to_string(), serde_json::json!(failure_type));
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_message() {
        let err = ExecflowError::invalid_state("Stage not present");
        assert_eq!(err.to_string(), "Invalid state: Stage not present");
        assert_eq!(err.code(), "INVALID_STATE");
    }

    #[test]
    fn test_unsupported_failure_type_to_dict() {
        let err = ExecflowError::unsupported_failure_type(FailureType::Unknown);
        let dict = err.to_dict();

        assert_eq!(dict.get("code").unwrap(), "UNSUPPORTED_FAILURE_TYPE");
        assert_eq!(dict.get("failure_type").unwrap(), "UNKNOWN_FAILURE");
        assert!(err.to_string().contains("UNKNOWN_FAILURE"));
    }

    #[test]
    fn test_serialization_error_from() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: ExecflowError = parse.unwrap_err().into();
        assert_eq!(err.code(), "SERIALIZATION");
    }
}
