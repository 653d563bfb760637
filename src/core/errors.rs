//! Error types for the kenning-rs library.
//!
//! This module provides structured error types for all kenning operations.
//! Every failure in the pipeline is deterministic given the same input, so
//! errors are surfaced immediately and never retried or swallowed.

use std::io;

use thiserror::Error;

/// Main result type for kenning operations.
pub type Result<T> = std::result::Result<T, KenningError>;

/// Comprehensive error type for all kenning operations.
#[derive(Error, Debug)]
pub enum KenningError {
    /// A feature denominator (token count or sentence count) would be zero.
    ///
    /// Callers must supply text containing at least one word and at least one
    /// sentence; the core fails loudly rather than return NaN.
    #[error("empty input: {message}")]
    EmptyInput {
        /// Error description
        message: String,
        /// Feature computation that hit the empty denominator
        feature: Option<String>,
    },

    /// Invalid argument supplied to a core operation.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error description
        message: String,
        /// Expected value or shape
        expected: Option<String>,
        /// Actual value received
        actual: Option<String>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// I/O errors from corpus and signature file operations
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being serialized
        format: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl KenningError {
    /// Create a new empty-input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
            feature: None,
        }
    }

    /// Create a new empty-input error naming the feature computation
    pub fn empty_input_for(message: impl Into<String>, feature: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
            feature: Some(feature.into()),
        }
    }

    /// Create a new invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Create a new invalid-argument error with expected/actual context
    pub fn invalid_argument_with_shape(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

// Implement From traits for common error types
impl From<io::Error> for KenningError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for KenningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            format: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for KenningError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            format: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}
