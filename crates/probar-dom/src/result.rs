//! Result and error types for Probar DOM assertions.
//!
//! Every variant here is a usage error: the call was malformed and no
//! outcome reached the sink. A condition that simply does not hold is never
//! an error, it is a failing [`crate::AssertionOutcome`].

use thiserror::Error;

/// Result type for Probar DOM operations
pub type DomAssertResult<T> = Result<T, DomAssertError>;

/// Usage errors raised before any outcome is reported
#[derive(Debug, Error)]
pub enum DomAssertError {
    /// Target is an empty selector or a null element handle
    #[error("Invalid target: {message}")]
    InvalidTarget {
        /// Error message
        message: String,
    },

    /// Selector could not be parsed by the query capability
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// Selector as supplied by the caller
        selector: String,
        /// Parser message
        message: String,
    },

    /// Options object has the wrong shape
    #[error("Invalid options: {message}")]
    InvalidOptions {
        /// Error message
        message: String,
    },

    /// Required argument was empty or absent
    #[error("Missing required argument `{argument}`")]
    MissingArgument {
        /// Argument name
        argument: &'static str,
    },

    /// Pattern argument did not compile
    #[error("Invalid pattern /{pattern}/: {message}")]
    InvalidPattern {
        /// Pattern source
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DomAssertError {
    /// Create an invalid target error
    #[must_use]
    pub fn invalid_target(message: impl Into<String>) -> Self {
        Self::InvalidTarget {
            message: message.into(),
        }
    }

    /// Create an invalid options error
    #[must_use]
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
