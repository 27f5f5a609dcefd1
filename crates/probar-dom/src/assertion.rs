//! Assertion outcomes handed to the reporting sink.

use serde::{Deserialize, Serialize};

use crate::result::DomAssertResult;

/// Result of one assertion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionOutcome {
    /// Whether the assertion passed
    pub passed: bool,
    /// Human-readable message
    pub message: String,
}

impl AssertionOutcome {
    /// Create a passing outcome
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    /// Create a failing outcome
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Serialize to JSON
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> DomAssertResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
