//! Configuration for DOM assertions.

use serde::{Deserialize, Serialize};

use crate::result::{DomAssertError, DomAssertResult};

/// Configuration shared by the assertions of a test context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomAssertConfig {
    /// Selector of the fixture root (`None` = whole document)
    pub root_selector: Option<String>,
    /// Emit a tracing event for every outcome
    pub log_outcomes: bool,
}

impl Default for DomAssertConfig {
    fn default() -> Self {
        Self {
            root_selector: None,
            log_outcomes: true,
        }
    }
}

impl DomAssertConfig {
    /// Create a new config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope selector targets to the element matching `selector`
    #[must_use]
    pub fn with_root_selector(mut self, selector: impl Into<String>) -> Self {
        self.root_selector = Some(selector.into());
        self
    }

    /// Enable/disable per-outcome logging
    #[must_use]
    pub const fn with_log_outcomes(mut self, enabled: bool) -> Self {
        self.log_outcomes = enabled;
        self
    }

    /// Parse from YAML and validate
    ///
    /// # Errors
    ///
    /// Returns error if the YAML is malformed or the config is invalid
    pub fn from_yaml(yaml: &str) -> DomAssertResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from JSON and validate
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed or the config is invalid
    pub fn from_json(json: &str) -> DomAssertResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config is usable
    ///
    /// # Errors
    ///
    /// Returns a config error for an empty root selector
    pub fn validate(&self) -> DomAssertResult<()> {
        match self.root_selector.as_deref() {
            Some(s) if s.trim().is_empty() => {
                Err(DomAssertError::config("root_selector must not be empty"))
            }
            _ => Ok(()),
        }
    }
}
