//! Text matchers for text assertions.
//!
//! Both variants are case-sensitive and unanchored: a literal matches as a
//! substring anywhere, a regex matches if it finds a match anywhere.

use std::fmt;

use regex::Regex;

use crate::result::{DomAssertError, DomAssertResult};

/// Something text content can be checked against
#[derive(Clone)]
pub enum TextMatcher {
    /// Exact substring
    Literal(String),
    /// Compiled regular expression
    Regex(Regex),
}

impl TextMatcher {
    /// Create a literal matcher
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compile a regex matcher
    ///
    /// # Errors
    ///
    /// Returns [`DomAssertError::InvalidPattern`] if the pattern does not compile.
    pub fn regex(pattern: &str) -> DomAssertResult<Self> {
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|e| DomAssertError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Check `text` against this matcher
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Literal(needle) => text.contains(needle.as_str()),
            Self::Regex(re) => re.is_match(text),
        }
    }

    /// Source text of the matcher
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Regex(re) => re.as_str(),
        }
    }
}

impl fmt::Debug for TextMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => write!(f, "Literal({s:?})"),
            Self::Regex(re) => write!(f, "Regex({:?})", re.as_str()),
        }
    }
}

/// Literal matchers print quoted, regexes between slashes
impl fmt::Display for TextMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => write!(f, "{s:?}"),
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

impl From<Regex> for TextMatcher {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

impl From<&str> for TextMatcher {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}
