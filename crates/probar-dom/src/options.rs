//! Per-assertion options.

use serde_json::Value;

use crate::result::{DomAssertError, DomAssertResult};

/// Options for `exists`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExistsOptions {
    /// Exact number of elements expected
    pub count: Option<usize>,
}

impl ExistsOptions {
    /// Create empty options
    #[must_use]
    pub const fn new() -> Self {
        Self { count: None }
    }

    /// Require exactly `count` elements
    #[must_use]
    pub const fn count(count: usize) -> Self {
        Self { count: Some(count) }
    }

    /// Validate a loosely typed options object such as `{"count": 2}`.
    ///
    /// `null` and `{}` mean no options.
    ///
    /// # Errors
    ///
    /// Returns [`DomAssertError::InvalidOptions`] for a non-object, an unknown
    /// key, or a count that is not a non-negative integer.
    pub fn from_json(value: &Value) -> DomAssertResult<Self> {
        let map = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(map) => map,
            other => {
                return Err(DomAssertError::invalid_options(format!(
                    "expected an object, got {other}"
                )))
            }
        };
        if let Some(key) = map.keys().find(|k| k.as_str() != "count") {
            return Err(DomAssertError::invalid_options(format!(
                "unknown option `{key}`"
            )));
        }
        match map.get("count") {
            None | Some(Value::Null) => Ok(Self::new()),
            Some(count) => as_count(count)
                .map(Self::count)
                .ok_or_else(|| {
                    DomAssertError::invalid_options(format!(
                        "count must be a non-negative integer, got {count}"
                    ))
                }),
        }
    }
}

/// A non-negative integer, including integral floats such as `2.0`
fn as_count(value: &Value) -> Option<usize> {
    if let Some(n) = value.as_u64() {
        return usize::try_from(n).ok();
    }
    let f = value.as_f64()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 {
        Some(f as usize)
    } else {
        None
    }
}
