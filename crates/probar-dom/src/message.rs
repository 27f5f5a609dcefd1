//! Outcome message composition.

use crate::assertion::AssertionOutcome;
use crate::predicate::PredicateOutcome;

/// Default wording for a predicate verdict on the target named `description`
#[must_use]
pub fn default_message(description: &str, outcome: &PredicateOutcome) -> String {
    format!(
        "Element {description} {}: {}",
        outcome.expectation, outcome.detail
    )
}

/// Build the outcome reported to the sink.
///
/// A non-empty `override_message` replaces the default text. `passed` always
/// comes from the predicate.
#[must_use]
pub fn compose(
    description: &str,
    outcome: &PredicateOutcome,
    override_message: Option<&str>,
) -> AssertionOutcome {
    let message = match override_message {
        Some(custom) if !custom.is_empty() => custom.to_string(),
        _ => default_message(description, outcome),
    };
    AssertionOutcome {
        passed: outcome.passed,
        message,
    }
}
