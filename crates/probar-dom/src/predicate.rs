//! Assertion predicates.
//!
//! One function per assertion kind. Each takes the resolved candidates and
//! returns whether the condition holds plus the words the composer needs to
//! explain it. Only malformed arguments produce an `Err`.

use crate::dom::DomQuery;
use crate::matcher::TextMatcher;
use crate::options::ExistsOptions;
use crate::result::{DomAssertError, DomAssertResult};

/// Raw verdict of a predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateOutcome {
    /// Whether the condition holds
    pub passed: bool,
    /// What was asserted, e.g. `exists twice`
    pub expectation: String,
    /// What was observed, e.g. `found 3 elements`
    pub detail: String,
}

impl PredicateOutcome {
    fn new(passed: bool, expectation: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            passed,
            expectation: expectation.into(),
            detail: detail.into(),
        }
    }
}

fn elements(n: usize) -> String {
    if n == 1 {
        "1 element".to_string()
    } else {
        format!("{n} elements")
    }
}

fn times(n: usize) -> String {
    match n {
        1 => "once".to_string(),
        2 => "twice".to_string(),
        _ => format!("{n} times"),
    }
}

/// The single candidate, or the detail explaining why there isn't one
fn single<E>(candidates: &[E]) -> Result<&E, String> {
    match candidates {
        [only] => Ok(only),
        _ => Err(format!(
            "expected exactly one element, found {}",
            candidates.len()
        )),
    }
}

/// At least one element, or exactly `options.count`
#[must_use]
pub fn exists<E>(candidates: &[E], options: ExistsOptions) -> PredicateOutcome {
    let found = candidates.len();
    match options.count {
        None => PredicateOutcome::new(found >= 1, "exists", format!("found {}", elements(found))),
        Some(expected) => PredicateOutcome::new(
            found == expected,
            format!("exists {}", times(expected)),
            format!("expected {}, found {found}", elements(expected)),
        ),
    }
}

/// No elements at all
#[must_use]
pub fn missing<E>(candidates: &[E]) -> PredicateOutcome {
    let found = candidates.len();
    let detail = if found == 0 {
        "found 0 elements".to_string()
    } else {
        format!("found {} unexpectedly", elements(found))
    };
    PredicateOutcome::new(found == 0, "does not exist", detail)
}

fn focus_state<D: DomQuery>(
    dom: &D,
    candidates: &[D::Element],
    want_focus: bool,
) -> PredicateOutcome {
    let expectation = if want_focus {
        "is focused"
    } else {
        "is not focused"
    };
    match single(candidates) {
        Err(detail) => PredicateOutcome::new(false, expectation, detail),
        Ok(element) => {
            let has_focus = dom.active_element().as_ref() == Some(element);
            let detail = if has_focus {
                "it is focused"
            } else {
                "it is not focused"
            };
            PredicateOutcome::new(has_focus == want_focus, expectation, detail)
        }
    }
}

/// The single candidate has focus
#[must_use]
pub fn focused<D: DomQuery>(dom: &D, candidates: &[D::Element]) -> PredicateOutcome {
    focus_state(dom, candidates, true)
}

/// The single candidate does not have focus
#[must_use]
pub fn not_focused<D: DomQuery>(dom: &D, candidates: &[D::Element]) -> PredicateOutcome {
    focus_state(dom, candidates, false)
}

fn text_check<D: DomQuery>(
    dom: &D,
    candidates: &[D::Element],
    matcher: &TextMatcher,
    expectation: String,
) -> PredicateOutcome {
    match single(candidates) {
        Err(detail) => PredicateOutcome::new(false, expectation, detail),
        Ok(element) => {
            let text = dom.text_content(element);
            PredicateOutcome::new(
                matcher.is_match(&text),
                expectation,
                format!("text is {text:?}"),
            )
        }
    }
}

/// The single candidate's text contains `text` verbatim
///
/// # Errors
///
/// Returns [`DomAssertError::MissingArgument`] if `text` is empty.
pub fn text_contains<D: DomQuery>(
    dom: &D,
    candidates: &[D::Element],
    text: &str,
) -> DomAssertResult<PredicateOutcome> {
    if text.is_empty() {
        return Err(DomAssertError::MissingArgument { argument: "text" });
    }
    let matcher = TextMatcher::literal(text);
    let expectation = format!("has text containing {matcher}");
    Ok(text_check(dom, candidates, &matcher, expectation))
}

/// The single candidate's text satisfies `matcher`
#[must_use]
pub fn text_matches<D: DomQuery>(
    dom: &D,
    candidates: &[D::Element],
    matcher: &TextMatcher,
) -> PredicateOutcome {
    let expectation = format!("has text matching {matcher}");
    text_check(dom, candidates, matcher, expectation)
}
