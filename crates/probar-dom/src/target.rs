//! Assertion targets and their resolution into candidate elements.

use crate::dom::DomQuery;
use crate::result::{DomAssertError, DomAssertResult};

/// Description used in messages for direct element targets
pub const GIVEN_ELEMENT: &str = "the given element";

/// What an assertion is evaluated against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<E> {
    /// Selector resolved against the root scope on every call
    Selector(String),
    /// An element that was already located
    Element(E),
}

impl<E> Target<E> {
    /// Create a selector target
    #[must_use]
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }

    /// Create a direct element target
    #[must_use]
    pub const fn element(element: E) -> Self {
        Self::Element(element)
    }

    /// Create a direct element target from a handle that may be absent
    ///
    /// # Errors
    ///
    /// Returns [`DomAssertError::InvalidTarget`] for `None`.
    pub fn try_element(element: Option<E>) -> DomAssertResult<Self> {
        element
            .map(Self::Element)
            .ok_or_else(|| DomAssertError::invalid_target("element handle is null"))
    }

    /// Human-readable name of the target
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Selector(s) => s,
            Self::Element(_) => GIVEN_ELEMENT,
        }
    }
}

impl<E> From<&str> for Target<E> {
    fn from(s: &str) -> Self {
        Self::Selector(s.to_string())
    }
}

impl<E> From<String> for Target<E> {
    fn from(s: String) -> Self {
        Self::Selector(s)
    }
}

/// Elements a target resolved to, in document order
pub type CandidateSet<E> = Vec<E>;

/// Resolve `target` within `root`.
///
/// Zero matches is a valid, empty candidate set. Nothing is cached: each call
/// sees the document as it is now.
///
/// # Errors
///
/// Returns [`DomAssertError::InvalidTarget`] for an empty selector, or
/// whatever the query capability reports for an unparseable one.
pub fn resolve<D: DomQuery>(
    dom: &D,
    target: &Target<D::Element>,
    root: &D::Element,
) -> DomAssertResult<CandidateSet<D::Element>> {
    let candidates = match target {
        Target::Element(element) => vec![element.clone()],
        Target::Selector(selector) => {
            if selector.trim().is_empty() {
                return Err(DomAssertError::invalid_target("selector is empty"));
            }
            dom.query_all(root, selector)?
        }
    };
    tracing::trace!(
        subject = target.description(),
        candidates = candidates.len(),
        "resolved target"
    );
    Ok(candidates)
}
