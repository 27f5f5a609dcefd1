//! DOM query capability consumed by the assertion pipeline.
//!
//! The assertions never walk a tree themselves. Anything that can answer
//! these three questions can be asserted against: a parsed HTML fixture, a
//! headless browser bridge, or a hand-built mock.

use std::fmt::Debug;

use crate::result::DomAssertResult;

/// Trusted access to a document tree.
pub trait DomQuery {
    /// Handle to a single element. Equality means "same node".
    type Element: Clone + PartialEq + Debug;

    /// All descendants of `root` matching `selector`, in document order.
    ///
    /// `root` itself is never part of the result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DomAssertError::InvalidSelector`] if the selector
    /// cannot be parsed.
    fn query_all(&self, root: &Self::Element, selector: &str)
        -> DomAssertResult<Vec<Self::Element>>;

    /// The element that currently has focus, if any
    fn active_element(&self) -> Option<Self::Element>;

    /// Text content of `element`, exactly as the document yields it
    fn text_content(&self, element: &Self::Element) -> String;
}
