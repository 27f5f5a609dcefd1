//! HTML fixture backed by `scraper`.
//!
//! Parses a fragment once and answers [`DomQuery`] calls against it. Focus is
//! not part of static HTML, so the fixture tracks it itself and tests move it
//! with [`HtmlFixture::focus`] and [`HtmlFixture::blur`].

use std::cell::Cell;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

use crate::config::DomAssertConfig;
use crate::dom::DomQuery;
use crate::result::{DomAssertError, DomAssertResult};

/// A parsed HTML document used as a test fixture
#[derive(Debug)]
pub struct HtmlFixture {
    html: Html,
    focused: Cell<Option<NodeId>>,
}

impl HtmlFixture {
    /// Parse an HTML fragment
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        Self {
            html: Html::parse_fragment(fragment),
            focused: Cell::new(None),
        }
    }

    /// The fragment's root element
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.html.root_element().id()
    }

    /// The root scope named by `config`, or the fragment root when unset
    ///
    /// # Errors
    ///
    /// Returns a config error if the config is invalid or its root selector
    /// matches nothing.
    pub fn root_scope(&self, config: &DomAssertConfig) -> DomAssertResult<NodeId> {
        config.validate()?;
        match config.root_selector.as_deref() {
            None => Ok(self.root()),
            Some(selector) => self.select_one(selector)?.ok_or_else(|| {
                DomAssertError::config(format!("root selector '{selector}' matched no element"))
            }),
        }
    }

    /// First element in the document matching `selector`
    ///
    /// # Errors
    ///
    /// Returns an error if the selector cannot be parsed.
    pub fn select_one(&self, selector: &str) -> DomAssertResult<Option<NodeId>> {
        Ok(self.query_all(&self.root(), selector)?.into_iter().next())
    }

    /// Move focus to `element`
    pub fn focus(&self, element: NodeId) {
        tracing::trace!(?element, "focus");
        self.focused.set(Some(element));
    }

    /// Focus the first element matching `selector`, returning it
    ///
    /// # Errors
    ///
    /// Returns an error if the selector cannot be parsed or matches nothing.
    pub fn focus_selector(&self, selector: &str) -> DomAssertResult<NodeId> {
        let element = self.select_one(selector)?.ok_or_else(|| {
            DomAssertError::invalid_target(format!("no element matches '{selector}'"))
        })?;
        self.focus(element);
        Ok(element)
    }

    /// Clear focus
    pub fn blur(&self) {
        self.focused.set(None);
    }

    fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }
}

impl DomQuery for HtmlFixture {
    type Element = NodeId;

    fn query_all(&self, root: &NodeId, selector: &str) -> DomAssertResult<Vec<NodeId>> {
        let parsed = Selector::parse(selector).map_err(|e| DomAssertError::InvalidSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;
        let Some(scope) = self.element(*root) else {
            return Ok(Vec::new());
        };
        Ok(scope.select(&parsed).map(|el| el.id()).collect())
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused.get()
    }

    fn text_content(&self, element: &NodeId) -> String {
        self.element(*element)
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }
}
