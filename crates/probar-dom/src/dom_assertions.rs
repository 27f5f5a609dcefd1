//! The assertion surface.
//!
//! [`DomAssertions`] binds one target to a document, a root scope and a sink.
//! Every operation resolves the target afresh, runs its predicate, composes
//! the message and pushes exactly one outcome. A malformed call returns `Err`
//! and pushes nothing.
//!
//! ```ignore
//! let fixture = HtmlFixture::parse(r#"<h1 id="title">Welcome</h1>"#);
//! let sink = RecordingSink::new();
//! let ctx = DomContext::new(&fixture, &sink, fixture.root());
//!
//! ctx.dom("#title").exists(ExistsOptions::new(), None)?;
//! ctx.dom("#title").text_contains("Welcome", None)?;
//! ctx.dom(".spinner").missing(Some("loading finished"))?;
//! sink.verify()?;
//! ```

use serde_json::Value;

use crate::config::DomAssertConfig;
use crate::dom::DomQuery;
use crate::matcher::TextMatcher;
use crate::message::compose;
use crate::options::ExistsOptions;
use crate::predicate::{self, PredicateOutcome};
use crate::result::{DomAssertError, DomAssertResult};
use crate::sink::ResultSink;
use crate::target::{resolve, CandidateSet, Target};

/// Assertions about one target
#[derive(Debug)]
pub struct DomAssertions<'a, D: DomQuery, S> {
    target: Target<D::Element>,
    root: D::Element,
    dom: &'a D,
    sink: &'a S,
    log_outcomes: bool,
}

impl<'a, D: DomQuery, S: ResultSink> DomAssertions<'a, D, S> {
    /// Bind `target` to a document, root scope and sink
    #[must_use]
    pub fn new(
        dom: &'a D,
        sink: &'a S,
        target: impl Into<Target<D::Element>>,
        root: D::Element,
    ) -> Self {
        Self {
            target: target.into(),
            root,
            dom,
            sink,
            log_outcomes: true,
        }
    }

    /// Apply logging settings from `config`
    #[must_use]
    pub fn with_config(mut self, config: &DomAssertConfig) -> Self {
        self.log_outcomes = config.log_outcomes;
        self
    }

    /// The bound target
    #[must_use]
    pub fn target(&self) -> &Target<D::Element> {
        &self.target
    }

    /// Assert the target matches at least one element, or exactly
    /// `options.count` elements.
    ///
    /// # Errors
    ///
    /// Returns a usage error for an invalid target.
    pub fn exists(&self, options: ExistsOptions, message: Option<&str>) -> DomAssertResult<()> {
        let candidates = self.candidates("exists")?;
        self.report("exists", &predicate::exists(&candidates, options), message);
        Ok(())
    }

    /// [`Self::exists`] with a loosely typed options object like `{"count": 2}`
    ///
    /// # Errors
    ///
    /// Returns a usage error for invalid options or an invalid target.
    pub fn exists_json(&self, options: &Value, message: Option<&str>) -> DomAssertResult<()> {
        let options = ExistsOptions::from_json(options).inspect_err(|e| self.usage("exists", e))?;
        self.exists(options, message)
    }

    /// Assert the target matches no element
    ///
    /// # Errors
    ///
    /// Returns a usage error for an invalid target.
    pub fn missing(&self, message: Option<&str>) -> DomAssertResult<()> {
        let candidates = self.candidates("missing")?;
        self.report("missing", &predicate::missing(&candidates), message);
        Ok(())
    }

    /// Assert the target is a single element that currently has focus
    ///
    /// # Errors
    ///
    /// Returns a usage error for an invalid target.
    pub fn focused(&self, message: Option<&str>) -> DomAssertResult<()> {
        let candidates = self.candidates("focused")?;
        self.report(
            "focused",
            &predicate::focused(self.dom, &candidates),
            message,
        );
        Ok(())
    }

    /// Assert the target is a single element that does not have focus
    ///
    /// # Errors
    ///
    /// Returns a usage error for an invalid target.
    pub fn not_focused(&self, message: Option<&str>) -> DomAssertResult<()> {
        let candidates = self.candidates("not_focused")?;
        self.report(
            "not_focused",
            &predicate::not_focused(self.dom, &candidates),
            message,
        );
        Ok(())
    }

    /// Assert the target's text content contains `text`
    ///
    /// # Errors
    ///
    /// Returns a usage error for empty `text` or an invalid target.
    pub fn text_contains(&self, text: &str, message: Option<&str>) -> DomAssertResult<()> {
        let candidates = self.candidates("text_contains")?;
        let outcome = predicate::text_contains(self.dom, &candidates, text)
            .inspect_err(|e| self.usage("text_contains", e))?;
        self.report("text_contains", &outcome, message);
        Ok(())
    }

    /// Assert the target's text content matches the regular expression `pattern`
    ///
    /// # Errors
    ///
    /// Returns a usage error if `pattern` does not compile or the target is invalid.
    pub fn text_matches(&self, pattern: &str, message: Option<&str>) -> DomAssertResult<()> {
        let matcher = TextMatcher::regex(pattern).inspect_err(|e| self.usage("text_matches", e))?;
        self.text_matches_with(&matcher, message)
    }

    /// Assert the target's text content satisfies `matcher`
    ///
    /// # Errors
    ///
    /// Returns a usage error for an invalid target.
    pub fn text_matches_with(
        &self,
        matcher: &TextMatcher,
        message: Option<&str>,
    ) -> DomAssertResult<()> {
        let candidates = self.candidates("text_matches")?;
        self.report(
            "text_matches",
            &predicate::text_matches(self.dom, &candidates, matcher),
            message,
        );
        Ok(())
    }

    fn candidates(&self, assertion: &'static str) -> DomAssertResult<CandidateSet<D::Element>> {
        resolve(self.dom, &self.target, &self.root).inspect_err(|e| self.usage(assertion, e))
    }

    fn usage(&self, assertion: &'static str, error: &DomAssertError) {
        tracing::warn!(
            subject = self.target.description(),
            assertion,
            %error,
            "assertion usage error"
        );
    }

    fn report(&self, assertion: &'static str, outcome: &PredicateOutcome, message: Option<&str>) {
        let result = compose(self.target.description(), outcome, message);
        if self.log_outcomes {
            tracing::debug!(
                subject = self.target.description(),
                assertion,
                passed = result.passed,
                outcome = %result.message,
                "assertion evaluated"
            );
        }
        self.sink.push_result(result);
    }
}

/// A test context: document, default root scope and sink
///
/// Hands out [`DomAssertions`] per target, like `assert.dom(target)`.
#[derive(Debug)]
pub struct DomContext<'a, D: DomQuery, S> {
    dom: &'a D,
    sink: &'a S,
    root: D::Element,
    config: DomAssertConfig,
}

impl<'a, D: DomQuery, S: ResultSink> DomContext<'a, D, S> {
    /// Create a context with the default config
    #[must_use]
    pub fn new(dom: &'a D, sink: &'a S, root: D::Element) -> Self {
        Self {
            dom,
            sink,
            root,
            config: DomAssertConfig::default(),
        }
    }

    /// Use `config` for every assertion handed out.
    ///
    /// A configured `root_selector` narrows the context root to the first
    /// element it matches inside the current root.
    ///
    /// # Errors
    ///
    /// Returns a config error if `config` is invalid or its root selector
    /// matches nothing, or the query error for an unparseable selector.
    pub fn with_config(mut self, config: DomAssertConfig) -> DomAssertResult<Self> {
        config.validate()?;
        if let Some(selector) = config.root_selector.as_deref() {
            self.root = self
                .dom
                .query_all(&self.root, selector)?
                .into_iter()
                .next()
                .ok_or_else(|| {
                    DomAssertError::config(format!(
                        "root selector '{selector}' matched no element"
                    ))
                })?;
        }
        self.config = config;
        Ok(self)
    }

    /// Assertions for `target` within the context root
    #[must_use]
    pub fn dom(&self, target: impl Into<Target<D::Element>>) -> DomAssertions<'a, D, S> {
        self.dom_in(target, self.root.clone())
    }

    /// Assertions for `target` within an explicit `root`
    #[must_use]
    pub fn dom_in(
        &self,
        target: impl Into<Target<D::Element>>,
        root: D::Element,
    ) -> DomAssertions<'a, D, S> {
        DomAssertions::new(self.dom, self.sink, target, root).with_config(&self.config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::html::HtmlFixture;
    use crate::sink::RecordingSink;
    use serde_json::json;

    const FIXTURE: &str = r#"
        <div class="a">hi</div><div class="a">bye</div>
        <input id="f">
        <h1 id="title">Welcome home</h1>
    "#;

    mod exists_tests {
        use super::*;

        #[test]
        fn test_exists_many() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom(".a").exists(ExistsOptions::new(), None).unwrap();
            let outcome = sink.last().unwrap();
            assert!(outcome.passed);
            assert_eq!(outcome.message, "Element .a exists: found 2 elements");
        }

        #[test]
        fn test_exists_count_mismatch() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom(".a").exists(ExistsOptions::count(1), None).unwrap();
            let outcome = sink.last().unwrap();
            assert!(!outcome.passed);
            assert_eq!(
                outcome.message,
                "Element .a exists once: expected 1 element, found 2"
            );
        }

        #[test]
        fn test_exists_json_invalid_pushes_nothing() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            let err = ctx.dom(".a").exists_json(&json!({"count": -2}), None).unwrap_err();
            assert!(matches!(err, DomAssertError::InvalidOptions { .. }));
            assert!(sink.is_empty());
        }

        #[test]
        fn test_exists_json_valid() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom(".a").exists_json(&json!({"count": 2}), None).unwrap();
            assert!(sink.last().unwrap().passed);
        }
    }

    mod missing_tests {
        use super::*;

        #[test]
        fn test_missing() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom(".nope").missing(None).unwrap();
            ctx.dom(".a").missing(None).unwrap();
            let outcomes = sink.outcomes();
            assert!(outcomes[0].passed);
            assert!(!outcomes[1].passed);
            assert_eq!(
                outcomes[1].message,
                "Element .a does not exist: found 2 elements unexpectedly"
            );
        }
    }

    mod focus_tests {
        use super::*;

        #[test]
        fn test_focused_after_focus() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            let input = ctx.dom("#f");

            input.focused(None).unwrap();
            let before = sink.last().unwrap();
            assert!(!before.passed);
            assert_eq!(before.message, "Element #f is focused: it is not focused");

            fixture.focus_selector("#f").unwrap();
            input.focused(None).unwrap();
            assert!(sink.last().unwrap().passed);
        }

        #[test]
        fn test_not_focused_direct_element() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            let title = fixture.select_one("#title").unwrap().unwrap();
            ctx.dom(Target::element(title)).not_focused(None).unwrap();
            let outcome = sink.last().unwrap();
            assert!(outcome.passed);
            assert_eq!(
                outcome.message,
                "Element the given element is not focused: it is not focused"
            );
        }

        #[test]
        fn test_focused_ambiguous_is_failure_not_error() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom(".a").focused(None).unwrap();
            let outcome = sink.last().unwrap();
            assert!(!outcome.passed);
            assert!(outcome.message.contains(".a"));
            assert!(outcome.message.contains("found 2"));
        }
    }

    mod text_tests {
        use super::*;

        #[test]
        fn test_text_contains() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom("#title").text_contains("Welcome", None).unwrap();
            assert_eq!(
                sink.last().unwrap().message,
                "Element #title has text containing \"Welcome\": text is \"Welcome home\""
            );
            assert!(sink.all_passed());
        }

        #[test]
        fn test_text_contains_empty_is_usage_error() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            let err = ctx.dom("#title").text_contains("", None).unwrap_err();
            assert!(matches!(err, DomAssertError::MissingArgument { .. }));
            assert!(sink.is_empty());
        }

        #[test]
        fn test_text_matches() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom("#title").text_matches(r"^Wel\w+", None).unwrap();
            ctx.dom("#title").text_matches(r"^home", None).unwrap();
            let outcomes = sink.outcomes();
            assert!(outcomes[0].passed);
            assert!(!outcomes[1].passed);
        }

        #[test]
        fn test_text_matches_invalid_pattern() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            let err = ctx.dom("#title").text_matches("[", None).unwrap_err();
            assert!(matches!(err, DomAssertError::InvalidPattern { .. }));
            assert!(sink.is_empty());
        }

        #[test]
        fn test_text_matches_ambiguous_is_failure() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom(".a").text_matches("h", None).unwrap();
            assert_eq!(sink.len(), 1);
            let outcome = sink.last().unwrap();
            assert!(!outcome.passed);
            assert!(outcome.message.contains(".a"));
            assert!(outcome.message.contains("found 2"));
        }

        #[test]
        fn test_text_matches_absent_is_failure() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom(".nope")
                .text_matches_with(&TextMatcher::regex("h").unwrap(), None)
                .unwrap();
            assert_eq!(sink.len(), 1);
            let outcome = sink.last().unwrap();
            assert!(!outcome.passed);
            assert!(outcome.message.contains("found 0"));
        }

        #[test]
        fn test_text_contains_absent_is_failure() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom(".nope").text_contains("hi", None).unwrap();
            assert_eq!(sink.len(), 1);
            let outcome = sink.last().unwrap();
            assert!(!outcome.passed);
            assert!(outcome.message.contains("found 0"));
        }

        #[test]
        fn test_text_contains_empty_on_ambiguous_target_is_usage_error() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            let err = ctx.dom(".a").text_contains("", None).unwrap_err();
            assert!(matches!(err, DomAssertError::MissingArgument { argument: "text" }));
            assert!(sink.is_empty());
        }

        #[test]
        fn test_text_matches_with_literal_matcher() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom("#title")
                .text_matches_with(&TextMatcher::literal("me ho"), None)
                .unwrap();
            assert!(sink.last().unwrap().passed);
        }
    }

    mod message_tests {
        use super::*;

        #[test]
        fn test_override_message() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            ctx.dom(".nope")
                .exists(ExistsOptions::new(), Some("spinner is shown"))
                .unwrap();
            let outcome = sink.last().unwrap();
            assert!(!outcome.passed);
            assert_eq!(outcome.message, "spinner is shown");
        }
    }

    mod usage_tests {
        use super::*;

        #[test]
        fn test_empty_selector_pushes_nothing() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            let err = ctx.dom("").missing(None).unwrap_err();
            assert!(matches!(err, DomAssertError::InvalidTarget { .. }));
            assert!(sink.is_empty());
        }

        #[test]
        fn test_dom_in_explicit_root() {
            let fixture = HtmlFixture::parse(r#"<div id="a"><p>x</p></div><p>y</p>"#);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root());
            let scope = fixture.select_one("#a").unwrap().unwrap();
            ctx.dom_in("p", scope).exists(ExistsOptions::count(1), None).unwrap();
            ctx.dom("p").exists(ExistsOptions::count(2), None).unwrap();
            assert!(sink.all_passed());
        }

        #[test]
        fn test_config_disables_logging_only() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root())
                .with_config(DomAssertConfig::new().with_log_outcomes(false))
                .unwrap();
            ctx.dom("#f").exists(ExistsOptions::new(), None).unwrap();
            assert_eq!(sink.len(), 1);
        }

        #[test]
        fn test_config_root_selector_scopes_context() {
            let fixture = HtmlFixture::parse(
                r#"<header><div class="a">x</div></header><main id="fixture"><div class="a">hi</div></main>"#,
            );
            let sink = RecordingSink::new();
            let ctx = DomContext::new(&fixture, &sink, fixture.root())
                .with_config(DomAssertConfig::new().with_root_selector("#fixture"))
                .unwrap();
            ctx.dom(".a").exists(ExistsOptions::count(1), None).unwrap();
            ctx.dom("header").missing(None).unwrap();
            assert!(sink.all_passed());
        }

        #[test]
        fn test_config_root_selector_no_match() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let err = DomContext::new(&fixture, &sink, fixture.root())
                .with_config(DomAssertConfig::new().with_root_selector("#nowhere"))
                .unwrap_err();
            assert!(matches!(err, DomAssertError::Config { .. }));
        }

        #[test]
        fn test_config_empty_root_selector_rejected() {
            let fixture = HtmlFixture::parse(FIXTURE);
            let sink = RecordingSink::new();
            let err = DomContext::new(&fixture, &sink, fixture.root())
                .with_config(DomAssertConfig::new().with_root_selector(""))
                .unwrap_err();
            assert!(matches!(err, DomAssertError::Config { .. }));
        }
    }
}
