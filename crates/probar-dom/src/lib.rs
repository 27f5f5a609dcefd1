//! Probar DOM: declarative element assertions for tests
//!
//! Assert that elements exist (optionally an exact number of them), are
//! missing, have or lack focus, or carry matching text. Assertions run against
//! a root scope (the test fixture), never the whole document, and report to a
//! sink owned by the test runner.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌──────┐
//! │ DomAssertions│──►│ resolve  │──►│ predicate │──►│ compose  │──►│ sink │
//! │ (target,root)│   │ (target) │   │ (6 kinds) │   │ (message)│   │      │
//! └──────────────┘   └────┬─────┘   └─────┬─────┘   └──────────┘   └──────┘
//!                         │  DomQuery      │
//!                         └──── capability ┘
//! ```
//!
//! A malformed call (empty selector, bad options, empty text, uncompilable
//! pattern) returns `Err` and reports nothing. A condition that does not hold,
//! including an ambiguous target for single-element assertions, is reported
//! as a failing outcome so the rest of the test keeps running.

#![warn(missing_docs)]

mod assertion;
mod config;
mod dom;
mod dom_assertions;
mod html;
/// Tracing setup for tests
pub mod logging;
mod matcher;
mod message;
mod options;
/// Assertion predicates, one per assertion kind
pub mod predicate;
mod result;
mod sink;
mod target;

pub use assertion::AssertionOutcome;
pub use config::DomAssertConfig;
pub use dom::DomQuery;
pub use dom_assertions::{DomAssertions, DomContext};
pub use html::HtmlFixture;
pub use matcher::TextMatcher;
pub use message::{compose, default_message};
pub use options::ExistsOptions;
pub use predicate::PredicateOutcome;
pub use result::{DomAssertError, DomAssertResult};
pub use sink::{AssertionSummary, FailedAssertions, RecordingSink, ResultSink};
pub use target::{resolve, CandidateSet, Target, GIVEN_ELEMENT};

/// Common imports for writing DOM assertions
pub mod prelude {
    pub use super::{
        AssertionOutcome, DomAssertConfig, DomAssertError, DomAssertResult, DomAssertions,
        DomContext, DomQuery, ExistsOptions, HtmlFixture, RecordingSink, ResultSink, Target,
        TextMatcher,
    };
}
