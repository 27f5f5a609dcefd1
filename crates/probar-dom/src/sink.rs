//! Reporting sinks.
//!
//! The test runner owns pass/fail bookkeeping; assertions only push outcomes.
//! [`RecordingSink`] is the in-process runner side: it keeps every outcome in
//! order and can fail the test at the end with all messages at once.

use std::cell::RefCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assertion::AssertionOutcome;

/// Receiver of assertion outcomes
pub trait ResultSink {
    /// Record one outcome
    fn push_result(&self, outcome: AssertionOutcome);
}

/// Sink that records outcomes in push order
#[derive(Debug, Default)]
pub struct RecordingSink {
    outcomes: RefCell<Vec<AssertionOutcome>>,
}

impl RecordingSink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded outcomes
    #[must_use]
    pub fn outcomes(&self) -> Vec<AssertionOutcome> {
        self.outcomes.borrow().clone()
    }

    /// Most recent outcome
    #[must_use]
    pub fn last(&self) -> Option<AssertionOutcome> {
        self.outcomes.borrow().last().cloned()
    }

    /// Number of recorded outcomes
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.borrow().len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.borrow().is_empty()
    }

    /// Check if every recorded outcome passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.borrow().iter().all(|o| o.passed)
    }

    /// Get a summary of the outcomes
    #[must_use]
    pub fn summary(&self) -> AssertionSummary {
        let outcomes = self.outcomes.borrow();
        let passed = outcomes.iter().filter(|o| o.passed).count();
        AssertionSummary {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
        }
    }

    /// Verify all outcomes passed
    ///
    /// # Errors
    ///
    /// Returns every failing message if any outcome failed
    pub fn verify(&self) -> Result<(), FailedAssertions> {
        let failures: Vec<String> = self
            .outcomes
            .borrow()
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.message.clone())
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(FailedAssertions { failures })
        }
    }

    /// Clear all recorded outcomes
    pub fn clear(&self) {
        self.outcomes.borrow_mut().clear();
    }
}

impl ResultSink for RecordingSink {
    fn push_result(&self, outcome: AssertionOutcome) {
        self.outcomes.borrow_mut().push(outcome);
    }
}

/// Summary of recorded outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionSummary {
    /// Outcomes recorded
    pub total: usize,
    /// Outcomes that passed
    pub passed: usize,
    /// Outcomes that failed
    pub failed: usize,
}

/// Failing outcomes collected by [`RecordingSink::verify`]
#[derive(Debug, Clone)]
pub struct FailedAssertions {
    /// Failure messages in push order
    pub failures: Vec<String>,
}

impl fmt::Display for FailedAssertions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} assertion(s) failed:", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {failure}", i + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for FailedAssertions {}
