//! Assertion context for Rein test functions.
//!
//! Every test function receives a `&mut Assertions` handle owned by the current run. A false assertion is recorded as
//! an [`AssertionFailure`] and execution continues; nothing here panics.
//!
//! Test code imports the helpers via:
//! - `use rein::{check, testing::Assertions};`

use std::panic::Location;

/// A recorded assertion that evaluated to false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// Source file of the assertion call-site
    pub file: String,
    /// Line of the assertion call-site
    pub line: u32,
    /// Expression text, empty when the call-site did not capture one
    pub expression: String,
    /// Optional human-readable description
    pub description: Option<String>,
}

impl AssertionFailure {
    pub fn new(
        file: impl Into<String>,
        line: u32,
        expression: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            expression: expression.into(),
            description,
        }
    }
}

/// Collects assertion failures for one run.
#[derive(Debug, Default)]
pub struct Assertions {
    failures: Vec<AssertionFailure>,
}

impl Assertions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assert that a condition is true.
    ///
    /// Returns `condition`. When false, a failure with the caller's location is recorded.
    #[track_caller]
    pub fn assert(&mut self, condition: bool) -> bool {
        self.record_at(Location::caller(), condition, "", None)
    }

    /// Assert that a condition is true, attaching a description to the failure.
    #[track_caller]
    pub fn assert_with(&mut self, condition: bool, description: impl Into<String>) -> bool {
        self.record_at(Location::caller(), condition, "", Some(description.into()))
    }

    /// Record the outcome of an assertion whose expression text is known.
    ///
    /// This is what [`check!`](crate::check) expands to.
    #[track_caller]
    pub fn record(&mut self, condition: bool, expression: &str, description: Option<String>) -> bool {
        self.record_at(Location::caller(), condition, expression, description)
    }

    fn record_at(
        &mut self,
        location: &Location<'_>,
        condition: bool,
        expression: &str,
        description: Option<String>,
    ) -> bool {
        if !condition {
            tracing::trace!(file = location.file(), line = location.line(), "assertion failed");
            self.failures.push(AssertionFailure::new(
                location.file(),
                location.line(),
                expression,
                description,
            ));
        }
        condition
    }

    /// Failures recorded so far, in encounter order.
    pub fn failures(&self) -> &[AssertionFailure] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<AssertionFailure> {
        self.failures
    }

    /// True if no assertion has failed yet.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Assert a boolean expression, recording its source text on failure.
///
/// ```ignore
/// check!(t, total == 3);
/// check!(t, total == 3, "x must equal y");
/// ```
#[macro_export]
macro_rules! check {
    ($t:expr, $cond:expr $(,)?) => {
        $t.record($cond, stringify!($cond), ::core::option::Option::None)
    };
    ($t:expr, $cond:expr, $desc:expr $(,)?) => {
        $t.record(
            $cond,
            stringify!($cond),
            ::core::option::Option::Some(::std::string::String::from($desc)),
        )
    };
}
