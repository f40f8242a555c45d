// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! The matcher contract and its combinators.
//!
//! This module provides the pieces everything else composes:
//!
//! - [`Matcher`] trait - "given a value, produce a [`MatcherResult`]"
//! - [`MatcherResult`] - pass/fail plus the messages for both polarities
//! - [`never_null`] - lifts a matcher into a null-safe one over `Option<&T>`
//! - [`should`] / [`should_not`] - interpret a result under positive or
//!   negated polarity
//!
//! # Example
//!
//! ```rust
//! use kindcheck::assertions::matcher::{should, should_not, Matcher, MatcherResult};
//!
//! struct IsEven;
//!
//! impl Matcher<i32> for IsEven {
//!     fn test(&self, value: &i32) -> MatcherResult {
//!         MatcherResult::new(
//!             value % 2 == 0,
//!             format!("expected {value} to be even"),
//!             format!("expected {value} to be odd"),
//!         )
//!     }
//! }
//!
//! assert!(should(&4, IsEven).is_ok());
//! assert!(should_not(&3, IsEven).is_ok());
//! ```

use crate::error::{Error, Result};

/// The outcome of one matcher evaluation.
///
/// Carries the messages for both polarities: `failure_message` explains a
/// check that was expected to pass and did not, `negated_failure_message`
/// explains a check that was expected to fail and passed. Both are fully
/// formed strings at construction time, since either may be discarded.
#[derive(Clone, Debug)]
pub struct MatcherResult {
    passed: bool,
    failure_message: String,
    negated_failure_message: String,
}

impl MatcherResult {
    /// Create a result from a verdict and both messages.
    pub fn new(
        passed: bool,
        failure_message: impl Into<String>,
        negated_failure_message: impl Into<String>,
    ) -> Self {
        Self {
            passed,
            failure_message: failure_message.into(),
            negated_failure_message: negated_failure_message.into(),
        }
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Message for a check that was expected to pass and did not.
    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    /// Message for a check that was expected to fail and passed.
    pub fn negated_failure_message(&self) -> &str {
        &self.negated_failure_message
    }
}

/// A matcher for testing values.
///
/// Matchers are stateless predicates: repeated [`test`](Matcher::test) calls
/// with equal inputs yield equal results, and no reference to the checked
/// value is retained past the call. A matcher is a value, not a singleton -
/// construct one ad hoc to capture parameters such as a target type or a
/// reference.
///
/// # Implementing Custom Matchers
///
/// ```rust
/// use kindcheck::assertions::matcher::{Matcher, MatcherResult};
///
/// struct IsEmptyStr;
///
/// impl Matcher<String> for IsEmptyStr {
///     fn test(&self, value: &String) -> MatcherResult {
///         MatcherResult::new(
///             value.is_empty(),
///             format!("expected an empty string, but was {value:?}"),
///             "expected a non-empty string".to_string(),
///         )
///     }
/// }
///
/// assert!(IsEmptyStr.test(&String::new()).passed());
/// assert!(!IsEmptyStr.test(&"hi".to_string()).passed());
/// ```
pub trait Matcher<T: ?Sized> {
    /// Check the value, producing the verdict and both failure messages.
    fn test(&self, value: &T) -> MatcherResult;
}

// Implement Matcher for Box<dyn Matcher> to allow nesting
impl<T: ?Sized> Matcher<T> for Box<dyn Matcher<T>> {
    fn test(&self, value: &T) -> MatcherResult {
        (**self).test(value)
    }
}

/// Assert that a value satisfies a matcher.
///
/// On failure the error carries the matcher's `failure_message`.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`] when the matcher rejects the value.
pub fn should<T: ?Sized>(value: &T, matcher: impl Matcher<T>) -> Result<()> {
    let result = matcher.test(value);
    if result.passed() {
        Ok(())
    } else {
        Err(Error::assertion_failed(result.failure_message()))
    }
}

/// Assert that a value does **not** satisfy a matcher.
///
/// On failure the error carries the matcher's `negated_failure_message`.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`] when the matcher accepts the value.
pub fn should_not<T: ?Sized>(value: &T, matcher: impl Matcher<T>) -> Result<()> {
    let result = matcher.test(value);
    if result.passed() {
        Err(Error::assertion_failed(result.negated_failure_message()))
    } else {
        Ok(())
    }
}

/// Surface an assertion outcome on the test failure channel.
pub(crate) fn check(outcome: Result<()>) {
    if let Err(error) = outcome {
        panic!("{error}");
    }
}

/// Create a null-guarding matcher.
///
/// Lifts a `Matcher<T>` into a `Matcher<Option<&T>>`: an absent value is an
/// automatic, safe failure, and the wrapped matcher is never invoked with
/// it. Concrete matchers can therefore assume a present value.
///
/// # Example
///
/// ```rust
/// use kindcheck::prelude::*;
/// use kindcheck::assertions::matcher::never_null;
///
/// let matcher = never_null(be_of_type::<i32>());
/// assert!(matcher.test(&Some(&42)).passed());
/// assert!(!matcher.test(&None::<&i32>).passed());
/// ```
pub fn never_null<M>(inner: M) -> NeverNull<M> {
    NeverNull { inner }
}

/// Matcher wrapper that fails fast on an absent value.
pub struct NeverNull<M> {
    inner: M,
}

impl<'a, T: ?Sized, M: Matcher<T>> Matcher<Option<&'a T>> for NeverNull<M> {
    fn test(&self, value: &Option<&'a T>) -> MatcherResult {
        match *value {
            Some(present) => self.inner.test(present),
            None => MatcherResult::new(
                false,
                "expected a value to check, but it was null",
                "expected a value to check, but it was null",
            ),
        }
    }
}

/// Assert that a value matches a matcher.
///
/// # Panics
///
/// Panics with the matcher's failure message if the value doesn't match.
///
/// # Example
///
/// ```rust
/// use kindcheck::{assert_that, prelude::*};
///
/// assert_that!(42, be_of_type::<i32>());
/// ```
#[macro_export]
macro_rules! assert_that {
    ($value:expr, $matcher:expr) => {{
        let value = &$value;
        let matcher = &$matcher;
        let result = $crate::assertions::matcher::Matcher::test(matcher, value);
        if !result.passed() {
            panic!("assertion failed: {}", result.failure_message());
        }
    }};
    ($value:expr, $matcher:expr, $($arg:tt)+) => {{
        let value = &$value;
        let matcher = &$matcher;
        let result = $crate::assertions::matcher::Matcher::test(matcher, value);
        if !result.passed() {
            panic!(
                "assertion failed: {}\n  message: {}",
                result.failure_message(),
                format_args!($($arg)+)
            );
        }
    }};
}
