// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Null-check matcher.
//!
//! [`be_null`] is the one matcher that targets absence rather than guarding
//! against it: it passes exactly when the checked `Option<&T>` is `None`.
//!
//! `should_not_be_null` doubles as the narrowing point for nullable values:
//! it consumes the `Option` and returns the present reference, so callers
//! bind the return value to continue with a non-null handle.
//!
//! # Example
//!
//! ```rust
//! use kindcheck::prelude::*;
//!
//! let stored = String::from("present");
//! let found: Option<&String> = Some(&stored);
//! let missing: Option<&String> = None;
//!
//! missing.should_be_null();
//! let value = found.should_not_be_null();
//! assert_eq!(value, "present");
//! ```

use std::fmt::Debug;

use crate::assertions::matcher::{check, should, should_not, Matcher, MatcherResult};

/// Create a null-check matcher.
pub fn be_null() -> BeNull {
    BeNull
}

/// Matcher for absent values.
pub struct BeNull;

impl<'a, T: ?Sized + Debug> Matcher<Option<&'a T>> for BeNull {
    fn test(&self, value: &Option<&'a T>) -> MatcherResult {
        match *value {
            None => MatcherResult::new(
                true,
                "expected the value to be null, and it was",
                "expected the value to not be null, but it was null",
            ),
            Some(present) => MatcherResult::new(
                false,
                format!("expected the value to be null, but was {present:?}"),
                format!("expected the value to not be null, and it was {present:?}"),
            ),
        }
    }
}

/// Fluent nullability assertions on `Option<&T>`.
///
/// Both methods panic on failure with the selected matcher message, failing
/// the current test.
pub trait NullAssertions<'a, T: ?Sized> {
    /// Assert the value is absent.
    ///
    /// # Panics
    ///
    /// Panics if the value is present.
    fn should_be_null(&self) -> &Self;

    /// Assert the value is present and return the narrowed reference.
    ///
    /// Consumes the `Option`; bind the return value to continue with a
    /// non-null handle.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    fn should_not_be_null(self) -> &'a T;
}

impl<'a, T: ?Sized + Debug> NullAssertions<'a, T> for Option<&'a T> {
    fn should_be_null(&self) -> &Self {
        check(should(self, be_null()));
        self
    }

    fn should_not_be_null(self) -> &'a T {
        check(should_not(&self, be_null()));
        match self {
            Some(present) => present,
            // check above rejects None
            None => unreachable!(),
        }
    }
}
