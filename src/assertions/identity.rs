// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Reference identity matcher.
//!
//! [`be_the_same_instance_as`] compares object identity - whether two
//! references point at the same allocation - never structural equality. Two
//! deeply equal but distinct values must fail it.
//!
//! # Example
//!
//! ```rust
//! use kindcheck::prelude::*;
//!
//! let first = String::from("same content");
//! let second = String::from("same content");
//!
//! first.should_be_same_instance_as(&first);
//! first.should_not_be_same_instance_as(&second);
//! ```

use std::fmt::Debug;

use crate::assertions::matcher::{check, should, should_not, Matcher, MatcherResult};

/// Create an identity matcher capturing the expected reference.
pub fn be_the_same_instance_as<T: ?Sized>(expected: &T) -> BeTheSameInstanceAs<'_, T> {
    BeTheSameInstanceAs { expected }
}

/// Matcher for reference identity.
pub struct BeTheSameInstanceAs<'e, T: ?Sized> {
    expected: &'e T,
}

impl<'e, T: ?Sized + Debug> Matcher<T> for BeTheSameInstanceAs<'e, T> {
    fn test(&self, value: &T) -> MatcherResult {
        MatcherResult::new(
            std::ptr::eq(value, self.expected),
            format!(
                "expected the same instance as {:?} (at {:p}), but was {:?} (at {:p})",
                self.expected, self.expected, value, value
            ),
            format!(
                "expected a different instance than {:?} (at {:p})",
                self.expected, self.expected
            ),
        )
    }
}

/// Fluent identity assertions on any value with a `Debug` rendering.
///
/// Both methods panic on failure with the selected matcher message, failing
/// the current test, and return the receiver for chaining.
pub trait IdentityAssertions: Debug {
    /// Assert this value and `expected` are the same object.
    ///
    /// # Panics
    ///
    /// Panics if the two references point at distinct objects, however equal
    /// their content.
    fn should_be_same_instance_as(&self, expected: &Self) -> &Self {
        check(should(self, be_the_same_instance_as(expected)));
        self
    }

    /// Assert this value and `expected` are distinct objects.
    ///
    /// # Panics
    ///
    /// Panics if the two references point at the same object.
    fn should_not_be_same_instance_as(&self, expected: &Self) -> &Self {
        check(should_not(self, be_the_same_instance_as(expected)));
        self
    }
}

impl<T: ?Sized + Debug> IdentityAssertions for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Account {
        id: u32,
    }

    #[test]
    fn a_value_is_the_same_instance_as_itself() {
        let account = Account { id: 7 };
        assert!(be_the_same_instance_as(&account).test(&account).passed());
        account.should_be_same_instance_as(&account);
    }

    #[test]
    fn deeply_equal_values_are_distinct_instances() {
        let first = Account { id: 7 };
        let second = Account { id: 7 };
        assert_eq!(first, second);

        let result = be_the_same_instance_as(&first).test(&second);
        assert!(!result.passed());
        first.should_not_be_same_instance_as(&second);
    }

    #[test]
    fn failure_message_names_both_objects() {
        let first = Account { id: 1 };
        let second = Account { id: 2 };
        let result = be_the_same_instance_as(&first).test(&second);
        assert!(result.failure_message().contains("Account { id: 1 }"));
        assert!(result.failure_message().contains("Account { id: 2 }"));
    }

    #[test]
    fn identity_holds_through_shared_references() {
        let account = Account { id: 7 };
        let alias: &Account = &account;
        alias.should_be_same_instance_as(&account);
    }

    #[test]
    #[should_panic(expected = "expected the same instance as")]
    fn distinct_objects_fail_the_positive_assertion() {
        let first = Account { id: 7 };
        let second = Account { id: 7 };
        first.should_be_same_instance_as(&second);
    }

    #[test]
    #[should_panic(expected = "expected a different instance than")]
    fn the_same_object_fails_the_negated_assertion() {
        let account = Account { id: 7 };
        account.should_not_be_same_instance_as(&account);
    }
}
