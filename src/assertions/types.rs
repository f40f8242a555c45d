// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Runtime type matchers.
//!
//! Two genuinely different predicates over a value's runtime type:
//!
//! - [`be_instance_of`] - hierarchical membership: the runtime type equals
//!   the expected token or conforms to it through its declared supertypes
//! - [`be_of_type`] - exact membership: the runtime type equals the expected
//!   token precisely; subtypes fail
//!
//! The exact matcher compares token identity only and never consults the
//! supertype list. Both come in two shapes: inferred from a type parameter
//! ([`be_instance_of`], [`be_of_type`]) or from an explicit
//! [`TypeToken`] ([`be_instance_of_token`], [`be_of_type_token`]).
//!
//! The entry-point traits wrap the matchers for fluent use:
//! [`TypeAssertions`] on any [`Reflect`] value, [`NullableTypeAssertions`]
//! on `Option<&T>` (where null is always a safe failure).
//!
//! # Example
//!
//! ```rust
//! use kindcheck::prelude::*;
//!
//! #[derive(Debug)]
//! struct ArrayList(Vec<i32>);
//! trait List {}
//! impl List for ArrayList {}
//! kindcheck::reflect!(ArrayList: dyn List);
//!
//! let list = ArrayList(vec![1, 2, 3]);
//! list.should_be_instance_of::<dyn List>();
//! list.should_not_be_type_of::<dyn List>();
//! let narrowed = list.should_be_type_of::<ArrayList>();
//! assert_eq!(narrowed.0.len(), 3);
//! ```

use std::any::Any;

use crate::assertions::matcher::{check, never_null, should, should_not, Matcher, MatcherResult};
use crate::reflect::{Reflect, TypeToken};

/// Create a hierarchical type matcher from a type parameter.
///
/// Passes when the value's runtime type is `E` or conforms to `E` through
/// its declared supertypes. Use a `dyn Trait` parameter for interface
/// membership.
pub fn be_instance_of<E: ?Sized + Any>() -> BeInstanceOf {
    be_instance_of_token(TypeToken::of::<E>())
}

/// Create a hierarchical type matcher from an explicit token.
pub fn be_instance_of_token(expected: TypeToken) -> BeInstanceOf {
    BeInstanceOf { expected }
}

/// Matcher for hierarchical type membership.
pub struct BeInstanceOf {
    expected: TypeToken,
}

impl<T: Reflect + ?Sized> Matcher<T> for BeInstanceOf {
    fn test(&self, value: &T) -> MatcherResult {
        let actual = value.runtime_type();
        MatcherResult::new(
            value.conforms_to(&self.expected),
            format!(
                "expected an instance of {}, but the value was of type {actual}",
                self.expected
            ),
            format!(
                "expected the value to not be an instance of {}, but it was one (of type {actual})",
                self.expected
            ),
        )
    }
}

/// Create an exact type matcher from a type parameter.
///
/// Passes only when the value's runtime type is precisely `E`; subtypes
/// fail. This is the stricter sibling of [`be_instance_of`] and shares no
/// code path with it.
pub fn be_of_type<E: ?Sized + Any>() -> BeOfType {
    be_of_type_token(TypeToken::of::<E>())
}

/// Create an exact type matcher from an explicit token.
pub fn be_of_type_token(expected: TypeToken) -> BeOfType {
    BeOfType { expected }
}

/// Matcher for exact type membership.
pub struct BeOfType {
    expected: TypeToken,
}

impl<T: Reflect + ?Sized> Matcher<T> for BeOfType {
    fn test(&self, value: &T) -> MatcherResult {
        let actual = value.runtime_type();
        MatcherResult::new(
            actual == self.expected,
            format!(
                "expected the value to be exactly of type {}, but it was of type {actual}",
                self.expected
            ),
            format!(
                "expected the value to not be exactly of type {}, but it was",
                self.expected
            ),
        )
    }
}

/// Fluent type assertions on any [`Reflect`] value.
///
/// All methods panic on failure with the selected matcher message, failing
/// the current test. The positive assertions return a handle for chaining;
/// `should_be_type_of` returns the value narrowed to the checked type.
pub trait TypeAssertions: Reflect {
    /// Assert the runtime type is `E` or a declared subtype of it.
    ///
    /// Chainable; no narrowed handle is produced (use
    /// [`should_be_type_of`](TypeAssertions::should_be_type_of) or
    /// [`should_be_instance_of_with`](TypeAssertions::should_be_instance_of_with)
    /// when one is needed).
    ///
    /// # Panics
    ///
    /// Panics if the runtime type is neither `E` nor conforms to it.
    fn should_be_instance_of<E: ?Sized + Any>(&self) -> &Self {
        check(should(self, be_instance_of::<E>()));
        self
    }

    /// Assert hierarchical membership against an explicit token.
    ///
    /// # Panics
    ///
    /// Panics if the runtime type does not conform to the token.
    fn should_be_instance_of_token(&self, expected: TypeToken) -> &Self {
        check(should(self, be_instance_of_token(expected)));
        self
    }

    /// Assert the runtime type is neither `E` nor a declared subtype of it.
    ///
    /// # Panics
    ///
    /// Panics if the value is an instance of `E`.
    fn should_not_be_instance_of<E: ?Sized + Any>(&self) -> &Self {
        check(should_not(self, be_instance_of::<E>()));
        self
    }

    /// Assert hierarchical membership, then pass a narrowed handle to the
    /// continuation.
    ///
    /// The continuation runs when the concrete runtime type is exactly `E`,
    /// which is the only case where a `&E` handle exists without compiler
    /// subtyping. A pass through a strict subtype keeps the runtime check
    /// intact but produces no handle.
    ///
    /// # Panics
    ///
    /// Panics if the runtime type is neither `E` nor conforms to it.
    fn should_be_instance_of_with<E: Reflect, F: FnOnce(&E)>(&self, on_success: F) -> &Self {
        check(should(self, be_instance_of::<E>()));
        if let Some(narrowed) = self.as_any().downcast_ref::<E>() {
            on_success(narrowed);
        }
        self
    }

    /// Assert the runtime type is exactly `E` and return the narrowed value.
    ///
    /// # Panics
    ///
    /// Panics if the runtime type is not precisely `E`, or if the `Reflect`
    /// impl reports a runtime type inconsistent with the value itself.
    fn should_be_type_of<E: Reflect>(&self) -> &E {
        check(should(self, be_of_type::<E>()));
        match self.as_any().downcast_ref::<E>() {
            Some(narrowed) => narrowed,
            None => panic!(
                "runtime type reported as {} but the value cannot be viewed as it; \
                 the Reflect impl is inconsistent",
                TypeToken::of::<E>()
            ),
        }
    }

    /// Assert the runtime type is exactly `E`, then pass the narrowed value
    /// to the continuation.
    ///
    /// # Panics
    ///
    /// Panics if the runtime type is not precisely `E`.
    fn should_be_type_of_with<E: Reflect, F: FnOnce(&E)>(&self, on_success: F) -> &Self {
        check(should(self, be_of_type::<E>()));
        if let Some(narrowed) = self.as_any().downcast_ref::<E>() {
            on_success(narrowed);
        }
        self
    }

    /// Assert exact membership against an explicit token.
    ///
    /// # Panics
    ///
    /// Panics if the runtime type differs from the token.
    fn should_be_type_of_token(&self, expected: TypeToken) -> &Self {
        check(should(self, be_of_type_token(expected)));
        self
    }

    /// Assert the runtime type is not exactly `E`.
    ///
    /// # Panics
    ///
    /// Panics if the runtime type is precisely `E`.
    fn should_not_be_type_of<E: ?Sized + Any>(&self) -> &Self {
        check(should_not(self, be_of_type::<E>()));
        self
    }
}

impl<T: Reflect + ?Sized> TypeAssertions for T {}

/// Fluent type assertions on nullable values (`Option<&T>`).
///
/// The type matchers are wrapped in the null guard, so a null value fails
/// every positive assertion and satisfies every negated one - for every
/// target type. No narrowing is offered on the nullable surface.
pub trait NullableTypeAssertions<T: Reflect + ?Sized> {
    /// Assert a present value whose runtime type conforms to `E`.
    ///
    /// # Panics
    ///
    /// Panics if the value is null or not an instance of `E`.
    fn should_be_instance_of<E: ?Sized + Any>(&self) -> &Self;

    /// Assert the value is null or not an instance of `E`.
    ///
    /// # Panics
    ///
    /// Panics if a present value is an instance of `E`.
    fn should_not_be_instance_of<E: ?Sized + Any>(&self) -> &Self;

    /// Assert a present value whose runtime type is exactly `E`.
    ///
    /// # Panics
    ///
    /// Panics if the value is null or of any other runtime type.
    fn should_be_type_of<E: ?Sized + Any>(&self) -> &Self;

    /// Assert the value is null or not exactly of type `E`.
    ///
    /// # Panics
    ///
    /// Panics if a present value's runtime type is precisely `E`.
    fn should_not_be_type_of<E: ?Sized + Any>(&self) -> &Self;
}

impl<'a, T: Reflect + ?Sized> NullableTypeAssertions<T> for Option<&'a T> {
    fn should_be_instance_of<E: ?Sized + Any>(&self) -> &Self {
        check(should(self, never_null(be_instance_of::<E>())));
        self
    }

    fn should_not_be_instance_of<E: ?Sized + Any>(&self) -> &Self {
        check(should_not(self, never_null(be_instance_of::<E>())));
        self
    }

    fn should_be_type_of<E: ?Sized + Any>(&self) -> &Self {
        check(should(self, never_null(be_of_type::<E>())));
        self
    }

    fn should_not_be_type_of<E: ?Sized + Any>(&self) -> &Self {
        check(should_not(self, never_null(be_of_type::<E>())));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct LinkedList;
    #[derive(Debug)]
    struct ArrayList;
    trait List {}
    impl List for LinkedList {}
    impl List for ArrayList {}
    crate::reflect!(LinkedList: dyn List);
    crate::reflect!(ArrayList: dyn List);

    #[test]
    fn instance_of_accepts_the_exact_type() {
        assert!(be_instance_of::<ArrayList>().test(&ArrayList).passed());
    }

    #[test]
    fn instance_of_accepts_declared_supertypes() {
        assert!(be_instance_of::<dyn List>().test(&ArrayList).passed());
        assert!(be_instance_of::<dyn List>().test(&LinkedList).passed());
    }

    #[test]
    fn instance_of_rejects_unrelated_types() {
        let result = be_instance_of::<LinkedList>().test(&ArrayList);
        assert!(!result.passed());
        assert!(result.failure_message().contains("LinkedList"));
        assert!(result.failure_message().contains("ArrayList"));
    }

    #[test]
    fn of_type_accepts_only_the_exact_type() {
        assert!(be_of_type::<ArrayList>().test(&ArrayList).passed());
        assert!(!be_of_type::<dyn List>().test(&ArrayList).passed());
        assert!(!be_of_type::<LinkedList>().test(&ArrayList).passed());
    }

    #[test]
    fn of_type_never_consults_the_hierarchy() {
        // ArrayList declares dyn List as supertype; exact match must still fail.
        let result = be_of_type_token(TypeToken::of::<dyn List>()).test(&ArrayList);
        assert!(!result.passed());
        assert!(result.failure_message().contains("exactly of type"));
    }

    #[test]
    fn token_and_generic_shapes_agree() {
        let by_param = be_instance_of::<dyn List>().test(&ArrayList);
        let by_token = be_instance_of_token(TypeToken::of::<dyn List>()).test(&ArrayList);
        assert_eq!(by_param.passed(), by_token.passed());
    }

    #[test]
    fn entry_points_chain_and_narrow() {
        let list = ArrayList;
        let narrowed = list
            .should_be_instance_of::<dyn List>()
            .should_not_be_instance_of::<LinkedList>()
            .should_be_type_of::<ArrayList>();
        assert!(std::ptr::eq(narrowed, &list));
    }

    #[test]
    fn continuation_runs_for_the_concrete_type() {
        let list = ArrayList;
        let mut ran = false;
        list.should_be_instance_of_with(|_narrowed: &ArrayList| ran = true);
        assert!(ran);

        let mut exact_ran = false;
        list.should_be_type_of_with(|_narrowed: &ArrayList| exact_ran = true);
        assert!(exact_ran);
    }

    #[test]
    fn entry_points_work_through_trait_objects() {
        let list = ArrayList;
        let dynamic: &dyn Reflect = &list;
        dynamic.should_be_instance_of::<dyn List>();
        dynamic.should_be_instance_of_token(TypeToken::of::<ArrayList>());
        dynamic.should_be_type_of_token(TypeToken::of::<ArrayList>());
        let narrowed = dynamic.should_be_type_of::<ArrayList>();
        assert!(std::ptr::eq(narrowed, &list));
    }

    #[test]
    #[should_panic(expected = "expected an instance of")]
    fn instance_of_failure_panics_with_both_types_named() {
        ArrayList.should_be_instance_of::<LinkedList>();
    }

    #[test]
    #[should_panic(expected = "expected the value to not be exactly of type")]
    fn negated_of_type_failure_uses_the_negated_message() {
        ArrayList.should_not_be_type_of::<ArrayList>();
    }

    #[test]
    fn null_fails_every_positive_type_assertion() {
        let absent: Option<&ArrayList> = None;
        absent.should_not_be_instance_of::<dyn List>();
        absent.should_not_be_type_of::<ArrayList>();
    }

    #[test]
    #[should_panic(expected = "was null")]
    fn null_instance_of_panics() {
        let absent: Option<&ArrayList> = None;
        absent.should_be_instance_of::<dyn List>();
    }

    #[test]
    fn present_values_delegate_through_the_guard() {
        let list = ArrayList;
        let present: Option<&ArrayList> = Some(&list);
        present
            .should_be_instance_of::<dyn List>()
            .should_be_type_of::<ArrayList>()
            .should_not_be_type_of::<LinkedList>();
    }

    #[test]
    fn polarity_pairs_are_mutually_exclusive() {
        let list = ArrayList;
        assert!(should(&list, be_instance_of::<dyn List>()).is_ok());
        assert!(should_not(&list, be_instance_of::<dyn List>()).is_err());
        assert!(should(&list, be_of_type::<LinkedList>()).is_err());
        assert!(should_not(&list, be_of_type::<LinkedList>()).is_ok());
    }
}
