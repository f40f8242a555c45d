//! Fluent assertions over runtime types, identity, and nullability.
//!
//! This module provides the matcher contract and the closed family of
//! matcher variants:
//!
//! - [`matcher`] - the [`Matcher`](matcher::Matcher) trait,
//!   [`MatcherResult`](matcher::MatcherResult), the
//!   [`never_null`](matcher::never_null) guard, and the
//!   [`should`](matcher::should) / [`should_not`](matcher::should_not)
//!   combinators
//! - [`types`] - hierarchical ([`be_instance_of`](types::be_instance_of))
//!   and exact ([`be_of_type`](types::be_of_type)) runtime type matchers
//! - [`identity`] - reference identity
//!   ([`be_the_same_instance_as`](identity::be_the_same_instance_as))
//! - [`nullability`] - the null check ([`be_null`](nullability::be_null))
//!
//! # Matcher Composition
//!
//! ```rust
//! use kindcheck::prelude::*;
//! use kindcheck::assertions::matcher::never_null;
//!
//! #[derive(Debug)]
//! struct Receipt;
//! kindcheck::reflect!(Receipt);
//!
//! let receipt = Receipt;
//! let present: Option<&Receipt> = Some(&receipt);
//!
//! assert!(should(&present, never_null(be_of_type::<Receipt>())).is_ok());
//! assert!(should(&None::<&Receipt>, never_null(be_of_type::<Receipt>())).is_err());
//! ```
//!
//! # Entry Points
//!
//! ```rust
//! use kindcheck::prelude::*;
//!
//! #[derive(Debug)]
//! struct Receipt;
//! kindcheck::reflect!(Receipt);
//!
//! let receipt = Receipt;
//! receipt
//!     .should_be_type_of::<Receipt>()
//!     .should_be_same_instance_as(&receipt);
//! ```

pub mod identity;
pub mod matcher;
pub mod nullability;
pub mod types;

pub use identity::{be_the_same_instance_as, BeTheSameInstanceAs, IdentityAssertions};
pub use matcher::{never_null, should, should_not, Matcher, MatcherResult, NeverNull};
pub use nullability::{be_null, BeNull, NullAssertions};
pub use types::{
    be_instance_of, be_instance_of_token, be_of_type, be_of_type_token, BeInstanceOf, BeOfType,
    NullableTypeAssertions, TypeAssertions,
};
