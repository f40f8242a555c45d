//! # kindcheck
//!
//! > Runtime type, identity, and nullability matchers for test assertions
//!
//! **kindcheck** provides a small, composable matcher system for checking
//! runtime type relationships (`should_be_instance_of`, `should_be_type_of`),
//! reference identity (`should_be_same_instance_as`), and nullability
//! (`should_be_null`, `should_not_be_null`) inside ordinary Rust tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use kindcheck::prelude::*;
//!
//! #[derive(Debug)]
//! struct Dog {
//!     name: String,
//! }
//! trait Animal {}
//! impl Animal for Dog {}
//! kindcheck::reflect!(Dog: dyn Animal);
//!
//! let pet = Dog { name: "Rex".to_string() };
//!
//! pet.should_be_instance_of::<dyn Animal>();
//! let dog = pet.should_be_type_of::<Dog>();
//! assert_eq!(dog.name, "Rex");
//!
//! let missing: Option<&Dog> = None;
//! missing.should_be_null();
//! ```
//!
//! ## Features
//!
//! - 🔍 **Type matchers** - hierarchical (`be_instance_of`) and exact
//!   (`be_of_type`) runtime type checks over user-declared hierarchies
//! - 🪞 **Reference identity** - `be_the_same_instance_as` compares object
//!   identity, never structural equality
//! - ⛑️ **Null guarding** - the [`never_null`](assertions::matcher::never_null)
//!   combinator turns any matcher into a null-safe one
//! - 📝 **Two-polarity messages** - every check carries fully formed failure
//!   messages for both `should` and `should_not`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod error;
pub mod reflect;

/// Prelude for convenient imports
///
/// ```rust
/// use kindcheck::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assertions::identity::{be_the_same_instance_as, IdentityAssertions};
    pub use crate::assertions::matcher::{never_null, should, should_not, Matcher, MatcherResult};
    pub use crate::assertions::nullability::{be_null, NullAssertions};
    pub use crate::assertions::types::{
        be_instance_of, be_instance_of_token, be_of_type, be_of_type_token,
        NullableTypeAssertions, TypeAssertions,
    };
    pub use crate::error::{Error, Result};
    pub use crate::reflect::{Reflect, TypeToken};
}

// Re-exports
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[derive(Debug)]
    struct Door;
    crate::reflect!(Door);

    #[test]
    fn prelude_covers_the_public_surface() {
        let door = Door;
        door.should_be_type_of::<Door>()
            .should_be_same_instance_as(&door);
        Some(&door).should_not_be_null();
    }
}
