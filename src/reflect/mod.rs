//! Runtime type descriptors.
//!
//! This module provides the narrow type-system surface the matchers consume:
//!
//! - [`TypeToken`] - an opaque, comparable handle to a runtime type
//! - [`Reflect`] - the trait checked values implement to expose their runtime
//!   type and declared supertypes
//! - [`reflect!`](crate::reflect!) - implements [`Reflect`] for a type,
//!   listing its supertypes
//!
//! Rust has no runtime subtype relation, so hierarchies are declared rather
//! than discovered: a `Reflect` impl names the tokens its type conforms to.
//! Trait objects make natural "interface" tokens, since `TypeId::of::<dyn
//! Trait>()` is well-defined for any `'static` trait.
//!
//! # Example
//!
//! ```rust
//! use kindcheck::reflect::{Reflect, TypeToken};
//!
//! struct ArrayList;
//! trait List {}
//! impl List for ArrayList {}
//! kindcheck::reflect!(ArrayList: dyn List);
//!
//! let list = ArrayList;
//! assert!(list.conforms_to(&TypeToken::of::<dyn List>()));
//! assert!(list.conforms_to(&TypeToken::of::<ArrayList>()));
//! assert!(!list.conforms_to(&TypeToken::of::<i32>()));
//! ```

use std::any::{Any, TypeId};
use std::fmt;

/// An opaque handle to a runtime type.
///
/// Tokens compare by the underlying [`TypeId`]; the qualified type name is
/// carried alongside for diagnostics and rendered by the [`Display`]
/// implementation.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Create the token for a type.
    ///
    /// Works for unsized types too, so `TypeToken::of::<dyn Trait>()` builds
    /// an interface token.
    #[must_use]
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`].
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The qualified name of the type this token describes.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A value that exposes its runtime type to the matchers.
///
/// Implement with the [`reflect!`](crate::reflect!) macro rather than by
/// hand. The supertype list is the transitive closure of everything the type
/// should count as an instance of; there is no implicit root, so a type
/// conforms to exactly its own token plus what it declares.
pub trait Reflect: Any {
    /// The token of this value's runtime type.
    fn runtime_type(&self) -> TypeToken;

    /// Tokens of all declared supertypes, excluding the runtime type itself.
    fn supertypes(&self) -> Vec<TypeToken>;

    /// View this value as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// The subtype primitive: does this value's runtime type equal the token
    /// or appear in its declared supertypes?
    fn conforms_to(&self, token: &TypeToken) -> bool {
        self.runtime_type() == *token || self.supertypes().contains(token)
    }
}

/// Implement [`Reflect`] for a type, optionally listing its supertypes.
///
/// Supertypes are given as types after a colon; use `dyn Trait` for
/// interface tokens. List the transitive closure - the matchers do not walk
/// the hierarchy.
///
/// # Example
///
/// ```rust
/// struct Beagle;
/// struct Dog;
/// trait Animal {}
/// impl Animal for Beagle {}
/// kindcheck::reflect!(Dog: dyn Animal);
/// kindcheck::reflect!(Beagle: Dog, dyn Animal);
/// ```
#[macro_export]
macro_rules! reflect {
    ($ty:ty) => {
        $crate::reflect!($ty:);
    };
    ($ty:ty : $($super:ty),* $(,)?) => {
        impl $crate::reflect::Reflect for $ty {
            fn runtime_type(&self) -> $crate::reflect::TypeToken {
                $crate::reflect::TypeToken::of::<$ty>()
            }

            fn supertypes(&self) -> ::std::vec::Vec<$crate::reflect::TypeToken> {
                ::std::vec![$($crate::reflect::TypeToken::of::<$super>()),*]
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

// Leaf impls for common std types. None of these declare supertypes.
crate::reflect!(());
crate::reflect!(bool);
crate::reflect!(char);
crate::reflect!(i8);
crate::reflect!(i16);
crate::reflect!(i32);
crate::reflect!(i64);
crate::reflect!(i128);
crate::reflect!(isize);
crate::reflect!(u8);
crate::reflect!(u16);
crate::reflect!(u32);
crate::reflect!(u64);
crate::reflect!(u128);
crate::reflect!(usize);
crate::reflect!(f32);
crate::reflect!(f64);
crate::reflect!(String);

impl<T: Any> Reflect for Vec<T> {
    fn runtime_type(&self) -> TypeToken {
        TypeToken::of::<Self>()
    }

    fn supertypes(&self) -> Vec<TypeToken> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Terrier;
    struct Spaniel;
    trait Pet {}
    impl Pet for Terrier {}
    crate::reflect!(Terrier: dyn Pet);
    crate::reflect!(Spaniel);

    #[test]
    fn tokens_compare_by_type_identity() {
        assert_eq!(TypeToken::of::<Terrier>(), TypeToken::of::<Terrier>());
        assert_ne!(TypeToken::of::<Terrier>(), TypeToken::of::<Spaniel>());
        assert_ne!(TypeToken::of::<Terrier>(), TypeToken::of::<dyn Pet>());
    }

    #[test]
    fn token_displays_the_qualified_name() {
        let token = TypeToken::of::<String>();
        assert!(token.to_string().contains("String"));
        assert_eq!(token.name(), std::any::type_name::<String>());
    }

    #[test]
    fn conforms_to_own_type_and_declared_supertypes() {
        let dog = Terrier;
        assert!(dog.conforms_to(&TypeToken::of::<Terrier>()));
        assert!(dog.conforms_to(&TypeToken::of::<dyn Pet>()));
        assert!(!dog.conforms_to(&TypeToken::of::<Spaniel>()));
    }

    #[test]
    fn no_implicit_root_type() {
        let dog = Spaniel;
        assert!(!dog.conforms_to(&TypeToken::of::<dyn Pet>()));
        assert!(!dog.conforms_to(&TypeToken::of::<dyn Any>()));
    }

    #[test]
    fn works_through_a_trait_object() {
        let dog = Terrier;
        let dynamic: &dyn Reflect = &dog;
        assert_eq!(dynamic.runtime_type(), TypeToken::of::<Terrier>());
        assert!(dynamic.conforms_to(&TypeToken::of::<dyn Pet>()));
    }

    #[test]
    fn std_impls_are_leaves() {
        assert!(42_i32.conforms_to(&TypeToken::of::<i32>()));
        assert!(42_i32.supertypes().is_empty());
        let list = vec![1, 2, 3];
        assert_eq!(list.runtime_type(), TypeToken::of::<Vec<i32>>());
    }
}
