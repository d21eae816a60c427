//! Concrete instances of the type classes.
//!
//! Each submodule defines the type lambda of one data type and implements
//! the primitive type classes on it directly; everything else comes from
//! the derivation functions in [`typeclass`](crate::typeclass).
//!
//! - [`OptionTypeLambda`]: `Option<A>`
//! - [`EitherTypeLambda<E>`]: `Either<E, A>`
//! - [`ResultTypeLambda<E>`]: `Result<A, E>`
//! - [`TheseTypeLambda<E>`] and [`TheseMonad<E>`]: `These<E, A>`
//! - [`ArrayTypeLambda`]: `Vec<A>`
//! - [`IdentityTypeLambda`]: `Identity<A>`
//!
//! The public submodules also hold the helpers of each data type, such as
//! [`option::get_or_throw`] or [`either::first_right_of`].
//!
//! Type lambdas with a fixed error slot carry it as a phantom type
//! parameter. They are still zero-sized and `Copy` for any error type.

use static_assertions::{assert_eq_size, assert_impl_all};

/// Declares a zero-sized type lambda that fixes one type parameter.
///
/// The trait impls are written by hand so that they hold for every `E`,
/// not only for `E: Clone` or `E: Debug` as `derive` would require.
macro_rules! phantom_type_lambda {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<E>(std::marker::PhantomData<fn() -> E>);

        impl<E> $name<E> {
            /// Creates the dictionary.
            #[inline]
            #[must_use]
            pub const fn new() -> Self {
                Self(std::marker::PhantomData)
            }
        }

        impl<E> Clone for $name<E> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<E> Copy for $name<E> {}

        impl<E> Default for $name<E> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<E> std::fmt::Debug for $name<E> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}<{}>", stringify!($name), std::any::type_name::<E>())
            }
        }

        impl<E> PartialEq for $name<E> {
            #[inline]
            fn eq(&self, _other: &Self) -> bool {
                true
            }
        }

        impl<E> Eq for $name<E> {}

        impl<E> std::hash::Hash for $name<E> {
            #[inline]
            fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
        }
    };
}

pub mod array;
pub mod either;
pub mod option;
pub mod result;
pub mod these;

mod error;
mod identity;

pub use array::ArrayTypeLambda;
pub use either::{Either, EitherTypeLambda};
pub use error::UnwrapError;
pub use identity::{Identity, IdentityTypeLambda};
pub use option::OptionTypeLambda;
pub use result::ResultTypeLambda;
pub use these::{These, TheseMonad, TheseTypeLambda};

assert_eq_size!(OptionTypeLambda, ());
assert_eq_size!(ArrayTypeLambda, ());
assert_eq_size!(IdentityTypeLambda, ());
assert_eq_size!(EitherTypeLambda<String>, ());
assert_eq_size!(ResultTypeLambda<String>, ());
assert_eq_size!(TheseTypeLambda<String>, ());
assert_impl_all!(OptionTypeLambda: Copy, Default);
assert_impl_all!(ArrayTypeLambda: Copy, Default);
assert_impl_all!(EitherTypeLambda<String>: Copy, Default);
assert_impl_all!(ResultTypeLambda<Vec<u8>>: Copy, Default);
assert_impl_all!(TheseTypeLambda<String>: Copy, Default);
