//! # kindling
//!
//! Higher-kinded type classes for Rust, passed as explicit dictionaries.
//!
//! ## Overview
//!
//! - **HKT encoding** ([`hkt`]): a [`TypeLambda`](hkt::TypeLambda) marker
//!   names a type constructor, and [`Kind<F, A>`](hkt::Kind) applies it.
//!   [`Composition<F, G>`](hkt::Composition) names the nested constructor
//!   `F<G<_>>`.
//! - **Type classes** ([`typeclass`]): small primitive traits (`map`,
//!   `flat_map`, `product`, `traverse`, ...) implemented on markers, plus
//!   free functions deriving everything else (`ap`, `lift2`, `bind`,
//!   `sequence`, ...) and the `*_composition` functions that build an
//!   instance for `F<G<_>>` from instances for `F` and `G`.
//! - **Value type classes**: [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid), [`Order`](typeclass::Order) and
//!   [`Bounded`](typeclass::Bounded) as records of closures.
//! - **Instances** ([`data`]): `Option`, [`Either`](data::Either),
//!   `Result`, [`These`](data::These), `Vec` and
//!   [`Identity`](data::Identity).
//! - **Calling conventions** ([`dual`], [`pipeable`]): data-first and
//!   data-last forms of the same operation. Type class operations are
//!   data-first; [`pipeable`] holds their data-last forms for [`pipe!`].
//!
//! ## Feature Flags
//!
//! - `compose`: the [`pipe!`] and [`do_!`] macros and small combinators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kindling::prelude::*;
//! use kindling::data::{ArrayTypeLambda, OptionTypeLambda};
//! use kindling::hkt::Composition;
//!
//! let nested = Composition::new(ArrayTypeLambda, OptionTypeLambda);
//! let doubled = nested.map(vec![Some(1), None, Some(3)], |n: i32| n * 2);
//! assert_eq!(doubled, vec![Some(2), None, Some(6)]);
//!
//! let mut add = semi_applicative::lift2(&OptionTypeLambda, |a: i32, b: i32| a + b);
//! assert_eq!(add(Some(1), Some(2)), Some(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Crate attributes override the `[lints]` table, so its allows are repeated here
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![allow(clippy::doc_markdown, clippy::option_if_let_else, clippy::needless_pass_by_value)]

/// Prelude module for convenient imports.
///
/// Re-exports the type class traits, their modules and the value type
/// classes.
///
/// # Usage
///
/// ```rust
/// use kindling::prelude::*;
/// ```
pub mod prelude {
    pub use crate::hkt::{Composition, Kind, TypeLambda, Value};
    pub use crate::pipeable;
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod data;
pub mod dual;
pub mod hkt;
pub mod pipeable;
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;
