//! Type classes as explicitly passed dictionaries.
//!
//! Every higher-kinded type class is a trait implemented on a
//! [`TypeLambda`](crate::hkt::TypeLambda) marker. Generic code receives the
//! marker by reference and calls the primitive operations on it; nothing is
//! resolved implicitly from the data type.
//!
//! ## Primitive type classes
//!
//! - [`Invariant`]: `imap`
//! - [`Covariant`]: `map`
//! - [`Contravariant`]: `contramap`
//! - [`Of`]: `of`
//! - [`FlatMap`]: `flat_map`
//! - [`SemiProduct`] / [`Product`]: `product`, `product_many`, `product_all`
//! - [`SemiCoproduct`] / [`Coproduct`]: `coproduct`, `coproduct_many`, `zero`
//! - [`Foldable`]: `reduce`
//! - [`Traversable`]: `traverse`
//! - [`Filterable`]: `filter_map`, `partition_map`
//! - [`Bicovariant`]: `bimap`
//!
//! ## Combined type classes
//!
//! [`Pointed`], [`Chainable`], [`Monad`], [`SemiApplicative`],
//! [`Applicative`], [`SemiAlternative`], [`Alternative`] and
//! [`TraversableFilterable`] have no operations of their own; each is
//! implemented for every dictionary that implements its parts.
//!
//! ## Value type classes
//!
//! [`Semigroup`], [`Monoid`], [`Order`] and [`Bounded`] are records of
//! closures rather than traits, because one type usually has several of
//! them. Their modules also hold the instances and combinators.
//!
//! ## Derived operations
//!
//! Each module exposes free functions derived from its primitives, such as
//! [`semi_applicative::ap`], [`chainable::bind`] or
//! [`traversable::sequence`], along with the `*_composition` functions that
//! build the operation for a nested constructor `F<G<_>>`.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::{ArrayTypeLambda, OptionTypeLambda};
//! use kindling::typeclass::{semi_applicative, Covariant, Traversable};
//!
//! let parsed = ArrayTypeLambda.traverse(&OptionTypeLambda, vec!["1", "2"], |s: &str| s.parse::<i32>().ok());
//! let doubled = OptionTypeLambda.map(parsed, |values| values.into_iter().map(|n| n * 2).collect::<Vec<_>>());
//! assert_eq!(doubled, Some(vec![2, 4]));
//!
//! let mut add = semi_applicative::lift2(&OptionTypeLambda, |a: i32, b: i32| a + b);
//! assert_eq!(add(Some(1), Some(2)), Some(3));
//! ```

pub mod alternative;
pub mod applicative;
pub mod bicovariant;
pub mod bounded;
pub mod chainable;
pub mod contravariant;
pub mod coproduct;
pub mod covariant;
pub mod filterable;
pub mod flat_map;
pub mod foldable;
pub mod invariant;
pub mod monad;
pub mod monoid;
pub mod of;
pub mod order;
pub mod product;
pub mod semi_applicative;
pub mod semi_coproduct;
pub mod semi_product;
pub mod semigroup;
pub mod traversable;
pub mod traversable_filterable;

pub use alternative::{Alternative, SemiAlternative};
pub use applicative::Applicative;
pub use bicovariant::Bicovariant;
pub use bounded::{Bounded, BoundedValue};
pub use chainable::Chainable;
pub use contravariant::Contravariant;
pub use coproduct::Coproduct;
pub use covariant::Covariant;
pub use filterable::Filterable;
pub use flat_map::FlatMap;
pub use foldable::Foldable;
pub use invariant::Invariant;
pub use monad::Monad;
pub use monoid::{Monoid, One};
pub use of::{Of, Pointed};
pub use order::Order;
pub use product::Product;
pub use semi_applicative::SemiApplicative;
pub use semi_coproduct::SemiCoproduct;
pub use semi_product::SemiProduct;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use traversable_filterable::TraversableFilterable;
