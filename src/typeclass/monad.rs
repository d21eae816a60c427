//! Monad - a pointed functor with dependent sequencing.
//!
//! `Monad` adds no operations of its own. It names the combination of
//! [`Of`](super::Of), [`Covariant`](super::Covariant) and
//! [`FlatMap`](super::FlatMap) so that generic code can ask for all three
//! with one bound.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! flat_map(of(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! flat_map(fa, of) == fa
//! ```
//!
//! ## Associativity
//!
//! ```text
//! flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))
//! ```

use super::flat_map::FlatMap;
use super::of::Pointed;

/// A pointed functor with `flat_map`.
pub trait Monad: Pointed + FlatMap {}

impl<F: Pointed + FlatMap> Monad for F {}
