//! Foldable type class - reducing a structure to a summary value.
//!
//! `reduce` is the universal eliminator: every other way of consuming a
//! foldable structure (collecting, counting, searching, combining with a
//! monoid) is derived from it here.
//!
//! # Laws
//!
//! ## Consistency with `to_array`
//!
//! ```text
//! reduce(fa, b, f) == to_array(fa).into_iter().fold(b, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::ArrayTypeLambda;
//! use kindling::typeclass::Foldable;
//!
//! let sum = ArrayTypeLambda.reduce(vec![1, 2, 3, 4, 5], 0, |total, n| total + n);
//! assert_eq!(sum, 15);
//! ```

use crate::hkt::{Composition, Kind, TypeLambda, Value};

use super::coproduct::Coproduct;
use super::monad::Monad;
use super::monoid::Monoid;

/// The dictionary for folding the targets of a structure, left to right.
pub trait Foldable: TypeLambda {
    /// Folds every target of `fa` into `initial` with `function`.
    fn reduce<A: Value, B>(&self, fa: Kind<Self, A>, initial: B, function: impl FnMut(B, A) -> B) -> B;
}

/// Folds through both layers of `F<G<A>>`.
pub fn reduce_composition<F, G, A, B>(
    outer: &F,
    inner: &G,
    fga: Kind<F, Kind<G, A>>,
    initial: B,
    mut function: impl FnMut(B, A) -> B,
) -> B
where
    F: Foldable,
    G: Foldable,
    A: Value,
{
    outer.reduce::<Kind<G, A>, B>(fga, initial, |accumulated, ga| {
        inner.reduce::<A, B>(ga, accumulated, &mut function)
    })
}

/// Collects every target, in order.
pub fn to_array<F: Foldable, A: Value>(dict: &F, fa: Kind<F, A>) -> Vec<A> {
    to_array_map::<F, A, A>(dict, fa, |a| a)
}

/// Collects the image of every target under `function`, in order.
pub fn to_array_map<F: Foldable, A: Value, B>(dict: &F, fa: Kind<F, A>, mut function: impl FnMut(A) -> B) -> Vec<B> {
    dict.reduce::<A, Vec<B>>(fa, Vec::new(), |mut collected, a| {
        collected.push(function(a));
        collected
    })
}

/// Maps every target into a monoid and combines the results.
///
/// # Examples
///
/// ```rust
/// use kindling::data::ArrayTypeLambda;
/// use kindling::typeclass::{foldable, monoid};
///
/// let words = vec!["a", "bb", "ccc"];
/// let total = foldable::combine_map(&ArrayTypeLambda, words, &monoid::sum::<usize>(), |w: &str| w.len());
/// assert_eq!(total, 6);
/// ```
pub fn combine_map<F: Foldable, A: Value, M: Value>(
    dict: &F,
    fa: Kind<F, A>,
    monoid: &Monoid<M>,
    mut function: impl FnMut(A) -> M,
) -> M {
    dict.reduce::<A, M>(fa, monoid.empty(), |accumulated, a| monoid.combine(accumulated, function(a)))
}

/// Folds with an effectful step, sequencing the effects with `monad`.
///
/// For short-circuiting monads the remaining steps are skipped once a step
/// fails, although the structure itself is still walked.
///
/// # Examples
///
/// ```rust
/// use kindling::data::{ArrayTypeLambda, OptionTypeLambda};
/// use kindling::typeclass::foldable;
///
/// let checked = |total: u8, n: u8| total.checked_add(n);
/// assert_eq!(foldable::reduce_kind(&ArrayTypeLambda, &OptionTypeLambda, vec![1, 2], 0, checked), Some(3));
/// assert_eq!(foldable::reduce_kind(&ArrayTypeLambda, &OptionTypeLambda, vec![200, 100], 0, checked), None);
/// ```
pub fn reduce_kind<F, G, A, B>(
    dict: &F,
    monad: &G,
    fa: Kind<F, A>,
    initial: B,
    mut function: impl FnMut(B, A) -> Kind<G, B>,
) -> Kind<G, B>
where
    F: Foldable,
    G: Monad,
    A: Value,
    B: Value,
{
    dict.reduce::<A, Kind<G, B>>(fa, monad.of::<B>(initial), |accumulated, a| {
        monad.flat_map::<B, B>(accumulated, |b| function(b, a.clone()))
    })
}

/// Maps every target into a computation and returns the first success.
///
/// Targets after the first success are not mapped.
pub fn coproduct_map_kind<F, G, A, B>(
    dict: &F,
    coproduct: &G,
    fa: Kind<F, A>,
    function: impl FnMut(A) -> Kind<G, B>,
) -> Kind<G, B>
where
    F: Foldable,
    G: Coproduct,
    A: Value,
    B: Value,
{
    coproduct.coproduct_all::<B>(to_array::<F, A>(dict, fa).into_iter().map(function))
}

/// Counts the targets.
pub fn length<F: Foldable, A: Value>(dict: &F, fa: Kind<F, A>) -> usize {
    dict.reduce::<A, usize>(fa, 0, |count, _| count + 1)
}

/// Returns `true` when there are no targets.
pub fn is_empty<F: Foldable, A: Value>(dict: &F, fa: Kind<F, A>) -> bool {
    length::<F, A>(dict, fa) == 0
}

/// Returns the first target satisfying `predicate`.
pub fn find<F: Foldable, A: Value>(dict: &F, fa: Kind<F, A>, mut predicate: impl FnMut(&A) -> bool) -> Option<A> {
    dict.reduce::<A, Option<A>>(fa, None, |found, a| match found {
        Some(_) => found,
        None if predicate(&a) => Some(a),
        None => None,
    })
}

/// Returns `true` when some target satisfies `predicate`.
pub fn exists<F: Foldable, A: Value>(dict: &F, fa: Kind<F, A>, mut predicate: impl FnMut(&A) -> bool) -> bool {
    dict.reduce::<A, bool>(fa, false, |seen, a| seen || predicate(&a))
}

/// Returns `true` when every target satisfies `predicate`.
pub fn for_all<F: Foldable, A: Value>(dict: &F, fa: Kind<F, A>, mut predicate: impl FnMut(&A) -> bool) -> bool {
    dict.reduce::<A, bool>(fa, true, |holds, a| holds && predicate(&a))
}

impl<F: Foldable, G: Foldable> Foldable for Composition<F, G> {
    fn reduce<A: Value, B>(&self, fa: Kind<Self, A>, initial: B, function: impl FnMut(B, A) -> B) -> B {
        reduce_composition::<F, G, A, B>(self.outer(), self.inner(), fa, initial, function)
    }
}
