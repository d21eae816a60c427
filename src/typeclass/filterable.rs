//! Filterable type class - dropping and splitting targets.
//!
//! `filter_map` keeps the targets a function maps to `Some`; `partition_map`
//! routes every target to one of two structures through an [`Either`].
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! filter_map(fa, Some) == fa
//! ```
//!
//! ## Consistency
//!
//! ```text
//! partition_map(fa, f) == (filter_map(fa, |a| f(a).left()), filter_map(fa, |a| f(a).right()))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::ArrayTypeLambda;
//! use kindling::typeclass::filterable;
//!
//! let (odd, even) = filterable::partition(&ArrayTypeLambda, vec![1, 2, 3, 4], |n| n % 2 == 0);
//! assert_eq!(odd, vec![1, 3]);
//! assert_eq!(even, vec![2, 4]);
//! ```

use crate::data::Either;
use crate::hkt::{Composition, Kind, TypeLambda, Value};

use super::covariant::Covariant;

/// The dictionary for filtering and partitioning targets.
pub trait Filterable: TypeLambda {
    /// Splits `fa` into the `Left` and `Right` images of `function`.
    fn partition_map<A: Value, B: Value, C: Value>(
        &self,
        fa: Kind<Self, A>,
        function: impl FnMut(A) -> Either<B, C>,
    ) -> (Kind<Self, B>, Kind<Self, C>);

    /// Keeps the `Some` images of `function`.
    fn filter_map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> Option<B>) -> Kind<Self, B>;
}

/// Drops every `None`.
pub fn compact<F: Filterable, A: Value>(dict: &F, fa: Kind<F, Option<A>>) -> Kind<F, A> {
    dict.filter_map::<Option<A>, A>(fa, |a| a)
}

/// Splits a structure of `Either` values into lefts and rights.
pub fn separate<F: Filterable, B: Value, C: Value>(dict: &F, fa: Kind<F, Either<B, C>>) -> (Kind<F, B>, Kind<F, C>) {
    dict.partition_map::<Either<B, C>, B, C>(fa, |either| either)
}

/// Keeps the targets satisfying `predicate`.
pub fn filter<F: Filterable, A: Value>(dict: &F, fa: Kind<F, A>, mut predicate: impl FnMut(&A) -> bool) -> Kind<F, A> {
    dict.filter_map::<A, A>(fa, |a| if predicate(&a) { Some(a) } else { None })
}

/// Splits the targets by `predicate`.
///
/// The first structure holds the targets that fail the predicate, the
/// second those that satisfy it.
pub fn partition<F: Filterable, A: Value>(
    dict: &F,
    fa: Kind<F, A>,
    mut predicate: impl FnMut(&A) -> bool,
) -> (Kind<F, A>, Kind<F, A>) {
    dict.partition_map::<A, A, A>(fa, |a| if predicate(&a) { Either::Right(a) } else { Either::Left(a) })
}

/// Filters the inner layer of `F<G<A>>`.
pub fn filter_map_composition<F, G, A, B>(
    outer: &F,
    inner: &G,
    fga: Kind<F, Kind<G, A>>,
    mut function: impl FnMut(A) -> Option<B>,
) -> Kind<F, Kind<G, B>>
where
    F: Covariant,
    G: Filterable,
    A: Value,
    B: Value,
{
    outer.map::<Kind<G, A>, Kind<G, B>>(fga, |ga| inner.filter_map::<A, B>(ga, &mut function))
}

/// Partitions the inner layer of `F<G<A>>`.
///
/// `function` runs once per target; the outer shape is duplicated.
pub fn partition_map_composition<F, G, A, B, C>(
    outer: &F,
    inner: &G,
    fga: Kind<F, Kind<G, A>>,
    mut function: impl FnMut(A) -> Either<B, C>,
) -> (Kind<F, Kind<G, B>>, Kind<F, Kind<G, C>>)
where
    F: Covariant,
    G: Filterable,
    A: Value,
    B: Value,
    C: Value,
{
    let split = outer.map::<Kind<G, A>, (Kind<G, B>, Kind<G, C>)>(fga, |ga| {
        inner.partition_map::<A, B, C>(ga, &mut function)
    });
    let lefts = outer.map::<(Kind<G, B>, Kind<G, C>), Kind<G, B>>(split.clone(), |(left, _)| left);
    let rights = outer.map::<(Kind<G, B>, Kind<G, C>), Kind<G, C>>(split, |(_, right)| right);
    (lefts, rights)
}

impl<F: Covariant, G: Filterable> Filterable for Composition<F, G> {
    fn partition_map<A: Value, B: Value, C: Value>(
        &self,
        fa: Kind<Self, A>,
        function: impl FnMut(A) -> Either<B, C>,
    ) -> (Kind<Self, B>, Kind<Self, C>) {
        partition_map_composition::<F, G, A, B, C>(self.outer(), self.inner(), fa, function)
    }

    fn filter_map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> Option<B>) -> Kind<Self, B> {
        filter_map_composition::<F, G, A, B>(self.outer(), self.inner(), fa, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ArrayTypeLambda, OptionTypeLambda};
    use rstest::rstest;

    #[rstest]
    #[case(Some(4), Some(4))]
    #[case(Some(3), None)]
    #[case(None, None)]
    fn filter_option_by_parity(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(filter(&OptionTypeLambda, input, |n| n % 2 == 0), expected);
    }

    #[rstest]
    fn compact_drops_missing_values() {
        assert_eq!(compact(&ArrayTypeLambda, vec![Some(1), None, Some(3)]), vec![1, 3]);
    }

    #[rstest]
    fn separate_routes_each_side() {
        let values = vec![Either::Left("a"), Either::Right(1), Either::Left("b")];
        assert_eq!(separate(&ArrayTypeLambda, values), (vec!["a", "b"], vec![1]));
    }

    #[rstest]
    fn partition_of_option_fills_exactly_one_side() {
        assert_eq!(partition(&OptionTypeLambda, Some(5), |n| *n > 3), (None, Some(5)));
        assert_eq!(partition(&OptionTypeLambda, Some(1), |n| *n > 3), (Some(1), None));
    }

    #[rstest]
    fn filter_map_composition_keeps_outer_shape() {
        let nested = vec![vec![1, 2, 3], vec![4]];
        let result = filter_map_composition(&ArrayTypeLambda, &ArrayTypeLambda, nested, |n: i32| {
            (n % 2 == 1).then_some(n * 10)
        });
        assert_eq!(result, vec![vec![10, 30], vec![]]);
    }

    #[rstest]
    fn partition_map_composition_calls_function_once_per_target() {
        let mut calls = 0;
        let (small, large) = partition_map_composition(&OptionTypeLambda, &ArrayTypeLambda, Some(vec![1, 20, 3]), |n: i32| {
            calls += 1;
            if n < 10 { Either::Left(n) } else { Either::Right(n.to_string()) }
        });
        assert_eq!(calls, 3);
        assert_eq!(small, Some(vec![1, 3]));
        assert_eq!(large, Some(vec!["20".to_string()]));
    }
}
