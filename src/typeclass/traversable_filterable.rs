//! Effectful filtering for structures that are both traversable and
//! filterable.
//!
//! Each combinator traverses with an applicative and then filters or
//! partitions the collected results, so the effects of every target run
//! even for targets that end up dropped.

use crate::data::Either;
use crate::hkt::{Kind, Value};

use super::applicative::Applicative;
use super::filterable::{self, Filterable};
use super::traversable::Traversable;

/// A structure that can be both traversed and filtered.
pub trait TraversableFilterable: Traversable + Filterable {}

impl<T: Traversable + Filterable> TraversableFilterable for T {}

/// Traverses with `function` and keeps the `Some` results.
///
/// # Examples
///
/// ```rust
/// use kindling::data::{ArrayTypeLambda, OptionTypeLambda};
/// use kindling::typeclass::traversable_filterable;
///
/// let parse_small = |s: &str| s.parse::<u8>().ok().map(|n| (n < 10).then_some(n));
/// assert_eq!(
///     traversable_filterable::traverse_filter_map(&ArrayTypeLambda, &OptionTypeLambda, vec!["1", "50", "2"], parse_small),
///     Some(vec![1, 2])
/// );
/// ```
pub fn traverse_filter_map<T, H, A, B>(
    dict: &T,
    applicative: &H,
    fa: Kind<T, A>,
    function: impl FnMut(A) -> Kind<H, Option<B>>,
) -> Kind<H, Kind<T, B>>
where
    T: TraversableFilterable,
    H: Applicative,
    A: Value,
    B: Value,
{
    let traversed = dict.traverse::<H, A, Option<B>>(applicative, fa, function);
    applicative.map::<Kind<T, Option<B>>, Kind<T, B>>(traversed, |options| filterable::compact::<T, B>(dict, options))
}

/// Traverses with `function` and separates the `Left` and `Right` results.
pub fn traverse_partition_map<T, H, A, B, C>(
    dict: &T,
    applicative: &H,
    fa: Kind<T, A>,
    function: impl FnMut(A) -> Kind<H, Either<B, C>>,
) -> Kind<H, (Kind<T, B>, Kind<T, C>)>
where
    T: TraversableFilterable,
    H: Applicative,
    A: Value,
    B: Value,
    C: Value,
{
    let traversed = dict.traverse::<H, A, Either<B, C>>(applicative, fa, function);
    applicative.map::<Kind<T, Either<B, C>>, (Kind<T, B>, Kind<T, C>)>(traversed, |eithers| {
        filterable::separate::<T, B, C>(dict, eithers)
    })
}

/// Keeps the targets whose effectful `predicate` yields `true`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::{ArrayTypeLambda, ResultTypeLambda};
/// use kindling::typeclass::traversable_filterable;
///
/// let dict = ResultTypeLambda::<String>::new();
/// let is_even = |n: &i32| if *n < 0 { Err(format!("negative: {n}")) } else { Ok(n % 2 == 0) };
/// assert_eq!(traversable_filterable::traverse_filter(&ArrayTypeLambda, &dict, vec![1, 2, 4], is_even), Ok(vec![2, 4]));
/// assert!(traversable_filterable::traverse_filter(&ArrayTypeLambda, &dict, vec![1, -2], is_even).is_err());
/// ```
pub fn traverse_filter<T, H, A>(
    dict: &T,
    applicative: &H,
    fa: Kind<T, A>,
    mut predicate: impl FnMut(&A) -> Kind<H, bool>,
) -> Kind<H, Kind<T, A>>
where
    T: TraversableFilterable,
    H: Applicative,
    A: Value,
{
    traverse_filter_map::<T, H, A, A>(dict, applicative, fa, |a| {
        let keep = predicate(&a);
        applicative.map::<bool, Option<A>>(keep, move |keep| keep.then(|| a.clone()))
    })
}

/// Splits the targets by an effectful `predicate`.
///
/// As with [`partition`](filterable::partition), the first structure holds
/// the targets the predicate rejects.
pub fn traverse_partition<T, H, A>(
    dict: &T,
    applicative: &H,
    fa: Kind<T, A>,
    mut predicate: impl FnMut(&A) -> Kind<H, bool>,
) -> Kind<H, (Kind<T, A>, Kind<T, A>)>
where
    T: TraversableFilterable,
    H: Applicative,
    A: Value,
{
    traverse_partition_map::<T, H, A, A, A>(dict, applicative, fa, |a| {
        let keep = predicate(&a);
        applicative.map::<bool, Either<A, A>>(keep, move |keep| {
            if keep { Either::Right(a.clone()) } else { Either::Left(a.clone()) }
        })
    })
}
