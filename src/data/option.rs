//! Instances for [`Option`].
//!
//! `None` is the failure: products stop at the first `None`, coproducts
//! stop at the first `Some`. Every short-circuit stops pulling from the
//! input iterator, so infinite inputs are fine as long as the deciding
//! element eventually arrives.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::OptionTypeLambda;
//! use kindling::typeclass::SemiProduct;
//!
//! assert_eq!(OptionTypeLambda.product(Some(1), Some(2)), Some((1, 2)));
//! assert_eq!(OptionTypeLambda.product(None::<i32>, Some(2)), None);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;

use super::either::Either;
use super::error::UnwrapError;
use crate::hkt::{Kind, TypeLambda, Value};
use crate::typeclass::{
    Applicative, Coproduct, Covariant, Filterable, FlatMap, Foldable, Invariant, Monoid, Of, Order, Product,
    SemiCoproduct, SemiProduct, Semigroup, Traversable, covariant, monoid, order, semi_coproduct, semigroup,
};

/// The type lambda of [`Option`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionTypeLambda;

impl TypeLambda for OptionTypeLambda {
    type Kind<A: Value> = Option<A>;
}

// =============================================================================
// Type class instances
// =============================================================================

impl Invariant for OptionTypeLambda {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        covariant::imap(self, fa, to, from)
    }
}

impl Covariant for OptionTypeLambda {
    fn map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> B) -> Kind<Self, B> {
        fa.map(function)
    }
}

impl Of for OptionTypeLambda {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        Some(value)
    }
}

impl FlatMap for OptionTypeLambda {
    fn flat_map<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        function: impl FnMut(A) -> Kind<Self, B>,
    ) -> Kind<Self, B> {
        fa.and_then(function)
    }
}

impl SemiProduct for OptionTypeLambda {
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)> {
        fa.zip(fb)
    }

    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>> {
        std::iter::once(fa).chain(collection).collect()
    }
}

impl Product for OptionTypeLambda {
    fn product_all<A: Value>(&self, collection: impl IntoIterator<Item = Kind<Self, A>>) -> Kind<Self, Vec<A>> {
        collection.into_iter().collect()
    }
}

impl SemiCoproduct for OptionTypeLambda {
    fn coproduct<A: Value>(&self, fa: Kind<Self, A>, that: Kind<Self, A>) -> Kind<Self, A> {
        fa.or(that)
    }

    fn coproduct_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, A> {
        fa.or_else(|| collection.into_iter().flatten().next())
    }
}

impl Coproduct for OptionTypeLambda {
    fn zero<A: Value>(&self) -> Kind<Self, A> {
        None
    }
}

impl Foldable for OptionTypeLambda {
    fn reduce<A: Value, B>(&self, fa: Kind<Self, A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        match fa {
            Some(value) => function(initial, value),
            None => initial,
        }
    }
}

impl Traversable for OptionTypeLambda {
    fn traverse<H: Applicative, A: Value, B: Value>(
        &self,
        applicative: &H,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Kind<H, B>,
    ) -> Kind<H, Kind<Self, B>> {
        match fa {
            Some(value) => applicative.map::<B, Option<B>>(function(value), Some),
            None => applicative.of::<Option<B>>(None),
        }
    }
}

impl Filterable for OptionTypeLambda {
    fn partition_map<A: Value, B: Value, C: Value>(
        &self,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Either<B, C>,
    ) -> (Kind<Self, B>, Kind<Self, C>) {
        match fa.map(&mut function) {
            Some(Either::Left(left)) => (Some(left), None),
            Some(Either::Right(right)) => (None, Some(right)),
            None => (None, None),
        }
    }

    fn filter_map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> Option<B>) -> Kind<Self, B> {
        fa.and_then(function)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Extracts the value, or reports which variant was found.
///
/// # Errors
///
/// Returns [`UnwrapError`] when `fa` is `None`.
pub fn try_get<A>(fa: Option<A>) -> Result<A, UnwrapError> {
    fa.ok_or(UnwrapError::new("Option", "None"))
}

/// Extracts the value.
///
/// # Panics
///
/// Panics when `fa` is `None`.
#[track_caller]
pub fn get_or_throw<A>(fa: Option<A>) -> A {
    match try_get(fa) {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

/// Extracts the value, panicking with the message built by `on_none`.
///
/// # Panics
///
/// Panics when `fa` is `None`.
#[track_caller]
pub fn get_or_throw_with<A, M: Display>(fa: Option<A>, on_none: impl FnOnce() -> M) -> A {
    match fa {
        Some(value) => value,
        None => panic!("{}", on_none()),
    }
}

/// Returns `fa` when it is `Some`; otherwise evaluates `that`.
pub fn or_else<A>(fa: Option<A>, that: impl FnOnce() -> Option<A>) -> Option<A> {
    fa.or_else(that)
}

/// The first `Some` among `fa` and `collection`, or `None`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::option;
///
/// let parsed = option::first_some_of(None, ["x", "7", "8"].map(|s| s.parse::<i32>().ok()));
/// assert_eq!(parsed, Some(7));
/// ```
pub fn first_some_of<A: Value>(fa: Option<A>, collection: impl IntoIterator<Item = Option<A>>) -> Option<A> {
    semi_coproduct::first_success_of(&OptionTypeLambda, fa, collection)
}

/// Keeps a value only when it satisfies `predicate`.
pub fn lift_predicate<A>(predicate: impl Fn(&A) -> bool) -> impl Fn(A) -> Option<A> {
    move |value| predicate(&value).then_some(value)
}

/// Orders `None` before every `Some`, and `Some` values by `order`.
pub fn get_order<A: 'static>(order: Order<A>) -> Order<Option<A>> {
    order::make(move |left: &Option<A>, right: &Option<A>| match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => order.compare(left, right),
    })
}

/// Combines the contents of two `Some`s with `semigroup`; `None` is the
/// identity.
///
/// # Examples
///
/// ```rust
/// use kindling::data::option;
/// use kindling::typeclass::semigroup;
///
/// let monoid = option::get_monoid(semigroup::sum::<i32>());
/// assert_eq!(monoid.combine_all(vec![Some(1), None, Some(2)]), Some(3));
/// assert_eq!(monoid.combine_all(Vec::new()), None);
/// ```
pub fn get_monoid<A: Value>(semigroup: Semigroup<A>) -> Monoid<Option<A>> {
    let combine = move |left: Option<A>, right: Option<A>| match (left, right) {
        (Some(left), Some(right)) => Some(semigroup.combine(left, right)),
        (left, None) => left,
        (None, right) => right,
    };
    monoid::from_semigroup(semigroup::make(combine), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ArrayTypeLambda;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn product_many_stops_pulling_at_the_first_none() {
        let pulled = Cell::new(0);
        let collection = (1..).map(|n| {
            pulled.set(pulled.get() + 1);
            (n < 3).then_some(n)
        });
        assert_eq!(OptionTypeLambda.product_many(Some(0), collection), None);
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    #[case(vec![], Some(vec![]))]
    #[case(vec![Some(1), Some(2)], Some(vec![1, 2]))]
    #[case(vec![Some(1), None], None)]
    fn product_all(#[case] collection: Vec<Option<i32>>, #[case] expected: Option<Vec<i32>>) {
        assert_eq!(OptionTypeLambda.product_all(collection), expected);
    }

    #[rstest]
    fn coproduct_many_takes_the_first_some() {
        assert_eq!(OptionTypeLambda.coproduct_many(None, [None, Some(2), Some(3)]), Some(2));
        assert_eq!(OptionTypeLambda.coproduct_many(None::<i32>, []), None);
    }

    #[rstest]
    fn traverse_into_array_is_cartesian_on_some() {
        let result = OptionTypeLambda.traverse(&ArrayTypeLambda, Some(2), |n: i32| vec![n, n * 10]);
        assert_eq!(result, vec![Some(2), Some(20)]);
        let none = OptionTypeLambda.traverse(&ArrayTypeLambda, None, |n: i32| vec![n]);
        assert_eq!(none, vec![None]);
    }

    #[rstest]
    #[case(Some(4), (None, Some(4)))]
    #[case(Some(-4), (Some(-4), None))]
    #[case(None, (None, None))]
    fn partition_map_routes_by_side(#[case] fa: Option<i32>, #[case] expected: (Option<i32>, Option<i32>)) {
        let result =
            OptionTypeLambda.partition_map(fa, |n: i32| if n > 0 { Either::Right(n) } else { Either::Left(n) });
        assert_eq!(result, expected);
    }

    #[rstest]
    fn try_get_reports_none() {
        assert_eq!(try_get(None::<i32>), Err(UnwrapError::new("Option", "None")));
        assert_eq!(try_get(Some(1)), Ok(1));
    }

    #[rstest]
    #[should_panic(expected = "Option::get_or_throw: found None")]
    fn get_or_throw_panics_on_none() {
        get_or_throw(None::<i32>);
    }

    #[rstest]
    #[should_panic(expected = "missing port")]
    fn get_or_throw_with_uses_the_message() {
        get_or_throw_with(None::<u16>, || "missing port");
    }

    #[rstest]
    fn or_else_is_lazy() {
        let called = Cell::new(false);
        let result = or_else(Some(1), || {
            called.set(true);
            Some(2)
        });
        assert_eq!(result, Some(1));
        assert!(!called.get());
    }

    #[rstest]
    fn lift_predicate_filters() {
        let even = lift_predicate(|n: &i32| n % 2 == 0);
        assert_eq!(even(4), Some(4));
        assert_eq!(even(3), None);
    }

    #[rstest]
    fn get_order_puts_none_first() {
        let order = get_order(order::from_ord::<i32>());
        assert_eq!(order.compare(&None, &Some(i32::MIN)), Ordering::Less);
        assert_eq!(order.compare(&Some(2), &Some(1)), Ordering::Greater);
    }

    #[rstest]
    fn get_monoid_keeps_a_lone_some() {
        let monoid = get_monoid(semigroup::string());
        assert_eq!(monoid.combine(None, Some("a".to_string())), Some("a".to_string()));
    }
}
