//! Covariant type class - mapping over the target of a type constructor.
//!
//! A covariant functor transforms the contents of a constructor without
//! changing its shape. It is the base of the applicative and monadic
//! hierarchies.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(map(fa, f), g) == map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::OptionTypeLambda;
//! use kindling::typeclass::Covariant;
//!
//! let transformed = OptionTypeLambda.map(Some(5), |n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let untouched: Option<String> = OptionTypeLambda.map(None::<i32>, |n| n.to_string());
//! assert_eq!(untouched, None);
//! ```

use crate::hkt::{Composition, Kind, Value};

use super::invariant::Invariant;

/// The covariant functor dictionary.
///
/// # Laws
///
/// `map` must preserve identity and composition; see the module docs.
pub trait Covariant: Invariant {
    /// Applies `function` to every target inside `fa`.
    fn map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> B) -> Kind<Self, B>;
}

/// Implements [`Invariant::imap`] for a covariant instance by ignoring the
/// backward function.
#[inline]
pub fn imap<F: Covariant, A: Value, B: Value>(
    dict: &F,
    fa: Kind<F, A>,
    to: impl Fn(A) -> B,
    _from: impl Fn(B) -> A,
) -> Kind<F, B> {
    dict.map::<A, B>(fa, to)
}

/// Maps through both layers of `F<G<A>>`.
///
/// Equivalent to `outer.map(fga, |ga| inner.map(ga, function))`.
pub fn map_composition<F, G, A, B>(
    outer: &F,
    inner: &G,
    fga: Kind<F, Kind<G, A>>,
    mut function: impl FnMut(A) -> B,
) -> Kind<F, Kind<G, B>>
where
    F: Covariant,
    G: Covariant,
    A: Value,
    B: Value,
{
    outer.map::<Kind<G, A>, Kind<G, B>>(fga, |ga| inner.map::<A, B>(ga, &mut function))
}

/// Lifts `function` into a function between kinds.
pub fn lift<F: Covariant, A: Value, B: Value>(
    dict: &F,
    mut function: impl FnMut(A) -> B,
) -> impl FnMut(Kind<F, A>) -> Kind<F, B> {
    move |fa: Kind<F, A>| dict.map::<A, B>(fa, &mut function)
}

/// Applies every function inside `functions` to the same `value`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::ArrayTypeLambda;
/// use kindling::typeclass::covariant;
///
/// let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
/// assert_eq!(covariant::flap(&ArrayTypeLambda, 3, functions), vec![4, 30]);
/// ```
pub fn flap<F, A, B, Function>(dict: &F, value: A, functions: Kind<F, Function>) -> Kind<F, B>
where
    F: Covariant,
    A: Value,
    B: Value,
    Function: FnMut(A) -> B + Value,
{
    dict.map::<Function, B>(functions, move |mut function| function(value.clone()))
}

/// Replaces every target with `value`.
pub fn as_<F: Covariant, A: Value, B: Value>(dict: &F, fa: Kind<F, A>, value: B) -> Kind<F, B> {
    dict.map::<A, B>(fa, move |_| value.clone())
}

/// Discards every target, keeping only the shape.
pub fn as_unit<F: Covariant, A: Value>(dict: &F, fa: Kind<F, A>) -> Kind<F, ()> {
    as_::<F, A, ()>(dict, fa, ())
}

/// Extends a do-notation record with a value computed from it.
pub fn let_<F: Covariant, S: Value, B: Value>(
    dict: &F,
    fs: Kind<F, S>,
    mut function: impl FnMut(&S) -> B,
) -> Kind<F, (S, B)> {
    dict.map::<S, (S, B)>(fs, move |record| {
        let value = function(&record);
        (record, value)
    })
}

impl<F: Covariant, G: Covariant> Covariant for Composition<F, G> {
    fn map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> B) -> Kind<Self, B> {
        map_composition::<F, G, A, B>(self.outer(), self.inner(), fa, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ArrayTypeLambda, Either, EitherTypeLambda, OptionTypeLambda};
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(4))]
    #[case(None, None)]
    fn option_map_doubles(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionTypeLambda.map(input, |n| n * 2), expected);
    }

    #[test]
    fn either_map_keeps_left_untouched() {
        let left: Either<&str, i32> = Either::Left("boom");
        assert_eq!(EitherTypeLambda::new().map(left, |n: i32| n + 1), Either::Left("boom"));
    }

    #[test]
    fn as_replaces_each_element() {
        assert_eq!(as_(&ArrayTypeLambda, vec![1, 2, 3], 'x'), vec!['x', 'x', 'x']);
    }

    #[test]
    fn as_unit_preserves_shape() {
        assert_eq!(as_unit(&OptionTypeLambda, Some("value")), Some(()));
        assert_eq!(as_unit(&OptionTypeLambda, None::<i32>), None);
    }

    #[test]
    fn let_appends_computed_field() {
        let record = Some(((), 4));
        let result = let_(&OptionTypeLambda, record, |((), n)| n * n);
        assert_eq!(result, Some((((), 4), 16)));
    }

    #[test]
    fn lift_reuses_function_across_calls() {
        let mut counter = 0;
        {
            let mut lifted = lift(&ArrayTypeLambda, |n: i32| {
                counter += 1;
                n + 1
            });
            assert_eq!(lifted(vec![1, 2]), vec![2, 3]);
            assert_eq!(lifted(vec![10]), vec![11]);
        }
        assert_eq!(counter, 3);
    }

    #[test]
    fn map_composition_equals_nested_maps() {
        let nested = vec![Some(1), None, Some(3)];
        let composed = map_composition(&ArrayTypeLambda, &OptionTypeLambda, nested.clone(), |n| n + 100);
        let direct = ArrayTypeLambda.map(nested, |inner| OptionTypeLambda.map(inner, |n: i32| n + 100));
        assert_eq!(composed, direct);
    }

    #[test]
    fn flap_applies_functions_in_option() {
        let function: Option<fn(i32) -> String> = Some(|n| format!("<{n}>"));
        assert_eq!(flap(&OptionTypeLambda, 7, function), Some("<7>".to_string()));
    }
}
