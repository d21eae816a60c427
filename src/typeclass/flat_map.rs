//! FlatMap type class - sequencing dependent computations.
//!
//! `flat_map` runs a computation whose shape depends on the target of the
//! previous one. For short-circuiting constructors, a failure stops the
//! chain and the continuation is never called.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))
//! ```
//!
//! Together with [`Of`](super::Of), instances must also satisfy
//! `flat_map(fa, of) == fa` and `flat_map(of(a), f) == f(a)`.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::OptionTypeLambda;
//! use kindling::typeclass::FlatMap;
//!
//! let half = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
//! assert_eq!(OptionTypeLambda.flat_map(Some(8), half), Some(4));
//! assert_eq!(OptionTypeLambda.flat_map(Some(3), half), None);
//! ```

use crate::hkt::{Kind, TypeLambda, Value};

/// The dictionary for dependent sequencing.
pub trait FlatMap: TypeLambda {
    /// Feeds every target of `fa` to `function` and flattens the results.
    fn flat_map<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        function: impl FnMut(A) -> Kind<Self, B>,
    ) -> Kind<Self, B>;
}

/// Removes one layer of nesting.
pub fn flatten<F: FlatMap, A: Value>(dict: &F, ffa: Kind<F, Kind<F, A>>) -> Kind<F, A> {
    dict.flat_map::<Kind<F, A>, A>(ffa, |fa| fa)
}

/// Sequences `fa` then `fb`, keeping the result of `fb`.
///
/// `fb` is only reached if `fa` does not short-circuit.
pub fn and_then<F: FlatMap, A: Value, B: Value>(dict: &F, fa: Kind<F, A>, fb: Kind<F, B>) -> Kind<F, B> {
    dict.flat_map::<A, B>(fa, move |_| fb.clone())
}

/// Kleisli composition: runs `first`, then feeds its result to `second`.
pub fn compose_k<F, A, B, C>(
    dict: &F,
    mut first: impl FnMut(A) -> Kind<F, B>,
    mut second: impl FnMut(B) -> Kind<F, C>,
) -> impl FnMut(A) -> Kind<F, C>
where
    F: FlatMap,
    A: Value,
    B: Value,
    C: Value,
{
    move |a: A| dict.flat_map::<B, C>(first(a), &mut second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ArrayTypeLambda, OptionTypeLambda};
    use rstest::rstest;

    fn parse(input: &'static str) -> Option<i32> {
        input.parse().ok()
    }

    fn reciprocal(n: i32) -> Option<f64> {
        if n == 0 { None } else { Some(1.0 / f64::from(n)) }
    }

    #[rstest]
    #[case("4", Some(0.25))]
    #[case("0", None)]
    #[case("x", None)]
    fn compose_k_chains_fallible_steps(#[case] input: &'static str, #[case] expected: Option<f64>) {
        let mut parse_then_invert = compose_k(&OptionTypeLambda, parse, reciprocal);
        assert_eq!(parse_then_invert(input), expected);
    }

    #[test]
    fn flatten_concatenates_arrays() {
        assert_eq!(flatten(&ArrayTypeLambda, vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
    }

    #[test]
    fn and_then_keeps_second_when_first_succeeds() {
        assert_eq!(and_then(&OptionTypeLambda, Some(1), Some("b")), Some("b"));
        assert_eq!(and_then(&OptionTypeLambda, None::<i32>, Some("b")), None);
    }

    #[test]
    fn and_then_on_arrays_repeats_second_per_element() {
        assert_eq!(and_then(&ArrayTypeLambda, vec![1, 2], vec!['a', 'b']), vec!['a', 'b', 'a', 'b']);
    }
}
