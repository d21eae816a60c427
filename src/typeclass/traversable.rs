//! Traversable type class - effectful mapping that preserves shape.
//!
//! `traverse` maps every target into an applicative computation and turns
//! the structure of computations inside out: a `Vec<Option<B>>` becomes an
//! `Option<Vec<B>>`. The applicative dictionary is passed explicitly, so
//! the same structure can be traversed with any effect.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! traverse(Identity, fa, Identity::new) == Identity::new(fa)
//! ```
//!
//! ## Naturality and composition
//!
//! Traversing with a composed applicative equals traversing twice:
//!
//! ```text
//! traverse(Composition(H, I), fa, |a| h_map(f(a), g))
//!     == h_map(traverse(H, fa, f), |fb| traverse(I, fb, g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::{ArrayTypeLambda, OptionTypeLambda};
//! use kindling::typeclass::Traversable;
//!
//! let parse = |s: &str| s.parse::<i32>().ok();
//! assert_eq!(
//!     ArrayTypeLambda.traverse(&OptionTypeLambda, vec!["1", "2"], parse),
//!     Some(vec![1, 2])
//! );
//! assert_eq!(ArrayTypeLambda.traverse(&OptionTypeLambda, vec!["1", "x"], parse), None);
//! ```

use crate::hkt::{Composition, Kind, TypeLambda, Value};

use super::applicative::Applicative;

/// The dictionary for effectful, shape-preserving mapping.
pub trait Traversable: TypeLambda {
    /// Maps every target of `fa` into `applicative` and collects the results
    /// in the original shape.
    fn traverse<H: Applicative, A: Value, B: Value>(
        &self,
        applicative: &H,
        fa: Kind<Self, A>,
        function: impl FnMut(A) -> Kind<H, B>,
    ) -> Kind<H, Kind<Self, B>>;
}

/// Traverses both layers of `F<G<A>>` with one applicative.
pub fn traverse_composition<F, G, H, A, B>(
    outer: &F,
    inner: &G,
    applicative: &H,
    fga: Kind<F, Kind<G, A>>,
    mut function: impl FnMut(A) -> Kind<H, B>,
) -> Kind<H, Kind<F, Kind<G, B>>>
where
    F: Traversable,
    G: Traversable,
    H: Applicative,
    A: Value,
    B: Value,
{
    outer.traverse::<H, Kind<G, A>, Kind<G, B>>(applicative, fga, |ga| {
        inner.traverse::<H, A, B>(applicative, ga, &mut function)
    })
}

/// Swaps the nested `F<G<H<A>>>` into `H<F<G<A>>>`.
pub fn sequence_composition<F, G, H, A>(
    outer: &F,
    inner: &G,
    applicative: &H,
    fgha: Kind<F, Kind<G, Kind<H, A>>>,
) -> Kind<H, Kind<F, Kind<G, A>>>
where
    F: Traversable,
    G: Traversable,
    H: Applicative,
    A: Value,
{
    traverse_composition::<F, G, H, Kind<H, A>, A>(outer, inner, applicative, fgha, |ha| ha)
}

/// Swaps `F<H<A>>` into `H<F<A>>`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::{ArrayTypeLambda, OptionTypeLambda};
/// use kindling::typeclass::traversable;
///
/// assert_eq!(traversable::sequence(&OptionTypeLambda, &ArrayTypeLambda, Some(vec![1, 2])), vec![Some(1), Some(2)]);
/// ```
pub fn sequence<F: Traversable, H: Applicative, A: Value>(
    dict: &F,
    applicative: &H,
    fha: Kind<F, Kind<H, A>>,
) -> Kind<H, Kind<F, A>> {
    dict.traverse::<H, Kind<H, A>, A>(applicative, fha, |ha| ha)
}

/// Runs an effect for every target and keeps the original targets.
pub fn traverse_tap<F, H, A, B>(
    dict: &F,
    applicative: &H,
    fa: Kind<F, A>,
    mut function: impl FnMut(A) -> Kind<H, B>,
) -> Kind<H, Kind<F, A>>
where
    F: Traversable,
    H: Applicative,
    A: Value,
    B: Value,
{
    dict.traverse::<H, A, A>(applicative, fa, |a| {
        let effect = function(a.clone());
        applicative.map::<B, A>(effect, move |_| a.clone())
    })
}

impl<F: Traversable, G: Traversable> Traversable for Composition<F, G> {
    fn traverse<H: Applicative, A: Value, B: Value>(
        &self,
        applicative: &H,
        fa: Kind<Self, A>,
        function: impl FnMut(A) -> Kind<H, B>,
    ) -> Kind<H, Kind<Self, B>> {
        traverse_composition::<F, G, H, A, B>(self.outer(), self.inner(), applicative, fa, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        ArrayTypeLambda, Either, EitherTypeLambda, Identity, IdentityTypeLambda, OptionTypeLambda,
        ResultTypeLambda,
    };
    use rstest::rstest;

    fn positive(n: i32) -> Result<i32, String> {
        if n > 0 { Ok(n) } else { Err(format!("{n} is not positive")) }
    }

    #[rstest]
    #[case(vec![1, 2, 3], Ok(vec![1, 2, 3]))]
    #[case(vec![1, -2, -3], Err("-2 is not positive".to_string()))]
    #[case(vec![], Ok(vec![]))]
    fn traverse_array_with_result_reports_first_failure(
        #[case] values: Vec<i32>,
        #[case] expected: Result<Vec<i32>, String>,
    ) {
        let dict = ResultTypeLambda::<String>::new();
        assert_eq!(ArrayTypeLambda.traverse(&dict, values, positive), expected);
    }

    #[rstest]
    fn traverse_with_identity_is_map() {
        let traversed = ArrayTypeLambda.traverse(&IdentityTypeLambda, vec![1, 2], |n: i32| Identity::new(n + 1));
        assert_eq!(traversed, Identity::new(vec![2, 3]));
    }

    #[rstest]
    fn traverse_composition_reaches_innermost_values() {
        let nested = vec![Some(1), None, Some(3)];
        let result = traverse_composition(&ArrayTypeLambda, &OptionTypeLambda, &OptionTypeLambda, nested, |n: i32| {
            n.checked_mul(2)
        });
        assert_eq!(result, Some(vec![Some(2), None, Some(6)]));
    }

    #[rstest]
    fn sequence_composition_swaps_three_layers() {
        let dict = EitherTypeLambda::<&str>::new();
        let nested = vec![Some(Either::Right(1)), Some(Either::Left("bad")), None];
        let result = sequence_composition(&ArrayTypeLambda, &OptionTypeLambda, &dict, nested);
        assert_eq!(result, Either::Left("bad"));
    }

    #[rstest]
    fn traverse_tap_keeps_originals_when_effects_succeed() {
        let result = traverse_tap(&ArrayTypeLambda, &OptionTypeLambda, vec![1, 2], |n: i32| Some(n.to_string()));
        assert_eq!(result, Some(vec![1, 2]));
    }

    #[rstest]
    fn traverse_option_with_array_produces_every_branch() {
        assert_eq!(OptionTypeLambda.traverse(&ArrayTypeLambda, Some(1), |n: i32| vec![n, -n]), vec![Some(1), Some(-1)]);
        assert_eq!(OptionTypeLambda.traverse(&ArrayTypeLambda, None, |n: i32| vec![n, -n]), vec![None]);
    }
}
