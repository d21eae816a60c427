//! Bicovariant type class - mapping over both slots of a two-slot
//! constructor.
//!
//! `Either<E, A>`, `Result<A, E>` and `These<E, A>` carry an error slot
//! next to their target. The error type is a parameter of the marker
//! (`EitherTypeLambda<E>`), so changing it changes the dictionary as well:
//! [`Bicovariant::WithError`] names the marker for the new error type.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! bimap(fa, |e| e, |a| a) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! bimap(bimap(fa, f1, g1), f2, g2) == bimap(fa, |e| f2(f1(e)), |a| g2(g1(a)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::{Either, EitherTypeLambda};
//! use kindling::typeclass::Bicovariant;
//!
//! let dict = EitherTypeLambda::<i32>::new();
//! let failed: Either<String, bool> = dict.bimap(Either::Left(404), |code| format!("E{code}"), |n: u8| n > 0);
//! assert_eq!(failed, Either::Left("E404".to_string()));
//! ```

use crate::hkt::{Kind, TypeLambda, Value};

use super::covariant::Covariant;

/// The dictionary for mapping the error and target slots together.
pub trait Bicovariant: TypeLambda {
    /// The type in the error slot.
    type Error: Value;

    /// The same constructor with its error slot set to `E2`.
    type WithError<E2: Value>: Bicovariant<Error = E2>;

    /// Maps the error slot with `on_error` and the target with `on_value`.
    fn bimap<E2: Value, A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        on_error: impl FnMut(Self::Error) -> E2,
        on_value: impl FnMut(A) -> B,
    ) -> Kind<Self::WithError<E2>, B>;
}

/// Maps only the error slot.
pub fn map_left<F: Bicovariant, E2: Value, A: Value>(
    dict: &F,
    fa: Kind<F, A>,
    on_error: impl FnMut(F::Error) -> E2,
) -> Kind<F::WithError<E2>, A> {
    dict.bimap::<E2, A, A>(fa, on_error, |a| a)
}

/// Maps only the target slot.
pub fn map<F: Bicovariant, A: Value, B: Value>(
    dict: &F,
    fa: Kind<F, A>,
    on_value: impl FnMut(A) -> B,
) -> Kind<F::WithError<F::Error>, B> {
    dict.bimap::<F::Error, A, B>(fa, |e| e, on_value)
}

/// Maps both slots of the inner layer of `F<G<E, A>>`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::{ArrayTypeLambda, ResultTypeLambda};
/// use kindling::typeclass::bicovariant;
///
/// let results: Vec<Result<i32, &str>> = vec![Ok(1), Err("bad")];
/// let mapped = bicovariant::bimap_composition(
///     &ArrayTypeLambda,
///     &ResultTypeLambda::<&str>::new(),
///     results,
///     str::len,
///     |n: i32| n * 2,
/// );
/// assert_eq!(mapped, vec![Ok(2), Err(3)]);
/// ```
pub fn bimap_composition<F, G, E2, A, B>(
    outer: &F,
    inner: &G,
    fga: Kind<F, Kind<G, A>>,
    mut on_error: impl FnMut(G::Error) -> E2,
    mut on_value: impl FnMut(A) -> B,
) -> Kind<F, Kind<G::WithError<E2>, B>>
where
    F: Covariant,
    G: Bicovariant,
    E2: Value,
    A: Value,
    B: Value,
{
    outer.map::<Kind<G, A>, Kind<G::WithError<E2>, B>>(fga, |ga| {
        inner.bimap::<E2, A, B>(ga, &mut on_error, &mut on_value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Either, EitherTypeLambda, ResultTypeLambda, These, TheseTypeLambda};
    use rstest::rstest;

    #[rstest]
    #[case(Ok(2), Ok(4))]
    #[case(Err("ab"), Err(2))]
    fn bimap_on_result(#[case] input: Result<i32, &'static str>, #[case] expected: Result<i32, usize>) {
        let dict = ResultTypeLambda::<&'static str>::new();
        assert_eq!(dict.bimap(input, str::len, |n: i32| n * 2), expected);
    }

    #[rstest]
    fn bimap_on_these_maps_both_sides_of_both() {
        let dict = TheseTypeLambda::<i32>::new();
        let mapped = dict.bimap(These::Both(1, 'a'), |e| e + 1, |c: char| c.to_ascii_uppercase());
        assert_eq!(mapped, These::Both(2, 'A'));
    }

    #[rstest]
    fn map_left_leaves_the_target_alone() {
        let dict = EitherTypeLambda::<i32>::new();
        let right: Either<i32, &str> = Either::Right("kept");
        assert_eq!(map_left(&dict, right, |e| e.to_string()), Either::<String, &str>::Right("kept"));
    }

    #[rstest]
    fn map_keeps_the_error_type() {
        let dict = EitherTypeLambda::<&str>::new();
        assert_eq!(map(&dict, Either::<&str, i32>::Right(1), |n| n + 1), Either::Right(2));
    }
}
