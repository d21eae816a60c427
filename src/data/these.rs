//! These - a failure, a success, or a success that carries warnings.
//!
//! [`These<E, A>`] adds a third case to [`Either`]: `Both(E, A)` holds a
//! value together with an accumulated left side. Two dictionaries exist for
//! it:
//!
//! - [`TheseTypeLambda<E>`]: the instances that need no policy for `E`
//!   (covariant, foldable, traversable, bicovariant).
//! - [`TheseMonad<E>`]: sequencing and products. When both steps carry a
//!   left side they are merged with the [`Semigroup<E>`] held by the
//!   dictionary. A `Left` still stops the computation.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::{These, TheseMonad};
//! use kindling::typeclass::{FlatMap, semigroup};
//!
//! let dict = TheseMonad::new(semigroup::string());
//! let result = dict.flat_map(These::Both("e1".to_string(), 1), |n: i32| These::Both("e2".to_string(), n + 1));
//! assert_eq!(result, These::Both("e1e2".to_string(), 2));
//! ```

use std::fmt::Display;

use super::either::Either;
use super::error::UnwrapError;
use crate::hkt::{Kind, TypeLambda, Value};
use crate::typeclass::{
    Applicative, Bicovariant, Covariant, FlatMap, Foldable, Invariant, Of, Product, SemiProduct, Semigroup,
    Traversable, covariant,
};

/// `Left(E)`, `Right(A)` or `Both(E, A)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum These<E, A> {
    /// Only the left side.
    Left(E),
    /// Only the right side.
    Right(A),
    /// Both sides.
    Both(E, A),
}

impl<E, A> These<E, A> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is a `Both` value.
    #[inline]
    pub const fn is_both(&self) -> bool {
        matches!(self, Self::Both(_, _))
    }

    /// The left side of `Left` and `Both`.
    #[inline]
    pub fn left(self) -> Option<E> {
        match self {
            Self::Left(error) | Self::Both(error, _) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// The right side of `Right` and `Both`.
    #[inline]
    pub fn right(self) -> Option<A> {
        match self {
            Self::Right(value) | Self::Both(_, value) => Some(value),
            Self::Left(_) => None,
        }
    }

    /// Collapses the three cases into one value.
    #[inline]
    pub fn fold<T>(
        self,
        on_left: impl FnOnce(E) -> T,
        on_right: impl FnOnce(A) -> T,
        on_both: impl FnOnce(E, A) -> T,
    ) -> T {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
            Self::Both(error, value) => on_both(error, value),
        }
    }
}

impl<E, A> From<Either<E, A>> for These<E, A> {
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(error) => Self::Left(error),
            Either::Right(value) => Self::Right(value),
        }
    }
}

// =============================================================================
// TheseTypeLambda
// =============================================================================

phantom_type_lambda! {
    /// The type lambda of [`These`] with the left type fixed to `E`.
    TheseTypeLambda
}

impl<E: Value> TypeLambda for TheseTypeLambda<E> {
    type Kind<A: Value> = These<E, A>;
}

impl<E: Value> Invariant for TheseTypeLambda<E> {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        covariant::imap(self, fa, to, from)
    }
}

impl<E: Value> Covariant for TheseTypeLambda<E> {
    fn map<A: Value, B: Value>(&self, fa: Kind<Self, A>, mut function: impl FnMut(A) -> B) -> Kind<Self, B> {
        match fa {
            These::Left(error) => These::Left(error),
            These::Right(value) => These::Right(function(value)),
            These::Both(error, value) => These::Both(error, function(value)),
        }
    }
}

impl<E: Value> Of for TheseTypeLambda<E> {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        These::Right(value)
    }
}

impl<E: Value> Foldable for TheseTypeLambda<E> {
    fn reduce<A: Value, B>(&self, fa: Kind<Self, A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        match fa {
            These::Right(value) | These::Both(_, value) => function(initial, value),
            These::Left(_) => initial,
        }
    }
}

impl<E: Value> Traversable for TheseTypeLambda<E> {
    fn traverse<H: Applicative, A: Value, B: Value>(
        &self,
        applicative: &H,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Kind<H, B>,
    ) -> Kind<H, Kind<Self, B>> {
        match fa {
            These::Left(error) => applicative.of::<These<E, B>>(These::Left(error)),
            These::Right(value) => applicative.map::<B, These<E, B>>(function(value), These::Right),
            These::Both(error, value) => {
                applicative.map::<B, These<E, B>>(function(value), move |b| These::Both(error.clone(), b))
            }
        }
    }
}

impl<E: Value> Bicovariant for TheseTypeLambda<E> {
    type Error = E;
    type WithError<E2: Value> = TheseTypeLambda<E2>;

    fn bimap<E2: Value, A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        mut on_error: impl FnMut(E) -> E2,
        mut on_value: impl FnMut(A) -> B,
    ) -> Kind<Self::WithError<E2>, B> {
        match fa {
            These::Left(error) => These::Left(on_error(error)),
            These::Right(value) => These::Right(on_value(value)),
            These::Both(error, value) => These::Both(on_error(error), on_value(value)),
        }
    }
}

// =============================================================================
// TheseMonad
// =============================================================================

/// The accumulating dictionary of [`These`].
///
/// # Laws
///
/// With `combine` the operation of the held semigroup:
///
/// ```text
/// flat_map(Both(e1, a), |_| Both(e2, b)) == Both(combine(e1, e2), b)
/// flat_map(Both(e1, a), |_| Left(e2))    == Left(combine(e1, e2))
/// flat_map(Left(e), f)                   == Left(e)
/// ```
#[derive(Debug, Clone)]
pub struct TheseMonad<E> {
    semigroup: Semigroup<E>,
}

impl<E> TheseMonad<E> {
    /// Creates the dictionary that merges left sides with `semigroup`.
    #[must_use]
    pub const fn new(semigroup: Semigroup<E>) -> Self {
        Self { semigroup }
    }

    /// The semigroup merging left sides.
    pub const fn semigroup(&self) -> &Semigroup<E> {
        &self.semigroup
    }
}

impl<E: Value> TheseMonad<E> {
    fn merge(&self, accumulated: Option<E>, error: E) -> E {
        match accumulated {
            Some(accumulated) => self.semigroup.combine(accumulated, error),
            None => error,
        }
    }

    /// Prepends `accumulated` to the left side of `fb`.
    fn prepend<B>(&self, accumulated: Option<E>, fb: These<E, B>) -> These<E, B> {
        match (accumulated, fb) {
            (None, fb) => fb,
            (Some(accumulated), These::Right(value)) => These::Both(accumulated, value),
            (accumulated, These::Left(error)) => These::Left(self.merge(accumulated, error)),
            (accumulated, These::Both(error, value)) => These::Both(self.merge(accumulated, error), value),
        }
    }
}

impl<E: Value> TypeLambda for TheseMonad<E> {
    type Kind<A: Value> = These<E, A>;
}

impl<E: Value> Invariant for TheseMonad<E> {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        covariant::imap(self, fa, to, from)
    }
}

impl<E: Value> Covariant for TheseMonad<E> {
    fn map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> B) -> Kind<Self, B> {
        TheseTypeLambda::<E>::new().map(fa, function)
    }
}

impl<E: Value> Of for TheseMonad<E> {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        These::Right(value)
    }
}

impl<E: Value> FlatMap for TheseMonad<E> {
    fn flat_map<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Kind<Self, B>,
    ) -> Kind<Self, B> {
        match fa {
            These::Left(error) => These::Left(error),
            These::Right(value) => function(value),
            These::Both(error, value) => self.prepend(Some(error), function(value)),
        }
    }
}

impl<E: Value> SemiProduct for TheseMonad<E> {
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)> {
        self.flat_map::<A, (A, B)>(fa, |a| TheseTypeLambda::<E>::new().map(fb.clone(), move |b| (a.clone(), b)))
    }

    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>> {
        let mut accumulated: Option<E> = None;
        let mut values = Vec::new();
        for item in std::iter::once(fa).chain(collection) {
            match item {
                These::Left(error) => return These::Left(self.merge(accumulated, error)),
                These::Right(value) => values.push(value),
                These::Both(error, value) => {
                    accumulated = Some(self.merge(accumulated, error));
                    values.push(value);
                }
            }
        }
        self.prepend(accumulated, These::Right(values))
    }
}

impl<E: Value> Product for TheseMonad<E> {}

// =============================================================================
// Helpers
// =============================================================================

/// Extracts the right side of `Right` or `Both`, or reports that a `Left`
/// was found.
///
/// # Errors
///
/// Returns [`UnwrapError`] when `fa` is `Left`.
pub fn try_get<E, A>(fa: These<E, A>) -> Result<A, UnwrapError> {
    fa.right().ok_or(UnwrapError::new("These", "Left"))
}

/// Extracts the right side of `Right` or `Both`.
///
/// # Panics
///
/// Panics when `fa` is `Left`.
#[track_caller]
pub fn get_or_throw<E, A>(fa: These<E, A>) -> A {
    match try_get(fa) {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

/// Extracts the right side of `Right` or `Both`, panicking with the message
/// `on_left` builds from the `Left` value.
///
/// # Panics
///
/// Panics when `fa` is `Left`.
#[track_caller]
pub fn get_or_throw_with<E, A, M: Display>(fa: These<E, A>, on_left: impl FnOnce(E) -> M) -> A {
    match fa {
        These::Right(value) | These::Both(_, value) => value,
        These::Left(error) => panic!("{}", on_left(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::OptionTypeLambda;
    use crate::typeclass::semigroup;
    use rstest::rstest;

    fn warnings() -> TheseMonad<Vec<&'static str>> {
        TheseMonad::new(semigroup::array())
    }

    #[rstest]
    #[case(These::Left(vec!["a"]), These::Left(vec!["a"]))]
    #[case(These::Right(1), These::Both(vec!["f"], 2))]
    #[case(These::Both(vec!["a"], 1), These::Both(vec!["a", "f"], 2))]
    fn flat_map_merges_left_sides(
        #[case] fa: These<Vec<&'static str>, i32>,
        #[case] expected: These<Vec<&'static str>, i32>,
    ) {
        assert_eq!(warnings().flat_map(fa, |n: i32| These::Both(vec!["f"], n + 1)), expected);
    }

    #[rstest]
    fn flat_map_into_left_keeps_earlier_warnings() {
        let result = warnings().flat_map(These::Both(vec!["a"], 1), |_: i32| These::<_, i32>::Left(vec!["stop"]));
        assert_eq!(result, These::Left(vec!["a", "stop"]));
    }

    #[rstest]
    fn product_many_accumulates_until_a_left() {
        let dict = warnings();
        let collected = dict.product_many(These::Both(vec!["a"], 1), [These::Right(2), These::Both(vec!["b"], 3)]);
        assert_eq!(collected, These::Both(vec!["a", "b"], vec![1, 2, 3]));
        let stopped = dict.product_many(These::Both(vec!["a"], 1), [These::Left(vec!["x"]), These::Both(vec!["b"], 3)]);
        assert_eq!(stopped, These::Left(vec!["a", "x"]));
    }

    #[rstest]
    fn product_without_warnings_is_right() {
        assert_eq!(warnings().product(These::Right(1), These::Right('a')), These::Right((1, 'a')));
    }

    #[rstest]
    fn traverse_keeps_the_left_side_of_both() {
        let dict = TheseTypeLambda::<&str>::new();
        let result = dict.traverse(&OptionTypeLambda, These::Both("w", 2), |n: i32| Some(n * 2));
        assert_eq!(result, Some(These::Both("w", 4)));
    }

    #[rstest]
    fn bimap_maps_both_sides_of_both() {
        let dict = TheseTypeLambda::<&str>::new();
        assert_eq!(dict.bimap(These::Both("ab", 1), str::len, |n: i32| n > 0), These::Both(2, true));
    }

    #[rstest]
    #[case(These::Left("e"), Err(UnwrapError::new("These", "Left")))]
    #[case(These::Both("w", 1), Ok(1))]
    fn try_get_accepts_both(#[case] fa: These<&'static str, i32>, #[case] expected: Result<i32, UnwrapError>) {
        assert_eq!(try_get(fa), expected);
    }

    #[rstest]
    fn get_or_throw_with_returns_the_right_side_of_both() {
        assert_eq!(get_or_throw_with(These::Both("w", 7), |error: &str| error.to_uppercase()), 7);
    }

    #[rstest]
    #[should_panic(expected = "fatal: E")]
    fn get_or_throw_with_panics_with_the_built_message() {
        get_or_throw_with(These::<&str, i32>::Left("e"), |error: &str| format!("fatal: {}", error.to_uppercase()));
    }
}
