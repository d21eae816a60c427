//! Either - a value that is one of two types.
//!
//! [`Either<E, A>`] is `Left(E)` or `Right(A)`. As a type class instance,
//! `Left` is the failure and `Right` the success: products keep the first
//! `Left` they meet, coproducts keep the first `Right` (or the last `Left`
//! when there is none).
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::{Either, EitherTypeLambda};
//! use kindling::typeclass::{SemiCoproduct, SemiProduct};
//!
//! let dict = EitherTypeLambda::<&str>::new();
//! assert_eq!(dict.product(Either::Right(1), Either::Left("e")), Either::<&str, (i32, i32)>::Left("e"));
//! assert_eq!(dict.coproduct(Either::Left("a"), Either::Right(2)), Either::Right(2));
//! ```

use std::fmt::{self, Display};

use super::error::UnwrapError;
use crate::hkt::{Kind, TypeLambda, Value};
use crate::typeclass::{
    Applicative, Bicovariant, Covariant, FlatMap, Foldable, Invariant, Of, Product, SemiCoproduct, SemiProduct,
    Traversable, covariant, semi_coproduct,
};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Left` holds a failure and `Right` a success.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure, or the first alternative.
    Left(L),
    /// The success, or the second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

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

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// The left value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::data::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a `Left` value.
    #[inline]
    pub fn map_left<T>(self, function: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to a `Right` value.
    #[inline]
    pub fn map_right<T>(self, function: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both sides into one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::data::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("hello");
    /// assert_eq!(right.fold(|n| n.to_string(), str::to_uppercase), "HELLO");
    /// ```
    #[inline]
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// EitherTypeLambda
// =============================================================================

phantom_type_lambda! {
    /// The type lambda of [`Either`] with the `Left` type fixed to `E`.
    EitherTypeLambda
}

impl<E: Value> TypeLambda for EitherTypeLambda<E> {
    type Kind<A: Value> = Either<E, A>;
}

impl<E: Value> Invariant for EitherTypeLambda<E> {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        covariant::imap(self, fa, to, from)
    }
}

impl<E: Value> Covariant for EitherTypeLambda<E> {
    fn map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> B) -> Kind<Self, B> {
        fa.map_right(function)
    }
}

impl<E: Value> Of for EitherTypeLambda<E> {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        Either::Right(value)
    }
}

impl<E: Value> FlatMap for EitherTypeLambda<E> {
    fn flat_map<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Kind<Self, B>,
    ) -> Kind<Self, B> {
        match fa {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => function(value),
        }
    }
}

impl<E: Value> SemiProduct for EitherTypeLambda<E> {
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)> {
        match (fa, fb) {
            (Either::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
            (Either::Right(a), Either::Right(b)) => Either::Right((a, b)),
        }
    }

    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>> {
        std::iter::once(fa)
            .chain(collection)
            .map(Result::<A, E>::from)
            .collect::<Result<Vec<A>, E>>()
            .into()
    }
}

impl<E: Value> Product for EitherTypeLambda<E> {}

impl<E: Value> SemiCoproduct for EitherTypeLambda<E> {
    fn coproduct<A: Value>(&self, fa: Kind<Self, A>, that: Kind<Self, A>) -> Kind<Self, A> {
        match fa {
            Either::Right(value) => Either::Right(value),
            Either::Left(_) => that,
        }
    }

    fn coproduct_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, A> {
        let mut last = fa;
        let mut collection = collection.into_iter();
        while last.is_left() {
            match collection.next() {
                Some(next) => last = next,
                None => break,
            }
        }
        last
    }
}

impl<E: Value> Foldable for EitherTypeLambda<E> {
    fn reduce<A: Value, B>(&self, fa: Kind<Self, A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        match fa {
            Either::Right(value) => function(initial, value),
            Either::Left(_) => initial,
        }
    }
}

impl<E: Value> Traversable for EitherTypeLambda<E> {
    fn traverse<H: Applicative, A: Value, B: Value>(
        &self,
        applicative: &H,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Kind<H, B>,
    ) -> Kind<H, Kind<Self, B>> {
        match fa {
            Either::Right(value) => applicative.map::<B, Either<E, B>>(function(value), Either::Right),
            Either::Left(error) => applicative.of::<Either<E, B>>(Either::Left(error)),
        }
    }
}

impl<E: Value> Bicovariant for EitherTypeLambda<E> {
    type Error = E;
    type WithError<E2: Value> = EitherTypeLambda<E2>;

    fn bimap<E2: Value, A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        mut on_error: impl FnMut(E) -> E2,
        mut on_value: impl FnMut(A) -> B,
    ) -> Kind<Self::WithError<E2>, B> {
        match fa {
            Either::Left(error) => Either::Left(on_error(error)),
            Either::Right(value) => Either::Right(on_value(value)),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Extracts the `Right` value, or reports that a `Left` was found.
///
/// # Errors
///
/// Returns [`UnwrapError`] when `fa` is `Left`.
pub fn try_get<E, A>(fa: Either<E, A>) -> Result<A, UnwrapError> {
    fa.right().ok_or(UnwrapError::new("Either", "Left"))
}

/// Extracts the `Right` value.
///
/// # Panics
///
/// Panics when `fa` is `Left`.
#[track_caller]
pub fn get_or_throw<E, A>(fa: Either<E, A>) -> A {
    match try_get(fa) {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

/// Extracts the `Right` value, panicking with the message `on_left` builds
/// from the `Left` value.
///
/// # Panics
///
/// Panics when `fa` is `Left`.
#[track_caller]
pub fn get_or_throw_with<E, A, M: Display>(fa: Either<E, A>, on_left: impl FnOnce(E) -> M) -> A {
    match fa {
        Either::Right(value) => value,
        Either::Left(error) => panic!("{}", on_left(error)),
    }
}

/// Returns `fa` when it is `Right`; otherwise builds the alternative from the
/// `Left` value.
pub fn or_else<E, E2, A>(fa: Either<E, A>, that: impl FnOnce(E) -> Either<E2, A>) -> Either<E2, A> {
    match fa {
        Either::Right(value) => Either::Right(value),
        Either::Left(error) => that(error),
    }
}

/// The first `Right` among `fa` and `collection`, or the last `Left`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::{Either, either};
///
/// let attempts = vec![Either::Left("timeout"), Either::Right(3)];
/// assert_eq!(either::first_right_of(Either::Left("refused"), attempts), Either::Right(3));
/// ```
pub fn first_right_of<E: Value, A: Value>(
    fa: Either<E, A>,
    collection: impl IntoIterator<Item = Either<E, A>>,
) -> Either<E, A> {
    semi_coproduct::first_success_of(&EitherTypeLambda::new(), fa, collection)
}

/// `Right` for `Some`, or the `Left` built by `on_none`.
pub fn from_option<E, A>(option: Option<A>, on_none: impl FnOnce() -> E) -> Either<E, A> {
    match option {
        Some(value) => Either::Right(value),
        None => Either::Left(on_none()),
    }
}

/// `Right` for values satisfying `predicate`, `Left` built by `on_false`
/// otherwise.
pub fn lift_predicate<E, A>(
    predicate: impl Fn(&A) -> bool,
    on_false: impl Fn(A) -> E,
) -> impl Fn(A) -> Either<E, A> {
    move |value| {
        if predicate(&value) {
            Either::Right(value)
        } else {
            Either::Left(on_false(value))
        }
    }
}
