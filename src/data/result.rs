//! Instances for [`Result`].
//!
//! `Err` is the failure. The policies match [`Either`]: products keep the
//! first `Err`, coproducts keep the first `Ok` or else the last `Err`.

use std::fmt::Display;

use super::either::Either;
use super::error::UnwrapError;
use crate::hkt::{Kind, TypeLambda, Value};
use crate::typeclass::{
    Applicative, Bicovariant, Covariant, FlatMap, Foldable, Invariant, Of, Product, SemiCoproduct, SemiProduct,
    Traversable, covariant, semi_coproduct,
};

phantom_type_lambda! {
    /// The type lambda of [`Result`] with the error type fixed to `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::data::ResultTypeLambda;
    /// use kindling::typeclass::SemiProduct;
    ///
    /// let dict = ResultTypeLambda::<&str>::new();
    /// assert_eq!(dict.product_many(Ok(1), [Ok(2), Err("e")]), Err("e"));
    /// ```
    ResultTypeLambda
}

impl<E: Value> TypeLambda for ResultTypeLambda<E> {
    type Kind<A: Value> = Result<A, E>;
}

impl<E: Value> Invariant for ResultTypeLambda<E> {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        covariant::imap(self, fa, to, from)
    }
}

impl<E: Value> Covariant for ResultTypeLambda<E> {
    fn map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> B) -> Kind<Self, B> {
        fa.map(function)
    }
}

impl<E: Value> Of for ResultTypeLambda<E> {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        Ok(value)
    }
}

impl<E: Value> FlatMap for ResultTypeLambda<E> {
    fn flat_map<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        function: impl FnMut(A) -> Kind<Self, B>,
    ) -> Kind<Self, B> {
        fa.and_then(function)
    }
}

impl<E: Value> SemiProduct for ResultTypeLambda<E> {
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)> {
        Ok((fa?, fb?))
    }

    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>> {
        std::iter::once(fa).chain(collection).collect()
    }
}

impl<E: Value> Product for ResultTypeLambda<E> {
    fn product_all<A: Value>(&self, collection: impl IntoIterator<Item = Kind<Self, A>>) -> Kind<Self, Vec<A>> {
        collection.into_iter().collect()
    }
}

impl<E: Value> SemiCoproduct for ResultTypeLambda<E> {
    fn coproduct<A: Value>(&self, fa: Kind<Self, A>, that: Kind<Self, A>) -> Kind<Self, A> {
        fa.or(that)
    }

    fn coproduct_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, A> {
        let mut last = fa;
        let mut collection = collection.into_iter();
        while last.is_err() {
            match collection.next() {
                Some(next) => last = next,
                None => break,
            }
        }
        last
    }
}

impl<E: Value> Foldable for ResultTypeLambda<E> {
    fn reduce<A: Value, B>(&self, fa: Kind<Self, A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        match fa {
            Ok(value) => function(initial, value),
            Err(_) => initial,
        }
    }
}

impl<E: Value> Traversable for ResultTypeLambda<E> {
    fn traverse<H: Applicative, A: Value, B: Value>(
        &self,
        applicative: &H,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Kind<H, B>,
    ) -> Kind<H, Kind<Self, B>> {
        match fa {
            Ok(value) => applicative.map::<B, Result<B, E>>(function(value), Ok),
            Err(error) => applicative.of::<Result<B, E>>(Err(error)),
        }
    }
}

impl<E: Value> Bicovariant for ResultTypeLambda<E> {
    type Error = E;
    type WithError<E2: Value> = ResultTypeLambda<E2>;

    fn bimap<E2: Value, A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        on_error: impl FnMut(E) -> E2,
        on_value: impl FnMut(A) -> B,
    ) -> Kind<Self::WithError<E2>, B> {
        fa.map(on_value).map_err(on_error)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Extracts the `Ok` value, or reports that an `Err` was found.
///
/// # Errors
///
/// Returns [`UnwrapError`] when `fa` is `Err`.
pub fn try_get<A, E>(fa: Result<A, E>) -> Result<A, UnwrapError> {
    fa.map_err(|_| UnwrapError::new("Result", "Err"))
}

/// Extracts the `Ok` value.
///
/// # Panics
///
/// Panics when `fa` is `Err`.
#[track_caller]
pub fn get_or_throw<A, E>(fa: Result<A, E>) -> A {
    match try_get(fa) {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

/// Extracts the `Ok` value, panicking with the message `on_err` builds from
/// the error.
///
/// # Panics
///
/// Panics when `fa` is `Err`.
#[track_caller]
pub fn get_or_throw_with<A, E, M: Display>(fa: Result<A, E>, on_err: impl FnOnce(E) -> M) -> A {
    match fa {
        Ok(value) => value,
        Err(error) => panic!("{}", on_err(error)),
    }
}

/// Returns `fa` when it is `Ok`; otherwise builds the alternative from the
/// error.
pub fn or_else<A, E, E2>(fa: Result<A, E>, that: impl FnOnce(E) -> Result<A, E2>) -> Result<A, E2> {
    fa.or_else(that)
}

/// The first `Ok` among `fa` and `collection`, or the last `Err`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::result;
///
/// let mirrors = ["a", "b"].map(|host| if host == "b" { Ok(host) } else { Err(format!("{host} down")) });
/// assert_eq!(result::first_success_of(Err("primary down".to_string()), mirrors), Ok("b"));
/// ```
pub fn first_success_of<A: Value, E: Value>(
    fa: Result<A, E>,
    collection: impl IntoIterator<Item = Result<A, E>>,
) -> Result<A, E> {
    semi_coproduct::first_success_of(&ResultTypeLambda::new(), fa, collection)
}

/// Converts to [`Either`], with the error on the `Left`.
pub fn to_either<A, E>(fa: Result<A, E>) -> Either<E, A> {
    fa.into()
}

/// Converts from [`Either`], with the `Left` as the error.
pub fn from_either<A, E>(either: Either<E, A>) -> Result<A, E> {
    either.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ArrayTypeLambda;
    use rstest::rstest;

    #[rstest]
    #[case(Ok(1), Ok(2), Ok((1, 2)))]
    #[case(Err("first"), Err("second"), Err("first"))]
    #[case(Ok(1), Err("second"), Err("second"))]
    fn product_keeps_the_first_error(
        #[case] fa: Result<i32, &'static str>,
        #[case] fb: Result<i32, &'static str>,
        #[case] expected: Result<(i32, i32), &'static str>,
    ) {
        assert_eq!(ResultTypeLambda::new().product(fa, fb), expected);
    }

    #[rstest]
    fn product_many_with_a_failure() {
        let result = ResultTypeLambda::new().product_many(Ok(1), [Ok(2), Err("e")]);
        assert_eq!(result, Err("e"));
    }

    #[rstest]
    #[case(Err("a"), vec![Err("b"), Ok(3), Err("c")], Ok(3))]
    #[case(Err("a"), vec![Err("b")], Err("b"))]
    #[case(Ok(1), vec![Err("b")], Ok(1))]
    fn coproduct_many(
        #[case] fa: Result<i32, &'static str>,
        #[case] collection: Vec<Result<i32, &'static str>>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        assert_eq!(ResultTypeLambda::new().coproduct_many(fa, collection), expected);
    }

    #[rstest]
    fn traverse_into_array() {
        let dict = ResultTypeLambda::<&str>::new();
        let result = dict.traverse(&ArrayTypeLambda, Ok(1), |n: i32| vec![n, -n]);
        assert_eq!(result, vec![Ok(1), Ok(-1)]);
    }

    #[rstest]
    fn bimap_maps_both_channels() {
        let dict = ResultTypeLambda::<i32>::new();
        assert_eq!(dict.bimap(Err(3), |e: i32| e.to_string(), |a: i32| a * 2), Err("3".to_string()));
        assert_eq!(dict.bimap(Ok(3), |e: i32| e.to_string(), |a: i32| a * 2), Ok(6));
    }

    #[rstest]
    fn either_conversions() {
        assert_eq!(to_either(Err::<i32, &str>("e")), Either::Left("e"));
        assert_eq!(from_either(Either::<&str, i32>::Right(1)), Ok(1));
    }

    #[rstest]
    #[should_panic(expected = "Result::get_or_throw: found Err")]
    fn get_or_throw_panics_on_err() {
        get_or_throw(Err::<i32, &str>("e"));
    }

    #[rstest]
    fn or_else_and_try_get() {
        let recovered = or_else(Err::<i32, &str>("2"), |s| s.parse::<i32>());
        assert_eq!(recovered, Ok(2));
        assert_eq!(try_get(Err::<i32, ()>(())), Err(UnwrapError::new("Result", "Err")));
        assert_eq!(get_or_throw_with(Ok::<i32, ()>(5), |()| "unreachable"), 5);
    }
}
