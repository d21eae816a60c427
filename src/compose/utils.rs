//! Small combinators used alongside the type classes.
//!
//! - [`identity`]: returns its argument
//! - [`constant`]: ignores its argument and returns a fixed value
//! - [`flip`]: swaps the arguments of a binary function
//! - [`absurd`]: eliminates a value that cannot exist

use std::convert::Infallible;

/// Returns its argument unchanged.
///
/// Mapping with `identity` must leave any value unchanged; the functor
/// identity law is stated with it.
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A function that ignores its argument and returns a clone of `value`.
///
/// # Examples
///
/// ```rust
/// use kindling::compose::constant;
///
/// let always_zero = constant(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of `function`.
#[inline]
pub fn flip<A, B, C>(function: impl Fn(A, B) -> C) -> impl Fn(B, A) -> C {
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Eliminates a value of an uninhabited type.
///
/// A branch receiving [`Infallible`] can never run, so it may claim any
/// result type. This is how a `Result<A, Infallible>` is unwrapped without
/// a panic path.
///
/// # Examples
///
/// ```rust
/// use kindling::compose::absurd;
/// use std::convert::Infallible;
///
/// let parsed: Result<String, Infallible> = "text".parse();
/// let value: String = parsed.unwrap_or_else(absurd);
/// assert_eq!(value, "text");
/// ```
#[inline]
pub fn absurd<A>(never: Infallible) -> A {
    match never {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::OptionTypeLambda;
    use crate::typeclass::Covariant;
    use rstest::rstest;

    #[rstest]
    fn identity_is_a_lawful_map_argument() {
        assert_eq!(OptionTypeLambda.map(Some(5), identity), Some(5));
    }

    #[rstest]
    fn constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[rstest]
    #[case(3, 2, 8)]
    #[case(2, 3, 9)]
    fn flip_swaps_arguments(#[case] exponent: u32, #[case] base: i32, #[case] expected: i32) {
        let flipped_power = flip(|base: i32, exponent: u32| base.pow(exponent));
        assert_eq!(flipped_power(exponent, base), expected);
    }

    #[rstest]
    fn absurd_unwraps_infallible_results() {
        let result: Result<u8, Infallible> = Ok(1);
        assert_eq!(result.unwrap_or_else(absurd), 1);
    }
}
