//! Of and Pointed type classes - lifting plain values into a constructor.
//!
//! [`Of`] provides `of`, which wraps a value in the minimal context of the
//! constructor. [`Pointed`] pairs it with [`Covariant`].
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::{ArrayTypeLambda, OptionTypeLambda};
//! use kindling::typeclass::Of;
//!
//! assert_eq!(OptionTypeLambda.of(42), Some(42));
//! assert_eq!(ArrayTypeLambda.of('a'), vec!['a']);
//! ```

use crate::hkt::{Composition, Kind, TypeLambda, Value};

use super::covariant::Covariant;

/// The dictionary for lifting a value into the constructor.
pub trait Of: TypeLambda {
    /// Wraps `value` in the minimal context.
    fn of<A: Value>(&self, value: A) -> Kind<Self, A>;
}

/// A covariant functor that can lift plain values.
pub trait Pointed: Of + Covariant {}

impl<F: Of + Covariant> Pointed for F {}

/// Lifts a value through both layers of `F<G<_>>`.
#[inline]
pub fn of_composition<F: Of, G: Of, A: Value>(outer: &F, inner: &G, value: A) -> Kind<F, Kind<G, A>> {
    outer.of::<Kind<G, A>>(inner.of::<A>(value))
}

/// Lifts the unit value.
#[inline]
pub fn unit<F: Of>(dict: &F) -> Kind<F, ()> {
    dict.of(())
}

/// Starts an empty do-notation record.
///
/// Records are left-nested tuples rooted at `()`; see
/// [`chainable::bind`](super::chainable::bind).
#[inline]
pub fn do_<F: Of>(dict: &F) -> Kind<F, ()> {
    unit(dict)
}

impl<F: Of, G: Of> Of for Composition<F, G> {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        of_composition::<F, G, A>(self.outer(), self.inner(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ArrayTypeLambda, Either, EitherTypeLambda, OptionTypeLambda};

    #[test]
    fn of_composition_wraps_twice() {
        assert_eq!(of_composition(&ArrayTypeLambda, &OptionTypeLambda, 1), vec![Some(1)]);
    }

    #[test]
    fn composition_dictionary_lifts_through_both_layers() {
        let composition = Composition::new(OptionTypeLambda, EitherTypeLambda::<String>::new());
        assert_eq!(composition.of(3), Some(Either::Right(3)));
    }

    #[test]
    fn do_starts_from_unit() {
        assert_eq!(do_(&OptionTypeLambda), Some(()));
        assert_eq!(unit(&ArrayTypeLambda), vec![()]);
    }
}
