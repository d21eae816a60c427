//! Higher-kinded type emulation through type lambdas.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! This module provides the indirection the rest of the crate is built on:
//!
//! - [`TypeLambda`]: a zero-sized marker that stands for an unapplied type
//!   constructor. The marker is also the dictionary value: every typeclass is
//!   a trait implemented on the marker.
//! - [`Kind`]: the application of a lambda to a target type. For the option
//!   lambda, `Kind<OptionTypeLambda, A>` normalizes to `Option<A>`.
//! - [`Composition`]: the lambda of a nested constructor `F<G<_>>`.
//!
//! # Slots
//!
//! A type constructor may have more parameters than the one being mapped
//! over. `Either<E, A>` has an error slot and a target slot. The target slot
//! is the generic parameter of [`TypeLambda::Kind`]; every other slot is a
//! type parameter of the marker itself, so `EitherTypeLambda<E>` fixes the
//! error type and leaves the target open.
//!
//! # Example
//!
//! ```rust
//! use kindling::hkt::{Kind, TypeLambda};
//!
//! #[derive(Debug, Clone, Copy, Default)]
//! struct BoxTypeLambda;
//!
//! impl TypeLambda for BoxTypeLambda {
//!     type Kind<A: kindling::hkt::Value> = Box<A>;
//! }
//!
//! let boxed: Kind<BoxTypeLambda, i32> = Box::new(42);
//! assert_eq!(*boxed, 42);
//! ```

/// Bound shared by every type that occupies the target slot of a [`Kind`].
///
/// Values threaded through the typeclasses are immutable and freely shared,
/// which Rust expresses as `Clone + 'static`.
pub trait Value: Clone + 'static {}

impl<T: Clone + 'static> Value for T {}

/// A marker standing for an unapplied type constructor.
///
/// Implementors are dictionaries: they carry no data (or only the data a
/// dictionary needs, such as a semigroup for accumulating errors) and are
/// passed by reference to every generic combinator.
///
/// # Laws
///
/// `Kind<Self, A>` must be the concrete applied type and must not depend on
/// anything but `Self` and `A`.
pub trait TypeLambda: Clone + 'static {
    /// The constructor applied to the target type `A`.
    type Kind<A: Value>: Value;
}

/// Applies the lambda `F` to the target type `A`.
pub type Kind<F, A> = <F as TypeLambda>::Kind<A>;

/// The lambda of the nested constructor `F<G<_>>`.
///
/// A composition holds the two dictionaries it was built from, so it can be
/// passed anywhere a single dictionary is expected. Typeclass
/// implementations for it only redirect to the outer and inner dictionaries;
/// they never inspect the payload.
///
/// # Examples
///
/// ```rust
/// use kindling::data::{ArrayTypeLambda, OptionTypeLambda};
/// use kindling::hkt::Composition;
/// use kindling::typeclass::Covariant;
///
/// let nested = Composition::new(ArrayTypeLambda, OptionTypeLambda);
/// let result = nested.map(vec![Some(1), None, Some(3)], |n| n * 10);
/// assert_eq!(result, vec![Some(10), None, Some(30)]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Composition<F, G> {
    outer: F,
    inner: G,
}

impl<F, G> Composition<F, G> {
    /// Composes the `outer` dictionary around the `inner` one.
    #[inline]
    pub const fn new(outer: F, inner: G) -> Self {
        Self { outer, inner }
    }

    /// The dictionary of the outer constructor.
    #[inline]
    pub const fn outer(&self) -> &F {
        &self.outer
    }

    /// The dictionary of the inner constructor.
    #[inline]
    pub const fn inner(&self) -> &G {
        &self.inner
    }
}

impl<F: TypeLambda, G: TypeLambda> TypeLambda for Composition<F, G> {
    type Kind<A: Value> = Kind<F, Kind<G, A>>;
}
