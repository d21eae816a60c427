//! Invariant type class - mapping with a pair of inverse functions.
//!
//! An invariant functor can change its target type only when given a way
//! back. This covers constructors that both consume and produce their
//! target, such as [`Semigroup`](super::Semigroup), which are neither
//! covariant nor contravariant.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! imap(fa, |a| a, |a| a) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! imap(imap(fa, f1, g1), f2, g2) == imap(fa, |a| f2(f1(a)), |c| g1(g2(c)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::OptionTypeLambda;
//! use kindling::typeclass::Invariant;
//!
//! let result = OptionTypeLambda.imap(Some(2), |n: i32| n.to_string(), |s: String| s.len() as i32);
//! assert_eq!(result, Some("2".to_string()));
//! ```

use crate::hkt::{Composition, Kind, TypeLambda, Value};

/// The invariant functor dictionary.
///
/// Both directions are `Fn + Clone + 'static` because instances such as
/// [`Semigroup`](super::Semigroup) store them inside the produced value.
pub trait Invariant: TypeLambda {
    /// Maps the target through `to`, using `from` wherever the target is
    /// consumed.
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B>;
}

/// Maps through both layers of `F<G<A>>`.
///
/// The outer dictionary receives functions that call the inner `imap`, so
/// each layer's own laws carry over to the composition.
pub fn imap_composition<F, G, A, B>(
    outer: &F,
    inner: &G,
    fga: Kind<F, Kind<G, A>>,
    to: impl Fn(A) -> B + Clone + 'static,
    from: impl Fn(B) -> A + Clone + 'static,
) -> Kind<F, Kind<G, B>>
where
    F: Invariant,
    G: Invariant,
    A: Value,
    B: Value,
{
    let forward = {
        let inner = inner.clone();
        let (to, from) = (to.clone(), from.clone());
        move |ga: Kind<G, A>| inner.imap::<A, B>(ga, to.clone(), from.clone())
    };
    let backward = {
        let inner = inner.clone();
        move |gb: Kind<G, B>| inner.imap::<B, A>(gb, from.clone(), to.clone())
    };
    outer.imap::<Kind<G, A>, Kind<G, B>>(fga, forward, backward)
}

/// Starts a do-notation record from an existing value.
///
/// The record is a left-nested tuple rooted at `()`, so the result has the
/// same shape as `bind` applied to [`do_`](super::of::do_).
pub fn bind_to<F: Invariant, A: Value>(dict: &F, fa: Kind<F, A>) -> Kind<F, ((), A)> {
    dict.imap::<A, ((), A)>(fa, |a| ((), a), |((), a)| a)
}

/// Wraps the target in a one-element tuple.
pub fn tupled<F: Invariant, A: Value>(dict: &F, fa: Kind<F, A>) -> Kind<F, (A,)> {
    dict.imap::<A, (A,)>(fa, |a| (a,), |(a,)| a)
}

impl<F: Invariant, G: Invariant> Invariant for Composition<F, G> {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        imap_composition::<F, G, A, B>(self.outer(), self.inner(), fa, to, from)
    }
}
