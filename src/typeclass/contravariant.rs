//! Contravariant type class - mapping over the input of a consumer.
//!
//! A contravariant functor consumes its target instead of producing it, so
//! a function `B -> A` turns a consumer of `A` into a consumer of `B`.
//! [`Order`](super::Order) is the canonical instance.
//!
//! # Laws
//!
//! ```text
//! contramap(fa, |a| a) == fa
//! contramap(contramap(fa, f), g) == contramap(fa, |c| f(g(c)))
//! ```

use crate::hkt::{Kind, Value};

use super::invariant::Invariant;

/// The contravariant functor dictionary.
///
/// The function is stored inside the resulting consumer, hence the
/// `Fn + Clone + 'static` bound.
pub trait Contravariant: Invariant {
    /// Adapts `fa` to consume `B` by first converting through `function`.
    fn contramap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        function: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B>;
}

/// Implements [`Invariant::imap`] for a contravariant instance by ignoring
/// the forward function.
#[inline]
pub fn imap<F: Contravariant, A: Value, B: Value>(
    dict: &F,
    fa: Kind<F, A>,
    _to: impl Fn(A) -> B,
    from: impl Fn(B) -> A + Clone + 'static,
) -> Kind<F, B> {
    dict.contramap::<A, B>(fa, from)
}

/// Composes two contravariant layers.
///
/// Two reversals cancel out, so the nested constructor is covariant: a
/// function `A -> B` turns `F<G<A>>` into `F<G<B>>`.
pub fn contramap_composition<F, G, A, B>(
    outer: &F,
    inner: &G,
    fga: Kind<F, Kind<G, A>>,
    function: impl Fn(A) -> B + Clone + 'static,
) -> Kind<F, Kind<G, B>>
where
    F: Contravariant,
    G: Contravariant,
    A: Value,
    B: Value,
{
    let inner = inner.clone();
    outer.contramap::<Kind<G, A>, Kind<G, B>>(fga, move |gb: Kind<G, B>| {
        inner.contramap::<B, A>(gb, function.clone())
    })
}
