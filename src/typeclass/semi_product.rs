//! SemiProduct type class - combining independent computations.
//!
//! `product` pairs two independent computations; `product_many` combines a
//! head computation with any number of further ones into a `Vec` whose
//! first element comes from the head. Unlike [`FlatMap`](super::FlatMap),
//! neither side may depend on the other.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! product(product(fa, fb), fc) ~ product(fa, product(fb, fc))
//! ```
//!
//! where `~` equates `((a, b), c)` with `(a, (b, c))`.
//!
//! # Short-circuiting
//!
//! Instances that stop at a failure (`Option`, `Either`, `Result`) must stop
//! pulling from the iterator passed to `product_many` as soon as a failure
//! is seen, so the collection may be unbounded.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::OptionTypeLambda;
//! use kindling::typeclass::SemiProduct;
//!
//! assert_eq!(OptionTypeLambda.product(Some(1), Some(2)), Some((1, 2)));
//! assert_eq!(OptionTypeLambda.product(None::<i32>, Some(2)), None);
//! assert_eq!(
//!     OptionTypeLambda.product_many(Some(1), [Some(2), Some(3)]),
//!     Some(vec![1, 2, 3])
//! );
//! ```

use crate::hkt::{Composition, Kind, Value};

use super::covariant::Covariant;
use super::invariant::Invariant;
use super::semi_applicative::SemiApplicative;

/// The dictionary for combining independent computations.
pub trait SemiProduct: Invariant {
    /// Pairs the targets of `fa` and `fb`.
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)>;

    /// Combines `fa` with every element of `collection`.
    ///
    /// An empty collection yields `fa` with its target wrapped in a
    /// singleton `Vec`.
    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>>;
}

/// Derives `product_many` by folding `product` pairwise.
///
/// Instances without a cheaper batch strategy use this as their
/// `product_many`. It consumes the whole collection.
pub fn product_many_by_product<F, A>(
    dict: &F,
    fa: Kind<F, A>,
    collection: impl IntoIterator<Item = Kind<F, A>>,
) -> Kind<F, Vec<A>>
where
    F: SemiProduct + Covariant,
    A: Value,
{
    let head = dict.map::<A, Vec<A>>(fa, |a| vec![a]);
    collection.into_iter().fold(head, |accumulated, next| {
        dict.map::<(Vec<A>, A), Vec<A>>(dict.product::<Vec<A>, A>(accumulated, next), |(mut values, a)| {
            values.push(a);
            values
        })
    })
}

/// Pairs through both layers of `F<G<_>>`.
///
/// The outer layer is combined first; the inner values are then paired
/// by the inner dictionary.
pub fn product_composition<F, G, A, B>(
    outer: &F,
    inner: &G,
    fga: Kind<F, Kind<G, A>>,
    fgb: Kind<F, Kind<G, B>>,
) -> Kind<F, Kind<G, (A, B)>>
where
    F: SemiApplicative,
    G: SemiProduct,
    A: Value,
    B: Value,
{
    let paired = outer.product::<Kind<G, A>, Kind<G, B>>(fga, fgb);
    outer.map::<(Kind<G, A>, Kind<G, B>), Kind<G, (A, B)>>(paired, |(ga, gb)| {
        inner.product::<A, B>(ga, gb)
    })
}

/// Batch version of [`product_composition`].
pub fn product_many_composition<F, G, A>(
    outer: &F,
    inner: &G,
    fga: Kind<F, Kind<G, A>>,
    collection: impl IntoIterator<Item = Kind<F, Kind<G, A>>>,
) -> Kind<F, Kind<G, Vec<A>>>
where
    F: SemiApplicative,
    G: SemiProduct,
    A: Value,
{
    let gathered = outer.product_many::<Kind<G, A>>(fga, collection);
    outer.map::<Vec<Kind<G, A>>, Kind<G, Vec<A>>>(gathered, |layers| {
        let mut layers = layers.into_iter();
        match layers.next() {
            Some(head) => inner.product_many::<A>(head, layers),
            None => unreachable!("product_many always yields at least the head element"),
        }
    })
}

/// Appends an independent step to a do-notation record.
///
/// Unlike [`bind`](super::chainable::bind), `fb` cannot see the record,
/// so only `product` is needed.
pub fn and_then_bind<F: SemiProduct, S: Value, B: Value>(
    dict: &F,
    fs: Kind<F, S>,
    fb: Kind<F, B>,
) -> Kind<F, (S, B)> {
    dict.product::<S, B>(fs, fb)
}

/// Combines two computations into a flat pair.
pub fn tuple2<F: SemiProduct, A: Value, B: Value>(
    dict: &F,
    fa: Kind<F, A>,
    fb: Kind<F, B>,
) -> Kind<F, (A, B)> {
    dict.product::<A, B>(fa, fb)
}

/// Combines three computations into a flat triple.
pub fn tuple3<F: SemiProduct, A: Value, B: Value, C: Value>(
    dict: &F,
    fa: Kind<F, A>,
    fb: Kind<F, B>,
    fc: Kind<F, C>,
) -> Kind<F, (A, B, C)> {
    let nested = dict.product::<(A, B), C>(dict.product::<A, B>(fa, fb), fc);
    dict.imap::<((A, B), C), (A, B, C)>(nested, |((a, b), c)| (a, b, c), |(a, b, c)| ((a, b), c))
}

/// Combines four computations into a flat quadruple.
pub fn tuple4<F: SemiProduct, A: Value, B: Value, C: Value, D: Value>(
    dict: &F,
    fa: Kind<F, A>,
    fb: Kind<F, B>,
    fc: Kind<F, C>,
    fd: Kind<F, D>,
) -> Kind<F, (A, B, C, D)> {
    let nested = dict.product::<(A, B, C), D>(tuple3::<F, A, B, C>(dict, fa, fb, fc), fd);
    dict.imap::<((A, B, C), D), (A, B, C, D)>(
        nested,
        |((a, b, c), d)| (a, b, c, d),
        |(a, b, c, d)| ((a, b, c), d),
    )
}

impl<F: SemiApplicative, G: SemiProduct> SemiProduct for Composition<F, G> {
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)> {
        product_composition::<F, G, A, B>(self.outer(), self.inner(), fa, fb)
    }

    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>> {
        product_many_composition::<F, G, A>(self.outer(), self.inner(), fa, collection)
    }
}
