//! Product type class - SemiProduct with a unit.
//!
//! Adding [`Of`](super::Of) to [`SemiProduct`] makes an empty product
//! possible: `product_all` over no computations is `of(vec![])`.
//!
//! # Laws
//!
//! ```text
//! product(of(()), fa) ~ fa
//! product(fa, of(())) ~ fa
//! ```

use crate::hkt::{Composition, Kind, Value};

use super::applicative::Applicative;
use super::of::Of;
use super::semi_product::SemiProduct;

/// The dictionary for combining any number of independent computations.
pub trait Product: SemiProduct + Of {
    /// Combines every computation of `collection`, in order.
    ///
    /// An empty collection yields `of(vec![])`.
    fn product_all<A: Value>(&self, collection: impl IntoIterator<Item = Kind<Self, A>>) -> Kind<Self, Vec<A>> {
        let mut collection = collection.into_iter();
        match collection.next() {
            Some(head) => self.product_many::<A>(head, collection),
            None => self.of::<Vec<A>>(Vec::new()),
        }
    }
}

/// Combines every computation of `collection` through both layers of
/// `F<G<_>>`.
pub fn product_all_composition<F, G, A>(
    outer: &F,
    inner: &G,
    collection: impl IntoIterator<Item = Kind<F, Kind<G, A>>>,
) -> Kind<F, Kind<G, Vec<A>>>
where
    F: Applicative,
    G: Product,
    A: Value,
{
    let gathered = outer.product_all::<Kind<G, A>>(collection);
    outer.map::<Vec<Kind<G, A>>, Kind<G, Vec<A>>>(gathered, |layers| inner.product_all::<A>(layers))
}

/// Combines a fixed number of computations into an array.
///
/// # Examples
///
/// ```rust
/// use kindling::data::OptionTypeLambda;
/// use kindling::typeclass::product;
///
/// assert_eq!(product::array(&OptionTypeLambda, [Some(1), Some(2)]), Some([1, 2]));
/// assert_eq!(product::array(&OptionTypeLambda, [Some(1), None]), None);
/// ```
pub fn array<F: Product, A: Value, const N: usize>(dict: &F, computations: [Kind<F, A>; N]) -> Kind<F, [A; N]> {
    let gathered = dict.product_all::<A>(computations);
    dict.imap::<Vec<A>, [A; N]>(
        gathered,
        |values| match <[A; N]>::try_from(values) {
            Ok(array) => array,
            Err(_) => unreachable!("product_all yields one value per computation"),
        },
        |array| array.into(),
    )
}

impl<F: Applicative, G: Product> Product for Composition<F, G> {
    fn product_all<A: Value>(&self, collection: impl IntoIterator<Item = Kind<Self, A>>) -> Kind<Self, Vec<A>> {
        product_all_composition::<F, G, A>(self.outer(), self.inner(), collection)
    }
}
