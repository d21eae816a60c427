//! Instances for arrays, represented as [`Vec`].
//!
//! Products are cartesian: every combination, in lexicographic order with
//! the first input varying slowest. Coproducts concatenate and `zero` is the
//! empty vector. A product that meets an empty input is empty, and
//! `product_many` stops pulling from its iterator at that point.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::ArrayTypeLambda;
//! use kindling::typeclass::{SemiCoproduct, SemiProduct};
//!
//! assert_eq!(ArrayTypeLambda.product(vec![1, 2], vec!['a', 'b']), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! assert_eq!(ArrayTypeLambda.coproduct(vec![1], vec![2, 3]), vec![1, 2, 3]);
//! ```

use super::either::Either;
use crate::hkt::{Kind, TypeLambda, Value};
use crate::typeclass::{
    Applicative, Coproduct, Covariant, Filterable, FlatMap, Foldable, Invariant, Monoid, Of, Order, Product,
    SemiCoproduct, SemiProduct, Semigroup, Traversable, covariant, monoid, order, semigroup,
};

/// The type lambda of [`Vec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArrayTypeLambda;

impl TypeLambda for ArrayTypeLambda {
    type Kind<A: Value> = Vec<A>;
}

// =============================================================================
// Type class instances
// =============================================================================

impl Invariant for ArrayTypeLambda {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        covariant::imap(self, fa, to, from)
    }
}

impl Covariant for ArrayTypeLambda {
    fn map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> B) -> Kind<Self, B> {
        fa.into_iter().map(function).collect()
    }
}

impl Of for ArrayTypeLambda {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        vec![value]
    }
}

impl FlatMap for ArrayTypeLambda {
    fn flat_map<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        function: impl FnMut(A) -> Kind<Self, B>,
    ) -> Kind<Self, B> {
        fa.into_iter().flat_map(function).collect()
    }
}

impl SemiProduct for ArrayTypeLambda {
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)> {
        let mut result = Vec::with_capacity(fa.len() * fb.len());
        for a in fa {
            for b in &fb {
                result.push((a.clone(), b.clone()));
            }
        }
        result
    }

    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>> {
        let mut prefixes: Vec<Vec<A>> = fa.into_iter().map(|a| vec![a]).collect();
        let mut collection = collection.into_iter();
        while !prefixes.is_empty() {
            let Some(next) = collection.next() else {
                break;
            };
            let mut extended = Vec::with_capacity(prefixes.len() * next.len());
            for prefix in prefixes {
                for value in &next {
                    let mut combination = Vec::with_capacity(prefix.len() + 1);
                    combination.extend_from_slice(&prefix);
                    combination.push(value.clone());
                    extended.push(combination);
                }
            }
            prefixes = extended;
        }
        prefixes
    }
}

impl Product for ArrayTypeLambda {}

impl SemiCoproduct for ArrayTypeLambda {
    fn coproduct<A: Value>(&self, mut fa: Kind<Self, A>, that: Kind<Self, A>) -> Kind<Self, A> {
        fa.extend(that);
        fa
    }

    fn coproduct_many<A: Value>(
        &self,
        mut fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, A> {
        fa.extend(collection.into_iter().flatten());
        fa
    }
}

impl Coproduct for ArrayTypeLambda {
    fn zero<A: Value>(&self) -> Kind<Self, A> {
        Vec::new()
    }
}

impl Foldable for ArrayTypeLambda {
    fn reduce<A: Value, B>(&self, fa: Kind<Self, A>, initial: B, function: impl FnMut(B, A) -> B) -> B {
        fa.into_iter().fold(initial, function)
    }
}

impl Traversable for ArrayTypeLambda {
    fn traverse<H: Applicative, A: Value, B: Value>(
        &self,
        applicative: &H,
        fa: Kind<Self, A>,
        function: impl FnMut(A) -> Kind<H, B>,
    ) -> Kind<H, Kind<Self, B>> {
        applicative.product_all::<B>(fa.into_iter().map(function))
    }
}

impl Filterable for ArrayTypeLambda {
    fn partition_map<A: Value, B: Value, C: Value>(
        &self,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Either<B, C>,
    ) -> (Kind<Self, B>, Kind<Self, C>) {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for value in fa {
            match function(value) {
                Either::Left(left) => lefts.push(left),
                Either::Right(right) => rights.push(right),
            }
        }
        (lefts, rights)
    }

    fn filter_map<A: Value, B: Value>(&self, fa: Kind<Self, A>, function: impl FnMut(A) -> Option<B>) -> Kind<Self, B> {
        fa.into_iter().filter_map(function).collect()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Concatenation.
pub fn get_semigroup<A: Value>() -> Semigroup<Vec<A>> {
    semigroup::array()
}

/// Concatenation with the empty vector as identity.
pub fn get_monoid<A: Value>() -> Monoid<Vec<A>> {
    monoid::array()
}

/// Lexicographic order by `order`, with a proper prefix first.
pub fn get_order<A: 'static>(order: Order<A>) -> Order<Vec<A>> {
    order::array(order)
}
