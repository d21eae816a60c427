//! Applicative - SemiApplicative with a unit.
//!
//! An applicative functor can lift plain values with `of` and combine any
//! number of independent computations, including none at all.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! ap(of(|x| x), fa) == fa
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! ap(of(f), of(a)) == of(f(a))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! ap(ff, of(a)) == ap(of(|f| f(a)), ff)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::OptionTypeLambda;
//! use kindling::typeclass::{Of, Product};
//!
//! assert_eq!(OptionTypeLambda.of(1), Some(1));
//! assert_eq!(OptionTypeLambda.product_all(vec![Some(1), Some(2)]), Some(vec![1, 2]));
//! ```

use crate::hkt::{Kind, Value};

use super::monoid::{self, Monoid};
use super::product::Product;
use super::semi_applicative::{self, SemiApplicative};

/// A dictionary offering `of`, `product` and `map`.
pub trait Applicative: SemiApplicative + Product {}

impl<F: SemiApplicative + Product> Applicative for F {}

/// Lifts a monoid on `A` to a monoid on `F<A>`.
///
/// The identity is `of(monoid.empty())`; combination follows
/// [`lift_semigroup`](semi_applicative::lift_semigroup).
///
/// # Examples
///
/// ```rust
/// use kindling::data::OptionTypeLambda;
/// use kindling::typeclass::{applicative, monoid};
///
/// let lifted = applicative::lift_monoid(&OptionTypeLambda, monoid::sum::<i32>());
/// assert_eq!(lifted.combine_all(vec![Some(1), Some(2), Some(3)]), Some(6));
/// assert_eq!(lifted.combine_all(Vec::new()), Some(0));
/// ```
pub fn lift_monoid<F: Applicative, A: Value>(dict: &F, monoid: Monoid<A>) -> Monoid<Kind<F, A>> {
    let empty = dict.of::<A>(monoid.empty());
    monoid::from_semigroup(semi_applicative::lift_semigroup(dict, monoid.semigroup().clone()), empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ArrayTypeLambda, IdentityTypeLambda, Identity, OptionTypeLambda};
    use crate::typeclass::Of;
    use crate::typeclass::semi_applicative::ap;

    #[test]
    fn identity_law_for_arrays() {
        let identity: Vec<fn(i32) -> i32> = ArrayTypeLambda.of(|x| x);
        assert_eq!(ap(&ArrayTypeLambda, identity, vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn homomorphism_for_identity() {
        let double: fn(i32) -> i32 = |n| n * 2;
        let applied = ap(&IdentityTypeLambda, IdentityTypeLambda.of(double), IdentityTypeLambda.of(21));
        assert_eq!(applied, Identity::new(42));
    }

    #[test]
    fn lift_monoid_on_arrays_sums_every_combination() {
        let lifted = lift_monoid(&ArrayTypeLambda, monoid::sum::<i32>());
        assert_eq!(lifted.combine(vec![1, 2], vec![10, 20]), vec![11, 21, 12, 22]);
        assert_eq!(lifted.empty(), vec![0]);
    }

    #[test]
    fn lift_monoid_propagates_none() {
        let lifted = lift_monoid(&OptionTypeLambda, monoid::string());
        assert_eq!(lifted.combine_all(vec![Some("a".to_string()), None]), None);
    }
}
