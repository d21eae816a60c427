//! SemiApplicative - SemiProduct together with Covariant.
//!
//! With both `product` and `map`, functions of any arity can be applied to
//! independent computations. Every combinator here is a pairing followed by
//! a map, so the failure policy of `product` carries over unchanged: for
//! `Option`, `Either` and `Result` the left operand is checked first and the
//! first failure wins.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::OptionTypeLambda;
//! use kindling::typeclass::semi_applicative;
//!
//! let mut add = semi_applicative::lift2(&OptionTypeLambda, |a: i32, b: i32| a + b);
//! assert_eq!(add(Some(1), Some(2)), Some(3));
//! assert_eq!(add(Some(1), None), None);
//! ```

use crate::hkt::{Kind, Value};

use super::covariant::Covariant;
use super::semi_product::SemiProduct;
use super::semigroup::{self, Semigroup};

/// A dictionary offering both `product` and `map`.
pub trait SemiApplicative: SemiProduct + Covariant {}

impl<F: SemiProduct + Covariant> SemiApplicative for F {}

/// Applies the function inside `ff` to the value inside `fa`.
///
/// `ff` is evaluated first.
pub fn ap<F, A, B, Function>(dict: &F, ff: Kind<F, Function>, fa: Kind<F, A>) -> Kind<F, B>
where
    F: SemiApplicative,
    A: Value,
    B: Value,
    Function: FnMut(A) -> B + Value,
{
    let paired = dict.product::<Function, A>(ff, fa);
    dict.map::<(Function, A), B>(paired, |(mut function, a)| function(a))
}

/// Combines `fa` and `fb` with a binary function.
pub fn zip_with<F, A, B, C>(
    dict: &F,
    fa: Kind<F, A>,
    fb: Kind<F, B>,
    mut function: impl FnMut(A, B) -> C,
) -> Kind<F, C>
where
    F: SemiApplicative,
    A: Value,
    B: Value,
    C: Value,
{
    let paired = dict.product::<A, B>(fa, fb);
    dict.map::<(A, B), C>(paired, |(a, b)| function(a, b))
}

/// Lifts a binary function to operate on two computations.
pub fn lift2<F, A, B, C>(
    dict: &F,
    mut function: impl FnMut(A, B) -> C,
) -> impl FnMut(Kind<F, A>, Kind<F, B>) -> Kind<F, C>
where
    F: SemiApplicative,
    A: Value,
    B: Value,
    C: Value,
{
    move |fa: Kind<F, A>, fb: Kind<F, B>| zip_with::<F, A, B, C>(dict, fa, fb, &mut function)
}

/// Lifts a ternary function to operate on three computations.
///
/// # Examples
///
/// ```rust
/// use kindling::data::ArrayTypeLambda;
/// use kindling::typeclass::semi_applicative;
///
/// let mut clamp = semi_applicative::lift3(&ArrayTypeLambda, |n: i32, low: i32, high: i32| {
///     n.clamp(low, high)
/// });
/// assert_eq!(clamp(vec![5, -5], vec![0], vec![3]), vec![3, 0]);
/// ```
pub fn lift3<F, A, B, C, D>(
    dict: &F,
    mut function: impl FnMut(A, B, C) -> D,
) -> impl FnMut(Kind<F, A>, Kind<F, B>, Kind<F, C>) -> Kind<F, D>
where
    F: SemiApplicative,
    A: Value,
    B: Value,
    C: Value,
    D: Value,
{
    move |fa: Kind<F, A>, fb: Kind<F, B>, fc: Kind<F, C>| {
        let paired = dict.product::<(A, B), C>(dict.product::<A, B>(fa, fb), fc);
        dict.map::<((A, B), C), D>(paired, |((a, b), c)| function(a, b, c))
    }
}

/// Runs both computations and keeps the result of `fb`.
pub fn and_then<F: SemiApplicative, A: Value, B: Value>(dict: &F, fa: Kind<F, A>, fb: Kind<F, B>) -> Kind<F, B> {
    zip_with::<F, A, B, B>(dict, fa, fb, |_, b| b)
}

/// Runs both computations and keeps the result of `fa`.
pub fn and_then_discard<F: SemiApplicative, A: Value, B: Value>(
    dict: &F,
    fa: Kind<F, A>,
    fb: Kind<F, B>,
) -> Kind<F, A> {
    zip_with::<F, A, B, A>(dict, fa, fb, |a, _| a)
}

/// Lifts a semigroup on `A` to a semigroup on `F<A>`.
///
/// Both operands are combined with `product`, so a failure on either side
/// fails the combination. `combine_many` goes through `product_many` and
/// keeps its short-circuiting.
///
/// # Examples
///
/// ```rust
/// use kindling::data::OptionTypeLambda;
/// use kindling::typeclass::{semi_applicative, semigroup};
///
/// let lifted = semi_applicative::lift_semigroup(&OptionTypeLambda, semigroup::sum::<i32>());
/// assert_eq!(lifted.combine(Some(1), Some(2)), Some(3));
/// assert_eq!(lifted.combine(Some(1), None), None);
/// ```
pub fn lift_semigroup<F: SemiApplicative, A: Value>(dict: &F, semigroup: Semigroup<A>) -> Semigroup<Kind<F, A>> {
    let combine = {
        let (dict, semigroup) = (dict.clone(), semigroup.clone());
        move |x: Kind<F, A>, y: Kind<F, A>| zip_with::<F, A, A, A>(&dict, x, y, |a, b| semigroup.combine(a, b))
    };
    let combine_many = {
        let dict = dict.clone();
        move |head: Kind<F, A>, rest: &mut dyn Iterator<Item = Kind<F, A>>| {
            let gathered = dict.product_many::<A>(head, rest);
            dict.map::<Vec<A>, A>(gathered, |values| {
                let mut values = values.into_iter();
                match values.next() {
                    Some(first) => semigroup.combine_many(first, values),
                    None => unreachable!("product_many always yields at least the head element"),
                }
            })
        }
    };
    semigroup::make_with_many(combine, combine_many)
}
