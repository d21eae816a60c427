//! Chainable type class - FlatMap together with Covariant.
//!
//! Having both `map` and `flat_map` allows effects whose result is
//! discarded (`tap`, `and_then_discard`) and the dependent step of
//! do-notation (`bind`).

use crate::hkt::{Kind, Value};

use super::covariant::Covariant;
use super::flat_map::FlatMap;

/// A dictionary offering both `map` and `flat_map`.
pub trait Chainable: FlatMap + Covariant {}

impl<F: FlatMap + Covariant> Chainable for F {}

/// Runs `function` for its effect and keeps the original target.
///
/// # Examples
///
/// ```rust
/// use kindling::data::OptionTypeLambda;
/// use kindling::typeclass::chainable;
///
/// let positive = |n: &i32| if *n > 0 { Some(()) } else { None };
/// assert_eq!(chainable::tap(&OptionTypeLambda, Some(3), |n| positive(&n)), Some(3));
/// assert_eq!(chainable::tap(&OptionTypeLambda, Some(-3), |n| positive(&n)), None);
/// ```
pub fn tap<F: Chainable, A: Value, B: Value>(
    dict: &F,
    fa: Kind<F, A>,
    mut function: impl FnMut(A) -> Kind<F, B>,
) -> Kind<F, A> {
    dict.flat_map::<A, A>(fa, move |a| {
        let effect = function(a.clone());
        dict.map::<B, A>(effect, move |_| a.clone())
    })
}

/// Sequences `fa` then `fb`, keeping the result of `fa`.
pub fn and_then_discard<F: Chainable, A: Value, B: Value>(
    dict: &F,
    fa: Kind<F, A>,
    fb: Kind<F, B>,
) -> Kind<F, A> {
    tap::<F, A, B>(dict, fa, move |_| fb.clone())
}

/// Extends a do-notation record with the result of a dependent step.
///
/// `function` sees the record built so far; its result is appended as the
/// right component of a new pair.
///
/// # Examples
///
/// ```rust
/// use kindling::data::OptionTypeLambda;
/// use kindling::typeclass::{chainable, of};
///
/// let start = of::do_(&OptionTypeLambda);
/// let with_x = chainable::bind(&OptionTypeLambda, start, |()| Some(2));
/// let with_y = chainable::bind(&OptionTypeLambda, with_x, |((), x)| Some(x * 10));
/// assert_eq!(with_y, Some((((), 2), 20)));
/// ```
pub fn bind<F: Chainable, S: Value, B: Value>(
    dict: &F,
    fs: Kind<F, S>,
    mut function: impl FnMut(S) -> Kind<F, B>,
) -> Kind<F, (S, B)> {
    dict.flat_map::<S, (S, B)>(fs, move |record| {
        let step = function(record.clone());
        dict.map::<B, (S, B)>(step, move |value| (record.clone(), value))
    })
}
