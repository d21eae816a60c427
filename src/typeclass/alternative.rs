//! SemiAlternative and Alternative - choice combined with mapping.
//!
//! These traits add no operations of their own. They name the combination
//! of [`SemiCoproduct`]/[`Coproduct`] with [`Covariant`], which is what
//! filtering computations by a condition needs.
//!
//! # Laws
//!
//! ## Left Distributivity
//!
//! ```text
//! map(coproduct(fa, fb), f) == coproduct(map(fa, f), map(fb, f))
//! ```

use crate::hkt::{Kind, Value};

use super::coproduct::Coproduct;
use super::covariant::Covariant;
use super::of::Of;
use super::semi_coproduct::SemiCoproduct;

/// A dictionary offering `coproduct` and `map`.
pub trait SemiAlternative: SemiCoproduct + Covariant {}

impl<F: SemiCoproduct + Covariant> SemiAlternative for F {}

/// A dictionary offering `coproduct`, `zero` and `map`.
pub trait Alternative: SemiAlternative + Coproduct {}

impl<F: SemiAlternative + Coproduct> Alternative for F {}

/// Succeeds with `()` when `condition` holds, otherwise yields `zero`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::ArrayTypeLambda;
/// use kindling::typeclass::{alternative, FlatMap};
///
/// let evens = ArrayTypeLambda.flat_map((1..=6).collect::<Vec<i32>>(), |n| {
///     ArrayTypeLambda.flat_map(alternative::guard(&ArrayTypeLambda, n % 2 == 0), move |()| vec![n])
/// });
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn guard<F: Alternative + Of>(dict: &F, condition: bool) -> Kind<F, ()> {
    if condition { dict.of::<()>(()) } else { dict.zero::<()>() }
}

/// Turns a failure of `fa` into a success holding `None`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::OptionTypeLambda;
/// use kindling::typeclass::alternative;
///
/// assert_eq!(alternative::optional(&OptionTypeLambda, Some(1)), Some(Some(1)));
/// assert_eq!(alternative::optional(&OptionTypeLambda, None::<i32>), Some(None));
/// ```
pub fn optional<F: Alternative + Of, A: Value>(dict: &F, fa: Kind<F, A>) -> Kind<F, Option<A>> {
    let present = dict.map::<A, Option<A>>(fa, Some);
    dict.coproduct::<Option<A>>(present, dict.of::<Option<A>>(None))
}
