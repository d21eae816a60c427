//! SemiCoproduct type class - choosing between computations.
//!
//! `coproduct` is the dual of `product`: instead of requiring both sides,
//! it keeps the first one that succeeds under the constructor's own notion
//! of success (`Some`, `Right`, `Ok`). For arrays, where every element
//! counts, it concatenates.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! coproduct(coproduct(fa, fb), fc) == coproduct(fa, coproduct(fb, fc))
//! ```
//!
//! # Short-circuiting
//!
//! `coproduct_many` must stop pulling from its iterator once a success is
//! found.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::{Either, EitherTypeLambda};
//! use kindling::typeclass::SemiCoproduct;
//!
//! let dict = EitherTypeLambda::<&str>::new();
//! assert_eq!(dict.coproduct(Either::Left("a"), Either::Right(2)), Either::Right(2));
//! ```

use crate::hkt::{Kind, Value};

use super::invariant::Invariant;
use super::semigroup::{self, Semigroup};

/// The dictionary for choosing between computations.
pub trait SemiCoproduct: Invariant {
    /// Chooses between `fa` and `that`.
    fn coproduct<A: Value>(&self, fa: Kind<Self, A>, that: Kind<Self, A>) -> Kind<Self, A>;

    /// Chooses among `fa` and every element of `collection`, left to right.
    fn coproduct_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, A>;
}

/// The semigroup whose `combine` is `coproduct`.
pub fn get_semigroup<F: SemiCoproduct, A: Value>(dict: &F) -> Semigroup<Kind<F, A>> {
    let combine = {
        let dict = dict.clone();
        move |x: Kind<F, A>, y: Kind<F, A>| dict.coproduct::<A>(x, y)
    };
    let combine_many = {
        let dict = dict.clone();
        move |head: Kind<F, A>, rest: &mut dyn Iterator<Item = Kind<F, A>>| dict.coproduct_many::<A>(head, rest)
    };
    semigroup::make_with_many(combine, combine_many)
}

/// Returns the first success among `fa` and `collection`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::OptionTypeLambda;
/// use kindling::typeclass::semi_coproduct;
///
/// let found = semi_coproduct::first_success_of(&OptionTypeLambda, None, (1..).map(Some));
/// assert_eq!(found, Some(1));
/// ```
pub fn first_success_of<F: SemiCoproduct, A: Value>(
    dict: &F,
    fa: Kind<F, A>,
    collection: impl IntoIterator<Item = Kind<F, A>>,
) -> Kind<F, A> {
    dict.coproduct_many::<A>(fa, collection)
}
