//! Coproduct type class - SemiCoproduct with an identity.
//!
//! `zero` is the computation that never succeeds, so choosing among no
//! computations at all is well defined.
//!
//! # Laws
//!
//! ```text
//! coproduct(zero(), fa) == fa
//! coproduct(fa, zero()) == fa
//! ```

use crate::hkt::{Kind, Value};

use super::monoid::{self, Monoid};
use super::semi_coproduct::{self, SemiCoproduct};

/// The dictionary for choosing among any number of computations.
pub trait Coproduct: SemiCoproduct {
    /// The computation that never succeeds.
    fn zero<A: Value>(&self) -> Kind<Self, A>;

    /// Chooses among every element of `collection`; `zero` when empty.
    fn coproduct_all<A: Value>(&self, collection: impl IntoIterator<Item = Kind<Self, A>>) -> Kind<Self, A> {
        let mut collection = collection.into_iter();
        match collection.next() {
            Some(head) => self.coproduct_many::<A>(head, collection),
            None => self.zero::<A>(),
        }
    }
}

/// The monoid whose `combine` is `coproduct` and whose identity is `zero`.
///
/// # Examples
///
/// ```rust
/// use kindling::data::OptionTypeLambda;
/// use kindling::typeclass::coproduct;
///
/// let monoid = coproduct::get_monoid::<_, i32>(&OptionTypeLambda);
/// assert_eq!(monoid.combine_all(vec![None, Some(2), Some(3)]), Some(2));
/// assert_eq!(monoid.combine_all(Vec::new()), None);
/// ```
pub fn get_monoid<F: Coproduct, A: Value>(dict: &F) -> Monoid<Kind<F, A>> {
    let all = {
        let dict = dict.clone();
        move |collection: &mut dyn Iterator<Item = Kind<F, A>>| dict.coproduct_all::<A>(collection)
    };
    monoid::make_with_all(semi_coproduct::get_semigroup::<F, A>(dict), dict.zero::<A>(), all)
}
