//! Bounded - an order together with its least and greatest values.
//!
//! The bounds make the `min`/`max` semigroups into monoids: the identity
//! of `min` is the greatest value and the identity of `max` is the least.
//!
//! [`BoundedValue`] supplies the bounds of primitive types as associated
//! constants; [`from_value`] turns those into a [`Bounded`] record.

use super::order::{self, Order};

// =============================================================================
// BoundedValue
// =============================================================================

/// Types with a compile-time least and greatest value.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::BoundedValue;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Percent(u8);
///
/// impl BoundedValue for Percent {
///     const MIN_VALUE: Self = Percent(0);
///     const MAX_VALUE: Self = Percent(100);
/// }
///
/// assert_eq!(Percent::MAX_VALUE, Percent(100));
/// ```
pub trait BoundedValue {
    /// The least value.
    const MIN_VALUE: Self;
    /// The greatest value.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BoundedValue for $ty {
                const MIN_VALUE: Self = <$ty>::MIN;
                const MAX_VALUE: Self = <$ty>::MAX;
            }
        )*
    };
}

impl_bounded_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl BoundedValue for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl BoundedValue for () {
    const MIN_VALUE: Self = ();
    const MAX_VALUE: Self = ();
}

// =============================================================================
// Bounded
// =============================================================================

/// An order on `A` with explicit bounds.
#[derive(Debug, Clone)]
pub struct Bounded<A> {
    order: Order<A>,
    min_bound: A,
    max_bound: A,
}

impl<A: Clone> Bounded<A> {
    /// Pairs `order` with its bounds.
    pub const fn new(order: Order<A>, min_bound: A, max_bound: A) -> Self {
        Self {
            order,
            min_bound,
            max_bound,
        }
    }

    /// The order.
    pub const fn order(&self) -> &Order<A> {
        &self.order
    }

    /// The least value.
    pub fn min_bound(&self) -> A {
        self.min_bound.clone()
    }

    /// The greatest value.
    pub fn max_bound(&self) -> A {
        self.max_bound.clone()
    }
}

/// The bounds of a [`BoundedValue`] type under its [`Ord`] order.
pub fn from_value<A: BoundedValue + Ord + Clone + 'static>() -> Bounded<A> {
    Bounded::new(order::from_ord(), A::MIN_VALUE, A::MAX_VALUE)
}

/// Reverses the order and swaps the bounds.
pub fn reverse<A: Clone + 'static>(bounded: Bounded<A>) -> Bounded<A> {
    Bounded::new(order::reverse(bounded.order), bounded.max_bound, bounded.min_bound)
}

/// Restricts `value` to the bounds.
pub fn clamp<A: Clone + 'static>(bounded: &Bounded<A>, value: A) -> A {
    order::clamp(&bounded.order).data_first(value, bounded.min_bound(), bounded.max_bound())
}
