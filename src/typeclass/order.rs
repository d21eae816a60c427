//! Order - a total ordering, as a dictionary value.
//!
//! An [`Order<A>`] wraps a comparison closure. Unlike [`Ord`], several
//! orders can coexist for one type, and orders can be derived from each
//! other with [`contramap`], [`reverse`] and [`combine`].
//!
//! # Laws
//!
//! ```text
//! compare(a, a) == Equal                                     (reflexivity)
//! compare(a, b) == compare(b, a).reverse()                   (antisymmetry)
//! compare(a, b) != Greater && compare(b, c) != Greater
//!     implies compare(a, c) != Greater                       (transitivity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::order;
//!
//! let by_length = order::contramap(order::from_ord::<usize>(), |s: &String| s.len());
//! let shortest = order::min(&by_length).data_first("abc".to_string(), "de".to_string());
//! assert_eq!(shortest, "de");
//!
//! let is_short = order::less_than(&by_length).data_last("four".to_string());
//! assert!(is_short("ab".to_string()));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::dual::{Dual2, Dual3, dual2, dual3};
use crate::hkt::{Kind, TypeLambda, Value};

use super::contravariant::Contravariant;
use super::invariant::Invariant;
use super::monoid::{self, Monoid};
use super::of::Of;
use super::product::Product;
use super::semi_product::SemiProduct;
use super::semigroup::{self, Semigroup};

// =============================================================================
// Order
// =============================================================================

type CompareFn<A> = Rc<dyn Fn(&A, &A) -> Ordering>;

/// A total ordering on `A`.
pub struct Order<A> {
    compare: CompareFn<A>,
}

impl<A> Clone for Order<A> {
    fn clone(&self) -> Self {
        Self {
            compare: Rc::clone(&self.compare),
        }
    }
}

impl<A> fmt::Debug for Order<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Order").finish_non_exhaustive()
    }
}

impl<A> Order<A> {
    /// Compares `left` with `right`.
    #[inline]
    pub fn compare(&self, left: &A, right: &A) -> Ordering {
        (self.compare)(left, right)
    }
}

/// Builds an order from a comparison function.
pub fn make<A: 'static>(compare: impl Fn(&A, &A) -> Ordering + 'static) -> Order<A> {
    Order {
        compare: Rc::new(compare),
    }
}

/// The order given by the type's [`Ord`] implementation.
pub fn from_ord<A: Ord + 'static>() -> Order<A> {
    make(A::cmp)
}

/// Orders `f64` with [`f64::total_cmp`], so `NaN` sorts after every number.
pub fn float() -> Order<f64> {
    make(f64::total_cmp)
}

/// Reverses `order`.
pub fn reverse<A: 'static>(order: Order<A>) -> Order<A> {
    make(move |left: &A, right: &A| order.compare(right, left))
}

/// Orders `B` by the `A` each value is mapped to.
pub fn contramap<A: 'static, B: 'static>(order: Order<A>, function: impl Fn(&B) -> A + 'static) -> Order<B> {
    make(move |left: &B, right: &B| order.compare(&function(left), &function(right)))
}

/// Compares with `first`, falling back to `second` on ties.
pub fn combine<A: 'static>(first: Order<A>, second: Order<A>) -> Order<A> {
    make(move |left: &A, right: &A| first.compare(left, right).then_with(|| second.compare(left, right)))
}

/// Compares with each order in turn until one breaks the tie.
pub fn combine_many<A: 'static>(head: Order<A>, collection: impl IntoIterator<Item = Order<A>>) -> Order<A> {
    let orders: Vec<Order<A>> = std::iter::once(head).chain(collection).collect();
    make(move |left: &A, right: &A| {
        orders
            .iter()
            .map(|order| order.compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// The order that considers every pair equal.
pub fn empty<A: 'static>() -> Order<A> {
    make(|_: &A, _: &A| Ordering::Equal)
}

/// Orders combine lexicographically.
pub fn semigroup<A: 'static>() -> Semigroup<Order<A>> {
    semigroup::make_with_many(combine, |head, rest| combine_many(head, rest))
}

/// [`semigroup`] with [`empty`] as its identity.
pub fn monoid<A: 'static>() -> Monoid<Order<A>> {
    monoid::from_semigroup(semigroup(), empty())
}

/// Orders vectors element by element; a proper prefix sorts first.
pub fn array<A: 'static>(order: Order<A>) -> Order<Vec<A>> {
    make(move |left: &Vec<A>, right: &Vec<A>| {
        left.iter()
            .zip(right)
            .map(|(l, r)| order.compare(l, r))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| left.len().cmp(&right.len()))
    })
}

macro_rules! tuple_order {
    ($name:ident, $arity:literal; $($T:ident $index:tt),+) => {
        paste::paste! {
            #[doc = "Orders " $arity "-tuples lexicographically, one order per component."]
            pub fn $name<$($T: 'static),+>($([<$T:lower>]: Order<$T>),+) -> Order<($($T,)+)> {
                make(move |left: &($($T,)+), right: &($($T,)+)| {
                    Ordering::Equal$(.then_with(|| [<$T:lower>].compare(&left.$index, &right.$index)))+
                })
            }
        }
    };
}

tuple_order!(tuple2, 2; A 0, B 1);
tuple_order!(tuple3, 3; A 0, B 1, C 2);
tuple_order!(tuple4, 4; A 0, B 1, C 2, D 3);

// =============================================================================
// Comparisons
// =============================================================================

/// `this < that`.
pub fn less_than<A: 'static>(order: &Order<A>) -> Dual2<impl Fn(A, A) -> bool + Clone + use<A>> {
    let order = order.clone();
    dual2(move |this: A, that: A| order.compare(&this, &that).is_lt())
}

/// `this > that`.
pub fn greater_than<A: 'static>(order: &Order<A>) -> Dual2<impl Fn(A, A) -> bool + Clone + use<A>> {
    let order = order.clone();
    dual2(move |this: A, that: A| order.compare(&this, &that).is_gt())
}

/// `this <= that`.
pub fn less_than_or_equal_to<A: 'static>(order: &Order<A>) -> Dual2<impl Fn(A, A) -> bool + Clone + use<A>> {
    let order = order.clone();
    dual2(move |this: A, that: A| order.compare(&this, &that).is_le())
}

/// `this >= that`.
pub fn greater_than_or_equal_to<A: 'static>(order: &Order<A>) -> Dual2<impl Fn(A, A) -> bool + Clone + use<A>> {
    let order = order.clone();
    dual2(move |this: A, that: A| order.compare(&this, &that).is_ge())
}

/// The smaller of two values; ties keep `this`.
pub fn min<A: 'static>(order: &Order<A>) -> Dual2<impl Fn(A, A) -> A + Clone + use<A>> {
    let order = order.clone();
    dual2(move |this: A, that: A| if order.compare(&this, &that).is_le() { this } else { that })
}

/// The larger of two values; ties keep `this`.
pub fn max<A: 'static>(order: &Order<A>) -> Dual2<impl Fn(A, A) -> A + Clone + use<A>> {
    let order = order.clone();
    dual2(move |this: A, that: A| if order.compare(&this, &that).is_ge() { this } else { that })
}

/// Restricts `this` to the range `minimum..=maximum`.
///
/// Raises `this` to `minimum` first and then lowers it to `maximum`, so
/// inverted bounds (`minimum > maximum`) always yield `maximum`.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::order;
///
/// let clamp = order::clamp(&order::from_ord::<i32>());
/// assert_eq!(clamp.data_first(15, 0, 10), 10);
/// assert_eq!((clamp.data_last(0, 10))(-5), 0);
/// ```
pub fn clamp<A: 'static>(order: &Order<A>) -> Dual3<impl Fn(A, A, A) -> A + Clone + use<A>> {
    let order = order.clone();
    dual3(move |this: A, minimum: A, maximum: A| {
        let (lower, upper) = (min(&order), max(&order));
        lower.data_first(maximum, upper.data_first(minimum, this))
    })
}

/// Whether `this` lies within `minimum..=maximum`.
pub fn between<A: 'static>(order: &Order<A>) -> Dual3<impl Fn(A, A, A) -> bool + Clone + use<A>> {
    let order = order.clone();
    dual3(move |this: A, minimum: A, maximum: A| {
        order.compare(&this, &minimum).is_ge() && order.compare(&this, &maximum).is_le()
    })
}

// =============================================================================
// OrderTypeLambda
// =============================================================================

/// The type lambda of [`Order`], which is contravariant in its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OrderTypeLambda;

impl TypeLambda for OrderTypeLambda {
    type Kind<A: Value> = Order<A>;
}

impl Invariant for OrderTypeLambda {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        super::contravariant::imap::<Self, A, B>(self, fa, to, from)
    }
}

impl Contravariant for OrderTypeLambda {
    fn contramap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        function: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        contramap(fa, move |b: &B| function(b.clone()))
    }
}

impl SemiProduct for OrderTypeLambda {
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)> {
        tuple2(fa, fb)
    }

    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>> {
        let orders: Vec<Order<A>> = std::iter::once(fa).chain(collection).collect();
        make(move |left: &Vec<A>, right: &Vec<A>| {
            orders
                .iter()
                .zip(left.iter().zip(right))
                .map(|(order, (l, r))| order.compare(l, r))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl Of for OrderTypeLambda {
    fn of<A: Value>(&self, _value: A) -> Kind<Self, A> {
        empty()
    }
}

impl Product for OrderTypeLambda {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Greater)]
    #[case(2, 1, Ordering::Less)]
    #[case(3, 3, Ordering::Equal)]
    fn reverse_flips_comparisons(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(reverse(from_ord::<i32>()).compare(&left, &right), expected);
    }

    #[rstest]
    fn combine_breaks_ties_with_second_order() {
        let by_length_then_alphabet = combine(
            contramap(from_ord::<usize>(), |s: &&str| s.len()),
            from_ord::<&str>(),
        );
        assert_eq!(by_length_then_alphabet.compare(&"bb", &"aa"), Ordering::Greater);
        assert_eq!(by_length_then_alphabet.compare(&"c", &"aa"), Ordering::Less);
    }

    #[rstest]
    fn array_sorts_prefix_first() {
        let order = array(from_ord::<u8>());
        assert_eq!(order.compare(&vec![1, 2], &vec![1, 2, 0]), Ordering::Less);
        assert_eq!(order.compare(&vec![2], &vec![1, 9]), Ordering::Greater);
    }

    #[rstest]
    fn tuple2_compares_second_component_on_ties() {
        let order = tuple2(from_ord::<i32>(), reverse(from_ord::<char>()));
        assert_eq!(order.compare(&(1, 'a'), &(1, 'b')), Ordering::Greater);
    }

    #[rstest]
    fn float_places_nan_last() {
        assert_eq!(float().compare(&f64::NAN, &1.0), Ordering::Greater);
    }

    #[rstest]
    #[case(5, true)]
    #[case(0, true)]
    #[case(11, false)]
    fn between_is_inclusive(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(between(&from_ord::<i32>()).data_first(value, 0, 10), expected);
    }

    #[rstest]
    fn comparison_helpers_agree_in_both_conventions() {
        let order = from_ord::<i32>();
        let (this, that) = (3, 7);
        assert_eq!(less_than(&order).data_first(this, that), (less_than(&order).data_last(that))(this));
        assert_eq!(greater_than_or_equal_to(&order).data_first(this, that), (greater_than_or_equal_to(&order).data_last(that))(this));
        assert_eq!(max(&order).data_first(this, that), 7);
    }

    #[rstest]
    fn helpers_outlive_the_order_they_were_built_from() {
        let less = less_than(&from_ord::<i32>());
        let clamp_to_percent = clamp(&from_ord::<i32>()).data_last(0, 100);
        assert!(less.data_first(1, 2));
        assert_eq!(clamp_to_percent(140), 100);
    }

    #[rstest]
    #[case(5, 0, 10, 5)]
    #[case(-3, 0, 10, 0)]
    #[case(12, 0, 10, 10)]
    #[case(5, 10, 0, 0)]
    #[case(-5, 10, 0, 0)]
    fn clamp_raises_then_lowers(#[case] value: i32, #[case] minimum: i32, #[case] maximum: i32, #[case] expected: i32) {
        assert_eq!(clamp(&from_ord::<i32>()).data_first(value, minimum, maximum), expected);
    }

    #[rstest]
    fn monoid_empty_is_neutral() {
        let order = monoid::<i32>().combine(empty(), from_ord());
        assert_eq!(order.compare(&1, &2), Ordering::Less);
    }

    #[rstest]
    fn product_many_compares_position_by_position() {
        let order = OrderTypeLambda.product_many(from_ord::<i32>(), [reverse(from_ord())]);
        assert_eq!(order.compare(&vec![1, 5], &vec![1, 3]), Ordering::Less);
    }
}
