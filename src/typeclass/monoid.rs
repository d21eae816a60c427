//! Monoid - a semigroup with an identity element, as a dictionary value.
//!
//! A [`Monoid<A>`] extends a [`Semigroup<A>`] with `empty`, which makes
//! `combine_all` total: combining no values at all yields `empty`.
//!
//! # Laws
//!
//! In addition to associativity:
//!
//! ```text
//! combine(empty, a) == a
//! combine(a, empty) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::monoid;
//!
//! let sum = monoid::sum::<i32>();
//! assert_eq!(sum.combine_all(vec![1, 2, 3]), 6);
//! assert_eq!(sum.combine_all(Vec::new()), 0);
//! ```

use std::fmt;
use std::ops::{Add, Mul};
use std::rc::Rc;

use crate::hkt::{Kind, TypeLambda, Value};

use super::bounded::Bounded;
use super::invariant::Invariant;
use super::of::Of;
use super::product::Product;
use super::semi_product::SemiProduct;
use super::semigroup::{self, Semigroup};

// =============================================================================
// Monoid
// =============================================================================

type CombineAllFn<A> = Rc<dyn Fn(&mut dyn Iterator<Item = A>) -> A>;

/// A semigroup on `A` with an identity element.
#[derive(Clone)]
pub struct Monoid<A> {
    semigroup: Semigroup<A>,
    empty: A,
    combine_all: CombineAllFn<A>,
}

impl<A: fmt::Debug> fmt::Debug for Monoid<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Monoid")
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}

impl<A: Clone> Monoid<A> {
    /// The underlying semigroup.
    #[inline]
    pub const fn semigroup(&self) -> &Semigroup<A> {
        &self.semigroup
    }

    /// The identity element.
    #[inline]
    pub fn empty(&self) -> A {
        self.empty.clone()
    }

    /// Combines two values.
    #[inline]
    pub fn combine(&self, left: A, right: A) -> A {
        self.semigroup.combine(left, right)
    }

    /// Combines `head` with every element of `collection`.
    #[inline]
    pub fn combine_many(&self, head: A, collection: impl IntoIterator<Item = A>) -> A {
        self.semigroup.combine_many(head, collection)
    }

    /// Combines every element of `collection`; `empty` when there are none.
    #[inline]
    pub fn combine_all(&self, collection: impl IntoIterator<Item = A>) -> A {
        (self.combine_all)(&mut collection.into_iter())
    }
}

/// Adds `empty` to `semigroup`; `combine_all` starts from `empty`.
pub fn from_semigroup<A: Value>(semigroup: Semigroup<A>, empty: A) -> Monoid<A> {
    let (folding, start) = (semigroup.clone(), empty.clone());
    make_with_all(semigroup, empty, move |collection| folding.combine_many(start.clone(), collection))
}

/// Adds `empty` and a dedicated `combine_all` to `semigroup`.
pub fn make_with_all<A: Value>(
    semigroup: Semigroup<A>,
    empty: A,
    combine_all: impl Fn(&mut dyn Iterator<Item = A>) -> A + 'static,
) -> Monoid<A> {
    Monoid {
        semigroup,
        empty,
        combine_all: Rc::new(combine_all),
    }
}

// =============================================================================
// Instances
// =============================================================================

/// Types with a multiplicative identity.
pub trait One {
    /// The value `x` such that `x * y == y`.
    const ONE: Self;
}

macro_rules! impl_one {
    ($($ty:ty => $one:expr),* $(,)?) => {
        $(
            impl One for $ty {
                const ONE: Self = $one;
            }
        )*
    };
}

impl_one!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

/// String concatenation with `""` as identity.
pub fn string() -> Monoid<String> {
    from_semigroup(semigroup::string(), String::new())
}

/// Addition with `A::default()` as identity.
pub fn sum<A: Add<Output = A> + Default + Value>() -> Monoid<A> {
    from_semigroup(semigroup::sum(), A::default())
}

/// Multiplication with [`One::ONE`] as identity.
pub fn multiply<A: Mul<Output = A> + One + Value>() -> Monoid<A> {
    from_semigroup(semigroup::multiply(), A::ONE)
}

/// The smaller value, with the greatest bound as identity.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::{bounded, monoid};
///
/// let min = monoid::min(bounded::from_value::<u8>());
/// assert_eq!(min.combine_all(vec![7, 3, 9]), 3);
/// assert_eq!(min.combine_all(Vec::new()), u8::MAX);
/// ```
pub fn min<A: Value>(bounded: Bounded<A>) -> Monoid<A> {
    from_semigroup(semigroup::min(bounded.order().clone()), bounded.max_bound())
}

/// The larger value, with the least bound as identity.
pub fn max<A: Value>(bounded: Bounded<A>) -> Monoid<A> {
    from_semigroup(semigroup::max(bounded.order().clone()), bounded.min_bound())
}

/// Swaps the operands of `monoid`; the identity is unchanged.
pub fn reverse<A: Value>(monoid: Monoid<A>) -> Monoid<A> {
    from_semigroup(semigroup::reverse(monoid.semigroup), monoid.empty)
}

/// Conjunction with `true` as identity.
pub fn all() -> Monoid<bool> {
    from_semigroup(semigroup::all(), true)
}

/// Disjunction with `false` as identity.
pub fn any() -> Monoid<bool> {
    from_semigroup(semigroup::any(), false)
}

/// Concatenation with the empty vector as identity.
pub fn array<A: Value>() -> Monoid<Vec<A>> {
    from_semigroup(semigroup::array(), Vec::new())
}

/// Transports `monoid` along an isomorphism.
pub fn imap<A: Value, B: Value>(
    monoid: Monoid<A>,
    to: impl Fn(A) -> B + Clone + 'static,
    from: impl Fn(B) -> A + Clone + 'static,
) -> Monoid<B> {
    let empty = to(monoid.empty());
    from_semigroup(semigroup::imap(monoid.semigroup, to, from), empty)
}

/// Combines pairs component-wise.
pub fn product<A: Value, B: Value>(first: Monoid<A>, second: Monoid<B>) -> Monoid<(A, B)> {
    tuple2(first, second)
}

/// Combines vectors position by position, one monoid per position.
///
/// The identity holds the identity of every monoid.
pub fn product_many<A: Value>(head: Monoid<A>, collection: impl IntoIterator<Item = Monoid<A>>) -> Monoid<Vec<A>> {
    let monoids: Vec<Monoid<A>> = std::iter::once(head).chain(collection).collect();
    let empty = monoids.iter().map(Monoid::empty).collect();
    let mut semigroups = monoids.into_iter().map(|monoid| monoid.semigroup);
    match semigroups.next() {
        Some(first) => from_semigroup(semigroup::product_many(first, semigroups), empty),
        None => unreachable!("the head monoid is always present"),
    }
}

macro_rules! tuple_monoid {
    ($name:ident, $arity:literal; $($T:ident),+) => {
        paste::paste! {
            #[doc = "Combines " $arity "-tuples component-wise; the identity is the tuple of identities."]
            pub fn $name<$($T: Value),+>($([<$T:lower>]: Monoid<$T>),+) -> Monoid<($($T,)+)> {
                let empty = ($([<$T:lower>].empty(),)+);
                from_semigroup(semigroup::$name($([<$T:lower>].semigroup),+), empty)
            }
        }
    };
}

tuple_monoid!(tuple2, 2; A, B);
tuple_monoid!(tuple3, 3; A, B, C);
tuple_monoid!(tuple4, 4; A, B, C, D);

// =============================================================================
// MonoidTypeLambda
// =============================================================================

/// The type lambda of [`Monoid`], which is invariant in its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MonoidTypeLambda;

impl TypeLambda for MonoidTypeLambda {
    type Kind<A: Value> = Monoid<A>;
}

impl Invariant for MonoidTypeLambda {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        imap(fa, to, from)
    }
}

impl SemiProduct for MonoidTypeLambda {
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)> {
        product(fa, fb)
    }

    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>> {
        product_many(fa, collection)
    }
}

impl Of for MonoidTypeLambda {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        from_semigroup(semigroup::constant(value.clone()), value)
    }
}

impl Product for MonoidTypeLambda {}
