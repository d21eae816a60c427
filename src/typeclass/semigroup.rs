//! Semigroup - an associative binary operation, as a dictionary value.
//!
//! A [`Semigroup<A>`] is a record of two closures: `combine` and
//! `combine_many`. Several semigroups can exist for the same type (`sum`
//! and `multiply` for numbers, `first` and `last` for anything), so they
//! are passed around as values instead of being trait implementations.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! ```
//!
//! `combine_many(head, rest)` must equal folding `rest` into `head` with
//! `combine`.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::semigroup;
//!
//! let sum = semigroup::sum::<i32>();
//! assert_eq!(sum.combine(1, 2), 3);
//! assert_eq!(sum.combine_many(1, vec![2, 3, 4]), 10);
//!
//! let joined = semigroup::intercalate(semigroup::string(), ", ".to_string());
//! assert_eq!(joined.combine_many("a".to_string(), ["b".to_string(), "c".to_string()]), "a, b, c");
//! ```

use std::fmt;
use std::ops::{Add, Mul};
use std::rc::Rc;

use crate::hkt::{Kind, TypeLambda, Value};

use super::invariant::Invariant;
use super::of::Of;
use super::order::{self, Order};
use super::product::Product;
use super::semi_product::SemiProduct;

// =============================================================================
// Semigroup
// =============================================================================

type CombineFn<A> = Rc<dyn Fn(A, A) -> A>;
type CombineManyFn<A> = Rc<dyn Fn(A, &mut dyn Iterator<Item = A>) -> A>;

/// An associative binary operation on `A`.
pub struct Semigroup<A> {
    combine: CombineFn<A>,
    combine_many: CombineManyFn<A>,
}

impl<A> Clone for Semigroup<A> {
    fn clone(&self) -> Self {
        Self {
            combine: Rc::clone(&self.combine),
            combine_many: Rc::clone(&self.combine_many),
        }
    }
}

impl<A> fmt::Debug for Semigroup<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Semigroup").finish_non_exhaustive()
    }
}

impl<A> Semigroup<A> {
    /// Combines two values.
    #[inline]
    pub fn combine(&self, left: A, right: A) -> A {
        (self.combine)(left, right)
    }

    /// Combines `head` with every element of `collection`, left to right.
    #[inline]
    pub fn combine_many(&self, head: A, collection: impl IntoIterator<Item = A>) -> A {
        (self.combine_many)(head, &mut collection.into_iter())
    }
}

/// Builds a semigroup from `combine`; `combine_many` folds with it.
pub fn make<A: 'static>(combine: impl Fn(A, A) -> A + 'static) -> Semigroup<A> {
    let combine = Rc::new(combine);
    let folding = Rc::clone(&combine);
    make_with_many(
        move |left, right| combine(left, right),
        move |head, rest| {
            let mut accumulated = head;
            for next in rest {
                accumulated = folding(accumulated, next);
            }
            accumulated
        },
    )
}

/// Builds a semigroup with a dedicated `combine_many`.
///
/// `combine_many` must agree with folding `combine`; it exists so that
/// instances can batch or stop early.
pub fn make_with_many<A: 'static>(
    combine: impl Fn(A, A) -> A + 'static,
    combine_many: impl Fn(A, &mut dyn Iterator<Item = A>) -> A + 'static,
) -> Semigroup<A> {
    Semigroup {
        combine: Rc::new(combine),
        combine_many: Rc::new(combine_many),
    }
}

// =============================================================================
// Instances
// =============================================================================

/// String concatenation.
pub fn string() -> Semigroup<String> {
    make_with_many(
        |mut left: String, right: String| {
            left.push_str(&right);
            left
        },
        |mut head, rest| {
            for next in rest {
                head.push_str(&next);
            }
            head
        },
    )
}

/// Addition.
pub fn sum<A: Add<Output = A> + 'static>() -> Semigroup<A> {
    make(|left: A, right: A| left + right)
}

/// Multiplication.
pub fn multiply<A: Mul<Output = A> + 'static>() -> Semigroup<A> {
    make(|left: A, right: A| left * right)
}

/// Keeps the smaller value; ties keep the left one.
pub fn min<A: 'static>(order: Order<A>) -> Semigroup<A> {
    make(move |left: A, right: A| order::min(&order).data_first(left, right))
}

/// Keeps the larger value; ties keep the left one.
pub fn max<A: 'static>(order: Order<A>) -> Semigroup<A> {
    make(move |left: A, right: A| order::max(&order).data_first(left, right))
}

/// Always yields `value`, ignoring the operands.
pub fn constant<A: Value>(value: A) -> Semigroup<A> {
    let many = value.clone();
    make_with_many(move |_, _| value.clone(), move |_, _| many.clone())
}

/// Swaps the operands of `semigroup`.
pub fn reverse<A: 'static>(semigroup: Semigroup<A>) -> Semigroup<A> {
    let swapped = semigroup.clone();
    make_with_many(
        move |left, right| swapped.combine(right, left),
        move |head, rest| {
            let mut rest: Vec<A> = rest.collect();
            match rest.pop() {
                Some(last) => {
                    let folded = semigroup.combine_many(last, rest.into_iter().rev());
                    semigroup.combine(folded, head)
                }
                None => head,
            }
        },
    )
}

/// Inserts `middle` between every pair of combined values.
pub fn intercalate<A: Value>(semigroup: Semigroup<A>, middle: A) -> Semigroup<A> {
    make(move |left: A, right: A| semigroup.combine_many(left, [middle.clone(), right]))
}

/// Keeps the first value. `combine_many` never pulls from its iterator.
pub fn first<A: 'static>() -> Semigroup<A> {
    make_with_many(|left, _| left, |head, _| head)
}

/// Keeps the last value.
pub fn last<A: 'static>() -> Semigroup<A> {
    make_with_many(
        |_, right| right,
        |head, rest| {
            let mut last = head;
            for next in rest {
                last = next;
            }
            last
        },
    )
}

/// Boolean conjunction; stops at the first `false`.
pub fn all() -> Semigroup<bool> {
    make_with_many(
        |left: bool, right: bool| left && right,
        |head, rest| {
            if !head {
                return false;
            }
            for next in rest {
                if !next {
                    return false;
                }
            }
            true
        },
    )
}

/// Boolean disjunction; stops at the first `true`.
pub fn any() -> Semigroup<bool> {
    make_with_many(
        |left: bool, right: bool| left || right,
        |head, rest| {
            if head {
                return true;
            }
            for next in rest {
                if next {
                    return true;
                }
            }
            false
        },
    )
}

/// Concatenation of vectors.
pub fn array<A: 'static>() -> Semigroup<Vec<A>> {
    make_with_many(
        |mut left: Vec<A>, right: Vec<A>| {
            left.extend(right);
            left
        },
        |mut head, rest| {
            for next in rest {
                head.extend(next);
            }
            head
        },
    )
}

/// Transports `semigroup` along an isomorphism.
pub fn imap<A: 'static, B: 'static>(
    semigroup: Semigroup<A>,
    to: impl Fn(A) -> B + Clone + 'static,
    from: impl Fn(B) -> A + Clone + 'static,
) -> Semigroup<B> {
    let (pairwise, to_pairwise, from_pairwise) = (semigroup.clone(), to.clone(), from.clone());
    make_with_many(
        move |left, right| to_pairwise(pairwise.combine(from_pairwise(left), from_pairwise(right))),
        move |head, rest| to(semigroup.combine_many(from(head), rest.map(&from))),
    )
}

/// Combines pairs component-wise.
pub fn product<A: 'static, B: 'static>(first: Semigroup<A>, second: Semigroup<B>) -> Semigroup<(A, B)> {
    tuple2(first, second)
}

/// Combines vectors position by position, one semigroup per position.
///
/// Positions beyond the shortest of the operands and the semigroups are
/// dropped.
pub fn product_many<A: 'static>(
    head: Semigroup<A>,
    collection: impl IntoIterator<Item = Semigroup<A>>,
) -> Semigroup<Vec<A>> {
    let semigroups: Vec<Semigroup<A>> = std::iter::once(head).chain(collection).collect();
    make(move |left: Vec<A>, right: Vec<A>| {
        semigroups
            .iter()
            .zip(left.into_iter().zip(right))
            .map(|(semigroup, (l, r))| semigroup.combine(l, r))
            .collect()
    })
}

macro_rules! tuple_semigroup {
    ($name:ident, $arity:literal; $($T:ident $index:tt),+) => {
        paste::paste! {
            #[doc = "Combines " $arity "-tuples component-wise."]
            pub fn $name<$($T: 'static),+>($([<$T:lower>]: Semigroup<$T>),+) -> Semigroup<($($T,)+)> {
                make(move |left: ($($T,)+), right: ($($T,)+)| {
                    ($([<$T:lower>].combine(left.$index, right.$index),)+)
                })
            }
        }
    };
}

tuple_semigroup!(tuple2, 2; A 0, B 1);
tuple_semigroup!(tuple3, 3; A 0, B 1, C 2);
tuple_semigroup!(tuple4, 4; A 0, B 1, C 2, D 3);

// =============================================================================
// Struct builder
// =============================================================================

type FieldCombiner<S> = Rc<dyn Fn(&mut S, &S, &S)>;

/// Builds a semigroup for a struct from one semigroup per field.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::semigroup;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Stats {
///     count: u32,
///     longest: String,
/// }
///
/// let stats = semigroup::fields::<Stats>()
///     .field(|s| s.count, |s, count| s.count = count, semigroup::sum())
///     .field(|s| s.longest.clone(), |s, longest| s.longest = longest, semigroup::last())
///     .build();
///
/// let merged = stats.combine(
///     Stats { count: 1, longest: "a".into() },
///     Stats { count: 2, longest: "bb".into() },
/// );
/// assert_eq!(merged, Stats { count: 3, longest: "bb".into() });
/// ```
pub struct Fields<S> {
    combiners: Vec<FieldCombiner<S>>,
}

/// Starts a [`Fields`] builder with no fields.
pub fn fields<S: Clone + 'static>() -> Fields<S> {
    Fields { combiners: Vec::new() }
}

impl<S: Clone + 'static> Fields<S> {
    /// Adds a field, read with `get` and written back with `set`.
    #[must_use]
    pub fn field<T: 'static>(
        mut self,
        get: impl Fn(&S) -> T + 'static,
        set: impl Fn(&mut S, T) + 'static,
        semigroup: Semigroup<T>,
    ) -> Self {
        self.combiners.push(Rc::new(move |out: &mut S, left: &S, right: &S| {
            set(out, semigroup.combine(get(left), get(right)));
        }));
        self
    }

    /// Finishes the builder.
    ///
    /// Fields that were never registered keep the value of the left operand.
    pub fn build(self) -> Semigroup<S> {
        let combiners = self.combiners;
        make(move |left: S, right: S| {
            let mut out = left.clone();
            for combiner in &combiners {
                combiner(&mut out, &left, &right);
            }
            out
        })
    }
}

// =============================================================================
// SemigroupTypeLambda
// =============================================================================

/// The type lambda of [`Semigroup`], which is invariant in its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SemigroupTypeLambda;

impl TypeLambda for SemigroupTypeLambda {
    type Kind<A: Value> = Semigroup<A>;
}

impl Invariant for SemigroupTypeLambda {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        imap(fa, to, from)
    }
}

impl SemiProduct for SemigroupTypeLambda {
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

impl Of for SemigroupTypeLambda {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        constant(value)
    }
}

impl Product for SemigroupTypeLambda {}
