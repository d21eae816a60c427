//! Data-last forms of the type class operations.
//!
//! Every function here takes the dictionary and the trailing arguments of
//! an operation and returns a closure awaiting the data, so that
//! `pipeable::op(&dict, x)(this) == op(&dict, this, x)` for each
//! operation `op`. The closure calls the data-first operation, which stays
//! the only implementation.
//!
//! The dictionary is cloned into the closure; the returned closure does not
//! borrow it.
//!
//! Unary operations such as [`covariant::as_unit`] or
//! [`flat_map::flatten`](crate::typeclass::flat_map::flatten) need no
//! data-last form and are not repeated here.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::OptionTypeLambda;
//! use kindling::pipe;
//! use kindling::pipeable;
//!
//! let result = pipe!(
//!     Some(4),
//!     pipeable::map(&OptionTypeLambda, |n: i32| n * 10),
//!     pipeable::flat_map(&OptionTypeLambda, |n: i32| (n > 30).then_some(n + 2)),
//!     pipeable::zip_with(&OptionTypeLambda, Some('!'), |n: i32, mark: char| format!("{n}{mark}")),
//! );
//! assert_eq!(result, Some("42!".to_string()));
//! ```

use crate::data::Either;
use crate::hkt::{Kind, Value};
use crate::typeclass::{
    Applicative, Bicovariant, Chainable, Contravariant, Covariant, Filterable, FlatMap, Foldable, Invariant, Monoid,
    SemiApplicative, SemiCoproduct, SemiProduct, Traversable, bicovariant, chainable, covariant, filterable, flat_map,
    foldable, semi_applicative, semi_product, traversable,
};

// =============================================================================
// Invariant / Covariant / Contravariant
// =============================================================================

/// Data-last [`Invariant::imap`].
pub fn imap<F, A, B, To, From>(
    dict: &F,
    to: To,
    from: From,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, B> + use<F, A, B, To, From>
where
    F: Invariant + Clone,
    A: Value,
    B: Value,
    To: Fn(A) -> B + Clone + 'static,
    From: Fn(B) -> A + Clone + 'static,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.imap::<A, B>(fa, to, from)
}

/// Data-last [`Covariant::map`].
///
/// # Examples
///
/// ```rust
/// use kindling::data::ArrayTypeLambda;
/// use kindling::pipeable;
///
/// let double = pipeable::map(&ArrayTypeLambda, |n: i32| n * 2);
/// assert_eq!(double(vec![1, 2, 3]), vec![2, 4, 6]);
/// ```
pub fn map<F, A, B, Function>(
    dict: &F,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, B> + use<F, A, B, Function>
where
    F: Covariant + Clone,
    A: Value,
    B: Value,
    Function: FnMut(A) -> B,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.map::<A, B>(fa, function)
}

/// Data-last [`covariant::as_`].
pub fn as_<F, A, B>(dict: &F, value: B) -> impl FnOnce(Kind<F, A>) -> Kind<F, B> + use<F, A, B>
where
    F: Covariant + Clone,
    A: Value,
    B: Value,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| covariant::as_::<F, A, B>(&dict, fa, value)
}

/// Data-last [`covariant::flap`]: captures the argument and awaits the
/// wrapped functions.
pub fn flap<F, A, B, Function>(
    dict: &F,
    value: A,
) -> impl FnOnce(Kind<F, Function>) -> Kind<F, B> + use<F, A, B, Function>
where
    F: Covariant + Clone,
    A: Value,
    B: Value,
    Function: FnMut(A) -> B + Value,
{
    let dict = dict.clone();
    move |functions: Kind<F, Function>| covariant::flap::<F, A, B, Function>(&dict, value, functions)
}

/// Data-last [`covariant::let_`].
pub fn let_<F, S, B, Function>(
    dict: &F,
    function: Function,
) -> impl FnOnce(Kind<F, S>) -> Kind<F, (S, B)> + use<F, S, B, Function>
where
    F: Covariant + Clone,
    S: Value,
    B: Value,
    Function: FnMut(&S) -> B,
{
    let dict = dict.clone();
    move |fs: Kind<F, S>| covariant::let_::<F, S, B>(&dict, fs, function)
}

/// Data-last [`Contravariant::contramap`].
pub fn contramap<F, A, B, Function>(
    dict: &F,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, B> + use<F, A, B, Function>
where
    F: Contravariant + Clone,
    A: Value,
    B: Value,
    Function: Fn(B) -> A + Clone + 'static,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.contramap::<A, B>(fa, function)
}

// =============================================================================
// FlatMap / Chainable
// =============================================================================

/// Data-last [`FlatMap::flat_map`].
pub fn flat_map<F, A, B, Function>(
    dict: &F,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, B> + use<F, A, B, Function>
where
    F: FlatMap + Clone,
    A: Value,
    B: Value,
    Function: FnMut(A) -> Kind<F, B>,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.flat_map::<A, B>(fa, function)
}

/// Data-last [`flat_map::and_then`].
pub fn and_then<F, A, B>(dict: &F, fb: Kind<F, B>) -> impl FnOnce(Kind<F, A>) -> Kind<F, B> + use<F, A, B>
where
    F: FlatMap + Clone,
    A: Value,
    B: Value,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| flat_map::and_then::<F, A, B>(&dict, fa, fb)
}

/// Data-last [`chainable::and_then_discard`].
pub fn and_then_discard<F, A, B>(dict: &F, fb: Kind<F, B>) -> impl FnOnce(Kind<F, A>) -> Kind<F, A> + use<F, A, B>
where
    F: Chainable + Clone,
    A: Value,
    B: Value,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| chainable::and_then_discard::<F, A, B>(&dict, fa, fb)
}

/// Data-last [`chainable::tap`].
pub fn tap<F, A, B, Function>(
    dict: &F,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, A> + use<F, A, B, Function>
where
    F: Chainable + Clone,
    A: Value,
    B: Value,
    Function: FnMut(A) -> Kind<F, B>,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| chainable::tap::<F, A, B>(&dict, fa, function)
}

/// Data-last [`chainable::bind`].
pub fn bind<F, S, B, Function>(
    dict: &F,
    function: Function,
) -> impl FnOnce(Kind<F, S>) -> Kind<F, (S, B)> + use<F, S, B, Function>
where
    F: Chainable + Clone,
    S: Value,
    B: Value,
    Function: FnMut(S) -> Kind<F, B>,
{
    let dict = dict.clone();
    move |fs: Kind<F, S>| chainable::bind::<F, S, B>(&dict, fs, function)
}

// =============================================================================
// SemiProduct / SemiApplicative
// =============================================================================

/// Data-last [`SemiProduct::product`].
pub fn product<F, A, B>(dict: &F, that: Kind<F, B>) -> impl FnOnce(Kind<F, A>) -> Kind<F, (A, B)> + use<F, A, B>
where
    F: SemiProduct + Clone,
    A: Value,
    B: Value,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.product::<A, B>(fa, that)
}

/// Data-last [`SemiProduct::product_many`].
pub fn product_many<F, A, Collection>(
    dict: &F,
    collection: Collection,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, Vec<A>> + use<F, A, Collection>
where
    F: SemiProduct + Clone,
    A: Value,
    Collection: IntoIterator<Item = Kind<F, A>>,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.product_many::<A>(fa, collection)
}

/// Data-last [`semi_product::and_then_bind`].
pub fn and_then_bind<F, S, B>(dict: &F, fb: Kind<F, B>) -> impl FnOnce(Kind<F, S>) -> Kind<F, (S, B)> + use<F, S, B>
where
    F: SemiProduct + Clone,
    S: Value,
    B: Value,
{
    let dict = dict.clone();
    move |fs: Kind<F, S>| semi_product::and_then_bind::<F, S, B>(&dict, fs, fb)
}

/// Data-last [`semi_applicative::ap`]: captures the argument and awaits the
/// wrapped functions.
pub fn ap<F, A, B, Function>(
    dict: &F,
    fa: Kind<F, A>,
) -> impl FnOnce(Kind<F, Function>) -> Kind<F, B> + use<F, A, B, Function>
where
    F: SemiApplicative + Clone,
    A: Value,
    B: Value,
    Function: FnMut(A) -> B + Value,
{
    let dict = dict.clone();
    move |ff: Kind<F, Function>| semi_applicative::ap::<F, A, B, Function>(&dict, ff, fa)
}

/// Data-last [`semi_applicative::zip_with`].
pub fn zip_with<F, A, B, C, Function>(
    dict: &F,
    fb: Kind<F, B>,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, C> + use<F, A, B, C, Function>
where
    F: SemiApplicative + Clone,
    A: Value,
    B: Value,
    C: Value,
    Function: FnMut(A, B) -> C,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| semi_applicative::zip_with::<F, A, B, C>(&dict, fa, fb, function)
}

// =============================================================================
// SemiCoproduct
// =============================================================================

/// Data-last [`SemiCoproduct::coproduct`].
pub fn coproduct<F, A>(dict: &F, that: Kind<F, A>) -> impl FnOnce(Kind<F, A>) -> Kind<F, A> + use<F, A>
where
    F: SemiCoproduct + Clone,
    A: Value,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.coproduct::<A>(fa, that)
}

/// Data-last [`SemiCoproduct::coproduct_many`].
pub fn coproduct_many<F, A, Collection>(
    dict: &F,
    collection: Collection,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, A> + use<F, A, Collection>
where
    F: SemiCoproduct + Clone,
    A: Value,
    Collection: IntoIterator<Item = Kind<F, A>>,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.coproduct_many::<A>(fa, collection)
}

// =============================================================================
// Foldable / Traversable
// =============================================================================

/// Data-last [`Foldable::reduce`].
pub fn reduce<F, A, B, Function>(
    dict: &F,
    initial: B,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> B + use<F, A, B, Function>
where
    F: Foldable + Clone,
    A: Value,
    Function: FnMut(B, A) -> B,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.reduce::<A, B>(fa, initial, function)
}

/// Data-last [`foldable::combine_map`].
pub fn combine_map<F, A, M, Function>(
    dict: &F,
    monoid: &Monoid<M>,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> M + use<F, A, M, Function>
where
    F: Foldable + Clone,
    A: Value,
    M: Value,
    Function: FnMut(A) -> M,
{
    let (dict, monoid) = (dict.clone(), monoid.clone());
    move |fa: Kind<F, A>| foldable::combine_map::<F, A, M>(&dict, fa, &monoid, function)
}

/// Data-last [`Traversable::traverse`].
///
/// # Examples
///
/// ```rust
/// use kindling::data::{ArrayTypeLambda, OptionTypeLambda};
/// use kindling::pipeable;
///
/// let parse_all = pipeable::traverse(&ArrayTypeLambda, &OptionTypeLambda, |s: &str| s.parse::<u8>().ok());
/// assert_eq!(parse_all(vec!["1", "2"]), Some(vec![1, 2]));
/// ```
pub fn traverse<F, H, A, B, Function>(
    dict: &F,
    applicative: &H,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> Kind<H, Kind<F, B>> + use<F, H, A, B, Function>
where
    F: Traversable + Clone,
    H: Applicative + Clone,
    A: Value,
    B: Value,
    Function: FnMut(A) -> Kind<H, B>,
{
    let (dict, applicative) = (dict.clone(), applicative.clone());
    move |fa: Kind<F, A>| dict.traverse::<H, A, B>(&applicative, fa, function)
}

/// Data-last [`traversable::traverse_tap`].
pub fn traverse_tap<F, H, A, B, Function>(
    dict: &F,
    applicative: &H,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> Kind<H, Kind<F, A>> + use<F, H, A, B, Function>
where
    F: Traversable + Clone,
    H: Applicative + Clone,
    A: Value,
    B: Value,
    Function: FnMut(A) -> Kind<H, B>,
{
    let (dict, applicative) = (dict.clone(), applicative.clone());
    move |fa: Kind<F, A>| traversable::traverse_tap::<F, H, A, B>(&dict, &applicative, fa, function)
}

// =============================================================================
// Filterable
// =============================================================================

/// Data-last [`Filterable::filter_map`].
pub fn filter_map<F, A, B, Function>(
    dict: &F,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, B> + use<F, A, B, Function>
where
    F: Filterable + Clone,
    A: Value,
    B: Value,
    Function: FnMut(A) -> Option<B>,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.filter_map::<A, B>(fa, function)
}

/// Data-last [`Filterable::partition_map`].
pub fn partition_map<F, A, B, C, Function>(
    dict: &F,
    function: Function,
) -> impl FnOnce(Kind<F, A>) -> (Kind<F, B>, Kind<F, C>) + use<F, A, B, C, Function>
where
    F: Filterable + Clone,
    A: Value,
    B: Value,
    C: Value,
    Function: FnMut(A) -> Either<B, C>,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.partition_map::<A, B, C>(fa, function)
}

/// Data-last [`filterable::filter`].
pub fn filter<F, A, Predicate>(
    dict: &F,
    predicate: Predicate,
) -> impl FnOnce(Kind<F, A>) -> Kind<F, A> + use<F, A, Predicate>
where
    F: Filterable + Clone,
    A: Value,
    Predicate: FnMut(&A) -> bool,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| filterable::filter::<F, A>(&dict, fa, predicate)
}

/// Data-last [`filterable::partition`].
pub fn partition<F, A, Predicate>(
    dict: &F,
    predicate: Predicate,
) -> impl FnOnce(Kind<F, A>) -> (Kind<F, A>, Kind<F, A>) + use<F, A, Predicate>
where
    F: Filterable + Clone,
    A: Value,
    Predicate: FnMut(&A) -> bool,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| filterable::partition::<F, A>(&dict, fa, predicate)
}

// =============================================================================
// Bicovariant
// =============================================================================

/// Data-last [`Bicovariant::bimap`].
pub fn bimap<F, E2, A, B, OnError, OnValue>(
    dict: &F,
    on_error: OnError,
    on_value: OnValue,
) -> impl FnOnce(Kind<F, A>) -> Kind<F::WithError<E2>, B> + use<F, E2, A, B, OnError, OnValue>
where
    F: Bicovariant + Clone,
    E2: Value,
    A: Value,
    B: Value,
    OnError: FnMut(F::Error) -> E2,
    OnValue: FnMut(A) -> B,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| dict.bimap::<E2, A, B>(fa, on_error, on_value)
}

/// Data-last [`bicovariant::map_left`].
pub fn map_left<F, E2, A, OnError>(
    dict: &F,
    on_error: OnError,
) -> impl FnOnce(Kind<F, A>) -> Kind<F::WithError<E2>, A> + use<F, E2, A, OnError>
where
    F: Bicovariant + Clone,
    E2: Value,
    A: Value,
    OnError: FnMut(F::Error) -> E2,
{
    let dict = dict.clone();
    move |fa: Kind<F, A>| bicovariant::map_left::<F, E2, A>(&dict, fa, on_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ArrayTypeLambda, EitherTypeLambda, OptionTypeLambda, ResultTypeLambda, These, TheseMonad};
    use crate::typeclass::{monoid, semigroup};
    use rstest::rstest;

    #[rstest]
    fn map_awaits_the_data() {
        let increment = map(&OptionTypeLambda, |n: i32| n + 1);
        assert_eq!(increment(Some(1)), Some(2));
    }

    #[rstest]
    fn flat_map_on_results_keeps_the_error() {
        let dict = ResultTypeLambda::<&str>::new();
        let halve = flat_map(&dict, |n: i32| if n % 2 == 0 { Ok(n / 2) } else { Err("odd") });
        assert_eq!(halve(Ok(7)), Err("odd"));
    }

    #[rstest]
    fn product_pairs_the_data_with_the_captured_argument() {
        let with_letters = product::<_, i32, _>(&ArrayTypeLambda, vec!['a', 'b']);
        assert_eq!(with_letters(vec![1]), vec![(1, 'a'), (1, 'b')]);
    }

    #[rstest]
    fn product_many_puts_the_data_first() {
        let gather = product_many(&OptionTypeLambda, [Some(2), Some(3)]);
        assert_eq!(gather(Some(1)), Some(vec![1, 2, 3]));
    }

    #[rstest]
    #[case(None, Some(5), Some(5))]
    #[case(Some(1), Some(5), Some(1))]
    #[case(None, None, None)]
    fn coproduct_falls_back_to_the_captured_argument(
        #[case] this: Option<i32>,
        #[case] that: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!((coproduct(&OptionTypeLambda, that))(this), expected);
    }

    #[rstest]
    fn coproduct_many_on_either_finds_the_first_right() {
        let dict = EitherTypeLambda::<&str>::new();
        let first = coproduct_many(&dict, [Either::Left("b"), Either::Right(2)]);
        assert_eq!(first(Either::Left("a")), Either::Right(2));
    }

    #[rstest]
    fn tap_and_bind_on_arrays() {
        let kept = tap(&ArrayTypeLambda, |n: i32| vec![(); usize::try_from(n).unwrap_or(0)]);
        assert_eq!(kept(vec![0, 1, 2]), vec![1, 2, 2]);
        let bound = bind(&ArrayTypeLambda, |n: i32| vec![n, -n]);
        assert_eq!(bound(vec![1]), vec![(1, 1), (1, -1)]);
    }

    #[rstest]
    fn these_monad_is_cloned_into_the_closure() {
        let warn = {
            let dict = TheseMonad::new(semigroup::string());
            flat_map(&dict, |n: i32| These::Both("w2".to_string(), n * 2))
        };
        assert_eq!(warn(These::Both("w1".to_string(), 3)), These::Both("w1w2".to_string(), 6));
    }

    #[rstest]
    fn ap_and_zip_with_capture_the_argument() {
        let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
        let applied = ap::<_, i32, i32, fn(i32) -> i32>(&ArrayTypeLambda, vec![1, 2]);
        assert_eq!(applied(functions), vec![2, 3, 10, 20]);
        let add = zip_with(&OptionTypeLambda, Some(10), |a: i32, b: i32| a + b);
        assert_eq!(add(Some(1)), Some(11));
    }

    #[rstest]
    fn reduce_and_combine_map() {
        let total = reduce(&ArrayTypeLambda, 0, |sum: i32, n: i32| sum + n);
        assert_eq!(total(vec![1, 2, 3]), 6);
        let lengths = combine_map(&ArrayTypeLambda, &monoid::sum::<usize>(), |s: &str| s.len());
        assert_eq!(lengths(vec!["ab", "cde"]), 5);
    }

    #[rstest]
    fn traverse_stops_at_the_first_failure() {
        let parse = traverse(&ArrayTypeLambda, &ResultTypeLambda::<String>::new(), |s: &str| {
            s.parse::<i32>().map_err(|_| format!("bad: {s}"))
        });
        assert_eq!(parse(vec!["1", "x", "y"]), Err("bad: x".to_string()));
    }

    #[rstest]
    fn filter_and_partition() {
        let evens = filter(&ArrayTypeLambda, |n: &i32| n % 2 == 0);
        assert_eq!(evens(vec![1, 2, 3, 4]), vec![2, 4]);
        let split = partition(&ArrayTypeLambda, |n: &i32| *n > 2);
        assert_eq!(split(vec![1, 2, 3, 4]), (vec![1, 2], vec![3, 4]));
    }

    #[rstest]
    fn bimap_and_map_left_on_results() {
        let dict = ResultTypeLambda::<&str>::new();
        let both = bimap(&dict, str::len, |n: i32| n > 0);
        assert_eq!(both(Err("four")), Err(4));
        let left = map_left::<_, _, i32, _>(&dict, str::to_uppercase);
        assert_eq!(left(Err("e")), Err("E".to_string()));
    }

    #[rstest]
    fn let_and_as_on_options() {
        let with_double = let_(&OptionTypeLambda, |n: &i32| n * 2);
        assert_eq!(with_double(Some(4)), Some((4, 8)));
        let replaced = as_::<_, i32, _>(&OptionTypeLambda, "done");
        assert_eq!(replaced(Some(1)), Some("done"));
    }
}
