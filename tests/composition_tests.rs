//! Tests for dictionaries built from two other dictionaries.
//!
//! A [`Composition`] of `F` and `G` acts on `F<G<_>>`. These tests check
//! that the composed operations agree with applying the layers by hand,
//! and that nesting compositions is associative.

use kindling::data::{ArrayTypeLambda, Either, EitherTypeLambda, OptionTypeLambda, ResultTypeLambda};
use kindling::hkt::Composition;
use kindling::typeclass::order::{self, OrderTypeLambda};
use kindling::typeclass::{
    Covariant, Invariant, Of, Product, SemiProduct, contravariant, of, product, semi_applicative, semi_product,
};
use proptest::prelude::*;
use rstest::rstest;
use std::cmp::Ordering;

type Nested = Vec<Option<Result<i32, String>>>;

fn nested_strategy() -> impl Strategy<Value = Nested> {
    prop::collection::vec(prop::option::of(prop::result::maybe_ok(any::<i32>(), "[a-z]{0,3}")), 0..8)
}

// =============================================================================
// Associativity of nesting
// =============================================================================

proptest! {
    /// `(Array . Option) . Result` and `Array . (Option . Result)` act on the
    /// same nested type and must agree.
    #[test]
    fn prop_three_layer_map_is_associative(values in nested_strategy()) {
        let left_nested = Composition::new(
            Composition::new(ArrayTypeLambda, OptionTypeLambda),
            ResultTypeLambda::<String>::new(),
        );
        let right_nested = Composition::new(
            ArrayTypeLambda,
            Composition::new(OptionTypeLambda, ResultTypeLambda::<String>::new()),
        );
        let function = |n: i32| i64::from(n) * 2;
        prop_assert_eq!(left_nested.map(values.clone(), function), right_nested.map(values, function));
    }

    #[test]
    fn prop_three_layer_map_matches_manual_nesting(values in nested_strategy()) {
        let composed = Composition::new(
            ArrayTypeLambda,
            Composition::new(OptionTypeLambda, ResultTypeLambda::<String>::new()),
        );
        let manual: Vec<Option<Result<bool, String>>> = values
            .iter()
            .cloned()
            .map(|layer| layer.map(|result| result.map(|n| n % 2 == 0)))
            .collect();
        prop_assert_eq!(composed.map(values, |n: i32| n % 2 == 0), manual);
    }

    #[test]
    fn prop_three_layer_imap_round_trips(values in nested_strategy()) {
        let composed = Composition::new(
            Composition::new(ArrayTypeLambda, OptionTypeLambda),
            ResultTypeLambda::<String>::new(),
        );
        let shifted = composed.imap(values.clone(), |n: i32| n.wrapping_add(1), |n: i32| n.wrapping_sub(1));
        let restored = composed.imap(shifted, |n: i32| n.wrapping_sub(1), |n: i32| n.wrapping_add(1));
        prop_assert_eq!(restored, values);
    }
}

// =============================================================================
// Applicative composition
// =============================================================================

#[rstest]
fn composed_product_pairs_outer_then_inner() {
    let dict = Composition::new(ArrayTypeLambda, OptionTypeLambda);
    let paired = dict.product(vec![Some(1), None], vec![Some('a'), Some('b')]);
    assert_eq!(paired, vec![Some((1, 'a')), Some((1, 'b')), None, None]);
}

#[rstest]
fn composed_product_all_through_result() {
    let dict = Composition::new(OptionTypeLambda, ResultTypeLambda::<&str>::new());
    assert_eq!(dict.product_all(vec![Some(Ok(1)), Some(Ok(2))]), Some(Ok(vec![1, 2])));
    assert_eq!(dict.product_all(vec![Some(Ok(1)), Some(Err("bad"))]), Some(Err("bad")));
    assert_eq!(dict.product_all(vec![Some(Ok(1)), None]), None);
    assert_eq!(dict.product_all(Vec::<Option<Result<i32, &str>>>::new()), Some(Ok(Vec::new())));
}

#[rstest]
fn composed_of_wraps_both_layers() {
    let dict = Composition::new(ArrayTypeLambda, EitherTypeLambda::<String>::new());
    assert_eq!(dict.of(5), vec![Either::Right(5)]);
    assert_eq!(of::of_composition(&OptionTypeLambda, &ArrayTypeLambda, 'x'), Some(vec!['x']));
}

#[rstest]
fn lift2_over_a_composition() {
    let dict = Composition::new(OptionTypeLambda, OptionTypeLambda);
    let mut add = semi_applicative::lift2(&dict, |a: i32, b: i32| a + b);
    assert_eq!(add(Some(Some(1)), Some(Some(2))), Some(Some(3)));
    assert_eq!(add(Some(None), Some(Some(2))), Some(None));
    assert_eq!(add(None, Some(Some(2))), None);
}

#[rstest]
fn tuple3_over_a_composition() {
    let dict = Composition::new(ResultTypeLambda::<&str>::new(), OptionTypeLambda);
    let triple = semi_product::tuple3(&dict, Ok(Some(1)), Ok(Some("two")), Ok(Some(3.0)));
    assert_eq!(triple, Ok(Some((1, "two", 3.0))));
}

#[rstest]
fn fixed_size_product_over_a_composition() {
    let dict = Composition::new(ArrayTypeLambda, OptionTypeLambda);
    assert_eq!(product::array(&dict, [vec![Some(1)], vec![Some(2), None]]), vec![Some([1, 2]), None]);
}

// =============================================================================
// Contravariant composition
// =============================================================================

/// Orders orders by how they rank `1` against `2`.
fn by_verdict_on_one_and_two() -> order::Order<order::Order<i32>> {
    order::contramap(order::from_ord::<Ordering>(), |inner: &order::Order<i32>| inner.compare(&1, &2))
}

#[rstest]
fn contramap_composition_is_covariant() {
    let composed = contravariant::contramap_composition(
        &OrderTypeLambda,
        &OrderTypeLambda,
        by_verdict_on_one_and_two(),
        |n: i32| n.to_string(),
    );
    let ascending = order::from_ord::<String>();
    let descending = order::reverse(order::from_ord::<String>());
    assert_eq!(composed.compare(&ascending, &descending), Ordering::Less);
    assert_eq!(composed.compare(&descending, &ascending), Ordering::Greater);
    assert_eq!(composed.compare(&ascending, &ascending), Ordering::Equal);
}

#[rstest]
fn contramap_composition_reads_through_the_function() {
    let composed = contravariant::contramap_composition(
        &OrderTypeLambda,
        &OrderTypeLambda,
        by_verdict_on_one_and_two(),
        |n: i32| -n,
    );
    let ascending = order::from_ord::<i32>();
    let equal_everything = order::empty::<i32>();
    assert_eq!(composed.compare(&ascending, &equal_everything), Ordering::Greater);
}
