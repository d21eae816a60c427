//! Batch operations must stop pulling from their input as soon as the
//! result is decided.
//!
//! Several inputs here are unbounded, so a batch operation that walks the
//! whole collection would never return.

use kindling::data::{
    ArrayTypeLambda, Either, EitherTypeLambda, OptionTypeLambda, ResultTypeLambda, These, TheseMonad, either, result,
};
use kindling::typeclass::{Product, SemiCoproduct, SemiProduct, foldable, monoid, semi_coproduct, semigroup};
use rstest::rstest;
use std::cell::Cell;

fn unreachable_tail<T>() -> impl Iterator<Item = T> {
    std::iter::repeat_with(|| -> T { panic!("the collection was pulled past the deciding element") })
}

// =============================================================================
// product_many stops at the first failure
// =============================================================================

#[rstest]
fn option_product_many_stops_at_first_none() {
    let pulled = Cell::new(0);
    let collection = (1..).map(|n| {
        pulled.set(pulled.get() + 1);
        if n == 3 { None } else { Some(n) }
    });
    assert_eq!(OptionTypeLambda.product_many(Some(0), collection), None);
    assert_eq!(pulled.get(), 3);
}

#[rstest]
fn option_product_many_with_failing_head_pulls_nothing() {
    assert_eq!(OptionTypeLambda.product_many(None::<i32>, unreachable_tail()), None);
}

#[rstest]
fn result_product_many_stops_at_first_error() {
    let dict = ResultTypeLambda::<String>::new();
    let collection = vec![Ok(1), Err("second".to_string())].into_iter().chain(unreachable_tail());
    assert_eq!(dict.product_many(Ok(0), collection), Err("second".to_string()));
}

#[rstest]
fn either_product_many_stops_at_first_left() {
    let dict = EitherTypeLambda::<&str>::new();
    let collection = std::iter::once(Either::Left("stop")).chain(unreachable_tail());
    assert_eq!(dict.product_many(Either::Right(1), collection), Either::Left("stop"));
}

#[rstest]
fn array_product_many_stops_once_a_factor_is_empty() {
    let collection = std::iter::once(Vec::new()).chain(unreachable_tail());
    assert_eq!(ArrayTypeLambda.product_many(vec![1, 2], collection), Vec::<Vec<i32>>::new());
}

#[rstest]
fn option_product_all_stops_at_first_none() {
    let collection = vec![Some(1), None].into_iter().chain(unreachable_tail());
    assert_eq!(OptionTypeLambda.product_all(collection), None);
}

#[rstest]
fn these_product_many_stops_at_first_left() {
    let dict = TheseMonad::new(semigroup::string());
    let collection = std::iter::once(These::Left("fatal".to_string())).chain(unreachable_tail());
    assert_eq!(
        dict.product_many(These::Both("warn;".to_string(), 1), collection),
        These::Left("warn;fatal".to_string())
    );
}

// =============================================================================
// coproduct_many stops at the first success
// =============================================================================

#[rstest]
fn option_coproduct_many_with_successful_head_pulls_nothing() {
    assert_eq!(OptionTypeLambda.coproduct_many(Some(1), unreachable_tail()), Some(1));
}

#[rstest]
fn result_first_success_of_stops_at_first_ok() {
    let pulled = Cell::new(0);
    let collection = (1..).map(|n: i32| {
        pulled.set(pulled.get() + 1);
        if n < 4 { Err(n) } else { Ok(n * 10) }
    });
    assert_eq!(result::first_success_of(Err(0), collection), Ok(40));
    assert_eq!(pulled.get(), 4);
}

#[rstest]
fn either_first_right_of_stops_at_first_right() {
    let collection = std::iter::once(Either::Right(2)).chain(unreachable_tail());
    assert_eq!(either::first_right_of(Either::Left("no"), collection), Either::Right(2));
}

#[rstest]
fn generic_first_success_of_on_an_unbounded_source() {
    let candidates = (1..).map(|n: u64| (n > 9).then_some(n));
    let found = semi_coproduct::first_success_of(&OptionTypeLambda, None, candidates);
    assert_eq!(found, Some(10));
}

#[rstest]
fn coproduct_map_kind_maps_up_to_the_first_success() {
    let mapped = Cell::new(0);
    let found = foldable::coproduct_map_kind(&ArrayTypeLambda, &OptionTypeLambda, vec![1, 2, 3, 4], |n: i32| {
        mapped.set(mapped.get() + 1);
        (n % 2 == 0).then_some(n)
    });
    assert_eq!(found, Some(2));
    assert_eq!(mapped.get(), 2);
}

// =============================================================================
// Semigroups and monoids with early exit
// =============================================================================

#[rstest]
fn first_ignores_the_rest() {
    assert_eq!(semigroup::first().combine_many(7, unreachable_tail()), 7);
}

#[rstest]
#[case(true)]
#[case(false)]
fn any_and_all_stop_at_the_absorbing_element(#[case] absorbing: bool) {
    let collection = std::iter::once(absorbing).chain(unreachable_tail());
    let combined = if absorbing {
        monoid::any().combine_all(collection)
    } else {
        monoid::all().combine_all(collection)
    };
    assert_eq!(combined, absorbing);
}
