//! Integration tests for the `do_!` macro.
//!
//! The macro must behave exactly like the nested `flat_map` chain it
//! expands to, for every built-in monad.

#![cfg(feature = "compose")]

use kindling::data::{
    ArrayTypeLambda, Either, EitherTypeLambda, Identity, IdentityTypeLambda, OptionTypeLambda, ResultTypeLambda,
    These, TheseMonad,
};
use kindling::do_;
use kindling::typeclass::{FlatMap, Of, alternative, chainable, covariant, of, semigroup};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Per-instance behaviour
// =============================================================================

#[rstest]
fn option_binds_until_none() {
    let divide = |n: i32, d: i32| if d == 0 { None } else { Some(n / d) };
    let ok = do_! { OptionTypeLambda =>
        a <= divide(100, 5);
        b <= divide(a, 2);
        yield a + b
    };
    let failed = do_! { OptionTypeLambda =>
        a <= divide(100, 0);
        b <= divide(a, 2);
        yield a + b
    };
    assert_eq!(ok, Some(30));
    assert_eq!(failed, None);
}

#[rstest]
fn result_keeps_the_first_error() {
    let dict = ResultTypeLambda::<String>::new();
    let result: Result<i32, String> = do_! { dict =>
        a <= Ok(1);
        _ <= Err::<(), String>("first".to_string());
        _ <= Err::<(), String>("second".to_string());
        yield a
    };
    assert_eq!(result, Err("first".to_string()));
}

#[rstest]
fn either_with_plain_terminal() {
    let result = do_! { EitherTypeLambda::<&str>::new() =>
        n <= Either::Right(12);
        let half = n / 2;
        if half % 2 == 0 { Either::Right(half) } else { Either::Left("odd half") }
    };
    assert_eq!(result, Either::Right(6));
}

#[rstest]
fn array_filters_with_guard() {
    let triples = do_! { ArrayTypeLambda =>
        a <= (1..=10).collect::<Vec<u32>>();
        b <= (a..=10).collect::<Vec<u32>>();
        c <= (b..=15).collect::<Vec<u32>>();
        _ <= alternative::guard(&ArrayTypeLambda, a * a + b * b == c * c);
        yield (a, b, c)
    };
    assert_eq!(triples, vec![(3, 4, 5), (6, 8, 10)]);
}

#[rstest]
fn identity_runs_every_step() {
    let result = do_! { IdentityTypeLambda =>
        word <= Identity::new("kind");
        let upper = word.to_uppercase();
        yield format!("{upper}ling")
    };
    assert_eq!(result.into_inner(), "KINDling");
}

#[rstest]
fn these_accumulates_warnings_through_every_step() {
    let dict = TheseMonad::new(semigroup::array::<&str>());
    let result = do_! { dict =>
        a <= These::Both(vec!["rounded"], 2);
        b <= These::Right(3);
        c <= These::Both(vec!["clamped"], 10);
        yield a * b + c
    };
    assert_eq!(result, These::Both(vec!["rounded", "clamped"], 16));
}

#[rstest]
fn these_stops_at_left_but_keeps_earlier_warnings() {
    let dict = TheseMonad::new(semigroup::string());
    let result = do_! { dict =>
        a <= These::Both("w1 ".to_string(), 1);
        _ <= These::Left::<String, ()>("fatal".to_string());
        yield a
    };
    assert_eq!(result, These::Left("w1 fatal".to_string()));
}

// =============================================================================
// Agreement with the combinator form
// =============================================================================

#[rstest]
fn matches_the_record_combinators() {
    let from_macro = do_! { OptionTypeLambda =>
        x <= Some(2);
        y <= Some(x * 10);
        yield (x, y)
    };

    let start = of::do_(&OptionTypeLambda);
    let with_x = chainable::bind(&OptionTypeLambda, start, |()| Some(2));
    let with_y = chainable::bind(&OptionTypeLambda, with_x, |((), x)| Some(x * 10));
    let from_combinators = covariant::let_(&OptionTypeLambda, with_y, |(((), x), y)| (*x, *y));
    let from_combinators = from_combinators.map(|(_, pair)| pair);

    assert_eq!(from_macro, from_combinators);
}

proptest! {
    /// `do_!` is the same as the nested `flat_map` chain it abbreviates.
    #[test]
    fn prop_do_matches_nested_flat_map(first in any::<Option<i16>>(), second in any::<Option<i16>>()) {
        let from_macro = do_! { OptionTypeLambda =>
            a <= first;
            b <= second;
            yield i32::from(a) + i32::from(b)
        };
        let nested = OptionTypeLambda.flat_map(first, |a| {
            OptionTypeLambda.flat_map(second, move |b| OptionTypeLambda.of(i32::from(a) + i32::from(b)))
        });
        prop_assert_eq!(from_macro, nested);
    }

    #[test]
    fn prop_do_on_arrays_is_cartesian(
        xs in prop::collection::vec(any::<u8>(), 0..5),
        ys in prop::collection::vec(any::<u8>(), 0..5),
    ) {
        let inner = ys.clone();
        let from_macro = do_! { ArrayTypeLambda =>
            x <= xs.clone();
            y <= inner.clone();
            yield (x, y)
        };
        let expected: Vec<(u8, u8)> = xs.iter().flat_map(|x| ys.iter().map(move |y| (*x, *y))).collect();
        prop_assert_eq!(from_macro, expected);
    }
}
