//! Do-notation over an explicit monad dictionary.
//!
//! The [`do_!`] macro flattens nested `flat_map` calls into a sequence of
//! bindings. The dictionary is written once, before `=>`, and every step
//! is run through it.
//!
//! # Syntax
//!
//! ```text
//! do_! { dict =>
//!     pattern <= computation;   // Bind: flat_map over computation
//!     _ <= computation;         // Sequence, discarding the value
//!     let pattern = expression; // Pure let binding
//!     yield expression          // Terminal: lift with `of`
//! }
//! ```
//!
//! The terminal may also be a plain expression that already is a
//! computation, which is returned as is.
//!
//! # Examples
//!
//! ```rust
//! use kindling::data::OptionTypeLambda;
//! use kindling::do_;
//!
//! let result = do_! { OptionTypeLambda =>
//!     x <= Some(5);
//!     y <= Some(10);
//!     let sum = x + y;
//!     yield sum * 2
//! };
//! assert_eq!(result, Some(30));
//! ```
//!
//! Arrays bind every combination, first binding varying slowest:
//!
//! ```rust
//! use kindling::data::ArrayTypeLambda;
//! use kindling::do_;
//!
//! let result = do_! { ArrayTypeLambda =>
//!     x <= vec![1, 2];
//!     y <= vec![10, 20];
//!     yield x + y
//! };
//! assert_eq!(result, vec![11, 21, 12, 22]);
//! ```
//!
//! # Expansion
//!
//! `pattern <= computation; rest` expands to
//!
//! ```rust,ignore
//! FlatMap::flat_map(dict, computation, move |pattern| { /* expanded rest */ })
//! ```
//!
//! and `yield expression` to `Of::of(dict, expression)`. Each step runs
//! inside a `move` closure that may be called many times (once per array
//! element, for example), so values bound earlier and used later must be
//! `Copy` or cloned explicitly.

/// Do-notation over an explicit monad dictionary.
///
/// See the [module documentation](crate::compose::do_macro) for the syntax.
///
/// # Examples
///
/// ```rust
/// use kindling::data::ResultTypeLambda;
/// use kindling::do_;
///
/// fn parse(input: &str) -> Result<i32, String> {
///     input.parse().map_err(|_| format!("not a number: {input}"))
/// }
///
/// let ok = do_! { ResultTypeLambda::<String>::new() =>
///     a <= parse("4");
///     b <= parse("5");
///     yield a * b
/// };
/// assert_eq!(ok, Ok(20));
///
/// let failed = do_! { ResultTypeLambda::<String>::new() =>
///     a <= parse("4");
///     b <= parse("five");
///     yield a * b
/// };
/// assert_eq!(failed, Err("not a number: five".to_string()));
/// ```
#[macro_export]
macro_rules! do_ {
    // ==========================================================================
    // Entry: bind the dictionary once, by reference
    // ==========================================================================

    ($dict:expr => $($body:tt)+) => {{
        let dictionary = &$dict;
        $crate::do_!(@step dictionary; $($body)+)
    }};

    // ==========================================================================
    // Terminal: yield expression
    // ==========================================================================

    (@step $dict:ident; yield $result:expr) => {
        $crate::typeclass::Of::of($dict, $result)
    };

    // ==========================================================================
    // Bind: pattern <= computation; rest
    // ==========================================================================

    (@step $dict:ident; $pattern:ident <= $computation:expr ; $($rest:tt)+) => {
        $crate::typeclass::FlatMap::flat_map($dict, $computation, move |$pattern| {
            $crate::do_!(@step $dict; $($rest)+)
        })
    };

    (@step $dict:ident; ($($pattern:tt)*) <= $computation:expr ; $($rest:tt)+) => {
        $crate::typeclass::FlatMap::flat_map($dict, $computation, move |($($pattern)*)| {
            $crate::do_!(@step $dict; $($rest)+)
        })
    };

    (@step $dict:ident; _ <= $computation:expr ; $($rest:tt)+) => {
        $crate::typeclass::FlatMap::flat_map($dict, $computation, move |_| {
            $crate::do_!(@step $dict; $($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (@step $dict:ident; let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::do_!(@step $dict; $($rest)+)
    }};

    (@step $dict:ident; let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::do_!(@step $dict; $($rest)+)
    }};

    // ==========================================================================
    // Terminal: a computation returned as is (must stay last)
    // ==========================================================================

    (@step $dict:ident; $result:expr) => {
        $result
    };
}
