//! The `pipe!` macro for left-to-right application of data-last functions.
//!
//! Data-last helpers such as [`Dual2::data_last`](crate::dual::Dual2::data_last)
//! and the functions of [`pipeable`](crate::pipeable) return closures
//! awaiting their data. `pipe!` threads a value through a
//! sequence of them in the order they are written.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function only needs to implement [`FnOnce`].
///
/// # Examples
///
/// ```
/// use kindling::pipe;
/// use kindling::typeclass::order;
///
/// let ints = order::from_ord::<i32>();
/// let result = pipe!(
///     42,
///     order::clamp(&ints).data_last(0, 10),
///     |n: i32| n * 2,
/// );
/// assert_eq!(result, 20);
/// ```
///
/// ```
/// use kindling::pipe;
/// use kindling::dual::dual2;
///
/// let append = dual2(|mut this: String, that: &str| {
///     this.push_str(that);
///     this
/// });
/// let greeting = pipe!(String::from("hello"), append.data_last(", "), append.data_last("world"));
/// assert_eq!(greeting, "hello, world");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        ($function)($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!(($function)($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::data::OptionTypeLambda;
    use crate::pipeable;
    use crate::typeclass::order;
    use rstest::rstest;

    #[rstest]
    fn value_only() {
        assert_eq!(pipe!(42), 42);
    }

    #[rstest]
    fn closures_apply_left_to_right() {
        let result = pipe!(3, |x: i32| x * x, |x: i32| x * 2, |x: i32| x + 1);
        assert_eq!(result, 19);
    }

    #[rstest]
    fn data_last_helpers_chain() {
        let ints = order::from_ord::<i32>();
        let result = pipe!(7, order::max(&ints).data_last(9), order::min(&ints).data_last(8));
        assert_eq!(result, 8);
    }

    #[rstest]
    fn type_class_operations_in_a_pipeline() {
        let result = pipe!(
            Some(2),
            pipeable::map(&OptionTypeLambda, |n: i32| n + 1),
            pipeable::flat_map(&OptionTypeLambda, |n: i32| (n > 2).then_some(n * 10)),
            pipeable::coproduct(&OptionTypeLambda, Some(0)),
        );
        assert_eq!(result, Some(30));
    }

    #[rstest]
    fn failures_flow_through_a_pipeline() {
        let result = pipe!(
            Some(1),
            pipeable::flat_map(&OptionTypeLambda, |n: i32| (n > 2).then_some(n)),
            pipeable::map(&OptionTypeLambda, |n: i32| n * 10),
            pipeable::coproduct(&OptionTypeLambda, Some(-1)),
        );
        assert_eq!(result, Some(-1));
    }
}
