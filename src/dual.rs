//! Data-first and data-last calling conventions from a single body.
//!
//! Every binary operation can be called in two ways:
//!
//! - data-first: `op.data_first(this, that)`
//! - data-last: `op.data_last(that)` returns a closure awaiting `this`,
//!   which is what [`pipe!`](crate::pipe) chains expect.
//!
//! [`Dual2`] and [`Dual3`] wrap one body closure and expose both
//! conventions, so the two can never disagree.
//!
//! # Examples
//!
//! ```rust
//! use kindling::dual::dual2;
//!
//! let subtract = dual2(|this: i32, that: i32| this - that);
//! assert_eq!(subtract.data_first(10, 3), 7);
//! assert_eq!((subtract.data_last(3))(10), 7);
//! ```

/// A binary operation exposing both calling conventions.
#[derive(Debug, Clone, Copy)]
pub struct Dual2<Body> {
    body: Body,
}

/// Wraps `body`, whose first parameter is the data.
#[inline]
pub const fn dual2<Body>(body: Body) -> Dual2<Body> {
    Dual2 { body }
}

impl<Body> Dual2<Body> {
    /// Calls the body with the data first.
    #[inline]
    pub fn data_first<S, X, R>(&self, this: S, that: X) -> R
    where
        Body: Fn(S, X) -> R,
    {
        (self.body)(this, that)
    }

    /// Captures `that` and returns a closure awaiting the data.
    #[inline]
    pub fn data_last<S, X, R>(&self, that: X) -> impl FnOnce(S) -> R + use<Body, S, X, R>
    where
        Body: Fn(S, X) -> R + Clone,
    {
        let body = self.body.clone();
        move |this: S| body(this, that)
    }
}

/// A ternary operation exposing both calling conventions.
#[derive(Debug, Clone, Copy)]
pub struct Dual3<Body> {
    body: Body,
}

/// Wraps `body`, whose first parameter is the data.
#[inline]
pub const fn dual3<Body>(body: Body) -> Dual3<Body> {
    Dual3 { body }
}

impl<Body> Dual3<Body> {
    /// Calls the body with the data first.
    #[inline]
    pub fn data_first<S, X, Y, R>(&self, this: S, first: X, second: Y) -> R
    where
        Body: Fn(S, X, Y) -> R,
    {
        (self.body)(this, first, second)
    }

    /// Captures the trailing arguments and returns a closure awaiting the
    /// data.
    #[inline]
    pub fn data_last<S, X, Y, R>(&self, first: X, second: Y) -> impl FnOnce(S) -> R + use<Body, S, X, Y, R>
    where
        Body: Fn(S, X, Y) -> R + Clone,
    {
        let body = self.body.clone();
        move |this: S| body(this, first, second)
    }
}
