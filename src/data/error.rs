//! Error raised at the unsafe unwrapping boundary.
//!
//! Every combinator in this crate keeps failure as data. The only place a
//! missing success value becomes an error is an explicit extraction such as
//! `option::try_get` (which returns [`UnwrapError`]) or
//! `option::get_or_throw` (which panics with its message).

/// A success value was requested from a value holding none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapError {
    /// The container that was unwrapped, e.g. `"Option"`.
    pub container: &'static str,
    /// The variant that was found instead of a success, e.g. `"None"`.
    pub variant: &'static str,
}

impl UnwrapError {
    /// Creates the error for `container` holding `variant`.
    #[must_use]
    pub const fn new(container: &'static str, variant: &'static str) -> Self {
        Self { container, variant }
    }
}

impl std::fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::get_or_throw: found {}, which holds no success value",
            self.container, self.variant
        )
    }
}

impl std::error::Error for UnwrapError {}
