//! Syntax helpers for working with the dictionaries.
//!
//! # Overview
//!
//! - [`pipe!`]: apply data-last functions left to right
//! - [`do_!`]: do-notation over an explicit monad dictionary
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//! - [`absurd`]: eliminates an [`Infallible`](std::convert::Infallible)
//!
//! # Examples
//!
//! ```
//! use kindling::data::OptionTypeLambda;
//! use kindling::typeclass::order;
//! use kindling::{do_, pipe};
//!
//! let ints = order::from_ord::<i32>();
//! let clamped = pipe!(150, order::clamp(&ints).data_last(0, 100));
//!
//! let total = do_! { OptionTypeLambda =>
//!     a <= Some(clamped);
//!     b <= Some(1);
//!     yield a + b
//! };
//! assert_eq!(total, Some(101));
//! ```

pub mod do_macro;
mod pipe_macro;
mod utils;

pub use utils::{absurd, constant, flip, identity};

pub use crate::do_;
pub use crate::pipe;
