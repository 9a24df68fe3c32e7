//! # composer
//!
//! Right-to-left function composition for Rust.
//!
//! ## Overview
//!
//! `compose(f, g, h)` builds a function that calls `h` with the original
//! arguments, then threads each result through `g` and finally `f`. The crate
//! offers the same combinator twice:
//!
//! - **Static composition**: the [`compose!`] macro, checked entirely at
//!   compile time. Closures are fused into a single zero-cost closure.
//! - **Dynamic composition**: [`dynamic::compose`] over loosely typed
//!   [`dynamic::Value`]s, with runtime validation, explicit receivers and
//!   introspectable arity.
//!
//! ## Feature Flags
//!
//! - `compose`: the [`compose!`] macro and the [`compose::identity`] combinator
//! - `dynamic`: the runtime-validated value model and composer
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use composer::compose;
//!
//! let add = |a: i32, b: i32| a + b;
//! let square = |x: i32| x * x;
//!
//! let add_then_square = compose!(square, add; a, b);
//! assert_eq!(add_then_square(1, 2), 9);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use composer::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::{
        ArityError, CallError, ComposeError, Function, Object, TypeMismatchError, Value,
        ValueKind, compose_functions, with_arity,
    };
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "dynamic")]
pub mod dynamic;
