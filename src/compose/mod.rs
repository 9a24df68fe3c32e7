//! Static function composition.
//!
//! This module provides the [`compose!`] macro, which composes functions
//! right to left at compile time, and the [`identity`] combinator, which is
//! the unit of composition.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`identity`]: The identity function - returns its argument unchanged
//!
//! Everything here is resolved by the type checker. Composing nothing, or
//! composing something that is not callable, is a compile error rather than
//! a runtime failure. For compositions assembled from runtime data, see
//! `composer::dynamic`.
//!
//! # Examples
//!
//! ## Unary chain
//!
//! ```
//! use composer::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11);
//! ```
//!
//! ## Multi-argument innermost function
//!
//! The parameter list after `;` is handed verbatim to the innermost
//! (rightmost) function, so the composed closure takes exactly as many
//! arguments as that function does.
//!
//! ```
//! use composer::compose;
//!
//! fn add(a: i32, b: i32) -> i32 { a + b }
//! fn square(x: i32) -> i32 { x * x }
//!
//! let add_then_square = compose!(square, add; a, b);
//! assert_eq!(add_then_square(1, 2), 9);
//! ```
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is
//! defined as:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! Composition is right-associative in notation: `compose!(h, g, f)` is
//! `h(g(f(x)))`, so `f` runs first and `h` runs last.
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! # Receivers
//!
//! Rust closures have no implicit `self`. A value that every function in the
//! chain must observe is captured by each closure, or threaded through the
//! chain as part of the intermediate result.

mod compose_macro;
mod utils;

pub use utils::identity;

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::compose;
