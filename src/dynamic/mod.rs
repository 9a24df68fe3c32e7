//! Dynamic function composition.
//!
//! This module composes functions that are only known at runtime. Values are
//! loosely typed ([`Value`]), functions take an explicit receiver and an
//! argument slice ([`Function`]), and the composer validates its input before
//! building anything.
//!
//! # Overview
//!
//! - [`compose`]: Validate a slice of values and compose them right to left
//! - [`compose_functions`]: Compose already-typed functions
//! - [`compose_values!`](crate::compose_values): Variadic form of [`compose`]
//! - [`with_arity`]: Re-declare the parameter count of a function
//!
//! # Semantics
//!
//! For `compose(&[f1, f2, ..., fn])` and a call with receiver `this`:
//!
//! ```text
//! result = fn(this, args)
//! result = f(n-1)(this, [result])
//! ...
//! result = f1(this, [result])
//! ```
//!
//! Each function runs exactly once per call, every function observes the same
//! receiver, and the composed function declares the arity of `fn`. Errors
//! raised by any function stop the chain and reach the caller unchanged.
//!
//! # Examples
//!
//! ```rust
//! use composer::dynamic::{Function, Object, Value, compose};
//!
//! // Reads `scale` from the receiver and multiplies its argument by it.
//! let scale = Function::new(1, |this, arguments| {
//!     let factor = this
//!         .as_object()
//!         .and_then(|object| object.get("scale"))
//!         .and_then(|value| value.as_number())
//!         .unwrap_or(1.0);
//!     let value = arguments.first().and_then(Value::as_number).unwrap_or(0.0);
//!     Ok(Value::from(value * factor))
//! });
//!
//! let scale_twice = compose(&[Value::from(&scale), Value::from(&scale)])?;
//!
//! let object = Object::new();
//! object.set("scale", 3);
//! object.set("scale_twice", scale_twice);
//!
//! assert_eq!(object.call_method("scale_twice", &[Value::from(2)])?, Value::from(18));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod composition;
mod error;
mod function;
mod object;
mod value;

pub use composition::{compose, compose_functions};
pub use error::{ArityError, CallError, ComposeError, NotCallableError, TypeMismatchError};
pub use function::{Function, with_arity};
pub use object::Object;
pub use value::{Value, ValueKind};

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::compose_values;
