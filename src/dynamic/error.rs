//! Error types for dynamic composition.
//!
//! Composition can fail in exactly two ways, both detected before a composed
//! function exists: nothing was supplied ([`ArityError`]), or something that
//! is not a function was supplied ([`TypeMismatchError`]). Errors raised by
//! the composed functions themselves travel as [`CallError`] and are never
//! translated by the composer.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use super::ValueKind;

/// Represents an attempt to compose zero functions.
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::ArityError;
///
/// assert_eq!(
///     ArityError.to_string(),
///     "Expected at least one argument but received zero"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError;

impl fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Expected at least one argument but received zero")
    }
}

impl Error for ArityError {}

/// Represents a non-function value supplied to the composer.
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::{TypeMismatchError, ValueKind};
///
/// let error = TypeMismatchError { index: 2, kind: ValueKind::String };
/// assert_eq!(
///     error.to_string(),
///     "Expected a function but received a string at argument index 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatchError {
    /// The 0-based position of the offending argument.
    pub index: usize,
    /// The kind of value found at that position.
    pub kind: ValueKind,
}

impl fmt::Display for TypeMismatchError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Expected a function but received a {} at argument index {}",
            self.kind, self.index
        )
    }
}

impl Error for TypeMismatchError {}

/// Represents errors that can occur while building a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeError {
    /// No functions were supplied.
    Arity(ArityError),
    /// A supplied argument was not a function.
    TypeMismatch(TypeMismatchError),
}

impl fmt::Display for ComposeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity(error) => write!(formatter, "{error}"),
            Self::TypeMismatch(error) => write!(formatter, "{error}"),
        }
    }
}

impl Error for ComposeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arity(error) => Some(error),
            Self::TypeMismatch(error) => Some(error),
        }
    }
}

impl From<ArityError> for ComposeError {
    fn from(error: ArityError) -> Self {
        Self::Arity(error)
    }
}

impl From<TypeMismatchError> for ComposeError {
    fn from(error: TypeMismatchError) -> Self {
        Self::TypeMismatch(error)
    }
}

/// An error raised by a [`Function`](super::Function) while it runs.
///
/// The wrapped error is shared, so cloning a `CallError` keeps the identity
/// of the original error, and [`CallError::downcast_ref`] recovers it.
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::CallError;
///
/// #[derive(Debug)]
/// struct Overflow;
///
/// impl std::fmt::Display for Overflow {
///     fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(formatter, "overflow")
///     }
/// }
///
/// impl std::error::Error for Overflow {}
///
/// let error = CallError::new(Overflow);
/// assert_eq!(error.to_string(), "overflow");
/// assert!(error.downcast_ref::<Overflow>().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct CallError {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl CallError {
    /// Wraps an error raised by a function body.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Returns the wrapped error.
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Returns the wrapped error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` if both errors wrap the same original error.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl Error for CallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

/// Represents a method call on a property that does not hold a function.
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::{NotCallableError, ValueKind};
///
/// let error = NotCallableError { name: "total".to_string(), kind: ValueKind::Number };
/// assert_eq!(error.to_string(), "Property 'total' is a number, not a function");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotCallableError {
    /// The property that was looked up.
    pub name: String,
    /// The kind of value stored under that property.
    pub kind: ValueKind,
}

impl fmt::Display for NotCallableError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Property '{}' is a {}, not a function",
            self.name, self.kind
        )
    }
}

impl Error for NotCallableError {}
