//! The dynamic value model.

use std::fmt;
use std::sync::Arc;

use super::{Function, Object};

/// A loosely typed value that can be passed to and returned from a
/// [`Function`].
///
/// Functions and objects compare by identity. Numbers compare by value, so
/// `NaN` is not equal to itself.
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::{Value, ValueKind};
///
/// assert_eq!(Value::from(3).kind(), ValueKind::Number);
/// assert_eq!(Value::from("abc").kind(), ValueKind::String);
/// assert_eq!(Value::default(), Value::Undefined);
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absence of a value, e.g. a missing argument.
    #[default]
    Undefined,
    /// An explicitly empty value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double-precision number.
    Number(f64),
    /// An immutable string.
    String(Arc<str>),
    /// A callable value.
    Function(Function),
    /// A shared property bag.
    Object(Object),
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

impl Value {
    /// Returns the kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Function(_) => ValueKind::Function,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if this value can be called.
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns the number held by this value, if any.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean held by this value, if any.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Returns the string held by this value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string.as_ref()),
            _ => None,
        }
    }

    /// Returns the function held by this value, if any.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the object held by this value, if any.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (Self::Object(left), Self::Object(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(Arc::from(string))
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(Arc::from(string))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<&Function> for Value {
    fn from(function: &Function) -> Self {
        Self::Function(function.clone())
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<&Object> for Value {
    fn from(object: &Object) -> Self {
        Self::Object(object.clone())
    }
}

/// The kind of a [`Value`], as reported in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Undefined`]
    Undefined,
    /// [`Value::Null`]
    Null,
    /// [`Value::Boolean`]
    Boolean,
    /// [`Value::Number`]
    Number,
    /// [`Value::String`]
    String,
    /// [`Value::Function`]
    Function,
    /// [`Value::Object`]
    Object,
}

impl ValueKind {
    /// Returns the lowercase name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Function => "function",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
