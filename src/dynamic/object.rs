//! Shared property bags that can act as receivers.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{CallError, NotCallableError, Value};

/// A shared, interior-mutable map from property names to values.
///
/// Objects compare by identity. An object whose property holds a
/// [`Function`](super::Function) can invoke it as a method with
/// [`Object::call_method`], in which case the function observes the object
/// as its receiver.
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::{Function, Object, Value};
///
/// let counter = Object::new();
/// counter.set("step", 5);
/// counter.set(
///     "next",
///     Function::new(1, |this, arguments| {
///         let step = this
///             .as_object()
///             .and_then(|object| object.get("step"))
///             .and_then(|step| step.as_number())
///             .unwrap_or(1.0);
///         let current = arguments.first().and_then(Value::as_number).unwrap_or(0.0);
///         Ok(Value::from(current + step))
///     }),
/// );
///
/// assert_eq!(counter.call_method("next", &[Value::from(10)])?, Value::from(15));
/// # Ok::<(), composer::dynamic::CallError>(())
/// ```
#[derive(Clone, Default)]
pub struct Object {
    properties: Arc<RwLock<BTreeMap<String, Value>>>,
}

static_assertions::assert_impl_all!(Object: Send, Sync, Clone);

impl Object {
    /// Creates an object with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the named property, if present.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.properties.read().get(name).cloned()
    }

    /// Sets the named property, returning its previous value.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.write().insert(name.into(), value.into())
    }

    /// Returns the property names in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.properties.read().keys().cloned().collect()
    }

    /// Invokes the named property with this object as receiver.
    ///
    /// The property is read before the call, so the method is free to
    /// read and write properties of the object.
    ///
    /// # Errors
    ///
    /// Returns a [`NotCallableError`] (wrapped in a [`CallError`]) if the
    /// property is missing or is not a function, and otherwise whatever error
    /// the method raises.
    pub fn call_method(&self, name: &str, arguments: &[Value]) -> Result<Value, CallError> {
        match self.get(name).unwrap_or_default() {
            Value::Function(method) => method.call(&Value::Object(self.clone()), arguments),
            other => Err(CallError::new(NotCallableError {
                name: name.to_string(),
                kind: other.kind(),
            })),
        }
    }

    /// Returns `true` if both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.properties, &other.properties)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Object")
            .field("keys", &self.keys())
            .finish()
    }
}
