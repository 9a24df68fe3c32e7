//! Callable values with an explicit receiver and a declared arity.

use std::fmt;
use std::sync::Arc;

use super::{CallError, Value};

type Body = dyn Fn(&Value, &[Value]) -> Result<Value, CallError> + Send + Sync;

struct FunctionInner {
    arity: usize,
    body: Box<Body>,
}

/// A shared, callable value.
///
/// A `Function` is invoked with a receiver (`this`) and a slice of
/// arguments. It also carries a declared parameter count, [`Function::arity`],
/// which is metadata only: callers may pass more or fewer arguments, and the
/// body decides what to do about it.
///
/// Cloning a `Function` is cheap and keeps its identity, as observed by
/// [`Function::ptr_eq`].
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::{Function, Value};
///
/// let add = Function::new(2, |_this, arguments| {
///     let sum = arguments.iter().filter_map(Value::as_number).sum::<f64>();
///     Ok(Value::from(sum))
/// });
///
/// assert_eq!(add.arity(), 2);
/// assert_eq!(add.apply(&[Value::from(1), Value::from(2)])?, Value::from(3));
/// # Ok::<(), composer::dynamic::CallError>(())
/// ```
#[derive(Clone)]
pub struct Function {
    inner: Arc<FunctionInner>,
}

static_assertions::assert_impl_all!(Function: Send, Sync, Clone);

impl Function {
    /// Creates a function with the given declared arity.
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(FunctionInner {
                arity,
                body: Box::new(body),
            }),
        }
    }

    /// Creates a function of arity 1 that returns its first argument.
    ///
    /// Every call creates a distinct function.
    pub fn identity() -> Self {
        Self::new(1, |_this, arguments| {
            Ok(arguments.first().cloned().unwrap_or_default())
        })
    }

    /// Returns the declared parameter count.
    pub fn arity(&self) -> usize {
        self.inner.arity
    }

    /// Invokes the function with `this` as receiver.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body raises.
    pub fn call(&self, this: &Value, arguments: &[Value]) -> Result<Value, CallError> {
        (self.inner.body)(this, arguments)
    }

    /// Invokes the function with [`Value::Undefined`] as receiver.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body raises.
    pub fn apply(&self, arguments: &[Value]) -> Result<Value, CallError> {
        self.call(&Value::Undefined, arguments)
    }

    /// Returns `true` if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("arity", &self.inner.arity)
            .finish_non_exhaustive()
    }
}

/// Wraps `function` so that it reports `arity` as its declared parameter count.
///
/// The wrapper forwards the receiver and every argument to `function`
/// unchanged and returns its result unchanged.
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::{Function, Value, with_arity};
///
/// let identity = Function::identity();
/// let wide = with_arity(3, identity.clone());
///
/// assert_eq!(wide.arity(), 3);
/// assert!(!wide.ptr_eq(&identity));
/// assert_eq!(wide.apply(&[Value::from("x")])?, Value::from("x"));
/// # Ok::<(), composer::dynamic::CallError>(())
/// ```
pub fn with_arity(arity: usize, function: Function) -> Function {
    Function::new(arity, move |this, arguments| function.call(this, arguments))
}
