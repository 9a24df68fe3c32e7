//! Runtime-validated right-to-left composition.

use smallvec::SmallVec;

use super::{ArityError, ComposeError, Function, TypeMismatchError, Value};

/// Compositions up to this length keep their functions inline.
const INLINE_CHAIN: usize = 4;

type Chain = SmallVec<[Function; INLINE_CHAIN]>;

/// Composes the functions in `values` from right to left.
///
/// The last value is the innermost function: it receives the receiver and
/// arguments of each call verbatim. Every other function then receives the
/// receiver and the previous result as its only argument, from the
/// second-to-last value back to the first. The composed function reports the
/// innermost function's arity.
///
/// A single function is returned unchanged.
///
/// # Errors
///
/// - [`ComposeError::Arity`] if `values` is empty.
/// - [`ComposeError::TypeMismatch`] for the first non-function, scanning
///   left to right.
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::{Function, Value, compose};
///
/// let add = Function::new(2, |_this, arguments| {
///     let sum = arguments.iter().filter_map(Value::as_number).sum::<f64>();
///     Ok(Value::from(sum))
/// });
/// let square = Function::new(1, |_this, arguments| {
///     let x = arguments.first().and_then(Value::as_number).unwrap_or(f64::NAN);
///     Ok(Value::from(x * x))
/// });
///
/// let add_then_square = compose(&[Value::from(square), Value::from(add)])?;
///
/// assert_eq!(add_then_square.arity(), 2);
/// assert_eq!(add_then_square.apply(&[Value::from(1), Value::from(2)])?, Value::from(9));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compose(values: &[Value]) -> Result<Function, ComposeError> {
    let functions = values
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Function(function) => Ok(function.clone()),
            other => Err(ComposeError::from(TypeMismatchError {
                index,
                kind: other.kind(),
            })),
        })
        .collect::<Result<Chain, _>>()
        .and_then(|functions| compose_functions(functions).map_err(ComposeError::from));

    if let Err(error) = &functions {
        tracing::debug!(%error, arguments = values.len(), "rejected composition");
    }
    functions
}

/// Composes already-typed functions from right to left.
///
/// Behaves like [`compose`], except that only the empty case can fail.
///
/// # Errors
///
/// Returns [`ArityError`] if `functions` is empty.
///
/// # Examples
///
/// ```rust
/// use composer::dynamic::{Function, compose_functions};
///
/// let identity = Function::identity();
/// let composed = compose_functions([identity.clone()])?;
/// assert!(composed.ptr_eq(&identity));
/// # Ok::<(), composer::dynamic::ArityError>(())
/// ```
pub fn compose_functions<I>(functions: I) -> Result<Function, ArityError>
where
    I: IntoIterator<Item = Function>,
{
    let mut outer_chain: Chain = functions.into_iter().collect();
    let innermost = outer_chain.pop().ok_or(ArityError)?;

    if outer_chain.is_empty() {
        return Ok(innermost);
    }

    outer_chain.reverse();
    let arity = innermost.arity();
    tracing::trace!(functions = outer_chain.len() + 1, arity, "composed functions");

    Ok(Function::new(arity, move |this, arguments| {
        let mut result = innermost.call(this, arguments)?;
        for function in &outer_chain {
            result = function.call(this, std::slice::from_ref(&result))?;
        }
        Ok(result)
    }))
}

/// Composes the given values from right to left.
///
/// Each argument is converted with [`Value::from`](crate::dynamic::Value),
/// then handed to [`compose`](crate::dynamic::compose).
///
/// # Examples
///
/// ```rust
/// use composer::compose_values;
/// use composer::dynamic::{ComposeError, Function, TypeMismatchError, ValueKind};
///
/// let identity = Function::identity();
///
/// assert!(compose_values!(&identity, &identity).is_ok());
/// assert_eq!(
///     compose_values!(&identity, 1, &identity).unwrap_err(),
///     ComposeError::TypeMismatch(TypeMismatchError { index: 1, kind: ValueKind::Number })
/// );
/// ```
#[macro_export]
macro_rules! compose_values {
    () => {
        $crate::dynamic::compose(&[])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::dynamic::compose(&[$($crate::dynamic::Value::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn increment() -> Function {
        Function::new(1, |_this, arguments| {
            let value = arguments.first().and_then(Value::as_number).unwrap_or(0.0);
            Ok(Value::from(value + 1.0))
        })
    }

    #[test]
    fn empty_input_is_an_arity_error() {
        assert_eq!(compose(&[]).unwrap_err(), ComposeError::Arity(ArityError));
        assert_eq!(compose_functions(Vec::new()).unwrap_err(), ArityError);
    }

    #[test]
    fn single_function_is_returned_unchanged() {
        let function = increment();
        let composed = compose(&[Value::from(&function)]).unwrap();
        assert!(composed.ptr_eq(&function));
    }

    #[test]
    fn long_chains_spill_past_inline_capacity() {
        let values: Vec<Value> = (0..INLINE_CHAIN * 3).map(|_| Value::from(increment())).collect();
        let composed = compose(&values).unwrap();
        assert_eq!(
            composed.apply(&[Value::from(0)]).ok(),
            Some(Value::from(f64::from(u32::try_from(values.len()).unwrap())))
        );
    }
}
