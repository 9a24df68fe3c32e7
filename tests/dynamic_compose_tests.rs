//! Tests for runtime-validated composition.
//!
//! Covers validation order, identity passthrough, call order, declared
//! arity, receiver propagation and error propagation.

#![cfg(feature = "dynamic")]

use composer::compose_values;
use composer::dynamic::{
    ArityError, CallError, ComposeError, Function, Object, TypeMismatchError, Value, ValueKind,
    compose, compose_functions, with_arity,
};
use rstest::{fixture, rstest};
use std::fmt;
use std::sync::{Arc, Mutex};

// =============================================================================
// Helpers
// =============================================================================

fn number(arguments: &[Value], index: usize) -> f64 {
    arguments
        .get(index)
        .and_then(Value::as_number)
        .unwrap_or(f64::NAN)
}

fn add() -> Function {
    Function::new(2, |_this, arguments| {
        Ok(Value::from(number(arguments, 0) + number(arguments, 1)))
    })
}

fn square() -> Function {
    Function::new(1, |_this, arguments| {
        let x = number(arguments, 0);
        Ok(Value::from(x * x))
    })
}

fn increment() -> Function {
    Function::new(1, |_this, arguments| Ok(Value::from(number(arguments, 0) + 1.0)))
}

type CallLog = Arc<Mutex<Vec<(&'static str, Vec<Value>)>>>;

/// Wraps `function`, recording its name and arguments on every call.
fn spy(log: &CallLog, name: &'static str, function: Function) -> Function {
    let log = Arc::clone(log);
    Function::new(function.arity(), move |this, arguments| {
        log.lock()
            .map_err(|_| CallError::new(Poisoned))?
            .push((name, arguments.to_vec()));
        function.call(this, arguments)
    })
}

#[derive(Debug)]
struct Poisoned;

impl fmt::Display for Poisoned {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "call log poisoned")
    }
}

impl std::error::Error for Poisoned {}

#[derive(Debug, PartialEq, Eq)]
struct Boom(&'static str);

impl fmt::Display for Boom {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "boom: {}", self.0)
    }
}

impl std::error::Error for Boom {}

#[fixture]
fn log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

// =============================================================================
// Validation
// =============================================================================

mod validation {
    use super::*;

    #[rstest]
    fn zero_functions_is_an_arity_error() {
        let error = compose(&[]).unwrap_err();
        assert_eq!(error, ComposeError::Arity(ArityError));
        assert_eq!(
            error.to_string(),
            "Expected at least one argument but received zero"
        );
    }

    #[rstest]
    fn zero_functions_through_the_macro_is_an_arity_error() {
        assert_eq!(
            compose_values!().unwrap_err(),
            ComposeError::Arity(ArityError)
        );
    }

    #[rstest]
    fn zero_typed_functions_is_an_arity_error() {
        assert_eq!(compose_functions(Vec::new()).unwrap_err(), ArityError);
    }

    #[rstest]
    #[case::lone_string(vec![Value::from("abc")], 0, ValueKind::String)]
    #[case::leading_boolean(
        vec![Value::from(true), Value::from(Function::identity()), Value::from(Function::identity())],
        0,
        ValueKind::Boolean
    )]
    #[case::middle_number(
        vec![Value::from(Function::identity()), Value::from(1), Value::from(Function::identity())],
        1,
        ValueKind::Number
    )]
    #[case::trailing_string(
        vec![Value::from(Function::identity()), Value::from(Function::identity()), Value::from("fdsa")],
        2,
        ValueKind::String
    )]
    #[case::null(vec![Value::Null, Value::from(Function::identity())], 0, ValueKind::Null)]
    #[case::undefined(vec![Value::from(Function::identity()), Value::Undefined], 1, ValueKind::Undefined)]
    #[case::object(vec![Value::from(Object::new())], 0, ValueKind::Object)]
    fn non_function_is_a_type_mismatch(
        #[case] values: Vec<Value>,
        #[case] index: usize,
        #[case] kind: ValueKind,
    ) {
        assert_eq!(
            compose(&values).unwrap_err(),
            ComposeError::TypeMismatch(TypeMismatchError { index, kind })
        );
    }

    #[rstest]
    fn first_non_function_from_the_left_is_reported() {
        let error = compose_values!(Function::identity(), 7, "text", false).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Expected a function but received a number at argument index 1"
        );
    }

    #[rstest]
    fn validation_fails_before_any_function_runs(log: CallLog) {
        let counted = spy(&log, "counted", increment());
        let result = compose_values!(&counted, "not a function", &counted);

        assert!(result.is_err());
        assert!(log.lock().unwrap().is_empty());
    }
}

// =============================================================================
// Composition semantics
// =============================================================================

mod semantics {
    use super::*;

    #[rstest]
    fn single_function_is_returned_unchanged() {
        let function = add();
        let composed = compose_values!(&function).unwrap();

        assert!(composed.ptr_eq(&function));
        assert_eq!(composed.arity(), 2);
    }

    #[rstest]
    fn add_then_square() {
        let add_then_square = compose_values!(square(), add()).unwrap();

        assert_eq!(
            add_then_square.apply(&[Value::from(1), Value::from(2)]).unwrap(),
            Value::from(9)
        );
    }

    #[rstest]
    fn functions_run_right_to_left_once_each(log: CallLog) {
        let first = spy(&log, "first", increment());
        let second = spy(&log, "second", increment());
        let third = spy(&log, "third", increment());

        let composed = compose_values!(third, second, first).unwrap();
        let result = composed.apply(&[Value::from(0)]).unwrap();

        assert_eq!(result, Value::from(3));
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                ("first", vec![Value::from(0)]),
                ("second", vec![Value::from(1)]),
                ("third", vec![Value::from(2)]),
            ]
        );
    }

    #[rstest]
    fn repeated_calls_are_independent(log: CallLog) {
        let composed = compose_values!(
            spy(&log, "outer", increment()),
            spy(&log, "inner", increment())
        )
        .unwrap();

        for start in 0..5 {
            assert_eq!(
                composed.apply(&[Value::from(start)]).unwrap(),
                Value::from(start + 2)
            );
        }
        assert_eq!(log.lock().unwrap().len(), 10);
    }

    #[rstest]
    fn innermost_receives_all_arguments_verbatim(log: CallLog) {
        let innermost = spy(&log, "innermost", Function::new(0, |_this, arguments| {
            Ok(Value::from(f64::from(u32::try_from(arguments.len()).unwrap_or(u32::MAX))))
        }));
        let outer = spy(&log, "outer", Function::identity());

        let composed = compose_values!(outer, innermost).unwrap();
        let arguments = [Value::from("a"), Value::Null, Value::from(true), Value::from(4)];
        let result = composed.apply(&arguments).unwrap();

        assert_eq!(result, Value::from(4));
        let log = log.lock().unwrap();
        assert_eq!(log[0], ("innermost", arguments.to_vec()));
        assert_eq!(log[1], ("outer", vec![Value::from(4)]));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn composed_arity_is_innermost_arity(#[case] arity: usize) {
        let innermost = with_arity(arity, Function::identity());
        let composed = compose_values!(square(), increment(), innermost).unwrap();

        assert_eq!(composed.arity(), arity);
    }

    #[rstest]
    fn composed_arity_ignores_outer_arity() {
        let composed = compose_values!(add(), square()).unwrap();
        assert_eq!(composed.arity(), 1);
    }
}

// =============================================================================
// Receivers
// =============================================================================

mod receivers {
    use super::*;

    fn receiver_spy(seen: &Arc<Mutex<Vec<Value>>>) -> Function {
        let seen = Arc::clone(seen);
        Function::new(1, move |this, arguments| {
            if let Ok(mut seen) = seen.lock() {
                seen.push(this.clone());
            }
            Ok(arguments.first().cloned().unwrap_or_default())
        })
    }

    #[rstest]
    fn every_function_observes_the_method_receiver() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let composed = compose_values!(
            receiver_spy(&seen),
            receiver_spy(&seen),
            receiver_spy(&seen)
        )
        .unwrap();

        let object = Object::new();
        object.set("composed", composed);
        object.call_method("composed", &[Value::from(1)]).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|this| *this == Value::from(&object)));
    }

    #[rstest]
    fn explicit_receiver_is_forwarded() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let composed = compose_values!(receiver_spy(&seen), receiver_spy(&seen)).unwrap();

        composed.call(&Value::from("context"), &[]).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Value::from("context"), Value::from("context")]
        );
    }

    #[rstest]
    fn with_arity_forwards_receiver_and_arguments() {
        let echo = Function::new(0, |this, arguments| {
            Ok(Value::from(format!("{this:?}/{}", arguments.len())))
        });
        let wrapped = with_arity(4, echo);

        assert_eq!(wrapped.arity(), 4);
        assert_eq!(
            wrapped.call(&Value::Null, &[Value::Null, Value::Null]).unwrap(),
            Value::from("Null/2")
        );
    }
}

// =============================================================================
// Error propagation
// =============================================================================

mod errors {
    use super::*;

    #[rstest]
    fn constituent_errors_propagate_unchanged(log: CallLog) {
        let raised = CallError::new(Boom("middle"));
        let failing = {
            let raised = raised.clone();
            Function::new(1, move |_this, _arguments| Err(raised.clone()))
        };

        let composed = compose_values!(
            spy(&log, "outer", increment()),
            failing,
            spy(&log, "inner", increment())
        )
        .unwrap();
        let error = composed.apply(&[Value::from(0)]).unwrap_err();

        assert!(error.ptr_eq(&raised));
        assert_eq!(error.downcast_ref::<Boom>(), Some(&Boom("middle")));
        let names: Vec<_> = log.lock().unwrap().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["inner"]);
    }

    #[rstest]
    fn compose_error_source_is_the_specific_kind() {
        use std::error::Error;

        let error = compose_values!(1).unwrap_err();
        assert!(
            error
                .source()
                .and_then(|source| source.downcast_ref::<TypeMismatchError>())
                .is_some()
        );
    }
}

// =============================================================================
// Threads
// =============================================================================

mod threads {
    use super::*;

    #[rstest]
    fn composed_function_can_be_shared_across_threads() {
        let composed = compose_values!(square(), add()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|offset| {
                let composed = composed.clone();
                std::thread::spawn(move || {
                    composed
                        .apply(&[Value::from(offset), Value::from(1)])
                        .map_err(|error| error.to_string())
                })
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        assert_eq!(
            results,
            vec![Value::from(1), Value::from(4), Value::from(9), Value::from(16)]
        );
    }
}
