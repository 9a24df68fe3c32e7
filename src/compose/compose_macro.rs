//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation for function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// The rightmost function is applied first and receives the original
/// arguments; every other function receives the previous result as its only
/// argument. Each function runs exactly once per call of the composed
/// closure.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged (no wrapping)
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of unary functions
/// - `compose!(f, g, h; a, b)` - Returns `|a, b| f(g(h(a, b)))`
/// - `compose!(f, g;)` - Returns `|| f(g())`
///
/// The identifiers after `;` become the parameter list of the composed
/// closure, so its arity is the arity of the innermost function.
///
/// # Type Requirements
///
/// All functions must implement the [`Fn`] trait. The output type of each
/// function must match the input type of the next function in the chain
/// (reading right to left).
///
/// # Errors
///
/// Both failure modes are compile errors:
///
/// - `compose!()` reports "expected at least one function but received zero".
/// - A non-callable argument is rejected by the type checker.
///
/// ```compile_fail
/// let _ = composer::compose!();
/// ```
///
/// ```compile_fail
/// let double = |x: i32| x * 2;
/// let _ = composer::compose!(double, 1, double)(5);
/// ```
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use composer::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g)(x) = f(g(x)) = add_one(double(5)) = add_one(10) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// ## Three-function composition
///
/// ```
/// use composer::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// ## Innermost function with several parameters
///
/// ```
/// use composer::compose;
///
/// let add = |a: i32, b: i32| a + b;
/// let square = |x: i32| x * x;
///
/// let add_then_square = compose!(square, add; a, b);
/// assert_eq!(add_then_square(1, 2), 9);
/// ```
///
/// ## Type conversion
///
/// ```
/// use composer::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composed = compose!(get_length, to_string);
/// assert_eq!(composed(12345), 5);
/// ```
///
/// ## Single function passthrough
///
/// ```
/// use composer::compose;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let pointer: fn(i32) -> i32 = double;
/// let composed = compose!(pointer);
/// assert!(std::ptr::fn_addr_eq(pointer, composed));
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        ::core::compile_error!("expected at least one function but received zero")
    };

    // Single function with an explicit parameter list: still returned as-is
    ($function:expr ; $($parameter:ident),* $(,)?) => {
        $function
    };

    // compose!(f, g, ...; a, b)(a, b) = f(compose!(g, ...; a, b)(a, b))
    ($outer_function:expr, $($remaining_functions:expr),+ ; $($parameter:ident),* $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+ ; $($parameter),*);
        move |$($parameter),*| outer(inner_composed($($parameter),*))
    }};

    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
