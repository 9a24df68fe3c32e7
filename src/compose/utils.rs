//! The identity combinator.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use composer::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
///
/// # Use with function composition
///
/// ```
/// use composer::compose;
/// use composer::compose::identity;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(identity, double, identity);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
