/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Tolerance inside which a result is displayed in integer form.
pub const INTEGER_DISPLAY_TOLERANCE: f64 = 1e-12;

/// Safely converts an `f64` to `i64` if and only if the value is finite,
/// integral, and exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the value is non-finite, fractional, or exceeds
/// `MAX_SAFE_I64_INT` in absolute value.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use shunt::util::num::f64_to_i64_checked;
///
/// // Works for integral values
/// let result = f64_to_i64_checked(42.0, "not an integer!");
/// assert_eq!(result.unwrap(), 42);
///
/// // Fails for fractional values
/// assert!(f64_to_i64_checked(1.5, "not an integer!").is_err());
///
/// // Fails for values outside the safe range
/// assert!(f64_to_i64_checked(1e300, "not an integer!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(error);
    }
    Ok(value as i64)
}

/// Formats an evaluation result for display.
///
/// A value within [`INTEGER_DISPLAY_TOLERANCE`] of its nearest integer is
/// rendered in integer form; anything else is rendered as the raw
/// floating-point value.
///
/// ## Example
/// ```
/// use shunt::util::num::format_result;
///
/// assert_eq!(format_result(9.0), "9");
/// assert_eq!(format_result(-4.0), "-4");
/// assert_eq!(format_result(2.5), "2.5");
///
/// // Accumulated floating-point noise snaps back to the integer.
/// assert_eq!(format_result((0.1 + 0.2) * 10.0), "3");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_DISPLAY_TOLERANCE
       && let Ok(integer) = f64_to_i64_checked(rounded, ())
    {
        return integer.to_string();
    }
    value.to_string()
}
