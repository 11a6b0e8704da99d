use crate::error::RuntimeError;

/// Decimal exponent from which floats switch to scientific notation.
const SCIENTIFIC_UPPER: i32 = 16;
/// Decimal exponent below which floats switch to scientific notation.
const SCIENTIFIC_LOWER: i32 = -4;

/// Converts an `i64` to the nearest `f64`, the way mixed int/float arithmetic
/// promotes its integer operand.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` toward zero into an `i64`.
///
/// ## Errors
/// - `RuntimeError::InvalidArgument` for NaN and infinities.
/// - `RuntimeError::Overflow` when the truncated value does not fit `i64`.
///
/// ## Example
/// ```
/// use adder::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(-3.9, 1), Ok(-3));
///
/// let err = f64_to_i64_truncated(1e20, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 5 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, line: u32) -> Result<i64, RuntimeError> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details: format!("cannot convert float \
                                                                     {} to integer",
                                                                    float_repr(value)),
                                                   line });
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(truncated as i64)
}

/// Formats a float the way `repr()` prints it: the shortest round-trip
/// digits, always with a decimal point or exponent, switching to scientific
/// notation for very large or very small magnitudes.
///
/// ## Example
/// ```
/// use adder::util::num::float_repr;
///
/// assert_eq!(float_repr(1.0), "1.0");
/// assert_eq!(float_repr(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(float_repr(1e16), "1e+16");
/// assert_eq!(float_repr(-1.5e-5), "-1.5e-05");
/// assert_eq!(float_repr(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn float_repr(value: f64) -> String {
    let digits = float_digits(value);
    if digits.contains(['.', 'e', 'n']) {
        digits
    } else {
        format!("{digits}.0")
    }
}

/// Formats one component of a complex number: like [`float_repr`] but
/// without forcing a trailing `.0` on integral values.
///
/// ## Example
/// ```
/// use adder::util::num::complex_component_repr;
///
/// assert_eq!(complex_component_repr(2.0), "2");
/// assert_eq!(complex_component_repr(0.5), "0.5");
/// ```
#[must_use]
pub fn complex_component_repr(value: f64) -> String {
    float_digits(value)
}

fn float_digits(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude == 0.0 {
        return format!("{sign}0");
    }

    let scientific = format!("{magnitude:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{magnitude}");
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&exponent) {
        format!("{sign}{magnitude}")
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.unsigned_abs())
    }
}
