use std::{fmt::Display, ops};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{complex_component_repr, i64_to_f64},
};

/// `0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);

/// Integer exponents up to this magnitude are computed by repeated squaring;
/// larger ones go through the polar form.
const MAX_SQUARING_EXPONENT: i64 = 100;

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    /// Formats like `repr()`: `2j` for a purely imaginary number with a
    /// positive zero real part, `(1+2j)` otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.real == 0.0 && self.real.is_sign_positive() {
            return write!(f, "{}j", complex_component_repr(self.imaginary));
        }
        let sign = if self.imaginary.is_sign_negative() && !self.imaginary.is_nan() {
            '-'
        } else {
            '+'
        };
        write!(f,
               "({}{sign}{}j)",
               complex_component_repr(self.real),
               complex_component_repr(self.imaginary.abs()))
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// assert_eq!(c.to_string(), "(5-1j)");
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    fn is_finite(self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// Divides by `rhs`, failing on a zero divisor.
    pub fn checked_div(self, rhs: Self, line: u32) -> EvalResult<Self> {
        if rhs == ZERO {
            return Err(RuntimeError::DivisionByZero { line });
        }
        Ok(self / rhs)
    }

    /// Raises the complex number to an integer power.
    ///
    /// Small exponents use repeated squaring with overflow checks; a negative
    /// exponent takes the reciprocal of the result.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::value::complex::{ComplexNumber, ONE};
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert_eq!(c.checked_powi(0, 0).unwrap(), ONE);
    /// assert_eq!(c.checked_powi(2, 0).unwrap(), ComplexNumber::new(-1.0, 0.0));
    /// ```
    pub fn checked_powi(self, exp: i64, line: u32) -> EvalResult<Self> {
        if exp == 0 {
            return Ok(ONE);
        }
        if self == ZERO && exp < 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        if exp.unsigned_abs() > MAX_SQUARING_EXPONENT.unsigned_abs() {
            return self.checked_pow(Self::from(i64_to_f64(exp)), line);
        }

        let mut base = self;
        let mut result = ONE;
        let mut n = exp.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result = result * base;
                if !result.is_finite() {
                    return Err(RuntimeError::Overflow { line });
                }
            }
            n /= 2;
            if n > 0 {
                base = base * base;
            }
        }

        if exp < 0 {
            result = ONE.checked_div(result, line)?;
        }
        Ok(result)
    }

    /// Raises the complex number to a complex power through its polar form.
    ///
    /// `0 ** 0` is one; zero raised to a negative or non-real power is a
    /// division by zero.
    pub fn checked_pow(self, exp: Self, line: u32) -> EvalResult<Self> {
        if exp == ZERO {
            return Ok(ONE);
        }
        if self == ZERO {
            if exp.imaginary != 0.0 || exp.real < 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            return Ok(ZERO);
        }

        let magnitude = self.abs();
        let angle = self.arg();
        let mut length = magnitude.powf(exp.real);
        let mut phase = angle * exp.real;
        if exp.imaginary != 0.0 {
            length /= (angle * exp.imaginary).exp();
            phase += exp.imaginary * magnitude.ln();
        }

        let result = Self::new(length * phase.cos(), length * phase.sin());
        if !result.is_finite() {
            return Err(RuntimeError::Overflow { line });
        }
        Ok(result)
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real * rhs.real - self.imaginary * rhs.imaginary,
               imaginary: self.real * rhs.imaginary + self.imaginary * rhs.real, }
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denominator = rhs.real * rhs.real + rhs.imaginary * rhs.imaginary;
        Self { real:      (self.real * rhs.real + self.imaginary * rhs.imaginary) / denominator,
               imaginary: (self.imaginary * rhs.real - self.real * rhs.imaginary) / denominator, }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_repr() {
        assert_eq!(ComplexNumber::new(0.0, 2.0).to_string(), "2j");
        assert_eq!(ComplexNumber::new(1.0, 2.0).to_string(), "(1+2j)");
        assert_eq!(ComplexNumber::new(-0.0, 1.5).to_string(), "(-0+1.5j)");
        assert_eq!(ComplexNumber::new(0.0, -1.0).to_string(), "-1j");
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(matches!(ONE.checked_div(ZERO, 4), Err(RuntimeError::DivisionByZero { line: 4 })));
        assert!(matches!(ZERO.checked_powi(-1, 2), Err(RuntimeError::DivisionByZero { line: 2 })));
    }

    #[test]
    fn real_powers_agree_with_squaring() {
        let z = ComplexNumber::new(1.0, 1.0);
        let squared = z.checked_powi(2, 1).unwrap();
        let polar = z.checked_pow(ComplexNumber::from(2.0), 1).unwrap();
        assert!((squared.real - polar.real).abs() < 1e-12);
        assert!((squared.imaginary - polar.imaginary).abs() < 1e-12);
        assert_eq!(squared, ComplexNumber::new(0.0, 2.0));
    }
}
