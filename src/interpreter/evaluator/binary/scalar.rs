use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
    util::num::i64_to_f64,
};

/// Floored division and modulo of two floats, with the remainder taking the
/// sign of the divisor.
///
/// # Example
/// ```
/// use adder::interpreter::evaluator::binary::scalar::float_divmod;
///
/// assert_eq!(float_divmod(7.0, -2.0), (-4.0, -1.0));
/// assert_eq!(float_divmod(-7.5, 2.0), (-4.0, 0.5));
/// ```
#[must_use]
pub fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut remainder = a % b;
    let mut quotient = (a - remainder) / b;
    if remainder != 0.0 {
        if (b < 0.0) != (remainder < 0.0) {
            remainder += b;
            quotient -= 1.0;
        }
    } else {
        remainder = 0.0_f64.copysign(b);
    }
    if quotient == 0.0 {
        quotient = 0.0_f64.copysign(a / b);
    } else {
        let floored = quotient.floor();
        quotient = if quotient - floored > 0.5 { floored + 1.0 } else { floored };
    }
    (quotient, remainder)
}

/// Floored integer division and modulo. `None` on overflow
/// (`i64::MIN // -1`).
fn int_divmod(a: i64, b: i64) -> Option<(i64, i64)> {
    let mut quotient = a.checked_div(b)?;
    let mut remainder = a.wrapping_rem(b);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        quotient -= 1;
        remainder += b;
    }
    Some((quotient, remainder))
}

impl Evaluator {
    /// Evaluates a numeric arithmetic operation.
    ///
    /// The function handles `bool`, `int`, `float` and `complex` operands,
    /// promoting to the wider of the two types: `bool` behaves as `int`, and
    /// any `float` or `complex` operand promotes the other one. Integer
    /// arithmetic is overflow checked. `/` is always true division, `//` and
    /// `%` floor toward negative infinity, and a zero divisor is a
    /// `DivisionByZero` error for every type. Complex numbers support
    /// neither `//` nor `%`.
    ///
    /// # Example
    /// ```
    /// use adder::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let r = Evaluator::eval_scalar_op(BinaryOperator::Mod, &Value::Int(-7), &Value::Int(3), 1);
    /// assert_eq!(r.unwrap(), Value::Int(2));
    ///
    /// let r = Evaluator::eval_scalar_op(BinaryOperator::FloorDiv, &Value::Int(-7), &Value::Int(2), 1);
    /// assert_eq!(r.unwrap(), Value::Int(-4));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: u32)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Sub};

        if !left.is_numeric() || !right.is_numeric() {
            return Err(unsupported(op, left, right, line));
        }

        if matches!(left, Value::Complex(_)) || matches!(right, Value::Complex(_)) {
            let (Some(a), Some(b)) = (left.as_complex(), right.as_complex()) else {
                return Err(unsupported(op, left, right, line));
            };
            return match op {
                Add => Ok(Value::Complex(a + b)),
                Sub => Ok(Value::Complex(a - b)),
                Mul => Ok(Value::Complex(a * b)),
                Div => a.checked_div(b, line).map(Value::Complex),
                _ => Err(unsupported(op, left, right, line)),
            };
        }

        if matches!(left, Value::Float(_)) || matches!(right, Value::Float(_)) {
            let (Some(a), Some(b)) = (left.as_float(), right.as_float()) else {
                return Err(unsupported(op, left, right, line));
            };
            if matches!(op, Div | FloorDiv | Mod) && b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            return match op {
                Add => Ok(Value::Float(a + b)),
                Sub => Ok(Value::Float(a - b)),
                Mul => Ok(Value::Float(a * b)),
                Div => Ok(Value::Float(a / b)),
                FloorDiv => Ok(Value::Float(float_divmod(a, b).0)),
                Mod => Ok(Value::Float(float_divmod(a, b).1)),
                _ => Err(unsupported(op, left, right, line)),
            };
        }

        let (Some(a), Some(b)) = (left.as_int(), right.as_int()) else {
            return Err(unsupported(op, left, right, line));
        };
        let overflow = RuntimeError::Overflow { line };
        match op {
            Add => a.checked_add(b).map(Value::Int).ok_or(overflow),
            Sub => a.checked_sub(b).map(Value::Int).ok_or(overflow),
            Mul => a.checked_mul(b).map(Value::Int).ok_or(overflow),
            Div | FloorDiv | Mod if b == 0 => Err(RuntimeError::DivisionByZero { line }),
            Div => Ok(Value::Float(i64_to_f64(a) / i64_to_f64(b))),
            FloorDiv => int_divmod(a, b).map(|(q, _)| Value::Int(q)).ok_or(overflow),
            Mod => int_divmod(a, b).map(|(_, r)| Value::Int(r)).ok_or(overflow),
            _ => Err(unsupported(op, left, right, line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_divmod_floors() {
        assert_eq!(int_divmod(7, 2), Some((3, 1)));
        assert_eq!(int_divmod(-7, 2), Some((-4, 1)));
        assert_eq!(int_divmod(7, -2), Some((-4, -1)));
        assert_eq!(int_divmod(i64::MIN, -1), None);
    }

    #[test]
    fn overflow_is_reported() {
        let r = Evaluator::eval_scalar_op(BinaryOperator::Add, &Value::Int(i64::MAX),
                                          &Value::Int(1), 3);
        assert!(matches!(r, Err(RuntimeError::Overflow { line: 3 })));
    }

    #[test]
    fn bool_acts_as_int() {
        let r = Evaluator::eval_scalar_op(BinaryOperator::Add, &Value::Bool(true),
                                          &Value::Bool(true), 1);
        assert_eq!(r.unwrap(), Value::Int(2));
    }

    #[test]
    fn zero_divisors() {
        for op in [BinaryOperator::Div, BinaryOperator::FloorDiv, BinaryOperator::Mod] {
            let r = Evaluator::eval_scalar_op(op, &Value::Int(1), &Value::Int(0), 2);
            assert!(matches!(r, Err(RuntimeError::DivisionByZero { line: 2 })));
            let r = Evaluator::eval_scalar_op(op, &Value::Float(1.0), &Value::Bool(false), 2);
            assert!(matches!(r, Err(RuntimeError::DivisionByZero { line: 2 })));
        }
    }

    #[test]
    fn complex_has_no_floor_division() {
        let one = Value::Complex(crate::interpreter::value::complex::ONE);
        let r = Evaluator::eval_scalar_op(BinaryOperator::FloorDiv, &one, &Value::Int(1), 1);
        assert!(matches!(r, Err(RuntimeError::UnsupportedOperands { .. })));
    }
}
