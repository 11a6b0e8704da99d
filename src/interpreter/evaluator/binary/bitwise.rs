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
};

impl Evaluator {
    /// Evaluates a shift or bitwise operator on integer operands.
    ///
    /// `bool` operands take part as `0` and `1`; `&`, `|` and `^` between two
    /// booleans keep the `bool` type. Shift counts must not be negative, left
    /// shifts that lose bits overflow, and right shifts past the width of the
    /// integer saturate to `0` or `-1`.
    ///
    /// # Example
    /// ```
    /// use adder::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let shifted = Evaluator::eval_bitwise(BinaryOperator::LeftShift,
    ///                                       &Value::Int(1),
    ///                                       &Value::Int(4),
    ///                                       1).unwrap();
    /// assert_eq!(shifted, Value::Int(16));
    ///
    /// let both = Evaluator::eval_bitwise(BinaryOperator::BitAnd,
    ///                                    &Value::Bool(true),
    ///                                    &Value::Bool(false),
    ///                                    1).unwrap();
    /// assert_eq!(both, Value::Bool(false));
    /// ```
    pub fn eval_bitwise(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        line: u32)
                        -> EvalResult<Value> {
        let (Some(a), Some(b)) = (left.as_int(), right.as_int()) else {
            return Err(unsupported(op, left, right, line));
        };

        if let (Value::Bool(x), Value::Bool(y)) = (left, right) {
            match op {
                BinaryOperator::BitAnd => return Ok(Value::Bool(x & y)),
                BinaryOperator::BitOr => return Ok(Value::Bool(x | y)),
                BinaryOperator::BitXor => return Ok(Value::Bool(x ^ y)),
                _ => {},
            }
        }

        match op {
            BinaryOperator::BitAnd => Ok(Value::Int(a & b)),
            BinaryOperator::BitOr => Ok(Value::Int(a | b)),
            BinaryOperator::BitXor => Ok(Value::Int(a ^ b)),
            BinaryOperator::LeftShift => shift_left(a, b, line).map(Value::Int),
            BinaryOperator::RightShift => shift_right(a, b, line).map(Value::Int),
            _ => Err(unsupported(op, left, right, line)),
        }
    }
}

fn shift_count(count: i64, line: u32) -> EvalResult<u32> {
    if count < 0 {
        return Err(RuntimeError::InvalidArgument { details: "negative shift count".to_string(),
                                                   line });
    }
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}

fn shift_left(value: i64, count: i64, line: u32) -> EvalResult<i64> {
    let count = shift_count(count, line)?;
    if value == 0 {
        return Ok(0);
    }
    if count >= 63 {
        return Err(RuntimeError::Overflow { line });
    }

    let shifted = value << count;
    if shifted >> count == value {
        Ok(shifted)
    } else {
        Err(RuntimeError::Overflow { line })
    }
}

fn shift_right(value: i64, count: i64, line: u32) -> EvalResult<i64> {
    let count = shift_count(count, line)?;
    if count >= 64 {
        return Ok(if value < 0 { -1 } else { 0 });
    }
    Ok(value >> count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts() {
        assert_eq!(shift_left(-3, 2, 1).unwrap(), -12);
        assert_eq!(shift_right(-1, 200, 1).unwrap(), -1);
        assert_eq!(shift_right(1 << 40, 100, 1).unwrap(), 0);
        assert_eq!(shift_left(0, 1000, 1).unwrap(), 0);
    }

    #[test]
    fn lossy_left_shift_overflows() {
        assert!(matches!(shift_left(1, 63, 4), Err(RuntimeError::Overflow { line: 4 })));
        assert!(matches!(shift_left(i64::MAX, 1, 4), Err(RuntimeError::Overflow { .. })));
        assert_eq!(shift_left(1, 62, 4).unwrap(), 1 << 62);
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(matches!(shift_right(8, -1, 2), Err(RuntimeError::InvalidArgument { .. })));
    }

    #[test]
    fn mixed_bool_and_int_produces_int() {
        let value = Evaluator::eval_bitwise(BinaryOperator::BitOr,
                                            &Value::Bool(true),
                                            &Value::Int(2),
                                            1).unwrap();
        assert_eq!(value, Value::Int(3));
    }

    #[test]
    fn floats_are_unsupported() {
        let err = Evaluator::eval_bitwise(BinaryOperator::BitAnd,
                                          &Value::Float(1.0),
                                          &Value::Int(1),
                                          3).unwrap_err();
        assert!(matches!(err, RuntimeError::UnsupportedOperands { left: "float", .. }));
    }
}
