use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// The error for an operator applied to operand types it does not support.
pub fn unsupported(op: BinaryOperator, left: &Value, right: &Value, line: u32) -> RuntimeError {
    RuntimeError::UnsupportedOperands { op: op.to_string(),
                                        left: left.type_name(),
                                        right: right.type_name(),
                                        line }
}

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator and operand types. Arithmetic goes to the sequence
    /// handlers when either operand is a string or bytes value, and to
    /// `eval_scalar_op` otherwise. Power calls `eval_pow`; shifts and bitwise
    /// operators call `eval_bitwise`; comparisons, membership and identity
    /// call `eval_comparison`.
    ///
    /// `and` and `or` are accepted for completeness and return the deciding
    /// operand; the evaluator short-circuits them before both sides are
    /// evaluated.
    ///
    /// # Example
    /// ```
    /// use adder::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, &Value::Int(3), &Value::Int(4), 1);
    /// assert_eq!(result.unwrap(), Value::Int(7));
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Div, &Value::Int(7), &Value::Int(2), 1);
    /// assert_eq!(result.unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: u32)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, FloorDiv, Greater, GreaterEqual, In, Is,
            IsNot, LeftShift, Less, LessEqual, Mod, Mul, NotEqual, NotIn, Or, Pow, RightShift,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | FloorDiv | Mod => {
                if matches!(left, Value::Str(_) | Value::Bytes(_))
                   || matches!(right, Value::Str(_) | Value::Bytes(_))
                {
                    Self::eval_sequence_op(op, left, right, line)
                } else {
                    Self::eval_scalar_op(op, left, right, line)
                }
            },

            Pow => Self::eval_pow(left, right, line),

            LeftShift | RightShift | BitAnd | BitOr | BitXor => {
                Self::eval_bitwise(op, left, right, line)
            },

            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual | In | NotIn | Is
            | IsNot => Self::eval_comparison(op, left, right, line),

            And => Ok(if left.is_truthy() { right } else { left }.clone()),
            Or => Ok(if left.is_truthy() { left } else { right }.clone()),
        }
    }
}
