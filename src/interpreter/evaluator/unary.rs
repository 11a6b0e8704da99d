use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: truthiness negation, defined for every value.
    /// - `Plus`: identity on numbers; `bool` becomes `int`.
    /// - `Negate`: checked numeric negation.
    /// - `Invert`: bitwise complement of `bool` and `int`.
    ///
    /// # Example
    /// ```
    /// use adder::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Int(5), 1).unwrap();
    /// assert_eq!(v, Value::Int(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::from(""), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Invert, &Value::Bool(true), 1).unwrap();
    /// assert_eq!(v, Value::Int(-2));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: u32) -> EvalResult<Value> {
        let unsupported = || RuntimeError::UnsupportedOperand { op: op.to_string(),
                                                                operand: value.type_name(),
                                                                line };

        match (op, value) {
            (UnaryOperator::Not, _) => Ok(Value::Bool(!value.is_truthy())),

            (UnaryOperator::Plus, Value::Bool(b)) => Ok(Value::Int(i64::from(*b))),
            (UnaryOperator::Plus, Value::Int(_) | Value::Float(_) | Value::Complex(_)) => {
                Ok(value.clone())
            },

            (UnaryOperator::Negate, Value::Bool(b)) => Ok(Value::Int(-i64::from(*b))),
            (UnaryOperator::Negate, Value::Int(n)) => {
                n.checked_neg()
                 .map(Value::Int)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (UnaryOperator::Negate, Value::Float(x)) => Ok(Value::Float(-x)),
            (UnaryOperator::Negate, Value::Complex(c)) => Ok(Value::Complex(-*c)),

            (UnaryOperator::Invert, Value::Bool(_) | Value::Int(_)) => {
                Ok(Value::Int(!value.as_int().unwrap_or_default()))
            },

            _ => Err(unsupported()),
        }
    }
}
