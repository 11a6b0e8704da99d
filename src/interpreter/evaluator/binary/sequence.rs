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
    /// Evaluates an arithmetic operator with a string or bytes operand.
    ///
    /// Only concatenation of two values of the same sequence type and
    /// repetition by an integer are defined. A repetition count of zero or
    /// less produces an empty value.
    ///
    /// # Example
    /// ```
    /// use adder::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let joined = Evaluator::eval_sequence_op(BinaryOperator::Add,
    ///                                          &Value::from("ab"),
    ///                                          &Value::from("cd"),
    ///                                          1).unwrap();
    /// assert_eq!(joined, Value::from("abcd"));
    ///
    /// let repeated = Evaluator::eval_sequence_op(BinaryOperator::Mul,
    ///                                            &Value::Int(3),
    ///                                            &Value::from("ab"),
    ///                                            1).unwrap();
    /// assert_eq!(repeated, Value::from("ababab"));
    /// ```
    pub fn eval_sequence_op(op: BinaryOperator,
                            left: &Value,
                            right: &Value,
                            line: u32)
                            -> EvalResult<Value> {
        match (op, left, right) {
            (BinaryOperator::Add, Value::Str(a), Value::Str(b)) => {
                Ok(Value::from(format!("{a}{b}")))
            },
            (BinaryOperator::Add, Value::Bytes(a), Value::Bytes(b)) => {
                Ok(Value::from([&**a, &**b].concat()))
            },
            (BinaryOperator::Mul, Value::Str(s), count) | (BinaryOperator::Mul, count, Value::Str(s)) => {
                match count.as_int() {
                    Some(n) => {
                        let times = repeat_count(s.len(), n, line)?;
                        Ok(Value::from(s.repeat(times)))
                    },
                    None => Err(unsupported(op, left, right, line)),
                }
            },
            (BinaryOperator::Mul, Value::Bytes(b), count)
            | (BinaryOperator::Mul, count, Value::Bytes(b)) => match count.as_int() {
                Some(n) => {
                    let times = repeat_count(b.len(), n, line)?;
                    Ok(Value::from(b.repeat(times)))
                },
                None => Err(unsupported(op, left, right, line)),
            },
            _ => Err(unsupported(op, left, right, line)),
        }
    }
}

/// The number of copies for a repetition, checked against the total length.
fn repeat_count(len: usize, count: i64, line: u32) -> EvalResult<usize> {
    if count <= 0 {
        return Ok(0);
    }
    let times = usize::try_from(count).map_err(|_| RuntimeError::Overflow { line })?;
    match len.checked_mul(times) {
        Some(total) if isize::try_from(total).is_ok() => Ok(times),
        _ => Err(RuntimeError::Overflow { line }),
    }
}
