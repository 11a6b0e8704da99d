use std::cmp::Ordering;

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
    /// Evaluates an equality, ordering, membership or identity operator.
    ///
    /// `==` and `!=` never fail. Ordering is defined between real numbers,
    /// between strings and between bytes values; comparisons involving `NaN`
    /// are false. `in` tests substrings and byte subsequences, and accepts an
    /// integer in `0..=255` on the left of a bytes value. `is` holds for
    /// values of the same type with equal contents.
    ///
    /// # Example
    /// ```
    /// use adder::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let less = Evaluator::eval_comparison(BinaryOperator::Less,
    ///                                       &Value::Int(1),
    ///                                       &Value::Float(1.5),
    ///                                       1).unwrap();
    /// assert_eq!(less, Value::Bool(true));
    ///
    /// let found = Evaluator::eval_comparison(BinaryOperator::In,
    ///                                        &Value::from("ell"),
    ///                                        &Value::from("hello"),
    ///                                        1).unwrap();
    /// assert_eq!(found, Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: u32)
                           -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Equal => left.py_eq(right),
            BinaryOperator::NotEqual => !left.py_eq(right),
            BinaryOperator::Is => left.is_identical(right),
            BinaryOperator::IsNot => !left.is_identical(right),
            BinaryOperator::In => contains(op, right, left, line)?,
            BinaryOperator::NotIn => !contains(op, right, left, line)?,
            BinaryOperator::Less => order(op, left, right, line)?.is_some_and(Ordering::is_lt),
            BinaryOperator::Greater => order(op, left, right, line)?.is_some_and(Ordering::is_gt),
            BinaryOperator::LessEqual => order(op, left, right, line)?.is_some_and(Ordering::is_le),
            BinaryOperator::GreaterEqual => {
                order(op, left, right, line)?.is_some_and(Ordering::is_ge)
            },
            _ => return Err(unsupported(op, left, right, line)),
        };

        Ok(Value::Bool(result))
    }
}

/// Orders two values; `None` when either side is `NaN`.
fn order(op: BinaryOperator,
         left: &Value,
         right: &Value,
         line: u32)
         -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        (Value::Bytes(a), Value::Bytes(b)) => Ok(Some(a.cmp(b))),
        (Value::Complex(_), _) | (_, Value::Complex(_)) => Err(unsupported(op, left, right, line)),
        (Value::Float(_), _) | (_, Value::Float(_)) => match (left.as_float(), right.as_float()) {
            (Some(a), Some(b)) => Ok(a.partial_cmp(&b)),
            _ => Err(unsupported(op, left, right, line)),
        },
        _ => match (left.as_int(), right.as_int()) {
            (Some(a), Some(b)) => Ok(Some(a.cmp(&b))),
            _ => Err(unsupported(op, left, right, line)),
        },
    }
}

fn contains(op: BinaryOperator, container: &Value, item: &Value, line: u32) -> EvalResult<bool> {
    match (container, item) {
        (Value::Str(haystack), Value::Str(needle)) => Ok(haystack.contains(&**needle)),
        (Value::Bytes(haystack), Value::Bytes(needle)) => {
            Ok(needle.is_empty() || haystack.windows(needle.len()).any(|w| w == &**needle))
        },
        (Value::Bytes(haystack), Value::Bool(_) | Value::Int(_)) => {
            let byte = item.as_int()
                           .and_then(|n| u8::try_from(n).ok())
                           .ok_or_else(|| RuntimeError::InvalidArgument {
                               details: "byte must be in range(0, 256)".to_string(),
                               line,
                           })?;
            Ok(haystack.contains(&byte))
        },
        _ => Err(unsupported(op, item, container, line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        Evaluator::eval_comparison(op, &left, &right, 1)
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(compare(BinaryOperator::Less, nan.clone(), Value::Int(1)).unwrap(),
                   Value::Bool(false));
        assert_eq!(compare(BinaryOperator::GreaterEqual, nan.clone(), nan.clone()).unwrap(),
                   Value::Bool(false));
        assert_eq!(compare(BinaryOperator::NotEqual, nan.clone(), nan).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn strings_order_lexicographically() {
        assert_eq!(compare(BinaryOperator::Less, Value::from("abc"), Value::from("abd")).unwrap(),
                   Value::Bool(true));
        assert_eq!(compare(BinaryOperator::Greater, Value::from("b"), Value::from("abc")).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn mixed_types_do_not_order() {
        let err = compare(BinaryOperator::Less, Value::from("1"), Value::Int(2)).unwrap_err();
        assert!(matches!(err, RuntimeError::UnsupportedOperands { left: "str", right: "int", .. }));

        let complex = Value::from(crate::interpreter::value::complex::ComplexNumber::new(1.0, 1.0));
        assert!(compare(BinaryOperator::Less, complex, Value::Int(0)).is_err());
    }

    #[test]
    fn equality_across_types_is_false_not_an_error() {
        assert_eq!(compare(BinaryOperator::Equal, Value::from("1"), Value::Int(1)).unwrap(),
                   Value::Bool(false));
        assert_eq!(compare(BinaryOperator::Equal, Value::None, Value::None).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn identity_requires_same_type() {
        assert_eq!(compare(BinaryOperator::Is, Value::Int(1), Value::Bool(true)).unwrap(),
                   Value::Bool(false));
        assert_eq!(compare(BinaryOperator::IsNot, Value::Int(1), Value::Float(1.0)).unwrap(),
                   Value::Bool(true));
        assert_eq!(compare(BinaryOperator::Is, Value::None, Value::None).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn membership() {
        let data = Value::from(vec![1_u8, 2, 3]);
        assert_eq!(compare(BinaryOperator::In, Value::Int(2), data.clone()).unwrap(),
                   Value::Bool(true));
        assert_eq!(compare(BinaryOperator::In, Value::from(vec![2_u8, 3]), data.clone()).unwrap(),
                   Value::Bool(true));
        assert!(matches!(compare(BinaryOperator::In, Value::Int(300), data),
                         Err(RuntimeError::InvalidArgument { .. })));
        assert_eq!(compare(BinaryOperator::NotIn, Value::from(""), Value::from("abc")).unwrap(),
                   Value::Bool(false));
        assert!(compare(BinaryOperator::In, Value::Int(1), Value::from("1")).is_err());
    }
}
