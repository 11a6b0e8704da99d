use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Computes the minimum or maximum of the arguments.
///
/// With two or more arguments the arguments themselves are compared. With a
/// single argument it must be a string or bytes value, and its characters
/// (or byte values) are compared instead. Comparison follows the `<`
/// operator, so mixing strings and numbers is an error. Ties keep the first
/// candidate.
///
/// The operation is selected by the `name` parameter, which must be `"min"`
/// or `"max"`.
///
/// # Example
/// ```
/// use adder::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let r = min_max("min", &[Value::Int(3), Value::Float(2.5), Value::Int(7)], 1).unwrap();
/// assert_eq!(r, Value::Float(2.5));
///
/// let r = min_max("max", &[Value::from("hello")], 1).unwrap();
/// assert_eq!(r, Value::from("o"));
/// ```
pub fn min_max(name: &str, args: &[Value], line: u32) -> EvalResult<Value> {
    let candidates: Vec<Value> = match args {
        [Value::Str(text)] => text.chars().map(|ch| Value::from(ch.to_string())).collect(),
        [Value::Bytes(bytes)] => bytes.iter().map(|b| Value::Int(i64::from(*b))).collect(),
        [single] => {
            return Err(RuntimeError::InvalidArgument { details: format!("'{}' object is not \
                                                                         iterable",
                                                                        single.type_name()),
                                                       line });
        },
        _ => args.to_vec(),
    };

    let replaces = if name == "min" {
        BinaryOperator::Less
    } else {
        BinaryOperator::Greater
    };

    let mut iter = candidates.into_iter();
    let Some(mut best) = iter.next() else {
        return Err(RuntimeError::InvalidArgument { details: format!("{name}() arg is an empty \
                                                                     sequence"),
                                                   line });
    };
    for candidate in iter {
        if Evaluator::eval_binary(replaces, &candidate, &best, line)?.is_truthy() {
            best = candidate;
        }
    }
    Ok(best)
}
