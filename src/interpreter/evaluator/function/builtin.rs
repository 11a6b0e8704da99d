use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

fn invalid(details: String, line: u32) -> RuntimeError {
    RuntimeError::InvalidArgument { details, line }
}

/// Returns the number of characters of a string or bytes of a bytes value.
///
/// # Example
/// ```
/// use adder::interpreter::{
///     evaluator::{core::Evaluator, function::builtin::len},
///     value::core::Value,
/// };
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(len(&mut evaluator, &[Value::from("héllo")], 1).unwrap(), Value::Int(5));
/// assert!(len(&mut evaluator, &[Value::Int(5)], 1).is_err());
/// ```
pub fn len(_: &mut Evaluator, args: &[Value], line: u32) -> EvalResult<Value> {
    let count = match &args[0] {
        Value::Str(text) => text.chars().count(),
        Value::Bytes(bytes) => bytes.len(),
        other => {
            return Err(invalid(format!("object of type '{}' has no len()", other.type_name()),
                               line));
        },
    };
    i64::try_from(count).map(Value::Int)
                        .map_err(|_| RuntimeError::Overflow { line })
}

/// Returns the absolute value of a number; the magnitude for complex
/// numbers.
pub fn abs(_: &mut Evaluator, args: &[Value], line: u32) -> EvalResult<Value> {
    match &args[0] {
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Int(n) => n.checked_abs()
                          .map(Value::Int)
                          .ok_or(RuntimeError::Overflow { line }),
        Value::Float(x) => Ok(Value::Float(x.abs())),
        Value::Complex(c) => Ok(Value::Float(c.abs())),
        other => Err(invalid(format!("bad operand type for abs(): '{}'", other.type_name()),
                             line)),
    }
}

/// Converts a value to its `str()` text. With no argument returns `''`.
pub fn str(_: &mut Evaluator, args: &[Value], _line: u32) -> EvalResult<Value> {
    Ok(args.first()
           .map_or_else(|| Value::from(""), |value| Value::from(value.to_string())))
}

/// Returns the `repr()` text of a value.
///
/// # Example
/// ```
/// use adder::interpreter::{
///     evaluator::{core::Evaluator, function::builtin::repr},
///     value::core::Value,
/// };
///
/// let mut evaluator = Evaluator::new();
/// let quoted = repr(&mut evaluator, &[Value::from("a\tb")], 1).unwrap();
/// assert_eq!(quoted, Value::from("'a\\tb'"));
/// ```
pub fn repr(_: &mut Evaluator, args: &[Value], _line: u32) -> EvalResult<Value> {
    Ok(Value::from(args[0].repr()))
}

/// Converts a value to an integer. Floats are truncated toward zero and
/// strings are parsed as base 10 with optional surrounding whitespace and
/// sign. With no argument returns `0`.
///
/// # Example
/// ```
/// use adder::interpreter::{
///     evaluator::{core::Evaluator, function::builtin::int},
///     value::core::Value,
/// };
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(int(&mut evaluator, &[Value::Float(-2.7)], 1).unwrap(), Value::Int(-2));
/// assert_eq!(int(&mut evaluator, &[Value::from(" 1_000 ")], 1).unwrap(), Value::Int(1000));
/// assert!(int(&mut evaluator, &[Value::from("1.5")], 1).is_err());
/// ```
pub fn int(_: &mut Evaluator, args: &[Value], line: u32) -> EvalResult<Value> {
    let Some(value) = args.first() else {
        return Ok(Value::Int(0));
    };
    match value {
        Value::Bool(_) | Value::Int(_) => Ok(Value::Int(value.as_int().unwrap_or_default())),
        Value::Float(x) => f64_to_i64_truncated(*x, line).map(Value::Int),
        Value::Str(text) => parse_int(text).map(Value::Int).ok_or_else(|| {
                                invalid(format!("invalid literal for int() with base 10: {}",
                                                value.repr()),
                                        line)
                            }),
        other => Err(invalid(format!("int() argument must be a string or a real number, not \
                                      '{}'",
                                     other.type_name()),
                             line)),
    }
}

fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let valid = digits.chars().next().is_some_and(|ch| ch.is_ascii_digit())
                && digits.chars().last().is_some_and(|ch| ch.is_ascii_digit())
                && !digits.contains("__")
                && digits.chars().all(|ch| ch.is_ascii_digit() || ch == '_');
    if !valid {
        return None;
    }
    trimmed.replace('_', "").parse().ok()
}

/// Converts a value to a float. Strings may spell `inf` and `nan`. With no
/// argument returns `0.0`.
pub fn float(_: &mut Evaluator, args: &[Value], line: u32) -> EvalResult<Value> {
    let Some(value) = args.first() else {
        return Ok(Value::Float(0.0));
    };
    match value {
        Value::Float(x) => Ok(Value::Float(*x)),
        Value::Bool(_) | Value::Int(_) => {
            Ok(Value::Float(i64_to_f64(value.as_int().unwrap_or_default())))
        },
        Value::Str(text) => text.trim().parse().map(Value::Float).map_err(|_| {
                                invalid(format!("could not convert string to float: {}",
                                                value.repr()),
                                        line)
                            }),
        other => Err(invalid(format!("float() argument must be a string or a real number, \
                                      not '{}'",
                                     other.type_name()),
                             line)),
    }
}

/// Returns the truthiness of a value. With no argument returns `False`.
pub fn bool(_: &mut Evaluator, args: &[Value], _line: u32) -> EvalResult<Value> {
    Ok(Value::Bool(args.first().is_some_and(Value::is_truthy)))
}

/// Describes the type of a value as `<class 'name'>`.
pub fn type_name(_: &mut Evaluator, args: &[Value], _line: u32) -> EvalResult<Value> {
    Ok(Value::from(format!("<class '{}'>", args[0].type_name())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_parsing_follows_python() {
        assert_eq!(parse_int("-42"), Some(-42));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("1__0"), None);
        assert_eq!(parse_int("_1"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("0x10"), None);
    }

    #[test]
    fn abs_of_min_int_overflows() {
        let mut evaluator = Evaluator::new();
        assert!(matches!(abs(&mut evaluator, &[Value::Int(i64::MIN)], 9),
                         Err(RuntimeError::Overflow { line: 9 })));
    }

    #[test]
    fn conversions_without_arguments() {
        let mut evaluator = Evaluator::new();
        assert_eq!(int(&mut evaluator, &[], 1).unwrap(), Value::Int(0));
        assert_eq!(float(&mut evaluator, &[], 1).unwrap(), Value::Float(0.0));
        assert_eq!(str(&mut evaluator, &[], 1).unwrap(), Value::from(""));
        assert_eq!(bool(&mut evaluator, &[], 1).unwrap(), Value::Bool(false));
    }
}
