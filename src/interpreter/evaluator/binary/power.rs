use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{EvalResult, Evaluator},
        },
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::i64_to_f64,
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer-integer exponentiation uses checked arithmetic. Negative
    /// integer exponents are computed in floating-point form. Complex bases
    /// or exponents use the complex power. A negative float base raised to a
    /// fractional exponent produces a complex result. Zero raised to a
    /// negative power is a division by zero.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let result = Evaluator::eval_pow(&Value::Int(2), &Value::Int(10), 1).unwrap();
    /// assert_eq!(result, Value::Int(1024));
    ///
    /// let result = Evaluator::eval_pow(&Value::Int(2), &Value::Int(-1), 1).unwrap();
    /// assert_eq!(result, Value::Float(0.5));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, line: u32) -> EvalResult<Value> {
        if !base.is_numeric() || !exponent.is_numeric() {
            return Err(unsupported(BinaryOperator::Pow, base, exponent, line));
        }

        match (base, exponent) {
            (Value::Complex(b), Value::Bool(_) | Value::Int(_)) => {
                let exp = exponent.as_int().unwrap_or_default();
                b.checked_powi(exp, line).map(Value::Complex)
            },
            (Value::Complex(_), _) | (_, Value::Complex(_)) => {
                match (base.as_complex(), exponent.as_complex()) {
                    (Some(b), Some(e)) => b.checked_pow(e, line).map(Value::Complex),
                    _ => Err(unsupported(BinaryOperator::Pow, base, exponent, line)),
                }
            },
            (Value::Float(_), _) | (_, Value::Float(_)) => {
                float_pow(base.as_float().unwrap_or_default(),
                          exponent.as_float().unwrap_or_default(),
                          line)
            },
            _ => int_pow(base.as_int().unwrap_or_default(),
                         exponent.as_int().unwrap_or_default(),
                         line),
        }
    }
}

fn int_pow(base: i64, exp: i64, line: u32) -> EvalResult<Value> {
    if exp < 0 {
        if base == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }
        return float_pow(i64_to_f64(base), i64_to_f64(exp), line);
    }

    match u32::try_from(exp) {
        Ok(exp) => base.checked_pow(exp)
                       .map(Value::Int)
                       .ok_or(RuntimeError::Overflow { line }),
        Err(_) => match base {
            0 | 1 => Ok(Value::Int(base)),
            -1 => Ok(Value::Int(if exp % 2 == 0 { 1 } else { -1 })),
            _ => Err(RuntimeError::Overflow { line }),
        },
    }
}

fn float_pow(base: f64, exp: f64, line: u32) -> EvalResult<Value> {
    if base == 0.0 && exp < 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    if base < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
        return ComplexNumber::from(base).checked_pow(ComplexNumber::from(exp), line)
                                        .map(Value::Complex);
    }

    let result = base.powf(exp);
    if result.is_infinite() && base.is_finite() && exp.is_finite() {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(Value::Float(result))
}
