use std::{fmt, rc::Rc};

use crate::{
    ast::LiteralValue,
    interpreter::value::complex::ComplexNumber,
    util::num::{float_repr, i64_to_f64},
};

/// Runtime type tag of a [`Value`]. Names follow Python's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The type of `None`.
    NoneType,
    /// `bool`
    Bool,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `complex`
    Complex,
    /// `str`
    Str,
    /// `bytes`
    Bytes,
}

impl ValueType {
    /// The Python name of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoneType => "NoneType",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::Str => "str",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a runtime value in the interpreter.
///
/// Values are produced by literals, operators and builtin calls, and stored
/// in scopes by assignments. Text and bytes are reference counted so copying
/// a value between scopes does not copy its contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `None`.
    None,
    /// `True` or `False`. Behaves as the integers `1` and `0` in arithmetic.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A double precision float.
    Float(f64),
    /// A complex number.
    Complex(ComplexNumber),
    /// An immutable text string.
    Str(Rc<str>),
    /// An immutable byte string.
    Bytes(Rc<[u8]>),
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::None => Self::None,
            LiteralValue::Bool(b) => Self::Bool(b),
            LiteralValue::Int(n) => Self::Int(n),
            LiteralValue::Float(x) => Self::Float(x),
            LiteralValue::Complex(c) => Self::Complex(c),
            LiteralValue::Str(s) => Self::Str(s.into()),
            LiteralValue::Bytes(b) => Self::Bytes(b.into()),
        }
    }
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v.into())
    }
}

impl Value {
    /// The runtime type of the value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::None => ValueType::NoneType,
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::Complex(_) => ValueType::Complex,
            Self::Str(_) => ValueType::Str,
            Self::Bytes(_) => ValueType::Bytes,
        }
    }

    /// The Python name of the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    /// Python truthiness: `None`, `False`, zero and empty sequences are
    /// false, everything else is true.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::value::core::Value;
    ///
    /// assert!(!Value::None.is_truthy());
    /// assert!(!Value::Int(0).is_truthy());
    /// assert!(Value::from("x").is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::None => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(x) => *x != 0.0,
            Self::Complex(c) => c.real != 0.0 || c.imaginary != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bytes(b) => !b.is_empty(),
        }
    }

    /// The integer view of `bool` and `int` values.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float view of `bool`, `int` and `float` values.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => self.as_int().map(i64_to_f64),
        }
    }

    /// The complex view of any numeric value.
    #[must_use]
    pub fn as_complex(&self) -> Option<ComplexNumber> {
        match self {
            Self::Complex(c) => Some(*c),
            _ => self.as_float().map(ComplexNumber::from),
        }
    }

    /// Whether the value takes part in numeric arithmetic.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self,
                 Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Complex(_))
    }

    /// Value equality as `==` sees it: numbers compare by value across
    /// `bool`, `int`, `float` and `complex`; other types only equal values of
    /// their own type.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::value::core::Value;
    ///
    /// assert!(Value::Int(1).py_eq(&Value::Float(1.0)));
    /// assert!(Value::Bool(true).py_eq(&Value::Int(1)));
    /// assert!(!Value::from("1").py_eq(&Value::Int(1)));
    /// ```
    #[must_use]
    pub fn py_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Complex(_), _) | (_, Self::Complex(_)) => {
                match (self.as_complex(), other.as_complex()) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            },
            (Self::Float(_), _) | (_, Self::Float(_)) => {
                match (self.as_float(), other.as_float()) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                }
            },
            _ => match (self.as_int(), other.as_int()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Identity as `is` sees it: same type and equal value.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.value_type() == other.value_type() && self.py_eq(other)
    }

    /// The `repr()` text of the value: strings and bytes are quoted and
    /// escaped, everything else prints as `str()` does.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("it's").repr(), "\"it's\"");
    /// assert_eq!(Value::from(vec![104, 105, 10]).repr(), "b'hi\\n'");
    /// assert_eq!(Value::Float(2.0).repr(), "2.0");
    /// ```
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::Str(s) => quote_text(s),
            Self::Bytes(b) => format!("b{}", quote_bytes(b)),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Value {
    /// Formats the value the way `str()` and `print()` show it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{}", float_repr(*x)),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bytes(b) => write!(f, "b{}", quote_bytes(b)),
        }
    }
}

/// Single quotes unless the text contains a single quote and no double
/// quote.
fn pick_quote(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double { '"' } else { '\'' }
}

fn quote_text(text: &str) -> String {
    let quote = pick_quote(text.contains('\''), text.contains('"'));
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            },
            c if c.is_control() => {
                let code = u32::from(c);
                if code <= 0xFF {
                    out.push_str(&format!("\\x{code:02x}"));
                } else {
                    out.push_str(&format!("\\u{code:04x}"));
                }
            },
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn quote_bytes(bytes: &[u8]) -> String {
    let quote = pick_quote(bytes.contains(&b'\''), bytes.contains(&b'"'));
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push(quote);
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if char::from(b) == quote => {
                out.push('\\');
                out.push(quote);
            },
            0x20..=0x7e => out.push(char::from(byte)),
            _ => out.push_str(&format!("\\x{byte:02x}")),
        }
    }
    out.push(quote);
    out
}
