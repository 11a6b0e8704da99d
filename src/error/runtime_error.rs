#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A name that is bound in no scope on the chain.
    #[error("Error on line {line}: Name '{name}' is not defined.")]
    UndefinedName {
        /// The unresolved name.
        name: String,
        /// The source line where the error occurred.
        line: u32,
    },
    /// A user function called with the wrong number of arguments.
    #[error("Error on line {line}: {name}() takes {expected} positional argument{} but \
             {found} {} given.",
            plural(*.expected), were(*.found))]
    ArityMismatch {
        /// The function name.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     u32,
    },
    /// A builtin called with an argument count it does not accept.
    #[error("Error on line {line}: {name}() expected {expected} argument(s), got {found}.")]
    BuiltinArityMismatch {
        /// The builtin name.
        name:     String,
        /// Human readable description of the accepted counts.
        expected: String,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     u32,
    },
    /// Call syntax applied to a name bound to a plain value.
    #[error("Error on line {line}: '{type_name}' object '{name}' is not callable.")]
    NotCallable {
        /// The called name.
        name:      String,
        /// Runtime type of the bound value.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      u32,
    },
    /// A function name used where a value is required.
    #[error("Error on line {line}: Function '{name}' cannot be used as a value.")]
    FunctionAsValue {
        /// The function name.
        name: String,
        /// The source line where the error occurred.
        line: u32,
    },
    /// A binary operator applied to operand types it does not support.
    #[error("Error on line {line}: Unsupported operand type(s) for {op}: '{left}' and \
             '{right}'.")]
    UnsupportedOperands {
        /// The operator spelling.
        op:    String,
        /// Runtime type of the left operand.
        left:  &'static str,
        /// Runtime type of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  u32,
    },
    /// A unary operator applied to an operand type it does not support.
    #[error("Error on line {line}: Bad operand type for unary {op}: '{operand}'.")]
    UnsupportedOperand {
        /// The operator spelling.
        op:      String,
        /// Runtime type of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    u32,
    },
    /// Attempted division or modulo by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: u32,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: u32,
    },
    /// An argument was invalid or out of range.
    #[error("Error on line {line}: Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    u32,
    },
    /// Writing program output failed.
    #[error("Error on line {line}: Failed to write output: {details}.")]
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    u32,
    },
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

const fn were(count: usize) -> &'static str {
    if count == 1 { "was" } else { "were" }
}

impl RuntimeError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> u32 {
        match self {
            Self::UndefinedName { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::BuiltinArityMismatch { line, .. }
            | Self::NotCallable { line, .. }
            | Self::FunctionAsValue { line, .. }
            | Self::UnsupportedOperands { line, .. }
            | Self::UnsupportedOperand { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::InvalidArgument { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}
