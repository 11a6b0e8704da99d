#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that fits no grammar alternative at this position.
    #[error("Error on line {line}, column {column}: Unexpected token {found}{}.",
            expected_suffix(.expected))]
    UnexpectedToken {
        /// Description of the token encountered.
        found:    String,
        /// Description of the token the grammar required, when known.
        expected: Option<String>,
        /// The source line of the token.
        line:     u32,
        /// The source column of the token.
        column:   u32,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input{}.", expected_suffix(.expected))]
    UnexpectedEndOfInput {
        /// Description of the token the grammar required, when known.
        expected: Option<String>,
        /// The last source line.
        line:     u32,
    },
    /// An indented line where no block is opening.
    #[error("Error on line {line}: Unexpected indent.")]
    UnexpectedIndent {
        /// The source line of the indented statement.
        line: u32,
    },
    /// A dedent while no block is open.
    #[error("Error on line {line}: Unexpected dedent.")]
    UnexpectedDedent {
        /// The source line of the dedent.
        line: u32,
    },
    /// A statement introduced by a keyword the interpreter does not execute.
    #[error("Error on line {line}, column {column}: '{keyword}' statements are not supported.")]
    UnsupportedStatement {
        /// The keyword that opens the statement.
        keyword: String,
        /// The source line where the error occurred.
        line:    u32,
        /// The source column where the error occurred.
        column:  u32,
    },
    /// The left side of `=` is not a plain name.
    #[error("Error on line {line}: Cannot assign to expression, only to a name.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: u32,
    },
    /// Adjacent `str` and `bytes` literals.
    #[error("Error on line {line}, column {column}: Cannot mix bytes and nonbytes literals.")]
    MixedStringConcatenation {
        /// The source line of the second literal.
        line:   u32,
        /// The source column of the second literal.
        column: u32,
    },
}

#[allow(clippy::ref_option)]
fn expected_suffix(expected: &Option<String>) -> String {
    expected.as_ref()
            .map_or_else(String::new, |want| format!(", expected {want}"))
}
