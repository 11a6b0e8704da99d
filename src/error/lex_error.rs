#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character that starts no token.
    #[error("Error on line {line}, column {column}: Invalid character '{ch}'.")]
    InvalidCharacter {
        /// The offending character.
        ch:     char,
        /// The source line where the error occurred.
        line:   u32,
        /// The source column where the error occurred.
        column: u32,
    },
    /// A dedent to a width that was never pushed onto the indent stack.
    #[error("Error on line {line}: Unindent to width {width} does not match any outer \
             indentation level (expected {expected}).")]
    InconsistentDedent {
        /// The indentation width found on the line.
        width:    usize,
        /// The enclosing indentation width left on the stack.
        expected: usize,
        /// The source line where the error occurred.
        line:     u32,
    },
    /// A single-quoted string that is not closed before the end of the line.
    #[error("Error on line {line}, column {column}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the string starts.
        line:   u32,
        /// The source column where the string starts.
        column: u32,
    },
    /// Triple-quoted strings are not part of the language.
    #[error("Error on line {line}, column {column}: Triple-quoted strings are not supported.")]
    TripleQuotedString {
        /// The source line where the string starts.
        line:   u32,
        /// The source column where the string starts.
        column: u32,
    },
    /// A string prefix the language does not support, such as `f`.
    #[error("Error on line {line}, column {column}: Unsupported string prefix '{prefix}'.")]
    UnsupportedPrefix {
        /// The prefix as written.
        prefix: String,
        /// The source line where the error occurred.
        line:   u32,
        /// The source column where the error occurred.
        column: u32,
    },
    /// A malformed `\x`, `\u` or `\U` escape sequence.
    #[error("Error on line {line}, column {column}: Truncated or invalid escape '{sequence}'.")]
    InvalidEscape {
        /// The escape as written, including the backslash.
        sequence: String,
        /// The source line where the error occurred.
        line:     u32,
        /// The source column of the backslash.
        column:   u32,
    },
    /// A bytes literal containing a character outside ASCII.
    #[error("Error on line {line}, column {column}: Bytes can only contain ASCII literal \
             characters.")]
    NonAsciiBytes {
        /// The source line where the error occurred.
        line:   u32,
        /// The source column of the offending character.
        column: u32,
    },
    /// A closing bracket that does not match the innermost open bracket.
    #[error("Error on line {line}, column {column}: Closing bracket '{found}' does not match \
             {}.", opening_description(.expected))]
    MismatchedBracket {
        /// The open bracket on top of the bracket stack, if any.
        expected: Option<char>,
        /// The closing bracket that was found.
        found:    char,
        /// The source line where the error occurred.
        line:     u32,
        /// The source column where the error occurred.
        column:   u32,
    },
    /// End of input reached while a bracket is still open.
    #[error("Error on line {line}: Unexpected end of input, bracket '{bracket}' was never \
             closed.")]
    UnclosedBracket {
        /// The innermost open bracket.
        bracket: char,
        /// The last source line.
        line:    u32,
    },
    /// Text that the number automaton stopped on in a non-final state.
    #[error("Error on line {line}, column {column}: Invalid number literal '{text}'.")]
    InvalidNumber {
        /// The characters consumed so far.
        text:   String,
        /// The source line where the literal starts.
        line:   u32,
        /// The source column where the literal starts.
        column: u32,
    },
    /// An integer literal that does not fit the integer type.
    #[error("Error on line {line}, column {column}: Number literal '{text}' is too large.")]
    NumberTooLarge {
        /// The literal as written.
        text:   String,
        /// The source line where the literal starts.
        line:   u32,
        /// The source column where the literal starts.
        column: u32,
    },
    /// A keyword of the host language family that this interpreter reserves
    /// but does not implement.
    #[error("Error on line {line}, column {column}: Keyword '{word}' is not supported.")]
    UnsupportedKeyword {
        /// The keyword.
        word:   String,
        /// The source line where the error occurred.
        line:   u32,
        /// The source column where the error occurred.
        column: u32,
    },
}

#[allow(clippy::ref_option)]
fn opening_description(expected: &Option<char>) -> String {
    expected.as_ref()
            .map_or_else(|| "any open bracket".to_string(), |open| format!("'{open}'"))
}

impl LexError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> u32 {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::InconsistentDedent { line, .. }
            | Self::UnterminatedString { line, .. }
            | Self::TripleQuotedString { line, .. }
            | Self::UnsupportedPrefix { line, .. }
            | Self::InvalidEscape { line, .. }
            | Self::NonAsciiBytes { line, .. }
            | Self::MismatchedBracket { line, .. }
            | Self::UnclosedBracket { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::NumberTooLarge { line, .. }
            | Self::UnsupportedKeyword { line, .. } => *line,
        }
    }
}
