/// Lexical errors.
///
/// Raised by the tokenizer for characters and constructs it cannot turn into
/// tokens: stray characters, bad indentation, broken string or number
/// literals and unbalanced brackets.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream. Parsing stops at the first error; there is no recovery.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined names, wrong call arity or operators applied to values of the
/// wrong type.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a tokenize / parse / execute run.
///
/// All three kinds are fatal to the current run and propagate straight to
/// the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The tokenizer rejected the source text.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A script file could not be read.
    #[error("Failed to read '{path}': {details}")]
    Io {
        /// The path of the script.
        path:    String,
        /// The reason reported by the operating system.
        details: String,
    },
}
