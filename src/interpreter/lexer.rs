/// Lexer driver.
///
/// Holds the `Lexer` type, which runs the sub-scanners in priority order at
/// every token boundary, and the `tokenize` convenience function.
pub mod core;

/// Mutable scanning state.
///
/// The physical lines of the input, the cursor position, and the
/// indentation and bracket stacks.
pub mod context;

/// Token definitions.
///
/// Declares `Token`, the closed `TokenKind` set, and the keyword table.
pub mod token;

/// Operator and delimiter table.
///
/// A `logos` generated matcher that finds the longest operator or delimiter
/// spelling at the cursor.
pub mod punct;

/// Look-ahead cursor over the token sequence.
///
/// Wraps a `Lexer` with a lazily filled buffer so the parser can peek any
/// number of tokens ahead without consuming them.
pub mod stream;

mod end;
mod indent;
mod name;
mod number;
mod string;

pub use self::{
    core::{LexResult, Lexer, tokenize},
    punct::Punct,
    stream::TokenStream,
    token::{Keyword, Token, TokenKind},
};
