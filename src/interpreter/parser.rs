/// Parser state and the program entry point.
///
/// Holds the `Parser` type, which owns the token cursor and the suite depth
/// counter, and the top-level `parse` loop.
pub mod core;

/// Statement parsing.
///
/// Suites, `if`/`elif`/`else` chains, `while` loops, function definitions,
/// assignments and expression statements.
pub mod statement;

/// Binary operator parsing.
///
/// One method per precedence level from `or` down to the multiplicative
/// operators. Every level folds to the left.
pub mod binary;

/// Unary operators, exponentiation and atoms.
///
/// Handles the prefix operators, the right-associative `**`, literals, names,
/// calls and parenthesized expressions.
pub mod unary;

/// Helpers shared by the parsing methods.
///
/// Token expectations, error construction and comma-separated lists.
pub mod utils;

pub use self::core::{ParseResult, Parser};
