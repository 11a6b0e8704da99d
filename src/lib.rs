//! # adder
//!
//! adder is an interpreter for a small, indentation-based scripting language
//! that looks like Python. Source text goes through three stages: a tokenizer
//! that emits `INDENT`, `DEDENT` and `NEWLINE` tokens, a recursive-descent
//! parser that builds a syntax tree, and a tree-walking evaluator with nested
//! scopes.
//!
//! ```
//! use adder::{Config, interpreter::value::core::Value};
//!
//! let source = "def double(x):\n    y = x * 2\n\nresult = 21\nresult = result * 2\n";
//! let evaluator = adder::execute(source, &Config::default()).unwrap();
//! assert_eq!(evaluator.global("result"), Some(&Value::Int(42)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{Lexer, Token, TokenStream},
        parser::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one closed node type for statements and expressions.
/// - Attaches the source line to every node for error reporting.
/// - Declares the unary and binary operator sets.
pub mod ast;
/// Interpreter settings.
///
/// Tab size used for indentation, the name of the result variable checked by
/// script tests, the default script directory and the debug switch.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. Each
/// carries the source line (and column where one is known) so messages point
/// at the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps them in the crate-level `Error` with `From` conversions.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and formatting.
///
/// Conversions between `i64` and `f64` that never lose data silently, and
/// the rendering of floats the way scripts print them.
pub mod util;

pub use crate::{config::Config, error::Error};

/// Tokenizes `source` completely.
///
/// The returned list ends with the end marker, preceded by one `DEDENT` for
/// every indentation level still open.
///
/// # Example
/// ```
/// use adder::{Config, interpreter::lexer::TokenKind};
///
/// let tokens = adder::tokenize("if x:\n    y\n", &Config::default()).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|token| &token.kind).collect();
/// assert!(kinds.contains(&&TokenKind::Indent));
/// assert_eq!(kinds.last(), Some(&&TokenKind::EndMarker));
/// ```
pub fn tokenize(source: &str, config: &Config) -> Result<Vec<Token>, Error> {
    Ok(interpreter::lexer::tokenize(source, config.tab_size)?)
}

/// Parses `source` into the [`Node::Block`] of the whole program.
///
/// # Example
/// ```
/// use adder::{Config, ast::Node};
///
/// let program = adder::parse("a = 1\nb = a + 1\n", &Config::default()).unwrap();
/// assert!(matches!(program, Node::Block { ref statements, .. } if statements.len() == 2));
/// ```
pub fn parse(source: &str, config: &Config) -> Result<Node, Error> {
    let lexer = Lexer::with_tab_size(source, config.tab_size);
    Parser::from_stream(TokenStream::new(lexer)).parse()
}

/// Parses and executes `source`, returning the evaluator so the final global
/// scope can be inspected.
///
/// Output of `print` goes to standard output.
pub fn execute(source: &str, config: &Config) -> Result<Evaluator, Error> {
    let program = parse(source, config)?;
    let mut evaluator = Evaluator::new();
    evaluator.execute(&program)?;
    Ok(evaluator)
}

/// Executes `source` and reports the truthiness of its result variable.
///
/// The variable is named by [`Config::result_name`] (`result` by default). A
/// script that never binds it reports `false`.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use adder::{Config, get_result};
///
/// let config = Config::default();
/// assert_eq!(get_result("result = 2 + 2 == 4\n", &config).unwrap(), true);
/// assert_eq!(get_result("x = 1\n", &config).unwrap(), false);
///
/// // 'y' is not defined
/// assert!(get_result("result = y + 1\n", &config).is_err());
/// ```
pub fn get_result(source: &str, config: &Config) -> Result<bool, Error> {
    let evaluator = execute(source, config)?;
    let passed = evaluator.global(&config.result_name)
                          .is_some_and(interpreter::value::core::Value::is_truthy);
    debug!(result = %config.result_name, passed, "script finished");
    Ok(passed)
}

/// Collects the `*.py` scripts below `dir` in a stable order.
///
/// Unreadable entries are skipped.
#[must_use]
pub fn script_paths(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> =
        WalkDir::new(dir).into_iter()
                         .filter_map(Result::ok)
                         .filter(|entry| entry.file_type().is_file())
                         .map(walkdir::DirEntry::into_path)
                         .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
                         .collect();
    paths.sort();
    info!(dir = %dir.display(), count = paths.len(), "collected scripts");
    paths
}
