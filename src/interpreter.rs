/// The evaluator module executes AST nodes.
///
/// The evaluator walks the tree statement by statement, applies the
/// operators to runtime values, binds names in an arena of nested scopes and
/// calls builtin and user-defined functions.
///
/// # Responsibilities
/// - Evaluates every AST node kind with an exhaustive match.
/// - Allocates a scope per user function call and releases it on return.
/// - Reports runtime errors such as undefined names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text line by line and produces tokens for
/// names, keywords, literals, operators and delimiters. Leading whitespace is
/// turned into synthetic `INDENT` and `DEDENT` tokens and line ends outside
/// brackets into `NEWLINE` tokens.
///
/// # Responsibilities
/// - Converts the input text into tokens with line and column positions.
/// - Tracks the indentation stack and the open brackets.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens through a look-ahead cursor and builds statements
/// and expressions. Blocks are recovered from the indentation tokens.
///
/// # Responsibilities
/// - Converts tokens into AST nodes following the operator precedence.
/// - Checks that indentation matches the nesting of compound statements.
/// - Reports syntax errors with the offending token and its position.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are `None`, booleans, 64-bit integers, floats, complex numbers,
/// strings and bytes. Conversions between the numeric views, truthiness,
/// equality and the `repr()`/`str()` renderings live here.
pub mod value;
