use crate::{
    ast::Node,
    error::{Error, ParseError},
    interpreter::lexer::{Lexer, TokenKind, TokenStream},
};

/// Result type used throughout the parser.
///
/// Lexical errors surface while the cursor pulls tokens, so the error side is
/// the crate-level [`Error`].
pub type ParseResult<T> = Result<T, Error>;

/// A recursive-descent parser over a [`TokenStream`].
///
/// Statements are driven by the `NEWLINE`, `INDENT` and `DEDENT` tokens of
/// the lexer. `depth` counts the suites currently open; it must return to
/// zero by the end of input.
#[derive(Debug, Clone)]
pub struct Parser {
    pub(super) tokens: TokenStream,
    pub(super) depth:  usize,
}

impl Parser {
    /// Creates a parser over `source` with the default tab size.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self::from_stream(TokenStream::new(Lexer::new(source)))
    }

    /// Creates a parser that reads from an existing token stream.
    #[must_use]
    pub const fn from_stream(tokens: TokenStream) -> Self {
        Self { tokens, depth: 0 }
    }

    /// Parses the whole program.
    ///
    /// The result is always a [`Node::Block`] holding the top-level
    /// statements in source order. Parsing stops at the first error.
    ///
    /// # Example
    /// ```
    /// use adder::{ast::Node, interpreter::parser::Parser};
    ///
    /// let program = Parser::new("x = 1\nif x:\n    y = 2\n").parse().unwrap();
    /// let Node::Block { statements, .. } = program else { panic!() };
    /// assert_eq!(statements.len(), 2);
    /// ```
    pub fn parse(&mut self) -> ParseResult<Node> {
        let mut statements = Vec::new();

        loop {
            let token = self.tokens.peek(0)?.clone();
            match token.kind {
                TokenKind::EndMarker => break,
                TokenKind::Dedent if self.depth == 0 => {
                    return Err(ParseError::UnexpectedDedent { line: token.line }.into());
                },
                _ => statements.extend(self.parse_statement()?),
            }
        }

        Ok(Node::Block { statements,
                         line: 1 })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, `or`, and descends through the precedence
    /// hierarchy.
    ///
    /// Grammar: `expression := or_test`
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_or()
    }
}
