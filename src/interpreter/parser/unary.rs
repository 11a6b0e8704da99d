use crate::{
    ast::{BinaryOperator, LiteralValue, Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Punct, TokenKind},
        parser::{
            core::{ParseResult, Parser},
            utils::unexpected,
        },
    },
};

const fn unary_operator(kind: &TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Operator(Punct::Plus) => Some(UnaryOperator::Plus),
        TokenKind::Operator(Punct::Minus) => Some(UnaryOperator::Negate),
        TokenKind::Operator(Punct::Tilde) => Some(UnaryOperator::Invert),
        TokenKind::Keyword(Keyword::Not) => Some(UnaryOperator::Not),
        _ => None,
    }
}

impl Parser {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `+` (numeric identity)
    /// - `-` (numeric negation)
    /// - `~` (bitwise complement)
    /// - `not` (logical negation)
    ///
    /// Unary operators are right-associative, so `-~x` is parsed as
    /// `-(~x)`. Without a prefix operator the power level is parsed.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-" | "~" | "not") unary
    ///            | power
    /// ```
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Node> {
        let token = self.tokens.peek(0)?;
        let line = token.line;
        let Some(op) = unary_operator(&token.kind) else {
            return self.parse_power();
        };

        self.tokens.advance()?;
        let operand = self.parse_unary()?;
        Ok(Node::UnaryOp { op,
                           operand: Box::new(operand),
                           line })
    }

    /// Parses exponentiation.
    ///
    /// `**` is right-associative and its right operand is a unary
    /// expression, so `2 ** -1` is valid and `-2 ** 2` negates the power.
    ///
    /// Grammar: `power := atom ("**" unary)?`
    fn parse_power(&mut self) -> ParseResult<Node> {
        let base = self.parse_atom()?;

        let token = self.tokens.peek(0)?;
        if token.kind.is_punct(Punct::DoubleStar) {
            let line = token.line;
            self.tokens.advance()?;
            let exponent = self.parse_unary()?;
            return Ok(Node::BinaryOp { op: BinaryOperator::Pow,
                                       left: Box::new(base),
                                       right: Box::new(exponent),
                                       line });
        }

        Ok(base)
    }

    /// Parses an atom.
    ///
    /// Atoms are:
    /// - names, and calls when the name is directly followed by `(`
    /// - number, string and bytes literals
    /// - `True`, `False` and `None`
    /// - parenthesized expressions
    ///
    /// # Errors
    /// `UnexpectedToken` naming the token when nothing here can start an
    /// expression, or `UnexpectedEndOfInput` at the end of the input.
    fn parse_atom(&mut self) -> ParseResult<Node> {
        let token = self.tokens.advance()?;
        let line = token.line;

        match token.kind {
            TokenKind::Identifier(name) => {
                if self.eat_punct(Punct::LeftParen)? {
                    let arguments =
                        self.parse_comma_separated(Punct::RightParen, Self::parse_expression)?;
                    return Ok(Node::Call { callee: name,
                                           arguments,
                                           line });
                }
                Ok(Node::Identifier { name, line })
            },
            TokenKind::Number(value) => Ok(Node::Literal { value, line }),
            TokenKind::Str(text) => self.parse_adjacent_literals(LiteralValue::Str(text), line),
            TokenKind::Bytes(bytes) => {
                self.parse_adjacent_literals(LiteralValue::Bytes(bytes), line)
            },
            TokenKind::Keyword(Keyword::True) => Ok(Node::Literal { value: LiteralValue::Bool(true),
                                                                    line }),
            TokenKind::Keyword(Keyword::False) => {
                Ok(Node::Literal { value: LiteralValue::Bool(false),
                                   line })
            },
            TokenKind::Keyword(Keyword::None) => Ok(Node::Literal { value: LiteralValue::None,
                                                                    line }),
            TokenKind::Delimiter(Punct::LeftParen) => {
                let inner = self.parse_expression()?;
                self.expect_punct(Punct::RightParen)?;
                Ok(inner)
            },
            _ => Err(unexpected(&token, Some("an expression"))),
        }
    }

    /// Concatenates string literals that directly follow one another, as in
    /// `"ab" "cd"`. Text and bytes literals cannot be mixed.
    fn parse_adjacent_literals(&mut self, first: LiteralValue, line: u32) -> ParseResult<Node> {
        let mut value = first;

        loop {
            let token = self.tokens.peek(0)?;
            match (&mut value, &token.kind) {
                (LiteralValue::Str(text), TokenKind::Str(more)) => text.push_str(more),
                (LiteralValue::Bytes(bytes), TokenKind::Bytes(more)) => {
                    bytes.extend_from_slice(more);
                },
                (_, TokenKind::Str(_) | TokenKind::Bytes(_)) => {
                    return Err(ParseError::MixedStringConcatenation { line:   token.line,
                                                                      column: token.column, }.into());
                },
                _ => break,
            }
            self.tokens.advance()?;
        }

        Ok(Node::Literal { value, line })
    }
}
