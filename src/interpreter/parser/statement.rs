use tracing::trace;

use crate::{
    ast::{BinaryOperator, FunctionDef, Node},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Punct, TokenKind},
        parser::{
            core::{ParseResult, Parser},
            utils::unexpected,
        },
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - an `if`, `while` or `def` compound statement,
    /// - a line of simple statements separated by `;`,
    /// - a bare `NEWLINE`, which yields [`Node::NoOp`].
    ///
    /// A line of simple statements produces one node per statement, so the
    /// result is a list.
    pub fn parse_statement(&mut self) -> ParseResult<Vec<Node>> {
        let token = self.tokens.peek(0)?.clone();
        trace!(line = token.line, depth = self.depth, token = %token.kind, "statement");

        match token.kind {
            TokenKind::Keyword(Keyword::If) => {
                self.tokens.advance()?;
                Ok(vec![self.parse_if(token.line)?])
            },
            TokenKind::Keyword(Keyword::While) => {
                self.tokens.advance()?;
                Ok(vec![self.parse_while(token.line)?])
            },
            TokenKind::Keyword(Keyword::Def) => {
                self.tokens.advance()?;
                Ok(vec![self.parse_function_definition(token.line)?])
            },
            TokenKind::Newline => {
                self.tokens.advance()?;
                Ok(vec![Node::NoOp { line: token.line }])
            },
            TokenKind::Indent => Err(ParseError::UnexpectedIndent { line: token.line }.into()),
            TokenKind::Dedent => Err(ParseError::UnexpectedDedent { line: token.line }.into()),
            _ => self.parse_simple_statements(),
        }
    }

    /// Parses simple statements up to the end of the logical line.
    ///
    /// Grammar: `simple_line := simple (";" simple)* ";"? NEWLINE`
    fn parse_simple_statements(&mut self) -> ParseResult<Vec<Node>> {
        let mut statements = vec![self.parse_simple_statement()?];

        loop {
            let token = self.tokens.advance()?;
            match token.kind {
                TokenKind::Newline | TokenKind::EndMarker => break,
                TokenKind::Delimiter(Punct::Semicolon) => {
                    if matches!(self.tokens.peek_kind(0)?,
                                TokenKind::Newline | TokenKind::EndMarker)
                    {
                        continue;
                    }
                    statements.push(self.parse_simple_statement()?);
                },
                _ => return Err(unexpected(&token, Some("NEWLINE"))),
            }
        }

        Ok(statements)
    }

    /// Parses one simple statement: `pass`, an assignment, an augmented
    /// assignment or an expression.
    ///
    /// Statements opened by a keyword the interpreter does not execute are
    /// rejected with `UnsupportedStatement`. An expression followed by `=`
    /// is an invalid assignment target.
    fn parse_simple_statement(&mut self) -> ParseResult<Node> {
        let token = self.tokens.peek(0)?.clone();

        match &token.kind {
            TokenKind::Keyword(Keyword::Pass) => {
                self.tokens.advance()?;
                return Ok(Node::NoOp { line: token.line });
            },
            TokenKind::Keyword(keyword @ (Keyword::Return
                                          | Keyword::For
                                          | Keyword::From
                                          | Keyword::Import
                                          | Keyword::Raise)) => {
                return Err(ParseError::UnsupportedStatement { keyword: keyword.as_str()
                                                                              .to_string(),
                                                              line:    token.line,
                                                              column:  token.column, }.into());
            },
            TokenKind::Keyword(Keyword::If | Keyword::While | Keyword::Def | Keyword::Elif
                               | Keyword::Else) => {
                return Err(unexpected(&token, None));
            },
            TokenKind::Identifier(name) => {
                let next = self.tokens.peek_kind(1)?.clone();
                if next.is_punct(Punct::Assign) {
                    self.tokens.advance()?;
                    self.tokens.advance()?;
                    let value = self.parse_expression()?;
                    return Ok(Node::Assign { target: name.clone(),
                                             value:  Box::new(value),
                                             line:   token.line, });
                }
                if let TokenKind::Delimiter(punct) = next
                   && let Some(op) = augmented_operator(punct)
                {
                    self.tokens.advance()?;
                    let operator = self.tokens.advance()?;
                    let value = self.parse_expression()?;
                    let current = Node::Identifier { name: name.clone(),
                                                     line: token.line };
                    let value = Node::BinaryOp { op,
                                                 left: Box::new(current),
                                                 right: Box::new(value),
                                                 line: operator.line };
                    return Ok(Node::Assign { target: name.clone(),
                                             value:  Box::new(value),
                                             line:   token.line, });
                }
            },
            _ => {},
        }

        let expression = self.parse_expression()?;
        if let TokenKind::Delimiter(punct) = self.tokens.peek_kind(0)?
           && (*punct == Punct::Assign || augmented_operator(*punct).is_some())
        {
            return Err(ParseError::InvalidAssignmentTarget { line: token.line }.into());
        }

        Ok(expression)
    }

    /// Parses a suite: the body of a compound statement.
    ///
    /// The suite is either the simple statements on the rest of the line,
    /// or `NEWLINE INDENT statement+ DEDENT`. The opening `:` must already
    /// be consumed.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the input ends before the indented block.
    /// - `UnexpectedToken` if the line break is not followed by an indent.
    pub(in crate::interpreter::parser) fn parse_suite(&mut self, line: u32) -> ParseResult<Node> {
        if !matches!(self.tokens.peek_kind(0)?, TokenKind::Newline) {
            let statements = self.parse_simple_statements()?;
            return Ok(Node::Block { statements, line });
        }
        self.tokens.advance()?;

        let indent = self.tokens.advance()?;
        if indent.kind != TokenKind::Indent {
            return Err(unexpected(&indent, Some("an indented block")));
        }

        self.depth += 1;
        let mut statements = Vec::new();
        loop {
            let token = self.tokens.peek(0)?.clone();
            match token.kind {
                TokenKind::Dedent => {
                    self.tokens.advance()?;
                    break;
                },
                TokenKind::EndMarker => {
                    return Err(unexpected(&token, Some("DEDENT")));
                },
                _ => statements.extend(self.parse_statement()?),
            }
        }
        self.depth -= 1;

        Ok(Node::Block { statements, line })
    }

    /// Parses an `if` statement with its `elif` and `else` clauses.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition>: <suite>
    ///     elif <condition>: <suite>
    ///     else: <suite>
    /// ```
    /// Each `elif` becomes the else branch of the conditional before it, so
    /// the chain is a right-leaning tree of [`Node::If`]. A missing `else` is
    /// a [`Node::NoOp`].
    fn parse_if(&mut self, line: u32) -> ParseResult<Node> {
        let condition = self.parse_expression()?;
        let colon = self.expect_punct(Punct::Colon)?;
        let then_branch = self.parse_suite(colon.line)?;

        let next = self.tokens.peek(0)?.clone();
        let else_branch = match next.kind {
            TokenKind::Keyword(Keyword::Elif) => {
                self.tokens.advance()?;
                self.parse_if(next.line)?
            },
            TokenKind::Keyword(Keyword::Else) => {
                self.tokens.advance()?;
                let colon = self.expect_punct(Punct::Colon)?;
                self.parse_suite(colon.line)?
            },
            _ => Node::NoOp { line },
        };

        Ok(Node::If { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch: Box::new(else_branch),
                      line })
    }

    /// Parses `while <condition>: <suite>`.
    fn parse_while(&mut self, line: u32) -> ParseResult<Node> {
        let condition = self.parse_expression()?;
        let colon = self.expect_punct(Punct::Colon)?;
        let body = self.parse_suite(colon.line)?;

        Ok(Node::While { condition: Box::new(condition),
                         body: Box::new(body),
                         line })
    }

    /// Parses a function definition.
    ///
    /// Syntax: `def <name>(<param>, ...) [-> <annotation>]: <suite>`
    ///
    /// Each parameter is a name with an optional `: <annotation>` and an
    /// optional `= <default>`. Annotations and defaults are parsed and then
    /// dropped. A trailing comma is allowed.
    fn parse_function_definition(&mut self, line: u32) -> ParseResult<Node> {
        let name = self.parse_identifier()?;
        self.expect_punct(Punct::LeftParen)?;
        let params = self.parse_comma_separated(Punct::RightParen, Self::parse_parameter)?;

        if self.eat_punct(Punct::Arrow)? {
            self.parse_expression()?;
        }
        let colon = self.expect_punct(Punct::Colon)?;
        let body = self.parse_suite(colon.line)?;

        Ok(Node::FunctionDef(FunctionDef { name,
                                           params,
                                           body: Box::new(body),
                                           line }))
    }

    fn parse_parameter(&mut self) -> ParseResult<String> {
        let name = self.parse_identifier()?;
        if self.eat_punct(Punct::Colon)? {
            self.parse_expression()?;
        }
        if self.eat_punct(Punct::Assign)? {
            self.parse_expression()?;
        }
        Ok(name)
    }
}

/// The binary operator behind an augmented assignment delimiter.
const fn augmented_operator(punct: Punct) -> Option<BinaryOperator> {
    let op = match punct {
        Punct::PlusAssign => BinaryOperator::Add,
        Punct::MinusAssign => BinaryOperator::Sub,
        Punct::StarAssign => BinaryOperator::Mul,
        Punct::SlashAssign => BinaryOperator::Div,
        Punct::DoubleSlashAssign => BinaryOperator::FloorDiv,
        Punct::PercentAssign => BinaryOperator::Mod,
        Punct::AmpersandAssign => BinaryOperator::BitAnd,
        Punct::PipeAssign => BinaryOperator::BitOr,
        Punct::CaretAssign => BinaryOperator::BitXor,
        Punct::RightShiftAssign => BinaryOperator::RightShift,
        Punct::LeftShiftAssign => BinaryOperator::LeftShift,
        Punct::DoubleStarAssign => BinaryOperator::Pow,
        _ => return None,
    };
    Some(op)
}
