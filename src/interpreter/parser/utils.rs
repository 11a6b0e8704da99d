use crate::{
    error::{Error, ParseError},
    interpreter::{
        lexer::{Punct, Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// The error for a token that does not fit the grammar at its position.
///
/// The end marker turns into `UnexpectedEndOfInput`.
pub fn unexpected(token: &Token, expected: Option<&str>) -> Error {
    let expected = expected.map(str::to_string);
    match token.kind {
        TokenKind::EndMarker => ParseError::UnexpectedEndOfInput { expected,
                                                                   line: token.line }.into(),
        _ => ParseError::UnexpectedToken { found: token.describe(),
                                           expected,
                                           line: token.line,
                                           column: token.column }.into(),
    }
}

impl Parser {
    /// Consumes the next token, which must be the given operator or
    /// delimiter.
    pub(in crate::interpreter::parser) fn expect_punct(&mut self,
                                                       punct: Punct)
                                                       -> ParseResult<Token> {
        let token = self.tokens.advance()?;
        if token.kind.is_punct(punct) {
            Ok(token)
        } else {
            Err(unexpected(&token, Some(&format!("'{punct}'"))))
        }
    }

    /// Consumes the next token if it is the given operator or delimiter.
    pub(in crate::interpreter::parser) fn eat_punct(&mut self, punct: Punct) -> ParseResult<bool> {
        if self.tokens.peek_kind(0)?.is_punct(punct) {
            self.tokens.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Parses a plain identifier and returns its name.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<String> {
        let token = self.tokens.advance()?;
        match token.kind {
            TokenKind::Identifier(name) => Ok(name),
            _ => Err(unexpected(&token, Some("a name"))),
        }
    }

    /// Parses a comma-separated list of items up to and including a closing
    /// delimiter.
    ///
    /// An immediately encountered closing delimiter produces an empty list,
    /// and a trailing comma before it is accepted.
    ///
    /// Grammar (simplified): `list := (item ("," item)* ","?)? closing`
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        closing: Punct,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        loop {
            if self.eat_punct(closing)? {
                return Ok(items);
            }
            items.push(parse_item(self)?);

            let token = self.tokens.advance()?;
            if token.kind.is_punct(Punct::Comma) {
                continue;
            }
            if token.kind.is_punct(closing) {
                return Ok(items);
            }
            return Err(unexpected(&token, Some(&format!("',' or '{closing}'"))));
        }
    }
}
