use std::collections::VecDeque;

use crate::interpreter::lexer::{
    core::{LexResult, Lexer},
    token::{Token, TokenKind},
};

/// A look-ahead cursor over the tokens of a [`Lexer`].
///
/// Tokens are pulled from the lexer only when a peek or advance needs them.
/// [`TokenStream::peek`] never moves the cursor; [`TokenStream::advance`]
/// consumes exactly one token. Because the lexer repeats its end marker, the
/// cursor can be peeked past the end of input indefinitely.
#[derive(Debug, Clone)]
pub struct TokenStream {
    lexer:  Lexer,
    buffer: VecDeque<Token>,
}

impl TokenStream {
    /// Wraps a lexer.
    #[must_use]
    pub const fn new(lexer: Lexer) -> Self {
        Self { lexer,
               buffer: VecDeque::new() }
    }

    fn fill(&mut self, count: usize) -> LexResult<()> {
        while self.buffer.len() < count {
            let token = self.lexer.next_token()?;
            self.buffer.push_back(token);
        }
        Ok(())
    }

    /// Returns the token `k` positions ahead of the cursor (`0` is the next
    /// token) without consuming anything.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::lexer::{Lexer, TokenKind, TokenStream};
    ///
    /// let mut stream = TokenStream::new(Lexer::new("a = 1\n"));
    /// assert_eq!(stream.peek(1).unwrap().text, "=");
    /// assert_eq!(stream.peek(0).unwrap().text, "a");
    /// assert_eq!(stream.advance().unwrap().text, "a");
    /// assert_eq!(stream.peek(0).unwrap().text, "=");
    /// ```
    pub fn peek(&mut self, k: usize) -> LexResult<&Token> {
        self.fill(k + 1)?;
        Ok(&self.buffer[k])
    }

    /// The kind of the token `k` positions ahead.
    pub fn peek_kind(&mut self, k: usize) -> LexResult<&TokenKind> {
        self.peek(k).map(|token| &token.kind)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> LexResult<Token> {
        self.fill(1)?;
        Ok(self.buffer
               .pop_front()
               .unwrap_or_else(|| self.lexer.end_marker()))
    }
}
