use std::collections::VecDeque;

use tracing::trace;

use crate::{
    config::DEFAULT_TAB_SIZE,
    error::LexError,
    interpreter::lexer::{
        context::LexerContext,
        token::{Token, TokenKind},
    },
};

/// Result type used throughout the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// An indentation and bracket aware tokenizer.
///
/// Every call to [`Lexer::next_token`] runs the sub-scanners in a fixed
/// priority order: indentation (only at the start of a logical line), end of
/// logical unit, string, name, number, and finally operator or delimiter.
/// A single scan may queue several tokens, for example one `DEDENT` per
/// closed indentation level; they are handed out one at a time.
#[derive(Debug, Clone)]
pub struct Lexer {
    pub(super) context:  LexerContext,
    pub(super) tab_size: usize,
    pub(super) pending:  VecDeque<Token>,
    pub(super) finished: bool,
    exhausted:           bool,
}

impl Lexer {
    /// Creates a lexer over `source` using the default tab size.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self::with_tab_size(source, DEFAULT_TAB_SIZE)
    }

    /// Creates a lexer over `source`; tabs advance indentation to the next
    /// multiple of `tab_size`.
    #[must_use]
    pub fn with_tab_size(source: &str, tab_size: usize) -> Self {
        Self { context:   LexerContext::new(source),
               tab_size:  tab_size.max(1),
               pending:   VecDeque::new(),
               finished:  false,
               exhausted: false, }
    }

    /// Produces the next token.
    ///
    /// Once the end marker has been produced every further call returns
    /// another end marker.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("x\n");
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier("x".into()));
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndMarker);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndMarker);
    /// ```
    pub fn next_token(&mut self) -> LexResult<Token> {
        if self.pending.is_empty() {
            if self.finished {
                return Ok(self.end_marker());
            }
            self.scan()?;
        }

        let token = self.pending.pop_front().unwrap_or_else(|| self.end_marker());
        trace!(kind = %token.kind, line = token.line, column = token.column, "token");
        Ok(token)
    }

    pub(super) fn end_marker(&self) -> Token {
        Token::synthetic(TokenKind::EndMarker, self.context.line(), 1)
    }

    /// Runs the sub-scanners until at least one token is queued.
    fn scan(&mut self) -> LexResult<()> {
        while self.pending.is_empty() {
            if self.context.at_line_start {
                self.context.at_line_start = false;
                self.scan_indentation()?;
                continue;
            }

            self.skip_whitespace();

            if self.scan_end()? {
                continue;
            }

            let token = match self.scan_string()? {
                Some(token) => token,
                None => match self.scan_name()? {
                    Some(token) => token,
                    None => match self.scan_number()? {
                        Some(token) => token,
                        None => self.scan_punct()?,
                    },
                },
            };
            self.pending.push_back(token);
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.context.current(), Some(' ' | '\t' | '\x0c')) {
            self.context.bump();
        }
    }
}

impl Iterator for Lexer {
    type Item = LexResult<Token>;

    /// Yields tokens up to and including the end marker, or up to the first
    /// error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.next_token();
        if !matches!(&result, Ok(token) if token.kind != TokenKind::EndMarker) {
            self.exhausted = true;
        }
        Some(result)
    }
}

/// Drains a lexer over `source` into a token vector ending in exactly one end
/// marker.
///
/// # Errors
/// Returns the first `LexError` encountered.
///
/// # Example
/// ```
/// use adder::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("if x:\n    y\n", 8).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|token| &token.kind).collect();
/// assert_eq!(kinds.iter().filter(|kind| ***kind == TokenKind::Indent).count(), 1);
/// assert_eq!(kinds.iter().filter(|kind| ***kind == TokenKind::Dedent).count(), 1);
/// assert_eq!(kinds.last(), Some(&&TokenKind::EndMarker));
/// ```
pub fn tokenize(source: &str, tab_size: usize) -> LexResult<Vec<Token>> {
    Lexer::with_tab_size(source, tab_size).collect()
}
