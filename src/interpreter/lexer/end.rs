use tracing::debug;

use crate::{
    error::LexError,
    interpreter::lexer::{
        core::{LexResult, Lexer},
        token::{Token, TokenKind},
    },
};

impl Lexer {
    /// Handles everything that ends a logical unit: end of input, comments,
    /// physical newlines and backslash continuations.
    ///
    /// # Returns
    /// `true` when the cursor was on one of these, whether or not a token was
    /// queued.
    pub(super) fn scan_end(&mut self) -> LexResult<bool> {
        if self.context.at_eof() {
            self.finish()?;
            return Ok(true);
        }

        match self.context.current() {
            Some('#') => {
                while !matches!(self.context.current(), Some('\n') | None) {
                    self.context.bump();
                }
                Ok(true)
            },
            Some('\n') | None => {
                if self.context.bracket_stack.is_empty() {
                    let token = Token::new(TokenKind::Newline,
                                           "\n".to_string(),
                                           self.context.line(),
                                           self.context.column());
                    self.pending.push_back(token);
                    self.context.at_line_start = true;
                }
                self.context.next_line();
                Ok(true)
            },
            Some('\\') if self.context.peek(1) == Some('\n') => {
                self.context.next_line();
                Ok(true)
            },
            Some('\\') => Err(LexError::InvalidCharacter { ch:     '\\',
                                                          line:   self.context.line(),
                                                          column: self.context.column(), }),
            Some(_) => Ok(false),
        }
    }

    /// Closes the token sequence: every open indentation level gets a
    /// `DEDENT`, followed by the single end marker.
    fn finish(&mut self) -> LexResult<()> {
        if let Some(open) = self.context.bracket_stack.last() {
            return Err(LexError::UnclosedBracket { bracket: open.bracket,
                                                   line:    open.line, });
        }

        let line = self.context.line();
        while self.context.indent_stack.len() > 1 {
            self.context.indent_stack.pop();
            debug!(line, depth = self.context.indent_stack.len() - 1, "dedent at end of input");
            self.pending
                .push_back(Token::synthetic(TokenKind::Dedent, line, 1));
        }
        let end = self.end_marker();
        self.pending.push_back(end);
        self.finished = true;
        Ok(())
    }
}
