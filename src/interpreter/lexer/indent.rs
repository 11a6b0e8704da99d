use tracing::debug;

use crate::{
    error::LexError,
    interpreter::lexer::{
        core::{LexResult, Lexer},
        token::{Token, TokenKind},
    },
};

impl Lexer {
    /// Measures the indentation of the next logical line and queues the
    /// matching `INDENT` or `DEDENT` tokens.
    ///
    /// Blank and comment-only lines are skipped entirely. Spaces count one
    /// column and tabs advance to the next multiple of the tab size; a form
    /// feed resets the count.
    pub(super) fn scan_indentation(&mut self) -> LexResult<()> {
        let width = loop {
            if self.context.at_eof() {
                return Ok(());
            }

            let mut width = 0;
            while let Some(ch) = self.context.current() {
                match ch {
                    ' ' => width += 1,
                    '\t' => width = (width / self.tab_size + 1) * self.tab_size,
                    '\x0c' => width = 0,
                    _ => break,
                }
                self.context.bump();
            }

            if matches!(self.context.current(), Some('\n' | '#') | None) {
                self.context.next_line();
                continue;
            }
            break width;
        };

        let line = self.context.line();
        let column = self.context.column();
        let current = self.context.current_indent();

        if width > current {
            self.context.indent_stack.push(width);
            debug!(line, width, depth = self.context.indent_stack.len() - 1, "indent");
            self.pending
                .push_back(Token::synthetic(TokenKind::Indent, line, column));
        } else if width < current {
            while self.context.current_indent() > width {
                self.context.indent_stack.pop();
                debug!(line, width, depth = self.context.indent_stack.len() - 1, "dedent");
                self.pending
                    .push_back(Token::synthetic(TokenKind::Dedent, line, column));
            }
            let expected = self.context.current_indent();
            if expected != width {
                return Err(LexError::InconsistentDedent { width,
                                                          expected,
                                                          line });
            }
        }
        Ok(())
    }
}
