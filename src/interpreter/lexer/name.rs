use crate::{
    error::LexError,
    interpreter::lexer::{
        core::{LexResult, Lexer},
        token::{Keyword, RESERVED_KEYWORDS, Token, TokenKind},
    },
};

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

impl Lexer {
    /// Scans an identifier or keyword.
    pub(super) fn scan_name(&mut self) -> LexResult<Option<Token>> {
        if !self.context.current().is_some_and(is_name_start) {
            return Ok(None);
        }

        let line = self.context.line();
        let column = self.context.column();
        let start = self.context.column_index;
        while self.context.current().is_some_and(is_name_continue) {
            self.context.bump();
        }
        let word = self.context.slice_from(start);

        if RESERVED_KEYWORDS.contains(&word.as_str()) {
            return Err(LexError::UnsupportedKeyword { word, line, column });
        }

        let kind = Keyword::lookup(&word).map_or_else(|| TokenKind::Identifier(word.clone()),
                                                      TokenKind::Keyword);
        Ok(Some(Token::new(kind, word, line, column)))
    }
}
