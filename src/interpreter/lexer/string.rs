use crate::{
    error::LexError,
    interpreter::lexer::{
        core::{LexResult, Lexer},
        token::{Token, TokenKind},
    },
};

/// Characters that may appear in a string prefix.
const PREFIX_CHARS: &str = "rRbBuUfF";

impl Lexer {
    /// Scans a string or bytes literal, including its optional prefix.
    ///
    /// # Returns
    /// `None` when the cursor is not on a string start, so the name scanner
    /// can take words like `rb` or `bar`.
    pub(super) fn scan_string(&mut self) -> LexResult<Option<Token>> {
        let mut prefix_len = 0;
        while prefix_len < 2
              && self.context
                     .peek(prefix_len)
                     .is_some_and(|ch| PREFIX_CHARS.contains(ch))
        {
            prefix_len += 1;
        }

        let Some(quote) = self.context.peek(prefix_len).filter(|ch| matches!(ch, '\'' | '"')) else {
            return Ok(None);
        };

        let line = self.context.line();
        let column = self.context.column();
        let prefix: String = (0..prefix_len).filter_map(|offset| self.context.peek(offset))
                                            .collect();
        let lowered = prefix.to_ascii_lowercase();

        if lowered.contains('f') {
            return Err(LexError::UnsupportedPrefix { prefix, line, column });
        }
        if !matches!(lowered.as_str(), "" | "r" | "u" | "b" | "rb" | "br") {
            return Ok(None);
        }
        if self.context.peek(prefix_len + 1) == Some(quote)
           && self.context.peek(prefix_len + 2) == Some(quote)
        {
            return Err(LexError::TripleQuotedString { line, column });
        }

        let raw = lowered.contains('r');
        let bytes = lowered.contains('b');
        let start = self.context.column_index;
        for _ in 0..=prefix_len {
            self.context.bump();
        }

        let mut units: Vec<u32> = Vec::new();
        loop {
            match self.context.current() {
                None | Some('\n') => return Err(LexError::UnterminatedString { line, column }),
                Some(ch) if ch == quote => {
                    self.context.bump();
                    break;
                },
                Some('\\') if raw => {
                    units.push(u32::from('\\'));
                    self.context.bump();
                    if let Some(next) = self.context.current().filter(|ch| *ch != '\n') {
                        self.check_bytes_char(next, bytes)?;
                        units.push(u32::from(next));
                        self.context.bump();
                    }
                },
                Some('\\') => self.scan_escape(bytes, &mut units)?,
                Some(ch) => {
                    self.check_bytes_char(ch, bytes)?;
                    units.push(u32::from(ch));
                    self.context.bump();
                },
            }
        }

        let text = self.context.slice_from(start);
        let kind = if bytes {
            // Every unit is at most 0xFF: characters are ASCII and escapes are masked.
            TokenKind::Bytes(units.iter()
                                  .map(|unit| u8::try_from(*unit).unwrap_or(u8::MAX))
                                  .collect())
        } else {
            let mut decoded = String::with_capacity(units.len());
            for unit in units {
                let Some(ch) = char::from_u32(unit) else {
                    return Err(LexError::InvalidEscape { sequence: format!("\\U{unit:08x}"),
                                                         line,
                                                         column });
                };
                decoded.push(ch);
            }
            TokenKind::Str(decoded)
        };
        Ok(Some(Token::new(kind, text, line, column)))
    }

    fn check_bytes_char(&self, ch: char, bytes: bool) -> LexResult<()> {
        if bytes && !ch.is_ascii() {
            return Err(LexError::NonAsciiBytes { line:   self.context.line(),
                                                 column: self.context.column(), });
        }
        Ok(())
    }

    /// Decodes one backslash escape at the cursor into `units`.
    ///
    /// Unknown escapes are kept verbatim, backslash included. `\u` and `\U`
    /// are only escapes in text strings.
    fn scan_escape(&mut self, bytes: bool, units: &mut Vec<u32>) -> LexResult<()> {
        let line = self.context.line();
        let column = self.context.column();
        self.context.bump();

        let Some(escape) = self.context.current().filter(|ch| *ch != '\n') else {
            return Err(LexError::UnterminatedString { line, column });
        };
        self.context.bump();

        let simple = match escape {
            '\\' => Some('\\'),
            '\'' => Some('\''),
            '"' => Some('"'),
            'a' => Some('\x07'),
            'b' => Some('\x08'),
            'f' => Some('\x0c'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'v' => Some('\x0b'),
            _ => None,
        };
        if let Some(ch) = simple {
            units.push(u32::from(ch));
            return Ok(());
        }

        match escape {
            '0'..='7' => {
                let mut value = escape.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.context.current().and_then(|ch| ch.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            self.context.bump();
                        },
                        None => break,
                    }
                }
                units.push(if bytes { value & 0xFF } else { value });
            },
            'x' => units.push(self.scan_hex_escape(escape, 2, line, column)?),
            'u' if !bytes => units.push(self.scan_hex_escape(escape, 4, line, column)?),
            'U' if !bytes => units.push(self.scan_hex_escape(escape, 8, line, column)?),
            other => {
                self.check_bytes_char(other, bytes)?;
                units.push(u32::from('\\'));
                units.push(u32::from(other));
            },
        }
        Ok(())
    }

    fn scan_hex_escape(&mut self,
                       escape: char,
                       digits: usize,
                       line: u32,
                       column: u32)
                       -> LexResult<u32> {
        let mut value: u32 = 0;
        let mut sequence = format!("\\{escape}");
        for _ in 0..digits {
            let Some(ch) = self.context.current() else {
                break;
            };
            let Some(digit) = ch.to_digit(16) else {
                return Err(LexError::InvalidEscape { sequence, line, column });
            };
            sequence.push(ch);
            value = value.saturating_mul(16).saturating_add(digit);
            self.context.bump();
        }
        if sequence.len() < digits + 2 || char::from_u32(value).is_none() {
            return Err(LexError::InvalidEscape { sequence, line, column });
        }
        Ok(value)
    }
}
