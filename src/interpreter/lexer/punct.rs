use std::fmt;

use logos::Logos;

use crate::{
    error::LexError,
    interpreter::lexer::{
        context::OpenBracket,
        core::{LexResult, Lexer},
        token::{Token, TokenKind},
    },
};

/// Longest operator or delimiter spelling, in characters.
pub const MAX_PUNCT_LEN: usize = 3;

/// Operator and delimiter spellings.
///
/// The derived `logos` matcher always prefers the longest spelling, so `**=`
/// wins over `**` and `*`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<<`
    #[token("<<")]
    LeftShift,
    /// `>>`
    #[token(">>")]
    RightShift,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `@`
    #[token("@")]
    At,
    /// `=`
    #[token("=")]
    Assign,
    /// `->`
    #[token("->")]
    Arrow,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `//=`
    #[token("//=")]
    DoubleSlashAssign,
    /// `%=`
    #[token("%=")]
    PercentAssign,
    /// `&=`
    #[token("&=")]
    AmpersandAssign,
    /// `|=`
    #[token("|=")]
    PipeAssign,
    /// `^=`
    #[token("^=")]
    CaretAssign,
    /// `>>=`
    #[token(">>=")]
    RightShiftAssign,
    /// `<<=`
    #[token("<<=")]
    LeftShiftAssign,
    /// `**=`
    #[token("**=")]
    DoubleStarAssign,
}

impl Punct {
    /// Matches the longest spelling at the start of `window`.
    ///
    /// # Returns
    /// The matched punctuation and its length in characters, or `None` when
    /// `window` does not start with one.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::lexer::Punct;
    ///
    /// assert_eq!(Punct::longest_match("**=1"), Some((Punct::DoubleStarAssign, 3)));
    /// assert_eq!(Punct::longest_match("<x"), Some((Punct::Less, 1)));
    /// assert_eq!(Punct::longest_match("!x"), None);
    /// ```
    #[must_use]
    pub fn longest_match(window: &str) -> Option<(Self, usize)> {
        let mut lexer = Self::lexer(window);
        let punct = lexer.next()?.ok()?;
        let length = window[..lexer.span().end].chars().count();
        Some((punct, length))
    }

    /// Operators are the symbols that form expressions. Everything else is a
    /// delimiter.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::DoubleStar
                 | Self::Slash
                 | Self::DoubleSlash
                 | Self::Percent
                 | Self::LeftShift
                 | Self::RightShift
                 | Self::Ampersand
                 | Self::Pipe
                 | Self::Caret
                 | Self::Tilde
                 | Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::EqualEqual
                 | Self::NotEqual)
    }

    /// The closing bracket that matches an opening one.
    #[must_use]
    pub const fn closing_for(open: char) -> Option<char> {
        match open {
            '(' => Some(')'),
            '[' => Some(']'),
            '{' => Some('}'),
            _ => None,
        }
    }

    /// The spelling of the punctuation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::DoubleStar => "**",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Percent => "%",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::NotEqual => "!=",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::At => "@",
            Self::Assign => "=",
            Self::Arrow => "->",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::StarAssign => "*=",
            Self::SlashAssign => "/=",
            Self::DoubleSlashAssign => "//=",
            Self::PercentAssign => "%=",
            Self::AmpersandAssign => "&=",
            Self::PipeAssign => "|=",
            Self::CaretAssign => "^=",
            Self::RightShiftAssign => ">>=",
            Self::LeftShiftAssign => "<<=",
            Self::DoubleStarAssign => "**=",
        }
    }
}

impl fmt::Display for Punct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Lexer {
    /// Scans an operator or delimiter and keeps the bracket stack balanced.
    ///
    /// This is the last scanner, so a character nothing matches is an
    /// invalid character.
    pub(super) fn scan_punct(&mut self) -> LexResult<Token> {
        let line = self.context.line();
        let column = self.context.column();
        let window: String = (0..MAX_PUNCT_LEN).map_while(|offset| self.context.peek(offset))
                                               .collect();

        let Some((punct, length)) = Punct::longest_match(&window) else {
            let ch = self.context.current().unwrap_or('\0');
            return Err(LexError::InvalidCharacter { ch, line, column });
        };

        match punct {
            Punct::LeftParen | Punct::LeftBracket | Punct::LeftBrace => {
                let bracket = punct.as_str().chars().next().unwrap_or('(');
                self.context.bracket_stack.push(OpenBracket { bracket, line });
            },
            Punct::RightParen | Punct::RightBracket | Punct::RightBrace => {
                let found = punct.as_str().chars().next().unwrap_or(')');
                let expected = self.context.bracket_stack.last().map(|open| open.bracket);
                if expected.and_then(Punct::closing_for) != Some(found) {
                    return Err(LexError::MismatchedBracket { expected,
                                                             found,
                                                             line,
                                                             column });
                }
                self.context.bracket_stack.pop();
            },
            _ => {},
        }

        for _ in 0..length {
            self.context.bump();
        }

        let kind = if punct.is_operator() {
            TokenKind::Operator(punct)
        } else {
            TokenKind::Delimiter(punct)
        };
        Ok(Token::new(kind, punct.as_str().to_string(), line, column))
    }
}
