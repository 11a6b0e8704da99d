use std::fmt;

use crate::{ast::LiteralValue, interpreter::lexer::punct::Punct};

/// Python keywords outside the supported set. Scanning one is a lexical
/// error rather than an identifier.
pub const RESERVED_KEYWORDS: &[&str] = &["class", "lambda", "try", "except", "finally", "with",
                                         "as", "global", "nonlocal", "yield", "assert", "del",
                                         "break", "continue", "async", "await"];

/// The keywords recognised by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `while`
    While,
    /// `def`
    Def,
    /// `return`
    Return,
    /// `for`
    For,
    /// `in`
    In,
    /// `is`
    Is,
    /// `not`
    Not,
    /// `and`
    And,
    /// `or`
    Or,
    /// `from`
    From,
    /// `import`
    Import,
    /// `raise`
    Raise,
    /// `pass`
    Pass,
    /// `True`
    True,
    /// `False`
    False,
    /// `None`
    None,
}

impl Keyword {
    /// Looks up a word in the keyword table.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::lexer::Keyword;
    ///
    /// assert_eq!(Keyword::lookup("elif"), Some(Keyword::Elif));
    /// assert_eq!(Keyword::lookup("true"), None);
    /// ```
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        let keyword = match word {
            "if" => Self::If,
            "elif" => Self::Elif,
            "else" => Self::Else,
            "while" => Self::While,
            "def" => Self::Def,
            "return" => Self::Return,
            "for" => Self::For,
            "in" => Self::In,
            "is" => Self::Is,
            "not" => Self::Not,
            "and" => Self::And,
            "or" => Self::Or,
            "from" => Self::From,
            "import" => Self::Import,
            "raise" => Self::Raise,
            "pass" => Self::Pass,
            "True" => Self::True,
            "False" => Self::False,
            "None" => Self::None,
            _ => return None,
        };
        Some(keyword)
    }

    /// The keyword's spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::While => "while",
            Self::Def => "def",
            Self::Return => "return",
            Self::For => "for",
            Self::In => "in",
            Self::Is => "is",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::From => "from",
            Self::Import => "import",
            Self::Raise => "raise",
            Self::Pass => "pass",
            Self::True => "True",
            Self::False => "False",
            Self::None => "None",
        }
    }
}

/// The kind of a token, with any payload converted from its spelling.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// End of input. Emitted once, after every open indentation level has
    /// been closed.
    EndMarker,
    /// End of a logical line.
    Newline,
    /// Indentation increased.
    Indent,
    /// Indentation decreased by one level.
    Dedent,
    /// A name that is not a keyword.
    Identifier(String),
    /// A keyword.
    Keyword(Keyword),
    /// A numeric literal converted to an int, float or complex value.
    Number(LiteralValue),
    /// A text string literal with escapes decoded.
    Str(String),
    /// A bytes literal with escapes decoded.
    Bytes(Vec<u8>),
    /// An operator such as `+` or `<=`.
    Operator(Punct),
    /// A delimiter such as `(`, `:` or `+=`.
    Delimiter(Punct),
}

impl TokenKind {
    /// Whether this is the given operator or delimiter.
    #[must_use]
    pub fn is_punct(&self, punct: Punct) -> bool {
        matches!(self, Self::Operator(p) | Self::Delimiter(p) if *p == punct)
    }

    /// Whether this is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Self::Keyword(k) if *k == keyword)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndMarker => write!(f, "ENDMARKER"),
            Self::Newline => write!(f, "NEWLINE"),
            Self::Indent => write!(f, "INDENT"),
            Self::Dedent => write!(f, "DEDENT"),
            Self::Identifier(name) => write!(f, "NAME {name:?}"),
            Self::Keyword(keyword) => write!(f, "KEYWORD {:?}", keyword.as_str()),
            Self::Number(value) => write!(f, "NUMBER {value:?}"),
            Self::Str(text) => write!(f, "STRING {text:?}"),
            Self::Bytes(bytes) => write!(f, "BYTES {bytes:?}"),
            Self::Operator(punct) => write!(f, "OP {:?}", punct.as_str()),
            Self::Delimiter(punct) => write!(f, "DELIMITER {:?}", punct.as_str()),
        }
    }
}

/// A lexical token with its exact source spelling and position.
///
/// `text` is empty for the synthetic `INDENT`, `DEDENT` and `ENDMARKER`
/// tokens. Lines and columns are one-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The source spelling.
    pub text:   String,
    /// Line of the first character.
    pub line:   u32,
    /// Column of the first character.
    pub column: u32,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: String, line: u32, column: u32) -> Self {
        Self { kind,
               text,
               line,
               column }
    }

    /// Creates a token with no source spelling.
    #[must_use]
    pub const fn synthetic(kind: TokenKind, line: u32, column: u32) -> Self {
        Self::new(kind, String::new(), line, column)
    }

    /// A short description used in parse errors.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::lexer::{Token, TokenKind};
    ///
    /// let name = Token::new(TokenKind::Identifier("x".into()), "x".into(), 1, 1);
    /// assert_eq!(name.describe(), "'x'");
    /// assert_eq!(Token::synthetic(TokenKind::Indent, 2, 1).describe(), "INDENT");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndMarker => "end of input".to_string(),
            TokenKind::Newline => "NEWLINE".to_string(),
            TokenKind::Indent => "INDENT".to_string(),
            TokenKind::Dedent => "DEDENT".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}\t{}", self.line, self.column, self.kind)
    }
}
