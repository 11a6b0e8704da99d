use adder::{
    ast::LiteralValue,
    error::LexError,
    interpreter::{
        lexer::{Keyword, Lexer, Punct, Token, TokenKind, tokenize},
        value::complex::ComplexNumber,
    },
};

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src, 8).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokens(src).into_iter().map(|token| token.kind).collect()
}

fn lex_error(src: &str) -> LexError {
    match tokenize(src, 8) {
        Ok(tokens) => panic!("Expected a lexical error, got {tokens:?}"),
        Err(e) => e,
    }
}

fn name(text: &str) -> TokenKind {
    TokenKind::Identifier(text.to_string())
}

#[test]
fn indentation_levels_produce_one_token_per_change() {
    use TokenKind::{Dedent, EndMarker, Indent, Newline};

    assert_eq!(kinds("a\n    b\n        c\nd\n"),
               vec![name("a"),
                    Newline,
                    Indent,
                    name("b"),
                    Newline,
                    Indent,
                    name("c"),
                    Newline,
                    Dedent,
                    Dedent,
                    name("d"),
                    Newline,
                    EndMarker]);
}

#[test]
fn open_levels_close_at_end_of_input() {
    let kinds = kinds("if x:\n    if y:\n        z\n");
    assert_eq!(&kinds[kinds.len() - 3..],
               &[TokenKind::Dedent, TokenKind::Dedent, TokenKind::EndMarker]);
}

#[test]
fn missing_final_newline_still_ends_the_line() {
    assert_eq!(kinds("x"), vec![name("x"), TokenKind::Newline, TokenKind::EndMarker]);
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(kinds("a\n\n    # indented comment\n\t\nb  # trailing\n"),
               vec![name("a"), TokenKind::Newline, name("b"), TokenKind::Newline,
                    TokenKind::EndMarker]);
}

#[test]
fn windows_and_old_mac_newlines_are_normalized() {
    assert_eq!(kinds("a\r\nb\rc\n"),
               vec![name("a"),
                    TokenKind::Newline,
                    name("b"),
                    TokenKind::Newline,
                    name("c"),
                    TokenKind::Newline,
                    TokenKind::EndMarker]);
}

#[test]
fn tabs_round_up_to_the_tab_size() {
    // A tab reaches column 8, the same level as eight spaces.
    let kinds = kinds("if x:\n\ty\n        z\n");
    assert_eq!(kinds.iter().filter(|kind| **kind == TokenKind::Indent).count(), 1);

    let narrow = tokenize("if x:\n\ty\n    z\n", 4).unwrap();
    assert_eq!(narrow.iter().filter(|token| token.kind == TokenKind::Indent).count(), 1);
}

#[test]
fn brackets_join_physical_lines() {
    let kinds = kinds("x = (1,\n        2,\n  3)\n");
    assert!(!kinds.contains(&TokenKind::Indent));
    assert_eq!(kinds.iter().filter(|kind| **kind == TokenKind::Newline).count(), 1);
}

#[test]
fn backslash_joins_physical_lines() {
    assert_eq!(kinds("a + \\\n  b\n"),
               vec![name("a"),
                    TokenKind::Operator(Punct::Plus),
                    name("b"),
                    TokenKind::Newline,
                    TokenKind::EndMarker]);
}

#[test]
fn spellings_survive_tokenization() {
    let tokens = tokens("foo_bar 0x1A 1000 3.5e2 2j\n");
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(&texts[..5], &["foo_bar", "0x1A", "1000", "3.5e2", "2j"]);

    assert_eq!(tokens[1].kind, TokenKind::Number(LiteralValue::Int(26)));
    assert_eq!(tokens[2].kind, TokenKind::Number(LiteralValue::Int(1000)));
    assert_eq!(tokens[3].kind, TokenKind::Number(LiteralValue::Float(350.0)));
    assert_eq!(tokens[4].kind,
               TokenKind::Number(LiteralValue::Complex(ComplexNumber::new(0.0, 2.0))));
}

#[test]
fn number_forms() {
    let values: Vec<TokenKind> = kinds("0o17 0b101 .5 1. 1e-3 0\n").into_iter()
                                                                    .take(6)
                                                                    .collect();
    assert_eq!(values,
               vec![TokenKind::Number(LiteralValue::Int(15)),
                    TokenKind::Number(LiteralValue::Int(5)),
                    TokenKind::Number(LiteralValue::Float(0.5)),
                    TokenKind::Number(LiteralValue::Float(1.0)),
                    TokenKind::Number(LiteralValue::Float(0.001)),
                    TokenKind::Number(LiteralValue::Int(0))]);
}

#[test]
fn positions_are_one_based() {
    let tokens = tokens("x = 1\n  \ny=2\n");
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[2].line, tokens[2].column), (1, 5));
    let y = tokens.iter()
                  .find(|token| token.kind == name("y"))
                  .unwrap();
    assert_eq!((y.line, y.column), (3, 1));
}

#[test]
fn keywords_and_operators() {
    assert_eq!(kinds("not x is None\n")[..4],
               [TokenKind::Keyword(Keyword::Not),
                name("x"),
                TokenKind::Keyword(Keyword::Is),
                TokenKind::Keyword(Keyword::None)]);
    assert_eq!(kinds("a **= b // c -> d\n")[..7],
               [name("a"),
                TokenKind::Delimiter(Punct::DoubleStarAssign),
                name("b"),
                TokenKind::Operator(Punct::DoubleSlash),
                name("c"),
                TokenKind::Delimiter(Punct::Arrow),
                name("d")]);
}

#[test]
fn string_literals() {
    let values: Vec<TokenKind> =
        kinds(r#"'a\tb' "it's" r'\n' b'\x41\101' u'x' rb'\d' '\u00e9'"#).into_iter()
                                                                         .take(7)
                                                                         .collect();
    assert_eq!(values,
               vec![TokenKind::Str("a\tb".to_string()),
                    TokenKind::Str("it's".to_string()),
                    TokenKind::Str("\\n".to_string()),
                    TokenKind::Bytes(vec![0x41, 0x41]),
                    TokenKind::Str("x".to_string()),
                    TokenKind::Bytes(b"\\d".to_vec()),
                    TokenKind::Str("\u{e9}".to_string())]);
}

#[test]
fn mismatched_bracket_is_an_error() {
    assert!(matches!(lex_error("(1, 2]\n"),
                     LexError::MismatchedBracket { expected: Some('('),
                                                   found: ']',
                                                   line: 1,
                                                   column: 6 }));
    assert!(matches!(lex_error(")\n"),
                     LexError::MismatchedBracket { expected: None, .. }));
}

#[test]
fn unclosed_bracket_is_an_error() {
    assert!(matches!(lex_error("x = [1,\n2\n"),
                     LexError::UnclosedBracket { bracket: '[',
                                                 line: 1 }));
}

#[test]
fn dedent_to_unseen_width_is_an_error() {
    assert!(matches!(lex_error("if x:\n        a\n    b\n"),
                     LexError::InconsistentDedent { width: 4,
                                                    expected: 0,
                                                    line: 3 }));
}

#[test]
fn string_errors() {
    assert!(matches!(lex_error("'abc\n"), LexError::UnterminatedString { line: 1, .. }));
    assert!(matches!(lex_error("\"\"\"doc\"\"\"\n"), LexError::TripleQuotedString { .. }));
    assert!(matches!(lex_error("f'{x}'\n"), LexError::UnsupportedPrefix { .. }));
    assert!(matches!(lex_error("b'caf\u{e9}'\n"), LexError::NonAsciiBytes { .. }));
    assert!(matches!(lex_error("'\\x4'\n"), LexError::InvalidEscape { .. }));
}

#[test]
fn number_errors() {
    assert!(matches!(lex_error("99999999999999999999\n"), LexError::NumberTooLarge { .. }));
    assert!(matches!(lex_error("0x\n"), LexError::InvalidNumber { .. }));
}

#[test]
fn reserved_keywords_are_rejected() {
    assert!(matches!(lex_error("class A:\n    pass\n"),
                     LexError::UnsupportedKeyword { ref word, .. } if word == "class"));
}

#[test]
fn invalid_character() {
    assert!(matches!(lex_error("a = $\n"),
                     LexError::InvalidCharacter { ch: '$',
                                                  line: 1,
                                                  column: 5 }));
}

#[test]
fn lexer_repeats_the_end_marker() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndMarker);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndMarker);
}

#[test]
fn iterator_stops_after_the_end_marker() {
    let collected: Vec<_> = Lexer::new("x\n").collect();
    assert_eq!(collected.len(), 3);
    assert!(collected.iter().all(Result::is_ok));

    let failing: Vec<_> = Lexer::new("x $ y\n").collect();
    assert!(failing.last().unwrap().is_err());
}
