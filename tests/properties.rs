use adder::{
    Config,
    ast::LiteralValue,
    execute,
    interpreter::{
        lexer::{Keyword, TokenKind, token::RESERVED_KEYWORDS, tokenize},
        value::core::Value,
    },
};
use proptest::prelude::*;

/// Nesting levels where each line opens at most one new block.
fn nesting_levels() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..5, 1..40).prop_map(|raw| {
                                               let mut levels = Vec::with_capacity(raw.len());
                                               let mut previous = 0;
                                               for (i, want) in raw.into_iter().enumerate() {
                                                   let level =
                                                       if i == 0 { 0 } else { want.min(previous + 1) };
                                                   levels.push(level);
                                                   previous = level;
                                               }
                                               levels
                                           })
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}".prop_filter("keywords are not names", |word| {
                                         Keyword::lookup(word).is_none()
                                         && !RESERVED_KEYWORDS.contains(&word.as_str())
                                     })
}

fn run(src: &str) -> Value {
    let evaluator =
        execute(src, &Config::default()).unwrap_or_else(|e| panic!("{src:?} failed: {e}"));
    evaluator.global("result")
             .cloned()
             .unwrap_or_else(|| panic!("{src:?} did not bind result"))
}

proptest! {
    #[test]
    fn indentation_tokens_track_nesting(levels in nesting_levels(), width in 1usize..6) {
        let source: String = levels.iter()
                                   .enumerate()
                                   .map(|(i, level)| format!("{}x{i}\n", " ".repeat(level * width)))
                                   .collect();
        let tokens = tokenize(&source, 8).unwrap();

        let mut depth = 0usize;
        let mut seen = Vec::new();
        for token in &tokens {
            match token.kind {
                TokenKind::Indent => depth += 1,
                TokenKind::Dedent => depth -= 1,
                TokenKind::Identifier(_) => seen.push(depth),
                _ => {},
            }
        }

        prop_assert_eq!(depth, 0);
        prop_assert_eq!(seen, levels);
    }

    #[test]
    fn each_level_change_emits_one_token_per_step(levels in nesting_levels()) {
        let source: String = levels.iter()
                                   .map(|level| format!("{}pass\n", "    ".repeat(*level)))
                                   .collect();
        let tokens = tokenize(&source, 8).unwrap();
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();

        let rises: usize = levels.windows(2)
                                 .map(|pair| pair[1].saturating_sub(pair[0]))
                                 .sum();
        prop_assert_eq!(indents, rises);
        prop_assert_eq!(dedents, indents);
    }

    #[test]
    fn identifiers_keep_their_spelling(word in identifier()) {
        let tokens = tokenize(&format!("{word}\n"), 8).unwrap();
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Identifier(word.clone()));
        prop_assert_eq!(&tokens[0].text, &word);
    }

    #[test]
    fn integer_spellings_decode(n in 0i64..=i64::MAX) {
        for spelling in [n.to_string(), format!("0x{n:x}"), format!("0o{n:o}"), format!("0b{n:b}")] {
            let tokens = tokenize(&spelling, 8).unwrap();
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(LiteralValue::Int(n)));
            prop_assert_eq!(&tokens[0].text, &spelling);
        }
    }

    #[test]
    fn lexer_never_panics(source in "[ -~\t\n]{0,200}") {
        let _ = tokenize(&source, 8);
        let _ = adder::parse(&source, &Config::default());
    }

    #[test]
    fn integer_arithmetic_matches_rust(a in -100_000i64..100_000, b in -100_000i64..100_000) {
        let src = format!("a = {a}\nb = {b}\nresult = a + b\n");
        prop_assert_eq!(run(&src), Value::Int(a + b));

        let src = format!("a = {a}\nb = {b}\nresult = a * b - b\n");
        prop_assert_eq!(run(&src), Value::Int(a * b - b));
    }

    #[test]
    fn floor_division_and_modulo_agree(a in -100_000i64..100_000, b in -1_000i64..1_000) {
        prop_assume!(b != 0);
        let src = format!("a = {a}\nb = {b}\nq = a // b\nr = a % b\nresult = q * b + r == a\n");
        prop_assert_eq!(run(&src), Value::Bool(true));

        let src = format!("result = {a} % {b}\n");
        let remainder = run(&src);
        let Value::Int(r) = remainder else {
            return Err(TestCaseError::fail("modulo did not give an int"));
        };
        prop_assert!(r == 0 || (r < 0) == (b < 0));
    }
}
