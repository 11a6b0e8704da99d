use crate::{
    ast::LiteralValue,
    error::LexError,
    interpreter::{
        lexer::{
            core::{LexResult, Lexer},
            token::{Token, TokenKind},
        },
        value::complex::ComplexNumber,
    },
};

/// Character classes labelling the arcs of the number automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arc {
    NonZero,
    Zero,
    Digit,
    Dot,
    Exponent,
    Imaginary,
    BinPrefix,
    OctPrefix,
    HexPrefix,
    Sign,
    BinDigit,
    OctDigit,
    HexDigit,
}

impl Arc {
    const fn accepts(self, ch: char) -> bool {
        match self {
            Self::NonZero => matches!(ch, '1'..='9'),
            Self::Zero => ch == '0',
            Self::Digit => ch.is_ascii_digit(),
            Self::Dot => ch == '.',
            Self::Exponent => matches!(ch, 'e' | 'E'),
            Self::Imaginary => matches!(ch, 'j' | 'J'),
            Self::BinPrefix => matches!(ch, 'b' | 'B'),
            Self::OctPrefix => matches!(ch, 'o' | 'O'),
            Self::HexPrefix => matches!(ch, 'x' | 'X'),
            Self::Sign => matches!(ch, '+' | '-'),
            Self::BinDigit => matches!(ch, '0' | '1'),
            Self::OctDigit => matches!(ch, '0'..='7'),
            Self::HexDigit => ch.is_ascii_hexdigit(),
        }
    }
}

/// A state of the number automaton: whether it accepts, and its arcs.
struct State {
    accepting:   bool,
    transitions: &'static [(Arc, usize)],
}

/// The number automaton. State 0 is the start state.
///
/// Decimal integers may only start with `0` when every digit is `0`; state 7
/// holds such a run of digits until a `.`, exponent or `j` makes it a float.
const STATES: [State; 17] = [
    // 0: start
    State { accepting:   false,
            transitions: &[(Arc::NonZero, 1), (Arc::Zero, 2), (Arc::Dot, 3)], },
    // 1: decimal integer
    State { accepting:   true,
            transitions: &[(Arc::Digit, 1), (Arc::Dot, 4), (Arc::Exponent, 5),
                           (Arc::Imaginary, 6)], },
    // 2: a single zero
    State { accepting:   true,
            transitions: &[(Arc::NonZero, 7), (Arc::Zero, 8), (Arc::Dot, 4), (Arc::Exponent, 5),
                           (Arc::Imaginary, 6), (Arc::BinPrefix, 9), (Arc::OctPrefix, 10),
                           (Arc::HexPrefix, 11)], },
    // 3: leading dot
    State { accepting:   false,
            transitions: &[(Arc::Digit, 4)], },
    // 4: fraction
    State { accepting:   true,
            transitions: &[(Arc::Digit, 4), (Arc::Exponent, 5), (Arc::Imaginary, 6)], },
    // 5: exponent marker
    State { accepting:   false,
            transitions: &[(Arc::Digit, 12), (Arc::Sign, 13)], },
    // 6: imaginary suffix
    State { accepting:   true,
            transitions: &[], },
    // 7: digits after a leading zero
    State { accepting:   false,
            transitions: &[(Arc::Digit, 7), (Arc::Dot, 4), (Arc::Exponent, 5),
                           (Arc::Imaginary, 6)], },
    // 8: run of zeros
    State { accepting:   true,
            transitions: &[(Arc::NonZero, 7), (Arc::Zero, 8), (Arc::Dot, 4), (Arc::Exponent, 5),
                           (Arc::Imaginary, 6)], },
    // 9, 10, 11: radix prefixes
    State { accepting:   false,
            transitions: &[(Arc::BinDigit, 14)], },
    State { accepting:   false,
            transitions: &[(Arc::OctDigit, 15)], },
    State { accepting:   false,
            transitions: &[(Arc::HexDigit, 16)], },
    // 12: exponent digits
    State { accepting:   true,
            transitions: &[(Arc::Digit, 12), (Arc::Imaginary, 6)], },
    // 13: exponent sign
    State { accepting:   false,
            transitions: &[(Arc::Digit, 12)], },
    // 14, 15, 16: radix digits
    State { accepting:   true,
            transitions: &[(Arc::BinDigit, 14)], },
    State { accepting:   true,
            transitions: &[(Arc::OctDigit, 15)], },
    State { accepting:   true,
            transitions: &[(Arc::HexDigit, 16)], },
];

fn step(state: usize, ch: char) -> Option<usize> {
    STATES[state].transitions
                 .iter()
                 .find(|(arc, _)| arc.accepts(ch))
                 .map(|(_, next)| *next)
}

/// Converts the spelling of an accepted number into its value.
///
/// The lower-cased text decides the type: a `j` suffix makes it complex, an
/// `x`, `o` or `b` a radix integer, an `e` or `.` a float, and anything else a
/// decimal integer.
fn convert(text: &str, line: u32, column: u32) -> LexResult<LiteralValue> {
    let lowered = text.to_ascii_lowercase();
    let invalid = || LexError::InvalidNumber { text: text.to_string(),
                                               line,
                                               column };
    let too_large = || LexError::NumberTooLarge { text: text.to_string(),
                                                  line,
                                                  column };

    if let Some(imaginary) = lowered.strip_suffix('j') {
        let imaginary: f64 = imaginary.parse().map_err(|_| invalid())?;
        return Ok(LiteralValue::Complex(ComplexNumber::new(0.0, imaginary)));
    }

    let radix = [('x', 16), ('o', 8), ('b', 2)].into_iter()
                                               .find(|(marker, _)| lowered.contains(*marker));
    if let Some((_, radix)) = radix {
        let digits = lowered.get(2..).ok_or_else(invalid)?;
        return i64::from_str_radix(digits, radix).map(LiteralValue::Int)
                                                 .map_err(|_| too_large());
    }

    if lowered.contains(['e', '.']) {
        return lowered.parse().map(LiteralValue::Float).map_err(|_| invalid());
    }

    lowered.parse().map(LiteralValue::Int).map_err(|_| too_large())
}

impl Lexer {
    /// Scans a numeric literal by feeding characters to the number automaton
    /// until it rejects one.
    pub(super) fn scan_number(&mut self) -> LexResult<Option<Token>> {
        let starts_number = match self.context.current() {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('.') => self.context.peek(1).is_some_and(|ch| ch.is_ascii_digit()),
            _ => false,
        };
        if !starts_number {
            return Ok(None);
        }

        let line = self.context.line();
        let column = self.context.column();
        let start = self.context.column_index;
        let mut state = 0;
        while let Some(next) = self.context.current().and_then(|ch| step(state, ch)) {
            state = next;
            self.context.bump();
        }

        let text = self.context.slice_from(start);
        if !STATES[state].accepting {
            return Err(LexError::InvalidNumber { text, line, column });
        }

        let value = convert(&text, line, column)?;
        Ok(Some(Token::new(TokenKind::Number(value), text, line, column)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> (usize, usize) {
        let mut state = 0;
        let mut consumed = 0;
        for ch in text.chars() {
            match step(state, ch) {
                Some(next) => {
                    state = next;
                    consumed += 1;
                },
                None => break,
            }
        }
        (state, consumed)
    }

    #[test]
    fn accepts_python_number_forms() {
        for text in ["0", "000", "42", "3.14", "10.", ".001", "1e100", "3.14e-10", "0x1A", "0o17",
                     "0b101", "2j", "1.5J", "07.5", "1e5j"]
        {
            let (state, consumed) = run(text);
            assert!(STATES[state].accepting, "{text} ended in state {state}");
            assert_eq!(consumed, text.len(), "{text}");
        }
    }

    #[test]
    fn rejects_leading_zero_integers() {
        let (state, _) = run("007");
        assert!(!STATES[state].accepting);
    }

    #[test]
    fn stops_at_first_rejected_character() {
        assert_eq!(run("12abc"), (1, 2));
        assert_eq!(run("0x"), (11, 2));
        assert_eq!(run("1e+"), (13, 3));
    }

    #[test]
    fn converts_by_spelling() {
        assert_eq!(convert("0x1A", 1, 1), Ok(LiteralValue::Int(26)));
        assert_eq!(convert("0B11", 1, 1), Ok(LiteralValue::Int(3)));
        assert_eq!(convert("1e3", 1, 1), Ok(LiteralValue::Float(1000.0)));
        assert_eq!(convert("10.", 1, 1), Ok(LiteralValue::Float(10.0)));
        assert_eq!(convert("2j", 1, 1),
                   Ok(LiteralValue::Complex(ComplexNumber::new(0.0, 2.0))));
        assert!(matches!(convert("99999999999999999999", 3, 4),
                         Err(LexError::NumberTooLarge { line: 3, column: 4, .. })));
    }
}
