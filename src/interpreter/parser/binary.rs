use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{Keyword, Punct, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Maps an operator token to the binary operator it spells.
///
/// Keyword operators and the two-token forms `not in` and `is not` are
/// handled by the comparison level.
///
/// # Example
/// ```
/// use adder::{
///     ast::BinaryOperator,
///     interpreter::{lexer::{Punct, TokenKind}, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Operator(Punct::DoubleSlash)),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&TokenKind::Delimiter(Punct::Comma)), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    let TokenKind::Operator(punct) = kind else {
        return None;
    };
    let op = match punct {
        Punct::Plus => BinaryOperator::Add,
        Punct::Minus => BinaryOperator::Sub,
        Punct::Star => BinaryOperator::Mul,
        Punct::Slash => BinaryOperator::Div,
        Punct::DoubleSlash => BinaryOperator::FloorDiv,
        Punct::Percent => BinaryOperator::Mod,
        Punct::DoubleStar => BinaryOperator::Pow,
        Punct::LeftShift => BinaryOperator::LeftShift,
        Punct::RightShift => BinaryOperator::RightShift,
        Punct::Ampersand => BinaryOperator::BitAnd,
        Punct::Pipe => BinaryOperator::BitOr,
        Punct::Caret => BinaryOperator::BitXor,
        Punct::Less => BinaryOperator::Less,
        Punct::Greater => BinaryOperator::Greater,
        Punct::LessEqual => BinaryOperator::LessEqual,
        Punct::GreaterEqual => BinaryOperator::GreaterEqual,
        Punct::EqualEqual => BinaryOperator::Equal,
        Punct::NotEqual => BinaryOperator::NotEqual,
        _ => return None,
    };
    Some(op)
}

impl Parser {
    /// Folds one left-associative precedence level.
    ///
    /// `next` parses the operands; `accepts` picks the operators that belong
    /// to this level.
    fn parse_left_assoc(&mut self,
                        next: fn(&mut Self) -> ParseResult<Node>,
                        accepts: fn(BinaryOperator) -> bool)
                        -> ParseResult<Node> {
        let mut left = next(self)?;
        loop {
            let token = self.tokens.peek(0)?;
            if let Some(op) = token_to_binary_operator(&token.kind)
               && accepts(op)
            {
                let line = token.line;
                self.tokens.advance()?;
                let right = next(self)?;
                left = Node::BinaryOp { op,
                                        left: Box::new(left),
                                        right: Box::new(right),
                                        line };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses boolean `or`.
    ///
    /// The rule is: `or_test := and_test ("or" and_test)*`
    pub(in crate::interpreter::parser) fn parse_or(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_and()?;
        while let Some(line) = self.eat_keyword(Keyword::Or)? {
            let right = self.parse_and()?;
            left = Node::BinaryOp { op: BinaryOperator::Or,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }

    /// Parses boolean `and`.
    ///
    /// The rule is: `and_test := comparison ("and" comparison)*`
    fn parse_and(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_comparison()?;
        while let Some(line) = self.eat_keyword(Keyword::And)? {
            let right = self.parse_comparison()?;
            left = Node::BinaryOp { op: BinaryOperator::And,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }

    /// Parses relational, equality, membership and identity operators.
    ///
    /// This level handles `<`, `>`, `<=`, `>=`, `==`, `!=`, `in`, `not in`,
    /// `is` and `is not`. Chains fold to the left, so `a < b < c` compares
    /// the boolean result of `a < b` with `c`.
    ///
    /// The rule is: `comparison := bit_or (comp_op bit_or)*`
    fn parse_comparison(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_bit_or()?;
        while let Some((op, line)) = self.comparison_operator()? {
            let right = self.parse_bit_or()?;
            left = Node::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }

    /// Consumes a comparison operator if one follows, including the
    /// two-token `not in` and `is not`.
    fn comparison_operator(&mut self) -> ParseResult<Option<(BinaryOperator, u32)>> {
        let token = self.tokens.peek(0)?.clone();
        let line = token.line;
        let op = match &token.kind {
            TokenKind::Keyword(Keyword::In) => BinaryOperator::In,
            TokenKind::Keyword(Keyword::Is) => {
                if self.tokens.peek_kind(1)?.is_keyword(Keyword::Not) {
                    self.tokens.advance()?;
                    BinaryOperator::IsNot
                } else {
                    BinaryOperator::Is
                }
            },
            TokenKind::Keyword(Keyword::Not) => {
                if !self.tokens.peek_kind(1)?.is_keyword(Keyword::In) {
                    return Ok(None);
                }
                self.tokens.advance()?;
                BinaryOperator::NotIn
            },
            kind => match token_to_binary_operator(kind) {
                Some(op @ (BinaryOperator::Less
                           | BinaryOperator::Greater
                           | BinaryOperator::LessEqual
                           | BinaryOperator::GreaterEqual
                           | BinaryOperator::Equal
                           | BinaryOperator::NotEqual)) => op,
                _ => return Ok(None),
            },
        };
        self.tokens.advance()?;
        Ok(Some((op, line)))
    }

    /// Parses bitwise or.
    ///
    /// The rule is: `bit_or := bit_xor ("|" bit_xor)*`
    fn parse_bit_or(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_bit_xor, |op| op == BinaryOperator::BitOr)
    }

    /// Parses bitwise exclusive or.
    ///
    /// The rule is: `bit_xor := bit_and ("^" bit_and)*`
    fn parse_bit_xor(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_bit_and, |op| op == BinaryOperator::BitXor)
    }

    /// Parses bitwise and.
    ///
    /// The rule is: `bit_and := shift ("&" shift)*`
    fn parse_bit_and(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_shift, |op| op == BinaryOperator::BitAnd)
    }

    /// Parses shifts.
    ///
    /// The rule is: `shift := additive (("<<" | ">>") additive)*`
    fn parse_shift(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_additive, |op| {
                matches!(op, BinaryOperator::LeftShift | BinaryOperator::RightShift)
            })
    }

    /// Parses addition and subtraction.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_multiplicative, |op| {
                matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            })
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Node> {
        self.parse_left_assoc(Self::parse_unary, |op| {
                matches!(op,
                         BinaryOperator::Mul
                         | BinaryOperator::Div
                         | BinaryOperator::FloorDiv
                         | BinaryOperator::Mod)
            })
    }

    /// Consumes the given keyword if it follows and returns its line.
    fn eat_keyword(&mut self, keyword: Keyword) -> ParseResult<Option<u32>> {
        let token = self.tokens.peek(0)?;
        if token.kind.is_keyword(keyword) {
            let line = token.line;
            self.tokens.advance()?;
            return Ok(Some(line));
        }
        Ok(None)
    }
}
