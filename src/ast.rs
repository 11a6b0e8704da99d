use crate::interpreter::value::complex::ComplexNumber;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers every constant that can appear directly in source
/// code: numbers, strings, bytes and the `True`/`False`/`None` keywords. The
/// lexer stores converted numbers in it and the parser wraps it in
/// [`Node::Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `None` keyword.
    None,
    /// A boolean literal: `True` or `False`.
    Bool(bool),
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// An imaginary literal such as `2j`.
    Complex(ComplexNumber),
    /// A text string literal.
    Str(String),
    /// A bytes literal such as `b"abc"`.
    Bytes(Vec<u8>),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<ComplexNumber> for LiteralValue {
    fn from(value: ComplexNumber) -> Self {
        Self::Complex(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// A node of the abstract syntax tree.
///
/// The set of nodes is closed: statements and expressions share one enum so a
/// [`Node::Block`] can hold any of them, and the evaluator matches on it
/// exhaustively. Every variant carries the source line it was parsed from.
/// Children are owned, so a parsed program is always a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A constant value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  u32,
    },
    /// Reference to a name.
    Identifier {
        /// The referenced name.
        name: String,
        /// Line number in the source code.
        line: u32,
    },
    /// A prefix operator applied to one operand.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    u32,
    },
    /// An infix operator applied to two operands.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  u32,
    },
    /// Binds a name in the current scope.
    Assign {
        /// The assigned name.
        target: String,
        /// The value expression.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   u32,
    },
    /// Conditional statement. `elif` chains nest in `else_branch`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Executed otherwise; [`Node::NoOp`] when the source has no `else`.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        u32,
    },
    /// Loop re-evaluating its condition before every iteration.
    While {
        /// The loop condition.
        condition: Box<Self>,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      u32,
    },
    /// A sequence of statements.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       u32,
    },
    /// A `def` statement.
    FunctionDef(FunctionDef),
    /// A call of a named function.
    Call {
        /// Name of the function being called.
        callee:    String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      u32,
    },
    /// A statement with no effect (`pass` or an empty line).
    NoOp {
        /// Line number in the source code.
        line: u32,
    },
}

impl Node {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use adder::ast::Node;
    ///
    /// let node = Node::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> u32 {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assign { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Block { line, .. }
            | Self::FunctionDef(FunctionDef { line, .. })
            | Self::Call { line, .. }
            | Self::NoOp { line } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// Parameters are bound positionally; annotations and default values are
/// accepted by the parser but not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Box<Node>,
    /// Line number in the source code.
    pub line:   u32,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Left shift (`<<`)
    LeftShift,
    /// Right shift (`>>`)
    RightShift,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Membership (`in`)
    In,
    /// Negated membership (`not in`)
    NotIn,
    /// Identity (`is`)
    Is,
    /// Negated identity (`is not`)
    IsNot,
    /// Short-circuit conjunction (`and`)
    And,
    /// Short-circuit disjunction (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Bitwise inversion (`~x`).
    Invert,
    /// Logical negation (`not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, FloorDiv, Greater, GreaterEqual, In, Is,
            IsNot, LeftShift, Less, LessEqual, Mod, Mul, NotEqual, NotIn, Or, Pow, RightShift,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
            LeftShift => "<<",
            RightShift => ">>",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            In => "in",
            NotIn => "not in",
            Is => "is",
            IsNot => "is not",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Invert => "~",
            Self::Not => "not",
        };
        write!(f, "{operator}")
    }
}
