use adder::{
    Error,
    ast::{BinaryOperator, FunctionDef, LiteralValue, Node, UnaryOperator},
    error::ParseError,
    interpreter::parser::Parser,
};

fn program(src: &str) -> Vec<Node> {
    match Parser::new(src).parse() {
        Ok(Node::Block { statements, .. }) => statements,
        Ok(other) => panic!("Expected a block, got {other:?}"),
        Err(e) => panic!("Failed to parse {src:?}: {e}"),
    }
}

fn single(src: &str) -> Node {
    let mut statements = program(src);
    assert_eq!(statements.len(), 1, "{statements:?}");
    statements.remove(0)
}

fn parse_error(src: &str) -> ParseError {
    match Parser::new(src).parse() {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

fn int(value: i64, line: u32) -> Node {
    Node::Literal { value: LiteralValue::Int(value),
                    line }
}

fn ident(name: &str, line: u32) -> Node {
    Node::Identifier { name: name.to_string(),
                       line }
}

fn binary(op: BinaryOperator, left: Node, right: Node) -> Node {
    let line = left.line_number();
    Node::BinaryOp { op,
                     left: Box::new(left),
                     right: Box::new(right),
                     line }
}

/// Strips a node down to its operator structure for shape comparisons.
fn shape(node: &Node) -> String {
    match node {
        Node::Literal { value, .. } => format!("{value:?}"),
        Node::Identifier { name, .. } => name.clone(),
        Node::UnaryOp { op, operand, .. } => format!("({op} {})", shape(operand)),
        Node::BinaryOp { op, left, right, .. } => {
            format!("({} {op} {})", shape(left), shape(right))
        },
        Node::Call { callee, arguments, .. } => {
            let arguments: Vec<String> = arguments.iter().map(shape).collect();
            format!("{callee}({})", arguments.join(", "))
        },
        other => format!("{other:?}"),
    }
}

fn expression_shape(src: &str) -> String {
    let Node::Assign { value, .. } = single(&format!("x = {src}\n")) else {
        panic!("Expected an assignment");
    };
    shape(&value)
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    let Node::Assign { value, .. } = single("x = 1 + 2 * 3\n") else {
        panic!("Expected an assignment");
    };
    assert_eq!(*value,
               binary(BinaryOperator::Add,
                      int(1, 1),
                      binary(BinaryOperator::Mul, int(2, 1), int(3, 1))));
}

#[test]
fn binary_levels_fold_left() {
    assert_eq!(expression_shape("1 - 2 - 3"), "((Int(1) - Int(2)) - Int(3))");
    assert_eq!(expression_shape("a < b < c"), "((a < b) < c)");
    assert_eq!(expression_shape("8 // 4 % 3"), "((Int(8) // Int(4)) % Int(3))");
}

#[test]
fn precedence_ladder() {
    assert_eq!(expression_shape("a or b and c"), "(a or (b and c))");
    assert_eq!(expression_shape("a | b ^ c & d"), "(a | (b ^ (c & d)))");
    assert_eq!(expression_shape("a & b << 1 + 2"), "(a & (b << (Int(1) + Int(2))))");
    assert_eq!(expression_shape("a == b | c"), "(a == (b | c))");
}

#[test]
fn power_is_right_associative_and_binds_above_unary() {
    assert_eq!(expression_shape("2 ** 3 ** 2"), "(Int(2) ** (Int(3) ** Int(2)))");
    assert_eq!(expression_shape("-2 ** 2"), "(- (Int(2) ** Int(2)))");
    assert_eq!(expression_shape("2 ** -1"), "(Int(2) ** (- Int(1)))");
}

#[test]
fn two_token_comparison_operators() {
    assert_eq!(expression_shape("a not in b"), "(a not in b)");
    assert_eq!(expression_shape("a is not None"), "(a is not None)");
    assert_eq!(expression_shape("not a in b"), "((not a) in b)");
}

#[test]
fn unary_operators_nest() {
    assert_eq!(expression_shape("-~+x"), "(- (~ (+ x)))");
    let Node::Assign { value, .. } = single("x = not y\n") else {
        panic!("Expected an assignment");
    };
    assert!(matches!(*value, Node::UnaryOp { op: UnaryOperator::Not, .. }));
}

#[test]
fn calls_and_parentheses() {
    assert_eq!(expression_shape("f(1, g(2), (3 + 4) * 5,)"),
               "f(Int(1), g(Int(2)), ((Int(3) + Int(4)) * Int(5)))");
    assert_eq!(expression_shape("f()"), "f()");
}

#[test]
fn adjacent_strings_concatenate() {
    let Node::Assign { value, .. } = single("x = 'ab' \"cd\"\n") else {
        panic!("Expected an assignment");
    };
    assert_eq!(*value,
               Node::Literal { value: LiteralValue::Str("abcd".to_string()),
                               line:  1, });
    assert!(matches!(parse_error("x = 'a' b'b'\n"),
                     ParseError::MixedStringConcatenation { line: 1,
                                                            column: 9 }));
}

#[test]
fn augmented_assignment_expands_to_binary_op() {
    assert_eq!(single("total += 2\n"),
               Node::Assign { target: "total".to_string(),
                              value:  Box::new(binary(BinaryOperator::Add,
                                                      ident("total", 1),
                                                      int(2, 1))),
                              line:   1, });
}

#[test]
fn if_elif_else_builds_a_right_leaning_chain() {
    let node = single("if a:\n    x = 1\nelif b:\n    x = 2\nelse:\n    x = 3\n");
    let Node::If { condition,
                   else_branch,
                   line,
                   .. } = node
    else {
        panic!("Expected an if statement");
    };
    assert_eq!(*condition, ident("a", 1));
    assert_eq!(line, 1);

    let Node::If { condition,
                   else_branch,
                   line,
                   .. } = *else_branch
    else {
        panic!("Expected elif to become a nested if");
    };
    assert_eq!(*condition, ident("b", 3));
    assert_eq!(line, 3);
    assert!(matches!(*else_branch, Node::Block { ref statements, line: 5 } if statements.len() == 1));
}

#[test]
fn missing_else_is_a_noop() {
    let Node::If { else_branch, .. } = single("if a: pass\n") else {
        panic!("Expected an if statement");
    };
    assert_eq!(*else_branch, Node::NoOp { line: 1 });
}

#[test]
fn while_with_nested_suite() {
    let node = single("while i < 3:\n    if i:\n        pass\n    i += 1\n");
    let Node::While { body, .. } = node else {
        panic!("Expected a while loop");
    };
    let Node::Block { statements, .. } = *body else {
        panic!("Expected a block body");
    };
    assert_eq!(statements.len(), 2);
    assert!(matches!(statements[0], Node::If { .. }));
    assert!(matches!(statements[1], Node::Assign { .. }));
}

#[test]
fn function_definition_parameters() {
    let node = single("def area(width: float, height=2,) -> float:\n    pass\n");
    let Node::FunctionDef(FunctionDef { name, params, line, .. }) = node else {
        panic!("Expected a function definition");
    };
    assert_eq!(name, "area");
    assert_eq!(params, ["width", "height"]);
    assert_eq!(line, 1);
}

#[test]
fn semicolons_and_pass() {
    let statements = program("a = 1; pass; b = 2;\n");
    assert_eq!(statements.len(), 3);
    assert_eq!(statements[1], Node::NoOp { line: 1 });
}

#[test]
fn statements_keep_their_lines() {
    let statements = program("a = 1\n\n# comment\nb = 2\n");
    let lines: Vec<u32> = statements.iter().map(Node::line_number).collect();
    assert_eq!(lines, [1, 4]);
}

#[test]
fn unsupported_statements() {
    assert!(matches!(parse_error("return 1\n"),
                     ParseError::UnsupportedStatement { ref keyword, line: 1, column: 1 } if keyword == "return"));
    assert!(matches!(parse_error("def f():\n    for x in y: pass\n"),
                     ParseError::UnsupportedStatement { ref keyword, line: 2, .. } if keyword == "for"));
    assert!(matches!(parse_error("import os\n"), ParseError::UnsupportedStatement { .. }));
}

#[test]
fn invalid_assignment_targets() {
    assert!(matches!(parse_error("f(x) = 1\n"), ParseError::InvalidAssignmentTarget { line: 1 }));
    assert!(matches!(parse_error("a + b += 1\n"),
                     ParseError::InvalidAssignmentTarget { line: 1 }));
}

#[test]
fn indentation_errors() {
    assert!(matches!(parse_error("a = 1\n    b = 2\n"), ParseError::UnexpectedIndent { line: 2 }));
    assert!(matches!(parse_error("if a:\nb = 1\n"),
                     ParseError::UnexpectedToken { ref expected, line: 2, .. }
                         if expected.as_deref() == Some("an indented block")));
    assert!(matches!(parse_error("if a:\n"), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn unexpected_tokens_name_the_token() {
    let err = parse_error("x = 1 +\n");
    assert!(matches!(&err, ParseError::UnexpectedToken { found, line: 1, .. } if found == "NEWLINE"));

    let err = parse_error("x = (1 2)\n");
    assert!(matches!(&err, ParseError::UnexpectedToken { found, expected: Some(want), .. }
                             if found == "'2'" && want == "')'"));
    assert!(err.to_string().contains("expected ')'"));

    assert!(matches!(parse_error("if x\n    pass\n"),
                     ParseError::UnexpectedToken { ref expected, .. } if expected.as_deref() == Some("':'")));
}

#[test]
fn lexical_errors_surface_through_the_parser() {
    assert!(matches!(Parser::new("x = $\n").parse(), Err(Error::Lex(_))));
}

#[test]
fn empty_program_is_an_empty_block() {
    assert!(program("").is_empty());
    assert!(program("\n\n# only comments\n").is_empty());
}
