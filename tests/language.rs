use std::{cell::RefCell, io, path::Path, rc::Rc};

use adder::{
    Config, Error,
    error::RuntimeError,
    get_result,
    interpreter::{evaluator::core::Evaluator, value::core::Value},
    script_paths,
};

#[test]
fn script_corpus_passes() {
    let config = Config::default();
    let scripts = script_paths(Path::new("tests/scripts"));

    for path in &scripts {
        let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
                                                      panic!("Failed to read {path:?}: {e}")
                                                  });
        match get_result(&source, &config) {
            Ok(true) => {},
            Ok(false) => panic!("Script {path:?} finished with a falsy result"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(!scripts.is_empty(), "No scripts found in tests/scripts");
}

fn assert_success(src: &str) {
    match get_result(src, &Config::default()) {
        Ok(true) => {},
        Ok(false) => panic!("Script finished with a falsy result:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match get_result(src, &Config::default()) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match assert_failure(src) {
        Error::Runtime(e) => e,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

/// Runs `src` with `print` captured and returns what was printed.
fn printed(src: &str) -> String {
    #[derive(Clone, Default)]
    struct Sink(Rc<RefCell<Vec<u8>>>);

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let sink = Sink::default();
    let program = adder::parse(src, &Config::default()).unwrap();
    let mut evaluator = Evaluator::new().with_output(sink.clone());
    evaluator.execute(&program).unwrap();
    let bytes = sink.0.borrow().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("x = 1 + 2\nresult = x == 3\n");
    assert_success("x = 7 * 9\nresult = x == 63\n");
    assert_success("x = 8 - 5\nresult = x == 3\n");
    assert_success("x = 10 / 4\nresult = x == 2.5\n");
    assert_success("result = 1 + 2 * 3 == 7\n");
}

#[test]
fn floor_division_and_modulo_round_down() {
    assert_success("result = -7 // 2 == -4 and -7 % 2 == 1\n");
    assert_success("result = 7 // -2 == -4 and 7 % -2 == -1\n");
    assert_success("result = 7.5 // 2 == 3.0 and -7.5 % 2 == 0.5\n");
}

#[test]
fn compound_assignments() {
    assert_success("x = 2\nx += 3\nresult = x == 5\n");
    assert_success("x = 7\nx -= 2\nresult = x == 5\n");
    assert_success("x = 4\nx *= 2\nresult = x == 8\n");
    assert_success("x = 9\nx /= 3\nresult = x == 3.0\n");
    assert_success("x = 3\nx **= 2\nx //= 2\nx %= 3\nresult = x == 1\n");
    assert_success("x = 1\nx <<= 4\nx |= 1\nx ^= 3\nx &= 30\nx >>= 1\nresult = x == 9\n");
}

#[test]
fn while_loop_counts() {
    assert_success("a = 1\nwhile a < 5:\n    a = a + 1\nresult = a == 5\n");
    assert_success("n = 10\ntotal = 0\nwhile n:\n    total += n\n    n -= 1\nresult = total == 55\n");
}

#[test]
fn if_elif_else_chain() {
    assert_success("if 0:\n    a = 1\nelse:\n    a = 2\nresult = a == 2\n");
    assert_success(r#"
x = 15
if x < 10:
    size = "small"
elif x < 20:
    size = "medium"
else:
    size = "large"
result = size == "medium"
"#);
    assert_success("x = 0\nif x: y = 1\nelif not x: y = 2\nresult = y == 2\n");
}

#[test]
fn nested_blocks_and_dedent_to_outer_level() {
    assert_success(r#"
i = 0
evens = 0
while i < 10:
    if i % 2 == 0:
        evens += 1
    i += 1
result = evens == 5 and i == 10
"#);
}

#[test]
fn brackets_continue_lines() {
    assert_success("total = (1 +\n         2 +\n  3)\nresult = total == 6\n");
    assert_success("total = 1 + \\\n    2\nresult = total == 3\n");
}

#[test]
fn logical_operators_short_circuit() {
    assert_success("result = (0 or 5) == 5 and (3 and 4) == 4\n");
    assert_success("result = 0 and undefined_name == 1\nresult = not result\n");
    assert_success("result = 1 or undefined_name\n");
}

#[test]
fn comparisons_membership_and_identity() {
    assert_success("result = 2 < 3 and 3 > 2 and 2 <= 2 and 3 >= 3 and 2 != 3\n");
    assert_success("result = 'ell' in 'hello' and 'z' not in 'hello'\n");
    assert_success("result = None is None and 1 is not True\n");
    assert_success("result = 1 == 1.0 and True == 1\n");
}

#[test]
fn strings_and_bytes() {
    assert_success("s = 'ab' * 3\nresult = s == 'ababab' and len(s) == 6\n");
    assert_success("s = 'con' 'cat' \"enated\"\nresult = s == 'concatenated'\n");
    assert_success("b = b'\\x00ab' + b'c'\nresult = len(b) == 4 and 97 in b\n");
    assert_success("result = 'abc' < 'abd' and repr('a') == \"'a'\"\n");
}

#[test]
fn numeric_literals() {
    assert_success("result = 0x1A == 26 and 0o17 == 15 and 0b101 == 5\n");
    assert_success("result = 1e3 == 1000.0 and .5 == 0.5 and 10. == 10\n");
    assert_success("c = 2j * 2j\nresult = c == -4\n");
}

#[test]
fn power_and_unary_operators() {
    assert_success("result = 2 ** 10 == 1024 and 2 ** -1 == 0.5\n");
    assert_success("result = -2 ** 2 == -4 and 2 ** 3 ** 2 == 512\n");
    assert_success("result = ~5 == -6 and -(-3) == 3 and +True == 1\n");
}

#[test]
fn builtin_functions() {
    assert_success("result = abs(-5) == 5 and abs(3 + 4j) == 5.0\n");
    assert_success("result = int('42') + int(3.9) == 45 and float('1.5') == 1.5\n");
    assert_success("result = str(12) == '12' and bool('') == False\n");
    assert_success("result = min(3, 1, 2) == 1 and max(3, 1, 2) == 3\n");
    assert_success("result = type(1.0) == \"<class 'float'>\"\n");
}

#[test]
fn user_defined_function_and_calls() {
    let output = printed("def greet(name, punctuation='!'):\n    print('hi', name)\n\ngreet('bob', '?')\n");
    assert_eq!(output, "hi bob\n");
}

#[test]
fn function_definition_accepts_annotations() {
    let output = printed("def f(x: int, y: int,) -> None:\n    print(x + y)\nf(2, 3)\n");
    assert_eq!(output, "5\n");
}

#[test]
fn function_locals_do_not_leak() {
    let evaluator = adder::execute("def f(x):\n    y = x\nf(1)\n", &Config::default()).unwrap();
    assert_eq!(evaluator.global("y"), None);
    assert_eq!(evaluator.live_scopes(), 1);
}

#[test]
fn functions_see_globals() {
    let output = printed("base = 10\ndef show(n):\n    print(base + n)\nshow(5)\n");
    assert_eq!(output, "15\n");
}

#[test]
fn user_calls_yield_none() {
    assert_success("def f():\n    pass\nresult = f() is None\n");
}

#[test]
fn print_formats_like_str() {
    assert_eq!(printed("print(1, 2.0, 'x', None, True)\n"), "1 2.0 x None True\n");
    assert_eq!(printed("print()\n"), "\n");
    assert_eq!(printed("print(1 / 3)\nprint(1e16)\n"), "0.3333333333333333\n1e+16\n");
    assert_eq!(printed("print(repr('a\\n'), b'hi')\n"), "'a\\n' b'hi'\n");
    assert_eq!(printed("print(1 + 2j, 3j)\n"), "(1+2j) 3j\n");
}

#[test]
fn semicolons_separate_statements() {
    assert_success("a = 1; b = 2; result = a + b == 3;\n");
}

#[test]
fn missing_result_is_false() {
    assert!(!get_result("x = 1\n", &Config::default()).unwrap());
}

#[test]
fn custom_result_name() {
    let config = Config::default().with_result_name("ok");
    assert!(get_result("ok = 1\n", &config).unwrap());
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(runtime_error("x = 1 / 0\n"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_error("x = 1\ny = x % 0\n"),
                     RuntimeError::DivisionByZero { line: 2 }));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(runtime_error("x = 9223372036854775807 + 1\n"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("x = 2 ** 64\n"), RuntimeError::Overflow { .. }));
}

#[test]
fn undefined_function_names_the_function() {
    let err = runtime_error("frobnicate(1)\n");
    assert!(matches!(&err, RuntimeError::UndefinedName { name, .. } if name == "frobnicate"));
    assert!(err.to_string().contains("frobnicate"));
}

#[test]
fn wrong_arity_reports_counts() {
    let err = runtime_error("def f(a, b):\n    pass\nf(1)\n");
    assert!(matches!(err,
                     RuntimeError::ArityMismatch { expected: 2,
                                                   found: 1,
                                                   line: 3,
                                                   .. }));
    assert!(err.to_string().contains("takes 2 positional arguments but 1 was given"));
}

#[test]
fn builtin_arity_is_checked() {
    assert!(matches!(runtime_error("len()\n"), RuntimeError::BuiltinArityMismatch { .. }));
}

#[test]
fn calling_a_value_is_error() {
    assert!(matches!(runtime_error("x = 1\nx()\n"),
                     RuntimeError::NotCallable { type_name: "int", .. }));
}

#[test]
fn function_used_as_value_is_error() {
    assert!(matches!(runtime_error("def f():\n    pass\ny = f\n"),
                     RuntimeError::FunctionAsValue { .. }));
}

#[test]
fn unsupported_operands_are_errors() {
    assert!(matches!(runtime_error("x = 'a' + 1\n"),
                     RuntimeError::UnsupportedOperands { left: "str",
                                                         right: "int",
                                                         .. }));
    assert!(matches!(runtime_error("x = -'a'\n"), RuntimeError::UnsupportedOperand { .. }));
    assert!(matches!(runtime_error("x = 1j < 2j\n"), RuntimeError::UnsupportedOperands { .. }));
}

#[test]
fn syntax_errors_are_reported() {
    assert!(matches!(assert_failure("x = (1 + 2]\n"), Error::Lex(_)));
    assert!(matches!(assert_failure("if x:\n        a = 1\n    b = 2\n"), Error::Lex(_)));
    assert!(matches!(assert_failure("return 1\n"), Error::Parse(_)));
    assert!(matches!(assert_failure("x = \n"), Error::Parse(_)));
}

#[test]
fn globals_are_readable_after_execution() {
    let evaluator = adder::execute("b = 2\na = 1\n", &Config::default()).unwrap();
    let names: Vec<&str> = evaluator.globals()
                                    .into_iter()
                                    .map(|(name, _)| name)
                                    .collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(evaluator.global("a"), Some(&Value::Int(1)));
}
