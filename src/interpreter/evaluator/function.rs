/// Value conversion and inspection builtins: `len`, `abs`, `str`, `repr`,
/// `int`, `float`, `bool` and `type`.
pub mod builtin;
/// `min` and `max` function implementations.
///
/// Returns the smallest or largest of the arguments, or of the characters of
/// a single string argument.
pub mod min_max;
/// The `print` function implementation.
///
/// Writes its arguments to the evaluator's output sink.
pub mod print;

pub mod core;
