use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Writes the arguments to the evaluator's output, separated by single
/// spaces and terminated by a newline.
///
/// Accepts any number of arguments; each one is formatted the way `str()`
/// formats it.
///
/// # Returns
/// `Value::None`.
///
/// # Example
/// ```
/// use std::{cell::RefCell, io, rc::Rc};
///
/// use adder::interpreter::{
///     evaluator::{core::Evaluator, function::print::print},
///     value::core::Value,
/// };
///
/// #[derive(Clone, Default)]
/// struct Sink(Rc<RefCell<Vec<u8>>>);
///
/// impl io::Write for Sink {
///     fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
///         self.0.borrow_mut().extend_from_slice(buf);
///         Ok(buf.len())
///     }
///
///     fn flush(&mut self) -> io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let sink = Sink::default();
/// let mut evaluator = Evaluator::new().with_output(sink.clone());
/// let result = print(&mut evaluator, &[Value::Int(42), Value::from("x")], 1).unwrap();
///
/// assert_eq!(result, Value::None);
/// assert_eq!(sink.0.borrow().as_slice(), b"42 x\n");
/// ```
pub fn print(evaluator: &mut Evaluator, args: &[Value], line: u32) -> EvalResult<Value> {
    let text = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");

    writeln!(evaluator.output, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                            line })?;
    Ok(Value::None)
}
