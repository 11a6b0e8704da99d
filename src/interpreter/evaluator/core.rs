use std::{fmt, io, rc::Rc};

use tracing::debug;

use crate::{
    ast::{BinaryOperator, FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            function::core::{Arity, BUILTIN_TABLE, Builtin, BuiltinFn},
            scope::{Binding, ScopeArena, ScopeId, Symbol, UserFunction},
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation state.
///
/// The evaluator owns the scope arena, the scope that statements currently
/// execute in, and the sink that `print` writes to.
///
/// ## Usage
///
/// An `Evaluator` is created once per program. After [`Evaluator::execute`]
/// returns, the final global bindings can be read with
/// [`Evaluator::global`] and [`Evaluator::globals`].
pub struct Evaluator {
    pub(crate) scopes:  ScopeArena,
    pub(crate) current: ScopeId,
    pub(crate) output:  Box<dyn io::Write>,
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
         .field("scopes", &self.scopes)
         .field("current", &self.current)
         .finish_non_exhaustive()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator whose global scope holds the builtin functions
    /// and whose output goes to standard output.
    #[must_use]
    pub fn new() -> Self {
        let mut scopes = ScopeArena::new();
        for def in BUILTIN_TABLE {
            scopes.define(ScopeId::GLOBAL,
                          def.name,
                          Symbol::Builtin(Builtin { name:  def.name.to_string(),
                                                    arity: def.arity,
                                                    func:  def.func, }));
        }
        Self { scopes,
               current: ScopeId::GLOBAL,
               output: Box::new(io::stdout()) }
    }

    /// Replaces the sink that `print` writes to.
    ///
    /// # Example
    /// ```
    /// use adder::{interpreter::evaluator::core::Evaluator, parse, config::Config};
    ///
    /// let program = parse("print(1 + 1)\n", &Config::default()).unwrap();
    /// let mut evaluator = Evaluator::new().with_output(Vec::new());
    /// evaluator.execute(&program).unwrap();
    /// ```
    #[must_use]
    pub fn with_output(mut self, output: impl io::Write + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Binds a host function in the global scope, replacing any binding of
    /// the same name.
    pub fn register_builtin(&mut self, name: &str, arity: Arity, func: BuiltinFn) {
        self.scopes.define(ScopeId::GLOBAL,
                           name,
                           Symbol::Builtin(Builtin { name: name.to_string(),
                                                     arity,
                                                     func }));
    }

    /// Executes a program, usually the [`Node::Block`] returned by the
    /// parser, in the current scope.
    pub fn execute(&mut self, program: &Node) -> EvalResult<()> {
        self.eval(program)?;
        self.output
            .flush()
            .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                line:    program.line_number(), })
    }

    /// The value bound to `name` in the global scope, if it is bound to a
    /// value rather than a function.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<&Value> {
        match self.scopes.lookup(ScopeId::GLOBAL, name)? {
            Symbol::Value(binding) => Some(&binding.value),
            Symbol::Function(_) | Symbol::Builtin(_) => None,
        }
    }

    /// Every value binding of the global scope, sorted by name.
    #[must_use]
    pub fn globals(&self) -> Vec<(&str, &Value)> {
        let mut bindings: Vec<_> = self.scopes
                                       .symbols(ScopeId::GLOBAL)
                                       .filter_map(|(name, symbol)| match symbol {
                                           Symbol::Value(binding) => Some((name, &binding.value)),
                                           _ => None,
                                       })
                                       .collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }

    /// Number of live scopes, the global scope included.
    #[must_use]
    pub fn live_scopes(&self) -> usize {
        self.scopes.live_count()
    }

    /// Evaluates a node and returns its value.
    ///
    /// Statements evaluate to `None`; expressions to their result. The
    /// dispatch is exhaustive over [`Node`].
    pub fn eval(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Literal { value, .. } => Ok(Value::from(value.clone())),
            Node::Identifier { name, line } => self.eval_identifier(name, *line),
            Node::UnaryOp { op, operand, line } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, &value, *line)
            },
            Node::BinaryOp { op, left, right, line } => self.eval_binary_op(*op, left, right, *line),
            Node::Assign { target, value, .. } => {
                let value = self.eval(value)?;
                self.scopes
                    .define(self.current, target.as_str(), Symbol::Value(Binding::new(value)));
                Ok(Value::None)
            },
            Node::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                if self.eval(condition)?.is_truthy() {
                    self.eval(then_branch)?;
                } else {
                    self.eval(else_branch)?;
                }
                Ok(Value::None)
            },
            Node::While { condition, body, .. } => {
                while self.eval(condition)?.is_truthy() {
                    self.eval(body)?;
                }
                Ok(Value::None)
            },
            Node::Block { statements, .. } => {
                for statement in statements {
                    self.eval(statement)?;
                }
                Ok(Value::None)
            },
            Node::FunctionDef(def) => {
                self.define_function(def);
                Ok(Value::None)
            },
            Node::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
            Node::NoOp { .. } => Ok(Value::None),
        }
    }

    fn eval_identifier(&self, name: &str, line: u32) -> EvalResult<Value> {
        match self.scopes.lookup(self.current, name) {
            Some(Symbol::Value(binding)) => Ok(binding.value.clone()),
            Some(Symbol::Function(_) | Symbol::Builtin(_)) => {
                Err(RuntimeError::FunctionAsValue { name: name.to_string(),
                                                    line })
            },
            None => Err(RuntimeError::UndefinedName { name: name.to_string(),
                                                      line }),
        }
    }

    /// Evaluates a binary operator node. `and` and `or` only evaluate their
    /// right operand when the left one does not decide the result.
    fn eval_binary_op(&mut self,
                      op: BinaryOperator,
                      left: &Node,
                      right: &Node,
                      line: u32)
                      -> EvalResult<Value> {
        let left = self.eval(left)?;
        match op {
            BinaryOperator::And if !left.is_truthy() => Ok(left),
            BinaryOperator::Or if left.is_truthy() => Ok(left),
            BinaryOperator::And | BinaryOperator::Or => self.eval(right),
            _ => {
                let right = self.eval(right)?;
                Self::eval_binary(op, &left, &right, line)
            },
        }
    }

    fn define_function(&mut self, def: &FunctionDef) {
        debug!(function = %def.name, params = def.params.len(), line = def.line, "defined function");
        let function = UserFunction { name:   def.name.clone(),
                                      params: def.params.clone(),
                                      body:   (*def.body).clone(), };
        self.scopes
            .define(self.current, def.name.as_str(), Symbol::Function(Rc::new(function)));
    }
}
