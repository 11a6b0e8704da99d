use std::{fmt, rc::Rc};

use tracing::debug;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, min_max, print},
            scope::{Binding, ScopeId, Symbol, UserFunction},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluator, a slice of evaluated argument values and
/// the line number of the call.
pub type BuiltinFn = fn(&mut Evaluator, &[Value], u32) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
/// - `Any` accepts every argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of the listed counts.
    OneOf(&'static [usize]),
    /// This many arguments or more.
    AtLeast(usize),
    /// Any number of arguments.
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::OneOf(&[0, 1]).check(0));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// assert!(Arity::Any.check(17));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(counts) => counts.contains(&n),
            Self::AtLeast(m) => n >= *m,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(m) => write!(f, "{m}"),
            Self::OneOf(counts) => {
                let counts: Vec<String> = counts.iter().map(ToString::to_string).collect();
                write!(f, "{}", counts.join(" or "))
            },
            Self::AtLeast(m) => write!(f, "at least {m}"),
            Self::Any => write!(f, "any number of"),
        }
    }
}

/// A host function bound in a scope.
#[derive(Clone)]
pub struct Builtin {
    /// The name it was registered under.
    pub name:  String,
    /// Accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the accepted argument counts,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (table row),
/// - `BUILTIN_TABLE` (static table the global scope is seeded from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// One row of the builtin table.
        pub struct BuiltinDef {
            /// Name bound in the global scope.
            pub name:  &'static str,
            /// Accepted argument counts.
            pub arity: Arity,
            /// The implementation.
            pub func:  BuiltinFn,
        }
        /// Every builtin, in the order the global scope is seeded.
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print" => { arity: Arity::Any, func: print::print },
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "str"   => { arity: Arity::OneOf(&[0, 1]), func: builtin::str },
    "repr"  => { arity: Arity::Exact(1), func: builtin::repr },
    "int"   => { arity: Arity::OneOf(&[0, 1]), func: builtin::int },
    "float" => { arity: Arity::OneOf(&[0, 1]), func: builtin::float },
    "bool"  => { arity: Arity::OneOf(&[0, 1]), func: builtin::bool },
    "type"  => { arity: Arity::Exact(1), func: builtin::type_name },
    "min"   => { arity: Arity::AtLeast(1), func: |_, args, line| min_max::min_max("min", args, line) },
    "max"   => { arity: Arity::AtLeast(1), func: |_, args, line| min_max::min_max("max", args, line) },
}

/// Checks an argument count against a builtin's arity.
pub fn check_arity(name: &str, arity: Arity, args: &[Value], line: u32) -> EvalResult<()> {
    if arity.check(args.len()) {
        Ok(())
    } else {
        Err(RuntimeError::BuiltinArityMismatch { name: name.to_string(),
                                                 expected: arity.to_string(),
                                                 found: args.len(),
                                                 line })
    }
}

/// What a call resolved to.
enum Callee {
    User(Rc<UserFunction>),
    Host(Builtin),
}

impl Evaluator {
    /// Evaluates a function call.
    ///
    /// The callee is resolved through the scope chain first, then every
    /// argument is evaluated left to right in the caller's scope, and
    /// finally the builtin or user function is invoked.
    ///
    /// # Errors
    /// - `UndefinedName` when nothing is bound to `name`.
    /// - `NotCallable` when `name` is bound to a plain value.
    /// - `ArityMismatch` / `BuiltinArityMismatch` on a wrong argument count.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Node],
                            line: u32)
                            -> EvalResult<Value> {
        let callee = match self.scopes.lookup(self.current, name) {
            Some(Symbol::Function(function)) => Callee::User(Rc::clone(function)),
            Some(Symbol::Builtin(builtin)) => Callee::Host(builtin.clone()),
            Some(Symbol::Value(binding)) => {
                return Err(RuntimeError::NotCallable { name: name.to_string(),
                                                       type_name: binding.ty.name(),
                                                       line });
            },
            None => {
                return Err(RuntimeError::UndefinedName { name: name.to_string(),
                                                         line });
            },
        };

        let mut arg_vals = Vec::with_capacity(arguments.len());
        for argument in arguments {
            arg_vals.push(self.eval(argument)?);
        }

        match callee {
            Callee::Host(builtin) => {
                check_arity(&builtin.name, builtin.arity, &arg_vals, line)?;
                (builtin.func)(self, &arg_vals, line)
            },
            Callee::User(function) => self.call_user_defined_function(&function, arg_vals, line),
        }
    }

    /// Executes a user-defined function in a fresh scope whose parent is the
    /// global scope. The scope is released before any error propagates.
    ///
    /// # Returns
    /// Always `None`: function bodies produce no value.
    fn call_user_defined_function(&mut self,
                                  function: &UserFunction,
                                  arg_vals: Vec<Value>,
                                  line: u32)
                                  -> EvalResult<Value> {
        if arg_vals.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name: function.name.clone(),
                                                     expected: function.params.len(),
                                                     found: arg_vals.len(),
                                                     line });
        }

        let scope = self.scopes.allocate(Some(ScopeId::GLOBAL));
        for (param, value) in function.params.iter().zip(arg_vals) {
            self.scopes
                .define(scope, param.as_str(), Symbol::Value(Binding::new(value)));
        }

        debug!(function = %function.name, scope = scope.0, line, "enter function");
        let caller = std::mem::replace(&mut self.current, scope);
        let result = self.eval(&function.body);
        self.current = caller;
        self.scopes.release(scope);
        debug!(function = %function.name, ok = result.is_ok(), "exit function");

        result.map(|_| Value::None)
    }
}
