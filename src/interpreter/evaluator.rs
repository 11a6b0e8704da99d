/// Core evaluation logic and the `Evaluator` state.
///
/// Contains the node dispatcher, statement execution, name resolution, and
/// the public accessors for the global scope.
pub mod core;

/// Scope arena.
///
/// Scope records addressed by `ScopeId`, the symbols they bind, and the
/// allocate/release cycle used by function calls.
pub mod scope;

/// Unary operator evaluation logic.
///
/// Implements `+`, `-`, `~` and `not`.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, powers, bitwise operators, comparisons, membership,
/// identity, and the string and bytes operators.
pub mod binary;

/// Function evaluation.
///
/// Handles user-defined and builtin function calls, argument checking, and
/// the builtin function table.
pub mod function;
