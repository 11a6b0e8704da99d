/// Operator dispatch.
pub mod core;

/// Numeric `+ - * / // %` over `bool`, `int`, `float` and `complex`.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// Shifts and the bitwise `& | ^` operators.
pub mod bitwise;

/// Equality, ordering, membership and identity.
pub mod comparison;

/// Concatenation and repetition of strings and bytes.
pub mod sequence;
