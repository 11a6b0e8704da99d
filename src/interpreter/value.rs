/// Complex number support.
///
/// Defines the `ComplexNumber` type produced by imaginary literals such as
/// `2j`. Includes the arithmetic operators, checked division and powers, and
/// `repr()` formatting.
pub mod complex;

/// The runtime `Value` type, its type tags, truthiness, equality and textual
/// representations.
pub mod core;
