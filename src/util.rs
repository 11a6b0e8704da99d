/// Numeric conversion and formatting helpers.
///
/// This module provides checked conversions between integer and
/// floating-point types, and the textual representation of floats and complex
/// components used by `str()`, `repr()` and `print()`.
pub mod num;
