/// Conversion and inspection built-ins.
///
/// `sankhya`, `shabda`, `tathya`, `prakar` and `padhne`.
pub mod builtin;
/// Text built-ins.
///
/// Length, case conversion, search, slicing and concatenation, all working on
/// characters rather than bytes.
pub mod text;
/// List built-ins.
///
/// Appending, popping, and index reads and writes through function calls.
pub mod list;
/// Numeric built-ins.
///
/// Rounding, absolute value, powers, square roots and random numbers.
pub mod math;
/// `thulo` and `sano` implementations.
///
/// Returns the maximum or minimum of any number of numeric arguments.
pub mod min_max;

pub mod core;
