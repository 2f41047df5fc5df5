/// The `Value` union and its basic operations.
///
/// Declares the runtime values (number, text, boolean, null, list, record),
/// their display form, truthiness, type names, and checked conversions used
/// by operators and built-ins.
pub mod core;
/// Loose equality.
///
/// Implements the comparison behind `==` and `!=`, including the coercions
/// between numbers, text, and booleans.
pub mod equality;
/// Insertion-ordered records.
///
/// Defines the `Record` type stored behind `Value::Record`: a small map that
/// keeps keys in the order they were first inserted, so records print the way
/// they were written.
pub mod record;
