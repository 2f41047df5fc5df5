/// Numeric conversion and formatting helpers.
///
/// Sathi has a single number type (`f64`), but lists and text are indexed by
/// `usize` and printed values must follow a fixed textual form. This module
/// keeps those conversions in one place so that every caller treats negative,
/// fractional, and non-finite numbers the same way.
pub mod num;
