/// Operator dispatch.
pub mod core;

/// Arithmetic and text concatenation.
pub mod scalar;

/// Ordering and loose equality.
pub mod comparison;

/// Short-circuiting `ra`/`wa`.
pub mod logic;
