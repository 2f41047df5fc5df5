/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, loose equality, and the short-circuiting
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the control-flow outcome type, and the
/// dispatch over statements and expressions.
pub mod core;

/// Evaluation of loops.
///
/// Runs `jaba` and `prawahit` loops inside their own scope frame and
/// interprets `thodau`/`jari` outcomes of the body.
pub mod for_loop;

/// Evaluation of `pryas`/`samatan`.
///
/// Catches runtime errors escaping a block and hands their message to the
/// handler.
pub mod try_catch;

/// Index and property access.
///
/// Reads and writes through `x[i]` and `x.name` on lists, records and text.
pub mod access;

/// Utility functions for evaluation.
///
/// Scope-stack helpers and argument checks shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
