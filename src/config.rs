/// Call depth used when no explicit limit is configured.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 128;

/// Options for a single run of the interpreter.
///
/// A `Config` is read once when a [`Context`](crate::interpreter::evaluator::core::Context)
/// is created and never changes during the run.
///
/// # Example
/// ```
/// use sathi::{Config, run_with_config};
///
/// let config = Config { max_call_depth: 8 };
/// let source = "kaam f(n) {\n firta f(n + 1)\n}\nf(0)";
///
/// let err = run_with_config(source, &config).unwrap_err();
/// assert_eq!(err.to_string(), "Maximum call depth exceeded (8)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many user-function calls may be active at once before the run
    /// fails with a runtime error.
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}
