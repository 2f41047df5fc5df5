#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// Every variant records the source line of the construct that failed. The
/// display text deliberately leaves the line out: it is the message a
/// `samatan` clause binds and the text `run` reports, so it reads exactly
/// `Undefined variable: x` or `Division by zero`.
pub enum RuntimeError {
    /// Tried to read a variable that is bound in no scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to reassign a variable that is bound in no scope.
    UndefinedAssignment {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that is neither a built-in nor a user function.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable description of the accepted counts.
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An index could not be used with the indexed value.
    InvalidIndex {
        /// Details about why the index is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// `thodau` reached a function boundary or the top level.
    BreakOutsideLoop {
        /// The source line of the `thodau` statement.
        line: usize,
    },
    /// `jari` reached a function boundary or the top level.
    ContinueOutsideLoop {
        /// The source line of the `jari` statement.
        line: usize,
    },
    /// `firta` reached the top level.
    ReturnOutsideFunction {
        /// The source line of the `firta` statement.
        line: usize,
    },
    /// Function calls nested deeper than the configured limit.
    CallDepthExceeded {
        /// The configured limit.
        limit: usize,
        /// The source line of the call that went over the limit.
        line:  usize,
    },
}

impl RuntimeError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::UndefinedAssignment { line, .. }
            | Self::UndefinedFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::ModuloByZero { line }
            | Self::TypeError { line, .. }
            | Self::InvalidIndex { line, .. }
            | Self::BreakOutsideLoop { line }
            | Self::ContinueOutsideLoop { line }
            | Self::ReturnOutsideFunction { line }
            | Self::CallDepthExceeded { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, .. } => write!(f, "Undefined variable: {name}"),
            Self::UndefinedAssignment { name, .. } => {
                write!(f, "Cannot reassign undefined variable: {name}")
            },
            Self::UndefinedFunction { name, .. } => write!(f, "Undefined function: {name}"),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          .. } => {
                write!(f, "Function {name} expects {expected} arguments, got {found}")
            },
            Self::DivisionByZero { .. } => write!(f, "Division by zero"),
            Self::ModuloByZero { .. } => write!(f, "Modulo by zero"),
            Self::TypeError { details, .. } => write!(f, "Type error: {details}"),
            Self::InvalidIndex { details, .. } => write!(f, "Invalid index: {details}"),
            Self::BreakOutsideLoop { .. } => write!(f, "thodau used outside of a loop"),
            Self::ContinueOutsideLoop { .. } => write!(f, "jari used outside of a loop"),
            Self::ReturnOutsideFunction { .. } => write!(f, "firta used outside of a function"),
            Self::CallDepthExceeded { limit, .. } => {
                write!(f, "Maximum call depth exceeded ({limit})")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
