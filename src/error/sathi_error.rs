use crate::error::{LexError, ParseError, RuntimeError};

#[derive(Debug, Clone, PartialEq)]
/// Any failure of a run, tagged with the stage that produced it.
///
/// The display text is the bare message of the underlying error, which is
/// what the command line prints after `Error: `.
pub enum SathiError {
    /// The source contained text the lexer could not tokenize.
    Lex(LexError),
    /// The token stream did not match the grammar.
    Parse(ParseError),
    /// Evaluation failed and no `samatan` clause caught the failure.
    Runtime(RuntimeError),
}

impl SathiError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<LexError> for SathiError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for SathiError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lex(e) => Self::Lex(e),
            other => Self::Parse(other),
        }
    }
}

impl From<RuntimeError> for SathiError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for SathiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SathiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
