use crate::error::LexError;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing.
///
/// Token kinds are named by their upper-case tag (`LPAREN`, `NEWLINE`, `ID`,
/// ...), see [`TokenKind::name`](crate::interpreter::lexer::TokenKind::name).
pub enum ParseError {
    /// The lexer failed while the parser was pulling the next token.
    Lex(LexError),
    /// A specific token kind was required but another one was found.
    UnexpectedToken {
        /// The kind the grammar required.
        expected: String,
        /// The kind actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `sathi` was followed by something that starts no statement.
    ExpectedStatementKeyword {
        /// The kind actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A statement started with an identifier that is followed by neither an
    /// assignment nor a call.
    UnexpectedAfterIdentifier {
        /// The kind actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An expression was required but the token cannot start one.
    ExpectedExpression {
        /// The kind actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A statement was required but the token cannot start one.
    ExpectedStatement {
        /// The kind actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedStatementKeyword { line, .. }
            | Self::UnexpectedAfterIdentifier { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::ExpectedStatement { line, .. } => *line,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::UnexpectedToken { expected, found, line } => {
                write!(f, "Expected {expected}, got {found} at line {line}")
            },
            Self::ExpectedStatementKeyword { found, line } => {
                write!(f, "Expected BHANA or YO after SATHI, got {found} at line {line}")
            },
            Self::UnexpectedAfterIdentifier { found, line } => {
                write!(f, "Unexpected token after identifier: {found} at line {line}")
            },
            Self::ExpectedExpression { found, line } => {
                write!(f, "Unexpected token: {found} at line {line}")
            },
            Self::ExpectedStatement { found, line } => {
                write!(f, "Unexpected start of statement: {found} at line {line}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
