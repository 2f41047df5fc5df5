/// The reason a character sequence could not be turned into a token.
///
/// `UnknownCharacter` is the default because the lexer reports it for any
/// input no token pattern matches; the offending character is filled in by
/// the lexer once the position is known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[default]
    UnknownCharacter,
    /// Quoted text that reached the end of input before its closing quote.
    UnterminatedString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A lexical error together with its source position.
pub struct LexError {
    /// What went wrong.
    pub kind:   LexErrorKind,
    /// The offending character, when there is one.
    pub found:  Option<char>,
    /// The source line where the error occurred.
    pub line:   usize,
    /// The column (1-based, in characters) where the error occurred.
    pub column: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LexErrorKind::UnknownCharacter => {
                let c = self.found.unwrap_or(char::REPLACEMENT_CHARACTER);
                write!(f,
                       "Unknown character: {c} at line {}, column {}",
                       self.line, self.column)
            },
            LexErrorKind::UnterminatedString => {
                write!(f, "Unterminated string at line {}", self.line)
            },
        }
    }
}

impl std::error::Error for LexError {}
