use logos::Logos;

use crate::error::{LexError, LexErrorKind};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents the kind of a lexical token, with its literal payload.
///
/// Keywords are matched as whole words, so `sathi_x` and `tala_math` are
/// identifiers. Newlines are tokens of their own because statements end at
/// the end of a line.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Quoted text, with escapes already resolved.
    #[token("\"", lex_string)]
    #[token("'", lex_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `jod`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,

    /// `sathi`
    #[token("sathi")]
    Sathi,
    /// `yo`
    #[token("yo")]
    Yo,
    /// `ho`
    #[token("ho")]
    Ho,
    /// `bhana`
    #[token("bhana")]
    Bhana,
    /// `yadi`
    #[token("yadi")]
    If,
    /// `anya`
    #[token("anya")]
    Else,
    /// `jaba`
    #[token("jaba")]
    While,
    /// `prawahit`
    #[token("prawahit")]
    For,
    /// `dekhi`
    #[token("dekhi")]
    From,
    /// `samma`
    #[token("samma")]
    To,
    /// `kadam`
    #[token("kadam")]
    Step,
    /// `kaam`
    #[token("kaam")]
    Function,
    /// `firta`
    #[token("firta")]
    Return,
    /// `thodau`
    #[token("thodau")]
    Break,
    /// `jari`
    #[token("jari")]
    Continue,
    /// `pryas`
    #[token("pryas")]
    Try,
    /// `samatan`
    #[token("samatan")]
    Catch,
    /// `satya`
    #[token("satya")]
    True,
    /// `asatya`
    #[token("asatya")]
    False,
    /// `khali`
    #[token("khali")]
    Null,
    /// `ra`
    #[token("ra")]
    And,
    /// `wa`
    #[token("wa")]
    Or,
    /// `hoina`
    #[token("hoina")]
    Not,
    /// `ma`
    #[token("ma")]
    In,

    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// End of a line.
    #[token("\n")]
    NewLine,
    /// End of input. Never produced by the pattern matcher; [`Lexer`] emits
    /// it once the source is exhausted.
    Eof,
}

impl TokenKind {
    /// The upper-case tag used for this kind in syntax errors.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::LParen.name(), "LPAREN");
    /// assert_eq!(TokenKind::Identifier("x".into()).name(), "ID");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Str(_) => "STRING",
            Self::Identifier(_) => "ID",
            Self::Comment => "COMMENT",
            Self::Sathi => "SATHI",
            Self::Yo => "YO",
            Self::Ho => "HO",
            Self::Bhana => "BHANA",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::From => "FROM",
            Self::To => "TO",
            Self::Step => "STEP",
            Self::Function => "FUNCTION",
            Self::Return => "RETURN",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Try => "TRY",
            Self::Catch => "CATCH",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::EqualEqual => "EQ",
            Self::BangEqual => "NE",
            Self::LessEqual => "LE",
            Self::GreaterEqual => "GE",
            Self::AndAnd => "AND_OP",
            Self::PipePipe => "OR_OP",
            Self::Equals => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MUL",
            Self::Slash => "DIV",
            Self::Percent => "MOD",
            Self::Less => "LT",
            Self::Greater => "GT",
            Self::Bang => "NOT_OP",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Dot => "DOT",
            Self::NewLine => "NEWLINE",
            Self::Eof => "EOF",
        }
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token, with its payload.
    pub kind:   TokenKind,
    /// The 1-based source line.
    pub line:   usize,
    /// The 1-based column, counted in characters.
    pub column: usize,
}

/// Pull-model lexer over a source string.
///
/// Each call to [`Lexer::next_token`] returns exactly one token. Once the
/// source is exhausted every further call returns [`TokenKind::Eof`], so a
/// token stream always ends with it.
///
/// # Example
/// ```
/// use sathi::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("sathi bhana(x)");
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Sathi);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Bhana);
/// ```
pub struct Lexer<'src> {
    inner:      logos::Lexer<'src, TokenKind>,
    source:     &'src str,
    /// The line the next token starts on.
    line:       usize,
    /// Byte offset of the first character of `line`.
    line_start: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source),
               source,
               line: 1,
               line_start: 0 }
    }

    /// Produces the next token.
    ///
    /// # Errors
    /// Returns a [`LexError`] for a character that starts no token and for
    /// quoted text without a closing quote. The error is fatal; callers are
    /// not expected to keep pulling tokens after one.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let Some(result) = self.inner.next() else {
            return Ok(Token { kind:   TokenKind::Eof,
                              line:   self.line,
                              column: self.column_at(self.source.len()), });
        };

        let span = self.inner.span();
        let line = self.line;
        let column = self.column_at(span.start);
        self.advance_lines(span.start, self.inner.slice());

        match result {
            Ok(kind) => Ok(Token { kind, line, column }),
            Err(LexErrorKind::UnterminatedString) => {
                Err(LexError { kind: LexErrorKind::UnterminatedString,
                               found: None,
                               line: self.line,
                               column })
            },
            Err(kind) => Err(LexError { kind,
                                        found: self.source[span.start..].chars().next(),
                                        line,
                                        column }),
        }
    }

    /// Moves the line counter past any newlines inside the token just read.
    fn advance_lines(&mut self, start: usize, slice: &str) {
        if let Some(last) = slice.rfind('\n') {
            self.line += slice.matches('\n').count();
            self.line_start = start + last + 1;
        }
    }

    fn column_at(&self, offset: usize) -> usize {
        self.source[self.line_start..offset].chars().count() + 1
    }
}

/// Parses a numeric literal from the current token slice.
///
/// A trailing dot (`5.`) is accepted and ignored.
fn parse_number(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().trim_end_matches('.').parse().ok()
}

/// Reads quoted text after its opening quote.
///
/// The callback consumes everything up to and including the matching closing
/// quote. Escapes `\n`, `\t`, `\r` are translated; any other escaped
/// character (the quote itself and `\\` included) stands for itself.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Result<String, LexErrorKind> {
    let quote = if lex.slice() == "'" { '\'' } else { '"' };
    let remainder = lex.remainder();

    let mut text = String::new();
    let mut closed_at = None;
    let mut chars = remainder.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c == quote {
            closed_at = Some(offset + c.len_utf8());
            break;
        }
        if c == '\\' {
            let Some((_, escaped)) = chars.next() else {
                break;
            };
            text.push(match escaped {
                          'n' => '\n',
                          't' => '\t',
                          'r' => '\r',
                          other => other,
                      });
        } else {
            text.push(c);
        }
    }

    let consumed = closed_at.unwrap_or(remainder.len());
    lex.bump(consumed);

    closed_at.map(|_| text).ok_or(LexErrorKind::UnterminatedString)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.kind == TokenKind::Eof {
                break;
            }
            kinds.push(token.kind);
        }
        kinds
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("sathi yo ho sathiharu = tala_math"),
                   vec![TokenKind::Sathi,
                        TokenKind::Yo,
                        TokenKind::Ho,
                        TokenKind::Identifier("sathiharu".into()),
                        TokenKind::Equals,
                        TokenKind::Identifier("tala_math".into())]);
    }

    #[test]
    fn two_character_operators_win() {
        assert_eq!(kinds("<= < == = != ! && ||"),
                   vec![TokenKind::LessEqual,
                        TokenKind::Less,
                        TokenKind::EqualEqual,
                        TokenKind::Equals,
                        TokenKind::BangEqual,
                        TokenKind::Bang,
                        TokenKind::AndAnd,
                        TokenKind::PipePipe]);
    }

    #[test]
    fn comments_are_skipped_but_newlines_kept() {
        assert_eq!(kinds("1 # ek\n2"),
                   vec![TokenKind::Number(1.0), TokenKind::NewLine, TokenKind::Number(2.0)]);
    }

    #[test]
    fn numbers_allow_one_decimal_point() {
        assert_eq!(kinds("3.25 7"), vec![TokenKind::Number(3.25), TokenKind::Number(7.0)]);
        assert_eq!(kinds("1.2.3"),
                   vec![TokenKind::Number(1.2), TokenKind::Dot, TokenKind::Number(3.0)]);
    }

    #[test]
    fn string_escapes() {
        assert_eq!(kinds(r#""a\nb\t\"q\"\\" 'it\'s' "\z""#),
                   vec![TokenKind::Str("a\nb\t\"q\"\\".into()),
                        TokenKind::Str("it's".into()),
                        TokenKind::Str("z".into())]);
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let mut lexer = Lexer::new("x\n  \"a\nb\" y");
        let x = lexer.next_token().unwrap();
        assert_eq!((x.line, x.column), (1, 1));
        let newline = lexer.next_token().unwrap();
        assert_eq!((newline.kind, newline.line), (TokenKind::NewLine, 1));
        let text = lexer.next_token().unwrap();
        assert_eq!((text.line, text.column), (2, 3));
        let y = lexer.next_token().unwrap();
        assert_eq!((y.line, y.column), (3, 4));
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn unknown_character_reports_position() {
        let mut lexer = Lexer::new("x\n  @");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.to_string(), "Unknown character: @ at line 2, column 3");
    }

    #[test]
    fn unterminated_string_reports_line() {
        let mut lexer = Lexer::new("\"abc\ndef");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.to_string(), "Unterminated string at line 2");
    }
}
