use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser with one token of lookahead.
///
/// The parser owns the lexer and pulls a new token only when the current one
/// is consumed, so lexical errors surface exactly where the parser reaches
/// them. The first error aborts parsing; no partial tree is returned.
pub struct Parser<'src> {
    lexer:              Lexer<'src>,
    pub(super) current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token of `source`.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] if the first token cannot be read.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;

        Ok(Self { lexer, current })
    }

    /// Parses statements until the end of input.
    ///
    /// Blank lines between statements are skipped.
    ///
    /// Grammar: `program := (NEWLINE* statement)* NEWLINE* EOF`
    ///
    /// # Returns
    /// The statements of the program, in source order.
    pub fn parse_program(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        loop {
            self.skip_newlines()?;
            if self.check(&TokenKind::Eof) {
                break;
            }
            statements.push(self.parse_statement()?);
        }

        trace!(statements = statements.len(), "parsed program");
        Ok(statements)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing.
    /// It begins at the lowest-precedence level, logical OR, and recursively
    /// descends through the precedence hierarchy.
    ///
    /// Grammar: `expression := logical_or`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_logical_or()
    }

    /// Consumes the current token and reads the next one from the lexer.
    ///
    /// # Returns
    /// The token that was current before the call.
    pub(super) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;

        Ok(std::mem::replace(&mut self.current, next))
    }
}

/// Parses a complete program.
///
/// # Errors
/// Returns the first lexical or syntax error in `source`.
///
/// # Example
/// ```
/// use sathi::interpreter::parser::core::parse;
///
/// let program = parse("sathi yo ho x = 10\nsathi bhana(x)").unwrap();
/// assert_eq!(program.len(), 2);
///
/// let err = parse("sathi bhana(1").unwrap_err();
/// assert_eq!(err.to_string(), "Expected RPAREN, got EOF at line 1");
/// ```
pub fn parse(source: &str) -> ParseResult<Vec<Statement>> {
    Parser::new(source)?.parse_program()
}
