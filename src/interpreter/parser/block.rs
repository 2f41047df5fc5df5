use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a brace-delimited block of statements.
    ///
    /// Blank lines are skipped before the opening brace, between statements,
    /// and before the closing brace, so both of these are accepted:
    ///
    /// ```text
    /// yadi (x) { sathi bhana(x) }
    ///
    /// yadi (x)
    /// {
    ///     sathi bhana(x)
    /// }
    /// ```
    ///
    /// The rule is: `block := NEWLINE* "{" (NEWLINE | statement)* "}"`
    ///
    /// # Errors
    /// `UnexpectedToken` if the braces are missing or the input ends inside
    /// the block.
    pub fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        self.skip_newlines()?;
        self.expect(&TokenKind::LBrace)?;

        let mut statements = Vec::new();
        loop {
            self.skip_newlines()?;
            if matches!(self.current.kind, TokenKind::RBrace | TokenKind::Eof) {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        self.expect(&TokenKind::RBrace)?;

        Ok(statements)
    }
}
