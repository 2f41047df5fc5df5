use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Tests whether the current token is of `kind`.
    ///
    /// Only meaningful for kinds without a payload; identifiers and literals
    /// are matched with patterns instead.
    pub(in crate::interpreter::parser) fn check(&self, kind: &TokenKind) -> bool {
        self.current.kind == *kind
    }

    /// Consumes the current token if it is of `kind`.
    ///
    /// # Errors
    /// `UnexpectedToken`, naming `kind` and the kind actually found.
    pub(in crate::interpreter::parser) fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    /// Skips any number of end-of-line tokens.
    pub(in crate::interpreter::parser) fn skip_newlines(&mut self) -> ParseResult<()> {
        while self.check(&TokenKind::NewLine) {
            self.advance()?;
        }
        Ok(())
    }

    /// Parses a plain identifier and returns its name.
    ///
    /// # Errors
    /// `UnexpectedToken` with `ID` as the expected kind.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<String> {
        let TokenKind::Identifier(name) = &self.current.kind else {
            return Err(self.unexpected("ID"));
        };
        let name = name.clone();

        self.advance()?;
        Ok(name)
    }

    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by list literals, record literals, argument
    /// lists and parameter lists. The opening token must already be consumed.
    /// Blank lines may appear around items and a trailing comma before the
    /// closing token is accepted.
    ///
    /// Grammar (simplified): `list := (item ("," item)* ","?)? closing`
    ///
    /// # Parameters
    /// - `closing`: The token that terminates the list (e.g., `]` or `)`).
    /// - `parse_item`: Function used to parse each list element.
    ///
    /// # Returns
    /// A vector of parsed items.
    ///
    /// # Errors
    /// Returns a `ParseError` if an item fails to parse or if something other
    /// than a comma or the closing token follows an item.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        closing: &TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();

        loop {
            self.skip_newlines()?;
            if self.check(closing) {
                self.advance()?;
                break;
            }

            items.push(parse_item(self)?);

            self.skip_newlines()?;
            if self.check(&TokenKind::Comma) {
                self.advance()?;
            } else {
                self.expect(closing)?;
                break;
            }
        }

        Ok(items)
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found:    self.current.kind.name().to_string(),
                                      line:     self.current.line, }
    }
}
