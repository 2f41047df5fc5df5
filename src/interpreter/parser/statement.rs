use crate::{
    ast::{Expr, ForLoop, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a print (`sathi bhana(x)`) or declaration (`sathi yo ho x = 1`), both
    ///   of which require the `sathi` introducer.
    /// - a keyword statement: `yadi`, `jaba`, `prawahit`, `kaam`, `firta`,
    ///   `thodau`, `jari`, `pryas`.
    /// - a statement led by an identifier: reassignment, indexed or property
    ///   assignment, or a call.
    ///
    /// `sathi` may prefix any statement.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;

        if !self.check(&TokenKind::Sathi) {
            return self.parse_unprefixed_statement();
        }
        self.advance()?;

        match self.current.kind {
            TokenKind::Bhana => self.parse_print(line),
            TokenKind::Yo => self.parse_declaration(line),
            _ if self.starts_statement() => self.parse_unprefixed_statement(),
            _ => Err(ParseError::ExpectedStatementKeyword { found: self.current
                                                                       .kind
                                                                       .name()
                                                                       .to_string(),
                                                            line:  self.current.line, }),
        }
    }

    /// Tests whether the current token can start a statement without the
    /// `sathi` introducer.
    fn starts_statement(&self) -> bool {
        matches!(self.current.kind,
                 TokenKind::If
                 | TokenKind::While
                 | TokenKind::For
                 | TokenKind::Function
                 | TokenKind::Return
                 | TokenKind::Break
                 | TokenKind::Continue
                 | TokenKind::Try
                 | TokenKind::Identifier(_))
    }

    fn parse_unprefixed_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;

        match self.current.kind {
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Function => self.parse_function_definition(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Break => {
                self.advance()?;
                Ok(Statement::Break { line })
            },
            TokenKind::Continue => {
                self.advance()?;
                Ok(Statement::Continue { line })
            },
            TokenKind::Try => self.parse_try_catch(),
            TokenKind::Identifier(_) => self.parse_identifier_statement(),
            _ => Err(ParseError::ExpectedStatement { found: self.current.kind.name().to_string(),
                                                     line }),
        }
    }

    /// Parses `bhana(expr)` after `sathi`.
    fn parse_print(&mut self, line: usize) -> ParseResult<Statement> {
        self.expect(&TokenKind::Bhana)?;
        self.expect(&TokenKind::LParen)?;
        let value = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;

        Ok(Statement::Print { value, line })
    }

    /// Parses `yo ho name = expr` after `sathi`.
    fn parse_declaration(&mut self, line: usize) -> ParseResult<Statement> {
        self.expect(&TokenKind::Yo)?;
        self.expect(&TokenKind::Ho)?;
        let name = self.parse_identifier()?;
        self.expect(&TokenKind::Equals)?;
        let value = self.parse_expression()?;

        Ok(Statement::Declaration { name, value, line })
    }

    /// Parses an `if` statement with an optional `else`.
    ///
    /// Syntax:
    /// ```text
    ///     yadi (<condition>) { ... }
    ///     anya yadi (<condition>) { ... }
    ///     anya { ... }
    /// ```
    /// Blank lines may separate the closing brace from `anya`. An
    /// `anya yadi` chain becomes an else branch holding a single nested `if`.
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&TokenKind::If)?.line;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let then_branch = self.parse_block()?;

        self.skip_newlines()?;
        let else_branch = if self.check(&TokenKind::Else) {
            self.advance()?;
            if self.check(&TokenKind::If) {
                Some(vec![self.parse_if()?])
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch,
                           line })
    }

    /// Parses `jaba (<condition>) { ... }`.
    fn parse_while(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&TokenKind::While)?.line;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;

        Ok(Statement::While { condition,
                              body,
                              line })
    }

    /// Parses a ranged loop.
    ///
    /// Syntax: `prawahit (i dekhi <start> samma <end> [kadam <step>]) { ... }`
    fn parse_for(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&TokenKind::For)?.line;
        self.expect(&TokenKind::LParen)?;
        let var = self.parse_identifier()?;
        self.expect(&TokenKind::From)?;
        let start = self.parse_expression()?;
        self.expect(&TokenKind::To)?;
        let end = self.parse_expression()?;
        let step = if self.check(&TokenKind::Step) {
            self.advance()?;
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_block()?;

        Ok(Statement::For { context: ForLoop { var,
                                               start,
                                               end,
                                               step,
                                               body },
                            line })
    }

    /// Parses `kaam name(a, b) { ... }`.
    fn parse_function_definition(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&TokenKind::Function)?.line;
        let name = self.parse_identifier()?;
        self.expect(&TokenKind::LParen)?;
        let params = self.parse_comma_separated(&TokenKind::RParen, Self::parse_identifier)?;
        let body = self.parse_block()?;

        Ok(Statement::Function(FunctionDef { name,
                                             params,
                                             body,
                                             line }))
    }

    /// Parses `firta` with an optional value.
    ///
    /// The value is absent when the keyword is directly followed by the end
    /// of the line, the end of input, or the closing brace of the block.
    fn parse_return(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&TokenKind::Return)?.line;
        let value = if matches!(self.current.kind,
                                TokenKind::NewLine | TokenKind::Eof | TokenKind::RBrace)
        {
            None
        } else {
            Some(self.parse_expression()?)
        };

        Ok(Statement::Return { value, line })
    }

    /// Parses `pryas { ... } samatan (e) { ... }`.
    ///
    /// The `samatan` clause is mandatory.
    fn parse_try_catch(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&TokenKind::Try)?.line;
        let body = self.parse_block()?;

        self.skip_newlines()?;
        self.expect(&TokenKind::Catch)?;
        self.expect(&TokenKind::LParen)?;
        let error_name = self.parse_identifier()?;
        self.expect(&TokenKind::RParen)?;
        let handler = self.parse_block()?;

        Ok(Statement::TryCatch { body,
                                 error_name,
                                 handler,
                                 line })
    }

    /// Parses a statement that starts with an identifier.
    ///
    /// ```text
    ///     x = expr
    ///     x[index] = expr
    ///     x.property = expr
    ///     f(args)
    /// ```
    fn parse_identifier_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;
        let name = self.parse_identifier()?;

        match self.current.kind {
            TokenKind::Equals => {
                self.advance()?;
                let value = self.parse_expression()?;
                Ok(Statement::Assignment { name, value, line })
            },
            TokenKind::LBracket => {
                self.advance()?;
                let index = self.parse_expression()?;
                self.expect(&TokenKind::RBracket)?;
                self.expect(&TokenKind::Equals)?;
                let value = self.parse_expression()?;
                Ok(Statement::IndexAssignment { name,
                                                index,
                                                value,
                                                line })
            },
            TokenKind::Dot => {
                self.advance()?;
                let property = self.parse_identifier()?;
                self.expect(&TokenKind::Equals)?;
                let value = self.parse_expression()?;
                Ok(Statement::PropertyAssignment { name,
                                                   property,
                                                   value,
                                                   line })
            },
            TokenKind::LParen => {
                let expr: Expr = self.parse_call(name, line)?;
                Ok(Statement::Expression { expr, line })
            },
            _ => Err(ParseError::UnexpectedAfterIdentifier { found: self.current
                                                                        .kind
                                                                        .name()
                                                                        .to_string(),
                                                             line:  self.current.line, }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{ast::Statement, interpreter::parser::core::parse};

    #[test]
    fn sathi_prefix_is_optional_for_keyword_statements() {
        let program = parse("sathi pryas { sathi bhana(1/0) } samatan (e) { sathi bhana(e) }").unwrap();
        assert!(matches!(program[0], Statement::TryCatch { ref error_name, .. } if error_name == "e"));

        let program = parse("yadi (satya) {\n  x = 1\n}").unwrap();
        assert!(matches!(program[0], Statement::If { else_branch: None, .. }));
    }

    #[test]
    fn else_may_follow_blank_lines() {
        let program = parse("yadi (x) {\n}\n\nanya {\n  thodau\n}").unwrap();
        let Statement::If { else_branch: Some(branch), .. } = &program[0] else {
            panic!("expected an if with an else branch");
        };
        assert_eq!(branch, &vec![Statement::Break { line: 5 }]);
    }

    #[test]
    fn else_if_chains() {
        let program = parse("yadi (a) { }\nanya yadi (b) { }\nanya { }").unwrap();
        let Statement::If { else_branch: Some(branch), .. } = &program[0] else {
            panic!("expected an if with an else branch");
        };
        assert!(matches!(branch[0], Statement::If { else_branch: Some(_), .. }));
    }

    #[test]
    fn for_loop_step_is_optional() {
        let program = parse("prawahit (i dekhi 0 samma 3) { }\nprawahit (i dekhi 5 samma 0 kadam -1) { }").unwrap();
        let Statement::For { context: first, .. } = &program[0] else {
            panic!("expected a for loop");
        };
        assert!(first.step.is_none());
        let Statement::For { context: second, .. } = &program[1] else {
            panic!("expected a for loop");
        };
        assert!(second.step.is_some());
    }

    #[test]
    fn return_value_is_optional() {
        let program = parse("kaam f() {\n  firta\n}\nkaam g() { firta }\nkaam h(a, b) {\n firta a + b\n}")
            .unwrap();
        for (statement, has_value) in program.iter().zip([false, false, true]) {
            let Statement::Function(def) = statement else {
                panic!("expected a function definition");
            };
            assert!(matches!(def.body[0], Statement::Return { ref value, .. } if value.is_some() == has_value));
        }
    }

    #[test]
    fn assignment_forms() {
        let program = parse("x = 1\nx[0] = 2\nx.naam = 3\nthapaune(x, 4)").unwrap();
        assert!(matches!(program[0], Statement::Assignment { .. }));
        assert!(matches!(program[1], Statement::IndexAssignment { .. }));
        assert!(matches!(program[2], Statement::PropertyAssignment { .. }));
        assert!(matches!(program[3], Statement::Expression { .. }));
    }

    #[test]
    fn syntax_errors_name_expected_and_found_kinds() {
        assert_eq!(parse("sathi yo ho = 5").unwrap_err().to_string(),
                   "Expected ID, got ASSIGN at line 1");
        assert_eq!(parse("\n\nsathi 5").unwrap_err().to_string(),
                   "Expected BHANA or YO after SATHI, got NUMBER at line 3");
        assert_eq!(parse("x + 1").unwrap_err().to_string(),
                   "Unexpected token after identifier: PLUS at line 1");
        assert_eq!(parse("jaba (satya) {\n").unwrap_err().to_string(),
                   "Expected RBRACE, got EOF at line 2");
        assert_eq!(parse("pryas { }\nsathi bhana(1)").unwrap_err().to_string(),
                   "Expected CATCH, got SATHI at line 2");
    }

    #[test]
    fn lexical_errors_surface_through_the_parser() {
        let err = parse("sathi bhana(\"abc)").unwrap_err();
        assert_eq!(err.to_string(), "Unterminated string at line 1");
    }
}
