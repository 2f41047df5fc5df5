use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses prefix operators.
    ///
    /// `!`, `hoina` and `-` bind tighter than any binary operator and may be
    /// stacked, so `- -x` and `!!x` are valid.
    ///
    /// The rule is: `unary := ("!" | "hoina" | "-") unary | postfix`
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.current.kind {
            TokenKind::Bang | TokenKind::Not => UnaryOperator::Not,
            TokenKind::Minus => UnaryOperator::Negate,
            _ => return self.parse_postfix(),
        };
        let line = self.advance()?.line;
        let expr = self.parse_unary()?;

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           line })
    }

    /// Parses a primary expression followed by any chain of `[index]` and
    /// `.property` accessors.
    ///
    /// The rule is: `postfix := primary ("[" expression "]" | "." ID)*`
    pub fn parse_postfix(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.current.kind {
                TokenKind::LBracket => {
                    let line = self.advance()?.line;
                    let index = self.parse_expression()?;
                    self.expect(&TokenKind::RBracket)?;
                    expr = Expr::Index { target: Box::new(expr),
                                         index: Box::new(index),
                                         line };
                },
                TokenKind::Dot => {
                    let line = self.advance()?.line;
                    let name = self.parse_identifier()?;
                    expr = Expr::Property { target: Box::new(expr),
                                            name,
                                            line };
                },
                _ => break,
            }
        }
        Ok(expr)
    }

    /// Parses the tightest-binding expression forms.
    ///
    /// - number, text, `satya`, `asatya`, `khali`
    /// - a variable, or a call when the identifier is followed by `(`
    /// - a list literal `[a, b]` or record literal `{k: v}`
    /// - a parenthesised expression
    ///
    /// # Errors
    /// `ExpectedExpression` when the current token cannot start an expression.
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        let line = self.current.line;

        match &self.current.kind {
            TokenKind::Number(n) => {
                let value = LiteralValue::Number(*n);
                self.advance()?;
                Ok(Expr::Literal { value, line })
            },
            TokenKind::Str(s) => {
                let value = LiteralValue::Text(s.clone());
                self.advance()?;
                Ok(Expr::Literal { value, line })
            },
            TokenKind::True | TokenKind::False | TokenKind::Null => {
                let value = match self.advance()?.kind {
                    TokenKind::True => LiteralValue::Bool(true),
                    TokenKind::False => LiteralValue::Bool(false),
                    _ => LiteralValue::Null,
                };
                Ok(Expr::Literal { value, line })
            },
            TokenKind::Identifier(_) => {
                let name = self.parse_identifier()?;
                if self.check(&TokenKind::LParen) {
                    self.parse_call(name, line)
                } else {
                    Ok(Expr::Variable { name, line })
                }
            },
            TokenKind::LBracket => {
                self.advance()?;
                let elements =
                    self.parse_comma_separated(&TokenKind::RBracket, Self::parse_expression)?;
                Ok(Expr::ListLiteral { elements, line })
            },
            TokenKind::LBrace => {
                self.advance()?;
                let entries =
                    self.parse_comma_separated(&TokenKind::RBrace, Self::parse_record_entry)?;
                Ok(Expr::RecordLiteral { entries, line })
            },
            TokenKind::LParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::RParen)?;
                Ok(expr)
            },
            other => Err(ParseError::ExpectedExpression { found: other.name().to_string(),
                                                          line }),
        }
    }

    /// Parses the argument list of a call whose name is already consumed.
    ///
    /// The rule is: `call := ID "(" (expression ("," expression)*)? ")"`
    pub(in crate::interpreter::parser) fn parse_call(&mut self,
                                                     name: String,
                                                     line: usize)
                                                     -> ParseResult<Expr> {
        self.expect(&TokenKind::LParen)?;
        let arguments = self.parse_comma_separated(&TokenKind::RParen, Self::parse_expression)?;

        Ok(Expr::FunctionCall { name,
                                arguments,
                                line })
    }

    /// Parses one `key: value` entry of a record literal.
    ///
    /// Keys are identifiers or quoted text.
    fn parse_record_entry(&mut self) -> ParseResult<(String, Expr)> {
        let key = if let TokenKind::Str(s) = &self.current.kind {
            let key = s.clone();
            self.advance()?;
            key
        } else {
            self.parse_identifier()?
        };
        self.expect(&TokenKind::Colon)?;
        self.skip_newlines()?;
        let value = self.parse_expression()?;

        Ok((key, value))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{BinaryOperator, Expr, LiteralValue, Statement, UnaryOperator},
        interpreter::parser::core::parse,
    };

    fn printed_expr(source: &str) -> Expr {
        match parse(source).unwrap().remove(0) {
            Statement::Print { value, .. } => value,
            other => panic!("expected a print statement, got {other:?}"),
        }
    }

    fn number(n: f64) -> Expr {
        Expr::Literal { value: LiteralValue::Number(n),
                        line:  1, }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = printed_expr("sathi bhana(1 + 2 * 3)");
        assert_eq!(expr,
                   Expr::BinaryOp { left:  Box::new(number(1.0)),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Expr::BinaryOp { left:  Box::new(number(2.0)),
                                                                     op:    BinaryOperator::Multiply,
                                                                     right: Box::new(number(3.0)),
                                                                     line:  1, }),
                                    line:  1, });
    }

    #[test]
    fn unary_minus_applies_before_multiplication() {
        let expr = printed_expr("sathi bhana(-2 * 3)");
        let Expr::BinaryOp { left, op, .. } = expr else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Multiply);
        assert_eq!(*left,
                   Expr::UnaryOp { op:   UnaryOperator::Negate,
                                   expr: Box::new(number(2.0)),
                                   line: 1, });
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = printed_expr("sathi bhana(10 - 4 - 3)");
        let Expr::BinaryOp { left, right, .. } = expr else {
            panic!("expected a binary operation");
        };
        assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Subtract, .. }));
        assert_eq!(*right, number(3.0));
    }

    #[test]
    fn postfix_chains() {
        let expr = printed_expr("sathi bhana(a[0].naam)");
        let Expr::Property { target, name, .. } = expr else {
            panic!("expected a property access");
        };
        assert_eq!(name, "naam");
        assert!(matches!(*target, Expr::Index { .. }));
    }

    #[test]
    fn literals_tolerate_trailing_commas_and_blank_lines() {
        let expr = printed_expr("sathi bhana({\n  naam: \"Sita\",\n  umer: 20,\n})");
        let Expr::RecordLiteral { entries, .. } = expr else {
            panic!("expected a record literal");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "naam");

        let expr = printed_expr("sathi bhana([1, 2,])");
        assert!(matches!(expr, Expr::ListLiteral { ref elements, .. } if elements.len() == 2));
    }

    #[test]
    fn bad_primary_names_the_token() {
        let err = parse("sathi bhana(*)").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected token: MUL at line 1");
    }
}
