use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses logical OR expressions.
    ///
    /// Both the keyword and the symbolic form are accepted.
    ///
    /// The rule is: `logical_or := logical_and (("wa" | "||") logical_and)*`
    ///
    /// # Returns
    /// An `Expr::Logical` tree, or the operand itself when no operator
    /// follows.
    pub fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_logical_and()?;

        while matches!(self.current.kind, TokenKind::Or | TokenKind::PipePipe) {
            let line = self.advance()?.line;
            let right = self.parse_logical_and()?;
            left = Expr::Logical { left: Box::new(left),
                                   op: LogicalOperator::Or,
                                   right: Box::new(right),
                                   line };
        }
        Ok(left)
    }

    /// Parses logical AND expressions.
    ///
    /// The rule is: `logical_and := comparison (("ra" | "&&") comparison)*`
    pub fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;

        while matches!(self.current.kind, TokenKind::And | TokenKind::AndAnd) {
            let line = self.advance()?.line;
            let right = self.parse_comparison()?;
            left = Expr::Logical { left: Box::new(left),
                                   op: LogicalOperator::And,
                                   right: Box::new(right),
                                   line };
        }
        Ok(left)
    }

    /// Parses relational and equality expressions.
    ///
    /// All six operators share one precedence level, so `a < b == c` reads as
    /// `(a < b) == c`.
    ///
    /// The rule is: `comparison := additive (("<" | ">" | "<=" | ">=" | "==" |
    /// "!=") additive)*`
    pub fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(Self::parse_additive, |op| {
                matches!(op,
                         BinaryOperator::Less
                         | BinaryOperator::Greater
                         | BinaryOperator::LessEqual
                         | BinaryOperator::GreaterEqual
                         | BinaryOperator::Equal
                         | BinaryOperator::NotEqual)
            })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(Self::parse_multiplicative, |op| {
                matches!(op, BinaryOperator::Add | BinaryOperator::Subtract)
            })
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
    pub fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(Self::parse_unary, |op| {
                matches!(op,
                         BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo)
            })
    }

    /// Parses one left-associative precedence level.
    ///
    /// # Parameters
    /// - `next`: Parser for the next-tighter level.
    /// - `accepts`: Selects the operators that belong to this level.
    fn parse_binary_level(&mut self,
                          next: fn(&mut Self) -> ParseResult<Expr>,
                          accepts: fn(BinaryOperator) -> bool)
                          -> ParseResult<Expr> {
        let mut left = next(self)?;

        while let Some(op) = token_to_binary_operator(&self.current.kind)
              && accepts(op)
        {
            let line = self.advance()?.line;
            let right = next(self)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }
}

/// Maps a token to the binary operator it spells, if any.
///
/// # Example
/// ```
/// use sathi::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Percent), Some(BinaryOperator::Modulo));
/// assert_eq!(token_to_binary_operator(&TokenKind::AndAnd), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Subtract),
        TokenKind::Star => Some(BinaryOperator::Multiply),
        TokenKind::Slash => Some(BinaryOperator::Divide),
        TokenKind::Percent => Some(BinaryOperator::Modulo),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
