use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `ra` (`&&`) or `wa` (`||`).
    ///
    /// The right operand is evaluated only when the left one does not decide
    /// the result. The value of the last evaluated operand is returned as is,
    /// without conversion to a boolean.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The logical operator.
    /// - `right`: Right operand expression, possibly never evaluated.
    ///
    /// # Returns
    /// An `EvalResult<Value>` with the deciding operand.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::{evaluator::core::Context, parser::core::parse, value::core::Value};
    ///
    /// let program = parse("sathi bhana(khali wa \"default\")\nsathi bhana(0 ra undefined())")
    ///     .unwrap();
    /// let output = Context::new().evaluate(&program).unwrap();
    ///
    /// assert_eq!(output, vec![Value::from("default"), Value::Number(0.0)]);
    /// ```
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        op: LogicalOperator,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.eval(left)?;

        let decided = match op {
            LogicalOperator::And => !left.is_truthy(),
            LogicalOperator::Or => left.is_truthy(),
        };

        if decided { Ok(left) } else { self.eval(right) }
    }
}
