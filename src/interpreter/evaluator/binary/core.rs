use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, relational and equality
    /// operators to `eval_comparison`. The logical operators never reach this
    /// point because their right operand may not be evaluated at all; see
    /// `eval_logical`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use sathi::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add,
    ///                                   &Value::Number(3.0),
    ///                                   &Value::Number(4.0),
    ///                                   1);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Equal,
    ///                                   &Value::Number(5.0),
    ///                                   &Value::from("5"),
    ///                                   1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Divide, Equal, Greater, GreaterEqual, Less, LessEqual, Modulo, Multiply,
            NotEqual, Subtract,
        };

        match op {
            Add | Subtract | Multiply | Divide | Modulo => {
                Self::eval_arithmetic(op, left, right, line)
            },
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },
        }
    }
}
