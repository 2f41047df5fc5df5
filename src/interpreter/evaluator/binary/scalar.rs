use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` adds two numbers; when either side is text both sides are turned
    /// into their display text and joined. The other operators require two
    /// numbers. A zero divisor is an error for both `/` and `%`, and `%`
    /// keeps the sign of the dividend.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Subtract`, `Multiply`, `Divide`, `Modulo`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use sathi::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let joined = Context::eval_arithmetic(BinaryOperator::Add,
    ///                                       &Value::from("x = "),
    ///                                       &Value::Number(1.5),
    ///                                       1).unwrap();
    /// assert_eq!(joined, Value::from("x = 1.5"));
    ///
    /// let err = Context::eval_arithmetic(BinaryOperator::Divide,
    ///                                    &Value::Number(1.0),
    ///                                    &Value::Number(0.0),
    ///                                    1).unwrap_err();
    /// assert_eq!(err.to_string(), "Division by zero");
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Divide, Modulo, Multiply, Subtract};

        match (left, right) {
            (Value::Number(a), Value::Number(b)) => {
                let (a, b) = (*a, *b);
                let result = match op {
                    Add => a + b,
                    Subtract => a - b,
                    Multiply => a * b,
                    Divide if b == 0.0 => return Err(RuntimeError::DivisionByZero { line }),
                    Divide => a / b,
                    Modulo if b == 0.0 => return Err(RuntimeError::ModuloByZero { line }),
                    Modulo => a % b,
                    _ => return Err(invalid_operands(op, left, right, line)),
                };
                Ok(Value::Number(result))
            },
            (Value::Text(_), _) | (_, Value::Text(_)) if op == Add => {
                Ok(Value::Text(format!("{left}{right}")))
            },
            _ => Err(invalid_operands(op, left, right, line)),
        }
    }
}

fn invalid_operands(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn arith(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        Context::eval_arithmetic(op, &left, &right, 1)
    }

    #[test]
    fn modulo_keeps_the_sign_of_the_dividend() {
        assert_eq!(arith(BinaryOperator::Modulo, Value::from(-7.0), Value::from(3.0)).unwrap(),
                   Value::from(-1.0));
    }

    #[test]
    fn modulo_by_zero_is_reported() {
        let err = arith(BinaryOperator::Modulo, Value::from(4.0), Value::from(0.0)).unwrap_err();
        assert_eq!(err.to_string(), "Modulo by zero");
    }

    #[test]
    fn plus_concatenates_display_text() {
        let list = Value::from(vec![Value::from("a")]);
        assert_eq!(arith(BinaryOperator::Add, list, Value::from("!")).unwrap(),
                   Value::from(r#"["a"]!"#));
        assert_eq!(arith(BinaryOperator::Add, Value::Null, Value::from("")).unwrap(),
                   Value::from("null"));
    }

    #[test]
    fn minus_on_text_is_a_type_error() {
        let err = arith(BinaryOperator::Subtract, Value::from("5"), Value::from(2.0)).unwrap_err();
        assert_eq!(err.to_string(), "Type error: cannot apply '-' to text and number");
    }

    #[test]
    fn plus_without_text_requires_numbers() {
        let err = arith(BinaryOperator::Add, Value::Bool(true), Value::from(1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Type error: cannot apply '+' to boolean and number");
    }
}
