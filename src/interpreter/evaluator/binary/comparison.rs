use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` use [`Value::loose_equals`] and never fail. The ordering
    /// operators accept two numbers or two pieces of text; any other pairing
    /// is a type error. A comparison involving `NaN` is false.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use sathi::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less,
    ///                                       &Value::from("apple"),
    ///                                       &Value::from("banana"),
    ///                                       1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        if let BinaryOperator::Equal | BinaryOperator::NotEqual = op {
            let equal = left.loose_equals(right);
            return Ok(Value::Bool(if op == BinaryOperator::Equal { equal } else { !equal }));
        }

        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => {
                return Err(RuntimeError::TypeError { details: format!("cannot compare {} and {} with '{op}'",
                                                                       left.type_name(),
                                                                       right.type_name()),
                                                     line });
            },
        };

        Ok(Value::Bool(ordering.is_some_and(|ordering| match op {
                                               BinaryOperator::Less => ordering == Ordering::Less,
                                               BinaryOperator::Greater => {
                                                   ordering == Ordering::Greater
                                               },
                                               BinaryOperator::LessEqual => {
                                                   ordering != Ordering::Greater
                                               },
                                               BinaryOperator::GreaterEqual => {
                                                   ordering != Ordering::Less
                                               },
                                               _ => false,
                                           })))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn compare(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        Context::eval_comparison(op, &left, &right, 4)
    }

    #[test]
    fn nan_orders_with_nothing() {
        let nan = Value::Number(f64::NAN);
        for op in [BinaryOperator::Less,
                   BinaryOperator::LessEqual,
                   BinaryOperator::Greater,
                   BinaryOperator::GreaterEqual]
        {
            assert_eq!(compare(op, nan.clone(), Value::from(1.0)).unwrap(), Value::Bool(false));
        }
    }

    #[test]
    fn not_equal_negates_loose_equality() {
        assert_eq!(compare(BinaryOperator::NotEqual, Value::from("1"), Value::from(1.0)).unwrap(),
                   Value::Bool(false));
        assert_eq!(compare(BinaryOperator::NotEqual, Value::Null, Value::Bool(false)).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn mixed_ordering_is_a_type_error() {
        let err = compare(BinaryOperator::GreaterEqual, Value::from("2"), Value::from(1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Type error: cannot compare text and number with '>='");
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn text_compares_lexicographically() {
        assert_eq!(compare(BinaryOperator::Greater, Value::from("b"), Value::from("abc")).unwrap(),
                   Value::Bool(true));
        assert_eq!(compare(BinaryOperator::LessEqual, Value::from("a"), Value::from("a")).unwrap(),
                   Value::Bool(true));
    }
}
