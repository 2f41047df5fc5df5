use crate::interpreter::{
    evaluator::{core::EvalResult, utils::check_arity},
    value::core::Value,
};

/// Converts a value to a number.
///
/// Text is parsed after trimming; empty text is `0` and anything that is not
/// a number is `NaN`. Booleans become `1` or `0` and null becomes `0`.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::builtin::sankhya, value::core::Value};
///
/// assert_eq!(sankhya(&[Value::from("42")], 1).unwrap(), Value::Number(42.0));
/// assert_eq!(sankhya(&[Value::Null], 1).unwrap(), Value::Number(0.0));
/// ```
pub fn sankhya(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, "sankhya", line)?;

    Ok(Value::Number(args[0].to_number()))
}

/// Converts a value to its display text.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::builtin::shabda, value::core::Value};
///
/// assert_eq!(shabda(&[Value::Number(2.5)], 1).unwrap(), Value::from("2.5"));
/// assert_eq!(shabda(&[Value::Bool(true)], 1).unwrap(), Value::from("true"));
/// ```
pub fn shabda(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, "shabda", line)?;

    Ok(Value::Text(args[0].to_string()))
}

/// Returns the truthiness of a value as a boolean.
pub fn tathya(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, "tathya", line)?;

    Ok(Value::Bool(args[0].is_truthy()))
}

/// Returns the name of a value's type: `number`, `string`, `boolean` or
/// `object`.
///
/// Null, lists and records are all `object`.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::builtin::prakar, value::core::Value};
///
/// assert_eq!(prakar(&[Value::from("")], 1).unwrap(), Value::from("string"));
/// assert_eq!(prakar(&[Value::Null], 1).unwrap(), Value::from("object"));
/// ```
pub fn prakar(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, "prakar", line)?;

    Ok(Value::from(args[0].kind_name()))
}

/// Input placeholder. Programs run without an interactive reader, so this
/// always yields empty text.
pub fn padhne(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 0, "padhne", line)?;

    Ok(Value::from(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sankhya_of_lists() {
        let single = Value::from(vec![Value::from("7")]);
        assert_eq!(sankhya(&[single], 1).unwrap(), Value::Number(7.0));

        let pair = Value::from(vec![Value::from(1.0), Value::from(2.0)]);
        let Value::Number(n) = sankhya(&[pair], 1).unwrap() else {
            panic!("sankhya must return a number");
        };
        assert!(n.is_nan());
    }

    #[test]
    fn tathya_follows_truthiness() {
        assert_eq!(tathya(&[Value::from("0")], 1).unwrap(), Value::Bool(true));
        assert_eq!(tathya(&[Value::from(0.0)], 1).unwrap(), Value::Bool(false));
    }

    #[test]
    fn wrong_count_names_the_builtin() {
        let err = shabda(&[], 2).unwrap_err();
        assert_eq!(err.to_string(), "Function shabda expects 1 arguments, got 0");
    }
}
