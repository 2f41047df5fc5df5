use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Computes the maximum (`thulo`) or minimum (`sano`) of numeric arguments.
///
/// Any number of arguments is accepted. With none, the result is the
/// identity of the operation: `-Infinity` for the maximum and `Infinity`
/// for the minimum. If any argument is `NaN` the result is `NaN`. Every
/// argument must be a number.
///
/// The operation is selected by the `name` parameter, which must be
/// `"thulo"` or `"sano"`.
///
/// # Parameters
/// - `name`: Either `"thulo"` or `"sano"`.
/// - `args`: The arguments.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let args = [Value::Number(3.0), Value::Number(9.0), Value::Number(-1.0)];
///
/// assert_eq!(min_max("thulo", &args, 1).unwrap(), Value::Number(9.0));
/// assert_eq!(min_max("sano", &args, 1).unwrap(), Value::Number(-1.0));
/// assert_eq!(min_max("sano", &[], 1).unwrap(), Value::Number(f64::INFINITY));
/// ```
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let maximum = name == "thulo";
    let mut result = if maximum { f64::NEG_INFINITY } else { f64::INFINITY };

    for arg in args {
        let n = arg.as_number(line)?;
        if n.is_nan() {
            result = f64::NAN;
        } else if !result.is_nan() {
            result = if maximum { result.max(n) } else { result.min(n) };
        }
    }

    Ok(Value::Number(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_wins() {
        let args = [Value::Number(1.0), Value::Number(f64::NAN), Value::Number(2.0)];
        let Value::Number(n) = min_max("thulo", &args, 1).unwrap() else {
            panic!("thulo must return a number");
        };
        assert!(n.is_nan());
    }

    #[test]
    fn empty_maximum_is_negative_infinity() {
        assert_eq!(min_max("thulo", &[], 1).unwrap(), Value::Number(f64::NEG_INFINITY));
    }

    #[test]
    fn text_is_rejected() {
        let err = min_max("sano", &[Value::Number(1.0), Value::from("0")], 2).unwrap_err();
        assert_eq!(err.to_string(), "Type error: expected a number, found text");
    }
}
