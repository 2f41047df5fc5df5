use crate::{
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
    util::num::{f64_to_i64_saturating, usize_to_f64},
};

/// Returns the length of a list, or the number of characters in the display
/// text of any other value.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::text::lambai, value::core::Value};
///
/// assert_eq!(lambai(&[Value::from("नमस्ते")], 1).unwrap(), Value::Number(6.0));
/// assert_eq!(lambai(&[Value::Number(1234.0)], 1).unwrap(), Value::Number(4.0));
/// ```
pub fn lambai(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, "lambai", line)?;

    let length = match &args[0] {
        Value::List(items) => items.borrow().len(),
        Value::Text(text) => text.chars().count(),
        other => other.to_string().chars().count(),
    };

    Ok(Value::Number(usize_to_f64(length)))
}

/// Upper-cases the display text of a value.
pub fn upari(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, "upari", line)?;

    Ok(Value::Text(args[0].to_string().to_uppercase()))
}

/// Lower-cases the display text of a value.
pub fn tala(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, "tala", line)?;

    Ok(Value::Text(args[0].to_string().to_lowercase()))
}

/// Finds the first occurrence of the second argument's text in the first's.
///
/// # Returns
/// The character position of the match, or `-1` when there is none.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::text::khojne, value::core::Value};
///
/// let found = khojne(&[Value::from("kathmandu"), Value::from("man")], 1).unwrap();
/// assert_eq!(found, Value::Number(4.0));
///
/// let missing = khojne(&[Value::from("kathmandu"), Value::from("x")], 1).unwrap();
/// assert_eq!(missing, Value::Number(-1.0));
/// ```
pub fn khojne(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 2, "khojne", line)?;

    let haystack = args[0].to_string();
    let needle = args[1].to_string();

    Ok(Value::Number(haystack.find(&needle).map_or(-1.0, |byte| {
                                                   usize_to_f64(haystack[..byte].chars().count())
                                               })))
}

/// Cuts a piece out of the display text of the first argument.
///
/// Takes a start and an optional end position, counted in characters. A
/// negative position counts back from the end, positions past either end
/// are clamped, and a missing end means the end of the text. An empty
/// piece results when the start is not before the end.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::text::kaatne, value::core::Value};
///
/// let text = Value::from("pokhara");
///
/// assert_eq!(kaatne(&[text.clone(), Value::from(1.0), Value::from(4.0)], 1).unwrap(),
///            Value::from("okh"));
/// assert_eq!(kaatne(&[text.clone(), Value::from(-3.0)], 1).unwrap(), Value::from("ara"));
/// assert_eq!(kaatne(&[text, Value::from(5.0), Value::from(2.0)], 1).unwrap(), Value::from(""));
/// ```
pub fn kaatne(args: &[Value], _line: usize) -> EvalResult<Value> {
    let chars = args.first()
                    .map(ToString::to_string)
                    .unwrap_or_default()
                    .chars()
                    .collect::<Vec<_>>();
    let len = chars.len();

    let start = args.get(1).map_or(0, |start| relative_position(start, len));
    let end = args.get(2).map_or(len, |end| relative_position(end, len));

    let piece = if start < end { chars[start..end].iter().collect() } else { String::new() };

    Ok(Value::Text(piece))
}

/// Resolves a slice bound against a length of `len` characters.
fn relative_position(bound: &Value, len: usize) -> usize {
    let bound = f64_to_i64_saturating(bound.to_number());
    let len_i64 = i64::try_from(len).unwrap_or(i64::MAX);

    let position = if bound < 0 { (len_i64 + bound).max(0) } else { bound.min(len_i64) };

    usize::try_from(position).unwrap_or(0)
}

/// Joins the display texts of all arguments. Null contributes nothing.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::text::jodne, value::core::Value};
///
/// let joined = jodne(&[Value::from("a"), Value::Null, Value::Number(1.0)], 1).unwrap();
/// assert_eq!(joined, Value::from("a1"));
/// ```
pub fn jodne(args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::Text(args.iter()
                       .filter(|value| !matches!(value, Value::Null))
                       .map(ToString::to_string)
                       .collect()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn case_conversion_uses_display_text() {
        assert_eq!(upari(&[Value::from("Namaste")], 1).unwrap(), Value::from("NAMASTE"));
        assert_eq!(tala(&[Value::Bool(true)], 1).unwrap(), Value::from("true"));
    }

    #[test]
    fn khojne_counts_characters_not_bytes() {
        let found = khojne(&[Value::from("नमस्ते world"), Value::from("world")], 1).unwrap();
        assert_eq!(found, Value::Number(7.0));
    }

    #[test]
    fn kaatne_clamps_out_of_range_bounds() {
        let text = Value::from("abc");
        assert_eq!(kaatne(&[text.clone(), Value::from(-10.0), Value::from(99.0)], 1).unwrap(),
                   Value::from("abc"));
        assert_eq!(kaatne(&[text, Value::from(1.5)], 1).unwrap(), Value::from("bc"));
    }

    #[test]
    fn kaatne_treats_nan_bounds_as_zero() {
        let text = Value::from("abc");
        assert_eq!(kaatne(&[text.clone(), Value::from("x")], 1).unwrap(), Value::from("abc"));
        assert_eq!(kaatne(&[text, Value::from(0.0), Value::Null], 1).unwrap(), Value::from(""));
    }

    #[test]
    fn lambai_of_a_list_counts_elements() {
        let list = Value::from(vec![Value::from("ab"), Value::from("cd")]);
        assert_eq!(lambai(&[list], 1).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn jodne_with_nothing_is_empty() {
        assert_eq!(jodne(&[], 1).unwrap(), Value::from(""));
    }
}
