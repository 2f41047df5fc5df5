use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{f64_to_index, usize_to_f64},
};

/// Largest list index a write may pad up to.
const MAX_LIST_INDEX: usize = u32::MAX as usize;

/// Reads `target[index]`.
///
/// - A list yields the element at an integral, in-range index and null for
///   any other index.
/// - A record uses the display text of `index` as the key; a missing key
///   yields null.
/// - Text yields the one-character text at the index, or null.
///
/// # Errors
/// `TypeError` if `target` is neither a list, a record nor text.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::access::read_index, value::core::Value};
///
/// let list = Value::from(vec![Value::from(10.0), Value::from(20.0)]);
///
/// assert_eq!(read_index(&list, &Value::from(1.0), 1).unwrap(), Value::from(20.0));
/// assert_eq!(read_index(&list, &Value::from(5.0), 1).unwrap(), Value::Null);
/// assert_eq!(read_index(&Value::from("nepal"), &Value::from(0.0), 1).unwrap(),
///            Value::from("n"));
/// ```
pub fn read_index(target: &Value, index: &Value, line: usize) -> EvalResult<Value> {
    match target {
        Value::List(items) => {
            let items = items.borrow();
            Ok(position(index).and_then(|i| items.get(i).cloned())
                              .unwrap_or(Value::Null))
        },
        Value::Record(record) => Ok(record.borrow()
                                          .get(&index.to_string())
                                          .cloned()
                                          .unwrap_or(Value::Null)),
        Value::Text(text) => Ok(position(index).and_then(|i| text.chars().nth(i))
                                               .map_or(Value::Null, |c| Value::Text(c.to_string()))),
        other => Err(RuntimeError::TypeError { details: format!("cannot index into {}",
                                                                other.type_name()),
                                               line }),
    }
}

/// Writes `target[index] = value`.
///
/// On a list, an index equal to the length appends and a larger index pads
/// the gap with null. On a record, the display text of `index` is the key.
///
/// # Errors
/// - `InvalidIndex` for a list index that is not a non-negative integer.
/// - `TypeError` if `target` is neither a list nor a record.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::access::write_index, value::core::Value};
///
/// let list = Value::from(vec![Value::from(1.0)]);
/// write_index(&list, &Value::from(3.0), Value::from(4.0), 1).unwrap();
///
/// assert_eq!(list.to_string(), "[1, null, null, 4]");
/// ```
pub fn write_index(target: &Value, index: &Value, value: Value, line: usize) -> EvalResult<()> {
    match target {
        Value::List(items) => {
            let Some(i) = position(index).filter(|i| *i <= MAX_LIST_INDEX) else {
                return Err(RuntimeError::InvalidIndex { details: format!("cannot assign to list index {index}"),
                                                        line });
            };

            let mut items = items.borrow_mut();
            if i >= items.len() {
                items.resize(i + 1, Value::Null);
            }
            items[i] = value;
            Ok(())
        },
        Value::Record(record) => {
            record.borrow_mut().insert(index.to_string(), value);
            Ok(())
        },
        other => Err(RuntimeError::TypeError { details: format!("cannot assign by index into {}",
                                                                other.type_name()),
                                               line }),
    }
}

/// Reads `target.name`.
///
/// Records yield the field or null. Lists and text know one property,
/// `length`; anything else read from them is null.
///
/// # Errors
/// `TypeError` for any other target.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::access::read_property, value::core::Value};
///
/// assert_eq!(read_property(&Value::from("namaste"), "length", 1).unwrap(),
///            Value::from(7.0));
/// assert!(read_property(&Value::from(1.0), "length", 1).is_err());
/// ```
pub fn read_property(target: &Value, name: &str, line: usize) -> EvalResult<Value> {
    match target {
        Value::Record(record) => Ok(record.borrow().get(name).cloned().unwrap_or(Value::Null)),
        Value::List(items) if name == "length" => Ok(Value::Number(usize_to_f64(items.borrow()
                                                                                     .len()))),
        Value::Text(text) if name == "length" => {
            Ok(Value::Number(usize_to_f64(text.chars().count())))
        },
        Value::List(_) | Value::Text(_) => Ok(Value::Null),
        other => Err(RuntimeError::TypeError { details: format!("cannot read property '{name}' of {}",
                                                                other.type_name()),
                                               line }),
    }
}

/// Writes `target.name = value`. Only records accept property writes.
///
/// # Errors
/// `TypeError` if `target` is not a record.
pub fn write_property(target: &Value, name: &str, value: Value, line: usize) -> EvalResult<()> {
    match target {
        Value::Record(record) => {
            record.borrow_mut().insert(name.to_string(), value);
            Ok(())
        },
        other => Err(RuntimeError::TypeError { details: format!("cannot set property '{name}' on {}",
                                                                other.type_name()),
                                               line }),
    }
}

/// The position named by an index value, if it is a valid one.
fn position(index: &Value) -> Option<usize> {
    match index {
        Value::Number(n) => f64_to_index(*n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::value::record::Record;

    #[test]
    fn fractional_and_negative_list_reads_are_null() {
        let list = Value::from(vec![Value::from(1.0)]);
        assert_eq!(read_index(&list, &Value::from(0.5), 1).unwrap(), Value::Null);
        assert_eq!(read_index(&list, &Value::from(-1.0), 1).unwrap(), Value::Null);
        assert_eq!(read_index(&list, &Value::from("0"), 1).unwrap(), Value::Null);
    }

    #[test]
    fn record_keys_use_display_text() {
        let record = Value::new_record(Record::new());
        write_index(&record, &Value::from(1.0), Value::from("ek"), 1).unwrap();
        assert_eq!(read_index(&record, &Value::from("1"), 1).unwrap(), Value::from("ek"));
        assert_eq!(read_property(&record, "1", 1).unwrap(), Value::from("ek"));
    }

    #[test]
    fn negative_list_write_is_invalid() {
        let list = Value::from(vec![]);
        let err = write_index(&list, &Value::from(-1.0), Value::Null, 6).unwrap_err();
        assert_eq!(err.to_string(), "Invalid index: cannot assign to list index -1");
        assert_eq!(err.line(), 6);
    }

    #[test]
    fn index_into_number_is_a_type_error() {
        let err = read_index(&Value::from(5.0), &Value::from(0.0), 1).unwrap_err();
        assert_eq!(err.to_string(), "Type error: cannot index into number");
    }

    #[test]
    fn text_is_read_only() {
        let err = write_index(&Value::from("abc"), &Value::from(0.0), Value::from("x"), 1).unwrap_err();
        assert_eq!(err.to_string(), "Type error: cannot assign by index into text");
    }

    #[test]
    fn unknown_list_property_is_null() {
        let list = Value::from(vec![]);
        assert_eq!(read_property(&list, "size", 1).unwrap(), Value::Null);
        assert!(write_property(&list, "size", Value::Null, 1).is_err());
    }
}
