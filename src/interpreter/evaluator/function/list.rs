use std::{cell::RefCell, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            access::{read_index, write_index},
            core::EvalResult,
            utils::check_arity,
        },
        value::core::Value,
    },
};

/// Extracts the shared storage of a list argument.
fn expect_list<'a>(value: &'a Value,
                   name: &str,
                   line: usize)
                   -> EvalResult<&'a Rc<RefCell<Vec<Value>>>> {
    match value {
        Value::List(items) => Ok(items),
        other => Err(RuntimeError::TypeError { details: format!("{name} expects a list, found {}",
                                                                other.type_name()),
                                               line }),
    }
}

/// Appends every argument after the first to the list given first.
///
/// The list is modified in place and returned, so every variable holding it
/// sees the new elements.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::list::thapaune, value::core::Value};
///
/// let list = Value::from(vec![Value::from(1.0)]);
/// let same = thapaune(&[list.clone(), Value::from(2.0), Value::from(3.0)], 1).unwrap();
///
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// assert!(same.loose_equals(&list));
/// ```
pub fn thapaune(args: &[Value], line: usize) -> EvalResult<Value> {
    let Some((target, items)) = args.split_first() else {
        return Err(RuntimeError::ArgumentCountMismatch { name: "thapaune".to_string(),
                                                         expected: "at least 1".to_string(),
                                                         found: 0,
                                                         line });
    };

    expect_list(target, "thapaune", line)?.borrow_mut()
                                          .extend(items.iter().cloned());

    Ok(target.clone())
}

/// Removes and returns the last element of a list, or null when it is empty.
pub fn hataune(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, "hataune", line)?;

    Ok(expect_list(&args[0], "hataune", line)?.borrow_mut()
                                              .pop()
                                              .unwrap_or(Value::Null))
}

/// Reads `args[0][args[1]]`, exactly like index syntax.
pub fn prapt(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 2, "prapt", line)?;

    read_index(&args[0], &args[1], line)
}

/// Performs `args[0][args[1]] = args[2]` and returns the modified list or
/// record.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::list::sthapana, value::core::Value};
///
/// let list = Value::from(vec![Value::from("a")]);
/// let result = sthapana(&[list, Value::from(0.0), Value::from("b")], 1).unwrap();
///
/// assert_eq!(result.to_string(), r#"["b"]"#);
/// ```
pub fn sthapana(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 3, "sthapana", line)?;

    write_index(&args[0], &args[1], args[2].clone(), line)?;

    Ok(args[0].clone())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hataune_on_empty_list_is_null() {
        let list = Value::from(vec![]);
        assert_eq!(hataune(&[list], 1).unwrap(), Value::Null);
    }

    #[test]
    fn hataune_removes_the_last_element() {
        let list = Value::from(vec![Value::from(1.0), Value::from(2.0)]);
        assert_eq!(hataune(&[list.clone()], 1).unwrap(), Value::from(2.0));
        assert_eq!(list.to_string(), "[1]");
    }

    #[test]
    fn thapaune_requires_a_list() {
        let err = thapaune(&[Value::from("abc"), Value::from(1.0)], 3).unwrap_err();
        assert_eq!(err.to_string(), "Type error: thapaune expects a list, found text");
    }

    #[test]
    fn prapt_reads_records() {
        let record = sthapana(&[Value::new_record(Default::default()),
                                Value::from("naam"),
                                Value::from("Sita")],
                              1).unwrap();
        assert_eq!(prapt(&[record, Value::from("naam")], 1).unwrap(), Value::from("Sita"));
    }
}
