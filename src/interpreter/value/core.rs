use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::record::Record},
    util::num::{format_number, parse_number},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
///
/// Lists and records are shared by reference: cloning a `Value::List` clones
/// the `Rc`, not the elements, so two variables holding the same list observe
/// each other's mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A piece of text.
    Text(String),
    /// A boolean value (`satya` or `asatya`).
    Bool(bool),
    /// The empty value, `khali`.
    Null,
    /// An ordered, mutable list of values.
    List(Rc<RefCell<Vec<Self>>>),
    /// A mutable keyed record of values.
    Record(Rc<RefCell<Record>>),
}

impl Value {
    /// Wraps `values` in a fresh list.
    #[must_use]
    pub fn new_list(values: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(values)))
    }

    /// Wraps `record` in a fresh record value.
    #[must_use]
    pub fn new_record(record: Record) -> Self {
        Self::Record(Rc::new(RefCell::new(record)))
    }

    /// The type name used in error messages.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Null.type_name(), "null");
    /// assert_eq!(Value::new_list(vec![]).type_name(), "list");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }

    /// The type name reported by the `prakar` built-in.
    ///
    /// Null, lists and records all report `object`.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Null | Self::List(_) | Self::Record(_) => "object",
        }
    }

    /// Returns the truthiness of a value.
    ///
    /// `asatya`, `0`, `NaN`, empty text and `khali` are falsy. Everything
    /// else, empty lists and records included, is truthy.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::new_list(vec![]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Null => false,
            Self::List(_) | Self::Record(_) => true,
        }
    }

    /// Extracts a number, or fails with a type error naming the actual type.
    ///
    /// # Parameters
    /// - `line`: Line number for error reporting.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Converts any value to a number, the way `sankhya` does.
    ///
    /// Text is parsed leniently (see
    /// [`parse_number`](crate::util::num::parse_number)), booleans become `1`
    /// or `0`, null becomes `0`. An empty list is `0`, a one-element list
    /// converts its element, and every other list or record is `NaN`. A list
    /// that reaches itself through single elements is also `NaN`.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(" 12 ").to_number(), 12.0);
    /// assert_eq!(Value::Bool(true).to_number(), 1.0);
    /// assert!(Value::from("baahra").to_number().is_nan());
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        let mut seen: Vec<*const ()> = Vec::new();
        let mut current = self.clone();

        loop {
            let next = match &current {
                Self::Number(n) => return *n,
                Self::Text(s) => return parse_number(s),
                Self::Bool(b) => return f64::from(u8::from(*b)),
                Self::Null => return 0.0,
                Self::Record(_) => return f64::NAN,
                Self::List(items) => {
                    let address = Rc::as_ptr(items).cast::<()>();
                    if seen.contains(&address) {
                        return f64::NAN;
                    }
                    seen.push(address);

                    match items.borrow().as_slice() {
                        [] => return 0.0,
                        [only] => only.clone(),
                        _ => return f64::NAN,
                    }
                },
            };
            current = next;
        }
    }

    /// Writes the display form of a value.
    ///
    /// `path` holds the addresses of the containers currently being written.
    /// A container met again on its own path prints as `[...]` or `{...}`.
    /// Nested text is quoted.
    fn write_display(&self,
                     f: &mut std::fmt::Formatter<'_>,
                     path: &mut Vec<*const ()>,
                     nested: bool)
                     -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Text(s) if nested => write!(f, "{s:?}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::List(items) => {
                let address = Rc::as_ptr(items).cast::<()>();
                if path.contains(&address) {
                    return write!(f, "[...]");
                }

                path.push(address);
                write!(f, "[")?;

                for (index, value) in items.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.write_display(f, path, true)?;
                }

                path.pop();
                write!(f, "]")
            },
            Self::Record(record) => {
                let address = Rc::as_ptr(record).cast::<()>();
                if path.contains(&address) {
                    return write!(f, "{{...}}");
                }

                path.push(address);
                write!(f, "{{")?;

                for (index, (key, value)) in record.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: ")?;
                    value.write_display(f, path, true)?;
                }

                path.pop();
                write!(f, "}}")
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_display(f, &mut Vec::new(), false)
    }
}

impl From<&LiteralValue> for Value {
    fn from(value: &LiteralValue) -> Self {
        match value {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Text(s) => Self::Text(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::new_list(values)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nested_text_is_quoted() {
        let inner = Value::from(vec![Value::from("ka"), Value::Null]);
        let list = Value::from(vec![Value::from(1.0), inner, Value::Bool(false)]);
        assert_eq!(list.to_string(), r#"[1, ["ka", null], false]"#);
    }

    #[test]
    fn records_print_in_insertion_order() {
        let record: Record = [("naam".to_string(), Value::from("Ram")),
                              ("umer".to_string(), Value::from(20.0))].into_iter()
                                                                       .collect();
        assert_eq!(Value::new_record(record).to_string(), r#"{naam: "Ram", umer: 20}"#);
    }

    #[test]
    fn clones_share_list_storage() {
        let list = Value::new_list(vec![]);
        let alias = list.clone();
        if let Value::List(items) = &alias {
            items.borrow_mut().push(Value::from(5.0));
        }
        assert_eq!(list.to_string(), "[5]");
    }

    #[test]
    fn self_containing_list_prints_a_placeholder() {
        let list = Value::new_list(vec![Value::from(1.0)]);
        if let Value::List(items) = &list {
            items.borrow_mut().push(list.clone());
        }
        assert_eq!(list.to_string(), "[1, [...]]");
        assert!(list.to_number().is_nan());
    }

    #[test]
    fn shared_sibling_is_not_a_cycle() {
        let inner = Value::from(vec![Value::from(2.0)]);
        let outer = Value::from(vec![inner.clone(), inner]);
        assert_eq!(outer.to_string(), "[[2], [2]]");
    }

    #[test]
    fn record_holding_itself_prints_a_placeholder() {
        let record = Value::new_record(Record::default());
        if let Value::Record(fields) = &record {
            fields.borrow_mut().insert("aafai".to_string(), record.clone());
        }
        assert_eq!(record.to_string(), "{aafai: {...}}");
    }

    #[test]
    fn single_element_cycle_converts_to_nan() {
        let list = Value::new_list(vec![]);
        if let Value::List(items) = &list {
            items.borrow_mut().push(list.clone());
        }
        assert!(list.to_number().is_nan());
        assert_eq!(Value::from(vec![Value::from(vec![Value::from("7")])]).to_number(), 7.0);
    }

    #[test]
    fn as_number_names_the_found_type() {
        let err = Value::from("x").as_number(3).unwrap_err();
        assert_eq!(err.to_string(), "Type error: expected a number, found text");
        assert_eq!(err.line(), 3);
    }
}
