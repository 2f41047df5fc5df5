use std::rc::Rc;

use crate::{interpreter::value::core::Value, util::num::parse_number};

impl Value {
    /// Compares two values the way `==` does.
    ///
    /// The rules, applied in order:
    /// 1. Two values of the same type compare by value, except lists and
    ///    records, which are equal only when they share the same storage.
    /// 2. Null equals only null.
    /// 3. A boolean compared with a non-boolean becomes `1` or `0` and the
    ///    comparison is repeated.
    /// 4. A number compared with text converts the text to a number.
    /// 5. Anything else (a list or record against a primitive) is unequal.
    ///
    /// `NaN` is never equal to anything, itself included.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::value::core::Value;
    ///
    /// assert!(Value::from(5.0).loose_equals(&Value::from("5")));
    /// assert!(Value::Bool(true).loose_equals(&Value::from("1")));
    /// assert!(!Value::Null.loose_equals(&Value::from(0.0)));
    ///
    /// let list = Value::new_list(vec![]);
    /// assert!(list.loose_equals(&list.clone()));
    /// assert!(!list.loose_equals(&Value::new_list(vec![])));
    /// ```
    #[must_use]
    pub fn loose_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b),
            (Self::Record(a), Self::Record(b)) => Rc::ptr_eq(a, b),
            (Self::Null, _) | (_, Self::Null) => false,
            (Self::Bool(b), other) | (other, Self::Bool(b)) => {
                Self::Number(f64::from(u8::from(*b))).loose_equals(other)
            },
            (Self::Number(n), Self::Text(s)) | (Self::Text(s), Self::Number(n)) => {
                *n == parse_number(s)
            },
            _ => false,
        }
    }
}
