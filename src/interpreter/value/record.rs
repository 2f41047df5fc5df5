use crate::interpreter::value::core::Value;

/// A keyed collection of values that remembers insertion order.
///
/// Records in scripts are small, so lookups scan the entries linearly.
///
/// # Example
/// ```
/// use sathi::interpreter::value::{core::Value, record::Record};
///
/// let mut record = Record::new();
/// record.insert("naam".to_string(), Value::from("Sita"));
/// record.insert("umer".to_string(), Value::from(20.0));
/// record.insert("naam".to_string(), Value::from("Gita"));
///
/// assert_eq!(record.get("naam"), Some(&Value::from("Gita")));
/// assert_eq!(record.iter().map(|(key, _)| key).collect::<Vec<_>>(), ["naam", "umer"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Stores `value` under `key`, replacing any previous value in place.
    pub fn insert(&mut self, key: String, value: Value) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
