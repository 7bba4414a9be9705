//! Structured guess units for object games
//!
//! A record maps field names to typed values. Keys are kept sorted so every
//! iteration (and therefore every verdict sequence) follows the same order.

use super::FieldValue;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// An ordered mapping from field name to [`FieldValue`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{FieldValue, Record};
    ///
    /// let rust = Record::new()
    ///     .with("name", "Rust")
    ///     .with("year", 2015_i64);
    /// assert_eq!(rust.len(), 2);
    /// assert_eq!(rust.text("name"), Some("Rust"));
    /// ```
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field, returning the previous value for that key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(key.into(), value.into())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Text of a `Text` field, used to look up the display key
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields in sorted key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.fields {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_iterate_sorted() {
        let record = Record::new()
            .with("year", 1995_i64)
            .with("name", "Java")
            .with("paradigms", FieldValue::set(["object-oriented"]));

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, ["name", "paradigms", "year"]);
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut record = Record::new().with("name", "Go");
        let previous = record.insert("name", "Zig");
        assert_eq!(previous, Some(FieldValue::from("Go")));
        assert_eq!(record.len(), 1);
        assert_eq!(record.text("name"), Some("Zig"));
    }

    #[test]
    fn text_ignores_non_text_fields() {
        let record = Record::new().with("year", 2009_i64);
        assert_eq!(record.text("year"), None);
        assert_eq!(record.text("missing"), None);
    }

    #[test]
    fn display_joins_fields() {
        let record: Record = [("b", 2_i64), ("a", 1_i64)].into_iter().collect();
        assert_eq!(record.to_string(), "a: 1 | b: 2");
    }
}
