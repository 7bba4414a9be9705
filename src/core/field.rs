//! Typed record field values
//!
//! A [`FieldValue`] is one cell of a [`Record`](super::Record). Each variant
//! answers the four comparison predicates used by the keyed comparator. A
//! predicate that has no meaning for a variant (ordering on text, overlap on
//! numbers) is always `false`, as is any predicate between two different variants.
//! Empty text never partially matches anything.

use chrono::NaiveDateTime;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Datetime layout used by record word lists and by `Display`
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A typed, comparable record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Double(f64),
    DateTime(NaiveDateTime),
    Set(BTreeSet<String>),
}

/// The type tag of a [`FieldValue`], as spelled in record word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Integer,
    Double,
    DateTime,
    Set,
}

impl FieldKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::DateTime => "datetime",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(Self::Text),
            "integer" => Ok(Self::Integer),
            "double" => Ok(Self::Double),
            "datetime" => Ok(Self::DateTime),
            "set" => Ok(Self::Set),
            other => Err(format!("Unknown field type: {other}")),
        }
    }
}

impl FieldValue {
    /// Build a set field from any iterator of strings
    pub fn set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Integer(_) => FieldKind::Integer,
            Self::Double(_) => FieldKind::Double,
            Self::DateTime(_) => FieldKind::DateTime,
            Self::Set(_) => FieldKind::Set,
        }
    }

    /// Borrow the text of a `Text` field
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Exact match
    ///
    /// Text compares case-insensitively, sets by membership, datetimes by instant.
    #[must_use]
    #[allow(clippy::float_cmp)] // Exact equality is the game rule
    pub fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.to_lowercase() == b.to_lowercase(),
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => a == b,
            _ => false,
        }
    }

    /// Partial overlap
    ///
    /// Text: either value contains the other (case-insensitive); `false` when
    /// either is empty.
    /// Set: the intersection is non-empty.
    /// Always `false` for numbers and datetimes.
    #[must_use]
    pub fn partial(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) if a.is_empty() || b.is_empty() => false,
            (Self::Text(a), Self::Text(b)) => {
                let (a, b) = (a.to_lowercase(), b.to_lowercase());
                a.contains(&b) || b.contains(&a)
            }
            (Self::Set(a), Self::Set(b)) => !a.is_disjoint(b),
            _ => false,
        }
    }

    /// Strictly greater than `other`; always `false` for text and sets
    #[must_use]
    pub fn higher(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a > b,
            (Self::Double(a), Self::Double(b)) => a > b,
            (Self::DateTime(a), Self::DateTime(b)) => a > b,
            _ => false,
        }
    }

    /// Strictly less than `other`; always `false` for text and sets
    #[must_use]
    pub fn lower(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a < b,
            (Self::Double(a), Self::Double(b)) => a < b,
            (Self::DateTime(a), Self::DateTime(b)) => a < b,
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::DateTime(value) => write!(f, "{}", value.format(DATETIME_FORMAT)),
            Self::Set(items) => {
                let joined: Vec<&str> = items.iter().map(String::as_str).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}
