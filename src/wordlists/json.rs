//! Record word lists in JSON
//!
//! A record list names its display key, declares a type for every field, and
//! lists the records with every value written as a string:
//!
//! ```json
//! {
//!   "key": "name",
//!   "fields": { "name": "string", "year": "integer", "paradigms": "set" },
//!   "data": [ { "name": "Rust", "year": "2015", "paradigms": "functional,generic" } ]
//! }
//! ```
//!
//! Datetimes use `%Y-%m-%d %H:%M`; sets are comma separated.

use crate::core::{DATETIME_FORMAT, FieldKind, FieldValue, Record};
use crate::game::RecordList;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a record list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field '{field}' has unknown type '{kind}'")]
    UnknownFieldType { field: String, kind: String },

    #[error("Record {row} has undeclared field '{field}'")]
    UndeclaredField { row: usize, field: String },

    #[error("Record {row}: cannot parse '{value}' as {kind} for field '{field}'")]
    InvalidValue {
        row: usize,
        field: String,
        kind: FieldKind,
        value: String,
    },

    #[error("Display key '{key}' must be declared as a string field")]
    KeyNotText { key: String },

    #[error("Record {row} has no value for display key '{key}'")]
    MissingDisplayKey { row: usize, key: String },

    #[error("Record {row} has no value for field '{field}'")]
    MissingField { row: usize, field: String },
}

/// A parsed record list and the field players guess by
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    pub display_key: String,
    pub records: Vec<Record>,
}

impl RecordSet {
    /// Turn the set into a playable target source
    #[must_use]
    pub fn into_record_list(self) -> RecordList {
        RecordList::new(self.records, self.display_key)
    }
}

#[derive(Debug, Deserialize)]
struct RawRecordSet {
    key: String,
    fields: BTreeMap<String, String>,
    data: Vec<BTreeMap<String, String>>,
}

/// Parse a record list from JSON text
///
/// # Errors
/// Returns a [`WordListError`] for malformed JSON, unknown type names,
/// undeclared or missing fields, unparsable values and a display key that is
/// not a declared string field.
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::json::parse_records;
///
/// let set = parse_records(r#"{
///     "key": "name",
///     "fields": { "name": "string", "year": "integer" },
///     "data": [ { "name": "Rust", "year": "2015" } ]
/// }"#).unwrap();
/// assert_eq!(set.records[0].text("name"), Some("Rust"));
/// ```
pub fn parse_records(json: &str) -> Result<RecordSet, WordListError> {
    let raw: RawRecordSet = serde_json::from_str(json)?;

    let kinds = raw
        .fields
        .iter()
        .map(|(field, kind)| {
            kind.parse::<FieldKind>()
                .map(|parsed| (field.as_str(), parsed))
                .map_err(|_| WordListError::UnknownFieldType {
                    field: field.clone(),
                    kind: kind.clone(),
                })
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    if kinds.get(raw.key.as_str()) != Some(&FieldKind::Text) {
        return Err(WordListError::KeyNotText { key: raw.key });
    }

    let mut records = Vec::with_capacity(raw.data.len());
    for (row, entry) in raw.data.iter().enumerate() {
        let mut record = Record::new();
        for (field, value) in entry {
            let kind = kinds
                .get(field.as_str())
                .copied()
                .ok_or_else(|| WordListError::UndeclaredField {
                    row,
                    field: field.clone(),
                })?;
            let parsed = parse_value(kind, value).ok_or_else(|| WordListError::InvalidValue {
                row,
                field: field.clone(),
                kind,
                value: value.clone(),
            })?;
            record.insert(field.as_str(), parsed);
        }
        if !record.contains_key(&raw.key) {
            return Err(WordListError::MissingDisplayKey { row, key: raw.key });
        }
        // Every record carries every declared field so records compare key for key
        if let Some(field) = kinds.keys().find(|field| !record.contains_key(field)) {
            return Err(WordListError::MissingField {
                row,
                field: (*field).to_string(),
            });
        }
        records.push(record);
    }

    debug!(key = %raw.key, records = records.len(), "parsed record list");
    Ok(RecordSet {
        display_key: raw.key,
        records,
    })
}

/// Read and parse a record list file
///
/// # Errors
/// Returns [`WordListError::Io`] if the file cannot be read, otherwise any
/// error of [`parse_records`].
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<RecordSet, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content)
}

fn parse_value(kind: FieldKind, raw: &str) -> Option<FieldValue> {
    match kind {
        FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
        FieldKind::Integer => raw.trim().parse().ok().map(FieldValue::Integer),
        FieldKind::Double => raw.trim().parse().ok().map(FieldValue::Double),
        FieldKind::DateTime => NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)
            .ok()
            .map(FieldValue::DateTime),
        FieldKind::Set => Some(FieldValue::set(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty()),
        )),
    }
}
