//! Field values, records, and the lookup contract the evaluator reads through.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::codes::CategoricalCode;

/// A single attribute value in a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Continuous or count value, also used for integer category codes.
    Number(f64),
    /// Free text, typically a category label.
    Text(String),
}

impl FieldValue {
    /// Parse a raw cell into a value.
    ///
    /// Returns `None` for cells that represent a missing value. `"None"` is
    /// not treated as missing because it is a valid sleep disorder label.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if Self::is_null_cell(trimmed) {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(FieldValue::Number(n)),
            _ => Some(FieldValue::Text(trimmed.to_string())),
        }
    }

    /// Check if a trimmed cell represents a missing value.
    pub fn is_null_cell(trimmed: &str) -> bool {
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }

    /// Numeric view of the value. Text is accepted when it holds a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Text view of the value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Why a rule could not read its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFault {
    /// The attribute is absent from the record.
    MissingField,
    /// The attribute exists but cannot be read as the expected kind.
    TypeMismatch,
}

impl fmt::Display for FieldFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFault::MissingField => write!(f, "missing field"),
            FieldFault::TypeMismatch => write!(f, "type mismatch"),
        }
    }
}

/// Name-based field access over anything record-like.
pub trait FieldLookup {
    /// Look up a field by attribute name.
    fn field(&self, name: &str) -> Option<&FieldValue>;

    /// Read a field as a number.
    fn number(&self, name: &str) -> Result<f64, FieldFault> {
        let value = self.field(name).ok_or(FieldFault::MissingField)?;
        value.as_number().ok_or(FieldFault::TypeMismatch)
    }

    /// Read a field as a categorical code, accepting integer codes or labels.
    fn category<C: CategoricalCode>(&self, name: &str) -> Result<C, FieldFault>
    where
        Self: Sized,
    {
        let value = self.field(name).ok_or(FieldFault::MissingField)?;
        C::from_value(value).ok_or(FieldFault::TypeMismatch)
    }
}

impl FieldLookup for HashMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

impl FieldLookup for BTreeMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

impl FieldLookup for IndexMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

/// One user's health and lifestyle attributes, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any previous value under the same name.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field value.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Check if a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy of this record without the named fields. Names not present are ignored.
    pub fn without(&self, names: &[&str]) -> Record {
        self.fields
            .iter()
            .filter(|(k, _)| !names.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl FieldLookup for Record {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
