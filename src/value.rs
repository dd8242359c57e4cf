use std::collections::HashMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Metadata for an uploaded file, as the form-state collaborator reports it.
///
/// `size` is in bytes; `mime_type` is the browser-reported MIME type
/// (serialized as `type`, matching what DOM `File` objects expose).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl FileInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// A field's current value, as supplied by the form-state collaborator.
///
/// Untagged on the wire: plain JSON scalars, file objects, and arrays map
/// directly. Equality is exact and coercion-free, which is what the
/// option-membership checks for select fields rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    File(FileInfo),
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Whether this value counts as absent for required-ness purposes.
    ///
    /// Null, the empty string, and the empty array are all "empty";
    /// `false` and `0` are present values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Broad category name, used in type-mismatch messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::File(_) => "file",
            Self::Array(_) => "array",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_file(&self) -> Option<&FileInfo> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// Numeric coercion: a number passes through, a string is parsed.
    ///
    /// This is the only coercion the crate performs, and only number
    /// fields use it.
    #[must_use]
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<FileInfo> for FieldValue {
    fn from(value: FileInfo) -> Self {
        Self::File(value)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(value: Vec<FieldValue>) -> Self {
        Self::Array(value)
    }
}

/// The current values of a form, keyed by field name.
///
/// Serialized flat, the way form-state collaborators keep their value map.
/// Fields without an entry validate as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(flatten)]
    values: HashMap<String, FieldValue>,
}

impl FormValues {
    /// Create an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Set a value for a field name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Set a value (builder-style, consuming).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove a value by name, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.remove(name)
    }

    /// Check whether a value exists for the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over all field names with a stored value.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Try to get a value as a string reference.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name)?.as_str()
    }

    /// Try to get a value as f64.
    #[must_use]
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.values.get(name)?.as_f64()
    }

    /// Try to get a value as bool.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name)?.as_bool()
    }
}

impl FromIterator<(String, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Index<&str> for FormValues {
    type Output = FieldValue;

    fn index(&self, name: &str) -> &Self::Output {
        &self.values[name]
    }
}
