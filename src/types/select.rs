use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;
use crate::option::FieldOption;
use crate::value::FieldValue;

/// A single-choice dropdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "defaultValue")]
    pub default: Option<FieldValue>,

    /// The available choices. An empty list disables the membership check.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,

    /// Whether the control renders as a multiple-selection dropdown.
    #[serde(default)]
    pub multiple: bool,

    /// Whether the dropdown offers a search box; display-only.
    #[serde(default)]
    pub searchable: bool,
}

impl SelectField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            default: None,
            options: Vec::new(),
            multiple: false,
            searchable: false,
        }
    }

    /// Add an option (builder-style).
    #[must_use]
    pub fn with_option(mut self, label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.options.push(FieldOption::new(label, value));
        self
    }
}
