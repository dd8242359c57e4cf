use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;
use crate::option::FieldOption;
use crate::value::FieldValue;

/// Layout direction of a radio group; display-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadioDirection {
    Horizontal,
    #[default]
    Vertical,
}

/// A radio-button group; the value is one option value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "defaultValue")]
    pub default: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,

    #[serde(default)]
    pub direction: RadioDirection,
}

impl RadioField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            default: None,
            options: Vec::new(),
            direction: RadioDirection::default(),
        }
    }

    /// Add an option (builder-style).
    #[must_use]
    pub fn with_option(mut self, label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.options.push(FieldOption::new(label, value));
        self
    }
}
