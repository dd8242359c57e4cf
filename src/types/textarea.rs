use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A multi-line text input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextareaField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "defaultValue")]
    pub default: Option<String>,

    /// Visible row count; not consulted by validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl TextareaField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            default: None,
            rows: None,
            min_length: None,
            max_length: None,
        }
    }
}
