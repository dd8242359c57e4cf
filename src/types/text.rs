use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A single-line text input.
///
/// Shared by the `text`, `email`, and `password` variants; the variant
/// decides whether an email format check is added on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "defaultValue")]
    pub default: Option<String>,

    /// Minimum required character count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum allowed character count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl TextField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            default: None,
            min_length: None,
            max_length: None,
        }
    }
}
