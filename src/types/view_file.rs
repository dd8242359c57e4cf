use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A read-only file preview. Exempt from validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewFileField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    /// Location of the file to preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// MIME type hint for the preview widget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,

    /// Whether an inline preview is rendered.
    #[serde(default)]
    pub show_preview: bool,
}

impl ViewFileField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            url: None,
            file_type: None,
            show_preview: false,
        }
    }
}
