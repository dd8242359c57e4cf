use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A multi-file attachment list; the value is always an array of files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    /// Accepted MIME types: exact matches, or `prefix/*` wildcards.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accepted_types: Vec<String>,

    /// Maximum size per file, in megabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<f64>,

    /// Maximum number of attached files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_files: Option<usize>,
}

impl AttachmentField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            accepted_types: Vec::new(),
            max_size: None,
            max_files: None,
        }
    }
}
