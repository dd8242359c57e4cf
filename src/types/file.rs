use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A file upload. The value is one file, or an array when `multiple`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    /// Native file-picker accept string; display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,

    /// Maximum size per file, in megabytes (1 MB = 1024*1024 bytes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<f64>,

    /// MIME fragments; each file's type must contain one as a substring.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_types: Vec<String>,

    /// Whether several files may be selected.
    #[serde(default)]
    pub multiple: bool,

    /// Maximum number of files when `multiple`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_files: Option<usize>,
}

impl FileField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            accept: None,
            max_size: None,
            allowed_types: Vec::new(),
            multiple: false,
            max_files: None,
        }
    }
}
