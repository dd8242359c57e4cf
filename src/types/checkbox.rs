use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A boolean checkbox. When required, the value must be exactly `true`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "defaultValue")]
    pub default: Option<bool>,
}

impl CheckboxField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            default: None,
        }
    }
}
