use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A repeatable row group; the value is an array, one entry per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    /// Minimum number of rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_fields: Option<usize>,

    /// Maximum number of rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fields: Option<usize>,

    /// Label for the add-row button; display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_button_text: Option<String>,
}

impl DynamicField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            min_fields: None,
            max_fields: None,
            add_button_text: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let f = DynamicField {
            metadata: FieldMetadata::new("phones", "Phone Numbers"),
            min_fields: Some(1),
            max_fields: Some(5),
            add_button_text: Some("Add phone".into()),
        };

        let json = serde_json::to_string(&f).unwrap();
        assert!(json.contains("\"minFields\":1"));

        let back: DynamicField = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
