use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;
use crate::option::FieldOption;
use crate::value::FieldValue;

/// A multi-choice selection; the value is an array of option values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSelectField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "defaultValue")]
    pub default: Option<Vec<FieldValue>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,

    /// Maximum number of selections allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_select: Option<usize>,

    /// Whether the dropdown offers a search box; display-only.
    #[serde(default)]
    pub searchable: bool,
}

impl MultiSelectField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            default: None,
            options: Vec::new(),
            max_select: None,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let f = MultiSelectField {
            max_select: Some(3),
            ..MultiSelectField::new("tags", "Tags")
                .with_option("Logging", "logging")
                .with_option("Metrics", "metrics")
        };

        let json = serde_json::to_string(&f).unwrap();
        assert!(json.contains("\"maxSelect\":3"));

        let back: MultiSelectField = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
