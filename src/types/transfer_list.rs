use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A two-pane transfer list; the value is the array of items moved right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferListField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    /// Title above the source pane; display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_title: Option<String>,

    /// Title above the target pane; display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_title: Option<String>,
}

impl TransferListField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            left_title: None,
            right_title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let f = TransferListField {
            metadata: FieldMetadata::new("perms", "Permissions"),
            left_title: Some("Available".into()),
            right_title: Some("Granted".into()),
        };

        let json = serde_json::to_string(&f).unwrap();
        let back: TransferListField = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
