use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A time-of-day picker; the value is a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePickerField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "defaultValue")]
    pub default: Option<String>,
}

impl TimePickerField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            default: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let f = TimePickerField {
            metadata: FieldMetadata::new("start", "Start Time"),
            default: Some("09:00".into()),
        };

        let json = serde_json::to_string(&f).unwrap();
        let back: TimePickerField = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
