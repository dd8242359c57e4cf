use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A read-only detail row showing a static value. Exempt from validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,
}

impl DetailField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let f = DetailField::new("created_at", "Created");
        let json = serde_json::to_string(&f).unwrap();
        let back: DetailField = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
