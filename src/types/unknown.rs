use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// Fallback for descriptors whose `type` discriminant is not recognized.
///
/// Deserialization captures the raw discriminant instead of failing, so
/// the dispatch resolver can degrade gracefully. Compiling a validation
/// rule for an unknown kind is a hard configuration error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnknownField {
    /// The unrecognized discriminant as it appeared on the wire.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(flatten)]
    pub metadata: FieldMetadata,
}

impl UnknownField {
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            metadata: FieldMetadata::new(name, label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_raw_discriminant() {
        let json = r#"{"type": "signature", "name": "sig", "label": "Signature"}"#;
        let f: UnknownField = serde_json::from_str(json).unwrap();
        assert_eq!(f.kind, "signature");
        assert_eq!(f.metadata.name, "sig");
    }
}
