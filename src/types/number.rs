use serde::{Deserialize, Serialize};

use crate::metadata::FieldMetadata;

/// A numeric input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberField {
    #[serde(flatten)]
    pub metadata: FieldMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "defaultValue")]
    pub default: Option<f64>,

    /// Minimum allowed value (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum allowed value (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Step increment for UI spinners; not consulted by validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl NumberField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metadata: FieldMetadata::new(name, label),
            default: None,
            min: None,
            max: None,
            step: None,
        }
    }
}
