use serde::{Deserialize, Serialize};

use crate::validation::ValidationSpec;

/// Attributes shared by every field descriptor.
///
/// `class_name` is display-only and never consulted by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    /// Unique identifier of the field within its form.
    pub name: String,

    /// Human-readable display label.
    pub label: String,

    /// Whether the control is rendered but not editable.
    #[serde(default)]
    pub disabled: bool,

    /// Whether the user must provide a value.
    #[serde(default)]
    pub required: bool,

    /// Placeholder text shown in empty inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Extra CSS classes for the rendering collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Generic fallback constraints layered on top of the type-specific ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationSpec>,
}

impl FieldMetadata {
    /// Create metadata with the required name and display label.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Mark the field as required (builder-style).
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a generic validation spec (builder-style).
    #[must_use]
    pub fn with_validation(mut self, spec: ValidationSpec) -> Self {
        self.validation = Some(spec);
        self
    }
}
