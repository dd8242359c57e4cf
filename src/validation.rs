use serde::{Deserialize, Serialize};

/// Generic constraint record that any field may carry next to its
/// type-specific attributes.
///
/// For `number` fields `min`/`max` are applied as additional checks on top
/// of the explicit attribute bounds. `pattern` applies to text-family
/// fields and is compiled to a regex at schema-build time; `message`
/// overrides the pattern failure message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationSpec {
    /// A spec requiring values at or above `min`.
    #[must_use]
    pub fn min(min: f64) -> Self {
        Self {
            min: Some(min),
            ..Self::default()
        }
    }

    /// A spec requiring values at or below `max`.
    #[must_use]
    pub fn max(max: f64) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }

    /// A spec requiring values within an inclusive range.
    #[must_use]
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    /// A spec requiring the value to match a regex pattern.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Set the failure message shown when the pattern does not match.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
