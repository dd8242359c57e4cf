use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// A single choice in a select, multi-select, or radio field.
///
/// Membership checks compare `value` by exact equality, no coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Human-readable display label.
    pub label: String,

    /// The value produced when this option is chosen.
    pub value: FieldValue,
}

impl FieldOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_option() {
        let opt = FieldOption::new("US East", "us-east-1");
        assert_eq!(opt.label, "US East");
        assert_eq!(opt.value, FieldValue::from("us-east-1"));
    }

    #[test]
    fn option_equality() {
        let a = FieldOption::new("A", 1);
        let b = FieldOption::new("A", 1);
        assert_eq!(a, b);

        let c = FieldOption::new("A", 2);
        assert_ne!(a, c);
    }

    #[test]
    fn serde_round_trip() {
        let opt = FieldOption::new("JSON", "application/json");
        let json = serde_json::to_string(&opt).unwrap();
        assert!(json.contains("\"label\":\"JSON\""));

        let back: FieldOption = serde_json::from_str(&json).unwrap();
        assert_eq!(opt, back);
    }

    #[test]
    fn numeric_option_values() {
        let json = r#"{"label": "One", "value": 1}"#;
        let opt: FieldOption = serde_json::from_str(json).unwrap();
        assert_eq!(opt.value, FieldValue::from(1));
    }
}
