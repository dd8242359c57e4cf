use std::fmt;

/// Configuration error raised while compiling rules or assembling a schema.
///
/// These are developer mistakes in the descriptor list, surfaced before any
/// rendering or submission happens. They are deterministic and never
/// recoverable at runtime.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// Two descriptors in one list share a name.
    #[error("duplicate field name `{name}`")]
    DuplicateName { name: String },

    /// A descriptor has an empty name.
    #[error("field with label `{label}` has an empty name")]
    EmptyName { label: String },

    /// The descriptor's `type` discriminant is not a supported kind.
    #[error("unsupported field type `{kind}` for field `{name}`")]
    UnsupportedKind { name: String, kind: String },

    /// `validation.pattern` is not a valid regular expression.
    #[error("invalid pattern `{pattern}` for field `{name}`: {reason}")]
    InvalidPattern {
        name: String,
        pattern: String,
        reason: String,
    },

    /// A size limit no value could ever satisfy (zero, negative, or NaN).
    #[error("invalid {attribute} {value} for field `{name}`")]
    InvalidLimit {
        name: String,
        attribute: &'static str,
        value: f64,
    },
}

impl SchemaError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::DuplicateName { .. } | Self::EmptyName { .. } => "naming",
            Self::UnsupportedKind { .. } => "kind",
            Self::InvalidPattern { .. } => "pattern",
            Self::InvalidLimit { .. } => "limit",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::DuplicateName { .. } => "FORM_DUPLICATE_NAME",
            Self::EmptyName { .. } => "FORM_EMPTY_NAME",
            Self::UnsupportedKind { .. } => "FORM_UNSUPPORTED_KIND",
            Self::InvalidPattern { .. } => "FORM_INVALID_PATTERN",
            Self::InvalidLimit { .. } => "FORM_INVALID_LIMIT",
        }
    }
}

/// A single expected validation failure on a field's value.
///
/// `code` is a stable machine identifier per constraint type, suitable for
/// i18n lookup; `message` is the default human-readable text, possibly
/// overridden by the descriptor's `validation.message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub code: &'static str,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A missing value on a required field.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// An empty array on a required array-valued field.
    #[must_use]
    pub fn min_items_required() -> Self {
        Self::new("min_items", "At least one item is required")
    }

    /// A value of the wrong broad type.
    #[must_use]
    pub fn type_mismatch(expected: &str, actual: &str) -> Self {
        Self::new("type", format!("Expected {expected}, got {actual}"))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
