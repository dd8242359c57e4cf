use indexmap::IndexMap;

use crate::def::FieldDef;
use crate::error::{SchemaError, Violation};
use crate::rule::{FieldRule, compile_rule};
use crate::value::{FieldValue, FormValues};

/// A compiled form: one validation rule per field, keyed by name.
///
/// Iteration order follows the descriptor list, so error reporting and
/// any schema-driven UI stay aligned with render order.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    rules: IndexMap<String, FieldRule>,
}

impl FormSchema {
    /// Look up the rule for a field.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules.get(name)
    }

    /// The number of fields in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the schema has no fields. An empty schema accepts every
    /// submission.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterate over `(name, rule)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Validate a full submission against every rule.
    ///
    /// Fields absent from `values` are checked as null, so a missing
    /// required field still fails. Extra values without a matching rule
    /// are ignored.
    #[must_use]
    pub fn validate(&self, values: &FormValues) -> FormReport {
        let mut errors = IndexMap::new();
        for (name, rule) in &self.rules {
            let value = values.get(name).cloned().unwrap_or(FieldValue::Null);
            if let Err(violations) = rule.check(&value) {
                tracing::debug!(field = %name, count = violations.len(), "field failed validation");
                errors.insert(name.clone(), violations);
            }
        }
        FormReport { errors }
    }
}

/// The outcome of validating one submission.
///
/// Only failing fields appear; a clean submission yields an empty report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormReport {
    errors: IndexMap<String, Vec<Violation>>,
}

impl FormReport {
    /// Whether every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The number of failing fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The violations recorded for one field, if any.
    #[must_use]
    pub fn errors_for(&self, name: &str) -> Option<&[Violation]> {
        self.errors.get(name).map(Vec::as_slice)
    }

    /// The first violation message for a field, the usual thing an
    /// inline error label shows.
    #[must_use]
    pub fn first_message(&self, name: &str) -> Option<&str> {
        self.errors
            .get(name)?
            .first()
            .map(|violation| violation.message.as_str())
    }

    /// Iterate over failing fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Violation])> {
        self.errors
            .iter()
            .map(|(name, violations)| (name.as_str(), violations.as_slice()))
    }
}

/// Compile a descriptor list into a [`FormSchema`].
///
/// All-or-nothing: the first configuration error aborts assembly, so a
/// schema either exists in full or not at all. Duplicate names are a hard
/// error; silently keeping one of the two would mask a real authoring bug.
pub fn assemble_schema(fields: &[FieldDef]) -> Result<FormSchema, SchemaError> {
    let mut rules = IndexMap::with_capacity(fields.len());
    for def in fields {
        let rule = compile_rule(def)?;
        let name = rule.name().to_owned();
        if rules.insert(name.clone(), rule).is_some() {
            return Err(SchemaError::DuplicateName { name });
        }
    }
    tracing::debug!(fields = rules.len(), "assembled form schema");
    Ok(FormSchema { rules })
}
