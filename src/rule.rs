use chrono::NaiveDate;
use regex::Regex;

use crate::def::FieldDef;
use crate::error::{SchemaError, Violation};
use crate::kind::FieldKind;
use crate::patterns;
use crate::value::{FieldValue, FileInfo};

/// One compiled constraint. Each variant corresponds to one check the
/// descriptor declared; messages are fixed at compile time.
#[derive(Debug, Clone)]
enum Check {
    /// Email format, applied to string values.
    Email,
    /// Minimum character count.
    MinLength(usize),
    /// Maximum character count.
    MaxLength(usize),
    /// Regex match with an optional caller-supplied message.
    Pattern {
        regex: Regex,
        message: Option<String>,
    },
    /// Numeric lower bound (inclusive), applied to the coerced number.
    Min(f64),
    /// Numeric upper bound (inclusive).
    Max(f64),
    /// The value must equal one of the listed option values.
    OneOf(Vec<FieldValue>),
    /// Every array element must equal one of the listed option values.
    EachOneOf(Vec<FieldValue>),
    /// Minimum array length, with a kind-specific message.
    MinItems { limit: usize, message: String },
    /// Maximum array length, with a kind-specific message.
    MaxItems { limit: usize, message: String },
    /// Per-file byte-size cap, expressed in megabytes.
    MaxFileSize(f64),
    /// Every file's MIME type must contain one entry as a substring.
    FileTypeContains(Vec<String>),
    /// Every file's MIME type must match one entry exactly, or by
    /// `prefix/*` wildcard.
    FileTypeAccepted(Vec<String>),
    /// Inclusive date lower bound; the raw bound string feeds the message.
    DateMin { bound: NaiveDate, raw: String },
    /// Inclusive date upper bound.
    DateMax { bound: NaiveDate, raw: String },
}

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Parse an ISO-ish date string: plain `YYYY-MM-DD` first, RFC 3339 as a
/// fallback. `None` means "no check applied", never an error.
fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.date_naive())
}

fn accepted_type_matches(accepted: &str, mime: &str) -> bool {
    if let Some(prefix) = accepted.strip_suffix("/*") {
        mime.starts_with(prefix) && mime[prefix.len()..].starts_with('/')
    } else {
        mime == accepted
    }
}

/// Collect the file objects carried by a value: a single file counts as a
/// slice of one. Non-file entries were rejected by the type gate.
fn files_of(value: &FieldValue) -> Vec<&FileInfo> {
    match value {
        FieldValue::File(file) => vec![file],
        FieldValue::Array(items) => items.iter().filter_map(FieldValue::as_file).collect(),
        _ => Vec::new(),
    }
}

impl Check {
    fn apply(&self, value: &FieldValue) -> Option<Violation> {
        match self {
            Self::Email => {
                let text = value.as_str()?;
                (!patterns::email().is_match(text))
                    .then(|| Violation::new("email", "Invalid email format"))
            }
            Self::MinLength(min) => {
                let text = value.as_str()?;
                (text.chars().count() < *min).then(|| {
                    Violation::new("min_length", format!("Must be at least {min} characters"))
                })
            }
            Self::MaxLength(max) => {
                let text = value.as_str()?;
                (text.chars().count() > *max).then(|| {
                    Violation::new("max_length", format!("Must be at most {max} characters"))
                })
            }
            Self::Pattern { regex, message } => {
                let text = value.as_str()?;
                (!regex.is_match(text)).then(|| {
                    Violation::new(
                        "pattern",
                        message.clone().unwrap_or_else(|| "Invalid format".into()),
                    )
                })
            }
            Self::Min(min) => {
                let number = value.coerce_number()?;
                (number < *min)
                    .then(|| Violation::new("min", format!("Must be at least {min}")))
            }
            Self::Max(max) => {
                let number = value.coerce_number()?;
                (number > *max).then(|| Violation::new("max", format!("Must be at most {max}")))
            }
            Self::OneOf(allowed) => (!allowed.contains(value))
                .then(|| Violation::new("one_of", "Selected option is not valid")),
            Self::EachOneOf(allowed) => {
                let items = value.as_array()?;
                items
                    .iter()
                    .any(|item| !allowed.contains(item))
                    .then(|| Violation::new("one_of", "Selected option is not valid"))
            }
            Self::MinItems { limit, message } => {
                let items = value.as_array()?;
                (items.len() < *limit).then(|| Violation::new("min_items", message.clone()))
            }
            Self::MaxItems { limit, message } => {
                let len = match value {
                    FieldValue::Array(items) => items.len(),
                    // A single file under a count cap is one item.
                    FieldValue::File(_) => 1,
                    _ => return None,
                };
                (len > *limit).then(|| Violation::new("max_items", message.clone()))
            }
            Self::MaxFileSize(mb) => {
                let limit = (mb * BYTES_PER_MB) as u64;
                files_of(value)
                    .iter()
                    .any(|file| file.size > limit)
                    .then(|| {
                        Violation::new("max_size", format!("File size must not exceed {mb}MB"))
                    })
            }
            Self::FileTypeContains(fragments) => files_of(value)
                .iter()
                .any(|file| {
                    !fragments
                        .iter()
                        .any(|fragment| file.mime_type.contains(fragment.as_str()))
                })
                .then(|| Violation::new("file_type", "File type is not allowed")),
            Self::FileTypeAccepted(accepted) => files_of(value)
                .iter()
                .any(|file| {
                    !accepted
                        .iter()
                        .any(|entry| accepted_type_matches(entry, &file.mime_type))
                })
                .then(|| Violation::new("file_type", "File type is not allowed")),
            Self::DateMin { bound, raw } => {
                let date = parse_iso_date(value.as_str()?)?;
                (date < *bound).then(|| {
                    Violation::new("date_min", format!("Date must not be before {raw}"))
                })
            }
            Self::DateMax { bound, raw } => {
                let date = parse_iso_date(value.as_str()?)?;
                (date > *bound)
                    .then(|| Violation::new("date_max", format!("Date must not be after {raw}")))
            }
        }
    }
}

/// A compiled, immutable validator for one field's value.
///
/// Construction happens once per descriptor via [`compile_rule`]; checking
/// is pure and the rule can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: String,
    kind: FieldKind,
    required: bool,
    checks: Vec<Check>,
}

impl FieldRule {
    /// Compile a descriptor into its validation rule.
    ///
    /// Fails on configuration errors only: an empty name, an unrecognized
    /// `type` discriminant, or a malformed `validation.pattern`.
    pub fn compile(def: &FieldDef) -> Result<Self, SchemaError> {
        let meta = def.metadata();
        if meta.name.is_empty() {
            return Err(SchemaError::EmptyName {
                label: meta.label.clone(),
            });
        }
        let Some(kind) = def.kind() else {
            return Err(SchemaError::UnsupportedKind {
                name: meta.name.clone(),
                kind: def.raw_kind().to_owned(),
            });
        };

        let mut checks = Vec::new();
        match def {
            FieldDef::Text(f) | FieldDef::Password(f) | FieldDef::Email(f) => {
                if matches!(def, FieldDef::Email(_)) {
                    checks.push(Check::Email);
                }
                if let Some(min) = f.min_length {
                    checks.push(Check::MinLength(min));
                }
                if let Some(max) = f.max_length {
                    checks.push(Check::MaxLength(max));
                }
                push_pattern_check(&mut checks, def)?;
            }
            FieldDef::Textarea(f) => {
                if let Some(min) = f.min_length {
                    checks.push(Check::MinLength(min));
                }
                if let Some(max) = f.max_length {
                    checks.push(Check::MaxLength(max));
                }
                push_pattern_check(&mut checks, def)?;
            }
            FieldDef::Number(f) => {
                if let Some(min) = f.min {
                    checks.push(Check::Min(min));
                }
                if let Some(max) = f.max {
                    checks.push(Check::Max(max));
                }
                // The generic spec bounds are additional checks, not
                // overrides of the explicit attributes.
                if let Some(spec) = def.validation() {
                    if let Some(min) = spec.min {
                        checks.push(Check::Min(min));
                    }
                    if let Some(max) = spec.max {
                        checks.push(Check::Max(max));
                    }
                }
            }
            FieldDef::Select(f) => {
                if !f.options.is_empty() {
                    checks.push(Check::OneOf(option_values(&f.options)));
                }
            }
            FieldDef::Radio(f) => {
                if !f.options.is_empty() {
                    checks.push(Check::OneOf(option_values(&f.options)));
                }
            }
            FieldDef::MultiSelect(f) => {
                if !f.options.is_empty() {
                    checks.push(Check::EachOneOf(option_values(&f.options)));
                }
                if let Some(limit) = f.max_select {
                    checks.push(Check::MaxItems {
                        limit,
                        message: format!("At most {limit} items can be selected"),
                    });
                }
            }
            FieldDef::Checkbox(_) => {}
            FieldDef::Date(f) => {
                if let Some(raw) = &f.min {
                    if let Some(bound) = parse_iso_date(raw) {
                        checks.push(Check::DateMin {
                            bound,
                            raw: raw.clone(),
                        });
                    }
                }
                if let Some(raw) = &f.max {
                    if let Some(bound) = parse_iso_date(raw) {
                        checks.push(Check::DateMax {
                            bound,
                            raw: raw.clone(),
                        });
                    }
                }
            }
            FieldDef::File(f) => {
                if let Some(mb) = f.max_size {
                    size_limit_check(&meta.name, mb)?;
                    checks.push(Check::MaxFileSize(mb));
                }
                if !f.allowed_types.is_empty() {
                    checks.push(Check::FileTypeContains(f.allowed_types.clone()));
                }
                if let Some(limit) = f.max_files {
                    checks.push(Check::MaxItems {
                        limit,
                        message: format!("At most {limit} files are allowed"),
                    });
                }
            }
            FieldDef::Attachment(f) => {
                if let Some(limit) = f.max_files {
                    checks.push(Check::MaxItems {
                        limit,
                        message: format!("At most {limit} files are allowed"),
                    });
                }
                if let Some(mb) = f.max_size {
                    size_limit_check(&meta.name, mb)?;
                    checks.push(Check::MaxFileSize(mb));
                }
                if !f.accepted_types.is_empty() {
                    checks.push(Check::FileTypeAccepted(f.accepted_types.clone()));
                }
            }
            FieldDef::Dynamic(f) => {
                if let Some(limit) = f.min_fields {
                    checks.push(Check::MinItems {
                        limit,
                        message: format!("At least {limit} items are required"),
                    });
                }
                if let Some(limit) = f.max_fields {
                    checks.push(Check::MaxItems {
                        limit,
                        message: format!("At most {limit} items are allowed"),
                    });
                }
            }
            FieldDef::TransferList(_) | FieldDef::TimePicker(_) => {}
            FieldDef::ViewFile(_) | FieldDef::Detail(_) => {}
            FieldDef::Unknown(_) => unreachable!("rejected above"),
        }

        Ok(Self {
            name: meta.name.clone(),
            kind,
            // Read-only display fields are exempt from required-ness.
            required: meta.required && !kind.is_read_only(),
            checks,
        })
    }

    /// The field name this rule validates.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field kind this rule was compiled from.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether a value is demanded (read-only kinds report `false`).
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a value against this rule.
    ///
    /// An absent value (null, empty string, empty array) on an optional
    /// field is valid and skips every check. A type mismatch produces a
    /// single violation; within one broad type, failures accumulate.
    pub fn check(&self, value: &FieldValue) -> Result<(), Vec<Violation>> {
        if value.is_empty() {
            if self.required {
                let violation = if self.kind.is_array_valued() {
                    Violation::min_items_required()
                } else {
                    Violation::required()
                };
                return Err(vec![violation]);
            }
            return Ok(());
        }

        if self.kind.is_read_only() {
            return Ok(());
        }

        // Broad type gate. Getting this wrong short-circuits; the
        // constraint checks below assume the gated shape.
        let mut violations = Vec::new();
        match self.kind {
            FieldKind::Number => {
                if value.coerce_number().is_none() {
                    return Err(vec![Violation::type_mismatch("number", value.type_name())]);
                }
            }
            FieldKind::Checkbox => {
                let Some(checked) = value.as_bool() else {
                    return Err(vec![Violation::type_mismatch(
                        "boolean",
                        value.type_name(),
                    )]);
                };
                if self.required && !checked {
                    violations.push(Violation::required());
                }
            }
            FieldKind::File => {
                let well_formed = match value {
                    FieldValue::File(_) => true,
                    FieldValue::Array(items) => {
                        items.iter().all(|item| item.as_file().is_some())
                    }
                    _ => false,
                };
                if !well_formed {
                    return Err(vec![Violation::type_mismatch("file", value.type_name())]);
                }
            }
            kind if kind.is_array_valued() => {
                let Some(items) = value.as_array() else {
                    return Err(vec![Violation::type_mismatch("array", value.type_name())]);
                };
                if kind == FieldKind::Attachment
                    && !items.iter().all(|item| item.as_file().is_some())
                {
                    return Err(vec![Violation::type_mismatch("file", value.type_name())]);
                }
            }
            kind if kind.is_text_based() => {
                if value.as_str().is_none() {
                    return Err(vec![Violation::type_mismatch("string", value.type_name())]);
                }
            }
            // Select and radio accept any value; the option-membership
            // check does the narrowing.
            _ => {}
        }

        for check in &self.checks {
            if let Some(violation) = check.apply(value) {
                violations.push(violation);
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn option_values(options: &[crate::option::FieldOption]) -> Vec<FieldValue> {
    options.iter().map(|opt| opt.value.clone()).collect()
}

/// A `maxSize` of zero, a negative number, or NaN would reject every
/// file; refuse it up front like the other configuration errors.
fn size_limit_check(name: &str, mb: f64) -> Result<(), SchemaError> {
    if mb > 0.0 {
        Ok(())
    } else {
        Err(SchemaError::InvalidLimit {
            name: name.to_owned(),
            attribute: "maxSize",
            value: mb,
        })
    }
}

fn push_pattern_check(checks: &mut Vec<Check>, def: &FieldDef) -> Result<(), SchemaError> {
    let Some(spec) = def.validation() else {
        return Ok(());
    };
    let Some(pattern) = &spec.pattern else {
        return Ok(());
    };
    let regex = Regex::new(pattern).map_err(|err| SchemaError::InvalidPattern {
        name: def.name().to_owned(),
        pattern: pattern.clone(),
        reason: err.to_string(),
    })?;
    checks.push(Check::Pattern {
        regex,
        message: spec.message.clone(),
    });
    Ok(())
}

/// Compile a descriptor into its validation rule. See [`FieldRule::compile`].
pub fn compile_rule(def: &FieldDef) -> Result<FieldRule, SchemaError> {
    FieldRule::compile(def)
}
