use serde::{Deserialize, Serialize};

use crate::kind::FieldKind;
use crate::metadata::FieldMetadata;
use crate::types::*;
use crate::validation::ValidationSpec;

/// A concrete field descriptor, tagged by type.
///
/// The `type` field in JSON selects the variant. `text`, `email`, and
/// `password` share the [`TextField`] payload; the tag alone distinguishes
/// them. Descriptors with an unrecognized tag deserialize into
/// [`FieldDef::Unknown`] rather than failing, so a form config written for
/// a newer renderer still loads; only rule compilation rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldDef {
    Text(TextField),
    Email(TextField),
    Password(TextField),
    Number(NumberField),
    Textarea(TextareaField),
    Select(SelectField),
    MultiSelect(MultiSelectField),
    Radio(RadioField),
    Checkbox(CheckboxField),
    Date(DateField),
    File(FileField),
    Attachment(AttachmentField),
    TransferList(TransferListField),
    Dynamic(DynamicField),
    TimePicker(TimePickerField),
    ViewFile(ViewFileField),
    Detail(DetailField),
    #[serde(untagged)]
    Unknown(UnknownField),
}

macro_rules! delegate_metadata {
    ($self:ident) => {
        match $self {
            Self::Text(f) | Self::Email(f) | Self::Password(f) => &f.metadata,
            Self::Number(f) => &f.metadata,
            Self::Textarea(f) => &f.metadata,
            Self::Select(f) => &f.metadata,
            Self::MultiSelect(f) => &f.metadata,
            Self::Radio(f) => &f.metadata,
            Self::Checkbox(f) => &f.metadata,
            Self::Date(f) => &f.metadata,
            Self::File(f) => &f.metadata,
            Self::Attachment(f) => &f.metadata,
            Self::TransferList(f) => &f.metadata,
            Self::Dynamic(f) => &f.metadata,
            Self::TimePicker(f) => &f.metadata,
            Self::ViewFile(f) => &f.metadata,
            Self::Detail(f) => &f.metadata,
            Self::Unknown(f) => &f.metadata,
        }
    };
}

macro_rules! delegate_metadata_mut {
    ($self:ident) => {
        match $self {
            Self::Text(f) | Self::Email(f) | Self::Password(f) => &mut f.metadata,
            Self::Number(f) => &mut f.metadata,
            Self::Textarea(f) => &mut f.metadata,
            Self::Select(f) => &mut f.metadata,
            Self::MultiSelect(f) => &mut f.metadata,
            Self::Radio(f) => &mut f.metadata,
            Self::Checkbox(f) => &mut f.metadata,
            Self::Date(f) => &mut f.metadata,
            Self::File(f) => &mut f.metadata,
            Self::Attachment(f) => &mut f.metadata,
            Self::TransferList(f) => &mut f.metadata,
            Self::Dynamic(f) => &mut f.metadata,
            Self::TimePicker(f) => &mut f.metadata,
            Self::ViewFile(f) => &mut f.metadata,
            Self::Detail(f) => &mut f.metadata,
            Self::Unknown(f) => &mut f.metadata,
        }
    };
}

impl FieldDef {
    /// The unique field name within its form.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata().name
    }

    /// The human-readable display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.metadata().label
    }

    /// The field kind, or `None` for an unrecognized discriminant.
    #[must_use]
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::Text(_) => Some(FieldKind::Text),
            Self::Email(_) => Some(FieldKind::Email),
            Self::Password(_) => Some(FieldKind::Password),
            Self::Number(_) => Some(FieldKind::Number),
            Self::Textarea(_) => Some(FieldKind::Textarea),
            Self::Select(_) => Some(FieldKind::Select),
            Self::MultiSelect(_) => Some(FieldKind::MultiSelect),
            Self::Radio(_) => Some(FieldKind::Radio),
            Self::Checkbox(_) => Some(FieldKind::Checkbox),
            Self::Date(_) => Some(FieldKind::Date),
            Self::File(_) => Some(FieldKind::File),
            Self::Attachment(_) => Some(FieldKind::Attachment),
            Self::TransferList(_) => Some(FieldKind::TransferList),
            Self::Dynamic(_) => Some(FieldKind::Dynamic),
            Self::TimePicker(_) => Some(FieldKind::TimePicker),
            Self::ViewFile(_) => Some(FieldKind::ViewFile),
            Self::Detail(_) => Some(FieldKind::Detail),
            Self::Unknown(_) => None,
        }
    }

    /// The wire discriminant, including unrecognized ones.
    #[must_use]
    pub fn raw_kind(&self) -> &str {
        match self {
            Self::Unknown(f) => &f.kind,
            _ => self.kind().map(|k| k.as_str()).unwrap_or(""),
        }
    }

    /// Access the shared metadata.
    #[must_use]
    pub fn metadata(&self) -> &FieldMetadata {
        delegate_metadata!(self)
    }

    /// Mutable access to the shared metadata.
    pub fn metadata_mut(&mut self) -> &mut FieldMetadata {
        delegate_metadata_mut!(self)
    }

    /// Whether the user must provide a value.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.metadata().required
    }

    /// Whether the control is rendered but not editable.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.metadata().disabled
    }

    /// The generic fallback constraints, if any.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationSpec> {
        self.metadata().validation.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_and_label_delegation() {
        let def = FieldDef::Text(TextField::new("host", "Hostname"));
        assert_eq!(def.name(), "host");
        assert_eq!(def.label(), "Hostname");
    }

    #[test]
    fn kind_matches_variant() {
        let cases: Vec<(FieldDef, FieldKind)> = vec![
            (FieldDef::Text(TextField::new("a", "A")), FieldKind::Text),
            (FieldDef::Email(TextField::new("a", "A")), FieldKind::Email),
            (
                FieldDef::Password(TextField::new("a", "A")),
                FieldKind::Password,
            ),
            (
                FieldDef::Number(NumberField::new("a", "A")),
                FieldKind::Number,
            ),
            (
                FieldDef::Textarea(TextareaField::new("a", "A")),
                FieldKind::Textarea,
            ),
            (
                FieldDef::Select(SelectField::new("a", "A")),
                FieldKind::Select,
            ),
            (
                FieldDef::MultiSelect(MultiSelectField::new("a", "A")),
                FieldKind::MultiSelect,
            ),
            (FieldDef::Radio(RadioField::new("a", "A")), FieldKind::Radio),
            (
                FieldDef::Checkbox(CheckboxField::new("a", "A")),
                FieldKind::Checkbox,
            ),
            (FieldDef::Date(DateField::new("a", "A")), FieldKind::Date),
            (FieldDef::File(FileField::new("a", "A")), FieldKind::File),
            (
                FieldDef::Attachment(AttachmentField::new("a", "A")),
                FieldKind::Attachment,
            ),
            (
                FieldDef::TransferList(TransferListField::new("a", "A")),
                FieldKind::TransferList,
            ),
            (
                FieldDef::Dynamic(DynamicField::new("a", "A")),
                FieldKind::Dynamic,
            ),
            (
                FieldDef::TimePicker(TimePickerField::new("a", "A")),
                FieldKind::TimePicker,
            ),
            (
                FieldDef::ViewFile(ViewFileField::new("a", "A")),
                FieldKind::ViewFile,
            ),
            (
                FieldDef::Detail(DetailField::new("a", "A")),
                FieldKind::Detail,
            ),
        ];

        for (def, expected) in &cases {
            assert_eq!(def.kind(), Some(*expected));
            assert_eq!(def.raw_kind(), expected.as_str());
        }
    }

    #[test]
    fn unknown_has_no_kind() {
        let def = FieldDef::Unknown(UnknownField::new("signature", "sig", "Signature"));
        assert_eq!(def.kind(), None);
        assert_eq!(def.raw_kind(), "signature");
        assert_eq!(def.name(), "sig");
    }

    #[test]
    fn is_required_delegation() {
        let mut field = TextField::new("name", "Name");
        field.metadata.required = true;
        assert!(FieldDef::Text(field).is_required());
        assert!(!FieldDef::Text(TextField::new("opt", "Optional")).is_required());
    }

    #[test]
    fn metadata_mut_modifies_in_place() {
        let mut def = FieldDef::Checkbox(CheckboxField::new("tos", "Terms"));
        def.metadata_mut().required = true;
        assert!(def.is_required());
    }

    #[test]
    fn serde_round_trip_text() {
        let def = FieldDef::Email(TextField::new("email", "Email"));
        let json_str = serde_json::to_string(&def).unwrap();
        assert!(json_str.contains("\"type\":\"email\""));

        let back: FieldDef = serde_json::from_str(&json_str).unwrap();
        assert_eq!(def, back);
    }

    #[test]
    fn serde_camel_case_tags() {
        let def = FieldDef::MultiSelect(MultiSelectField::new("tags", "Tags"));
        let json_str = serde_json::to_string(&def).unwrap();
        assert!(json_str.contains("\"type\":\"multiSelect\""));

        let def = FieldDef::TransferList(TransferListField::new("perms", "Permissions"));
        let json_str = serde_json::to_string(&def).unwrap();
        assert!(json_str.contains("\"type\":\"transferList\""));
    }

    #[test]
    fn serde_deserialize_from_json_object() {
        let json = json!({
            "type": "select",
            "name": "region",
            "label": "Region",
            "options": [
                {"label": "US", "value": "us-east-1"},
                {"label": "EU", "value": "eu-west-1"}
            ]
        });

        let def: FieldDef = serde_json::from_value(json).unwrap();
        assert_eq!(def.name(), "region");
        assert_eq!(def.kind(), Some(FieldKind::Select));
        match def {
            FieldDef::Select(f) => assert_eq!(f.options.len(), 2),
            other => panic!("expected Select, got {other:?}"),
        }
    }

    #[test]
    fn serde_unknown_discriminant_falls_back() {
        let json = json!({
            "type": "signaturePad",
            "name": "sig",
            "label": "Signature",
            "required": true
        });

        let def: FieldDef = serde_json::from_value(json).unwrap();
        match &def {
            FieldDef::Unknown(f) => {
                assert_eq!(f.kind, "signaturePad");
                assert!(f.metadata.required);
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn validation_spec_accessible_from_any_variant() {
        let mut field = NumberField::new("age", "Age");
        field.metadata.validation = Some(ValidationSpec::range(0.0, 120.0));
        let def = FieldDef::Number(field);

        let spec = def.validation().unwrap();
        assert_eq!(spec.min, Some(0.0));
        assert_eq!(spec.max, Some(120.0));
    }
}
