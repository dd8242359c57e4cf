use serde::{Deserialize, Serialize};

/// The kind of a form field, determining its UI widget and value semantics.
///
/// The serialized names match the wire format used by form configs
/// (`multiSelect`, `transferList`, ...), which is why this enum renames to
/// camelCase rather than snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Textarea,
    Select,
    MultiSelect,
    Radio,
    Checkbox,
    Date,
    File,
    Attachment,
    TransferList,
    Dynamic,
    TimePicker,
    ViewFile,
    Detail,
}

impl FieldKind {
    /// Whether this kind holds a plain string value.
    #[must_use]
    pub fn is_text_based(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Email
                | Self::Password
                | Self::Textarea
                | Self::Date
                | Self::TimePicker
        )
    }

    /// Whether this kind uses a selection from a fixed option list.
    #[must_use]
    pub fn is_selection_based(&self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect | Self::Radio)
    }

    /// Whether this kind carries an array value.
    ///
    /// For these kinds `required` means "at least one item" rather than
    /// plain presence.
    #[must_use]
    pub fn is_array_valued(&self) -> bool {
        matches!(
            self,
            Self::MultiSelect | Self::TransferList | Self::Dynamic | Self::Attachment
        )
    }

    /// Whether this kind accepts uploaded files.
    #[must_use]
    pub fn is_file_based(&self) -> bool {
        matches!(self, Self::File | Self::Attachment)
    }

    /// Whether this kind is display-only and exempt from validation.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::ViewFile | Self::Detail)
    }

    /// String identifier, identical to the serialized discriminant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::MultiSelect => "multiSelect",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::File => "file",
            Self::Attachment => "attachment",
            Self::TransferList => "transferList",
            Self::Dynamic => "dynamic",
            Self::TimePicker => "timePicker",
            Self::ViewFile => "viewFile",
            Self::Detail => "detail",
        }
    }

    /// The value type this kind expects, as a broad JSON category.
    #[must_use]
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Email | Self::Password | Self::Textarea => "string",
            Self::Number => "number",
            Self::Checkbox => "boolean",
            Self::Select | Self::Radio => "any",
            Self::MultiSelect | Self::TransferList | Self::Dynamic | Self::Attachment => "array",
            Self::Date | Self::TimePicker => "string",
            Self::File => "file",
            Self::ViewFile | Self::Detail => "none",
        }
    }

    /// All kinds, in the order forms usually declare them.
    pub const ALL: [FieldKind; 17] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Textarea,
        Self::Select,
        Self::MultiSelect,
        Self::Radio,
        Self::Checkbox,
        Self::Date,
        Self::File,
        Self::Attachment,
        Self::TransferList,
        Self::Dynamic,
        Self::TimePicker,
        Self::ViewFile,
        Self::Detail,
    ];
}
