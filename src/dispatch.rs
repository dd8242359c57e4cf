use crate::def::FieldDef;
use crate::metadata::FieldMetadata;
use crate::value::FieldValue;

/// The renderer a descriptor maps to. One target per supported kind,
/// plus a sentinel for unrecognized types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    TextInput,
    NumberInput,
    TextArea,
    SelectMenu,
    MultiSelectMenu,
    RadioGroup,
    CheckboxInput,
    DatePicker,
    FilePicker,
    AttachmentPicker,
    TransferList,
    DynamicList,
    TimePicker,
    FileViewer,
    DetailView,
    /// No renderer exists for the descriptor's type. Render nothing for
    /// this field; the rest of the form is unaffected.
    Unsupported,
}

/// The live per-field state a host supplies at render time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    /// The field's current value.
    pub value: FieldValue,
    /// The current validation message, if any.
    pub error: Option<String>,
    /// Whether the user has interacted with the field yet.
    pub touched: bool,
}

impl RenderState {
    #[must_use]
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            error: None,
            touched: false,
        }
    }

    /// Attach a validation message (builder-style).
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Mark the field as interacted-with (builder-style).
    #[must_use]
    pub fn touched(mut self) -> Self {
        self.touched = true;
        self
    }
}

/// Everything a renderer needs for one field, resolved from a descriptor
/// and its live state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField<'a> {
    /// Which renderer draws this field.
    pub target: RenderTarget,
    /// The field name, for wiring change events back.
    pub name: &'a str,
    /// The shared display metadata (label, placeholder, disabled, ...).
    pub metadata: &'a FieldMetadata,
    /// The current value to display.
    pub value: &'a FieldValue,
    /// The error to show inline. Untouched fields never show errors,
    /// so a freshly opened form starts clean.
    pub error: Option<&'a str>,
}

/// Map a descriptor and its render state to a renderer target.
///
/// Total over all inputs: an unrecognized descriptor type resolves to
/// [`RenderTarget::Unsupported`] instead of failing, with a warning so
/// the omission is visible in logs.
#[must_use]
pub fn resolve<'a>(def: &'a FieldDef, state: &'a RenderState) -> ResolvedField<'a> {
    let target = match def {
        FieldDef::Text(_) | FieldDef::Email(_) | FieldDef::Password(_) => RenderTarget::TextInput,
        FieldDef::Number(_) => RenderTarget::NumberInput,
        FieldDef::Textarea(_) => RenderTarget::TextArea,
        FieldDef::Select(_) => RenderTarget::SelectMenu,
        FieldDef::MultiSelect(_) => RenderTarget::MultiSelectMenu,
        FieldDef::Radio(_) => RenderTarget::RadioGroup,
        FieldDef::Checkbox(_) => RenderTarget::CheckboxInput,
        FieldDef::Date(_) => RenderTarget::DatePicker,
        FieldDef::File(_) => RenderTarget::FilePicker,
        FieldDef::Attachment(_) => RenderTarget::AttachmentPicker,
        FieldDef::TransferList(_) => RenderTarget::TransferList,
        FieldDef::Dynamic(_) => RenderTarget::DynamicList,
        FieldDef::TimePicker(_) => RenderTarget::TimePicker,
        FieldDef::ViewFile(_) => RenderTarget::FileViewer,
        FieldDef::Detail(_) => RenderTarget::DetailView,
        FieldDef::Unknown(f) => {
            tracing::warn!(
                field = %f.metadata.name,
                kind = %f.kind,
                "no renderer for field type, skipping"
            );
            RenderTarget::Unsupported
        }
    };

    ResolvedField {
        target,
        name: def.name(),
        metadata: def.metadata(),
        value: &state.value,
        error: if state.touched {
            state.error.as_deref()
        } else {
            None
        },
    }
}
