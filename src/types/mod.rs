mod attachment;
mod checkbox;
mod date;
mod detail;
mod dynamic;
mod file;
mod multi_select;
mod number;
mod radio;
mod select;
mod text;
mod textarea;
mod time_picker;
mod transfer_list;
mod unknown;
mod view_file;

pub use attachment::AttachmentField;
pub use checkbox::CheckboxField;
pub use date::DateField;
pub use detail::DetailField;
pub use dynamic::DynamicField;
pub use file::FileField;
pub use multi_select::MultiSelectField;
pub use number::NumberField;
pub use radio::{RadioDirection, RadioField};
pub use select::SelectField;
pub use text::TextField;
pub use textarea::TextareaField;
pub use time_picker::TimePickerField;
pub use transfer_list::TransferListField;
pub use unknown::UnknownField;
pub use view_file::ViewFileField;
