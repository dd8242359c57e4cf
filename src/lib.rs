//! Declarative form field definitions and the validation schemas derived
//! from them.
//!
//! A form is described as an ordered list of [`def::FieldDef`] values.
//! [`schema::assemble_schema`] compiles that list into a [`schema::FormSchema`]
//! (one immutable [`rule::FieldRule`] per field), and [`dispatch::resolve`]
//! maps each descriptor to the renderer capability that should display it.
//! Rendering and form state are external collaborators; this crate holds no
//! mutable state and performs no I/O.

pub mod def;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod kind;
pub mod list;
pub mod metadata;
pub mod option;
pub mod patterns;
pub mod rule;
pub mod schema;
pub mod types;
pub mod validation;
pub mod value;

pub mod prelude {
    pub use crate::def::FieldDef;
    pub use crate::dispatch::{RenderState, RenderTarget, ResolvedField, resolve};
    pub use crate::error::{SchemaError, Violation};
    pub use crate::events::{FieldEvent, FieldEventSink};
    pub use crate::kind::FieldKind;
    pub use crate::list::FieldList;
    pub use crate::metadata::FieldMetadata;
    pub use crate::option::FieldOption;
    pub use crate::rule::{FieldRule, compile_rule};
    pub use crate::schema::{FormReport, FormSchema, assemble_schema};
    pub use crate::validation::ValidationSpec;
    pub use crate::value::{FieldValue, FileInfo, FormValues};

    pub use crate::types::*;
}
