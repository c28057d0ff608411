//! formfold: a schema-driven form engine.
//!
//! A declarative [`FormSchema`] describes the sections and fields of a
//! structured record; the engine turns field-change events into new
//! records, validates records through an ordered rule pipeline, and
//! projects `(schema, record, errors)` into control descriptions for the
//! caller to lay out. Records are `serde_json::Value` maps owned by the
//! caller; no component here retains cross-call state or performs I/O.

pub mod engine;
pub mod error;
pub mod schema;

pub use engine::{clear_error, ChangeEvent, Control, DateReveal, FormEngine, SectionView, Widget};
pub use error::{FormError, FormResult};
pub use schema::{
    property_form, validate, ErrorMap, FieldCondition, FieldKind, FieldOption, FieldSchema,
    FormSchema, SchemaError, SectionDisplay, SectionSchema, ValidationRules, PROPERTY_FORM,
};
