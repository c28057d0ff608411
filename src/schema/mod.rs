pub mod path;
pub mod registry;
pub mod types;
pub mod validate;
pub mod validator;

pub use registry::{property_form, PROPERTY_FORM};
pub use validate::{validate, ErrorMap};
pub use validator::SchemaValidator;

// Re-export all types at the schema module level
pub use types::{
    FieldCondition, FieldKind, FieldOption, FieldSchema, FormSchema, SchemaError, SectionDisplay,
    SectionSchema, ValidationRules,
};

/// Conventional record field a revealed date input binds to.
pub const DATE_FIELD: &str = "availabilityDate";

/// Option value that reveals the companion date input on a
/// [`FieldKind::RadioWithDate`] field.
pub const DATE_OPTION: &str = "date";
