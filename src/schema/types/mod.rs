pub mod errors;
pub mod field;
pub mod rules;
pub mod schema;
pub mod section;

pub use errors::SchemaError;
pub use field::{FieldKind, FieldOption, FieldSchema};
pub use rules::{FieldCondition, ValidationRules};
pub use schema::FormSchema;
pub use section::{SectionDisplay, SectionSchema};
