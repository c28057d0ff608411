use crate::schema::types::SchemaError;
use std::fmt;

/// Unified error type for the crate.
///
/// Schema construction and loading are the only fallible surfaces; record
/// transitions and validation never fail (malformed input is absorbed, see
/// the reducer and validator docs).
#[derive(Debug)]
pub enum FormError {
    /// Errors related to schema structure
    Schema(SchemaError),

    /// Errors related to serialization/deserialization
    Serialization(String),

    /// Other errors that don't fit into the above categories
    Other(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(err) => write!(f, "Schema error: {}", err),
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Self::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for FormError {}

/// Conversion from SchemaError to FormError
impl From<SchemaError> for FormError {
    fn from(error: SchemaError) -> Self {
        FormError::Schema(error)
    }
}

/// Conversion from serde_json::Error to FormError
impl From<serde_json::Error> for FormError {
    fn from(error: serde_json::Error) -> Self {
        FormError::Serialization(error.to_string())
    }
}

/// Result type alias for operations that can result in a FormError
pub type FormResult<T> = Result<T, FormError>;
