use std::fmt;

#[derive(Debug, Clone)]
pub enum SchemaError {
    InvalidSchema(String),
    InvalidField(String),
    InvalidRule(String),
    InvalidData(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SchemaError::InvalidSchema(msg) => write!(f, "Invalid schema: {}", msg),
            SchemaError::InvalidField(msg) => write!(f, "Invalid field: {}", msg),
            SchemaError::InvalidRule(msg) => write!(f, "Invalid rule: {}", msg),
            SchemaError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
        }
    }
}

impl std::error::Error for SchemaError {}
