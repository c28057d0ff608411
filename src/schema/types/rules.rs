use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::schema::path;

/// Declarative predicate over the whole record.
///
/// Conditions are data, not closures, so rule bundles survive a serde
/// round trip and the integrity checker can see which field they read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum FieldCondition {
    Equals { field: String, value: Value },
    NotEquals { field: String, value: Value },
}

impl FieldCondition {
    /// Evaluate the condition against a record. Missing fields compare as
    /// not-equal.
    pub fn holds(&self, record: &Value) -> bool {
        match self {
            FieldCondition::Equals { field, value } => {
                path::get(record, field).map_or(false, |v| v == value)
            }
            FieldCondition::NotEquals { field, value } => {
                path::get(record, field).map_or(true, |v| v != value)
            }
        }
    }

    /// Name of the record field the condition reads.
    pub fn source_field(&self) -> &str {
        match self {
            FieldCondition::Equals { field, .. } | FieldCondition::NotEquals { field, .. } => field,
        }
    }
}

/// The validation rule bundle of a form schema.
///
/// Rules are applied in a fixed category order (conditional-required,
/// required, numeric, min_length, max_length, min, max); a later category
/// overwrites an earlier message for the same field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub numeric: Vec<String>,
    #[serde(default)]
    pub min_length: HashMap<String, usize>,
    #[serde(default)]
    pub max_length: HashMap<String, usize>,
    #[serde(default)]
    pub min: HashMap<String, f64>,
    #[serde(default)]
    pub max: HashMap<String, f64>,
    #[serde(default)]
    pub conditional_required: HashMap<String, FieldCondition>,
}

impl ValidationRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_required(mut self, field: &str) -> Self {
        self.required.push(field.to_string());
        self
    }

    pub fn with_numeric(mut self, field: &str) -> Self {
        self.numeric.push(field.to_string());
        self
    }

    pub fn with_min_length(mut self, field: &str, len: usize) -> Self {
        self.min_length.insert(field.to_string(), len);
        self
    }

    pub fn with_max_length(mut self, field: &str, len: usize) -> Self {
        self.max_length.insert(field.to_string(), len);
        self
    }

    pub fn with_min(mut self, field: &str, bound: f64) -> Self {
        self.min.insert(field.to_string(), bound);
        self
    }

    pub fn with_max(mut self, field: &str, bound: f64) -> Self {
        self.max.insert(field.to_string(), bound);
        self
    }

    pub fn with_conditional_required(mut self, field: &str, condition: FieldCondition) -> Self {
        self.conditional_required
            .insert(field.to_string(), condition);
        self
    }

    /// Every field name any rule targets, for integrity checking.
    pub fn target_fields(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .chain(self.numeric.iter())
            .map(String::as_str)
            .chain(self.min_length.keys().map(String::as_str))
            .chain(self.max_length.keys().map(String::as_str))
            .chain(self.min.keys().map(String::as_str))
            .chain(self.max.keys().map(String::as_str))
            .chain(self.conditional_required.keys().map(String::as_str))
    }
}
