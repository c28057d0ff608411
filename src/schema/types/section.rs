use serde::{Deserialize, Serialize};

use super::field::FieldSchema;

/// How a section lays out its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionDisplay {
    /// Ordinary field grid.
    Grid,
    /// Every field is a checkbox toggling membership in the section's group.
    CheckboxGroup,
}

impl Default for SectionDisplay {
    fn default() -> Self {
        SectionDisplay::Grid
    }
}

/// An ordered, titled group of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSchema {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub display: SectionDisplay,
    pub fields: Vec<FieldSchema>,
}

impl SectionSchema {
    #[must_use]
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            display: SectionDisplay::Grid,
            fields: Vec::new(),
        }
    }

    pub fn with_display(mut self, display: SectionDisplay) -> Self {
        self.display = display;
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldSchema>) -> Self {
        self.fields = fields;
        self
    }

    pub fn add_field(&mut self, field: FieldSchema) {
        self.fields.push(field);
    }
}
