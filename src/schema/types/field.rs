use serde::{Deserialize, Serialize};

/// Declared input kind of a form field.
///
/// The reducer dispatches on this tag (a `BooleanSelect` coerces raw
/// "true"/"false" strings, a `Checkbox` toggles group membership), and the
/// renderer maps it to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    TextArea,
    Select,
    BooleanSelect,
    Checkbox,
    RadioWithDate,
}

/// One selectable entry of a select or radio field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Declarative description of one form field.
///
/// `name` may be a dotted path (e.g. `address.street`) targeting a nested
/// key of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub kind: FieldKind,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u8>,
    #[serde(default = "default_col_span")]
    pub col_span: u8,
    /// Checkbox only: the array-valued record field this checkbox toggles
    /// membership in. Falls back to the enclosing section id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// RadioWithDate only: the record field the revealed date input binds to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_field: Option<String>,
}

fn default_col_span() -> u8 {
    1
}

impl FieldSchema {
    #[must_use]
    pub fn new(name: &str, kind: FieldKind, label: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            label: label.to_string(),
            required: false,
            placeholder: None,
            options: Vec::new(),
            rows: None,
            col_span: default_col_span(),
            group_id: None,
            date_field: None,
        }
    }

    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_rows(mut self, rows: u8) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_col_span(mut self, col_span: u8) -> Self {
        self.col_span = col_span;
        self
    }

    pub fn with_group_id(mut self, group_id: &str) -> Self {
        self.group_id = Some(group_id.to_string());
        self
    }

    pub fn with_date_field(mut self, date_field: &str) -> Self {
        self.date_field = Some(date_field.to_string());
        self
    }

    /// Group this checkbox belongs to, defaulting to the section id.
    pub fn effective_group<'a>(&'a self, section_id: &'a str) -> &'a str {
        self.group_id.as_deref().unwrap_or(section_id)
    }
}
