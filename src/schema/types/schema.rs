use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::field::{FieldKind, FieldSchema};
use super::rules::ValidationRules;
use super::section::SectionSchema;
use crate::error::{FormError, FormResult};

/// The whole form registry: ordered sections, default values, and the
/// validation rule bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
    pub name: String,
    pub sections: Vec<SectionSchema>,
    /// Field name (possibly dotted) to default value. Checkbox groups are
    /// defaulted to empty arrays automatically, see [`FormSchema::default_record`].
    #[serde(default)]
    pub defaults: HashMap<String, Value>,
    #[serde(default)]
    pub rules: ValidationRules,
}

impl FormSchema {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sections: Vec::new(),
            defaults: HashMap::new(),
            rules: ValidationRules::new(),
        }
    }

    pub fn add_section(&mut self, section: SectionSchema) {
        self.sections.push(section);
    }

    pub fn with_section(mut self, section: SectionSchema) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_default(mut self, field: &str, value: Value) -> Self {
        self.defaults.insert(field.to_string(), value);
        self
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Look up a field schema by name across all sections.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }

    /// Iterate `(section, field)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&SectionSchema, &FieldSchema)> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter().map(move |f| (s, f)))
    }

    /// Build a fresh record from the declared defaults.
    ///
    /// Dotted default keys expand into nested objects, and every checkbox
    /// group gets an empty array when no default names it.
    pub fn default_record(&self) -> Value {
        let mut record = Map::new();

        for (name, value) in &self.defaults {
            insert_path(&mut record, name, value.clone());
        }

        for (section, field) in self.fields() {
            if field.kind == FieldKind::Checkbox {
                let group = field.effective_group(&section.id).to_string();
                record.entry(group).or_insert_with(|| Value::Array(Vec::new()));
            }
        }

        Value::Object(record)
    }

    /// Parse a schema from its JSON representation and run the integrity
    /// checks before handing it out.
    pub fn from_value(value: Value) -> FormResult<Self> {
        let schema: FormSchema = serde_json::from_value(value)?;
        schema.check()?;
        Ok(schema)
    }

    /// Parse a schema from a JSON string. See [`FormSchema::from_value`].
    pub fn from_json_str(contents: &str) -> FormResult<Self> {
        let value: Value = serde_json::from_str(contents)?;
        Self::from_value(value)
    }
}

impl std::str::FromStr for FormSchema {
    type Err = FormError;

    fn from_str(s: &str) -> FormResult<Self> {
        Self::from_json_str(s)
    }
}

/// Insert `value` under a possibly dotted `name`, creating the intermediate
/// object for two-level paths.
fn insert_path(record: &mut Map<String, Value>, name: &str, value: Value) {
    match name.split_once('.') {
        None => {
            record.insert(name.to_string(), value);
        }
        Some((parent, child)) => {
            let nested = record
                .entry(parent.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Some(obj) = nested.as_object_mut() {
                obj.insert(child.to_string(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::field::FieldOption;
    use crate::schema::types::section::SectionDisplay;
    use serde_json::json;

    fn sample_schema() -> FormSchema {
        FormSchema::new("listing")
            .with_section(SectionSchema::new("basics", "Basics").with_fields(vec![
                FieldSchema::new("title", FieldKind::Text, "Title").with_required(),
                FieldSchema::new("address.street", FieldKind::Text, "Street"),
            ]))
            .with_section(
                SectionSchema::new("amenities", "Amenities")
                    .with_display(SectionDisplay::CheckboxGroup)
                    .with_fields(vec![
                        FieldSchema::new("wifi", FieldKind::Checkbox, "Wifi"),
                        FieldSchema::new("gym", FieldKind::Checkbox, "Gym"),
                    ]),
            )
            .with_default("title", json!(""))
            .with_default("address.street", json!(""))
    }

    #[test]
    fn test_default_record_expands_dotted_keys() {
        let record = sample_schema().default_record();
        assert_eq!(record["title"], json!(""));
        assert_eq!(record["address"]["street"], json!(""));
    }

    #[test]
    fn test_default_record_seeds_checkbox_groups() {
        let record = sample_schema().default_record();
        assert_eq!(record["amenities"], json!([]));
    }

    #[test]
    fn test_field_lookup_spans_sections() {
        let schema = sample_schema();
        assert!(schema.field("gym").is_some());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn test_schema_json_round_trip() {
        let schema = sample_schema();
        let text = serde_json::to_string(&schema).unwrap();
        let back = FormSchema::from_json_str(&text).unwrap();
        assert_eq!(back.name, "listing");
        assert_eq!(back.sections.len(), 2);
        assert_eq!(back.sections[1].display, SectionDisplay::CheckboxGroup);
    }

    #[test]
    fn test_from_value_rejects_broken_schema() {
        // Select without options fails the integrity check.
        let schema = FormSchema::new("broken").with_section(
            SectionSchema::new("s", "S").with_fields(vec![FieldSchema::new(
                "kind",
                FieldKind::Select,
                "Kind",
            )]),
        );
        let value = serde_json::to_value(&schema).unwrap();
        assert!(FormSchema::from_value(value).is_err());

        // A well-formed select passes.
        let schema = FormSchema::new("ok").with_section(
            SectionSchema::new("s", "S").with_fields(vec![FieldSchema::new(
                "kind",
                FieldKind::Select,
                "Kind",
            )
            .with_options(vec![FieldOption::new("a", "A")])]),
        );
        let value = serde_json::to_value(&schema).unwrap();
        assert!(FormSchema::from_value(value).is_ok());
    }
}
