//! Schema integrity checks.
//!
//! Run before a schema is handed to the engine: structural rules only, no
//! record data involved. Covers section/field naming, option presence for
//! choice fields, checkbox-group consistency, and rule targets that
//! reference declared fields.

use std::collections::HashSet;

use super::types::{FieldKind, FieldSchema, FormSchema, SchemaError, SectionDisplay};

/// Validates a [`FormSchema`] before it is used to drive a form.
pub struct SchemaValidator<'a> {
    schema: &'a FormSchema,
}

impl<'a> SchemaValidator<'a> {
    /// Create a new validator operating on the provided schema.
    pub fn new(schema: &'a FormSchema) -> Self {
        Self { schema }
    }

    /// Validate the schema.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.schema.name.is_empty() {
            return Err(SchemaError::InvalidSchema(
                "Schema name cannot be empty".to_string(),
            ));
        }

        if self.schema.sections.is_empty() {
            return Err(SchemaError::InvalidSchema(
                "Schema must have at least one section".to_string(),
            ));
        }

        let mut section_ids = HashSet::new();
        let mut field_names = HashSet::new();

        for section in &self.schema.sections {
            if section.id.is_empty() {
                return Err(SchemaError::InvalidSchema(
                    "Section id cannot be empty".to_string(),
                ));
            }
            if !section_ids.insert(section.id.as_str()) {
                return Err(SchemaError::InvalidSchema(format!(
                    "Duplicate section id '{}'",
                    section.id
                )));
            }

            for field in &section.fields {
                self.validate_field(&section.id, section.display, field)?;

                if !field_names.insert(field.name.as_str()) {
                    return Err(SchemaError::InvalidField(format!(
                        "Duplicate field name '{}'",
                        field.name
                    )));
                }
            }
        }

        self.validate_rule_targets(&field_names)?;

        Ok(())
    }

    fn validate_field(
        &self,
        section_id: &str,
        display: SectionDisplay,
        field: &FieldSchema,
    ) -> Result<(), SchemaError> {
        if field.name.is_empty() {
            return Err(SchemaError::InvalidField(format!(
                "Section '{}' has a field with an empty name",
                section_id
            )));
        }

        match field.kind {
            FieldKind::Select | FieldKind::BooleanSelect | FieldKind::RadioWithDate => {
                if field.options.is_empty() {
                    return Err(SchemaError::InvalidField(format!(
                        "Field '{}' must declare at least one option",
                        field.name
                    )));
                }
                for option in &field.options {
                    if option.value.is_empty() {
                        return Err(SchemaError::InvalidField(format!(
                            "Field '{}' has an option with an empty value",
                            field.name
                        )));
                    }
                }
            }
            FieldKind::Checkbox => {
                if field.effective_group(section_id).is_empty() {
                    return Err(SchemaError::InvalidField(format!(
                        "Checkbox field '{}' has an empty group id",
                        field.name
                    )));
                }
            }
            _ => {}
        }

        if matches!(display, SectionDisplay::CheckboxGroup) && field.kind != FieldKind::Checkbox {
            return Err(SchemaError::InvalidField(format!(
                "Section '{}' is a checkbox group but field '{}' is not a checkbox",
                section_id, field.name
            )));
        }

        if field.col_span != 1 && field.col_span != 2 {
            return Err(SchemaError::InvalidField(format!(
                "Field '{}' col_span must be 1 or 2",
                field.name
            )));
        }

        Ok(())
    }

    /// Every rule target must be a declared field or a companion date
    /// binding of a RadioWithDate field.
    fn validate_rule_targets(&self, field_names: &HashSet<&str>) -> Result<(), SchemaError> {
        let mut known: HashSet<&str> = field_names.clone();
        for (_, field) in self.schema.fields() {
            if field.kind == FieldKind::RadioWithDate {
                known.insert(field.date_field.as_deref().unwrap_or(super::DATE_FIELD));
            }
        }

        for target in self.schema.rules.target_fields() {
            if !known.contains(target) {
                return Err(SchemaError::InvalidRule(format!(
                    "Rule targets unknown field '{}'",
                    target
                )));
            }
        }

        Ok(())
    }
}

impl FormSchema {
    /// Get a validator instance for this schema.
    pub fn validator(&self) -> SchemaValidator {
        SchemaValidator::new(self)
    }

    /// Validate the schema using the built-in validator.
    pub fn check(&self) -> Result<(), SchemaError> {
        self.validator().validate()
    }
}
