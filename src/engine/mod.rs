//! The form engine: composes the reducer, validator, and renderer into the
//! end-to-end "edit a structured record through a schema-driven form"
//! capability.
//!
//! The engine holds no record state. The caller owns the record and the
//! error map for the lifetime of one form session; every method here is a
//! pure function over them.

pub mod reducer;
pub mod render;

use log::debug;
use serde_json::Value;

use crate::schema::types::FormSchema;
use crate::schema::validate::{self, ErrorMap};

pub use reducer::{apply, ChangeEvent};
pub use render::{describe, describe_section, Control, DateReveal, SectionView, Widget};

pub struct FormEngine<'a> {
    schema: &'a FormSchema,
}

impl<'a> FormEngine<'a> {
    pub fn new(schema: &'a FormSchema) -> Self {
        Self { schema }
    }

    /// Open a form session: the schema defaults fill any gaps in the
    /// existing snapshot (edit mode keeps the snapshot's values), and
    /// checkbox-group arrays exist even when the snapshot lacks them.
    pub fn open(&self, existing: Option<&Value>) -> Value {
        let defaults = self.schema.default_record();
        let record = match existing {
            Some(snapshot) => merge_defaults(&defaults, snapshot),
            None => defaults,
        };
        debug!(
            "Opened '{}' form ({} fields)",
            self.schema.name,
            self.schema.fields().count()
        );
        record
    }

    /// Route one field-change event through the reducer.
    pub fn apply(&self, record: &Value, event: &ChangeEvent) -> Value {
        debug!("Applying {:?} to '{}' record", event, self.schema.name);
        reducer::apply(record, event)
    }

    /// Run the full validation pipeline. An empty map means the record is
    /// ready to submit; the caller is expected to block submission while
    /// any message is present.
    pub fn validate(&self, record: &Value) -> ErrorMap {
        let errors = validate::validate(record, &self.schema.rules);
        debug!(
            "Validated '{}' record: {} error(s)",
            self.schema.name,
            errors.len()
        );
        errors
    }

    /// Project every section into its control list for layout.
    pub fn describe(&self, record: &Value, errors: &ErrorMap) -> Vec<SectionView> {
        self.schema
            .sections
            .iter()
            .map(|s| render::describe_section(s, record, errors))
            .collect()
    }
}

/// Optimistic single-field clear, for callers that drop a stale message as
/// soon as the field is edited, ahead of the next full validation.
pub fn clear_error(errors: &mut ErrorMap, field: &str) {
    errors.remove(field);
}

/// Defaults fill the gaps in an existing snapshot. Existing values win;
/// one level of nested objects is merged key-by-key; a JSON null counts as
/// absent.
fn merge_defaults(defaults: &Value, existing: &Value) -> Value {
    let mut merged = existing.as_object().cloned().unwrap_or_default();

    if let Some(default_map) = defaults.as_object() {
        for (key, default_value) in default_map {
            let absent = matches!(merged.get(key), None | Some(Value::Null));
            if absent {
                merged.insert(key.clone(), default_value.clone());
                continue;
            }
            if let (Some(Value::Object(existing_nested)), Some(default_nested)) =
                (merged.get_mut(key), default_value.as_object())
            {
                for (nested_key, nested_default) in default_nested {
                    existing_nested
                        .entry(nested_key.clone())
                        .or_insert_with(|| nested_default.clone());
                }
            }
        }
    }

    Value::Object(merged)
}
