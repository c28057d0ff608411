//! Pure record transitions for field-change events.
//!
//! Every transition returns a new top-level record and leaves the input
//! untouched. Unknown field names are accepted silently (the key is simply
//! added); the schema is consulted at validation time, not here, so no
//! keystroke is ever fatal.

use serde_json::Value;

use crate::schema::path;
use crate::schema::types::FieldKind;
use serde::{Deserialize, Serialize};

/// One discrete user edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// A scalar input changed. `kind` is the field's declared kind; the
    /// reducer dispatches on it for value coercion.
    Input {
        field: String,
        kind: FieldKind,
        value: String,
    },
    /// A checkbox toggled membership of `field` in the `group` array.
    Toggle {
        field: String,
        group: String,
        checked: bool,
    },
}

impl ChangeEvent {
    pub fn input(field: &str, kind: FieldKind, value: &str) -> Self {
        ChangeEvent::Input {
            field: field.to_string(),
            kind,
            value: value.to_string(),
        }
    }

    pub fn toggle(field: &str, group: &str, checked: bool) -> Self {
        ChangeEvent::Toggle {
            field: field.to_string(),
            group: group.to_string(),
            checked,
        }
    }
}

/// Apply one change event to a record, producing the next record.
pub fn apply(record: &Value, event: &ChangeEvent) -> Value {
    match event {
        ChangeEvent::Toggle {
            field,
            group,
            checked,
        } => toggle_membership(record, group, field, *checked),
        ChangeEvent::Input { field, kind, value } => {
            let stored = match kind {
                // Boolean-valued selects are authored with "true"/"false"
                // option values; coerce on the declared kind.
                FieldKind::BooleanSelect => coerce_bool(value),
                _ => Value::String(value.clone()),
            };
            path::set(record, field, stored)
        }
    }
}

fn coerce_bool(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    }
}

/// Set-membership toggle over an insertion-ordered, duplicate-free array.
///
/// Checking appends the name if absent; unchecking removes it. A missing or
/// non-array group value starts from empty.
fn toggle_membership(record: &Value, group: &str, field: &str, checked: bool) -> Value {
    let mut members: Vec<Value> = path::get(record, group)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let present = members.iter().any(|m| m.as_str() == Some(field));
    if checked && !present {
        members.push(Value::String(field.to_string()));
    } else if !checked && present {
        members.retain(|m| m.as_str() != Some(field));
    }

    path::set(record, group, Value::Array(members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_input_stores_raw_string() {
        let record = json!({"title": "Old"});
        let next = apply(&record, &ChangeEvent::input("title", FieldKind::Text, "New"));
        assert_eq!(next, json!({"title": "New"}));
        assert_eq!(record, json!({"title": "Old"}));
    }

    #[test]
    fn test_boolean_select_coerces_declared_kind_only() {
        let record = json!({});

        let next = apply(
            &record,
            &ChangeEvent::input("furnished", FieldKind::BooleanSelect, "true"),
        );
        assert_eq!(next["furnished"], json!(true));

        // A plain text field keeps the literal string.
        let next = apply(&record, &ChangeEvent::input("note", FieldKind::Text, "true"));
        assert_eq!(next["note"], json!("true"));

        // Non-boolean select values pass through unchanged.
        let next = apply(
            &record,
            &ChangeEvent::input("furnished", FieldKind::BooleanSelect, "maybe"),
        );
        assert_eq!(next["furnished"], json!("maybe"));
    }

    #[test]
    fn test_dotted_path_preserves_siblings() {
        let record = json!({"address": {"street": "A", "city": "B"}});
        let next = apply(
            &record,
            &ChangeEvent::input("address.street", FieldKind::Text, "C"),
        );
        assert_eq!(next, json!({"address": {"street": "C", "city": "B"}}));
    }

    #[test]
    fn test_checkbox_toggle_is_inverse() {
        let record = json!({"amenities": ["pool"]});

        let checked = apply(&record, &ChangeEvent::toggle("wifi", "amenities", true));
        assert_eq!(checked["amenities"], json!(["pool", "wifi"]));

        let unchecked = apply(&checked, &ChangeEvent::toggle("wifi", "amenities", false));
        assert_eq!(unchecked["amenities"], record["amenities"]);
    }

    #[test]
    fn test_checkbox_never_duplicates() {
        let record = json!({"amenities": ["wifi"]});
        let next = apply(&record, &ChangeEvent::toggle("wifi", "amenities", true));
        assert_eq!(next["amenities"], json!(["wifi"]));
    }

    #[test]
    fn test_uncheck_absent_member_is_noop() {
        let record = json!({"amenities": ["pool"]});
        let next = apply(&record, &ChangeEvent::toggle("wifi", "amenities", false));
        assert_eq!(next["amenities"], json!(["pool"]));
    }

    #[test]
    fn test_checkbox_starts_group_from_empty() {
        let record = json!({});
        let next = apply(&record, &ChangeEvent::toggle("wifi", "amenities", true));
        assert_eq!(next["amenities"], json!(["wifi"]));
    }

    #[test]
    fn test_unknown_field_is_added_silently() {
        let record = json!({"title": "X"});
        let next = apply(
            &record,
            &ChangeEvent::input("surprise", FieldKind::Text, "hello"),
        );
        assert_eq!(next["surprise"], json!("hello"));
        assert_eq!(next["title"], json!("X"));
    }

    #[test]
    fn test_unrelated_keys_survive_every_transition() {
        let record = json!({"title": "X", "price": "100", "address": {"city": "B"}});
        let next = apply(&record, &ChangeEvent::toggle("gym", "amenities", true));
        assert_eq!(next["title"], json!("X"));
        assert_eq!(next["price"], json!("100"));
        assert_eq!(next["address"], json!({"city": "B"}));
    }
}
