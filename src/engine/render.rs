//! Field rendering: a pure projection of (schema, record, errors) to
//! control descriptions. No state of its own; the caller lays out the
//! resulting controls.

use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::schema::path;
use crate::schema::types::{FieldKind, FieldOption, FieldSchema, SectionDisplay, SectionSchema};
use crate::schema::validate::ErrorMap;
use crate::schema::{DATE_FIELD, DATE_OPTION};

/// What to show for one field: common presentation data plus the
/// kind-specific widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub col_span: u8,
    pub value: Value,
    pub error: Option<String>,
    pub widget: Widget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Text { placeholder: Option<String> },
    Number { placeholder: Option<String> },
    TextArea { rows: u8, placeholder: Option<String> },
    Select { options: Vec<FieldOption> },
    Checkbox { checked: bool },
    RadioGroup {
        options: Vec<FieldOption>,
        reveal: Option<DateReveal>,
    },
}

/// Directive to reveal a date input next to a radio group, emitted only
/// when the radio's current value selects the custom-date option.
#[derive(Debug, Clone, PartialEq)]
pub struct DateReveal {
    /// Record field the date input binds to.
    pub field: String,
    /// Current value of that field.
    pub value: Value,
    /// Earliest selectable date.
    pub min: NaiveDate,
}

/// One rendered section: heading, layout hint, and its controls in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub display: SectionDisplay,
    pub controls: Vec<Control>,
}

/// Describe one field against the current record and error map.
///
/// Returns `None` for kinds with no visual counterpart (the agreed no-op
/// policy for unknown kinds).
pub fn describe(
    field: &FieldSchema,
    section_id: &str,
    record: &Value,
    errors: &ErrorMap,
) -> Option<Control> {
    let value = path::get(record, &field.name).cloned().unwrap_or(Value::Null);
    let error = errors.get(&field.name).cloned();

    let widget = match field.kind {
        FieldKind::Text => Widget::Text {
            placeholder: field.placeholder.clone(),
        },
        FieldKind::Number => Widget::Number {
            placeholder: field.placeholder.clone(),
        },
        FieldKind::TextArea => Widget::TextArea {
            rows: field.rows.unwrap_or(3),
            placeholder: field.placeholder.clone(),
        },
        FieldKind::Select | FieldKind::BooleanSelect => Widget::Select {
            options: field.options.clone(),
        },
        FieldKind::Checkbox => Widget::Checkbox {
            checked: group_contains(record, field.effective_group(section_id), &field.name),
        },
        FieldKind::RadioWithDate => {
            let date_field = field.date_field.as_deref().unwrap_or(DATE_FIELD);
            let reveal = if value.as_str() == Some(DATE_OPTION) {
                Some(DateReveal {
                    field: date_field.to_string(),
                    value: path::get(record, date_field).cloned().unwrap_or(Value::Null),
                    min: Local::now().date_naive(),
                })
            } else {
                None
            };
            Widget::RadioGroup {
                options: field.options.clone(),
                reveal,
            }
        }
    };

    Some(Control {
        name: field.name.clone(),
        label: field.label.clone(),
        required: field.required,
        col_span: field.col_span,
        value,
        error,
        widget,
    })
}

/// Describe every field of a section in declaration order.
pub fn describe_section(section: &SectionSchema, record: &Value, errors: &ErrorMap) -> SectionView {
    SectionView {
        id: section.id.clone(),
        title: section.title.clone(),
        display: section.display,
        controls: section
            .fields
            .iter()
            .filter_map(|f| describe(f, &section.id, record, errors))
            .collect(),
    }
}

fn group_contains(record: &Value, group: &str, field: &str) -> bool {
    path::get(record, group)
        .and_then(Value::as_array)
        .map_or(false, |members| {
            members.iter().any(|m| m.as_str() == Some(field))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn radio_field() -> FieldSchema {
        FieldSchema::new("availability", FieldKind::RadioWithDate, "Available").with_options(vec![
            FieldOption::new("immediate", "Immediately"),
            FieldOption::new("date", "From a custom date"),
        ])
    }

    #[test]
    fn test_value_and_error_pass_through() {
        let field = FieldSchema::new("title", FieldKind::Text, "Title").with_required();
        let record = json!({"title": "Loft"});
        let mut errors = ErrorMap::new();
        errors.insert("title".to_string(), "Title is required".to_string());

        let control = describe(&field, "basics", &record, &errors).unwrap();
        assert_eq!(control.value, json!("Loft"));
        assert_eq!(control.error.as_deref(), Some("Title is required"));
        assert!(control.required);
    }

    #[test]
    fn test_checkbox_reads_group_membership() {
        let field = FieldSchema::new("wifi", FieldKind::Checkbox, "Wifi");
        let record = json!({"amenities": ["wifi", "gym"]});

        let control = describe(&field, "amenities", &record, &ErrorMap::new()).unwrap();
        assert_eq!(control.widget, Widget::Checkbox { checked: true });

        let record = json!({"amenities": ["gym"]});
        let control = describe(&field, "amenities", &record, &ErrorMap::new()).unwrap();
        assert_eq!(control.widget, Widget::Checkbox { checked: false });
    }

    #[test]
    fn test_checkbox_honors_group_override() {
        let field = FieldSchema::new("wifi", FieldKind::Checkbox, "Wifi").with_group_id("extras");
        let record = json!({"extras": ["wifi"], "amenities": []});

        let control = describe(&field, "amenities", &record, &ErrorMap::new()).unwrap();
        assert_eq!(control.widget, Widget::Checkbox { checked: true });
    }

    #[test]
    fn test_date_reveal_only_for_custom_date_value() {
        let field = radio_field();

        let record = json!({"availability": "immediate"});
        let control = describe(&field, "availability", &record, &ErrorMap::new()).unwrap();
        match control.widget {
            Widget::RadioGroup { reveal, .. } => assert!(reveal.is_none()),
            other => panic!("expected radio group, got {:?}", other),
        }

        let record = json!({"availability": "date", "availabilityDate": "2026-09-15"});
        let control = describe(&field, "availability", &record, &ErrorMap::new()).unwrap();
        match control.widget {
            Widget::RadioGroup { reveal, .. } => {
                let reveal = reveal.expect("reveal directive");
                assert_eq!(reveal.field, "availabilityDate");
                assert_eq!(reveal.value, json!("2026-09-15"));
                assert_eq!(reveal.min, Local::now().date_naive());
            }
            other => panic!("expected radio group, got {:?}", other),
        }
    }

    #[test]
    fn test_textarea_rows_default() {
        let field = FieldSchema::new("description", FieldKind::TextArea, "Description");
        let control = describe(&field, "basics", &json!({}), &ErrorMap::new()).unwrap();
        assert_eq!(
            control.widget,
            Widget::TextArea {
                rows: 3,
                placeholder: None
            }
        );
    }
}
