//! Record validation against a rule bundle.
//!
//! Stages run in a fixed order and fold into one accumulating error map:
//! conditional-required, required, numeric, min_length, max_length, min,
//! max. A later stage overwrites an earlier message for the same field.
//! Every stage is a pure function; validating the same record twice yields
//! the same map.

use serde_json::Value;
use std::collections::HashMap;

use super::path;
use super::types::ValidationRules;

/// Field name to human-readable message. Empty means the record is valid.
pub type ErrorMap = HashMap<String, String>;

/// Run the full rule pipeline against a record.
pub fn validate(record: &Value, rules: &ValidationRules) -> ErrorMap {
    let mut errors = ErrorMap::new();
    apply_conditional_required(record, rules, &mut errors);
    apply_required(record, rules, &mut errors);
    apply_numeric(record, rules, &mut errors);
    apply_min_length(record, rules, &mut errors);
    apply_max_length(record, rules, &mut errors);
    apply_min(record, rules, &mut errors);
    apply_max(record, rules, &mut errors);
    errors
}

fn apply_conditional_required(record: &Value, rules: &ValidationRules, errors: &mut ErrorMap) {
    for (field, condition) in &rules.conditional_required {
        if condition.holds(record) && is_blank(path::get(record, field)) {
            errors.insert(field.clone(), format!("{} is required", display_name(field)));
        }
    }
}

fn apply_required(record: &Value, rules: &ValidationRules, errors: &mut ErrorMap) {
    for field in &rules.required {
        if is_blank(path::get(record, field)) {
            errors.insert(field.clone(), format!("{} is required", display_name(field)));
        }
    }
}

fn apply_numeric(record: &Value, rules: &ValidationRules, errors: &mut ErrorMap) {
    for field in &rules.numeric {
        let value = path::get(record, field);
        if is_blank(value) {
            // Emptiness is the required rule's job.
            continue;
        }
        if value.and_then(numeric_value).is_none() {
            errors.insert(
                field.clone(),
                format!("{} must be a number", display_name(field)),
            );
        }
    }
}

fn apply_min_length(record: &Value, rules: &ValidationRules, errors: &mut ErrorMap) {
    for (field, min_len) in &rules.min_length {
        if let Some(len) = present_text_length(path::get(record, field)) {
            if len < *min_len {
                errors.insert(
                    field.clone(),
                    format!(
                        "{} must be at least {} characters",
                        display_name(field),
                        min_len
                    ),
                );
            }
        }
    }
}

fn apply_max_length(record: &Value, rules: &ValidationRules, errors: &mut ErrorMap) {
    for (field, max_len) in &rules.max_length {
        if let Some(len) = present_text_length(path::get(record, field)) {
            if len > *max_len {
                errors.insert(
                    field.clone(),
                    format!(
                        "{} must be no more than {} characters",
                        display_name(field),
                        max_len
                    ),
                );
            }
        }
    }
}

fn apply_min(record: &Value, rules: &ValidationRules, errors: &mut ErrorMap) {
    for (field, bound) in &rules.min {
        if let Some(n) = path::get(record, field).and_then(numeric_value) {
            if n < *bound {
                errors.insert(
                    field.clone(),
                    format!("{} must be at least {}", display_name(field), fmt_bound(*bound)),
                );
            }
        }
    }
}

fn apply_max(record: &Value, rules: &ValidationRules, errors: &mut ErrorMap) {
    for (field, bound) in &rules.max {
        if let Some(n) = path::get(record, field).and_then(numeric_value) {
            if n > *bound {
                errors.insert(
                    field.clone(),
                    format!(
                        "{} must be no more than {}",
                        display_name(field),
                        fmt_bound(*bound)
                    ),
                );
            }
        }
    }
}

/// Last path segment with its first letter upper-cased.
pub fn display_name(field: &str) -> String {
    let last = field.rsplit('.').next().unwrap_or(field);
    let mut chars = last.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Missing, null, or whitespace-only string.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Numeric reading of a value: JSON numbers as-is, strings parsed.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Character count of a present value's text form; `None` when the value is
/// missing, null, or the empty string (length rules only apply to present
/// input).
fn present_text_length(value: Option<&Value>) -> Option<usize> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.chars().count()),
        Some(Value::Number(n)) => Some(n.to_string().chars().count()),
        Some(Value::Bool(b)) => Some(b.to_string().len()),
        Some(_) => None,
    }
}

/// Bounds print without a trailing `.0` when whole.
fn fmt_bound(bound: f64) -> String {
    if bound.fract() == 0.0 && bound.is_finite() {
        format!("{}", bound as i64)
    } else {
        format!("{}", bound)
    }
}
