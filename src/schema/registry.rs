//! Built-in property-listing form registry.
//!
//! A static, declarative description of the listing form: sections, fields,
//! default values, and the validation rule bundle. Never mutated at runtime.

use once_cell::sync::Lazy;
use serde_json::json;

use super::types::{
    FieldCondition, FieldKind, FieldOption, FieldSchema, FormSchema, SectionDisplay, SectionSchema,
    ValidationRules,
};
use super::DATE_FIELD;

/// The property-listing form schema, built once on first use.
pub static PROPERTY_FORM: Lazy<FormSchema> = Lazy::new(property_form);

/// Build the property-listing schema.
pub fn property_form() -> FormSchema {
    FormSchema::new("property_listing")
        .with_section(
            SectionSchema::new("basics", "Basic Information").with_fields(vec![
                FieldSchema::new("title", FieldKind::Text, "Title")
                    .with_required()
                    .with_placeholder("e.g. Sunny two-bedroom apartment")
                    .with_col_span(2),
                FieldSchema::new("propertyType", FieldKind::Select, "Property Type")
                    .with_required()
                    .with_options(vec![
                        FieldOption::new("apartment", "Apartment"),
                        FieldOption::new("house", "House"),
                        FieldOption::new("villa", "Villa"),
                        FieldOption::new("office", "Office"),
                        FieldOption::new("land", "Land"),
                    ]),
                FieldSchema::new("listingType", FieldKind::Select, "Listing Type").with_options(
                    vec![
                        FieldOption::new("sale", "For Sale"),
                        FieldOption::new("rent", "For Rent"),
                    ],
                ),
                FieldSchema::new("furnished", FieldKind::BooleanSelect, "Furnished").with_options(
                    vec![
                        FieldOption::new("true", "Furnished"),
                        FieldOption::new("false", "Unfurnished"),
                    ],
                ),
                FieldSchema::new("description", FieldKind::TextArea, "Description")
                    .with_required()
                    .with_rows(5)
                    .with_col_span(2)
                    .with_placeholder("Describe the property"),
            ]),
        )
        .with_section(SectionSchema::new("details", "Details").with_fields(vec![
            FieldSchema::new("price", FieldKind::Number, "Price")
                .with_required()
                .with_placeholder("Price in USD"),
            FieldSchema::new("area", FieldKind::Number, "Area (sqft)"),
            FieldSchema::new("bedrooms", FieldKind::Number, "Bedrooms"),
            FieldSchema::new("bathrooms", FieldKind::Number, "Bathrooms"),
        ]))
        .with_section(
            SectionSchema::new("address", "Address").with_fields(vec![
                FieldSchema::new("address.street", FieldKind::Text, "Street")
                    .with_required()
                    .with_col_span(2),
                FieldSchema::new("address.city", FieldKind::Text, "City").with_required(),
                FieldSchema::new("address.state", FieldKind::Text, "State"),
                FieldSchema::new("address.zip", FieldKind::Text, "ZIP Code"),
            ]),
        )
        .with_section(
            SectionSchema::new("availability", "Availability").with_fields(vec![FieldSchema::new(
                "availability",
                FieldKind::RadioWithDate,
                "Available",
            )
            .with_col_span(2)
            .with_date_field(DATE_FIELD)
            .with_options(vec![
                FieldOption::new("immediate", "Immediately"),
                FieldOption::new("date", "From a custom date"),
            ])]),
        )
        .with_section(
            SectionSchema::new("amenities", "Amenities")
                .with_display(SectionDisplay::CheckboxGroup)
                .with_fields(vec![
                    FieldSchema::new("wifi", FieldKind::Checkbox, "Wifi"),
                    FieldSchema::new("gym", FieldKind::Checkbox, "Gym"),
                    FieldSchema::new("pool", FieldKind::Checkbox, "Swimming Pool"),
                    FieldSchema::new("parking", FieldKind::Checkbox, "Parking"),
                    FieldSchema::new("garden", FieldKind::Checkbox, "Garden"),
                    FieldSchema::new("security", FieldKind::Checkbox, "24/7 Security"),
                    FieldSchema::new("elevator", FieldKind::Checkbox, "Elevator"),
                    FieldSchema::new("balcony", FieldKind::Checkbox, "Balcony"),
                ]),
        )
        .with_default("title", json!(""))
        .with_default("propertyType", json!("apartment"))
        .with_default("listingType", json!("sale"))
        .with_default("furnished", json!(false))
        .with_default("description", json!(""))
        .with_default("price", json!(""))
        .with_default("area", json!(""))
        .with_default("bedrooms", json!(""))
        .with_default("bathrooms", json!(""))
        .with_default("address.street", json!(""))
        .with_default("address.city", json!(""))
        .with_default("address.state", json!(""))
        .with_default("address.zip", json!(""))
        .with_default("availability", json!("immediate"))
        .with_default(DATE_FIELD, json!(""))
        .with_rules(
            ValidationRules::new()
                .with_required("title")
                .with_required("description")
                .with_required("propertyType")
                .with_required("price")
                .with_required("address.street")
                .with_required("address.city")
                .with_numeric("price")
                .with_numeric("area")
                .with_numeric("bedrooms")
                .with_numeric("bathrooms")
                .with_min_length("title", 3)
                .with_max_length("title", 120)
                .with_max_length("description", 2000)
                .with_min("price", 1.0)
                .with_min("bedrooms", 0.0)
                .with_max("bedrooms", 20.0)
                .with_conditional_required(
                    DATE_FIELD,
                    FieldCondition::Equals {
                        field: "availability".to_string(),
                        value: json!("date"),
                    },
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_form_passes_integrity_check() {
        PROPERTY_FORM.check().unwrap();
    }

    #[test]
    fn test_property_form_defaults() {
        let record = PROPERTY_FORM.default_record();
        assert_eq!(record["amenities"], json!([]));
        assert_eq!(record["availability"], json!("immediate"));
        assert_eq!(record["address"]["street"], json!(""));
        assert_eq!(record["furnished"], json!(false));
    }

    #[test]
    fn test_property_form_survives_serde() {
        let text = serde_json::to_string(&*PROPERTY_FORM).unwrap();
        let back = FormSchema::from_json_str(&text).unwrap();
        assert_eq!(back.sections.len(), PROPERTY_FORM.sections.len());
        assert_eq!(
            back.rules.conditional_required.len(),
            PROPERTY_FORM.rules.conditional_required.len()
        );
    }
}
