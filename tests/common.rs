//! Common test utilities and fixtures for form engine tests.

use formfold::{property_form, ChangeEvent, FieldKind, FormSchema};
use serde_json::{json, Value};

/// Common test fixture wrapping the property-listing schema.
pub struct FormFixture {
    pub schema: FormSchema,
}

impl FormFixture {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            schema: property_form(),
        }
    }

    /// A record with every required field populated and valid.
    pub fn complete_record(&self) -> Value {
        json!({
            "title": "Sunny two-bedroom apartment",
            "description": "Bright apartment close to the harbor.",
            "propertyType": "apartment",
            "listingType": "rent",
            "furnished": true,
            "price": "1800",
            "area": "720",
            "bedrooms": "2",
            "bathrooms": "1",
            "address": {
                "street": "12 Harbor Road",
                "city": "Aarhus",
                "state": "",
                "zip": "8000"
            },
            "availability": "immediate",
            "availabilityDate": "",
            "amenities": []
        })
    }

    /// Shorthand for a text-kind input event.
    pub fn edit(&self, field: &str, value: &str) -> ChangeEvent {
        let kind = self
            .schema
            .field(field)
            .map(|f| f.kind)
            .unwrap_or(FieldKind::Text);
        ChangeEvent::input(field, kind, value)
    }
}
