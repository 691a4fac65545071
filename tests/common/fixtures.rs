#![allow(dead_code)]

use serde_json::{Value, json};

/// A single field on page 1 with sensible geometry; `extra` is merged in.
pub fn field(field_id: &str, path: &str, extra: Value) -> Value {
    let mut field = json!({
        "field_id": field_id,
        "field_type": "text",
        "position": { "x": 50, "y": 100 },
        "dimensions": { "width": 200, "height": 20 },
        "value_reference": { "path": path }
    });
    if let (Some(target), Value::Object(extra)) = (field.as_object_mut(), extra) {
        target.extend(extra);
    }
    field
}

/// Wraps `fields` in an annotation document for Form 1040.
pub fn annotation_with_fields(fields: Vec<Value>) -> Value {
    json!({
        "version": "1.0.0",
        "metadata": {
            "form_number": "1040",
            "form_name": "U.S. Individual Income Tax Return",
            "tax_year": 2024
        },
        "fields": fields
    })
}

/// A two-page Form 1040 excerpt exercising every formatting rule.
pub fn form_1040_annotation() -> Value {
    json!({
        "version": "1.0.0",
        "metadata": {
            "form_number": "1040",
            "form_name": "U.S. Individual Income Tax Return",
            "tax_year": 2024,
            "page_dimensions": { "2": { "width": 612, "height": 792 } }
        },
        "fields": [
            {
                "field_id": "first_name",
                "field_name": "Your first name and middle initial",
                "field_type": "text",
                "position": { "x": 40, "y": 90 },
                "dimensions": { "width": 200, "height": 18 },
                "value_reference": { "path": "taxpayer.first_name" },
                "required": true,
                "validation": [
                    { "rule_type": "required", "error_message": "First name is required" },
                    { "rule_type": "length", "parameters": { "max_length": 30 } }
                ]
            },
            {
                "field_id": "ssn",
                "field_type": "ssn",
                "position": { "x": 450, "y": 90 },
                "dimensions": { "width": 120, "height": 18 },
                "value_reference": { "path": "taxpayer.ssn" },
                "formatting": { "format_type": "mask", "parameters": { "pattern": "XXX-XX-####" } },
                "validation": [
                    { "rule_type": "regex", "parameters": { "pattern": "^\\d{9}$" }, "error_message": "SSN must be 9 digits" }
                ]
            },
            {
                "field_id": "filing_single",
                "field_type": "checkbox",
                "position": { "x": 40, "y": 140 },
                "dimensions": { "width": 10, "height": 10 },
                "value_reference": { "path": "filing_status.single" },
                "alignment": "center",
                "padding": { "left": 0, "right": 0 },
                "formatting": { "format_type": "checkbox" }
            },
            {
                "field_id": "wages",
                "field_type": "currency",
                "irs_line_reference": "1a",
                "position": { "x": 480, "y": 400 },
                "dimensions": { "width": 100, "height": 18 },
                "value_reference": { "path": "income.w2[0].wages", "default_value": 0 },
                "alignment": "right",
                "formatting": { "format_type": "currency" },
                "validation": [{ "rule_type": "range", "parameters": { "min": 0 } }]
            },
            {
                "field_id": "tax_rate",
                "field_type": "percentage",
                "page_number": 2,
                "position": { "x": 480, "y": 200 },
                "dimensions": { "width": 100, "height": 18 },
                "value_reference": { "path": "computed.effective_rate" },
                "alignment": "right",
                "formatting": { "format_type": "percentage" }
            },
            {
                "field_id": "refund",
                "field_type": "currency",
                "page_number": 2,
                "position": { "x": 480, "y": 300 },
                "dimensions": { "width": 100, "height": 18 },
                "value_reference": { "path": "computed.balance" },
                "alignment": "right",
                "formatting": { "format_type": "currency" }
            },
            {
                "field_id": "signature_date",
                "field_type": "date",
                "page_number": 2,
                "position": { "x": 300, "y": 650 },
                "dimensions": { "width": 100, "height": 18 },
                "value_reference": { "path": "signature.date" },
                "formatting": { "format_type": "date", "parameters": { "output_format": "MM/DD/YYYY" } }
            }
        ]
    })
}

pub fn form_1040_data() -> Value {
    json!({
        "taxpayer": { "first_name": "John", "ssn": "123456789" },
        "filing_status": { "single": true },
        "income": { "w2": [{ "employer": "Acme Corp", "wages": 75000.5 }] },
        "computed": { "effective_rate": 0.1325, "balance": -1234 },
        "signature": { "date": "2025-04-15" }
    })
}
