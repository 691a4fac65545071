//! Per-field evaluation: resolve, validate, format.

use serde_json::Value;
use taxform_annotation::FieldAnnotation;
use taxform_format::{FormatError, format_value};
use taxform_jpath::resolve_ref;
use taxform_validate::validate;

/// What the renderer should do with a field. Messages are not yet prefixed
/// with the field id.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// No value and not required: nothing is drawn or reported.
    Skipped,
    /// A required field failed validation and must not be drawn.
    Rejected { errors: Vec<String> },
    /// Draw `text`. `errors` holds validation failures of an optional
    /// field, which is drawn regardless.
    Ready {
        text: String,
        errors: Vec<String>,
        fallback: Option<FormatError>,
    },
}

pub fn evaluate_field(field: &FieldAnnotation, data: &Value) -> FieldOutcome {
    let reference = &field.value_reference;
    let value = resolve_ref(data, &reference.path, &reference.default_value);

    if value.is_null() && !field.required {
        log::debug!("{}: no value at '{}', skipping", field.field_id, reference.path);
        return FieldOutcome::Skipped;
    }

    let errors = validate(value, &field.validation);
    if !errors.is_empty() && field.required {
        log::debug!("{}: required field failed validation, not drawn", field.field_id);
        return FieldOutcome::Rejected { errors };
    }

    let formatted = format_value(value, field.formatting.as_ref());
    FieldOutcome::Ready {
        text: formatted.text,
        errors,
        fallback: formatted.fallback,
    }
}
