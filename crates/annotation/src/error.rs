use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Annotation JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameters for '{rule}' rule: {source}")]
    InvalidParameters {
        rule: String,
        source: serde_json::Error,
    },

    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    #[error("Duplicate field id '{0}'")]
    DuplicateFieldId(String),

    #[error("Field '{0}' has page_number 0; pages are numbered from 1")]
    InvalidPageNumber(String),

    #[error("Field '{field_id}' has negative {what}")]
    NegativeGeometry { field_id: String, what: &'static str },

    #[error("Field '{0}' has max_length 0; it must be positive when present")]
    InvalidMaxLength(String),
}
