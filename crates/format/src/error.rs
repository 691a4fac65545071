use thiserror::Error;

/// Why a formatting rule could not be applied to a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Value '{0}' is not numeric")]
    NotNumeric(String),

    #[error("Cannot parse '{value}' as a date using input format '{input_format}'")]
    UnparseableDate { value: String, input_format: String },

    #[error("Invalid date output pattern '{0}'")]
    InvalidPattern(String),
}
