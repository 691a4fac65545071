use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JPathError {
    #[error("Path is empty")]
    EmptyPath,

    #[error("Malformed segment '{segment}' in path '{path}'")]
    MalformedSegment { path: String, segment: String },
}

/// Why a lookup did not produce a value. Callers of `resolve` never see
/// this; they get the default instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] JPathError),

    #[error("Key '{key}' not found")]
    MissingKey { key: String },

    #[error("Cannot look up key '{key}' in a non-object value")]
    NotAnObject { key: String },

    #[error("Cannot index [{index}] into a non-array value")]
    NotAnArray { index: i64 },

    #[error("Index [{index}] out of range for array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Value at '{at}' is null")]
    NullValue { at: String },
}
