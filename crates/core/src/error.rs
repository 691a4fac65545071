//! Error types for loading and rendering forms.

use taxform_annotation::AnnotationError;
use taxform_render_core::RenderError;
use thiserror::Error;

/// The main error enum for all high-level operations.
///
/// Field-level problems (missing values, failed validation, unformattable
/// values) never surface here; they are collected in the `RenderReport`.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Annotation error: {0}")]
    Annotation(#[from] AnnotationError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}
