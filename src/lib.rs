//! # taxform
//!
//! Fills tax forms by binding a declarative field annotation to a tax data
//! document and drawing the formatted values as a PDF overlay.
//!
//! ```ignore
//! use taxform::{RendererBuilder, generate_to_file};
//!
//! let renderer = RendererBuilder::new()
//!     .with_annotation_file("form_1040_annotation.json")?
//!     .with_data_file("tax_data_2024.json")?
//!     .build()?;
//! let report = generate_to_file(&renderer, "completed_form_1040.pdf")?;
//! println!("{}", report.summary(renderer.config().summary_limit));
//! ```

pub mod pipeline;

// Re-export the workspace crates under short names.
pub use taxform_annotation as annotation;
pub use taxform_format as format;
pub use taxform_jpath as jpath;
pub use taxform_layout as layout;
pub use taxform_render_core as render;
pub use taxform_types as types;
pub use taxform_validate as validate;

pub use taxform_annotation::{AnnotationError, FieldAnnotation, FormAnnotation, FormMetadata};
pub use taxform_core::{
    DEFAULT_SUMMARY_LIMIT, ExecutorImpl, FieldOutcome, FormRenderer, PipelineError, RenderConfig,
    RenderReport, RenderSummary, RendererBuilder, evaluate_field,
};
pub use taxform_render_core::{DrawCommand, DrawingSurface, RecordingSurface, RenderError};
pub use taxform_render_lopdf::LopdfSurface;

pub use pipeline::{generate_pdf_bytes, generate_to_file, generate_to_writer};
