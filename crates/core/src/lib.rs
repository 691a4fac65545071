//! # taxform-core
//!
//! Binds a tax form annotation to a tax data document and draws the result.
//!
//! For every field, in document order and page by page:
//! - **resolve** the value reference against the data (`taxform-jpath`)
//! - **validate** the value (`taxform-validate`)
//! - **format** it for display (`taxform-format`)
//! - **lay out** the text in the field box (`taxform-layout`)
//! - **paint** it onto a `DrawingSurface` (`taxform-render-core`)
//!
//! Evaluation of a page's fields may run on a parallel executor; drawing is
//! always replayed sequentially in document order.

// Re-export foundation crates
pub use taxform_annotation as annotation;
pub use taxform_types as types;

mod builder;
mod config;
mod error;
mod field;
mod renderer;
mod report;

pub use builder::RendererBuilder;
pub use config::RenderConfig;
pub use error::PipelineError;
pub use field::{FieldOutcome, evaluate_field};
pub use renderer::FormRenderer;
pub use report::{DEFAULT_SUMMARY_LIMIT, RenderReport, RenderSummary};

// Re-export executor choices so callers need not depend on the executor crate.
pub use taxform_executor::ExecutorImpl;
