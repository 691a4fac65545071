//! Core rendering abstractions for form overlays.
//!
//! This crate provides the pieces shared by every output backend:
//! - `DrawingSurface` trait for the drawing primitives
//! - `paint_layout` to replay a computed field layout onto a surface
//! - `RecordingSurface`, an in-memory surface for inspection and tests
//! - Error types for rendering operations

mod error;
mod paint;
mod recording;
mod traits;

pub use error::RenderError;
pub use paint::paint_layout;
pub use recording::{DrawCommand, RecordingSurface};
pub use traits::DrawingSurface;
