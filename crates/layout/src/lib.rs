//! Geometry and text placement for form fields.
//!
//! [`FieldLayoutEngine`] is a pure computation: given a field, its formatted
//! text and the page size it yields a [`FieldLayout`] that a drawing surface
//! can paint without further measurement.

pub mod engine;
pub mod fonts;
pub mod metrics;

pub use self::engine::{FieldLayout, FieldLayoutEngine, TextRun, field_frame, flip_y};
pub use self::fonts::{FontFamily, StandardFont};
pub use self::metrics::{StandardFontMetrics, TextMeasurer};

// Re-export geometry types used by layouts so downstream crates agree on them.
pub use taxform_types::{Color, Rect, Size};
