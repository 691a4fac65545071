//! Places a field's formatted text inside its box.
//!
//! Annotations use a top-left origin; the layout produced here is already in
//! PDF space (bottom-left origin), ready to be painted.

use crate::fonts::StandardFont;
use crate::metrics::TextMeasurer;
use taxform_annotation::{Alignment, CoordinateSystem, FieldAnnotation, OverflowBehavior, Padding};
use taxform_types::{Color, Rect, Size};

/// Shrunk text is scaled a little below the exact fit.
const SHRINK_MARGIN: f32 = 0.95;
/// Fraction of the font size the baseline sits above the box's vertical
/// centre line.
const BASELINE_RISE: f32 = 0.3;

/// A piece of text drawn at one baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Everything needed to draw one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    pub field_id: String,
    /// The field box in PDF space.
    pub frame: Rect,
    /// Set when debug boxes are enabled; stroked before any text.
    pub debug_frame: Option<Rect>,
    pub font: StandardFont,
    /// Effective size, smaller than declared after a shrink.
    pub font_size: f32,
    pub color: Color,
    pub runs: Vec<TextRun>,
    /// Field-local warnings, without the field id prefix.
    pub warnings: Vec<String>,
}

/// Converts top-left `y` to the PDF bottom-left origin.
pub fn flip_y(y: f32, height: f32, page_height: f32) -> f32 {
    page_height - y - height
}

/// The field box in PDF space, with percentage coordinates resolved against
/// the page.
pub fn field_frame(field: &FieldAnnotation, page: Size) -> Rect {
    let (x, y, width, height) = match field.position.coordinate_system {
        CoordinateSystem::Absolute => (
            field.position.x,
            field.position.y,
            field.dimensions.width,
            field.dimensions.height,
        ),
        CoordinateSystem::Percentage => (
            field.position.x / 100.0 * page.width,
            field.position.y / 100.0 * page.height,
            field.dimensions.width / 100.0 * page.width,
            field.dimensions.height / 100.0 * page.height,
        ),
    };
    Rect::new(x, flip_y(y, height, page.height), width, height)
}

fn anchor_x(alignment: Alignment, frame: Rect, padding: &Padding, text_width: f32) -> f32 {
    match alignment {
        Alignment::Left => frame.x + padding.left,
        Alignment::Right => frame.right() - text_width - padding.right,
        // Centring uses the whole box and ignores padding.
        Alignment::Center => frame.x + (frame.width - text_width) / 2.0,
    }
}

/// Computes [`FieldLayout`]s. Holds no per-field state, so one engine can
/// lay out a whole document.
pub struct FieldLayoutEngine<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    debug_boxes: bool,
}

impl<'a, M: TextMeasurer + ?Sized> FieldLayoutEngine<'a, M> {
    pub fn new(measurer: &'a M) -> Self {
        Self {
            measurer,
            debug_boxes: false,
        }
    }

    pub fn with_debug_boxes(mut self, enabled: bool) -> Self {
        self.debug_boxes = enabled;
        self
    }

    pub fn layout(&self, field: &FieldAnnotation, text: &str, page: Size) -> FieldLayout {
        let frame = field_frame(field, page);
        let font = StandardFont::from_style(&field.font_style);
        let declared_size = field.font_style.font_size;

        let mut layout = FieldLayout {
            field_id: field.field_id.clone(),
            frame,
            debug_frame: self.debug_boxes.then_some(frame),
            font,
            font_size: declared_size,
            color: field.font_style.color,
            runs: Vec::new(),
            warnings: Vec::new(),
        };

        if let Some(spacing) = field.character_spacing.filter(|s| *s > 0.0) {
            layout.runs = spaced_runs(
                text,
                frame.x + field.padding.left,
                frame.y + frame.height / 2.0,
                spacing,
            );
            return layout;
        }

        let mut text = text.to_string();
        let mut width = self.measurer.measure_text_width(&text, font, declared_size);
        let available = frame.width - field.padding.horizontal();

        if width > available {
            match field.overflow_behavior {
                OverflowBehavior::Shrink if available > 0.0 => {
                    let factor = available / width;
                    layout.font_size = declared_size * factor * SHRINK_MARGIN;
                    width = self.measurer.measure_text_width(&text, font, layout.font_size);
                }
                OverflowBehavior::Truncate => {
                    if let Some(max) = field.max_length.filter(|max| text.chars().count() > *max) {
                        // The anchor stays where the full text put it.
                        text = text.chars().take(max).collect();
                        log::warn!("{}: value truncated to {} characters", field.field_id, max);
                        layout
                            .warnings
                            .push(format!("Value truncated to {} characters", max));
                    }
                }
                // Shrinking into a box with no interior, wrapping and
                // erroring leave the text as is.
                OverflowBehavior::Shrink | OverflowBehavior::Wrap | OverflowBehavior::Error => {}
            }
        }

        let x = anchor_x(field.alignment, frame, &field.padding, width);
        // The baseline follows the declared size even when shrunk.
        let y = frame.y + (frame.height - declared_size) / 2.0 + declared_size * BASELINE_RISE;
        layout.runs.push(TextRun { x, y, text });
        layout
    }
}

/// One run per character at a fixed pitch. Dashes and spaces are skipped
/// without advancing, as pre-printed boxes already separate the groups.
fn spaced_runs(text: &str, start_x: f32, baseline: f32, spacing: f32) -> Vec<TextRun> {
    text.chars()
        .filter(|c| *c != '-' && *c != ' ')
        .enumerate()
        .map(|(i, c)| TextRun {
            x: start_x + i as f32 * spacing,
            y: baseline,
            text: c.to_string(),
        })
        .collect()
}
