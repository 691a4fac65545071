use crate::error::RenderError;
use taxform_layout::{StandardFont, TextMeasurer};
use taxform_types::{Color, Rect, Size};

/// The drawing primitives a form overlay needs.
///
/// Coordinates are PDF points with the origin at the bottom-left of the
/// current page. Calls arrive in document order: `begin_page`, any number of
/// draws, `end_page`, repeated per page, then a single `finalize`.
pub trait DrawingSurface: TextMeasurer {
    fn begin_page(&mut self, size: Size) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    /// Sets the fill color for subsequent text. Surfaces without color
    /// support may ignore it.
    fn set_fill_color(&mut self, _color: Color) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        font: StandardFont,
        font_size: f32,
        text: &str,
    ) -> Result<(), RenderError>;

    fn draw_rect(&mut self, rect: Rect, stroke_only: bool) -> Result<(), RenderError>;

    fn finalize(&mut self) -> Result<(), RenderError>;
}
