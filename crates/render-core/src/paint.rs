use crate::error::RenderError;
use crate::traits::DrawingSurface;
use taxform_layout::FieldLayout;

/// Replays a computed layout onto a surface: the debug frame first, then
/// the text runs in the field's color.
pub fn paint_layout<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &FieldLayout,
) -> Result<(), RenderError> {
    if let Some(frame) = layout.debug_frame {
        surface.draw_rect(frame, true)?;
    }
    if layout.runs.is_empty() {
        return Ok(());
    }
    surface.set_fill_color(layout.color)?;
    for run in &layout.runs {
        surface.draw_text(run.x, run.y, layout.font, layout.font_size, &run.text)?;
    }
    Ok(())
}
