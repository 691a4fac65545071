//! A surface that remembers what was drawn instead of producing output.

use crate::error::RenderError;
use crate::traits::DrawingSurface;
use taxform_layout::{StandardFont, StandardFontMetrics, TextMeasurer};
use taxform_types::{Color, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPage(Size),
    EndPage,
    SetFillColor(Color),
    Text {
        x: f32,
        y: f32,
        font: StandardFont,
        font_size: f32,
        text: String,
    },
    Rect {
        rect: Rect,
        stroke_only: bool,
    },
    Finalize,
}

/// Records every call as a [`DrawCommand`], measuring text with the
/// standard font metrics. Enforces the page protocol so ordering bugs show
/// up as errors.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    page_open: bool,
    finalized: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The text of every `draw_text` call, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::BeginPage(_)))
            .count()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn require_open_page(&self, op: &str) -> Result<(), RenderError> {
        if self.page_open {
            Ok(())
        } else {
            Err(RenderError::PageState(format!("{} called outside of a page", op)))
        }
    }
}

impl TextMeasurer for RecordingSurface {
    fn measure_text_width(&self, text: &str, font: StandardFont, font_size: f32) -> f32 {
        StandardFontMetrics.measure_text_width(text, font, font_size)
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_page(&mut self, size: Size) -> Result<(), RenderError> {
        if self.page_open {
            return Err(RenderError::PageState("begin_page called twice".into()));
        }
        self.page_open = true;
        self.commands.push(DrawCommand::BeginPage(size));
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        self.require_open_page("end_page")?;
        self.page_open = false;
        self.commands.push(DrawCommand::EndPage);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.require_open_page("set_fill_color")?;
        self.commands.push(DrawCommand::SetFillColor(color));
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        font: StandardFont,
        font_size: f32,
        text: &str,
    ) -> Result<(), RenderError> {
        self.require_open_page("draw_text")?;
        self.commands.push(DrawCommand::Text {
            x,
            y,
            font,
            font_size,
            text: text.to_string(),
        });
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, stroke_only: bool) -> Result<(), RenderError> {
        self.require_open_page("draw_rect")?;
        self.commands.push(DrawCommand::Rect { rect, stroke_only });
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        if self.page_open {
            return Err(RenderError::PageState("finalize called with a page still open".into()));
        }
        if self.finalized {
            return Err(RenderError::PageState("finalize called twice".into()));
        }
        self.finalized = true;
        self.commands.push(DrawCommand::Finalize);
        Ok(())
    }
}
