use crate::helpers::{self, DEBUG_STROKE_GRAY, DEBUG_STROKE_WIDTH};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::Write;
use taxform_layout::{StandardFont, StandardFontMetrics, TextMeasurer};
use taxform_render_core::{DrawingSurface, RenderError};
use taxform_types::{Color, Rect, Size};

struct PageContext {
    size: Size,
    content: Content,
    font: Option<(StandardFont, f32)>,
    fill_color: Option<Color>,
}

impl PageContext {
    fn new(size: Size) -> Self {
        Self {
            size,
            content: Content { operations: vec![] },
            font: None,
            fill_color: None,
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }
}

/// A [`DrawingSurface`] that builds a PDF with `lopdf` and writes it to `W`
/// on [`finalize`](DrawingSurface::finalize).
///
/// Text is set in the standard Type1 fonts; only the faces actually drawn
/// with are added to the document's resources.
pub struct LopdfSurface<W: Write> {
    writer: W,
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    fonts: BTreeMap<StandardFont, (String, ObjectId)>,
    title: Option<String>,
    page: Option<PageContext>,
    finalized: bool,
}

impl<W: Write> LopdfSurface<W> {
    pub fn new(writer: W) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            writer,
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            fonts: BTreeMap::new(),
            title: None,
            page: None,
            finalized: false,
        }
    }

    /// Sets the document information `/Title`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Returns the writer. Call after `finalize` to get a complete PDF.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn page_mut(&mut self, op: &str) -> Result<&mut PageContext, RenderError> {
        self.page
            .as_mut()
            .ok_or_else(|| RenderError::PageState(format!("{} called outside of a page", op)))
    }

    /// Resource name for `font`, registering the font object on first use.
    fn font_resource(&mut self, font: StandardFont) -> String {
        if let Some((name, _)) = self.fonts.get(&font) {
            return name.clone();
        }
        let name = format!("F{}", self.fonts.len() + 1);
        let font_id = self.document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        log::debug!("Registered font {} as /{}", font.postscript_name(), name);
        self.fonts.insert(font, (name.clone(), font_id));
        name
    }
}

impl<W: Write> TextMeasurer for LopdfSurface<W> {
    fn measure_text_width(&self, text: &str, font: StandardFont, font_size: f32) -> f32 {
        StandardFontMetrics.measure_text_width(text, font, font_size)
    }
}

impl<W: Write> DrawingSurface for LopdfSurface<W> {
    fn begin_page(&mut self, size: Size) -> Result<(), RenderError> {
        if self.page.is_some() {
            return Err(RenderError::PageState("begin_page called twice".into()));
        }
        if self.finalized {
            return Err(RenderError::PageState("begin_page called after finalize".into()));
        }
        self.page = Some(PageContext::new(size));
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self
            .page
            .take()
            .ok_or_else(|| RenderError::PageState("end_page called outside of a page".into()))?;

        let content_id = self
            .document
            .add_object(Stream::new(dictionary! {}, page.content.encode()?));
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page.size.width.into(), page.size.height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError> {
        let page = self.page_mut("set_fill_color")?;
        if page.fill_color != Some(color) {
            page.content.operations.push(helpers::fill_color_op(color));
            page.fill_color = Some(color);
        }
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
        // Checked before registering so a stray call leaves no font behind.
        self.page_mut("draw_text")?;
        let resource = self.font_resource(font);
        let page = self.page_mut("draw_text")?;

        page.push("BT", vec![]);
        if page.font != Some((font, font_size)) {
            page.push("Tf", vec![Object::Name(resource.into_bytes()), font_size.into()]);
            page.font = Some((font, font_size));
        }
        page.push("Td", vec![x.into(), y.into()]);
        page.push("Tj", vec![helpers::literal(text)]);
        page.push("ET", vec![]);
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, stroke_only: bool) -> Result<(), RenderError> {
        let page = self.page_mut("draw_rect")?;
        let bounds = vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()];
        if stroke_only {
            page.push("q", vec![]);
            page.push(
                "RG",
                vec![DEBUG_STROKE_GRAY.into(), DEBUG_STROKE_GRAY.into(), DEBUG_STROKE_GRAY.into()],
            );
            page.push("w", vec![DEBUG_STROKE_WIDTH.into()]);
            page.push("re", bounds);
            page.push("S", vec![]);
            page.push("Q", vec![]);
        } else {
            page.push("re", bounds);
            page.push("f", vec![]);
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        if self.page.is_some() {
            return Err(RenderError::PageState("finalize called with a page still open".into()));
        }
        if self.finalized {
            return Err(RenderError::PageState("finalize called twice".into()));
        }

        let mut font_dict = Dictionary::new();
        for (name, font_id) in self.fonts.values() {
            font_dict.set(name.as_bytes(), Object::Reference(*font_id));
        }
        self.document.objects.insert(
            self.resources_id,
            Object::Dictionary(dictionary! { "Font" => font_dict }),
        );

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => self.page_ids.len() as i64,
            }),
        );

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        let mut info = dictionary! { "Producer" => helpers::literal("taxform") };
        if let Some(title) = &self.title {
            info.set("Title", helpers::literal(title));
        }
        let info_id = self.document.add_object(info);
        self.document.trailer.set("Info", info_id);

        self.document.save_to(&mut self.writer)?;
        self.writer.flush()?;
        self.finalized = true;
        log::debug!(
            "Wrote PDF with {} page(s) and {} font(s)",
            self.page_ids.len(),
            self.fonts.len()
        );
        Ok(())
    }
}
