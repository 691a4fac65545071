#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use serde_json::Value;
use taxform::{FormRenderer, PipelineError, RenderConfig, RenderReport, RendererBuilder};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub report: RenderReport,
}

impl GeneratedPdf {
    pub fn from_bytes(
        bytes: Vec<u8>,
        report: RenderReport,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc, report })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Strings shown on `page_number` (1-based), in drawing order.
    pub fn page_text(&self, page_number: u32) -> Vec<String> {
        pdf_assertions::shown_strings(&self.doc, page_number)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn build_renderer(annotation: &Value, data: Value) -> Result<FormRenderer, PipelineError> {
    build_renderer_with_config(annotation, data, RenderConfig::default())
}

pub fn build_renderer_with_config(
    annotation: &Value,
    data: Value,
    config: RenderConfig,
) -> Result<FormRenderer, PipelineError> {
    RendererBuilder::new()
        .with_annotation_json(&serde_json::to_string(annotation)?)?
        .with_data(data)
        .with_config(config)
        .build()
}

/// Renders `annotation` against `data` into an in-memory PDF.
pub fn generate_pdf(
    annotation: &Value,
    data: Value,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with_config(annotation, data, RenderConfig::default())
}

pub fn generate_pdf_with_config(
    annotation: &Value,
    data: Value,
    config: RenderConfig,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let renderer = build_renderer_with_config(annotation, data, config)?;
    let (bytes, report) = taxform::generate_pdf_bytes(&renderer)?;
    GeneratedPdf::from_bytes(bytes, report)
}
