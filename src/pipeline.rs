//! Convenience entry points that render straight to PDF.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use taxform_core::{FormRenderer, PipelineError, RenderReport};
use taxform_render_lopdf::LopdfSurface;

/// Renders to `writer` and hands it back together with the report.
pub fn generate_to_writer<W: Write>(
    renderer: &FormRenderer,
    writer: W,
) -> Result<(W, RenderReport), PipelineError> {
    let title = renderer.annotation().metadata.form_name.clone();
    let mut surface = LopdfSurface::new(writer).with_title(title);
    let report = renderer.render(&mut surface)?;
    Ok((surface.into_inner(), report))
}

/// Renders into an in-memory PDF.
pub fn generate_pdf_bytes(
    renderer: &FormRenderer,
) -> Result<(Vec<u8>, RenderReport), PipelineError> {
    generate_to_writer(renderer, Vec::new())
}

/// Renders to a PDF file at `path`, replacing any existing file.
pub fn generate_to_file<P: AsRef<Path>>(
    renderer: &FormRenderer,
    path: P,
) -> Result<RenderReport, PipelineError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let (mut writer, report) = generate_to_writer(renderer, BufWriter::new(file))?;
    writer.flush()?;
    log::info!("PDF written to {}", path.display());
    Ok(report)
}
