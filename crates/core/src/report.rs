//! Diagnostics collected over one render pass.

use std::fmt;

/// How many errors and warnings a summary lists by default.
pub const DEFAULT_SUMMARY_LIMIT: usize = 10;

/// The outcome of `FormRenderer::render`. Messages are prefixed with the
/// field id and appear in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub pages_rendered: usize,
    pub fields_drawn: usize,
    /// Fields with no value that are not required.
    pub fields_skipped: usize,
    /// Required fields withheld because validation failed.
    pub fields_rejected: usize,
    /// Drawn values whose formatting rule fell back to its default text.
    pub formatting_fallbacks: usize,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// A printable summary listing at most `limit` errors and `limit`
    /// warnings.
    pub fn summary(&self, limit: usize) -> RenderSummary<'_> {
        RenderSummary { report: self, limit }
    }
}

pub struct RenderSummary<'a> {
    report: &'a RenderReport,
    limit: usize,
}

impl RenderSummary<'_> {
    fn write_section(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        messages: &[String],
    ) -> fmt::Result {
        if messages.is_empty() {
            return Ok(());
        }
        writeln!(f, "{} {}:", messages.len(), label)?;
        for message in messages.iter().take(self.limit) {
            writeln!(f, "  - {}", message)?;
        }
        if messages.len() > self.limit {
            writeln!(f, "  ... and {} more", messages.len() - self.limit)?;
        }
        Ok(())
    }
}

impl fmt::Display for RenderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report;
        writeln!(
            f,
            "Rendered {} page(s): {} field(s) drawn, {} skipped, {} rejected",
            r.pages_rendered, r.fields_drawn, r.fields_skipped, r.fields_rejected
        )?;
        if r.formatting_fallbacks > 0 {
            writeln!(f, "{} value(s) used fallback formatting", r.formatting_fallbacks)?;
        }
        self.write_section(f, "errors encountered", &r.errors)?;
        self.write_section(f, "warnings", &r.warnings)
    }
}
