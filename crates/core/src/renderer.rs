//! The form renderer: binds every annotated field to the data document and
//! draws the result page by page.

use crate::config::RenderConfig;
use crate::error::PipelineError;
use crate::field::{FieldOutcome, evaluate_field};
use crate::report::RenderReport;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use taxform_annotation::{FieldAnnotation, FormAnnotation};
use taxform_layout::FieldLayoutEngine;
use taxform_render_core::{DrawingSurface, paint_layout};
use taxform_traits::Executor;
use taxform_types::Size;

/// Renders one annotation against one data document.
///
/// Both documents are read-only and shared, so a renderer can be rendered
/// any number of times, onto different surfaces.
#[derive(Debug, Clone)]
pub struct FormRenderer {
    annotation: Arc<FormAnnotation>,
    data: Arc<Value>,
    config: RenderConfig,
}

impl FormRenderer {
    pub fn new(annotation: FormAnnotation, data: Value) -> Self {
        Self::with_config(annotation, data, RenderConfig::default())
    }

    pub fn with_config(annotation: FormAnnotation, data: Value, config: RenderConfig) -> Self {
        Self {
            annotation: Arc::new(annotation),
            data: Arc::new(data),
            config,
        }
    }

    pub fn annotation(&self) -> &FormAnnotation {
        &self.annotation
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Field indexes grouped by page, pages ascending, fields in document
    /// order.
    fn pages(&self) -> BTreeMap<u32, Vec<usize>> {
        let mut pages: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (index, field) in self.annotation.fields.iter().enumerate() {
            pages.entry(field.page_number).or_default().push(index);
        }
        pages
    }

    /// Resolves, validates and formats a page's fields on the configured
    /// executor. Outcomes come back in the order of `indexes`.
    fn evaluate_page(&self, indexes: Vec<usize>) -> Vec<(usize, FieldOutcome)> {
        let annotation = Arc::clone(&self.annotation);
        let data = Arc::clone(&self.data);
        self.config.executor.execute_all(indexes, move |index| {
            (index, evaluate_field(&annotation.fields[index], &data))
        })
    }

    /// Draws every page that has fields, then finalizes the surface.
    ///
    /// Only surface failures are errors. Everything that goes wrong with
    /// individual fields is recorded in the returned report.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<RenderReport, PipelineError> {
        for issue in self.annotation.check() {
            log::warn!("Annotation '{}': {}", self.annotation.metadata.form_number, issue);
        }
        log::info!(
            "Rendering form {} ({} fields) with {}",
            self.annotation.metadata.form_number,
            self.annotation.fields.len(),
            self.config.executor.name()
        );

        let mut report = RenderReport::default();
        for (page_number, indexes) in self.pages() {
            let page_size = self
                .annotation
                .page_size(page_number, self.config.default_page_size);
            surface.begin_page(page_size)?;
            for (index, outcome) in self.evaluate_page(indexes) {
                let field = &self.annotation.fields[index];
                self.replay(surface, field, outcome, page_size, &mut report)?;
            }
            surface.end_page()?;
            report.pages_rendered += 1;
            log::info!("Rendered page {} ({}x{})", page_number, page_size.width, page_size.height);
        }
        surface.finalize()?;

        log::info!(
            "Render complete: {} drawn, {} errors, {} warnings",
            report.fields_drawn,
            report.errors.len(),
            report.warnings.len()
        );
        Ok(report)
    }

    fn replay<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        field: &FieldAnnotation,
        outcome: FieldOutcome,
        page_size: Size,
        report: &mut RenderReport,
    ) -> Result<(), PipelineError> {
        let prefixed = |message: String| format!("{}: {}", field.field_id, message);
        match outcome {
            FieldOutcome::Skipped => {
                report.fields_skipped += 1;
            }
            FieldOutcome::Rejected { errors } => {
                report.fields_rejected += 1;
                report.errors.extend(errors.into_iter().map(prefixed));
            }
            FieldOutcome::Ready {
                text,
                errors,
                fallback,
            } => {
                report.errors.extend(errors.into_iter().map(prefixed));
                if fallback.is_some() {
                    report.formatting_fallbacks += 1;
                }
                let layout = FieldLayoutEngine::new(&*surface)
                    .with_debug_boxes(self.config.debug_boxes)
                    .layout(field, &text, page_size);
                paint_layout(surface, &layout)?;
                report.warnings.extend(layout.warnings.into_iter().map(prefixed));
                report.fields_drawn += 1;
            }
        }
        Ok(())
    }
}
