use crate::report::DEFAULT_SUMMARY_LIMIT;
use taxform_executor::ExecutorImpl;
use taxform_types::Size;

/// Settings for a render pass.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Stroke every drawn field's box in light gray.
    pub debug_boxes: bool,
    /// Number of errors and warnings listed by summaries.
    pub summary_limit: usize,
    /// Size of pages missing from the annotation's `page_dimensions`.
    pub default_page_size: Size,
    /// Runs per-field evaluation. Drawing is always sequential.
    pub executor: ExecutorImpl,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            debug_boxes: false,
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            default_page_size: Size::LETTER,
            executor: ExecutorImpl::default(),
        }
    }
}
