use crate::config::RenderConfig;
use crate::error::PipelineError;
use crate::renderer::FormRenderer;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use taxform_annotation::FormAnnotation;
use taxform_executor::ExecutorImpl;
use taxform_types::Size;

fn read_file(path: &Path, what: &str) -> Result<String, PipelineError> {
    fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read {} from '{}': {}", what, path.display(), e),
        ))
    })
}

/// Assembles a [`FormRenderer`] from an annotation, a data document and
/// optional settings.
#[derive(Default)]
pub struct RendererBuilder {
    annotation: Option<FormAnnotation>,
    data: Option<Value>,
    config: RenderConfig,
}

impl RendererBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_annotation(mut self, annotation: FormAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn with_annotation_json(self, json: &str) -> Result<Self, PipelineError> {
        Ok(self.with_annotation(FormAnnotation::from_json(json)?))
    }

    pub fn with_annotation_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let json = read_file(path.as_ref(), "annotation")?;
        self.with_annotation_json(&json)
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_data_json(self, json: &str) -> Result<Self, PipelineError> {
        Ok(self.with_data(serde_json::from_str(json)?))
    }

    pub fn with_data_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let json = read_file(path.as_ref(), "tax data")?;
        self.with_data_json(&json)
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_debug_boxes(mut self, enabled: bool) -> Self {
        self.config.debug_boxes = enabled;
        self
    }

    pub fn with_summary_limit(mut self, limit: usize) -> Self {
        self.config.summary_limit = limit;
        self
    }

    pub fn with_default_page_size(mut self, size: Size) -> Self {
        self.config.default_page_size = size;
        self
    }

    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.config.executor = executor;
        self
    }

    pub fn build(self) -> Result<FormRenderer, PipelineError> {
        let annotation = self.annotation.ok_or_else(|| {
            PipelineError::Config(
                "No annotation has been configured. Use `with_annotation` or `with_annotation_file`."
                    .to_string(),
            )
        })?;
        let data = self.data.ok_or_else(|| {
            PipelineError::Config(
                "No tax data has been configured. Use `with_data` or `with_data_file`.".to_string(),
            )
        })?;
        Ok(FormRenderer::with_config(annotation, data, self.config))
    }
}
