//! Field annotations and the top-level form document.

use crate::error::AnnotationError;
use crate::formatting::FormattingRule;
use crate::style::{Alignment, FontStyle, OverflowBehavior, Padding};
use crate::validation::ValidationRule;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use taxform_types::Size;

/// Width and height of a field box.
pub type Dimensions = Size;

/// Descriptive kind of a field. Rendering never depends on it, so an
/// unknown tag loads as `Other`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub enum FieldType {
    Text,
    Number,
    Currency,
    Date,
    Ssn,
    Checkbox,
    Signature,
    Ein,
    Percentage,
    Other,
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => FieldType::Text,
            "number" => FieldType::Number,
            "currency" => FieldType::Currency,
            "date" => FieldType::Date,
            "ssn" => FieldType::Ssn,
            "checkbox" => FieldType::Checkbox,
            "signature" => FieldType::Signature,
            "ein" => FieldType::Ein,
            "percentage" => FieldType::Percentage,
            _ => {
                log::warn!("Unknown field type '{}'", tag);
                FieldType::Other
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// Page units measured from the top-left corner.
    #[default]
    Absolute,
    /// Percent of the page width (x, width) or height (y, height).
    Percentage,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
}

impl Position {
    pub fn absolute(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            coordinate_system: CoordinateSystem::Absolute,
        }
    }

    pub fn percentage(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            coordinate_system: CoordinateSystem::Percentage,
        }
    }
}

/// Where a field's value lives in the data document, e.g. `income.wages[0].amount`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ValueReference {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub default_value: Value,
}

impl ValueReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default_value: Value::Null,
        }
    }

    pub fn with_default(mut self, default_value: Value) -> Self {
        self.default_value = default_value;
        self
    }
}

fn default_page_number() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldAnnotation {
    pub field_id: String,
    #[serde(default)]
    pub field_name: String,
    pub field_type: FieldType,
    pub position: Position,
    pub dimensions: Dimensions,
    pub value_reference: ValueReference,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub font_style: FontStyle,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub formatting: Option<FormattingRule>,
    #[serde(default)]
    pub validation: Vec<ValidationRule>,
    #[serde(default)]
    pub overflow_behavior: OverflowBehavior,
    #[serde(default)]
    pub character_spacing: Option<f32>,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "line_reference")]
    pub irs_line_reference: String,
}

impl FieldAnnotation {
    /// A field with every optional attribute at its default.
    pub fn new(
        field_id: impl Into<String>,
        field_type: FieldType,
        position: Position,
        dimensions: Dimensions,
        value_reference: ValueReference,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            field_name: String::new(),
            field_type,
            position,
            dimensions,
            value_reference,
            alignment: Alignment::default(),
            font_style: FontStyle::default(),
            max_length: None,
            formatting: None,
            validation: Vec::new(),
            overflow_behavior: OverflowBehavior::default(),
            character_spacing: None,
            padding: Padding::default(),
            page_number: default_page_number(),
            required: false,
            description: String::new(),
            irs_line_reference: String::new(),
        }
    }

    /// Invariant violations local to this field.
    fn check(&self) -> Vec<AnnotationError> {
        let mut issues = Vec::new();
        if self.page_number == 0 {
            issues.push(AnnotationError::InvalidPageNumber(self.field_id.clone()));
        }
        if !self.dimensions.is_non_negative() {
            issues.push(AnnotationError::NegativeGeometry {
                field_id: self.field_id.clone(),
                what: "dimensions",
            });
        }
        if !self.padding.is_non_negative() {
            issues.push(AnnotationError::NegativeGeometry {
                field_id: self.field_id.clone(),
                what: "padding",
            });
        }
        if self.max_length == Some(0) {
            issues.push(AnnotationError::InvalidMaxLength(self.field_id.clone()));
        }
        issues
    }
}

fn default_form_version() -> String {
    "1.0".to_string()
}

fn default_document_version() -> String {
    "1.0.0".to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormMetadata {
    pub form_number: String,
    pub form_name: String,
    pub tax_year: i32,
    #[serde(default = "default_form_version")]
    pub form_version: String,
    /// Page number to page size. Pages not listed use US Letter.
    #[serde(default)]
    pub page_dimensions: BTreeMap<u32, Dimensions>,
    #[serde(default)]
    pub pdf_template_url: Option<String>,
}

impl FormMetadata {
    pub fn new(
        form_number: impl Into<String>,
        form_name: impl Into<String>,
        tax_year: i32,
    ) -> Self {
        Self {
            form_number: form_number.into(),
            form_name: form_name.into(),
            tax_year,
            form_version: default_form_version(),
            page_dimensions: BTreeMap::new(),
            pdf_template_url: None,
        }
    }
}

/// The complete annotation document for one form.
#[derive(Debug, Clone, Deserialize)]
pub struct FormAnnotation {
    #[serde(default = "default_document_version")]
    pub version: String,
    pub metadata: FormMetadata,
    #[serde(default)]
    pub fields: Vec<FieldAnnotation>,
}

impl FormAnnotation {
    pub fn new(metadata: FormMetadata, fields: Vec<FieldAnnotation>) -> Self {
        Self {
            version: default_document_version(),
            metadata,
            fields,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, AnnotationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: Value) -> Result<Self, AnnotationError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn get_field_by_id(&self, field_id: &str) -> Option<&FieldAnnotation> {
        self.fields.iter().find(|f| f.field_id == field_id)
    }

    /// Fields on `page_number`, in document order.
    pub fn get_fields_by_page(&self, page_number: u32) -> Vec<&FieldAnnotation> {
        self.fields
            .iter()
            .filter(|f| f.page_number == page_number)
            .collect()
    }

    /// Every page that carries at least one field, ascending.
    pub fn page_numbers(&self) -> Vec<u32> {
        self.fields
            .iter()
            .map(|f| f.page_number)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Size of `page_number` from `page_dimensions`, or `default` for
    /// pages not listed there.
    pub fn page_size(&self, page_number: u32, default: Size) -> Size {
        self.metadata
            .page_dimensions
            .get(&page_number)
            .copied()
            .unwrap_or(default)
    }

    /// Reports invariant violations: duplicate ids, page 0, negative
    /// geometry, zero `max_length`. Loading never runs this implicitly.
    pub fn check(&self) -> Vec<AnnotationError> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.field_id.as_str()) {
                issues.push(AnnotationError::DuplicateFieldId(field.field_id.clone()));
            }
            issues.extend(field.check());
        }
        issues
    }
}
