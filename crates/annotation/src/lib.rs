//! The declarative annotation model for a tax form.
//!
//! An annotation describes, per field, where a value lives in the tax data
//! document, how it is formatted and validated, and where it is placed on the
//! page. Annotations are loaded once from JSON and then only read.
//!
//! Formatting and validation rules are tagged unions: every rule kind carries
//! its own typed parameter set, so a parameter of the wrong type for a known
//! rule is a load error rather than a surprise at render time.

pub mod error;
pub mod form;
pub mod formatting;
pub mod style;
pub mod validation;

pub use error::AnnotationError;
pub use form::{
    CoordinateSystem, Dimensions, FieldAnnotation, FieldType, FormAnnotation, FormMetadata,
    Position, ValueReference,
};
pub use formatting::{
    CheckboxFormat, CurrencyFormat, DateFormat, DateInput, DateOutput, FormattingRule, MaskFormat,
    NegativeFormat, PercentageFormat,
};
pub use style::{Alignment, FontStyle, OverflowBehavior, Padding};
pub use validation::{LengthRule, RangeRule, RegexRule, RuleKind, ValidationRule};
