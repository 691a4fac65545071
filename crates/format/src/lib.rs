//! Turns resolved field values into the text drawn on the form.
//!
//! Formatting never fails from the caller's point of view: a value that a
//! rule cannot handle degrades to a fixed fallback text. [`format_value`]
//! reports that degradation through [`Formatted::fallback`] so the render
//! report can count it.

mod date;
mod error;
mod mask;
mod numeric;
pub mod value;

pub use date::format_date;
pub use error::FormatError;
pub use mask::format_mask;
pub use numeric::{format_currency, format_percentage};
pub use value::{stringify, to_bool, to_number};

use serde_json::Value;
use taxform_annotation::{CheckboxFormat, FormattingRule};

/// The text to draw for a field, plus the error if a fallback was used.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatted {
    pub text: String,
    pub fallback: Option<FormatError>,
}

impl Formatted {
    fn ok(text: String) -> Self {
        Self { text, fallback: None }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

pub fn format_checkbox(value: &Value, params: &CheckboxFormat) -> String {
    if to_bool(value) {
        params.checked_symbol.clone()
    } else {
        params.unchecked_symbol.clone()
    }
}

fn fallback_text(rule: &FormattingRule, value: &Value) -> String {
    match rule {
        FormattingRule::Currency(_) => numeric::CURRENCY_FALLBACK.to_string(),
        FormattingRule::Percentage(_) => numeric::PERCENTAGE_FALLBACK.to_string(),
        _ => stringify(value),
    }
}

/// Formats `value` according to `rule`.
///
/// `null` always yields the empty string, whatever the rule. Without a rule,
/// or with a rule type this crate does not know, the value is stringified.
pub fn format_value(value: &Value, rule: Option<&FormattingRule>) -> Formatted {
    if value.is_null() {
        return Formatted::ok(String::new());
    }
    let Some(rule) = rule else {
        return Formatted::ok(stringify(value));
    };

    let result = match rule {
        FormattingRule::Currency(params) => format_currency(value, params),
        FormattingRule::Percentage(params) => format_percentage(value, params),
        FormattingRule::Date(params) => format_date(value, params),
        FormattingRule::Mask(params) => Ok(format_mask(value, params)),
        FormattingRule::Checkbox(params) => Ok(format_checkbox(value, params)),
        FormattingRule::Other(tag) => {
            log::debug!("No formatter for format type '{}', using plain text", tag);
            Ok(stringify(value))
        }
    };

    match result {
        Ok(text) => Formatted::ok(text),
        Err(e) => {
            log::debug!("{} formatting fell back: {}", rule.format_type(), e);
            Formatted {
                text: fallback_text(rule, value),
                fallback: Some(e),
            }
        }
    }
}

/// Shorthand for `format_value(..).text`.
pub fn format(value: &Value, rule: Option<&FormattingRule>) -> String {
    format_value(value, rule).text
}
