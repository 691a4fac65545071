//! Formatting rules, one variant per `format_type`.

use crate::error::AnnotationError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// How a resolved value is turned into display text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRule")]
pub enum FormattingRule {
    Currency(CurrencyFormat),
    Mask(MaskFormat),
    Date(DateFormat),
    Percentage(PercentageFormat),
    Checkbox(CheckboxFormat),
    /// A `format_type` this system does not know. Formats as plain text.
    Other(String),
}

impl FormattingRule {
    pub fn format_type(&self) -> &str {
        match self {
            FormattingRule::Currency(_) => "currency",
            FormattingRule::Mask(_) => "mask",
            FormattingRule::Date(_) => "date",
            FormattingRule::Percentage(_) => "percentage",
            FormattingRule::Checkbox(_) => "checkbox",
            FormattingRule::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NegativeFormat {
    #[default]
    Parentheses,
    Minus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub decimal_places: usize,
    pub show_cents: bool,
    pub currency_symbol: String,
    pub thousands_separator: String,
    pub negative_format: NegativeFormat,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            show_cents: true,
            currency_symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            negative_format: NegativeFormat::Parentheses,
        }
    }
}

/// A template where `#` and `X` take the next source character.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct MaskFormat {
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Iso8601,
    /// A strftime-style pattern such as `%m-%d-%Y`.
    Pattern(String),
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        if value == "ISO8601" {
            DateInput::Iso8601
        } else {
            DateInput::Pattern(value)
        }
    }
}

impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(DateInput::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOutput {
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `DD/MM/YYYY`
    DayMonthYear,
    /// `YYYY-MM-DD`
    YearMonthDay,
    /// Passed through to strftime as-is.
    Pattern(String),
}

impl DateOutput {
    pub fn strftime_pattern(&self) -> &str {
        match self {
            DateOutput::MonthDayYear => "%m/%d/%Y",
            DateOutput::DayMonthYear => "%d/%m/%Y",
            DateOutput::YearMonthDay => "%Y-%m-%d",
            DateOutput::Pattern(p) => p,
        }
    }
}

impl From<String> for DateOutput {
    fn from(value: String) -> Self {
        match value.as_str() {
            "MM/DD/YYYY" => DateOutput::MonthDayYear,
            "DD/MM/YYYY" => DateOutput::DayMonthYear,
            "YYYY-MM-DD" => DateOutput::YearMonthDay,
            _ => DateOutput::Pattern(value),
        }
    }
}

impl<'de> Deserialize<'de> for DateOutput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(DateOutput::from)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DateFormat {
    pub input_format: DateInput,
    #[serde(alias = "format")]
    pub output_format: DateOutput,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            input_format: DateInput::Iso8601,
            output_format: DateOutput::MonthDayYear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PercentageFormat {
    pub decimal_places: usize,
    pub multiply_by_100: bool,
    pub show_symbol: bool,
}

impl Default for PercentageFormat {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            multiply_by_100: true,
            show_symbol: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CheckboxFormat {
    pub checked_symbol: String,
    pub unchecked_symbol: String,
}

impl Default for CheckboxFormat {
    fn default() -> Self {
        Self {
            checked_symbol: "X".to_string(),
            unchecked_symbol: String::new(),
        }
    }
}

/// The on-disk shape: a tag plus an open parameter map.
#[derive(Deserialize)]
struct RawRule {
    #[serde(alias = "type")]
    format_type: String,
    #[serde(default)]
    parameters: Value,
}

/// Decodes a rule's parameter map into its typed form. A missing or `null`
/// map yields the defaults.
pub(crate) fn decode_parameters<T>(rule: &str, parameters: Value) -> Result<T, AnnotationError>
where
    T: DeserializeOwned + Default,
{
    if parameters.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(parameters).map_err(|source| AnnotationError::InvalidParameters {
        rule: rule.to_string(),
        source,
    })
}

impl TryFrom<RawRule> for FormattingRule {
    type Error = AnnotationError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        let tag = raw.format_type.as_str();
        let rule = match tag {
            "currency" => FormattingRule::Currency(decode_parameters(tag, raw.parameters)?),
            "mask" => FormattingRule::Mask(decode_parameters(tag, raw.parameters)?),
            "date" => FormattingRule::Date(decode_parameters(tag, raw.parameters)?),
            "percentage" => FormattingRule::Percentage(decode_parameters(tag, raw.parameters)?),
            "checkbox" => FormattingRule::Checkbox(decode_parameters(tag, raw.parameters)?),
            _ => {
                log::debug!(
                    "Unknown format_type '{}', values will be formatted as plain text",
                    tag
                );
                FormattingRule::Other(tag.to_string())
            }
        };
        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule(value: Value) -> Result<FormattingRule, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_currency_parameters_are_typed() {
        let parsed = rule(json!({
            "format_type": "currency",
            "parameters": { "decimal_places": 0, "negative_format": "minus" }
        }))
        .unwrap();
        match parsed {
            FormattingRule::Currency(c) => {
                assert_eq!(c.decimal_places, 0);
                assert_eq!(c.negative_format, NegativeFormat::Minus);
                assert_eq!(c.currency_symbol, "$");
            }
            other => panic!("expected currency rule, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_parameters_use_defaults() {
        let parsed = rule(json!({ "format_type": "checkbox" })).unwrap();
        assert_eq!(parsed, FormattingRule::Checkbox(CheckboxFormat::default()));
    }

    #[test]
    fn test_unknown_format_type_is_preserved() {
        let parsed = rule(json!({ "format_type": "roman", "parameters": { "upper": true } })).unwrap();
        assert_eq!(parsed, FormattingRule::Other("roman".to_string()));
        assert_eq!(parsed.format_type(), "roman");
    }

    #[test]
    fn test_mistyped_parameter_is_a_load_error() {
        let err = rule(json!({
            "format_type": "percentage",
            "parameters": { "decimal_places": "two" }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("percentage"));
    }

    #[test]
    fn test_date_format_accepts_format_alias_and_shortcuts() {
        let parsed = rule(json!({
            "format_type": "date",
            "parameters": { "format": "DD/MM/YYYY", "input_format": "%m-%d-%Y" }
        }))
        .unwrap();
        match parsed {
            FormattingRule::Date(d) => {
                assert_eq!(d.output_format, DateOutput::DayMonthYear);
                assert_eq!(d.input_format, DateInput::Pattern("%m-%d-%Y".to_string()));
            }
            other => panic!("expected date rule, got {:?}", other),
        }
    }
}
