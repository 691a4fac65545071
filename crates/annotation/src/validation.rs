//! Validation rules, one variant per `rule_type`.

use crate::error::AnnotationError;
use crate::formatting::decode_parameters;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawValidationRule")]
pub struct ValidationRule {
    pub kind: RuleKind,
    /// Message reported when the rule fails. Empty counts as unset.
    pub error_message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum RuleKind {
    Required,
    Regex(RegexRule),
    Range(RangeRule),
    Length(LengthRule),
    /// Declared by annotations but carries no built-in semantics.
    Custom(Value),
    /// A `rule_type` this system does not know.
    Other(String),
}

/// A pattern that must match at the start of the stringified value.
#[derive(Debug, Clone)]
pub struct RegexRule {
    pub pattern: String,
    matcher: Regex,
}

impl RegexRule {
    pub fn new(pattern: impl Into<String>) -> Result<Self, AnnotationError> {
        let pattern = pattern.into();
        let matcher = Regex::new(&format!("^(?:{})", pattern)).map_err(|source| {
            AnnotationError::InvalidRegex {
                pattern: pattern.clone(),
                source,
            }
        })?;
        Ok(Self { pattern, matcher })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct RangeRule {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct LengthRule {
    pub min_length: usize,
    pub max_length: Option<usize>,
}

impl LengthRule {
    pub fn accepts(&self, length: usize) -> bool {
        length >= self.min_length && self.max_length.is_none_or(|max| length <= max)
    }
}

impl ValidationRule {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            error_message: None,
        }
    }

    pub fn required() -> Self {
        Self::new(RuleKind::Required)
    }

    pub fn regex(pattern: &str) -> Result<Self, AnnotationError> {
        Ok(Self::new(RuleKind::Regex(RegexRule::new(pattern)?)))
    }

    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        Self::new(RuleKind::Range(RangeRule { min, max }))
    }

    pub fn length(min_length: usize, max_length: Option<usize>) -> Self {
        Self::new(RuleKind::Length(LengthRule {
            min_length,
            max_length,
        }))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn rule_type(&self) -> &str {
        match &self.kind {
            RuleKind::Required => "required",
            RuleKind::Regex(_) => "regex",
            RuleKind::Range(_) => "range",
            RuleKind::Length(_) => "length",
            RuleKind::Custom(_) => "custom",
            RuleKind::Other(tag) => tag,
        }
    }

    /// The configured message, or `"{rule_type} validation failed"`.
    pub fn failure_message(&self) -> String {
        match self.error_message.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => format!("{} validation failed", self.rule_type()),
        }
    }
}

#[derive(Deserialize)]
struct RawValidationRule {
    rule_type: String,
    #[serde(default)]
    parameters: Value,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RegexParameters {
    pattern: String,
}

impl TryFrom<RawValidationRule> for ValidationRule {
    type Error = AnnotationError;

    fn try_from(raw: RawValidationRule) -> Result<Self, Self::Error> {
        let tag = raw.rule_type.as_str();
        let kind = match tag {
            "required" => RuleKind::Required,
            "regex" => {
                let params: RegexParameters = decode_parameters(tag, raw.parameters)?;
                RuleKind::Regex(RegexRule::new(params.pattern)?)
            }
            "range" => RuleKind::Range(decode_parameters(tag, raw.parameters)?),
            "length" => RuleKind::Length(decode_parameters(tag, raw.parameters)?),
            "custom" => RuleKind::Custom(raw.parameters),
            _ => RuleKind::Other(tag.to_string()),
        };
        Ok(Self {
            kind,
            error_message: raw.error_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_regex_rule_is_anchored_at_start_only() {
        let rule = RegexRule::new(r"\d{3}").unwrap();
        assert!(rule.matches("123abc"));
        assert!(!rule.matches("abc123"));
    }

    #[test]
    fn test_invalid_regex_fails_at_load() {
        let result: Result<ValidationRule, _> = serde_json::from_value(json!({
            "rule_type": "regex",
            "parameters": { "pattern": "(unclosed" }
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("(unclosed"), "unexpected error: {}", err);
    }

    #[test]
    fn test_range_bounds_are_optional() {
        let rule: ValidationRule = serde_json::from_value(json!({
            "rule_type": "range",
            "parameters": { "min": 0 },
            "error_message": "Must not be negative"
        }))
        .unwrap();
        match rule.kind {
            RuleKind::Range(r) => {
                assert_eq!(r.min, Some(0.0));
                assert_eq!(r.max, None);
            }
            other => panic!("expected range rule, got {:?}", other),
        }
        assert_eq!(rule.failure_message(), "Must not be negative");
    }

    #[test]
    fn test_failure_message_falls_back_to_rule_type() {
        let rule: ValidationRule = serde_json::from_value(json!({
            "rule_type": "length",
            "parameters": { "max_length": 4 },
            "error_message": ""
        }))
        .unwrap();
        assert_eq!(rule.failure_message(), "length validation failed");
        assert_eq!(ValidationRule::required().failure_message(), "required validation failed");
    }

    #[test]
    fn test_length_window_is_inclusive() {
        let rule = LengthRule {
            min_length: 2,
            max_length: Some(4),
        };
        assert!(!rule.accepts(1));
        assert!(rule.accepts(2));
        assert!(rule.accepts(4));
        assert!(!rule.accepts(5));
        assert!(LengthRule::default().accepts(10_000));
    }

    #[test]
    fn test_unknown_rule_type_is_kept() {
        let rule: ValidationRule =
            serde_json::from_value(json!({ "rule_type": "checksum" })).unwrap();
        assert_eq!(rule.rule_type(), "checksum");
    }
}
