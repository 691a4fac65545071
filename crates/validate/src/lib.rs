//! Checks a resolved field value against the field's validation rules.
//!
//! Every rule is evaluated, in declaration order, and each failing rule
//! contributes exactly one message. Unknown and `custom` rules always pass.

use serde_json::Value;
use taxform_annotation::{RuleKind, ValidationRule};
use taxform_format::{stringify, to_number};

/// Reported by a range rule when the value cannot be read as a number. It
/// replaces any configured message.
pub const RANGE_NOT_NUMERIC: &str = "Value must be numeric for range validation";

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Passed,
    Failed(String),
}

/// Evaluates one rule against a value.
pub fn check_rule(value: &Value, rule: &ValidationRule) -> RuleOutcome {
    let passed = match &rule.kind {
        RuleKind::Required => !stringify(value).trim().is_empty(),
        RuleKind::Regex(regex) => regex.matches(&stringify(value)),
        RuleKind::Range(range) => {
            let Some(number) = to_number(value) else {
                return RuleOutcome::Failed(RANGE_NOT_NUMERIC.to_string());
            };
            range.min.is_none_or(|min| number >= min) && range.max.is_none_or(|max| number <= max)
        }
        RuleKind::Length(length) => length.accepts(stringify(value).chars().count()),
        RuleKind::Custom(_) | RuleKind::Other(_) => {
            log::debug!("Skipping '{}' validation rule; no built-in semantics", rule.rule_type());
            true
        }
    };

    if passed {
        RuleOutcome::Passed
    } else {
        RuleOutcome::Failed(rule.failure_message())
    }
}

/// Returns one message per failed rule, in rule order.
pub fn validate(value: &Value, rules: &[ValidationRule]) -> Vec<String> {
    rules
        .iter()
        .filter_map(|rule| match check_rule(value, rule) {
            RuleOutcome::Passed => None,
            RuleOutcome::Failed(message) => Some(message),
        })
        .collect()
}
