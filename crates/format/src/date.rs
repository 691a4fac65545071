use crate::error::FormatError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::fmt::Write;
use taxform_annotation::{DateFormat, DateInput};

const ISO_DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn parse_iso(text: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    for pattern in ISO_DATETIME_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(dt);
        }
    }
    DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.naive_local())
}

fn parse_with_pattern(text: &str, pattern: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, pattern).ok().or_else(|| {
        NaiveDate::parse_from_str(text, pattern)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

fn render(moment: &NaiveDateTime, pattern: &str) -> Result<String, FormatError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::InvalidPattern(pattern.to_string()));
    }
    // Writing (rather than `to_string`) surfaces specifiers the value cannot
    // satisfy, such as `%z` on a naive timestamp.
    let mut out = String::new();
    write!(out, "{}", moment.format_with_items(items.iter()))
        .map_err(|_| FormatError::InvalidPattern(pattern.to_string()))?;
    Ok(out)
}

/// Re-renders a date string in the configured output format.
pub fn format_date(value: &Value, params: &DateFormat) -> Result<String, FormatError> {
    let (text, input_label) = match (&params.input_format, value) {
        (DateInput::Iso8601, Value::String(s)) => (s.as_str(), "ISO8601"),
        (DateInput::Pattern(p), Value::String(s)) => (s.as_str(), p.as_str()),
        _ => {
            return Err(FormatError::UnparseableDate {
                value: value.to_string(),
                input_format: match &params.input_format {
                    DateInput::Iso8601 => "ISO8601".to_string(),
                    DateInput::Pattern(p) => p.clone(),
                },
            });
        }
    };

    let parsed = match &params.input_format {
        DateInput::Iso8601 => parse_iso(text),
        DateInput::Pattern(pattern) => parse_with_pattern(text, pattern),
    };
    let moment = parsed.ok_or_else(|| FormatError::UnparseableDate {
        value: text.to_string(),
        input_format: input_label.to_string(),
    })?;

    render(&moment, params.output_format.strftime_pattern())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taxform_annotation::DateOutput;

    fn params(input: DateInput, output: DateOutput) -> DateFormat {
        DateFormat {
            input_format: input,
            output_format: output,
        }
    }

    #[test]
    fn test_iso_to_default_output() {
        let p = DateFormat::default();
        assert_eq!(format_date(&json!("2024-04-15"), &p).unwrap(), "04/15/2024");
        assert_eq!(format_date(&json!("2024-04-15T13:45:00"), &p).unwrap(), "04/15/2024");
        assert_eq!(format_date(&json!("2024-04-15 08:00"), &p).unwrap(), "04/15/2024");
        assert_eq!(format_date(&json!("2024-04-15T13:45:00Z"), &p).unwrap(), "04/15/2024");
    }

    #[test]
    fn test_output_shortcuts_and_passthrough() {
        let value = json!("2023-12-01");
        let dmy = params(DateInput::Iso8601, DateOutput::DayMonthYear);
        let ymd = params(DateInput::Iso8601, DateOutput::YearMonthDay);
        let raw = params(DateInput::Iso8601, DateOutput::Pattern("%b %d, %Y".into()));
        assert_eq!(format_date(&value, &dmy).unwrap(), "01/12/2023");
        assert_eq!(format_date(&value, &ymd).unwrap(), "2023-12-01");
        assert_eq!(format_date(&value, &raw).unwrap(), "Dec 01, 2023");
    }

    #[test]
    fn test_custom_input_pattern() {
        let p = params(DateInput::Pattern("%m-%d-%Y".into()), DateOutput::YearMonthDay);
        assert_eq!(format_date(&json!("07-04-2022"), &p).unwrap(), "2022-07-04");
    }

    #[test]
    fn test_unparseable_inputs() {
        let p = DateFormat::default();
        assert!(matches!(
            format_date(&json!("April 15"), &p),
            Err(FormatError::UnparseableDate { .. })
        ));
        assert!(format_date(&json!(20240415), &p).is_err());
        assert!(format_date(&json!("2024-02-30"), &p).is_err());
    }

    #[test]
    fn test_invalid_output_pattern() {
        let p = params(DateInput::Iso8601, DateOutput::Pattern("%Q".into()));
        assert!(matches!(
            format_date(&json!("2024-01-01"), &p),
            Err(FormatError::InvalidPattern(_))
        ));
    }
}
