use crate::value::stringify;
use serde_json::Value;
use taxform_annotation::MaskFormat;

/// Applies a placeholder mask such as `XXX-XX-####`.
///
/// Dashes and spaces are stripped from the source first. Each `#` or `X`
/// consumes the next source character; placeholders left over once the
/// source runs out are dropped, while literals are always copied.
pub fn format_mask(value: &Value, params: &MaskFormat) -> String {
    let source = stringify(value);
    let mut digits = source.chars().filter(|c| *c != '-' && *c != ' ');

    let mut out = String::with_capacity(params.pattern.len());
    for slot in params.pattern.chars() {
        match slot {
            '#' | 'X' => {
                if let Some(c) = digits.next() {
                    out.push(c);
                }
            }
            literal => out.push(literal),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mask(pattern: &str) -> MaskFormat {
        MaskFormat {
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn test_ssn_mask() {
        assert_eq!(format_mask(&json!("123456789"), &mask("XXX-XX-####")), "123-45-6789");
        assert_eq!(format_mask(&json!("123-45-6789"), &mask("XXX-XX-####")), "123-45-6789");
        assert_eq!(format_mask(&json!(123456789), &mask("XXX-XX-####")), "123-45-6789");
    }

    #[test]
    fn test_short_source_drops_placeholders() {
        assert_eq!(format_mask(&json!("1234567"), &mask("XXX-XX-####")), "123-45-67");
        assert_eq!(format_mask(&json!("12"), &mask("XXX-XX-####")), "12--");
    }

    #[test]
    fn test_surplus_source_is_ignored() {
        assert_eq!(format_mask(&json!("12 3456 7890"), &mask("##-#######")), "12-3456789");
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(format_mask(&json!("123"), &mask("")), "");
    }
}
