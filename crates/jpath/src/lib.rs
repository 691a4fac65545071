//! Dotted/indexed path resolution over JSON data documents.
//!
//! Paths look like `taxpayer.name.first` or `income.wages[0].amount`. A
//! lookup that cannot be satisfied never errors out to the caller of
//! [`resolve`]; it silently yields the supplied default. [`lookup`] is the
//! diagnostic variant that explains why a path missed.

pub mod ast;
pub mod error;
mod parser;
mod resolver;

// --- Public API ---
pub use ast::{Path, PathSegment};
pub use error::{JPathError, ResolveError};
pub use parser::parse_path;
pub use resolver::{lookup, resolve, resolve_ref, select};

impl std::str::FromStr for Path {
    type Err = JPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sample() -> Value {
        json!({
            "taxpayer": { "name": { "first": "John" }, "ssn": "123-45-6789" },
            "income": { "wages": [ { "amount": 50000 }, { "amount": 1200.5 } ] },
            "spouse": null,
            "flags": [true, null]
        })
    }

    #[test]
    fn test_resolve_nested_key() {
        assert_eq!(resolve(&sample(), "taxpayer.name.first", &json!("")), json!("John"));
    }

    #[test]
    fn test_resolve_indexed_segment() {
        let data = sample();
        assert_eq!(resolve(&data, "income.wages[0].amount", &json!(0)), json!(50000));
        assert_eq!(resolve(&data, "income.wages[1].amount", &json!(0)), json!(1200.5));
    }

    #[test]
    fn test_negative_index_counts_from_end() {
        let data = sample();
        assert_eq!(resolve(&data, "income.wages[-1].amount", &json!(0)), json!(1200.5));
        assert_eq!(resolve(&data, "income.wages[-2].amount", &json!(0)), json!(50000));
        assert_eq!(resolve(&data, "income.wages[-3].amount", &json!("n/a")), json!("n/a"));
        assert_eq!(
            lookup(&data, "income.wages[-3]"),
            Err(ResolveError::IndexOutOfRange { index: -3, len: 2 })
        );
    }

    #[test]
    fn test_missing_branch_yields_default() {
        let data = json!({ "income": {} });
        assert_eq!(resolve(&data, "income.wages[0].amount", &json!(0)), json!(0));
    }

    #[test]
    fn test_empty_path_yields_default() {
        assert_eq!(resolve(&sample(), "", &json!("n/a")), json!("n/a"));
    }

    #[test]
    fn test_null_is_treated_as_missing() {
        let data = sample();
        assert_eq!(resolve(&data, "spouse", &json!("none")), json!("none"));
        assert_eq!(resolve(&data, "spouse.name", &json!("none")), json!("none"));
        assert_eq!(resolve(&data, "flags[1]", &json!(false)), json!(false));
        assert!(matches!(
            lookup(&data, "flags[1]"),
            Err(ResolveError::NullValue { at }) if at == "flags[1]"
        ));
    }

    #[test]
    fn test_type_mismatches_yield_default() {
        let data = sample();
        assert_eq!(resolve(&data, "taxpayer[0]", &json!(1)), json!(1));
        assert_eq!(resolve(&data, "income.wages.amount", &json!(1)), json!(1));
        assert_eq!(resolve(&data, "income.wages[9].amount", &json!(1)), json!(1));
        assert_eq!(resolve(&data, "taxpayer.ssn.area", &json!(1)), json!(1));
    }

    #[test]
    fn test_malformed_path_yields_default() {
        assert_eq!(resolve(&sample(), "income.wages[first]", &json!(7)), json!(7));
    }

    #[test]
    fn test_lookup_reports_reason() {
        let data = sample();
        assert_eq!(
            lookup(&data, "income.wages[5]"),
            Err(ResolveError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(
            lookup(&data, "taxpayer.dob"),
            Err(ResolveError::MissingKey { key: "dob".to_string() })
        );
        assert_eq!(lookup(&data, ""), Err(ResolveError::Parse(JPathError::EmptyPath)));
    }

    #[test]
    fn test_resolve_ref_borrows_from_data() {
        let data = sample();
        let default = json!(null);
        let value = resolve_ref(&data, "taxpayer.ssn", &default);
        assert_eq!(value.as_str(), Some("123-45-6789"));
    }

    #[test]
    fn test_path_display_round_trips() {
        let path: Path = "income.wages[0].amount".parse().unwrap();
        assert_eq!(path.to_string(), "income.wages[0].amount");
    }
}
