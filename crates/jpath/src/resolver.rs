//! Walks a parsed [`Path`] over a `serde_json::Value` data document.
use crate::ast::{Path, PathSegment};
use crate::error::ResolveError;
use crate::parser::parse_path;
use serde_json::Value;

/// Selects the value a path points at, reporting why nothing was found.
///
/// An explicit `null` anywhere along the way counts as "not found", so a
/// successful lookup never yields `Value::Null`.
pub fn select<'a>(root: &'a Value, path: &Path) -> Result<&'a Value, ResolveError> {
    let mut current = root;
    let mut walked = Path {
        segments: Vec::with_capacity(path.segments.len()),
    };

    for segment in &path.segments {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => map
                .get(key)
                .ok_or_else(|| ResolveError::MissingKey { key: key.clone() })?,
            (PathSegment::Key(key), _) => {
                return Err(ResolveError::NotAnObject { key: key.clone() });
            }
            (PathSegment::Index(index), Value::Array(items)) => element(items, *index)?,
            (PathSegment::Index(index), _) => {
                return Err(ResolveError::NotAnArray { index: *index });
            }
        };
        walked.segments.push(segment.clone());
        if current.is_null() {
            return Err(ResolveError::NullValue { at: walked.to_string() });
        }
    }
    Ok(current)
}

/// The element at `index`, counting from the end when negative.
fn element(items: &[Value], index: i64) -> Result<&Value, ResolveError> {
    let len = items.len();
    let position = if index < 0 {
        usize::try_from(index.unsigned_abs())
            .ok()
            .and_then(|back| len.checked_sub(back))
    } else {
        usize::try_from(index).ok()
    };
    position
        .and_then(|i| items.get(i))
        .ok_or(ResolveError::IndexOutOfRange { index, len })
}

/// Parses `path` and selects it from `root`.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Result<&'a Value, ResolveError> {
    let parsed = parse_path(path)?;
    select(root, &parsed)
}

/// Like [`resolve`], but borrows instead of cloning.
pub fn resolve_ref<'a>(root: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    match lookup(root, path) {
        Ok(value) => value,
        Err(e) => {
            log::trace!("Path '{}' fell back to default: {}", path, e);
            default
        }
    }
}

/// Resolves `path` against `root`, returning `default` on any miss.
///
/// Missing keys, type mismatches, out-of-range indexes, nulls and malformed
/// paths all resolve to the default; this never fails.
pub fn resolve(root: &Value, path: &str, default: &Value) -> Value {
    resolve_ref(root, path, default).clone()
}
