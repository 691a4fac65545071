//! A `nom`-based parser for value reference paths.
//!
//! The grammar is deliberately small: the path is split on `.`, and each
//! piece is a base key optionally followed by a single `[index]` subscript.
//! Keys may contain any character except `.` and `[`, since data documents
//! routinely use keys such as `1099_int` or `schedule-c`.
use crate::ast::{Path, PathSegment};
use crate::error::JPathError;
use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::{char, i64 as nom_i64},
    combinator::{all_consuming, opt},
    sequence::{delimited, pair},
};

// --- Main Public Parser ---

pub fn parse_path(input: &str) -> Result<Path, JPathError> {
    if input.is_empty() {
        return Err(JPathError::EmptyPath);
    }

    let mut segments = Vec::new();
    for raw in input.split('.') {
        let malformed = || JPathError::MalformedSegment {
            path: input.to_string(),
            segment: raw.to_string(),
        };
        let (_, (key, index)) = all_consuming(segment).parse(raw).map_err(|_| malformed())?;
        segments.push(PathSegment::Key(key.to_string()));
        if let Some(index) = index {
            segments.push(PathSegment::Index(index));
        }
    }
    Ok(Path { segments })
}

// --- Combinators ---

fn base_key(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '[').parse(input)
}

fn subscript(input: &str) -> IResult<&str, i64> {
    delimited(char('['), nom_i64, char(']')).parse(input)
}

fn segment(input: &str) -> IResult<&str, (&str, Option<i64>)> {
    pair(base_key, opt(subscript)).parse(input)
}
