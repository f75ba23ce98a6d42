//! Single-line record parsing.
//!
//! Line format: `NUMBER, TITLE[, PREREQ]*` with every field trimmed.

use crate::course::Course;
use crate::error::{CatalogError, Result};

/// Split a line on `delimiter`, trimming each field. Empty fields are kept.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).map(str::trim).collect()
}

/// Parse one non-blank line into a course.
///
/// `line_number` is 1-based and only used for the error. Fewer than two
/// fields, or a blank number or title, yields `MalformedRecord`. Blank
/// prerequisite fields are dropped.
pub fn parse_record(line: &str, line_number: usize, delimiter: char) -> Result<Course> {
    let fields = split_fields(line, delimiter);

    let (number, title, rest) = match fields.as_slice() {
        [number, title, rest @ ..] => (*number, *title, rest),
        _ => {
            return Err(CatalogError::MalformedRecord {
                line: line_number,
                detail: format!("expected at least 2 fields, found {}", fields.len()),
            })
        }
    };

    if number.is_empty() {
        return Err(CatalogError::MalformedRecord {
            line: line_number,
            detail: "empty course number".into(),
        });
    }
    if title.is_empty() {
        return Err(CatalogError::MalformedRecord {
            line: line_number,
            detail: format!("empty title for course '{}'", number),
        });
    }

    Ok(Course::new(number, title).with_prerequisites(rest.iter().copied()))
}
