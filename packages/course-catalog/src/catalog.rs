//! Listing and detail queries over a loaded index.

use crate::course::{canonicalize, Course, CourseRow};
use crate::error::{CatalogError, Result};
use crate::index::CourseIndex;

/// Every course, sorted ascending by canonical course number.
///
/// Empty index gives `EmptyCatalog` rather than an empty list.
pub fn sorted_courses(index: &CourseIndex) -> Result<Vec<Course>> {
    if index.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut courses = index.all_courses();
    // Canonical numbers are unique in the index, so the order is total.
    courses.sort_by_cached_key(Course::key);
    Ok(courses)
}

/// `number, title` rows in course-number order.
pub fn list_all(index: &CourseIndex) -> Result<Vec<CourseRow>> {
    Ok(sorted_courses(index)?.iter().map(Course::row).collect())
}

/// Look up one course by an unnormalized query string.
///
/// Returns a copy so the result stays valid across a reload.
pub fn detail(index: &CourseIndex, query: &str) -> Result<Course> {
    if index.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    index
        .search(query)
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(canonicalize(query)))
}
