//! Course catalog for academic advising.
//!
//! Loads course records (`NUMBER, TITLE[, PREREQ]*`) from a delimited text
//! file into a chained hash index keyed by canonical course number, and
//! answers sorted-listing and single-course queries.

pub mod catalog;
pub mod config;
pub mod course;
pub mod error;
pub mod index;
pub mod loader;
pub mod menu;
pub mod session;

pub use config::CatalogConfig;
pub use course::{canonicalize, Course, CourseRow};
pub use error::{CatalogError, Result};
pub use index::{CourseIndex, IndexStats};
pub use loader::{Diagnostic, DiagnosticKind, LoadReport};
pub use session::CatalogSession;
