//! CatalogSession - state owned by one advising session
//!
//! Holds the course index, whether a load has succeeded, and the report of
//! the last completed load. The menu and the one-shot commands drive the
//! catalog only through this type.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::config::CatalogConfig;
use crate::course::{Course, CourseRow};
use crate::error::{CatalogError, Result};
use crate::index::CourseIndex;
use crate::loader::{self, LoadReport};

/// Session state for one user of the catalog
pub struct CatalogSession {
    /// The course index, owned exclusively by this session
    index: CourseIndex,
    /// Field separator for course files
    delimiter: char,
    /// Set by a successful load, reset by a failed one
    loaded: bool,
    /// Report of the last load that read its source
    last_report: Option<LoadReport>,
}

impl CatalogSession {
    /// Create an empty session with default settings
    pub fn new() -> Self {
        Self {
            index: CourseIndex::new(),
            delimiter: CatalogConfig::default().delimiter,
            loaded: false,
            last_report: None,
        }
    }

    /// Create an empty session from a validated config
    pub fn with_config(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            index: CourseIndex::with_buckets(config.bucket_count)?,
            delimiter: config.delimiter,
            loaded: false,
            last_report: None,
        })
    }

    /// Load a course file, replacing the current data.
    ///
    /// Returns `true` if the file was read, even if some lines were skipped;
    /// see `last_report()` for those. On `false` the session no longer
    /// answers queries until a later load succeeds.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        self.try_load(path.as_ref()).is_ok()
    }

    /// Like `load`, but hands back the report or the error.
    pub fn try_load(&mut self, path: &Path) -> Result<&LoadReport> {
        let outcome = loader::load_path(path, &mut self.index, self.delimiter);
        self.finish_load(outcome)
    }

    /// Replace the current data with records read from `reader`.
    ///
    /// `source` labels the report. Unlike a path, a reader is always open,
    /// so the index is cleared before the first line is read.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, source: &Path) -> Result<&LoadReport> {
        self.index.clear();
        let outcome = loader::load_from_reader(reader, source, &mut self.index, self.delimiter);
        self.finish_load(outcome)
    }

    fn finish_load(&mut self, outcome: Result<LoadReport>) -> Result<&LoadReport> {
        match outcome {
            Ok(report) => {
                self.loaded = true;
                Ok(&*self.last_report.insert(report))
            }
            Err(err) => {
                self.loaded = false;
                // A read failure happens after the clear: the index now holds
                // part of the new source, so the old report no longer describes it.
                if matches!(err, CatalogError::Read { .. }) {
                    self.last_report = None;
                }
                Err(err)
            }
        }
    }

    /// Sorted `number, title` rows of every loaded course
    pub fn list_all(&self) -> Result<Vec<CourseRow>> {
        self.require_loaded()?;
        catalog::list_all(&self.index)
    }

    /// Sorted full course records
    pub fn sorted_courses(&self) -> Result<Vec<Course>> {
        self.require_loaded()?;
        catalog::sorted_courses(&self.index)
    }

    /// Look up one course; the query is normalized before lookup
    pub fn detail(&self, query: &str) -> Result<Course> {
        self.require_loaded()?;
        catalog::detail(&self.index, query)
    }

    /// Check if data has been loaded successfully
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn last_report(&self) -> Option<&LoadReport> {
        self.last_report.as_ref()
    }

    /// Path of the last file that was read
    pub fn source(&self) -> Option<&PathBuf> {
        self.last_report.as_ref().map(|r| &r.source)
    }

    pub fn index(&self) -> &CourseIndex {
        &self.index
    }

    fn require_loaded(&self) -> Result<()> {
        if self.loaded {
            Ok(())
        } else {
            Err(CatalogError::EmptyCatalog)
        }
    }
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}
