//! Course file loader.
//!
//! One pass over a delimited text source, feeding every well-formed record
//! into a [`CourseIndex`]. Bad lines and duplicate course numbers are
//! skipped and reported as [`Diagnostic`]s; they never abort the pass.
//!
//! The index is cleared only once the source has been opened, so a bad path
//! never wipes a good dataset.

pub mod record;

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::index::CourseIndex;

pub use record::{parse_record, split_fields};

/// Kind of a per-line load problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Fewer than two fields, or a blank number/title. Line skipped.
    MalformedRecord,
    /// Course number already loaded. Later record skipped.
    DuplicateKey,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedRecord => "malformed_record",
            DiagnosticKind::DuplicateKey => "duplicate_key",
        }
    }
}

/// A skipped record: what went wrong and on which 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub detail: String,
}

impl Diagnostic {
    /// Convert a per-record error into a diagnostic. Other errors are not
    /// per-record and are handed back.
    fn from_error(err: CatalogError, line: usize) -> std::result::Result<Self, CatalogError> {
        match err {
            CatalogError::MalformedRecord { line, detail } => Ok(Self {
                kind: DiagnosticKind::MalformedRecord,
                line,
                detail,
            }),
            CatalogError::DuplicateKey { number } => Ok(Self {
                kind: DiagnosticKind::DuplicateKey,
                line,
                detail: format!("duplicate course '{}'", number),
            }),
            other => Err(other),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.detail, self.kind.as_str())
    }
}

/// Outcome of a completed load pass.
///
/// A report exists only if the source was read to the end; how many lines
/// were bad is in `diagnostics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub source: PathBuf,
    /// Lines consumed, blank lines included.
    pub lines_read: usize,
    /// Records stored in the index.
    pub accepted: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    fn new(source: PathBuf) -> Self {
        Self {
            source,
            lines_read: 0,
            accepted: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// True when every non-blank line was stored.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Open `path`, clear `index`, and load every record from the file.
///
/// Fails with `SourceUnreadable` (index untouched) if the file cannot be
/// opened, or with `Read` if reading breaks off midway (index keeps what was
/// loaded up to that point).
pub fn load_path(path: &Path, index: &mut CourseIndex, delimiter: char) -> Result<LoadReport> {
    let file = File::open(path).map_err(|source| {
        tracing::error!("Cannot open file '{}': {}", path.display(), source);
        CatalogError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    index.clear();
    let report = load_from_reader(BufReader::new(file), path, index, delimiter)?;

    let stats = index.stats();
    tracing::info!(
        source = %path.display(),
        courses = report.accepted,
        skipped = report.diagnostics.len(),
        occupied_buckets = stats.occupied_buckets,
        longest_chain = stats.longest_chain,
        "Courses loaded"
    );
    Ok(report)
}

/// Load records from an already-open reader into `index` without clearing it.
///
/// `source` only labels the report and errors.
pub fn load_from_reader<R: BufRead>(
    mut reader: R,
    source: &Path,
    index: &mut CourseIndex,
    delimiter: char,
) -> Result<LoadReport> {
    let mut report = LoadReport::new(source.to_path_buf());
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source_err| CatalogError::Read {
                path: source.to_path_buf(),
                source: source_err,
            })?;
        if read == 0 {
            break;
        }
        report.lines_read += 1;
        let line_number = report.lines_read;

        // Catalog files are not guaranteed UTF-8; bad bytes become U+FFFD.
        let text = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = text {
            tracing::warn!("line {}: invalid UTF-8 replaced", line_number);
        }

        let line = text.trim();
        if line.is_empty() {
            continue;
        }

        let outcome = record::parse_record(line, line_number, delimiter)
            .and_then(|course| index.insert(course));

        match outcome {
            Ok(()) => report.accepted += 1,
            Err(err) => {
                let diagnostic = Diagnostic::from_error(err, line_number)?;
                if diagnostic.kind == DiagnosticKind::MalformedRecord {
                    tracing::warn!("line {}: skipping invalid line: {}", line_number, diagnostic.detail);
                }
                report.diagnostics.push(diagnostic);
            }
        }
    }

    Ok(report)
}
