//! Error types for the course catalog

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot open file '{}': {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error in '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {detail}")]
    MalformedRecord { line: usize, detail: String },

    #[error("Duplicate course '{number}'")]
    DuplicateKey { number: String },

    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("No courses loaded")]
    EmptyCatalog,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config file error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Stable machine-readable code for this condition
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::SourceUnreadable { .. } => "SOURCE_UNREADABLE",
            CatalogError::Read { .. } => "READ_FAILED",
            CatalogError::MalformedRecord { .. } => "MALFORMED_RECORD",
            CatalogError::DuplicateKey { .. } => "DUPLICATE_KEY",
            CatalogError::NotFound(_) => "NOT_FOUND",
            CatalogError::EmptyCatalog => "EMPTY_CATALOG",
            CatalogError::InvalidConfig(_) | CatalogError::Config(_) => "INVALID_CONFIG",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Normal query outcomes, as opposed to failures of the tool itself.
    pub fn is_query_miss(&self) -> bool {
        matches!(self, CatalogError::NotFound(_) | CatalogError::EmptyCatalog)
    }
}
