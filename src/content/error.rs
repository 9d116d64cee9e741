//! Content loading and validation errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::Issue;

/// One document field that failed its collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{collection}] {file}: `{path}` expected {expected}, found {actual}")]
pub struct SchemaValidationError {
    pub collection: String,
    /// Source file, relative to the content directory when known.
    pub file: PathBuf,
    pub path: String,
    pub expected: String,
    pub actual: String,
}

impl SchemaValidationError {
    pub fn from_issue(collection: &str, file: impl Into<PathBuf>, issue: Issue) -> Self {
        Self {
            collection: collection.to_string(),
            file: file.into(),
            path: issue.display_path().to_string(),
            expected: issue.expected,
            actual: issue.actual,
        }
    }
}

/// Failure to load or validate a single content file.
///
/// Always scoped to one file; callers keep processing the rest.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("cannot parse `{file}`: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("unknown collection `{0}`")]
    UnknownCollection(String),

    #[error("`{file}` does not match the `{collection}` schema")]
    Invalid {
        collection: String,
        file: PathBuf,
        errors: Vec<SchemaValidationError>,
    },
}

impl ContentError {
    /// Schema violations carried by this error (empty for IO/parse errors).
    pub fn violations(&self) -> &[SchemaValidationError] {
        match self {
            Self::Invalid { errors, .. } => errors,
            _ => &[],
        }
    }
}
