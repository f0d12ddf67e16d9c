use std::path::PathBuf;
use thiserror::Error;

use crate::pattern::PatternIssue;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write catalog file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid pattern {id}: {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: PatternIssue,
    },

    #[error("Duplicate pattern id: {id}")]
    DuplicatePattern { id: String },
}
