//! Typed error definitions for flac_gather.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Per-item copy failures are deliberately not represented here: they are
//! recovered inside the copy loop and surface only as counters in
//! `CopySummary`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("Search root not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Search root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Cannot create destination directory '{path}': {source}")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GatherError {
    /// Stable machine-readable code attached to error logs.
    pub fn code(&self) -> &'static str {
        match self {
            GatherError::PathNotFound(_) => "path_not_found",
            GatherError::NotADirectory(_) => "not_a_directory",
            GatherError::DestinationUnavailable { .. } => "destination_unavailable",
        }
    }
}
