//! Result of processing one material.

use std::path::PathBuf;

use super::FetchError;

/// Terminal state of one material: `skipped`, `completed` or `failed`.
#[derive(Debug)]
pub enum MaterialOutcome {
    /// Placeholder entry (empty link or folder link); nothing was requested.
    Skipped { file_name: String, link: String },
    /// The body was written to `path`.
    Completed { url: String, path: PathBuf, bytes: u64 },
    /// The request or the write failed. `path` may hold a truncated file if the
    /// failure happened mid-stream.
    Failed {
        url: String,
        path: PathBuf,
        error: FetchError,
    },
}

impl MaterialOutcome {
    /// True if a network request was made (completed or failed).
    pub fn was_attempted(&self) -> bool {
        !matches!(self, MaterialOutcome::Skipped { .. })
    }
}
