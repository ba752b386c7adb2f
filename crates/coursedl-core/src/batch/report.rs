//! Aggregated result of one batch run.

use std::path::PathBuf;

use crate::fetcher::{FetchError, MaterialOutcome};

/// One material that could not be downloaded.
#[derive(Debug)]
pub struct FailedMaterial {
    pub course_title: String,
    pub url: String,
    pub path: PathBuf,
    pub error: FetchError,
}

/// Counts and failures for a whole catalog.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Courses visited (duplicates counted separately).
    pub courses: usize,
    pub completed: usize,
    pub skipped: usize,
    pub failed: Vec<FailedMaterial>,
    /// Total bytes written by completed materials.
    pub bytes: u64,
}

impl BatchReport {
    /// True if no material failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.completed + self.failed.len()
    }

    pub(super) fn record(&mut self, course_title: &str, outcome: MaterialOutcome) {
        match outcome {
            MaterialOutcome::Skipped { .. } => self.skipped += 1,
            MaterialOutcome::Completed { bytes, .. } => {
                self.completed += 1;
                self.bytes += bytes;
            }
            MaterialOutcome::Failed { url, path, error } => self.failed.push(FailedMaterial {
                course_title: course_title.to_string(),
                url,
                path,
                error,
            }),
        }
    }
}
