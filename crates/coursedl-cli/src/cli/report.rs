//! Console progress lines for a batch run.

use coursedl_core::batch::{BatchEvent, BatchReport};
use coursedl_core::naming::sanitize_segment;
use coursedl_core::MaterialOutcome;

pub struct ConsoleReporter {
    disallowed: Vec<char>,
}

impl ConsoleReporter {
    pub fn new(disallowed: Vec<char>) -> Self {
        Self { disallowed }
    }

    pub fn on_event(&mut self, event: BatchEvent<'_>) {
        if let Some(line) = self.line_for(&event) {
            println!("{line}");
        }
    }

    /// Text printed for one event; `None` for events that stay silent (skips).
    pub fn line_for(&self, event: &BatchEvent<'_>) -> Option<String> {
        match event {
            BatchEvent::CourseStarted { course, .. } => Some(format!(
                "\nProcessing course: {}",
                sanitize_segment(&course.title, &self.disallowed)
            )),
            BatchEvent::CourseDirFailed { dir, error, .. } => Some(format!(
                "Error creating directory {}: {}",
                dir.display(),
                error
            )),
            BatchEvent::Material { outcome, .. } => match outcome {
                MaterialOutcome::Skipped { .. } => None,
                MaterialOutcome::Completed { path, .. } => {
                    Some(format!("Downloaded: {}", path.display()))
                }
                MaterialOutcome::Failed { url, error, .. } => {
                    Some(format!("Error downloading {url}: {error}"))
                }
            },
        }
    }

    pub fn print_summary(&self, report: &BatchReport) {
        println!("\n{}", summary_line(report));
    }
}

pub fn summary_line(report: &BatchReport) -> String {
    format!(
        "Download process completed! {} downloaded, {} skipped, {} failed",
        report.completed,
        report.skipped,
        report.failed.len()
    )
}
