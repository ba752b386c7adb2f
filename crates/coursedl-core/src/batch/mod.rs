//! Batch runner: walks the catalog in document order and fetches every material.
//!
//! Strictly sequential. Each attempted download is followed by a fixed pause to
//! go easy on the remote server; skipped placeholders are not. A failing
//! material is recorded and the walk continues.

mod report;

use std::io;
use std::path::Path;
use std::time::Duration;

use crate::catalog::{Catalog, Course};
use crate::fetcher::{Fetcher, MaterialOutcome};

pub use report::{BatchReport, FailedMaterial};

/// Progress notifications, delivered in document order.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// A course is about to be processed; `dir` is its (sanitized) directory.
    CourseStarted { course: &'a Course, dir: &'a Path },
    /// The course directory could not be created; its materials will likely fail.
    CourseDirFailed {
        course: &'a Course,
        dir: &'a Path,
        error: &'a io::Error,
    },
    /// A material reached its terminal state.
    Material {
        course: &'a Course,
        outcome: &'a MaterialOutcome,
    },
}

/// Processes every material of `catalog` into `output_dir`.
///
/// Course directories are created even for courses without downloadable
/// materials. `delay` is slept after every attempted download.
pub fn run_catalog<F>(
    catalog: &Catalog,
    output_dir: &Path,
    fetcher: &mut Fetcher,
    delay: Duration,
    mut on_event: F,
) -> BatchReport
where
    F: FnMut(BatchEvent<'_>),
{
    let mut report = BatchReport::default();

    for course in &catalog.courses {
        report.courses += 1;
        let dir = fetcher.course_dir(output_dir, course);
        on_event(BatchEvent::CourseStarted {
            course,
            dir: &dir,
        });
        if let Err(error) = fetcher.ensure_course_dir(output_dir, course) {
            tracing::warn!(path = %dir.display(), "could not create course directory: {}", error);
            on_event(BatchEvent::CourseDirFailed {
                course,
                dir: &dir,
                error: &error,
            });
        }

        for material in &course.materials {
            let outcome = fetcher.fetch_material(course, material, output_dir);
            on_event(BatchEvent::Material {
                course,
                outcome: &outcome,
            });
            let attempted = outcome.was_attempted();
            report.record(&course.title, outcome);
            if attempted && !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
    }

    tracing::info!(
        courses = report.courses,
        completed = report.completed,
        skipped = report.skipped,
        failed = report.failed.len(),
        bytes = report.bytes,
        "batch finished"
    );
    report
}
