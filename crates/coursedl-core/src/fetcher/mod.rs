//! Material fetcher: one blocking HTTP GET per material, streamed to its destination.
//!
//! Uses a single curl `Easy` handle for the whole batch. Redirects are followed.
//! Only bodies of 2xx responses reach the disk; the destination file is created
//! on the first body chunk, so error responses leave nothing behind.

mod error;
mod outcome;
mod sink;

use anyhow::Result;
use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::{Course, Material};
use crate::config::FetchConfig;
use crate::naming;

pub use error::FetchError;
pub use outcome::MaterialOutcome;

use sink::FileSink;

pub struct Fetcher {
    easy: curl::easy::Easy,
    disallowed: Vec<char>,
}

impl Fetcher {
    /// Builds a fetcher with the timeouts, user agent and naming rules from `config`.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut easy = curl::easy::Easy::new();
        easy.follow_location(true)?;
        easy.max_redirections(30)?;
        if let Some(t) = config.timeout() {
            easy.timeout(t)?;
        }
        if let Some(t) = config.connect_timeout() {
            easy.connect_timeout(t)?;
        }
        if let Some(ua) = config.user_agent.as_deref() {
            easy.useragent(ua)?;
        }
        Ok(Self {
            easy,
            disallowed: config.disallowed(),
        })
    }

    /// `base / sanitize(course.title)`.
    pub fn course_dir(&self, base: &Path, course: &Course) -> PathBuf {
        naming::course_dir(base, &course.title, &self.disallowed)
    }

    /// Creates the course directory (and ancestors). Existing is fine.
    pub fn ensure_course_dir(&self, base: &Path, course: &Course) -> io::Result<PathBuf> {
        let dir = self.course_dir(base, course);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Processes one material. Never fails: errors are returned as
    /// [`MaterialOutcome::Failed`].
    pub fn fetch_material(
        &mut self,
        course: &Course,
        material: &Material,
        base: &Path,
    ) -> MaterialOutcome {
        // The batch reports a course directory failure once per course; the
        // material itself then fails on write.
        let dir = match self.ensure_course_dir(base, course) {
            Ok(dir) => dir,
            Err(e) => {
                let dir = self.course_dir(base, course);
                tracing::debug!(path = %dir.display(), "course directory still missing: {}", e);
                dir
            }
        };

        if naming::is_placeholder(&material.link, &course.uuid) {
            tracing::debug!(
                file_name = %material.file_name,
                link = %material.link,
                "skipping placeholder"
            );
            return MaterialOutcome::Skipped {
                file_name: material.file_name.clone(),
                link: material.link.clone(),
            };
        }

        let path = naming::destination_path(&dir, &material.file_name, &self.disallowed);
        match self.download(&material.link, &path) {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), bytes, "download completed");
                MaterialOutcome::Completed {
                    url: material.link.clone(),
                    path,
                    bytes,
                }
            }
            Err(error) => {
                tracing::warn!(url = %material.link, "download failed: {}", error);
                MaterialOutcome::Failed {
                    url: material.link.clone(),
                    path,
                    error,
                }
            }
        }
    }

    /// GETs `url` and streams the body into `dest`, overwriting it.
    /// Returns the number of bytes written.
    pub fn download(&mut self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        if !is_http_url(url) {
            return Err(FetchError::UnsupportedUrl(url.to_string()));
        }
        self.easy.url(url)?;

        let status = Cell::new(0u32);
        let mut sink = FileSink::new(dest);
        let mut storage_error: Option<io::Error> = None;

        let performed = {
            let mut transfer = self.easy.transfer();
            transfer.header_function(|line| {
                if let Some(code) = parse_status_line(line) {
                    status.set(code);
                }
                true
            })?;
            transfer.write_function(|data| {
                // Bodies of non-2xx responses are drained, never written.
                if !is_success(status.get()) {
                    return Ok(data.len());
                }
                match sink.write(data) {
                    Ok(()) => Ok(data.len()),
                    Err(e) => {
                        storage_error = Some(e);
                        Ok(0) // abort transfer
                    }
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = storage_error {
            return Err(FetchError::storage(dest, e));
        }
        performed?;

        let code = self.easy.response_code()?;
        if !is_success(code) {
            return Err(FetchError::Http(code));
        }
        sink.finish().map_err(|e| FetchError::storage(dest, e))
    }
}

fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}

fn is_http_url(url: &str) -> bool {
    url.split_once("://").is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    })
}

/// Status code from a header line such as `HTTP/1.1 404 Not Found`.
fn parse_status_line(line: &[u8]) -> Option<u32> {
    let line = std::str::from_utf8(line).ok()?;
    let rest = line.strip_prefix("HTTP/")?;
    rest.split_whitespace().nth(1)?.parse().ok()
}
