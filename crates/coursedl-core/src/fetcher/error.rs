//! Per-material download error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why one material could not be downloaded. Reported, never propagated past the batch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The link is not an http(s) URL.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedUrl(String),
    /// Curl reported an error (DNS, connection, timeout, TLS, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// The final response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Creating or writing the destination file failed.
    #[error("write {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(super) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FetchError::Storage {
            path: path.into(),
            source,
        }
    }
}
