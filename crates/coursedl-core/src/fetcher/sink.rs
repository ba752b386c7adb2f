//! Destination file opened lazily on the first body chunk.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub(super) struct FileSink<'a> {
    path: &'a Path,
    file: Option<BufWriter<File>>,
    written: u64,
}

impl<'a> FileSink<'a> {
    pub(super) fn new(path: &'a Path) -> Self {
        Self {
            path,
            file: None,
            written: 0,
        }
    }

    pub(super) fn write(&mut self, data: &[u8]) -> io::Result<()> {
        let file = match self.file.take() {
            Some(f) => f,
            None => open_destination(self.path)?,
        };
        let file = self.file.insert(file);
        file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Flushes the file, creating it if the body was empty. Returns bytes written.
    pub(super) fn finish(mut self) -> io::Result<u64> {
        let mut file = match self.file.take() {
            Some(f) => f,
            None => open_destination(self.path)?,
        };
        file.flush()?;
        Ok(self.written)
    }
}

/// Creates missing ancestors and truncates any existing file.
fn open_destination(path: &Path) -> io::Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}
