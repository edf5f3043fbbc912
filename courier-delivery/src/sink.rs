//! Append-only destinations for delivery log lines

use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;

use crate::error::SinkError;

/// An append-only, line oriented destination
///
/// Implementations must have written `line` by the time `append` returns.
pub trait Sink: Send + Sync {
    ///
    /// Append a single line.
    ///
    /// # Errors
    ///
    /// If the underlying destination could not be written to.
    ///
    fn append(&self, line: &str) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &S {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        (**self).append(line)
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        (**self).append(line)
    }
}

/// Appends lines to a file, creating it if needed
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    ///
    /// Open `path` for appending.
    ///
    /// # Errors
    ///
    /// If the file can neither be opened nor created.
    ///
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        let mut file = self.file.lock();
        writeln!(file, "{line}")?;
        file.flush()?;
        Ok(())
    }
}

/// Keeps lines in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of every line appended so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Sink for MemorySink {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
