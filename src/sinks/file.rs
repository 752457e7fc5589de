//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends lines to a file.
///
/// Writes go straight to the file without buffering, one `write_all` per
/// line under the sink's lock.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    name: String,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// [`LoggerError::IoError`] if the file cannot be opened.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            name: format!("file:{}", path.display()),
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, line: &[u8]) -> Result<()> {
        self.file
            .lock()
            .write_all(line)
            .map_err(|e| LoggerError::sink_write(&self.name, e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Err(e) = self.file.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush {}: {}", self.name, e);
        }
    }
}
