//! File writer implementation

use super::timestamp;
use crate::core::{LogLevel, LogManagerError, LogWriter, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// First line written by [`FileWriter::create`].
pub const START_BANNER: &str = "**************** START *****************";

/// Buffered `timestamp LEVEL text` lines to a file.
///
/// The buffer is flushed whenever the manager's queue drains and when the
/// writer is dropped. Write failures are swallowed.
pub struct FileWriter {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileWriter {
    /// Create or truncate `path` and write the start banner.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| {
            LogManagerError::io_operation("creating log file", path.display().to_string(), e)
        })?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "{} {}", timestamp(), START_BANNER)?;

        Ok(Self {
            path,
            writer: Mutex::new(writer),
        })
    }

    /// Open `path` for appending, creating it if needed. No banner is written.
    pub fn append(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LogManagerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogWriter for FileWriter {
    fn write(&self, level: LogLevel, text: &str) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{} {} {}", timestamp(), level, text);
    }

    fn flush(&self) {
        let _ = self.writer.lock().flush();
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        let _ = self.writer.get_mut().flush();
    }
}
