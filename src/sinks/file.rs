//! File-backed delivery with reopen support for external rotation

use crate::core::error::{LoggerError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// A log file opened in append mode and owned by the logger.
#[derive(Debug)]
pub struct FileTarget {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileTarget {
    /// Open `path` for appending, creating it and any missing parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns the underlying OS failure if the directory or file cannot
    /// be created or opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| LoggerError::create_directory(parent.display().to_string(), e))?;
        }

        let file = Self::open_append(&path)?;
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    fn open_append(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Whether the file currently holds no data.
    pub fn is_empty(&self) -> bool {
        self.writer
            .as_ref()
            .and_then(|w| w.get_ref().metadata().ok())
            .is_some_and(|meta| meta.len() == 0)
    }

    /// Write one full record line and flush it to the OS.
    pub(crate) fn deliver(&mut self, line: &str) -> io::Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "log file is closed"))?;
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }

    /// Close the current handle and open the same path again.
    ///
    /// On failure the target is left closed.
    pub(crate) fn reopen(&mut self) -> Result<()> {
        self.close()?;
        let file = Self::open_append(&self.path)?;
        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    /// Flush and drop the handle. Closing twice is a no-op.
    pub(crate) fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => writer.flush().map_err(LoggerError::from),
            None => Ok(()),
        }
    }
}
