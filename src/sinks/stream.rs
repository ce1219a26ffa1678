//! Caller-supplied output streams

use std::fmt;
use std::io::{self, Write};

/// An already-open writable stream owned by the caller, such as stdout.
///
/// The logger never closes these; it only writes and flushes.
pub struct StreamTarget {
    writer: Box<dyn Write + Send>,
}

impl StreamTarget {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write one full record line and flush it before returning.
    pub(crate) fn deliver(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for StreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamTarget").finish_non_exhaustive()
    }
}
