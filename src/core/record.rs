//! Bounded record formatting
//!
//! A record is laid out as
//!
//! ```text
//! <mon> <day> <HH:MM:SS>.<mmm> [<severity>] <tag>(): <body>\n
//! ```
//!
//! and is built exactly once per emitted message, then shared by every
//! sink in the dispatch. The formatter enforces its capacity while
//! writing: bodies that do not fit are cut at a character boundary and
//! end with [`TRUNCATED_MARKER`].

use super::severity::Severity;
use super::timestamp::Timestamp;
use std::ffi::CString;
use std::fmt::{self, Write};

/// Default record capacity in bytes
pub const DEFAULT_RECORD_CAPACITY: usize = 10 * 1024;

/// Smallest capacity a formatter accepts; keeps room for the prefix and marker
pub const MIN_RECORD_CAPACITY: usize = 128;

/// Text appended to a body that was cut short
pub const TRUNCATED_MARKER: &str = "[...truncated]";

/// Builds [`FormattedRecord`]s no longer than a fixed capacity.
///
/// The capacity covers the whole line, its newline and a trailing NUL, so
/// `record.line().len() < capacity` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFormatter {
    capacity: usize,
}

impl RecordFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capacity: DEFAULT_RECORD_CAPACITY,
        }
    }

    /// Formatter with a custom capacity, clamped up to [`MIN_RECORD_CAPACITY`].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(MIN_RECORD_CAPACITY),
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Format a record stamped with the current wall-clock time.
    pub fn format(
        &self,
        severity: Severity,
        tag: Option<&str>,
        args: fmt::Arguments<'_>,
    ) -> FormattedRecord {
        self.format_at(Timestamp::now(), severity, tag, args)
    }

    /// Format a record with an explicit timestamp.
    pub fn format_at(
        &self,
        timestamp: Timestamp,
        severity: Severity,
        tag: Option<&str>,
        args: fmt::Arguments<'_>,
    ) -> FormattedRecord {
        // newline + NUL
        let limit = self.capacity - 2;
        let mut out = BoundedWriter::new(limit);

        let _ = write!(out, "{} [{}] ", timestamp, severity);
        let message_start = out.buf.len();

        if let Some(tag) = tag {
            let _ = write!(out, "{}(): ", tag);
        }
        // A Display impl returning an error just ends the body early.
        let _ = out.write_fmt(args);

        let truncated = out.overflowed;
        let mut line = out.buf;
        if truncated {
            let mut cut = limit - TRUNCATED_MARKER.len();
            while !line.is_char_boundary(cut) {
                cut -= 1;
            }
            line.truncate(cut);
            line.push_str(TRUNCATED_MARKER);
        }
        line.push('\n');

        FormattedRecord {
            severity,
            line,
            message_start,
            truncated,
        }
    }
}

impl Default for RecordFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// One formatted record, shared by every sink in a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord {
    severity: Severity,
    line: String,
    message_start: usize,
    truncated: bool,
}

impl FormattedRecord {
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The full line, including the trailing newline.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Everything after the `<timestamp> [<severity>] ` prefix, without the
    /// newline. This is what the system log and callbacks receive.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.line[self.message_start..self.line.len() - 1]
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// NUL-terminated copy of [`message`](Self::message) for C APIs.
    pub fn message_c_string(&self) -> CString {
        // Interior NULs are escaped while formatting.
        CString::new(self.message()).unwrap_or_default()
    }
}

/// `fmt::Write` sink that escapes control characters and refuses to grow
/// past `limit` bytes.
struct BoundedWriter {
    buf: String,
    limit: usize,
    overflowed: bool,
}

impl BoundedWriter {
    fn new(limit: usize) -> Self {
        Self {
            buf: String::with_capacity(limit.min(256)),
            limit,
            overflowed: false,
        }
    }
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.overflowed {
            return Ok(());
        }
        for c in s.chars() {
            let mut utf8 = [0u8; 4];
            let piece: &str = match c {
                '\n' => "\\n",
                '\r' => "\\r",
                '\t' => "\\t",
                '\0' => "\\0",
                _ => c.encode_utf8(&mut utf8),
            };
            if self.buf.len() + piece.len() > self.limit {
                self.overflowed = true;
                break;
            }
            self.buf.push_str(piece);
        }
        Ok(())
    }
}
