//! Main logger implementation
//!
//! A [`Logger`] owns a [`SinkRegistry`] and dispatches every emitted
//! message to the sinks whose band contains its severity. Delivery is
//! synchronous: `emit` returns only after every eligible sink has been
//! written and flushed, or dropped.

use super::{
    error::Result,
    metrics::LoggerMetrics,
    record::{FormattedRecord, RecordFormatter},
    registry::SinkRegistry,
    severity::{Severity, SeverityBand},
    sink::{Delivery, SinkId, SinkInfo},
};
use crate::sinks::{CallbackTarget, FileTarget, StreamTarget, SyslogBackend, SyslogFacility};
use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Name of the sink created by [`Logger::add_bootstrap_sink`]
pub const BOOTSTRAP_SINK_NAME: &str = "<bootstrap>";
/// Name given to system log sinks
pub const SYSLOG_SINK_NAME: &str = "<syslog>";
/// Name given to callback sinks
pub const CALLBACK_SINK_NAME: &str = "<callback>";

/// Program identity written in file banners and used as the syslog ident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInfo {
    pub name: String,
    pub version: String,
}

impl ProgramInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ProgramInfo {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

pub struct Logger {
    pub(crate) registry: SinkRegistry,
    pub(crate) formatter: RecordFormatter,
    pub(crate) program: ProgramInfo,
    pub(crate) metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            ProgramInfo::default(),
            RecordFormatter::new(),
            SyslogFacility::platform(),
        )
    }

    fn with_parts(
        program: ProgramInfo,
        formatter: RecordFormatter,
        syslog: SyslogFacility,
    ) -> Self {
        Self {
            registry: SinkRegistry::new(syslog),
            formatter,
            program,
            metrics: LoggerMetrics::new(),
        }
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Send records in `[min, max]` to a stream the caller owns.
    ///
    /// # Errors
    ///
    /// Fails if `min` is more severe than `max`.
    pub fn add_stream_sink<W>(
        &mut self,
        min: Severity,
        max: Severity,
        name: &str,
        stream: W,
    ) -> Result<SinkId>
    where
        W: Write + Send + 'static,
    {
        let band = SeverityBand::new(min, max)?;
        Ok(self
            .registry
            .insert(name, band, Delivery::Stream(StreamTarget::new(stream))))
    }

    /// Append records in `[min, max]` to the file at `path`.
    ///
    /// A banner line is written as soon as the file is opened.
    ///
    /// # Errors
    ///
    /// Fails with the OS reason if the file cannot be opened; nothing is
    /// registered in that case.
    pub fn add_file_sink<P: AsRef<Path>>(
        &mut self,
        min: Severity,
        max: Severity,
        path: P,
    ) -> Result<SinkId> {
        let band = SeverityBand::new(min, max)?;
        let path = path.as_ref();
        let mut file = FileTarget::open(path)?;

        let banner = self.banner(file.is_empty());
        // Banner failures surface on the first real write.
        let _ = file.deliver(banner.line());

        Ok(self
            .registry
            .insert(path.display().to_string(), band, Delivery::File(file)))
    }

    /// Send records in `[min, max]` to the system log.
    ///
    /// The connection is shared with every other syslog sink using the same
    /// facility, in this logger or any other, and is opened with this
    /// logger's program name.
    ///
    /// # Errors
    ///
    /// Fails if no system log backend is available.
    pub fn add_syslog_sink(&mut self, min: Severity, max: Severity) -> Result<SinkId> {
        let band = SeverityBand::new(min, max)?;
        self.registry.syslog().acquire(&self.program.name)?;
        Ok(self.registry.insert(SYSLOG_SINK_NAME, band, Delivery::Syslog))
    }

    /// Pass records in `[min, max]` to `callback`.
    ///
    /// # Errors
    ///
    /// Fails if `min` is more severe than `max`.
    pub fn add_callback_sink<F>(
        &mut self,
        min: Severity,
        max: Severity,
        callback: F,
    ) -> Result<SinkId>
    where
        F: FnMut(Severity, &str) + Send + 'static,
    {
        let band = SeverityBand::new(min, max)?;
        Ok(self.registry.insert(
            CALLBACK_SINK_NAME,
            band,
            Delivery::Callback(CallbackTarget::new(callback)),
        ))
    }

    /// Temporary stdout sink for `info..err`, used until configuration
    /// has been applied.
    pub fn add_bootstrap_sink(&mut self) -> SinkId {
        let id = self.registry.insert(
            BOOTSTRAP_SINK_NAME,
            SeverityBand::at_least(Severity::Info),
            Delivery::Stream(StreamTarget::stdout()),
        );
        if let Some(sink) = self.registry.get_mut(id) {
            sink.set_temporary(true);
        }
        id
    }

    /// Remove and release one sink. Returns `false` if it was not registered.
    pub fn remove_sink(&mut self, id: SinkId) -> bool {
        self.registry.remove(id)
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Emit a message to every sink whose band contains `severity`.
    pub fn emit(&mut self, severity: Severity, args: fmt::Arguments<'_>) {
        self.dispatch(severity, None, args);
    }

    /// Emit a message prefixed with a call-site tag, rendered as `tag(): `.
    pub fn emit_tagged(&mut self, severity: Severity, tag: &str, args: fmt::Arguments<'_>) {
        self.dispatch(severity, Some(tag), args);
    }

    fn dispatch(&mut self, severity: Severity, tag: Option<&str>, args: fmt::Arguments<'_>) {
        if !self.registry.any_accepts(severity) {
            self.metrics.record_skipped();
            return;
        }

        let record = self.formatter.format(severity, tag, args);
        self.metrics.record_emitted();
        if record.is_truncated() {
            self.metrics.record_truncated();
        }

        let metrics = &self.metrics;
        let dropped = self.registry.retain_mut(|sink, syslog| {
            if !sink.accepts(severity) {
                return true;
            }
            match &mut sink.delivery {
                Delivery::Syslog => {
                    syslog.send(severity, &record.message_c_string());
                    true
                }
                Delivery::Callback(callback) => {
                    if !callback.deliver(severity, record.message()) {
                        metrics.record_callback_panic();
                    }
                    true
                }
                // A failed or panicking write is not logged; the sink is
                // simply dropped.
                Delivery::Stream(stream) => delivered(|| stream.deliver(record.line())),
                Delivery::File(file) => delivered(|| file.deliver(record.line())),
            }
        });
        if dropped > 0 {
            self.metrics.record_sinks_dropped(dropped);
        }
    }

    /// The "opening log file" notice written at the top of file sinks.
    pub(crate) fn banner(&self, fresh: bool) -> FormattedRecord {
        banner_record(&self.formatter, &self.program, fresh)
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    /// The loosest floor over all sinks. Call sites can skip building
    /// messages below it.
    pub fn minimum_configured_severity(&self) -> Severity {
        self.registry.minimum_floor()
    }

    /// Whether a message of `severity` would reach at least one sink.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.registry.any_accepts(severity)
    }

    pub fn sinks(&self) -> Vec<SinkInfo> {
        self.registry.infos()
    }

    pub fn sink_count(&self) -> usize {
        self.registry.len()
    }

    pub fn contains_sink(&self, id: SinkId) -> bool {
        self.registry.contains(id)
    }

    pub fn registry(&self) -> &SinkRegistry {
        &self.registry
    }

    pub fn formatter(&self) -> &RecordFormatter {
        &self.formatter
    }

    pub fn program(&self) -> &ProgramInfo {
        &self.program
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

/// Run one write, isolating a panic in the underlying writer.
fn delivered<F>(write: F) -> bool
where
    F: FnOnce() -> io::Result<()>,
{
    matches!(panic::catch_unwind(AssertUnwindSafe(write)), Ok(Ok(())))
}

pub(crate) fn banner_record(
    formatter: &RecordFormatter,
    program: &ProgramInfo,
    fresh: bool,
) -> FormattedRecord {
    formatter.format(
        Severity::Notice,
        None,
        format_args!(
            "{} {} opening {}log file.",
            program.name,
            program.version,
            if fresh { "new " } else { "" }
        ),
    )
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown_all();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("program", &self.program)
            .field("capacity", &self.formatter.capacity())
            .field("sinks", &self.registry.infos())
            .finish()
    }
}

/// Builder for creating a Logger with a fluent API
///
/// # Example
///
/// ```
/// use sink_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .program("exampled", "1.2.3")
///     .record_capacity(4096)
///     .build();
///
/// assert_eq!(logger.program().name, "exampled");
/// assert_eq!(logger.sink_count(), 0);
/// ```
pub struct LoggerBuilder {
    program: ProgramInfo,
    record_capacity: usize,
    bootstrap: bool,
    syslog: Option<SyslogFacility>,
}

impl LoggerBuilder {
    /// Create a new LoggerBuilder with default settings
    pub fn new() -> Self {
        Self {
            program: ProgramInfo::default(),
            record_capacity: super::record::DEFAULT_RECORD_CAPACITY,
            bootstrap: false,
            syslog: None,
        }
    }

    /// Set the program name and version used in banners and as syslog ident
    #[must_use]
    pub fn program(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.program = ProgramInfo::new(name, version);
        self
    }

    /// Set the maximum record size in bytes
    #[must_use]
    pub fn record_capacity(mut self, capacity: usize) -> Self {
        self.record_capacity = capacity;
        self
    }

    /// Start with a temporary stdout sink for `info..err`
    #[must_use]
    pub fn bootstrap(mut self, enabled: bool) -> Self {
        self.bootstrap = enabled;
        self
    }

    /// Use a custom system log backend instead of the platform one
    #[must_use]
    pub fn syslog_backend<B: SyslogBackend + 'static>(mut self, backend: B) -> Self {
        self.syslog = Some(SyslogFacility::new(Some(Box::new(backend))));
        self
    }

    /// Share an existing system log connection with other loggers
    #[must_use]
    pub fn syslog_facility(mut self, facility: SyslogFacility) -> Self {
        self.syslog = Some(facility);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let syslog = self.syslog.unwrap_or_else(SyslogFacility::platform);
        let mut logger = Logger::with_parts(
            self.program,
            RecordFormatter::with_capacity(self.record_capacity),
            syslog,
        );
        if self.bootstrap {
            logger.add_bootstrap_sink();
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
