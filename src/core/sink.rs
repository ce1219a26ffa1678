//! Sink: one configured destination with its own severity band

use super::severity::{Severity, SeverityBand};
use crate::sinks::{CallbackTarget, FileTarget, StreamTarget, SyslogFacility};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Handle to a registered sink. Never reused within one logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SinkId(pub(crate) u64);

impl fmt::Display for SinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sink#{}", self.0)
    }
}

/// How a sink delivers records.
#[derive(Debug)]
pub enum Delivery {
    /// Caller-owned stream; receives the full line
    Stream(StreamTarget),
    /// Logger-owned file; receives the full line and is reopened on rotation
    File(FileTarget),
    /// The shared system log; receives the message without timestamp
    Syslog,
    /// In-process function; receives the message without timestamp
    Callback(CallbackTarget),
}

impl Delivery {
    /// Whether removing the sink must close a handle the logger opened.
    pub fn owns_resource(&self) -> bool {
        matches!(self, Delivery::File(_))
    }

    /// Whether the delivery target can currently accept records.
    pub fn is_live(&self) -> bool {
        match self {
            Delivery::File(file) => file.is_open(),
            Delivery::Stream(_) | Delivery::Syslog | Delivery::Callback(_) => true,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Delivery::Stream(_) => "stream",
            Delivery::File(_) => "file",
            Delivery::Syslog => "syslog",
            Delivery::Callback(_) => "callback",
        }
    }
}

#[derive(Debug)]
pub struct Sink {
    id: SinkId,
    name: String,
    band: SeverityBand,
    pub(crate) delivery: Delivery,
    temporary: bool,
}

impl Sink {
    pub(crate) fn new(
        id: SinkId,
        name: impl Into<String>,
        band: SeverityBand,
        delivery: Delivery,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            band,
            delivery,
            temporary: false,
        }
    }

    pub fn id(&self) -> SinkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn band(&self) -> SeverityBand {
        self.band
    }

    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    pub(crate) fn set_temporary(&mut self, temporary: bool) {
        self.temporary = temporary;
    }

    /// In band and able to take a record right now.
    #[inline]
    pub fn accepts(&self, severity: Severity) -> bool {
        self.band.contains(severity) && self.delivery.is_live()
    }

    pub fn info(&self) -> SinkInfo {
        SinkInfo {
            id: self.id,
            name: self.name.clone(),
            kind: self.delivery.kind(),
            band: self.band,
            temporary: self.temporary,
            owns_resource: self.delivery.owns_resource(),
        }
    }

    /// Close or release whatever the sink holds. Errors and panics from
    /// the underlying writer are swallowed; there is nowhere safe to report
    /// them.
    pub(crate) fn release(mut self, syslog: &SyslogFacility) {
        match &mut self.delivery {
            Delivery::File(file) => {
                let _ = file.close();
            }
            Delivery::Stream(stream) => {
                let _ = panic::catch_unwind(AssertUnwindSafe(|| stream.flush()));
            }
            Delivery::Syslog => syslog.release(),
            Delivery::Callback(_) => {}
        }
    }
}

/// Snapshot of a registered sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkInfo {
    pub id: SinkId,
    pub name: String,
    pub kind: &'static str,
    pub band: SeverityBand,
    pub temporary: bool,
    pub owns_resource: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn stream_sink(band: SeverityBand) -> Sink {
        Sink::new(SinkId(1), "<test>", band, Delivery::Stream(StreamTarget::new(io::sink())))
    }

    #[test]
    fn test_accepts_follows_band() {
        let sink = stream_sink(SeverityBand::new(Severity::Notice, Severity::Warn).unwrap());
        assert!(!sink.accepts(Severity::Info));
        assert!(sink.accepts(Severity::Notice));
        assert!(sink.accepts(Severity::Warn));
        assert!(!sink.accepts(Severity::Error));
    }

    #[test]
    fn test_info_snapshot() {
        let mut sink = stream_sink(SeverityBand::at_least(Severity::Info));
        sink.set_temporary(true);

        let info = sink.info();
        assert_eq!(info.id, SinkId(1));
        assert_eq!(info.name, "<test>");
        assert_eq!(info.kind, "stream");
        assert!(info.temporary);
        assert!(!info.owns_resource);
    }

    #[test]
    fn test_only_files_own_resources() {
        assert!(!Delivery::Syslog.owns_resource());
        assert!(!Delivery::Callback(CallbackTarget::new(|_, _| {})).owns_resource());
        assert!(!Delivery::Stream(StreamTarget::new(io::sink())).owns_resource());
    }
}
