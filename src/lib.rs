//! # Sink Logger
//!
//! A synchronous, severity-banded logging facility. Messages are formatted
//! once and routed to any number of sinks, each accepting its own
//! `[floor, ceiling]` band of severities.
//!
//! ## Features
//!
//! - **Sinks**: caller streams, append-mode files, the system log and callbacks
//! - **Failure isolation**: a sink whose write fails is dropped, the rest keep going
//! - **Two-phase startup**: a temporary bootstrap sink until configuration is applied
//! - **External rotation**: `rotate_all` reopens every log file in place
//!
//! ```
//! use sink_logger::prelude::*;
//! use sink_logger::{error, info};
//!
//! let mut logger = Logger::builder().program("exampled", "1.0").build();
//! logger.add_stream_sink(Severity::Warn, Severity::Error, "<sink>", std::io::sink())?;
//!
//! info!(logger, "not delivered");
//! error!(logger, "disk {} is full", "/var");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        parse_severity, severity_name, FormattedRecord, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, RecordFormatter, Result, Severity, SeverityBand, SinkConfig,
        SinkId, SinkInfo,
    };
    pub use crate::sinks::SyslogBackend;
}

pub use core::{
    parse_severity, severity_name, Delivery, FormattedRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, ProgramInfo, RecordFormatter, Result, Severity, SeverityBand,
    SinkConfig, SinkId, SinkInfo, DEFAULT_RECORD_CAPACITY, TRUNCATED_MARKER,
};
pub use sinks::{SyslogBackend, SyslogFacility};
