//! Core logger types

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use config::{LoggerConfig, SinkConfig};
pub use error::{LoggerError, Result};
pub use logger::{
    Logger, LoggerBuilder, ProgramInfo, BOOTSTRAP_SINK_NAME, CALLBACK_SINK_NAME, SYSLOG_SINK_NAME,
};
pub use metrics::LoggerMetrics;
pub use record::{
    FormattedRecord, RecordFormatter, DEFAULT_RECORD_CAPACITY, MIN_RECORD_CAPACITY,
    TRUNCATED_MARKER,
};
pub use registry::SinkRegistry;
pub use severity::{parse_severity, severity_name, severity_name_of_raw, Severity, SeverityBand};
pub use sink::{Delivery, Sink, SinkId, SinkInfo};
pub use timestamp::{Timestamp, RECORD_TIMESTAMP_FORMAT};
