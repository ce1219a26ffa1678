//! Error types for the logger system
//!
//! Only configuration-time failures are reported through these types.
//! Delivery failures on an active sink are absorbed by the dispatcher and
//! never reach the call site.

use super::severity::Severity;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A file sink could not be opened
    #[error("Failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The directory holding a file sink could not be created
    #[error("Failed to create log directory '{path}': {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A severity name outside the known set
    #[error("Unrecognized severity: '{0}'")]
    UnknownSeverity(String),

    /// A band whose floor is more severe than its ceiling
    #[error("Invalid severity band: floor '{floor}' is above ceiling '{ceiling}'")]
    InvalidBand { floor: Severity, ceiling: Severity },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The system log facility cannot be used
    #[error("System log unavailable: {0}")]
    SyslogUnavailable(String),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a file open error
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a directory creation error
    pub fn create_directory(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::CreateDirectory {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_severity(name: impl Into<String>) -> Self {
        LoggerError::UnknownSeverity(name.into())
    }

    pub fn invalid_band(floor: Severity, ceiling: Severity) -> Self {
        LoggerError::InvalidBand { floor, ceiling }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn syslog_unavailable<S: Into<String>>(msg: S) -> Self {
        LoggerError::SyslogUnavailable(msg.into())
    }

    /// The OS error behind a file failure, if any
    pub fn io_source(&self) -> Option<&std::io::Error> {
        match self {
            LoggerError::FileOpen { source, .. }
            | LoggerError::CreateDirectory { source, .. }
            | LoggerError::IoError(source) => Some(source),
            _ => None,
        }
    }
}
