//! Logging macros for ergonomic log message formatting.
//!
//! These macros forward `format_args!` to [`Logger::emit`](crate::Logger::emit),
//! so the message is rendered straight into the record buffer without an
//! intermediate `String`.
//!
//! # Examples
//!
//! ```
//! use sink_logger::prelude::*;
//! use sink_logger::{info, log_tagged};
//!
//! let mut logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Tagged with the call site
//! log_tagged!(logger, Severity::Notice, "bind", "listening on {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use sink_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use sink_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.emit($severity, format_args!($($arg)+))
    };
}

/// Log a message prefixed with a call-site tag (`tag(): message`).
///
/// # Examples
///
/// ```
/// # use sink_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use sink_logger::log_tagged;
/// log_tagged!(logger, Severity::Warn, "connect", "retrying in {}s", 5);
/// ```
#[macro_export]
macro_rules! log_tagged {
    ($logger:expr, $severity:expr, $tag:expr, $($arg:tt)+) => {
        $logger.emit_tagged($severity, $tag, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a notice-level message.
///
/// # Examples
///
/// ```
/// # use sink_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use sink_logger::notice;
/// notice!(logger, "Configuration reloaded");
/// ```
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use sink_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use sink_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}
