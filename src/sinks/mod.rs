//! Delivery targets for sinks
//!
//! Each target implements one delivery mode: a caller-supplied stream, a
//! file the logger opens itself, the shared system log, or an in-process
//! callback.

pub mod callback;
pub mod file;
pub mod stream;
pub mod syslog;

pub use callback::{CallbackTarget, LogCallback};
pub use file::FileTarget;
pub use stream::StreamTarget;
#[cfg(all(unix, feature = "syslog"))]
pub use syslog::LibcSyslog;
pub use syslog::{SyslogBackend, SyslogFacility};
