//! System log delivery
//!
//! The POSIX syslog connection is a single process-wide resource. A
//! [`SyslogFacility`] is a shared handle on one connection: clones see the
//! same reference count, which opens the connection for the first syslog
//! sink and closes it after the last one, whichever logger holds them.
//! [`SyslogFacility::platform`] always returns a handle on the one
//! process-wide connection.

use crate::core::error::{LoggerError, Result};
use crate::core::severity::Severity;
use parking_lot::Mutex;
use std::ffi::CStr;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Low-level access to a system log facility.
pub trait SyslogBackend: Send {
    fn open(&mut self, ident: &str) -> Result<()>;
    fn send(&mut self, severity: Severity, message: &CStr);
    fn close(&mut self);
}

/// [`SyslogBackend`] over the libc `openlog`/`syslog`/`closelog` calls,
/// logging to the daemon facility.
#[cfg(all(unix, feature = "syslog"))]
#[derive(Debug, Default)]
pub struct LibcSyslog {
    // openlog keeps the pointer, so the identifier must outlive the connection
    ident: Option<std::ffi::CString>,
}

#[cfg(all(unix, feature = "syslog"))]
impl LibcSyslog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(all(unix, feature = "syslog"))]
impl SyslogBackend for LibcSyslog {
    fn open(&mut self, ident: &str) -> Result<()> {
        let ident = std::ffi::CString::new(ident)
            .map_err(|_| LoggerError::syslog_unavailable("identifier contains a NUL byte"))?;
        // SAFETY: `ident` is stored in `self` and outlives the connection.
        unsafe { libc::openlog(ident.as_ptr(), libc::LOG_NDELAY, libc::LOG_DAEMON) };
        self.ident = Some(ident);
        Ok(())
    }

    fn send(&mut self, severity: Severity, message: &CStr) {
        // SAFETY: both pointers are valid NUL-terminated strings and the
        // format consumes exactly one string argument.
        unsafe {
            libc::syslog(
                severity.syslog_priority(),
                b"%s\0".as_ptr().cast::<libc::c_char>(),
                message.as_ptr(),
            );
        }
    }

    fn close(&mut self) {
        // SAFETY: closelog has no preconditions.
        unsafe { libc::closelog() };
        self.ident = None;
    }
}

struct Connection {
    backend: Box<dyn SyslogBackend>,
    refs: usize,
    ident: Option<String>,
}

/// Reference-counted handle on the system log shared by syslog sinks.
#[derive(Clone, Default)]
pub struct SyslogFacility {
    connection: Option<Arc<Mutex<Connection>>>,
}

impl SyslogFacility {
    /// A new connection over `backend`. Clone the handle to share it
    /// between loggers.
    pub fn new(backend: Option<Box<dyn SyslogBackend>>) -> Self {
        Self {
            connection: backend.map(|backend| {
                Arc::new(Mutex::new(Connection {
                    backend,
                    refs: 0,
                    ident: None,
                }))
            }),
        }
    }

    /// Handle on the process-wide platform connection, if this build has one.
    pub fn platform() -> Self {
        static PLATFORM: OnceLock<SyslogFacility> = OnceLock::new();
        PLATFORM
            .get_or_init(|| {
                #[cfg(all(unix, feature = "syslog"))]
                {
                    Self::new(Some(Box::new(LibcSyslog::new())))
                }
                #[cfg(not(all(unix, feature = "syslog")))]
                {
                    Self::new(None)
                }
            })
            .clone()
    }

    pub fn is_available(&self) -> bool {
        self.connection.is_some()
    }

    /// Number of sinks currently holding the connection, across every
    /// handle that shares it.
    pub fn refs(&self) -> usize {
        self.connection.as_ref().map_or(0, |c| c.lock().refs)
    }

    pub fn is_open(&self) -> bool {
        self.refs() > 0
    }

    /// Identifier the connection is currently open with.
    pub fn ident(&self) -> Option<String> {
        self.connection.as_ref().and_then(|c| c.lock().ident.clone())
    }

    /// Register one more user, opening the connection for the first.
    ///
    /// An open connection is reopened when `ident` differs from the one it
    /// was opened with; the last program to register names the connection.
    pub(crate) fn acquire(&self, ident: &str) -> Result<()> {
        let connection = self
            .connection
            .as_ref()
            .ok_or_else(|| LoggerError::syslog_unavailable("no system log facility available"))?;
        let mut connection = connection.lock();
        if connection.refs == 0 {
            connection.backend.open(ident)?;
        } else if connection.ident.as_deref() != Some(ident) {
            connection.backend.close();
            connection.backend.open(ident)?;
        }
        connection.ident = Some(ident.to_string());
        connection.refs += 1;
        Ok(())
    }

    /// Drop one user, closing the connection after the last.
    pub(crate) fn release(&self) {
        let Some(connection) = self.connection.as_ref() else {
            return;
        };
        let mut connection = connection.lock();
        if connection.refs == 0 {
            return;
        }
        connection.refs -= 1;
        if connection.refs == 0 {
            connection.backend.close();
            connection.ident = None;
        }
    }

    pub(crate) fn send(&self, severity: Severity, message: &CStr) {
        if let Some(connection) = self.connection.as_ref() {
            let mut connection = connection.lock();
            if connection.refs > 0 {
                connection.backend.send(severity, message);
            }
        }
    }
}

impl fmt::Debug for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyslogFacility")
            .field("available", &self.is_available())
            .field("refs", &self.refs())
            .field("ident", &self.ident())
            .finish()
    }
}
