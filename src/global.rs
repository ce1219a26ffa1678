//! Process-wide default logger
//!
//! Nothing in the crate requires this instance; it exists so that call
//! sites without access to an explicit [`Logger`] can still log. Access is
//! serialised through a mutex. Callbacks registered on the default logger
//! must not log through it again, as the mutex is not reentrant.

use crate::core::{Logger, Severity};
use parking_lot::Mutex;
use std::fmt;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// The default logger, created without sinks on first use.
pub fn logger() -> &'static Mutex<Logger> {
    DEFAULT_LOGGER.get_or_init(|| Mutex::new(Logger::new()))
}

/// Emit through the default logger.
pub fn emit(severity: Severity, args: fmt::Arguments<'_>) {
    logger().lock().emit(severity, args);
}

/// Emit a tagged message through the default logger.
pub fn emit_tagged(severity: Severity, tag: &str, args: fmt::Arguments<'_>) {
    logger().lock().emit_tagged(severity, tag, args);
}

/// Cheap check before building an expensive message.
pub fn enabled(severity: Severity) -> bool {
    logger().lock().enabled(severity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex as StdMutex};

    #[test]
    fn test_default_logger_routes_to_callbacks() {
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let id = logger()
            .lock()
            .add_callback_sink(Severity::Warn, Severity::Error, move |_, text| {
                seen_clone.lock().unwrap().push(text.to_string());
            })
            .unwrap();

        assert!(enabled(Severity::Warn));
        emit(Severity::Warn, format_args!("global {}", 7));
        emit_tagged(Severity::Error, "site", format_args!("tagged"));

        assert!(logger().lock().remove_sink(id));
        let seen = seen.lock().unwrap();
        assert!(seen.contains(&"global 7".to_string()));
        assert!(seen.contains(&"site(): tagged".to_string()));
    }
}
