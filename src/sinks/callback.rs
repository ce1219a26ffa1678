//! In-process callback delivery

use crate::core::severity::Severity;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Function receiving each record's severity and message text.
pub type LogCallback = Box<dyn FnMut(Severity, &str) + Send>;

pub struct CallbackTarget {
    callback: LogCallback,
}

impl CallbackTarget {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(Severity, &str) + Send + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Invoke the callback, isolating a panic so the remaining sinks of
    /// the dispatch still run. Returns `false` if the callback panicked.
    pub(crate) fn deliver(&mut self, severity: Severity, message: &str) -> bool {
        let callback = &mut self.callback;
        panic::catch_unwind(AssertUnwindSafe(|| callback(severity, message))).is_ok()
    }
}

impl fmt::Debug for CallbackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackTarget").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_deliver_passes_severity_and_text() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let mut target = CallbackTarget::new(move |severity, message| {
            seen_clone.lock().unwrap().push((severity, message.to_string()));
        });

        assert!(target.deliver(Severity::Warn, "low disk"));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(Severity::Warn, "low disk".to_string())]
        );
    }

    #[test]
    fn test_panicking_callback_is_contained() {
        let mut target = CallbackTarget::new(|_, _| panic!("callback exploded"));
        assert!(!target.deliver(Severity::Error, "boom"));
        // still usable afterwards
        assert!(!target.deliver(Severity::Error, "boom again"));
    }
}
