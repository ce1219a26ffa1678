//! Logger lifecycle: bootstrap hand-over, rotation and shutdown
//!
//! None of these operations report failures through the logger; a sink
//! that cannot be reopened is removed and counted in the metrics.

use super::logger::{banner_record, Logger};
use super::sink::{Delivery, SinkId};

impl Logger {
    /// Flag every current sink as temporary, so that the next
    /// [`close_temporary_sinks`](Self::close_temporary_sinks) discards them.
    pub fn mark_all_temporary(&mut self) {
        for sink in self.registry.iter_mut() {
            sink.set_temporary(true);
        }
    }

    /// Flag one sink as temporary. Returns `false` if it is not registered.
    pub fn mark_temporary(&mut self, id: SinkId) -> bool {
        match self.registry.get_mut(id) {
            Some(sink) => {
                sink.set_temporary(true);
                true
            }
            None => false,
        }
    }

    /// Remove and release every temporary sink, leaving the others in
    /// their current order. Returns the number of sinks removed.
    pub fn close_temporary_sinks(&mut self) -> usize {
        self.registry.retain_mut(|sink, _| !sink.is_temporary())
    }

    /// Close and reopen every file sink at its path, for external log
    /// rotation.
    ///
    /// A file that cannot be reopened has its sink removed. A reopened file
    /// that is empty gets a fresh banner. Returns the number of sinks
    /// removed.
    pub fn rotate_all(&mut self) -> usize {
        let formatter = &self.formatter;
        let program = &self.program;

        let dropped = self.registry.retain_mut(|sink, _| {
            let temporary = sink.is_temporary();
            let Delivery::File(file) = &mut sink.delivery else {
                return true;
            };
            if file.reopen().is_err() {
                return false;
            }
            if !temporary && file.is_empty() {
                let banner = banner_record(formatter, program, true);
                let _ = file.deliver(banner.line());
            }
            true
        });
        if dropped > 0 {
            self.metrics.record_rotation_failures(dropped);
        }
        dropped
    }

    /// Remove and release every sink, temporary or not. The system log
    /// connection is closed with its last sink. Safe to call repeatedly.
    pub fn shutdown_all(&mut self) {
        self.registry.retain_mut(|_, _| false);
    }
}
