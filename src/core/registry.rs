//! Ordered collection of active sinks
//!
//! New sinks are prepended, so the most recently added sink is visited
//! first. Removal while visiting is mark-and-compact: a pass decides for
//! every sink whether it stays, the survivors keep their relative order,
//! and the removed sinks are released afterwards in registry order.

use super::severity::{Severity, SeverityBand};
use super::sink::{Delivery, Sink, SinkId, SinkInfo};
use crate::sinks::SyslogFacility;

#[derive(Debug)]
pub struct SinkRegistry {
    sinks: Vec<Sink>,
    next_id: u64,
    syslog: SyslogFacility,
}

impl SinkRegistry {
    pub fn new(syslog: SyslogFacility) -> Self {
        Self {
            sinks: Vec::new(),
            next_id: 1,
            syslog,
        }
    }

    /// Prepend a sink and return its handle.
    pub(crate) fn insert(
        &mut self,
        name: impl Into<String>,
        band: SeverityBand,
        delivery: Delivery,
    ) -> SinkId {
        let id = SinkId(self.next_id);
        self.next_id += 1;
        self.sinks.insert(0, Sink::new(id, name, band, delivery));
        id
    }

    /// Remove and release one sink. Returns `false` if it is not registered.
    pub(crate) fn remove(&mut self, id: SinkId) -> bool {
        match self.sinks.iter().position(|sink| sink.id() == id) {
            Some(index) => {
                let sink = self.sinks.remove(index);
                sink.release(&self.syslog);
                true
            }
            None => false,
        }
    }

    /// Visit every sink once, in registry order. Sinks for which `keep`
    /// returns `false` are removed and released after the pass.
    ///
    /// Returns the number of sinks removed.
    pub(crate) fn retain_mut<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&mut Sink, &SyslogFacility) -> bool,
    {
        let mut kept = Vec::with_capacity(self.sinks.len());
        let mut removed = Vec::new();

        for mut sink in self.sinks.drain(..) {
            if keep(&mut sink, &self.syslog) {
                kept.push(sink);
            } else {
                removed.push(sink);
            }
        }
        self.sinks = kept;

        let count = removed.len();
        for sink in removed {
            sink.release(&self.syslog);
        }
        count
    }

    pub(crate) fn get_mut(&mut self, id: SinkId) -> Option<&mut Sink> {
        self.sinks.iter_mut().find(|sink| sink.id() == id)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sink> {
        self.sinks.iter_mut()
    }

    pub fn get(&self, id: SinkId) -> Option<&Sink> {
        self.sinks.iter().find(|sink| sink.id() == id)
    }

    pub fn contains(&self, id: SinkId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sink> {
        self.sinks.iter()
    }

    pub fn ids(&self) -> Vec<SinkId> {
        self.sinks.iter().map(Sink::id).collect()
    }

    pub fn infos(&self) -> Vec<SinkInfo> {
        self.sinks.iter().map(Sink::info).collect()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn syslog(&self) -> &SyslogFacility {
        &self.syslog
    }

    /// Whether any sink would take a record of `severity`.
    pub fn any_accepts(&self, severity: Severity) -> bool {
        self.sinks.iter().any(|sink| sink.accepts(severity))
    }

    /// The loosest band floor over all sinks, or `Error` when there are none.
    pub fn minimum_floor(&self) -> Severity {
        self.sinks
            .iter()
            .map(|sink| sink.band().floor())
            .min()
            .unwrap_or(Severity::Error)
    }
}
