//! Declarative logger configuration
//!
//! A [`LoggerConfig`] lists the durable sinks a program wants once its
//! configuration is known. Applying it replaces whatever sinks were active
//! before (typically the bootstrap sink) in one step.
//!
//! ```
//! use sink_logger::LoggerConfig;
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "program": "exampled",
//!     "sinks": [
//!         { "kind": "stdout", "band": "notice" },
//!         { "kind": "file", "band": "info-warn", "path": "/var/log/exampled/info.log" }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(config.sinks.len(), 2);
//! ```

use super::error::{LoggerError, Result};
use super::logger::{Logger, ProgramInfo};
use super::record::{RecordFormatter, DEFAULT_RECORD_CAPACITY};
use super::severity::SeverityBand;
use super::sink::SinkId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One configured destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SinkConfig {
    Stdout {
        #[serde(default)]
        band: SeverityBand,
    },
    Stderr {
        #[serde(default)]
        band: SeverityBand,
    },
    File {
        #[serde(default)]
        band: SeverityBand,
        path: PathBuf,
    },
    Syslog {
        #[serde(default)]
        band: SeverityBand,
    },
}

impl SinkConfig {
    pub fn band(&self) -> SeverityBand {
        match self {
            SinkConfig::Stdout { band }
            | SinkConfig::Stderr { band }
            | SinkConfig::File { band, .. }
            | SinkConfig::Syslog { band } => *band,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub program: String,
    pub version: String,
    pub record_capacity: usize,
    pub sinks: Vec<SinkConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let program = ProgramInfo::default();
        Self {
            program: program.name,
            version: program.version,
            record_capacity: DEFAULT_RECORD_CAPACITY,
            sinks: Vec::new(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())
            .map_err(|e| LoggerError::file_open(path.as_ref().display().to_string(), e))?;
        Self::from_json_str(&json)
    }

    /// Reject settings that can never be applied.
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(LoggerError::config("program", "must not be empty"));
        }
        for (index, sink) in self.sinks.iter().enumerate() {
            if let SinkConfig::File { path, .. } = sink {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config(
                        format!("sinks[{index}]"),
                        "file path is empty",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Logger {
    /// Replace the active sinks with the ones described by `config`.
    ///
    /// Every configured sink is registered first. If any of them fails, the
    /// sinks added so far are removed, the previous sinks and settings stay
    /// as they were, and the error is returned. Otherwise the previous sinks
    /// are marked temporary and closed.
    pub fn apply_config(&mut self, config: &LoggerConfig) -> Result<()> {
        config.validate()?;

        let previous = self.registry.ids();
        let old_program = std::mem::replace(
            &mut self.program,
            ProgramInfo::new(&config.program, &config.version),
        );
        let old_formatter = std::mem::replace(
            &mut self.formatter,
            RecordFormatter::with_capacity(config.record_capacity),
        );

        let mut added: Vec<SinkId> = Vec::with_capacity(config.sinks.len());
        for sink in &config.sinks {
            match self.add_configured_sink(sink) {
                Ok(id) => added.push(id),
                Err(e) => {
                    for id in added {
                        self.remove_sink(id);
                    }
                    self.program = old_program;
                    self.formatter = old_formatter;
                    return Err(e);
                }
            }
        }

        for id in previous {
            self.mark_temporary(id);
        }
        self.close_temporary_sinks();
        Ok(())
    }

    fn add_configured_sink(&mut self, sink: &SinkConfig) -> Result<SinkId> {
        let band = sink.band();
        let (floor, ceiling) = (band.floor(), band.ceiling());
        match sink {
            SinkConfig::Stdout { .. } => {
                self.add_stream_sink(floor, ceiling, "<stdout>", std::io::stdout())
            }
            SinkConfig::Stderr { .. } => {
                self.add_stream_sink(floor, ceiling, "<stderr>", std::io::stderr())
            }
            SinkConfig::File { path, .. } => self.add_file_sink(floor, ceiling, path),
            SinkConfig::Syslog { .. } => self.add_syslog_sink(floor, ceiling),
        }
    }
}
