//! Severity definitions and severity bands

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message severity, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    #[default]
    Notice = 2,
    Warn = 3,
    #[serde(rename = "err", alias = "error")]
    Error = 4,
}

impl Severity {
    /// Every severity, least severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warn,
        Severity::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Notice => "notice",
            Severity::Warn => "warn",
            Severity::Error => "err",
        }
    }

    /// Convert a raw ordinal back into a severity.
    #[must_use]
    pub const fn from_repr(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Notice),
            3 => Some(Severity::Warn),
            4 => Some(Severity::Error),
            _ => None,
        }
    }

    /// Priority value understood by the POSIX `syslog` call.
    #[cfg(all(unix, feature = "syslog"))]
    pub fn syslog_priority(&self) -> libc::c_int {
        match self {
            Severity::Debug => libc::LOG_DEBUG,
            Severity::Info => libc::LOG_INFO,
            Severity::Notice => libc::LOG_NOTICE,
            Severity::Warn => libc::LOG_WARNING,
            Severity::Error => libc::LOG_ERR,
        }
    }
}

/// Display name for a raw severity ordinal.
///
/// # Panics
///
/// Panics when `raw` is not a valid severity; callers only ever pass
/// ordinals obtained from a [`Severity`], so anything else is a bug.
pub fn severity_name_of_raw(raw: u8) -> &'static str {
    match Severity::from_repr(raw) {
        Some(severity) => severity.as_str(),
        None => panic!("unrecognized severity ordinal {raw}"),
    }
}

/// Display name for a severity, as it appears in records.
pub fn severity_name(severity: Severity) -> &'static str {
    severity.as_str()
}

/// Strict lookup of one of the canonical names `err`, `warn`, `notice`,
/// `info` and `debug`, ignoring case.
pub fn parse_severity(text: &str) -> Option<Severity> {
    Severity::ALL
        .into_iter()
        .find(|severity| severity.as_str().eq_ignore_ascii_case(text))
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(severity) = parse_severity(s) {
            return Ok(severity);
        }
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warn),
            _ => Err(LoggerError::unknown_severity(s)),
        }
    }
}

/// Inclusive `[floor, ceiling]` range of severities accepted by a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeverityBand {
    floor: Severity,
    ceiling: Severity,
}

impl SeverityBand {
    /// Build a band, rejecting a floor that is more severe than the ceiling.
    pub fn new(floor: Severity, ceiling: Severity) -> Result<Self> {
        if floor > ceiling {
            return Err(LoggerError::invalid_band(floor, ceiling));
        }
        Ok(Self { floor, ceiling })
    }

    /// Everything at or above `floor`.
    #[must_use]
    pub const fn at_least(floor: Severity) -> Self {
        Self {
            floor,
            ceiling: Severity::Error,
        }
    }

    #[must_use]
    pub const fn floor(&self) -> Severity {
        self.floor
    }

    #[must_use]
    pub const fn ceiling(&self) -> Severity {
        self.ceiling
    }

    /// Whether a message of `severity` falls inside this band.
    #[inline]
    pub fn contains(&self, severity: Severity) -> bool {
        self.floor <= severity && severity <= self.ceiling
    }
}

impl Default for SeverityBand {
    fn default() -> Self {
        Self::at_least(Severity::Notice)
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ceiling == Severity::Error {
            write!(f, "{}", self.floor)
        } else {
            write!(f, "{}-{}", self.floor, self.ceiling)
        }
    }
}

impl FromStr for SeverityBand {
    type Err = LoggerError;

    /// Parses `floor` or `floor-ceiling`, e.g. `"notice"` or `"info-warn"`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('-') {
            Some((floor, ceiling)) => {
                SeverityBand::new(floor.trim().parse()?, ceiling.trim().parse()?)
            }
            None => Ok(SeverityBand::at_least(s.trim().parse()?)),
        }
    }
}

impl TryFrom<String> for SeverityBand {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SeverityBand> for String {
    fn from(band: SeverityBand) -> Self {
        band.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_least_to_most_severe() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Notice);
        assert!(Severity::Notice < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_name_round_trip() {
        for severity in Severity::ALL {
            assert_eq!(parse_severity(severity_name(severity)), Some(severity));
        }
        assert_eq!(parse_severity("bogus"), None);
        assert_eq!(parse_severity("NoTiCe"), Some(Severity::Notice));
    }

    #[test]
    fn test_strict_parse_rejects_aliases() {
        assert_eq!(parse_severity("error"), None);
        assert_eq!("error".parse::<Severity>().ok(), Some(Severity::Error));
        assert_eq!("Warning".parse::<Severity>().ok(), Some(Severity::Warn));
        assert!(matches!(
            "loud".parse::<Severity>(),
            Err(LoggerError::UnknownSeverity(_))
        ));
    }

    #[test]
    fn test_raw_lookup() {
        assert_eq!(severity_name_of_raw(4), "err");
        assert_eq!(Severity::from_repr(5), None);
    }

    #[test]
    #[should_panic(expected = "unrecognized severity")]
    fn test_raw_lookup_out_of_range_panics() {
        severity_name_of_raw(42);
    }

    #[test]
    fn test_band_boundaries() {
        let band = SeverityBand::new(Severity::Info, Severity::Warn).unwrap();
        assert!(!band.contains(Severity::Debug));
        assert!(band.contains(Severity::Info));
        assert!(band.contains(Severity::Notice));
        assert!(band.contains(Severity::Warn));
        assert!(!band.contains(Severity::Error));
    }

    #[test]
    fn test_inverted_band_rejected() {
        let err = SeverityBand::new(Severity::Error, Severity::Debug).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidBand { .. }));
    }

    #[test]
    fn test_band_parse_and_display() {
        let band: SeverityBand = "info-warn".parse().unwrap();
        assert_eq!(band.floor(), Severity::Info);
        assert_eq!(band.ceiling(), Severity::Warn);
        assert_eq!(band.to_string(), "info-warn");

        let band: SeverityBand = "notice".parse().unwrap();
        assert_eq!(band, SeverityBand::at_least(Severity::Notice));
        assert_eq!(band.to_string(), "notice");

        assert!("warn-debug".parse::<SeverityBand>().is_err());
        assert!("loud-err".parse::<SeverityBand>().is_err());
    }

    #[test]
    fn test_band_serde() {
        let band: SeverityBand = serde_json::from_str("\"debug-info\"").unwrap();
        assert_eq!(band, SeverityBand::new(Severity::Debug, Severity::Info).unwrap());
        assert_eq!(serde_json::to_string(&band).unwrap(), "\"debug-info\"");

        let severity: Severity = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(severity, Severity::Error);
    }
}
