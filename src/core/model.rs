// GameLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Severity
// =============================================================================

/// Console severity levels, ordered from least to most severe.
///
/// The filter threshold compares with `>=`, so the derived `Ord` (declaration
/// order) is load-bearing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns all variants in threshold order (least severe first).
    pub fn all() -> &'static [Severity] {
        &[Severity::Info, Severity::Warning, Severity::Error]
    }

    /// Human-readable label, used by the filter selector.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    /// Uppercase tag written into every rendered and exported line.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Numeric rank (0 = Info).
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Inverse of [`Severity::rank`].
    pub fn from_rank(rank: u8) -> Option<Severity> {
        match rank {
            0 => Some(Severity::Info),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Timestamps
// =============================================================================

/// Format a point in time as `HH:MM:SS.mmm` in the value's own time zone.
pub fn format_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%H:%M:%S%.3f").to_string()
}

/// Current local wall-clock time as `HH:MM:SS.mmm`.
pub fn now_time() -> String {
    format_time(&Local::now())
}

// =============================================================================
// Log Entry
// =============================================================================

/// A single console message.
///
/// Fields are private so an entry cannot change after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    time: String,
    severity: Severity,
    message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(severity: Severity, message: impl Into<String>) -> Self {
        Self::with_time(now_time(), severity, message)
    }

    /// Create an entry with an explicit, already formatted time.
    pub fn with_time(time: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            severity,
            message: message.into(),
        }
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `[HH:MM:SS.mmm] [TAG] message`, shared by the view and the export.
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {}", self.time, self.severity.tag(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_severity_order() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        let ranks: Vec<u8> = Severity::all().iter().map(Severity::rank).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn test_rank_round_trip_and_out_of_range() {
        for s in Severity::all() {
            assert_eq!(Severity::from_rank(s.rank()), Some(*s));
        }
        assert_eq!(Severity::from_rank(3), None);
    }

    #[test]
    fn test_tags_are_uppercase() {
        for s in Severity::all() {
            assert_eq!(s.tag(), s.tag().to_uppercase());
        }
        assert_eq!(Severity::Warning.tag(), "WARN");
    }

    #[test]
    fn test_format_time_pads_fields() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(7, 5, 3, 42)
            .unwrap()
            .and_utc();
        assert_eq!(format_time(&at), "07:05:03.042");
    }

    #[test]
    fn test_format_time_end_of_day() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap()
            + chrono::Duration::milliseconds(999);
        assert_eq!(format_time(&at), "23:59:59.999");
    }

    #[test]
    fn test_now_time_shape() {
        let t = now_time();
        assert_eq!(t.len(), 12, "unexpected timestamp {t:?}");
        assert_eq!(&t[2..3], ":");
        assert_eq!(&t[5..6], ":");
        assert_eq!(&t[8..9], ".");
    }

    #[test]
    fn test_line_format() {
        let entry = LogEntry::with_time("10:00:00.000", Severity::Error, "boom");
        assert_eq!(entry.line(), "[10:00:00.000] [ERROR] boom");
    }

    #[test]
    fn test_severity_deserialises_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: Severity,
        }
        let w: Wrapper = toml::from_str("level = \"warning\"").unwrap();
        assert_eq!(w.level, Severity::Warning);
    }
}
