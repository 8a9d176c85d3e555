// GameLog - core/filter.rs
//
// Severity-threshold view over console entries.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{LogEntry, Severity};

/// Whether `entry` is shown under the threshold `min`.
pub fn passes(entry: &LogEntry, min: Severity) -> bool {
    entry.severity() >= min
}

/// Apply the threshold to a sequence of entries, returning indices of matches.
///
/// Indices refer to positions in the input sequence and are in ascending
/// order, so the view keeps append order and can be virtual-scrolled.
pub fn apply_filter<'a, I>(entries: I, min: Severity) -> Vec<usize>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    if min == Severity::Info {
        return entries.into_iter().enumerate().map(|(idx, _)| idx).collect();
    }

    entries
        .into_iter()
        .enumerate()
        .filter(|(_, entry)| passes(entry, min))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(severity: Severity, message: &str) -> LogEntry {
        LogEntry::with_time("00:00:00.000", severity, message)
    }

    #[test]
    fn test_info_threshold_returns_all() {
        let entries = vec![
            make_entry(Severity::Error, "e"),
            make_entry(Severity::Info, "i"),
        ];
        assert_eq!(apply_filter(&entries, Severity::Info), vec![0, 1]);
    }

    #[test]
    fn test_warning_threshold() {
        let entries = vec![
            make_entry(Severity::Info, "a"),
            make_entry(Severity::Warning, "b"),
            make_entry(Severity::Error, "c"),
            make_entry(Severity::Info, "d"),
        ];
        assert_eq!(apply_filter(&entries, Severity::Warning), vec![1, 2]);
    }

    #[test]
    fn test_error_threshold() {
        let entries = vec![
            make_entry(Severity::Error, "x"),
            make_entry(Severity::Warning, "y"),
            make_entry(Severity::Error, "z"),
        ];
        assert_eq!(apply_filter(&entries, Severity::Error), vec![0, 2]);
    }

    #[test]
    fn test_empty_input() {
        let entries: Vec<LogEntry> = Vec::new();
        assert!(apply_filter(&entries, Severity::Warning).is_empty());
    }
}
