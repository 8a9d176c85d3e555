// GameLog - core/store.rs
//
// The console's message buffer: ordered entries, filter threshold, and
// panel visibility. Constructed explicitly by the composition root and
// handed by `&mut` to whatever needs it; there is no global instance.
//
// Retention: a bounded FIFO. Once `capacity` entries are held, each new
// append evicts the oldest one.

use crate::core::filter;
use crate::core::model::{LogEntry, Severity};
use crate::util::constants;
use std::collections::VecDeque;

/// Ordered, bounded collection of console entries plus view state.
#[derive(Debug)]
pub struct LogStore {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    min_severity: Severity,
    visible: bool,
    evicted: u64,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new(constants::DEFAULT_MAX_ENTRIES)
    }
}

impl LogStore {
    /// Create an empty, visible store keeping at most `capacity` entries.
    ///
    /// A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            min_severity: Severity::Info,
            visible: true,
            evicted: 0,
        }
    }

    // ---- Mutation ----

    /// Append a message stamped with the current local time.
    pub fn append(&mut self, severity: Severity, message: impl Into<String>) -> &LogEntry {
        self.append_entry(LogEntry::now(severity, message))
    }

    /// Append a pre-built entry.
    pub fn append_entry(&mut self, entry: LogEntry) -> &LogEntry {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
            self.evicted += 1;
            if self.evicted == 1 {
                tracing::debug!(
                    capacity = self.capacity,
                    "Console retention limit reached; evicting oldest entries"
                );
            }
        }
        self.entries.push_back(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn info(&mut self, message: impl Into<String>) -> &LogEntry {
        self.append(Severity::Info, message)
    }

    pub fn warn(&mut self, message: impl Into<String>) -> &LogEntry {
        self.append(Severity::Warning, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> &LogEntry {
        self.append(Severity::Error, message)
    }

    /// Remove every entry. Filter and visibility are left as they are.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.evicted = 0;
        tracing::debug!(dropped, "Console cleared");
    }

    // ---- Visibility ----

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Show a hidden panel or hide a shown one.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    // ---- Filter ----

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    pub fn set_min_severity(&mut self, min: Severity) {
        self.min_severity = min;
    }

    // ---- Queries ----

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries dropped by the retention limit since the last clear.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    /// All entries in append order, unfiltered.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    /// Indices (into [`LogStore::get`]) of entries passing the current threshold.
    pub fn filtered_indices(&self) -> Vec<usize> {
        filter::apply_filter(&self.entries, self.min_severity)
    }

    /// Entries passing the current threshold, in append order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        let min = self.min_severity;
        self.entries.iter().filter(move |e| filter::passes(e, min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages<'a>(it: impl Iterator<Item = &'a LogEntry>) -> Vec<&'a str> {
        it.map(LogEntry::message).collect()
    }

    #[test]
    fn test_append_grows_by_one_in_order() {
        let mut store = LogStore::default();
        for (i, s) in [Severity::Error, Severity::Info, Severity::Warning]
            .into_iter()
            .enumerate()
        {
            store.append(s, format!("m{i}"));
            assert_eq!(store.len(), i + 1);
        }
        assert_eq!(messages(store.entries()), vec!["m0", "m1", "m2"]);
    }

    #[test]
    fn test_append_returns_new_entry() {
        let mut store = LogStore::default();
        let entry = store.warn("careful");
        assert_eq!(entry.severity(), Severity::Warning);
        assert_eq!(entry.message(), "careful");
        assert_eq!(entry.time().len(), 12);
    }

    #[test]
    fn test_clear_empties_regardless_of_size() {
        let mut store = LogStore::default();
        store.clear();
        assert!(store.is_empty());

        for i in 0..50 {
            store.info(format!("{i}"));
        }
        store.set_min_severity(Severity::Error);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.filtered_indices(), Vec::<usize>::new());
        assert_eq!(store.min_severity(), Severity::Error);
    }

    #[test]
    fn test_filter_is_a_view() {
        let mut store = LogStore::default();
        store.info("a");
        store.warn("b");
        store.error("c");

        store.set_min_severity(Severity::Warning);
        assert_eq!(messages(store.visible_entries()), vec!["b", "c"]);
        assert_eq!(store.filtered_indices(), vec![1, 2]);
        assert_eq!(messages(store.entries()), vec!["a", "b", "c"]);

        store.set_min_severity(Severity::Info);
        assert_eq!(messages(store.visible_entries()), vec!["a", "b", "c"]);

        store.clear();
        assert_eq!(store.visible_entries().count(), 0);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = LogStore::default();
        assert!(store.is_visible());
        store.toggle_visibility();
        assert!(!store.is_visible());
        store.toggle_visibility();
        assert!(store.is_visible());
    }

    #[test]
    fn test_retention_evicts_oldest() {
        let mut store = LogStore::new(3);
        for i in 0..5 {
            store.info(format!("m{i}"));
        }
        assert_eq!(store.len(), 3);
        assert_eq!(store.evicted(), 2);
        assert_eq!(messages(store.entries()), vec!["m2", "m3", "m4"]);

        store.clear();
        assert_eq!(store.evicted(), 0);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut store = LogStore::new(0);
        store.info("first");
        store.info("second");
        assert_eq!(store.capacity(), 1);
        assert_eq!(messages(store.entries()), vec!["second"]);
    }
}
