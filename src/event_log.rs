//! Rolling log of recent mode transitions.
//!
//! Fixed capacity, FIFO eviction, lives for as long as the firmware runs.
//! Only the menu/mode code appends; the SYSTEM LOG mode reads it.

use crate::config::{LOG_CAPACITY, LOG_ENTRY_LEN};
use heapless::{Deque, String};

/// One log line ("Entered SCAN MODE", "Exited ABOUT", ...).
pub type LogEntry = String<LOG_ENTRY_LEN>;

/// Bounded, insertion-ordered event log.
pub struct BoundedLog {
    entries: Deque<LogEntry, LOG_CAPACITY>,
}

impl BoundedLog {
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }

    /// Append an entry, evicting the oldest one when the log is full.
    ///
    /// Text longer than [`LOG_ENTRY_LEN`] bytes is cut at the last
    /// character boundary that fits.
    pub fn append(&mut self, text: &str) {
        let mut entry = LogEntry::new();
        for c in text.chars() {
            if entry.push(c).is_err() {
                break;
            }
        }

        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // Cannot fail: a slot was freed above.
        let _ = self.entries.push_back(entry);
        debug!("log: {} entries", self.entries.len());
    }

    /// The last `n` entries in insertion order, most recent last.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &str> + '_ {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).map(|e| e.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BoundedLog {
    fn default() -> Self {
        Self::new()
    }
}
