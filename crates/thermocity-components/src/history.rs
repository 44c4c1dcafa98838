//! Bounded log of recent activity results, persisted as JSON.
//!
//! Forecasters use the history to estimate a trend. Only the most recent entries are
//! kept; older entries are dropped first.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::collections::VecDeque;
use std::path::Path;
use thermocity_core::collaborators::LoggedResult;
use thermocity_core::errors::{ThermoError, ThermoResult};

/// Number of entries kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultHistory {
    entries: VecDeque<LoggedResult>,
    capacity: usize,
}

impl ResultHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an entry, evicting the oldest entries beyond capacity.
    ///
    /// Non-finite values are rejected: JSON has no representation for them, so the
    /// saved file could not be loaded again.
    pub fn push(&mut self, entry: LoggedResult) -> ThermoResult<()> {
        if !entry.co2e.is_finite() {
            return Err(ThermoError::NonFiniteHistoryEntry(entry.co2e));
        }
        self.entries.push_back(entry);
        self.truncate();
        Ok(())
    }

    /// Convenience for [`ResultHistory::push`] with a fresh entry.
    pub fn record(&mut self, co2e: f64, timestamp: DateTime<Utc>) -> ThermoResult<()> {
        self.push(LoggedResult { co2e, timestamp })
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> Vec<LoggedResult> {
        self.entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&LoggedResult> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Load a history file.
    ///
    /// A missing file is an empty history. Malformed JSON is an error. Histories longer
    /// than `capacity` keep their most recent entries.
    pub fn load(path: impl AsRef<Path>, capacity: usize) -> ThermoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No history at {}, starting empty", path.display());
            return Ok(Self::with_capacity(capacity));
        }

        let contents = std::fs::read_to_string(path)?;
        let entries: VecDeque<LoggedResult> = serde_json::from_str(&contents).map_err(|e| {
            warn!("History at {} is malformed: {}", path.display(), e);
            e
        })?;

        let mut history = Self { entries, capacity };
        history.truncate();
        debug!(
            "Loaded {} history entries from {}",
            history.len(),
            path.display()
        );
        Ok(history)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ThermoResult<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, contents)?;
        debug!("Saved {} history entries to {}", self.len(), path.display());
        Ok(())
    }

    fn truncate(&mut self) {
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }
}

impl Default for ResultHistory {
    fn default() -> Self {
        Self::new()
    }
}
