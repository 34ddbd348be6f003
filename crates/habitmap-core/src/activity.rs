//! Activity log input.
//!
//! Callers hand over a sparse `date -> active` map. Keys are parsed into
//! [`NaiveDate`] exactly once, here; everything downstream works with real
//! calendar dates.

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::error::Result;

/// Date format used for activity keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Set of days on which the habit was kept. Absence means inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    active: BTreeSet<NaiveDate>,
}

impl ActivityLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from ISO `YYYY-MM-DD` keys.
    ///
    /// Keys that do not parse are skipped, as are entries marked `false`.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut log = Self::new();
        let mut skipped = 0usize;
        for (key, active) in entries {
            match NaiveDate::parse_from_str(key.trim(), DATE_FORMAT) {
                Ok(date) if active => log.mark(date),
                Ok(_) => {}
                Err(_) => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!("Ignored {} malformed activity keys", skipped);
        }
        log
    }

    /// Build a log from a string-keyed map.
    pub fn from_map(entries: &HashMap<String, bool>) -> Self {
        Self::from_entries(entries.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    /// Parse a JSON object of the form `{"2026-01-03": true, ...}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of booleans.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: HashMap<String, bool> = serde_json::from_str(json)?;
        Ok(Self::from_map(&entries))
    }

    /// Read a JSON activity file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Mark a single day as active.
    pub fn mark(&mut self, date: NaiveDate) {
        self.active.insert(date);
    }

    /// Mark every day of an inclusive range as active.
    pub fn mark_range(&mut self, first: NaiveDate, last: NaiveDate) {
        for date in first.iter_days().take_while(|d| *d <= last) {
            self.mark(date);
        }
    }

    /// Whether the habit was kept on `date`.
    pub fn is_active(&self, date: NaiveDate) -> bool {
        self.active.contains(&date)
    }

    /// Number of active days recorded, across all years.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active days in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.active.iter().copied()
    }
}

impl FromIterator<NaiveDate> for ActivityLog {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}
