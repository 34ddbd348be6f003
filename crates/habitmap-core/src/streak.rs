//! Per-day streak calculation.
//!
//! Walks every calendar day of one year and turns the activity log into a
//! running streak count. Streaks restart at January 1; activity from the
//! previous year is never consulted.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityLog;
use crate::palette::{intensity_level, LEVEL_COUNT};

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    if leap {
        366
    } else {
        365
    }
}

/// Streak length for every day of a single year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakMap {
    year: i32,
    /// Indexed by zero-based ordinal day of the year.
    streaks: Vec<u32>,
}

impl StreakMap {
    /// Compute streaks for `year` from `log`.
    pub fn compute(year: i32, log: &ActivityLog) -> Self {
        let day_count = days_in_year(year);
        let mut streaks = Vec::with_capacity(day_count as usize);
        let mut current = 0u32;

        if let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) {
            for date in first.iter_days().take(day_count as usize) {
                current = if log.is_active(date) { current + 1 } else { 0 };
                streaks.push(current);
            }
        }

        let map = Self { year, streaks };
        tracing::debug!(
            year,
            days = map.len(),
            active = map.active_days(),
            longest = map.longest_streak(),
            "Computed streaks"
        );
        map
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.streaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streaks.is_empty()
    }

    /// Streak on `date`, or `None` when the date is outside the year.
    pub fn get(&self, date: NaiveDate) -> Option<u32> {
        if date.year() != self.year {
            return None;
        }
        self.streaks.get(date.ordinal0() as usize).copied()
    }

    /// Streak on `date`, treating days outside the year as 0.
    pub fn streak_on(&self, date: NaiveDate) -> u32 {
        self.get(date).unwrap_or(0)
    }

    /// `(date, streak)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        let first = NaiveDate::from_ymd_opt(self.year, 1, 1);
        first
            .into_iter()
            .flat_map(|d| d.iter_days())
            .zip(self.streaks.iter().copied())
    }

    pub fn longest_streak(&self) -> u32 {
        self.streaks.iter().copied().max().unwrap_or(0)
    }

    pub fn active_days(&self) -> usize {
        self.streaks.iter().filter(|s| **s > 0).count()
    }

    /// Streak as of `date`. Dates past the year report the December 31 value,
    /// dates before it report 0.
    pub fn current_streak(&self, as_of: NaiveDate) -> u32 {
        if as_of.year() > self.year {
            self.streaks.last().copied().unwrap_or(0)
        } else {
            self.streak_on(as_of)
        }
    }

    /// Count of days per intensity level.
    pub fn level_histogram(&self) -> [usize; LEVEL_COUNT] {
        let mut histogram = [0usize; LEVEL_COUNT];
        for streak in &self.streaks {
            histogram[intensity_level(*streak) as usize] += 1;
        }
        histogram
    }

    /// Serializable summary of the year.
    pub fn summary(&self) -> StreakSummary {
        StreakSummary {
            year: self.year,
            days: self.len(),
            active_days: self.active_days(),
            longest_streak: self.longest_streak(),
            final_streak: self.streaks.last().copied().unwrap_or(0),
            levels: self.level_histogram().to_vec(),
        }
    }
}

/// Year-level statistics derived from a [`StreakMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub year: i32,
    pub days: usize,
    pub active_days: usize,
    pub longest_streak: u32,
    /// Streak on December 31.
    pub final_streak: u32,
    /// Days per intensity level, level 0 first.
    pub levels: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2026), 365);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn test_map_covers_whole_year() {
        let log = ActivityLog::new();
        assert_eq!(StreakMap::compute(2024, &log).len(), 366);
        assert_eq!(StreakMap::compute(2026, &log).len(), 365);
    }

    #[test]
    fn test_sample_scenario() {
        let mut log = ActivityLog::new();
        log.mark_range(date(2026, 1, 3), date(2026, 1, 13));
        log.mark(date(2026, 1, 15));

        let map = StreakMap::compute(2026, &log);
        assert_eq!(map.get(date(2026, 1, 2)), Some(0));
        assert_eq!(map.get(date(2026, 1, 3)), Some(1));
        assert_eq!(map.get(date(2026, 1, 13)), Some(11));
        assert_eq!(map.get(date(2026, 1, 14)), Some(0));
        assert_eq!(map.get(date(2026, 1, 15)), Some(1));
        assert_eq!(map.longest_streak(), 11);
        assert_eq!(map.active_days(), 12);
    }

    #[test]
    fn test_streak_does_not_cross_new_year() {
        let mut log = ActivityLog::new();
        log.mark_range(date(2025, 12, 20), date(2026, 1, 2));

        let map = StreakMap::compute(2026, &log);
        assert_eq!(map.get(date(2026, 1, 1)), Some(1));
        assert_eq!(map.get(date(2026, 1, 2)), Some(2));
        assert_eq!(map.get(date(2025, 12, 31)), None);
    }

    #[test]
    fn test_leap_day_is_counted() {
        let mut log = ActivityLog::new();
        log.mark_range(date(2024, 2, 27), date(2024, 3, 1));

        let map = StreakMap::compute(2024, &log);
        assert_eq!(map.get(date(2024, 2, 29)), Some(3));
        assert_eq!(map.get(date(2024, 3, 1)), Some(4));
        assert_eq!(map.get(date(2024, 12, 31)), Some(0));
    }

    #[test]
    fn test_current_streak_past_year_end() {
        let mut log = ActivityLog::new();
        log.mark_range(date(2026, 12, 29), date(2026, 12, 31));

        let map = StreakMap::compute(2026, &log);
        assert_eq!(map.current_streak(date(2027, 3, 1)), 3);
        assert_eq!(map.current_streak(date(2025, 3, 1)), 0);
        assert_eq!(map.current_streak(date(2026, 12, 30)), 2);
    }

    #[test]
    fn test_summary_histogram() {
        let mut log = ActivityLog::new();
        log.mark_range(date(2026, 1, 3), date(2026, 1, 13));
        log.mark(date(2026, 1, 15));

        let summary = StreakMap::compute(2026, &log).summary();
        // Streaks 1..=11 and one more 1.
        assert_eq!(summary.levels, vec![365 - 12, 3, 3, 3, 3]);
        assert_eq!(summary.final_streak, 0);
    }

    #[test]
    fn test_empty_log_is_all_zero() {
        let map = StreakMap::compute(2026, &ActivityLog::new());
        assert!(map.iter().all(|(_, s)| s == 0));
        assert_eq!(map.level_histogram(), [365, 0, 0, 0, 0]);
    }

    proptest! {
        #[test]
        fn inactive_days_have_zero_streak(
            year in 1990i32..2100,
            ordinals in proptest::collection::vec(1u32..=365, 0..120),
        ) {
            let log: ActivityLog = ordinals
                .iter()
                .filter_map(|o| NaiveDate::from_yo_opt(year, *o))
                .collect();
            let map = StreakMap::compute(year, &log);

            for (day, streak) in map.iter() {
                if !log.is_active(day) {
                    prop_assert_eq!(streak, 0);
                }
            }
        }

        #[test]
        fn contiguous_run_ends_at_its_length(
            year in 1990i32..2100,
            start in 1u32..=300,
            len in 1u32..=60,
        ) {
            let first = NaiveDate::from_yo_opt(year, start).unwrap();
            let last = first + chrono::Duration::days(len as i64 - 1);
            let mut log = ActivityLog::new();
            log.mark_range(first, last);

            let map = StreakMap::compute(year, &log);
            prop_assert_eq!(map.get(last), Some(len));
            let after = last.succ_opt().unwrap();
            prop_assert_eq!(map.get(after), Some(0));
        }

        #[test]
        fn streak_follows_recurrence(
            year in 1990i32..2100,
            ordinals in proptest::collection::vec(1u32..=366, 0..200),
        ) {
            let log: ActivityLog = ordinals
                .iter()
                .filter_map(|o| NaiveDate::from_yo_opt(year, *o))
                .collect();
            let map = StreakMap::compute(year, &log);

            let mut previous = 0u32;
            for (day, streak) in map.iter() {
                let expected = if log.is_active(day) { previous + 1 } else { 0 };
                prop_assert_eq!(streak, expected);
                previous = streak;
            }
        }
    }
}
