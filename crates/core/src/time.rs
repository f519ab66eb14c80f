//! Time buckets and custom date ranges for report-style commands
//!
//! Report, order, top-product and customer queries carry either a named
//! bucket ("last week", "पिछले महीने") or an absolute range ("1 June to
//! 20 June"). Buckets resolve to concrete date pairs relative to a caller
//! supplied reference day so the resolution itself stays deterministic.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Named relative time periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
    /// Trailing window of N days ending today
    LastDays(u32),
    All,
}

impl TimeBucket {
    /// Resolve this bucket to an inclusive `(start, end)` date pair
    ///
    /// Weeks start on Monday. `All` reaches ten years back.
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            TimeBucket::Today => (today, today),
            TimeBucket::Yesterday => {
                let yesterday = today - Days::new(1);
                (yesterday, yesterday)
            }
            TimeBucket::ThisWeek => {
                let monday = today - Days::new(today.weekday().num_days_from_monday() as u64);
                (monday, today)
            }
            TimeBucket::LastWeek => {
                let monday = today - Days::new(today.weekday().num_days_from_monday() as u64 + 7);
                (monday, monday + Days::new(6))
            }
            TimeBucket::ThisMonth => (today.with_day(1).unwrap_or(today), today),
            TimeBucket::LastMonth => {
                let first_of_this = today.with_day(1).unwrap_or(today);
                let first_of_last = first_of_this - Months::new(1);
                (first_of_last, first_of_this - Days::new(1))
            }
            TimeBucket::ThisYear => (
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
                today,
            ),
            TimeBucket::LastYear => {
                let year = today.year() - 1;
                (
                    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today),
                    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today),
                )
            }
            TimeBucket::LastDays(n) => (today - Days::new(*n as u64), today),
            TimeBucket::All => (today - Months::new(120), today),
        }
    }
}

/// A resolved time window for a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeWindow {
    /// Named relative period
    Bucket { bucket: TimeBucket },
    /// Explicit absolute range, inclusive on both ends
    Range { start: NaiveDate, end: NaiveDate },
}

impl TimeWindow {
    pub fn bucket(bucket: TimeBucket) -> Self {
        TimeWindow::Bucket { bucket }
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        TimeWindow::Range { start, end }
    }

    /// Resolve to an inclusive `(start, end)` date pair
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            TimeWindow::Bucket { bucket } => bucket.resolve(today),
            TimeWindow::Range { start, end } => (*start, *end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_and_yesterday() {
        let today = day(2025, 6, 18);
        assert_eq!(TimeBucket::Today.resolve(today), (today, today));
        assert_eq!(
            TimeBucket::Yesterday.resolve(today),
            (day(2025, 6, 17), day(2025, 6, 17))
        );
    }

    #[test]
    fn test_weeks_start_monday() {
        // 2025-06-18 is a Wednesday
        let today = day(2025, 6, 18);
        assert_eq!(
            TimeBucket::ThisWeek.resolve(today),
            (day(2025, 6, 16), today)
        );
        assert_eq!(
            TimeBucket::LastWeek.resolve(today),
            (day(2025, 6, 9), day(2025, 6, 15))
        );
    }

    #[test]
    fn test_last_month_across_year_boundary() {
        let today = day(2025, 1, 15);
        assert_eq!(
            TimeBucket::LastMonth.resolve(today),
            (day(2024, 12, 1), day(2024, 12, 31))
        );
    }

    #[test]
    fn test_this_month() {
        let today = day(2025, 6, 18);
        assert_eq!(
            TimeBucket::ThisMonth.resolve(today),
            (day(2025, 6, 1), today)
        );
    }

    #[test]
    fn test_year_buckets() {
        let today = day(2025, 6, 18);
        assert_eq!(
            TimeBucket::ThisYear.resolve(today),
            (day(2025, 1, 1), today)
        );
        assert_eq!(
            TimeBucket::LastYear.resolve(today),
            (day(2024, 1, 1), day(2024, 12, 31))
        );
    }

    #[test]
    fn test_last_days() {
        let today = day(2025, 6, 18);
        assert_eq!(
            TimeBucket::LastDays(7).resolve(today),
            (day(2025, 6, 11), today)
        );
    }

    #[test]
    fn test_range_window_passthrough() {
        let window = TimeWindow::range(day(2025, 6, 1), day(2025, 6, 20));
        assert_eq!(
            window.resolve(day(2025, 12, 31)),
            (day(2025, 6, 1), day(2025, 6, 20))
        );
    }
}
