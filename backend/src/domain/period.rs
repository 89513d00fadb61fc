//! Resolution of named periods into concrete time windows.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use shared::Period;

/// Lower-bounded window of time, open towards the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub period: Period,
    /// Inclusive start; `None` means no lower bound at all
    pub start: Option<NaiveDateTime>,
}

impl PeriodWindow {
    /// Compute the window for `period` as seen on `today`.
    ///
    /// - week: seven days before today
    /// - month: first day of the current month
    /// - year: first day of the current year
    /// - all: unbounded
    pub fn resolve(period: Period, today: NaiveDate) -> Self {
        let start_date = match period {
            Period::Week => today.checked_sub_days(Days::new(7)),
            Period::Month => today.with_day(1),
            Period::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Period::All => None,
        };

        Self {
            period,
            start: start_date.map(|date| date.and_time(NaiveTime::MIN)),
        }
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        match self.start {
            Some(start) => timestamp >= start,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_week_starts_seven_days_back() {
        let window = PeriodWindow::resolve(Period::Week, date(2025, 3, 5));
        assert_eq!(window.start, Some(midnight(2025, 2, 26)));
    }

    #[test]
    fn test_month_starts_on_first_day() {
        let window = PeriodWindow::resolve(Period::Month, date(2025, 3, 17));
        assert_eq!(window.start, Some(midnight(2025, 3, 1)));
    }

    #[test]
    fn test_year_starts_on_january_first() {
        let window = PeriodWindow::resolve(Period::Year, date(2024, 12, 31));
        assert_eq!(window.start, Some(midnight(2024, 1, 1)));
    }

    #[test]
    fn test_all_has_no_lower_bound() {
        let window = PeriodWindow::resolve(Period::All, date(2025, 3, 17));
        assert_eq!(window.start, None);
        assert!(window.contains(midnight(1900, 1, 1)));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = PeriodWindow::resolve(Period::Month, date(2025, 3, 17));
        assert!(window.contains(midnight(2025, 3, 1)));
        assert!(!window.contains(
            date(2025, 2, 28).and_hms_opt(23, 59, 59).unwrap()
        ));
        assert!(window.contains(midnight(2025, 4, 2)));
    }
}
