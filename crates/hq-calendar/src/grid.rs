//! Calendar month arithmetic and the month-grid descriptor.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// English month names indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sunday-first weekday headers for a 7-column grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar month: year plus zero-based month (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    /// 0-11.
    pub month: u32,
}

impl Month {
    /// Builds a month, normalizing out-of-range month numbers into the
    /// year, so `Month::new(2026, 12)` is January 2027 and
    /// `Month::new(2026, -1)` is December 2025.
    pub fn new(year: i32, month: i32) -> Self {
        let total = i64::from(year) * 12 + i64::from(month);
        Self {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// Shifts by `delta` months, rolling the year over at the 0/11
    /// boundary in either direction.
    pub fn shifted(self, delta: i32) -> Self {
        Self::new(self.year, self.month as i32 + delta)
    }

    pub fn next(self) -> Self {
        self.shifted(1)
    }

    pub fn prev(self) -> Self {
        self.shifted(-1)
    }

    /// English month name.
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// The first calendar day of the month.
    ///
    /// Years outside chrono's representable range saturate to the nearest
    /// representable date, so the derived helpers stay total; such a month
    /// reports zero days.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or(if self.year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
    }

    /// Number of days in the month, leap years included.
    ///
    /// Derived from the distance to the first day of the following month,
    /// so the Gregorian rules come from the date type rather than
    /// hand-rolled divisibility checks.
    pub fn day_count(self) -> u32 {
        let this = self.first_day();
        let next = self.next().first_day();
        (next - this).num_days().max(0) as u32
    }

    /// Weekday of day 1, Sunday-first (0 = Sunday .. 6 = Saturday).
    pub fn first_weekday(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// The calendar date of `day` (1-based) in this month, if valid.
    pub fn date_of(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }
}

/// Number of days in the given month (`month` 0-11, normalized like
/// [`Month::new`]).
pub fn days_in_month(year: i32, month: i32) -> u32 {
    Month::new(year, month).day_count()
}

/// Weekday (0 = Sunday) on which day 1 falls; equals the count of empty
/// leading cells in a 7-column grid.
pub fn first_weekday_offset(year: i32, month: i32) -> u32 {
    Month::new(year, month).first_weekday()
}

/// Layout metadata for rendering one month as a 7-column grid.
///
/// Derived, never stored: recomputed on every navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: Month,
    /// Days in the month (28-31).
    pub day_count: u32,
    /// Empty cells before day 1 (0-6).
    pub leading_blanks: u32,
}

impl MonthGrid {
    pub fn compute(month: Month) -> Self {
        Self {
            month,
            day_count: month.day_count(),
            leading_blanks: month.first_weekday(),
        }
    }

    /// Total cells including leading blanks.
    pub fn cell_count(&self) -> u32 {
        self.leading_blanks + self.day_count
    }

    /// Number of 7-column rows needed.
    pub fn row_count(&self) -> u32 {
        self.cell_count().div_ceil(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leap_year_rules() {
        assert_eq!(days_in_month(2024, 1), 29); // divisible by 4
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29); // divisible by 400
        assert_eq!(days_in_month(1900, 1), 28); // divisible by 100, not 400
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2026, 0), 31);
        assert_eq!(days_in_month(2026, 3), 30);
        assert_eq!(days_in_month(2026, 11), 31);
    }

    #[test]
    fn shift_rolls_year_forward() {
        let dec = Month {
            year: 2026,
            month: 11,
        };
        assert_eq!(dec.shifted(1), Month {
            year: 2027,
            month: 0
        });
    }

    #[test]
    fn shift_rolls_year_backward() {
        let jan = Month {
            year: 2026,
            month: 0,
        };
        assert_eq!(jan.shifted(-1), Month {
            year: 2025,
            month: 11
        });
    }

    #[test]
    fn shift_round_trips() {
        let m = Month {
            year: 2026,
            month: 5,
        };
        assert_eq!(m.shifted(1).shifted(-1), m);
        assert_eq!(m.shifted(-7).shifted(7), m);
    }

    #[test]
    fn new_normalizes_out_of_range_months() {
        assert_eq!(Month::new(2026, 12), Month {
            year: 2027,
            month: 0
        });
        assert_eq!(Month::new(2026, -1), Month {
            year: 2025,
            month: 11
        });
        assert_eq!(Month::new(2026, 25), Month {
            year: 2028,
            month: 1
        });
    }

    #[test]
    fn first_weekday_is_sunday_first() {
        // 2026-02-01 is a Sunday.
        assert_eq!(first_weekday_offset(2026, 1), 0);
        // 2026-03-01 is a Sunday as well (Feb 2026 has exactly 4 weeks).
        assert_eq!(first_weekday_offset(2026, 2), 0);
        // 2024-02-01 is a Thursday.
        assert_eq!(first_weekday_offset(2024, 1), 4);
    }

    #[test]
    fn grid_for_february_2026() {
        let grid = MonthGrid::compute(Month {
            year: 2026,
            month: 1,
        });
        assert_eq!(grid.day_count, 28);
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.row_count(), 4);
    }

    #[test]
    fn grid_rows_cover_trailing_partial_week() {
        // August 2026: 31 days starting on a Saturday -> 6 rows.
        let grid = MonthGrid::compute(Month {
            year: 2026,
            month: 7,
        });
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.cell_count(), 37);
        assert_eq!(grid.row_count(), 6);
    }

    #[test]
    fn month_names() {
        assert_eq!(Month { year: 2026, month: 1 }.name(), "February");
        assert_eq!(MONTH_NAMES[11], "December");
        assert_eq!(WEEKDAY_HEADERS[0], "Sun");
    }

    #[test]
    fn extreme_years_saturate_instead_of_panicking() {
        assert_eq!(days_in_month(300_000, 1), 0);
        assert_eq!(days_in_month(-300_000, 5), 0);
        assert!(first_weekday_offset(300_000, 1) < 7);

        let grid = MonthGrid::compute(Month::new(300_000, 1));
        assert_eq!(grid.day_count, 0);
        assert!(grid.row_count() <= 1);

        assert!(Month::new(300_000, 1).date_of(1).is_none());

        // The last fully representable years still follow the rules.
        assert_eq!(days_in_month(262_142, 1), 28);
    }

    #[test]
    fn date_of_validates_day() {
        let feb = Month {
            year: 2026,
            month: 1,
        };
        assert!(feb.date_of(28).is_some());
        assert!(feb.date_of(29).is_none());
        assert!(feb.date_of(0).is_none());
    }

    #[test]
    fn containing_uses_zero_based_month() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
        assert_eq!(Month::containing(d), Month {
            year: 2026,
            month: 1
        });
    }
}
