//! Time-progress percentages for progress bar metadata.
//!
//! A progress unit names a period ("hour", "day", "week", ...). The
//! percentage is how much of the current period has elapsed, computed with
//! integer arithmetic as `100 * elapsed / period`, truncated toward zero.
//!
//! | Unit | Elapsed | Period |
//! |------|---------|--------|
//! | `minute` | seconds | 60 |
//! | `hour` | minutes·60 + seconds | 3600 |
//! | `12h` | (hour mod 12)·60 + minutes | 720 |
//! | `day` | hour·60 + minutes | 1440 |
//! | `monday_week` | days since Monday·24 + hour | 168 |
//! | `week` | days since Sunday·24 + hour | 168 |
//! | `month` | day of month·24 + hour | 730 |
//! | `year` | day of year (0-based) | 365 |
//! | `100` | - | always 100 |
//!
//! `month` and `year` use fixed denominators that ignore the actual month
//! length and leap years. The resulting percentages are kept as they are,
//! only capped at 100.
//!
//! # Example
//!
//! ```rust
//! use barline_render::{progress_percent, BrokenDownTime};
//!
//! let noon = BrokenDownTime { hour: 12, ..Default::default() };
//! assert_eq!(progress_percent("day", &noon), 50);
//! assert_eq!(progress_percent("fortnight", &noon), 0);
//! ```

use std::str::FromStr;

use chrono::{Datelike, Timelike};

use crate::error::RenderError;

/// The calendar fields the progress formulas need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrokenDownTime {
    /// Seconds after the minute, 0-60 (60 only on a leap second).
    pub second: u32,
    /// Minutes after the hour, 0-59.
    pub minute: u32,
    /// Hours since midnight, 0-23.
    pub hour: u32,
    /// Days since Sunday, 0-6.
    pub weekday: u32,
    /// Day of the month, 1-31.
    pub day_of_month: u32,
    /// Days since January 1st, 0-365.
    pub day_of_year: u32,
}

impl BrokenDownTime {
    /// Breaks down any chrono date-time in its own timezone.
    pub fn from_datetime<T: Datelike + Timelike>(t: &T) -> Self {
        Self {
            // chrono folds a leap second into nanoseconds >= 1e9
            second: t.second() + u32::from(t.nanosecond() >= 1_000_000_000),
            minute: t.minute(),
            hour: t.hour(),
            weekday: t.weekday().num_days_from_sunday(),
            day_of_month: t.day(),
            day_of_year: t.ordinal0(),
        }
    }
}

/// A named progress period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressUnit {
    Minute,
    Hour,
    HalfDay,
    Day,
    MondayWeek,
    Week,
    Month,
    Year,
    Full,
}

const UNIT_NAMES: [(ProgressUnit, &str); 9] = [
    (ProgressUnit::Minute, "minute"),
    (ProgressUnit::Hour, "hour"),
    (ProgressUnit::HalfDay, "12h"),
    (ProgressUnit::Day, "day"),
    (ProgressUnit::MondayWeek, "monday_week"),
    (ProgressUnit::Week, "week"),
    (ProgressUnit::Month, "month"),
    (ProgressUnit::Year, "year"),
    (ProgressUnit::Full, "100"),
];

impl ProgressUnit {
    /// Looks up a unit by its exact config name.
    pub fn from_name(name: &str) -> Option<Self> {
        UNIT_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(unit, _)| *unit)
    }

    pub fn name(&self) -> &'static str {
        UNIT_NAMES[*self as usize].1
    }

    /// Percentage of this period that has elapsed at `t`, capped at 100.
    pub fn percent(&self, t: &BrokenDownTime) -> u8 {
        let (elapsed, period) = match self {
            ProgressUnit::Minute => (t.second, 60),
            ProgressUnit::Hour => (t.minute * 60 + t.second, 60 * 60),
            ProgressUnit::HalfDay => ((t.hour % 12) * 60 + t.minute, 12 * 60),
            ProgressUnit::Day => (t.hour * 60 + t.minute, 24 * 60),
            ProgressUnit::MondayWeek => {
                let days_since_monday = if t.weekday == 0 { 6 } else { t.weekday - 1 };
                (days_since_monday * 24 + t.hour, 7 * 24)
            }
            ProgressUnit::Week => (t.weekday * 24 + t.hour, 7 * 24),
            ProgressUnit::Month => (t.day_of_month * 24 + t.hour, 730),
            ProgressUnit::Year => (t.day_of_year, 365),
            ProgressUnit::Full => return 100,
        };

        (100 * elapsed / period).min(100) as u8
    }
}

impl FromStr for ProgressUnit {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RenderError::UnknownProgressUnit(s.to_string()))
    }
}

/// Percentage of the named period elapsed at `t`.
///
/// Unknown unit names yield 0.
pub fn progress_percent(unit: &str, t: &BrokenDownTime) -> u8 {
    match ProgressUnit::from_name(unit) {
        Some(unit) => unit.percent(t),
        None => {
            tracing::debug!(unit, "unknown progress unit, reporting 0%");
            0
        }
    }
}
