//! Date helpers used by the grid resolvers.
//!
//! Dates are `NaiveDateTime` values whose fields are already normalized by the
//! caller; nothing here converts between time zones.

use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{GridError, GridResult};

/// Units accepted by [`add_to_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Month => "month",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
            TimeUnit::Millisecond => "millisecond",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(TimeUnit::Year),
            "month" => Ok(TimeUnit::Month),
            "day" => Ok(TimeUnit::Day),
            "hour" => Ok(TimeUnit::Hour),
            "minute" => Ok(TimeUnit::Minute),
            "second" => Ok(TimeUnit::Second),
            "millisecond" => Ok(TimeUnit::Millisecond),
            other => Err(GridError::InvalidUnit(other.to_string())),
        }
    }
}

/// Shift `date` by `amount` of `unit`, returning the new date.
///
/// Month and year offsets keep the day of month where possible and clamp it
/// to the last day of the target month otherwise (Jan 31 + 1 month = Feb 28/29).
pub fn add_to_date(date: NaiveDateTime, amount: i64, unit: TimeUnit) -> GridResult<NaiveDateTime> {
    let shifted = match unit {
        TimeUnit::Year => amount.checked_mul(12).and_then(|m| add_months(date, m)),
        TimeUnit::Month => add_months(date, amount),
        TimeUnit::Day => TimeDelta::try_days(amount).and_then(|d| date.checked_add_signed(d)),
        TimeUnit::Hour => TimeDelta::try_hours(amount).and_then(|d| date.checked_add_signed(d)),
        TimeUnit::Minute => {
            TimeDelta::try_minutes(amount).and_then(|d| date.checked_add_signed(d))
        }
        TimeUnit::Second => {
            TimeDelta::try_seconds(amount).and_then(|d| date.checked_add_signed(d))
        }
        TimeUnit::Millisecond => {
            TimeDelta::try_milliseconds(amount).and_then(|d| date.checked_add_signed(d))
        }
    };

    shifted.ok_or(GridError::DateOutOfRange {
        date,
        amount,
        unit: unit.as_str(),
    })
}

/// Like [`add_to_date`], but takes the unit by name.
pub fn add_to_date_str(date: NaiveDateTime, amount: i64, unit: &str) -> GridResult<NaiveDateTime> {
    add_to_date(date, amount, unit.parse()?)
}

fn add_months(date: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let count = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(count)
    } else {
        date.checked_sub_months(count)
    }
}

/// True when both dates fall on the same calendar day, ignoring time of day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Parse `2024-01-03T12:00:00` or a bare `2024-01-03` (taken as midnight).
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(date_time) = s.parse::<NaiveDateTime>() {
        return Some(date_time);
    }
    for fmt in &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(date_time);
        }
    }
    s.parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
