use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Task;
use crate::error::{GridError, GridResult};

/// Days of padding shown before the earliest task.
const LEAD_DAYS: i64 = 7;
/// Days of padding shown after the latest task.
const TRAIL_DAYS: i64 = 30;
/// Most columns a single timeline may produce.
pub const MAX_COLUMNS: usize = 50_000;

/// Controls how much time one grid column stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineScale {
    #[default]
    Days,
    Weeks,
    Months,
}

impl fmt::Display for TimelineScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimelineScale::Days => "days",
            TimelineScale::Weeks => "weeks",
            TimelineScale::Months => "months",
        };
        f.write_str(name)
    }
}

impl FromStr for TimelineScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" => Ok(TimelineScale::Days),
            "week" | "weeks" => Ok(TimelineScale::Weeks),
            "month" | "months" => Ok(TimelineScale::Months),
            other => Err(format!("unknown scale '{}': expected days, weeks or months", other)),
        }
    }
}

/// The date range shown by the grid and the scale it is cut into.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineViewport {
    /// The first visible date.
    pub start: NaiveDate,
    /// The last visible date.
    pub end: NaiveDate,
    pub scale: TimelineScale,
}

impl TimelineViewport {
    pub fn new(start: NaiveDate, end: NaiveDate, scale: TimelineScale) -> Self {
        Self { start, end, scale }
    }

    /// A viewport covering every task with some padding on both sides.
    /// Without tasks the range is built around `today`. Padding stops at the
    /// ends of the representable date range.
    pub fn for_tasks(tasks: &[Task], today: NaiveDate, scale: TimelineScale) -> Self {
        let earliest = tasks.iter().map(|t| t.start).min().unwrap_or(today);
        let latest = tasks.iter().map(|t| t.end).max().unwrap_or(today);
        let start = earliest
            .checked_sub_signed(Duration::days(LEAD_DAYS))
            .unwrap_or(NaiveDate::MIN);
        let end = latest
            .checked_add_signed(Duration::days(TRAIL_DAYS))
            .unwrap_or(NaiveDate::MAX);
        Self::new(start, end, scale)
    }

    /// Column dates at midnight, one per scale step, covering `start..=end`.
    ///
    /// Weeks begin on the Monday on or before `start`; months on the first of
    /// `start`'s month. Fails once more than [`MAX_COLUMNS`] would be needed.
    pub fn column_dates(&self) -> GridResult<Vec<NaiveDateTime>> {
        let mut dates = Vec::new();
        let Some(mut date) = self.first_column() else {
            return Ok(dates);
        };

        while date <= self.end {
            if dates.len() == MAX_COLUMNS {
                return Err(GridError::TimelineTooLong {
                    start: self.start,
                    end: self.end,
                    max: MAX_COLUMNS,
                });
            }
            dates.push(date.and_time(NaiveTime::MIN));
            match self.next_column(date) {
                Some(next) => date = next,
                None => break,
            }
        }
        Ok(dates)
    }

    fn first_column(&self) -> Option<NaiveDate> {
        match self.scale {
            TimelineScale::Days => Some(self.start),
            TimelineScale::Weeks => {
                let weekday = self.start.weekday().num_days_from_monday();
                self.start
                    .checked_sub_signed(Duration::days(i64::from(weekday)))
            }
            TimelineScale::Months => self.start.with_day(1),
        }
    }

    fn next_column(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self.scale {
            TimelineScale::Days => date.succ_opt(),
            TimelineScale::Weeks => date.checked_add_signed(Duration::days(7)),
            TimelineScale::Months => date.checked_add_months(chrono::Months::new(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_cover_range_inclusive() {
        let viewport = TimelineViewport::new(ymd(2024, 1, 30), ymd(2024, 2, 2), TimelineScale::Days);
        let dates = viewport.column_dates().unwrap();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], ymd(2024, 1, 30).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(dates[3].date(), ymd(2024, 2, 2));
    }

    #[test]
    fn test_weeks_start_on_monday() {
        // 2024-01-03 is a Wednesday
        let viewport = TimelineViewport::new(ymd(2024, 1, 3), ymd(2024, 1, 22), TimelineScale::Weeks);
        let dates = viewport.column_dates().unwrap();
        let days: Vec<NaiveDate> = dates.iter().map(|d| d.date()).collect();
        assert_eq!(days, vec![ymd(2024, 1, 1), ymd(2024, 1, 8), ymd(2024, 1, 15), ymd(2024, 1, 22)]);
        assert!(days.iter().all(|d| d.weekday() == Weekday::Mon));
    }

    #[test]
    fn test_months_start_on_the_first() {
        let viewport = TimelineViewport::new(ymd(2023, 11, 15), ymd(2024, 2, 1), TimelineScale::Months);
        let days: Vec<NaiveDate> = viewport.column_dates().unwrap().iter().map(|d| d.date()).collect();
        assert_eq!(
            days,
            vec![ymd(2023, 11, 1), ymd(2023, 12, 1), ymd(2024, 1, 1), ymd(2024, 2, 1)]
        );
    }

    #[test]
    fn test_empty_when_end_precedes_start() {
        let viewport = TimelineViewport::new(ymd(2024, 5, 2), ymd(2024, 5, 1), TimelineScale::Days);
        assert!(viewport.column_dates().unwrap().is_empty());
    }

    #[test]
    fn test_for_tasks_pads_range() {
        let tasks = vec![
            Task::new("A", ymd(2024, 3, 10), ymd(2024, 3, 12)),
            Task::new("B", ymd(2024, 3, 5), ymd(2024, 3, 20)),
        ];
        let viewport = TimelineViewport::for_tasks(&tasks, ymd(2000, 1, 1), TimelineScale::Weeks);
        assert_eq!(viewport.start, ymd(2024, 2, 27));
        assert_eq!(viewport.end, ymd(2024, 4, 19));
        assert_eq!(viewport.scale, TimelineScale::Weeks);

        let empty = TimelineViewport::for_tasks(&[], ymd(2024, 1, 10), TimelineScale::Days);
        assert_eq!(empty.start, ymd(2024, 1, 3));
        assert_eq!(empty.end, ymd(2024, 2, 9));
    }

    #[test]
    fn test_for_tasks_clamps_at_date_range_edges() {
        let early = vec![Task::new("early", NaiveDate::MIN, NaiveDate::MIN)];
        let viewport = TimelineViewport::for_tasks(&early, NaiveDate::MIN, TimelineScale::Days);
        assert_eq!(viewport.start, NaiveDate::MIN);
        assert_eq!(viewport.end, NaiveDate::MIN + Duration::days(TRAIL_DAYS));

        let late = vec![Task::new("late", NaiveDate::MAX, NaiveDate::MAX)];
        let viewport = TimelineViewport::for_tasks(&late, NaiveDate::MAX, TimelineScale::Months);
        assert_eq!(viewport.start, NaiveDate::MAX - Duration::days(LEAD_DAYS));
        assert_eq!(viewport.end, NaiveDate::MAX);
        // stepping past MAX ends the sequence instead of overflowing
        assert_eq!(viewport.column_dates().unwrap().len(), 1);
    }

    #[test]
    fn test_too_many_columns_is_an_error() {
        let viewport = TimelineViewport::new(ymd(1, 1, 1), ymd(9000, 1, 1), TimelineScale::Days);
        let err = viewport.column_dates().unwrap_err();
        assert!(matches!(err, GridError::TimelineTooLong { max: MAX_COLUMNS, .. }));

        // the same span in months stays well below the cap
        let monthly = TimelineViewport::new(ymd(1, 1, 1), ymd(2000, 12, 31), TimelineScale::Months);
        assert_eq!(monthly.column_dates().unwrap().len(), 24_000);

        let exact = TimelineViewport::new(
            ymd(2000, 1, 1),
            ymd(2000, 1, 1) + Duration::days(MAX_COLUMNS as i64 - 1),
            TimelineScale::Days,
        );
        assert_eq!(exact.column_dates().unwrap().len(), MAX_COLUMNS);
    }

    #[test]
    fn test_scale_parsing() {
        assert_eq!("Weeks".parse::<TimelineScale>().unwrap(), TimelineScale::Weeks);
        assert_eq!("day".parse::<TimelineScale>().unwrap(), TimelineScale::Days);
        assert!("quarters".parse::<TimelineScale>().is_err());
        assert_eq!(TimelineScale::Months.to_string(), "months");
    }
}
