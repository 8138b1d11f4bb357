use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDateTime, Weekday};
use tracing::trace;

use super::geometry::Rect;
use super::ticks::column_x;
use crate::error::{GridError, GridResult};

/// Days of the week highlighted as weekend, numbered 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeekendDays(BTreeSet<u8>);

impl WeekendDays {
    pub fn new(days: impl IntoIterator<Item = u8>) -> GridResult<Self> {
        let mut set = BTreeSet::new();
        for day in days {
            if day > 6 {
                return Err(GridError::invalid(
                    "weekend_days",
                    format!("day of week must be 0 (Sunday) to 6 (Saturday), got {}", day),
                ));
            }
            set.insert(day);
        }
        Ok(Self(set))
    }

    pub fn from_weekdays(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self(days.into_iter().map(day_number).collect())
    }

    /// Saturday and Sunday.
    pub fn saturday_sunday() -> Self {
        Self::from_weekdays([Weekday::Sat, Weekday::Sun])
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0.contains(&day_number(weekday))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn day_number(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// A full-height band for every column whose date falls on a weekend day.
pub fn resolve_weekend_bands(
    dates: &[NaiveDateTime],
    column_width: f32,
    grid_height: f32,
    weekend_days: Option<&WeekendDays>,
) -> Vec<Rect> {
    let Some(weekend_days) = weekend_days.filter(|days| !days.is_empty()) else {
        return Vec::new();
    };

    dates
        .iter()
        .enumerate()
        .filter(|(_, date)| weekend_days.contains(date.weekday()))
        .map(|(index, date)| {
            trace!(index, %date, "weekend column");
            Rect::column(column_x(index, column_width), column_width, grid_height)
        })
        .collect()
}
