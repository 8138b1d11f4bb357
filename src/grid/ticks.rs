use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::geometry::Line;

/// One column of the timeline: a date and where its slice starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateColumn {
    pub date: NaiveDateTime,
    pub index: usize,
    pub x: f32,
}

impl DateColumn {
    /// Columns for `dates` in input order. Offsets depend on the index only.
    pub fn columns(dates: &[NaiveDateTime], column_width: f32) -> Vec<DateColumn> {
        dates
            .iter()
            .enumerate()
            .map(|(index, &date)| DateColumn {
                date,
                index,
                x: column_x(index, column_width),
            })
            .collect()
    }
}

pub(crate) fn column_x(index: usize, column_width: f32) -> f32 {
    index as f32 * column_width
}

/// A vertical tick at the left edge of every date column.
pub fn layout_ticks(dates: &[NaiveDateTime], column_width: f32, grid_height: f32) -> Vec<Line> {
    (0..dates.len())
        .map(|index| Line::vertical(column_x(index, column_width), grid_height))
        .collect()
}
