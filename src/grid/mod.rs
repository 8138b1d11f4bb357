//! Grid-body geometry for the chart.
//!
//! Every resolver here is a pure function of its inputs. [`compute_grid_layout`]
//! validates the configuration, stacks the rows to get the grid height, and
//! then asks each resolver for its share of the picture.

pub mod date_math;
pub mod geometry;
pub mod holiday;
pub mod rows;
pub mod ticks;
pub mod today;
pub mod weekend;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{GridColors, GridConfig};
use crate::error::GridResult;

pub use date_math::{add_to_date, add_to_date_str, is_same_day, parse_date_time, TimeUnit};
pub use geometry::{Line, Rect};
pub use holiday::resolve_holiday_bands;
pub use rows::{layout_rows, RowLayout, RowSpec};
pub use ticks::{layout_ticks, DateColumn};
pub use today::{resolve_today_marker, Direction};
pub use weekend::{resolve_weekend_bands, WeekendDays};

/// Everything a renderer needs to paint the grid body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub row_bands: Vec<Rect>,
    pub row_lines: Vec<Line>,
    pub ticks: Vec<Line>,
    pub today_marker: Option<Rect>,
    pub weekend_bands: Vec<Rect>,
    pub holiday_bands: Vec<Rect>,
    /// Copied from the configuration as-is.
    pub colors: GridColors,
}

impl GridLayout {
    /// Height shared by ticks, the today marker and every band.
    pub fn height(&self) -> f32 {
        self.row_lines.last().map_or(0.0, |line| line.y1)
    }
}

/// Compute the full grid body for `rows` against the column `dates`.
///
/// `now` is the instant the today marker is resolved against. The
/// configuration is checked before any geometry is produced.
pub fn compute_grid_layout(
    rows: &[RowSpec],
    dates: &[NaiveDateTime],
    config: &GridConfig,
    now: NaiveDateTime,
) -> GridResult<GridLayout> {
    config.validate()?;
    let weekend_days = config.weekend()?;
    let column_width = config.column_width;

    let row_layout = layout_rows(rows.len(), config.row_height, config.resolved_width(dates.len()));
    let height = row_layout.height;

    let layout = GridLayout {
        ticks: layout_ticks(dates, column_width, height),
        today_marker: resolve_today_marker(dates, column_width, height, now, config.direction()),
        weekend_bands: resolve_weekend_bands(dates, column_width, height, weekend_days.as_ref()),
        holiday_bands: resolve_holiday_bands(
            dates,
            column_width,
            height,
            config.holidays.as_deref(),
        ),
        row_bands: row_layout.bands,
        row_lines: row_layout.lines,
        colors: config.colors,
    };

    debug!(
        rows = layout.row_bands.len(),
        columns = layout.ticks.len(),
        today = layout.today_marker.is_some(),
        weekend = layout.weekend_bands.len(),
        holidays = layout.holiday_bands.len(),
        "computed grid layout"
    );
    Ok(layout)
}
