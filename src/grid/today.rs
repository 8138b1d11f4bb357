//! Locating the column that contains the current instant.
//!
//! Column `i` covers `dates[i] <= now < dates[i + 1]`. The last column has no
//! right bound of its own, so in left-to-right layouts its width in time is
//! taken from the interval just before it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::date_math::{add_to_date, TimeUnit};
use super::geometry::Rect;
use super::ticks::column_x;

/// Horizontal reading direction of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn from_rtl(rtl: bool) -> Self {
        if rtl {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

/// The highlight rect for the column containing `now`, if any.
///
/// In `Rtl` layouts the matched interval is drawn one column further along
/// and the last-column inference is not applied.
pub fn resolve_today_marker(
    dates: &[NaiveDateTime],
    column_width: f32,
    grid_height: f32,
    now: NaiveDateTime,
    direction: Direction,
) -> Option<Rect> {
    let index = match direction {
        Direction::Ltr => find_interval(dates, now).or_else(|| infer_last_column(dates, now)),
        Direction::Rtl => find_interval(dates, now).map(|i| i + 1),
    }?;

    trace!(index, ?direction, %now, "today marker column");
    Some(Rect::column(column_x(index, column_width), column_width, grid_height))
}

/// First `i` with `dates[i] <= now < dates[i + 1]`.
fn find_interval(dates: &[NaiveDateTime], now: NaiveDateTime) -> Option<usize> {
    dates
        .windows(2)
        .position(|pair| pair[0] <= now && now < pair[1])
}

fn infer_last_column(dates: &[NaiveDateTime], now: NaiveDateTime) -> Option<usize> {
    let [.., previous, last] = dates else {
        return None;
    };
    if now < *last {
        return None;
    }

    let span_ms = (*last - *previous).num_milliseconds();
    let end = add_to_date(*last, span_ms, TimeUnit::Millisecond).ok()?;
    (now < end).then_some(dates.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn daily() -> Vec<NaiveDateTime> {
        vec![at(1, 1, 0), at(1, 2, 0), at(1, 3, 0)]
    }

    #[test]
    fn test_ltr_marks_containing_column() {
        let marker = resolve_today_marker(&daily(), 20.0, 100.0, at(1, 1, 9), Direction::Ltr);
        assert_eq!(marker, Some(Rect::new(0.0, 0.0, 20.0, 100.0)));

        let marker = resolve_today_marker(&daily(), 20.0, 100.0, at(1, 2, 23), Direction::Ltr);
        assert_eq!(marker, Some(Rect::new(20.0, 0.0, 20.0, 100.0)));
    }

    #[test]
    fn test_interval_start_is_inclusive() {
        let marker = resolve_today_marker(&daily(), 20.0, 100.0, at(1, 2, 0), Direction::Ltr);
        assert_eq!(marker.map(|r| r.x), Some(20.0));
    }

    #[test]
    fn test_rtl_shifts_one_column() {
        let marker = resolve_today_marker(&daily(), 20.0, 100.0, at(1, 1, 9), Direction::Rtl);
        assert_eq!(marker, Some(Rect::new(20.0, 0.0, 20.0, 100.0)));
    }

    #[test]
    fn test_last_column_inferred_from_previous_gap() {
        let marker = resolve_today_marker(&daily(), 20.0, 100.0, at(1, 3, 12), Direction::Ltr);
        assert_eq!(marker, Some(Rect::new(40.0, 0.0, 20.0, 100.0)));

        // exactly at the inferred end is outside
        let marker = resolve_today_marker(&daily(), 20.0, 100.0, at(1, 4, 0), Direction::Ltr);
        assert_eq!(marker, None);
    }

    #[test]
    fn test_last_column_uses_last_gap_only() {
        let dates = vec![at(1, 1, 0), at(1, 8, 0), at(1, 9, 0)];
        assert!(resolve_today_marker(&dates, 20.0, 100.0, at(1, 9, 23), Direction::Ltr).is_some());
        assert!(resolve_today_marker(&dates, 20.0, 100.0, at(1, 10, 1), Direction::Ltr).is_none());
    }

    #[test]
    fn test_rtl_skips_last_column_inference() {
        let marker = resolve_today_marker(&daily(), 20.0, 100.0, at(1, 3, 12), Direction::Rtl);
        assert_eq!(marker, None);
    }

    #[test]
    fn test_outside_range_has_no_marker() {
        let dates = vec![at(1, 1, 0), at(1, 2, 0)];
        let before = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(resolve_today_marker(&dates, 20.0, 100.0, before, Direction::Ltr), None);
        assert_eq!(resolve_today_marker(&dates, 20.0, 100.0, before, Direction::Rtl), None);
    }

    #[test]
    fn test_fewer_than_two_dates() {
        assert_eq!(resolve_today_marker(&[], 20.0, 100.0, at(1, 1, 0), Direction::Ltr), None);
        let single = [at(1, 1, 0)];
        assert_eq!(resolve_today_marker(&single, 20.0, 100.0, at(1, 1, 3), Direction::Ltr), None);
    }

    #[test]
    fn test_repeated_dates_never_match_empty_interval() {
        let dates = vec![at(1, 1, 0), at(1, 1, 0), at(1, 2, 0)];
        let marker = resolve_today_marker(&dates, 10.0, 30.0, at(1, 1, 0), Direction::Ltr);
        assert_eq!(marker.map(|r| r.x), Some(10.0));
    }
}
