use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::trace;

use super::geometry::Rect;
use super::ticks::column_x;

/// A full-height band for every column that falls on one of `holidays`.
///
/// Holidays are matched by calendar day, so their time of day is irrelevant.
/// A column is marked once even if the list names its day several times.
pub fn resolve_holiday_bands(
    dates: &[NaiveDateTime],
    column_width: f32,
    grid_height: f32,
    holidays: Option<&[NaiveDateTime]>,
) -> Vec<Rect> {
    let holidays = match holidays {
        Some(list) if !list.is_empty() => list,
        _ => return Vec::new(),
    };
    let days: HashSet<NaiveDate> = holidays.iter().map(NaiveDateTime::date).collect();

    dates
        .iter()
        .enumerate()
        .filter(|(_, date)| days.contains(&date.date()))
        .map(|(index, date)| {
            trace!(index, %date, "holiday column");
            Rect::column(column_x(index, column_width), column_width, grid_height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::date_math::is_same_day;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn first_week() -> Vec<NaiveDateTime> {
        (1..=5).map(|d| at(d, 0)).collect()
    }

    #[test]
    fn test_holiday_matches_regardless_of_time() {
        let holidays = [at(3, 17)];
        let bands = resolve_holiday_bands(&first_week(), 25.0, 60.0, Some(&holidays));
        assert_eq!(bands, vec![Rect::new(50.0, 0.0, 25.0, 60.0)]);
    }

    #[test]
    fn test_absent_or_empty_list() {
        assert!(resolve_holiday_bands(&first_week(), 25.0, 60.0, None).is_empty());
        let none: [NaiveDateTime; 0] = [];
        assert!(resolve_holiday_bands(&first_week(), 25.0, 60.0, Some(&none[..])).is_empty());
    }

    #[test]
    fn test_matches_linear_same_day_scan() {
        let dates = first_week();
        let holidays = [at(5, 23), at(1, 1), at(1, 12), at(9, 0)];
        let bands = resolve_holiday_bands(&dates, 10.0, 10.0, Some(&holidays));

        let expected: Vec<f32> = dates
            .iter()
            .enumerate()
            .filter(|(_, d)| holidays.iter().any(|h| is_same_day(*h, **d)))
            .map(|(i, _)| i as f32 * 10.0)
            .collect();
        let xs: Vec<f32> = bands.iter().map(|b| b.x).collect();
        assert_eq!(xs, expected);
        assert_eq!(xs, vec![0.0, 40.0]);
    }

    #[test]
    fn test_holiday_outside_range() {
        let other_year = NaiveDate::from_ymd_opt(2023, 1, 3)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(resolve_holiday_bands(&first_week(), 10.0, 10.0, Some(&[other_year])).is_empty());
    }
}
