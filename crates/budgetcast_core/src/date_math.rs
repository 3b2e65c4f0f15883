//! Month-granular date arithmetic.
//!
//! The forecast only ever looks at (year, month) pairs, so the helpers here
//! work on a flat month index (`year * 12 + month - 1`) instead of going
//! through jiff's `Span` machinery. That keeps month differences and month
//! stepping O(1) and free of day-of-month clamping surprises.

use jiff::civil::Date;

/// Flat month index: months since year 0.
#[inline]
pub fn month_index(d: Date) -> i32 {
    d.year() as i32 * 12 + (d.month() as i32 - 1)
}

/// Inverse of [`month_index`], always landing on the first day of the month.
///
/// Returns `None` when the index falls outside jiff's supported year range.
#[inline]
pub fn from_month_index(index: i32) -> Option<Date> {
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) + 1;
    let year = i16::try_from(year).ok()?;
    Date::new(year, month as i8, 1).ok()
}

/// First day of the date's month.
#[inline]
pub fn month_start(d: Date) -> Date {
    d.first_of_month()
}

/// Whole calendar months from `from`'s month to `to`'s month.
///
/// Day-of-month is ignored entirely, so `2024-01-31 → 2024-02-01` is one
/// month. Negative when `to` precedes `from`.
#[inline]
pub fn months_between(from: Date, to: Date) -> i32 {
    month_index(to) - month_index(from)
}

/// Shift a date by `n` calendar months, returning the first of the resulting month.
#[inline]
pub fn add_months(d: Date, n: i32) -> Option<Date> {
    from_month_index(month_index(d).checked_add(n)?)
}

/// Inclusive, ascending sequence of month starts from `start`'s month to `end`'s month.
///
/// Empty when `end` falls in a month before `start`.
pub fn month_series(start: Date, end: Date) -> impl Iterator<Item = Date> {
    let first = month_index(start);
    let last = month_index(end);
    (first..=last).filter_map(from_month_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_month_start_discards_day() {
        assert_eq!(month_start(date(2024, 2, 29)), date(2024, 2, 1));
        assert_eq!(month_start(date(2024, 12, 1)), date(2024, 12, 1));
    }

    #[test]
    fn test_months_between_ignores_day() {
        assert_eq!(months_between(date(2024, 1, 31), date(2024, 2, 1)), 1);
        assert_eq!(months_between(date(2024, 1, 1), date(2024, 1, 31)), 0);
        assert_eq!(months_between(date(2023, 11, 15), date(2025, 2, 3)), 15);
    }

    #[test]
    fn test_months_between_negative() {
        assert_eq!(months_between(date(2024, 5, 1), date(2024, 1, 1)), -4);
    }

    #[test]
    fn test_add_months_crosses_years() {
        assert_eq!(add_months(date(2024, 11, 30), 3), Some(date(2025, 2, 1)));
        assert_eq!(add_months(date(2024, 1, 15), -1), Some(date(2023, 12, 1)));
        assert_eq!(add_months(date(9999, 12, 1), 1), None);
    }

    #[test]
    fn test_month_series_inclusive() {
        let months: Vec<_> = month_series(date(2024, 11, 20), date(2025, 2, 3)).collect();
        assert_eq!(
            months,
            vec![
                date(2024, 11, 1),
                date(2024, 12, 1),
                date(2025, 1, 1),
                date(2025, 2, 1)
            ]
        );
    }

    #[test]
    fn test_month_series_single_and_empty() {
        assert_eq!(month_series(date(2024, 3, 9), date(2024, 3, 28)).count(), 1);
        assert_eq!(month_series(date(2024, 3, 1), date(2024, 2, 28)).count(), 0);
    }

    #[test]
    fn test_month_index_roundtrip() {
        for d in [date(2000, 1, 1), date(2024, 2, 1), date(2099, 12, 1)] {
            assert_eq!(from_month_index(month_index(d)), Some(d));
        }
    }
}
