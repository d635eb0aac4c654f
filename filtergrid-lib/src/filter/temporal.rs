//! Date range evaluation

use chrono::Local;
use chrono::NaiveDateTime;

use super::FilterOptions;
use crate::model::Value;
use crate::model::types::DateRange;
use crate::model::types::start_of_day;

/// Normalizes a temporal row value to a local date-time.
///
/// Dates are taken at start of day, date-times pass through, instants are
/// shifted into the configured offset (or the system zone).
pub fn to_local_date_time(value: &Value, options: &FilterOptions) -> Option<NaiveDateTime> {
    match value {
        Value::DateTime(dt) => Some(*dt),
        Value::Date(d) => Some(start_of_day(*d)),
        Value::Instant(instant) => Some(match options.instant_offset {
            Some(offset) => instant.with_timezone(&offset).naive_local(),
            None => instant.with_timezone(&Local).naive_local(),
        }),
        _ => None,
    }
}

/// Evaluates a row value against a date range.
///
/// An absent or empty range matches everything; a null value matches
/// nothing. `date_to` includes the whole day, up to and including midnight
/// of the next day.
pub fn matches_range(range: Option<&DateRange>, value: &Value, options: &FilterOptions) -> bool {
    let Some(range) = range.filter(|r| !r.is_null()) else {
        return true;
    };
    if value.is_null() {
        return false;
    }
    // Non-temporal values in a date column are left unconstrained.
    let Some(local) = to_local_date_time(value, options) else {
        return true;
    };

    range.lower_bound().is_none_or(|start| local >= start)
        && range.upper_bound().is_none_or(|end| local <= end)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Value {
        Value::DateTime(date(y, m, d).and_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn test_absent_or_empty_range_matches() {
        let options = FilterOptions::utc();
        assert!(matches_range(None, &Value::Null, &options));
        assert!(matches_range(Some(&DateRange::default()), &Value::Null, &options));
    }

    #[test]
    fn test_null_value_never_matches() {
        let range = DateRange::since(date(2024, 1, 1));
        assert!(!matches_range(Some(&range), &Value::Null, &FilterOptions::utc()));
    }

    #[test]
    fn test_single_day_range_is_inclusive() {
        let options = FilterOptions::utc();
        let range = DateRange::between(date(2024, 3, 1), date(2024, 3, 1));

        assert!(matches_range(Some(&range), &at(2024, 3, 1, 0, 0), &options));
        assert!(matches_range(Some(&range), &at(2024, 3, 1, 23, 59), &options));
        assert!(matches_range(Some(&range), &at(2024, 3, 2, 0, 0), &options));
        assert!(!matches_range(Some(&range), &at(2024, 3, 2, 0, 1), &options));
        assert!(!matches_range(Some(&range), &at(2024, 2, 29, 23, 59), &options));
    }

    #[test]
    fn test_open_ranges() {
        let options = FilterOptions::utc();
        let since = DateRange::since(date(2024, 3, 1));
        let until = DateRange::until(date(2024, 3, 1));

        assert!(matches_range(Some(&since), &Value::Date(date(2030, 1, 1)), &options));
        assert!(!matches_range(Some(&since), &Value::Date(date(2024, 2, 29)), &options));
        assert!(matches_range(Some(&until), &Value::Date(date(2024, 3, 2)), &options));
        assert!(!matches_range(Some(&until), &Value::Date(date(2024, 3, 3)), &options));
    }

    #[test]
    fn test_instant_uses_offset() {
        let range = DateRange::between(date(2024, 3, 2), date(2024, 3, 2));
        let instant = Value::Instant(Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap());

        assert!(!matches_range(Some(&range), &instant, &FilterOptions::utc()));

        let plus_two = FilterOptions::new()
            .with_instant_offset(chrono::FixedOffset::east_opt(2 * 3600).unwrap());
        assert!(matches_range(Some(&range), &instant, &plus_two));
    }

    #[test]
    fn test_non_temporal_value_unconstrained() {
        let range = DateRange::since(date(2024, 1, 1));
        assert!(matches_range(Some(&range), &Value::from("soon"), &FilterOptions::utc()));
    }
}
