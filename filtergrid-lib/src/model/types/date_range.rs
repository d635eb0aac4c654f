//! Date range criterion

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use serde::Deserialize;
use serde::Serialize;

/// Optional calendar bounds of a date filter criterion.
///
/// Both bounds are inclusive at day granularity: `date_to` covers the whole
/// calendar day, so the effective upper bound is midnight of the following
/// day. A range with neither bound set means "no filter".
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use filtergrid_lib::model::types::DateRange;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let range = DateRange::between(day, day);
/// assert_eq!(
///     range.upper_bound(),
///     NaiveDate::from_ymd_opt(2024, 3, 2).unwrap().and_hms_opt(0, 0, 0),
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    date_from: Option<NaiveDate>,
    #[serde(default)]
    date_to: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range from optional bounds.
    pub fn new(date_from: Option<NaiveDate>, date_to: Option<NaiveDate>) -> Self {
        Self { date_from, date_to }
    }

    /// Creates a range with both bounds.
    pub fn between(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Self::new(Some(date_from), Some(date_to))
    }

    /// Creates a range open at the upper end.
    pub fn since(date_from: NaiveDate) -> Self {
        Self::new(Some(date_from), None)
    }

    /// Creates a range open at the lower end.
    pub fn until(date_to: NaiveDate) -> Self {
        Self::new(None, Some(date_to))
    }

    /// Returns the lower bound date, if set.
    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    /// Returns the upper bound date, if set.
    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    /// Returns `true` if neither bound is set.
    pub fn is_null(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none()
    }

    /// Collapses an empty range to `None`.
    pub fn normalize(self) -> Option<Self> {
        if self.is_null() { None } else { Some(self) }
    }

    /// Start of the `date_from` day.
    pub fn lower_bound(&self) -> Option<NaiveDateTime> {
        self.date_from.map(start_of_day)
    }

    /// Start of the day after `date_to`.
    ///
    /// `None` when `date_to` is unset or is the last representable date.
    pub fn upper_bound(&self) -> Option<NaiveDateTime> {
        self.date_to
            .and_then(|d| d.succ_opt())
            .map(start_of_day)
    }
}

pub(crate) fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
