//! Filter criteria entered by the user

use crate::model::Value;
use crate::model::types::DateRange;
use crate::model::types::NumberInterval;

/// A user-supplied value parameterizing a column predicate.
///
/// The absence of a criterion ("no filter") is represented as
/// `Option::<Criterion>::None`, never as an empty criterion; use
/// [`Criterion::normalize`] to collapse empty ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Numeric interval, from the numeric popup.
    Interval(NumberInterval),
    /// Date range, from the date range editor.
    Range(DateRange),
    /// Selected boolean or enum constant.
    Choice(Value),
    /// Free text.
    Text(String),
}

impl Criterion {
    /// Returns the criterion kind name.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Criterion::Interval(_) => "interval",
            Criterion::Range(_) => "range",
            Criterion::Choice(_) => "choice",
            Criterion::Text(_) => "text",
        }
    }

    /// Collapses criteria that carry no filtering information to `None`.
    ///
    /// Empty intervals, empty ranges and null choices are "no filter". Text is
    /// kept as entered; blank text already matches every row.
    pub fn normalize(self) -> Option<Self> {
        match self {
            Criterion::Interval(i) => i.normalize().map(Criterion::Interval),
            Criterion::Range(r) => r.normalize().map(Criterion::Range),
            Criterion::Choice(Value::Null) => None,
            other => Some(other),
        }
    }
}

impl From<NumberInterval> for Criterion {
    fn from(v: NumberInterval) -> Self {
        Criterion::Interval(v)
    }
}

impl From<DateRange> for Criterion {
    fn from(v: DateRange) -> Self {
        Criterion::Range(v)
    }
}

impl From<bool> for Criterion {
    fn from(v: bool) -> Self {
        Criterion::Choice(Value::Bool(v))
    }
}

impl From<crate::model::types::OptionValue> for Criterion {
    fn from(v: crate::model::types::OptionValue) -> Self {
        Criterion::Choice(Value::Enum(v))
    }
}

impl From<String> for Criterion {
    fn from(v: String) -> Self {
        Criterion::Text(v)
    }
}

impl From<&str> for Criterion {
    fn from(v: &str) -> Self {
        Criterion::Text(v.to_string())
    }
}
