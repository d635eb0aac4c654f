//! Default predicates, one per filter kind

use std::cmp::Ordering;
use std::sync::Arc;

use super::Criterion;
use super::FilterKind;
use super::FilterOptions;
use super::number::compare_to_bound;
use super::number::equals_bound;
use super::temporal::matches_range;
use crate::error::CriterionError;
use crate::model::Value;
use crate::model::types::NumberInterval;
use crate::model::types::is_blank;

/// Decides whether a row value satisfies the active criterion of a column.
///
/// Called as `predicate(row_value, criterion)`; `criterion` is `None` when no
/// filter is set.
pub type Predicate =
    Arc<dyn Fn(&Value, Option<&Criterion>) -> Result<bool, CriterionError> + Send + Sync>;

/// Returns the default predicate for a filter kind.
pub fn default_predicate(kind: FilterKind, options: FilterOptions) -> Predicate {
    match kind {
        FilterKind::Boolean | FilterKind::Enum => equals_predicate(),
        FilterKind::DateTime => date_predicate(options),
        FilterKind::Numeric => number_predicate(),
        FilterKind::Text => text_predicate(),
    }
}

/// Equality against the selected constant; no selection matches everything.
pub fn equals_predicate() -> Predicate {
    Arc::new(|value, criterion| match criterion {
        None => Ok(true),
        Some(Criterion::Choice(selected)) => Ok(selected == value),
        Some(other) => Err(CriterionError::mismatch("choice", other.kind_name())),
    })
}

/// Numeric interval predicate, see [`matches_interval`].
pub fn number_predicate() -> Predicate {
    Arc::new(|value, criterion| match criterion {
        None => Ok(true),
        Some(Criterion::Interval(interval)) => matches_interval(Some(interval), value),
        Some(other) => Err(CriterionError::mismatch("interval", other.kind_name())),
    })
}

/// Day-inclusive date range predicate.
pub fn date_predicate(options: FilterOptions) -> Predicate {
    Arc::new(move |value, criterion| match criterion {
        None => Ok(true),
        Some(Criterion::Range(range)) => Ok(matches_range(Some(range), value, &options)),
        Some(other) => Err(CriterionError::mismatch("range", other.kind_name())),
    })
}

/// Case-insensitive containment of the criterion text in the value's text.
pub fn text_predicate() -> Predicate {
    Arc::new(|value, criterion| match criterion {
        None => Ok(true),
        Some(Criterion::Text(text)) => Ok(contains_ignore_case(value, text)),
        Some(other) => Err(CriterionError::mismatch("text", other.kind_name())),
    })
}

/// Evaluates a row value against a numeric interval.
///
/// Bounds are parsed as the runtime numeric type of `value`. A non-blank
/// `equals` decides alone. Otherwise `less_than` and `greater_than` must
/// both hold when both are set, so `greater_than >= less_than` matches
/// nothing. An interval with no bound at all matches nothing.
///
/// # Errors
///
/// [`CriterionError::MalformedCriterion`] when a bound does not parse, and
/// [`CriterionError::UnsupportedNumericSubtype`] when `value` is orderable
/// but not numeric.
pub fn matches_interval(
    interval: Option<&NumberInterval>,
    value: &Value,
) -> Result<bool, CriterionError> {
    let Some(interval) = interval else {
        return Ok(true);
    };
    if !value.is_orderable() {
        return Ok(false);
    }

    let less_than = non_blank(interval.less_than_value());
    let greater_than = non_blank(interval.greater_than_value());

    if let Some(equals) = non_blank(interval.equals_value()) {
        return equals_bound(value, equals);
    }

    match (less_than, greater_than) {
        (Some(lt), Some(gt)) => Ok(compare_to_bound(value, lt)? == Ordering::Less
            && compare_to_bound(value, gt)? == Ordering::Greater),
        (Some(lt), None) => Ok(compare_to_bound(value, lt)? == Ordering::Less),
        (None, Some(gt)) => Ok(compare_to_bound(value, gt)? == Ordering::Greater),
        (None, None) => Ok(false),
    }
}

fn non_blank(bound: Option<&str>) -> Option<&str> {
    bound.filter(|s| !is_blank(s))
}

fn contains_ignore_case(value: &Value, text: &str) -> bool {
    if is_blank(text) {
        return true;
    }
    if value.is_null() {
        return false;
    }
    value
        .to_string()
        .to_lowercase()
        .contains(&text.to_lowercase())
}
