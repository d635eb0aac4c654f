//! Numeric interval criterion

use serde::Deserialize;
use serde::Serialize;

/// Textual bounds of a numeric filter criterion.
///
/// Bounds stay as entered text; they are parsed into the numeric type of each
/// row value at evaluation time. A non-blank `equals` takes precedence over
/// the other two bounds. When both `less_than` and `greater_than` are set,
/// both must hold at once.
///
/// Blank text is stored as `None`. An interval with every bound absent means
/// "no filter" and should be collapsed with [`NumberInterval::normalize`]
/// before being registered as a criterion.
///
/// # Example
///
/// ```
/// use filtergrid_lib::model::types::NumberInterval;
///
/// let under_ten = NumberInterval::less_than("10");
/// assert_eq!(under_ten.less_than_value(), Some("10"));
/// assert_eq!(under_ten.equals_value(), None);
///
/// let empty = NumberInterval::new("", " ", "");
/// assert!(empty.normalize().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberInterval {
    #[serde(default)]
    less_than: Option<String>,
    #[serde(default)]
    greater_than: Option<String>,
    #[serde(default)]
    equals: Option<String>,
}

impl NumberInterval {
    /// Creates an interval from the three raw bound texts.
    pub fn new(
        less_than: impl Into<String>,
        greater_than: impl Into<String>,
        equals: impl Into<String>,
    ) -> Self {
        Self {
            less_than: non_blank(less_than.into()),
            greater_than: non_blank(greater_than.into()),
            equals: non_blank(equals.into()),
        }
    }

    /// Creates a `value < bound` interval.
    pub fn less_than(bound: impl Into<String>) -> Self {
        Self::new(bound, "", "")
    }

    /// Creates a `value > bound` interval.
    pub fn greater_than(bound: impl Into<String>) -> Self {
        Self::new("", bound, "")
    }

    /// Creates a `value == bound` interval.
    pub fn equal_to(bound: impl Into<String>) -> Self {
        Self::new("", "", bound)
    }

    /// Creates a `greater < value < less` interval.
    pub fn between(greater: impl Into<String>, less: impl Into<String>) -> Self {
        Self::new(less, greater, "")
    }

    /// Returns the less-than bound text, if set.
    pub fn less_than_value(&self) -> Option<&str> {
        self.less_than.as_deref()
    }

    /// Returns the greater-than bound text, if set.
    pub fn greater_than_value(&self) -> Option<&str> {
        self.greater_than.as_deref()
    }

    /// Returns the equals bound text, if set.
    pub fn equals_value(&self) -> Option<&str> {
        self.equals.as_deref()
    }

    /// Returns `true` if no bound carries any text.
    pub fn is_empty(&self) -> bool {
        [&self.less_than, &self.greater_than, &self.equals]
            .iter()
            .all(|b| b.as_deref().is_none_or(is_blank))
    }

    /// Collapses an empty interval to `None`.
    pub fn normalize(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn non_blank(s: String) -> Option<String> {
    if is_blank(&s) { None } else { Some(s) }
}
