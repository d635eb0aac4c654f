//! Criterion evaluation errors

/// Errors raised while evaluating a filter criterion against a row value.
///
/// These are local to a single predicate call. A grid visibility pass logs
/// them and hides the offending row; other rows and columns are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriterionError {
    /// A numeric bound could not be parsed as the row value's numeric type.
    #[error("Malformed criterion '{value}': not a valid {target}")]
    MalformedCriterion {
        /// The raw bound text, as entered.
        value: String,
        /// The numeric type the text was parsed against.
        target: &'static str,
    },

    /// The row value is orderable but not one of the recognized numeric types.
    #[error("Unsupported numeric subtype: {type_name}")]
    UnsupportedNumericSubtype { type_name: &'static str },

    /// A default predicate received a criterion meant for another filter kind.
    #[error("Criterion mismatch: expected {expected}, got {actual}")]
    CriterionMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl CriterionError {
    /// Creates a new malformed criterion error.
    pub fn malformed(value: impl Into<String>, target: &'static str) -> Self {
        Self::MalformedCriterion {
            value: value.into(),
            target,
        }
    }

    /// Creates a new unsupported numeric subtype error.
    pub fn unsupported(type_name: &'static str) -> Self {
        Self::UnsupportedNumericSubtype { type_name }
    }

    /// Creates a new criterion mismatch error.
    pub fn mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::CriterionMismatch { expected, actual }
    }

    /// Returns `true` if this error came from unparseable bound text.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedCriterion { .. })
    }
}
