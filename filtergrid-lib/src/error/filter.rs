//! Grid-level filter errors

use super::CriterionError;

/// Errors surfaced by [`FilterGrid`](crate::grid::FilterGrid) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// No column with the given id is registered on the grid.
    #[error("Column '{column}' not found in grid")]
    UnknownColumn { column: String },

    /// A column predicate failed while evaluating a row.
    #[error(transparent)]
    Criterion(#[from] CriterionError),
}

impl FilterError {
    /// Creates a new unknown column error.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }
}
