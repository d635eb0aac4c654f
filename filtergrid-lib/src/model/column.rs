//! Column descriptor

use super::ValueType;

/// Identifies a grid column and its declared value type.
///
/// Collaborators (decorators, filter generators) receive the descriptor to
/// decide per-column behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// The column id, also the default row field the column reads.
    pub id: String,
    /// The declared value type.
    pub value_type: ValueType,
}

impl ColumnDef {
    /// Creates a new column descriptor.
    pub fn new(id: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            id: id.into(),
            value_type,
        }
    }
}
