//! Grid column with its active filter

use crate::error::FilterError;
use crate::filter::ColumnFilter;
use crate::filter::Criterion;
use crate::model::ColumnDef;
use crate::model::Row;

/// A grid column: its declaration, assembled filter and active criterion.
///
/// The filter is replaced as a unit; replacing it drops the criterion, which
/// belonged to the previous widget.
#[derive(Debug, Clone)]
pub struct Column {
    def: ColumnDef,
    filter: Option<ColumnFilter>,
    criterion: Option<Criterion>,
}

impl Column {
    pub fn new(def: ColumnDef) -> Self {
        Self {
            def,
            filter: None,
            criterion: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.def.id
    }

    pub fn def(&self) -> &ColumnDef {
        &self.def
    }

    pub fn filter(&self) -> Option<&ColumnFilter> {
        self.filter.as_ref()
    }

    pub fn criterion(&self) -> Option<&Criterion> {
        self.criterion.as_ref()
    }

    pub(crate) fn register(&mut self, filter: ColumnFilter) {
        self.filter = Some(filter);
        self.criterion = None;
    }

    pub(crate) fn set_criterion(&mut self, criterion: Option<Criterion>) {
        self.criterion = criterion;
    }

    /// Tests a row against this column's filter.
    pub fn test(&self, row: &Row) -> Result<bool, FilterError> {
        let Some(filter) = &self.filter else {
            return Ok(true);
        };
        let value = filter.extract(&self.def, row);
        let visible = (filter.predicate())(&value, self.criterion.as_ref())?;
        Ok(visible)
    }
}
