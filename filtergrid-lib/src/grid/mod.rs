//! Filtering grid
//!
//! [`FilterGrid`] ties columns, their assembled filters and the active
//! criteria together and answers row visibility.

mod column;

pub use column::*;

use std::sync::Arc;

use crate::decorator::FilterDecorator;
use crate::error::FilterError;
use crate::filter::Criterion;
use crate::filter::FilterGenerator;
use crate::filter::FilterOptions;
use crate::filter::assemble;
use crate::model::ColumnDef;
use crate::model::Row;
use crate::model::ValueType;

/// A set of filterable columns.
///
/// # Example
///
/// ```
/// use filtergrid_lib::filter::Criterion;
/// use filtergrid_lib::grid::FilterGrid;
/// use filtergrid_lib::model::Row;
/// use filtergrid_lib::model::ValueType;
/// use filtergrid_lib::model::types::NumberInterval;
///
/// let mut grid = FilterGrid::new()
///     .column("name", ValueType::String)
///     .column("amount", ValueType::Int);
/// grid.initialize_filters();
/// grid.set_criterion("amount", Some(Criterion::from(NumberInterval::less_than("100"))))?;
///
/// let rows = vec![
///     Row::new().set("name", "a").set("amount", 50),
///     Row::new().set("name", "b").set("amount", 150),
/// ];
/// assert_eq!(grid.filter_rows(&rows).len(), 1);
/// # Ok::<(), filtergrid_lib::error::FilterError>(())
/// ```
#[derive(Default)]
pub struct FilterGrid {
    columns: Vec<Column>,
    generator: Option<Arc<dyn FilterGenerator>>,
    decorator: Option<Arc<dyn FilterDecorator>>,
    options: FilterOptions,
}

impl FilterGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override collaborator consulted when filters are assembled.
    pub fn with_generator(mut self, generator: Arc<dyn FilterGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Sets the decorator consulted for default widgets.
    pub fn with_decorator(mut self, decorator: Arc<dyn FilterDecorator>) -> Self {
        self.decorator = Some(decorator);
        self
    }

    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// Adds a column (builder pattern).
    pub fn column(mut self, id: impl Into<String>, value_type: ValueType) -> Self {
        self.add_column(id, value_type);
        self
    }

    /// Adds a column without a filter; see [`FilterGrid::initialize_filters`].
    ///
    /// A column with the same id is replaced in place.
    pub fn add_column(&mut self, id: impl Into<String>, value_type: ValueType) {
        let def = ColumnDef::new(id, value_type);
        let position = self.columns.iter().position(|c| c.id() == def.id);
        match position {
            Some(index) => self.columns[index] = Column::new(def),
            None => self.columns.push(Column::new(def)),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get_column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == id)
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Assembles and registers a fresh filter for every column.
    ///
    /// Replacing a filter resets its column's criterion.
    pub fn initialize_filters(&mut self) {
        let generator = self.generator.as_deref();
        let decorator = self.decorator.as_deref();
        for column in &mut self.columns {
            let filter = assemble(column.def(), generator, decorator, &self.options);
            log::debug!("Registered {} filter for column '{}'", filter.kind(), column.id());
            column.register(filter);
        }
    }

    /// Replaces the active criterion of a column.
    ///
    /// Empty intervals and ranges are stored as "no filter".
    pub fn set_criterion(&mut self, id: &str, criterion: Option<Criterion>) -> Result<(), FilterError> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| FilterError::unknown_column(id))?;
        column.set_criterion(criterion.and_then(Criterion::normalize));
        Ok(())
    }

    /// Returns the active criterion of a column.
    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.get_column(id).and_then(Column::criterion)
    }

    /// Removes every active criterion.
    pub fn clear_filters(&mut self) {
        for column in &mut self.columns {
            column.set_criterion(None);
        }
    }

    /// Returns `true` if `row` passes every column filter.
    ///
    /// Columns whose filter was never initialized do not constrain rows.
    pub fn test_row(&self, row: &Row) -> Result<bool, FilterError> {
        for column in &self.columns {
            if !column.test(row)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the rows visible under the active criteria, in order.
    ///
    /// A row whose evaluation fails is hidden.
    pub fn filter_rows<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        rows.iter()
            .filter(|row| match self.test_row(row) {
                Ok(visible) => visible,
                Err(e) => {
                    log::warn!("Hiding row after filter error: {e}");
                    false
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for FilterGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterGrid")
            .field("columns", &self.columns)
            .field("has_generator", &self.generator.is_some())
            .field("has_decorator", &self.decorator.is_some())
            .field("options", &self.options)
            .finish()
    }
}
