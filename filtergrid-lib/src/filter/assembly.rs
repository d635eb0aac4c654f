//! Per-column filter assembly

use std::fmt;
use std::sync::Arc;

use super::FilterKind;
use super::FilterOptions;
use super::Predicate;
use super::classify;
use super::default_predicate;
use crate::decorator::FilterDecorator;
use crate::model::ColumnDef;
use crate::model::Row;
use crate::model::Value;
use crate::widget::WidgetSpec;
use crate::widget::default_widget;

/// Extracts the value a column filter tests from a row.
pub type ValueProvider = Arc<dyn Fn(&Row) -> Value + Send + Sync>;

/// Per-column override hook.
///
/// Each method is consulted independently; returning `None` keeps the
/// default for that part only.
pub trait FilterGenerator: Send + Sync {
    /// Custom extraction of the filtered value from a row.
    fn value_provider(&self, _column: &ColumnDef) -> Option<ValueProvider> {
        None
    }

    /// Custom predicate replacing the default one for the column's kind.
    fn predicate(&self, _column: &ColumnDef) -> Option<Predicate> {
        None
    }

    /// Custom widget replacing the default one for the column's kind.
    fn custom_widget(&self, _column: &ColumnDef) -> Option<WidgetSpec> {
        None
    }
}

/// The assembled filter of one column.
#[derive(Clone)]
pub struct ColumnFilter {
    kind: FilterKind,
    widget: WidgetSpec,
    predicate: Predicate,
    value_provider: Option<ValueProvider>,
}

impl ColumnFilter {
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn widget(&self) -> &WidgetSpec {
        &self.widget
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Returns `true` when a generator supplied the value extraction.
    pub fn has_value_provider(&self) -> bool {
        self.value_provider.is_some()
    }

    /// Extracts the filtered value of `column` from `row`.
    ///
    /// Without a value provider this is the row's field named by the column
    /// id, or `Null` when the row lacks it.
    pub fn extract(&self, column: &ColumnDef, row: &Row) -> Value {
        match &self.value_provider {
            Some(provider) => provider(row),
            None => row.value(&column.id),
        }
    }
}

impl fmt::Debug for ColumnFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnFilter")
            .field("kind", &self.kind)
            .field("widget", &self.widget)
            .field("has_value_provider", &self.value_provider.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the filter of a single column.
///
/// The kind always comes from the column's declared type. The generator,
/// when present, may replace the widget, the predicate and the value
/// provider one at a time; the decorator only affects default widgets.
pub fn assemble(
    column: &ColumnDef,
    generator: Option<&dyn FilterGenerator>,
    decorator: Option<&dyn FilterDecorator>,
    options: &FilterOptions,
) -> ColumnFilter {
    let kind = classify(&column.value_type);
    log::debug!("Assembling {kind} filter for column '{}'", column.id);

    let widget = match generator.and_then(|g| g.custom_widget(column)) {
        Some(widget) => {
            log::trace!("Custom {} widget for column '{}'", widget.type_name(), column.id);
            widget
        }
        None => default_widget(kind, column, decorator),
    };

    let predicate = match generator.and_then(|g| g.predicate(column)) {
        Some(predicate) => {
            log::trace!("Custom predicate for column '{}'", column.id);
            predicate
        }
        None => default_predicate(kind, *options),
    };

    let value_provider = generator.and_then(|g| g.value_provider(column));
    if value_provider.is_some() {
        log::trace!("Custom value provider for column '{}'", column.id);
    }

    ColumnFilter {
        kind,
        widget,
        predicate,
        value_provider,
    }
}
