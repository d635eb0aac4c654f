//! Widget specifications
//!
//! The engine decides *which* input a column gets and with what captions;
//! rendering it is left to the UI layer.

mod build;

pub use build::*;

use crate::decorator::NumberPopupLabels;
use crate::model::Value;

/// The input widget the UI layer should render for a column filter.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetSpec {
    /// Free text input.
    Text(TextInputSpec),
    /// Boolean or enum selector.
    Select(SelectSpec),
    /// Date range editor.
    DateRange(DateRangeSpec),
    /// Numeric interval popup.
    NumberPopup(NumberPopupSpec),
    /// Widget supplied by a filter generator, by name.
    Custom(String),
}

impl WidgetSpec {
    /// Returns the widget type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            WidgetSpec::Text(_) => "text",
            WidgetSpec::Select(_) => "select",
            WidgetSpec::DateRange(_) => "date_range",
            WidgetSpec::NumberPopup(_) => "number_popup",
            WidgetSpec::Custom(_) => "custom",
        }
    }
}

/// When a text input reports value changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextChangeMode {
    /// After the user pauses typing.
    #[default]
    Lazy,
    /// At most once per timeout, in milliseconds.
    Timeout(u32),
    /// When the input loses focus.
    Blur,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputSpec {
    pub change_mode: TextChangeMode,
    pub placeholder: Option<String>,
}

/// One selectable entry of a selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    /// The value committed as the criterion when selected.
    pub value: Value,
    pub caption: String,
    pub icon: Option<String>,
}

/// Selector with an explicit "no filter" empty selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectSpec {
    pub items: Vec<SelectItem>,
    /// Caption of the empty selection.
    pub empty_caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeSpec {
    pub from_caption: Option<String>,
    pub to_caption: Option<String>,
    pub set_caption: Option<String>,
    pub clear_caption: Option<String>,
    pub date_format: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberPopupSpec {
    pub labels: NumberPopupLabels,
    /// Caption of the collapsed popup when no interval is set.
    pub empty_caption: String,
}
