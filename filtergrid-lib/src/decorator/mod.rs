//! Filter widget decoration
//!
//! Captions, icons, prompts and text-change behaviour are looked up through a
//! [`FilterDecorator`]. The engine passes what it gets straight into the
//! widget specs; it never interprets the strings.

mod config;

pub use config::*;

use crate::model::ColumnDef;
use crate::model::types::OptionValue;

/// Lookup collaborator decorating the filter widgets of a grid.
///
/// Every method has a default, so implementors override only what they need.
/// `None` means "use the built-in default".
pub trait FilterDecorator: Send + Sync {
    /// Caption for an enum constant in the enum selector.
    fn enum_caption(&self, _column: &ColumnDef, _value: &OptionValue) -> Option<String> {
        None
    }

    /// Icon for an enum constant in the enum selector.
    fn enum_icon(&self, _column: &ColumnDef, _value: &OptionValue) -> Option<String> {
        None
    }

    /// Display name for a boolean state in the boolean selector.
    fn boolean_display_name(&self, _column: &ColumnDef, _value: bool) -> Option<String> {
        None
    }

    /// Icon for a boolean state in the boolean selector.
    fn boolean_icon(&self, _column: &ColumnDef, _value: bool) -> Option<String> {
        None
    }

    /// Whether the text filter updates while the user types.
    fn is_text_filter_immediate(&self, _column: &ColumnDef) -> bool {
        true
    }

    /// Milliseconds between text change events; `0` uses lazy updates.
    fn text_change_timeout(&self, _column: &ColumnDef) -> u32 {
        0
    }

    /// Caption of the "from" field of the date range editor.
    fn from_caption(&self) -> Option<String> {
        None
    }

    /// Caption of the "to" field of the date range editor.
    fn to_caption(&self) -> Option<String> {
        None
    }

    /// Caption of the "set" action of the date range editor.
    fn set_caption(&self) -> Option<String> {
        None
    }

    /// Caption of the "clear" action of the date range editor.
    fn clear_caption(&self) -> Option<String> {
        None
    }

    /// Display pattern for dates shown in the filter field.
    fn date_format_pattern(&self, _column: &ColumnDef) -> Option<String> {
        None
    }

    /// Locale tag for date filters; the system locale when `None`.
    fn locale(&self) -> Option<String> {
        None
    }

    /// Prompt shown when a filter is not set.
    fn all_items_visible_string(&self) -> Option<String> {
        None
    }

    /// Prompts and captions of the numeric filter popup.
    fn number_filter_popup_config(&self) -> Option<NumberFilterPopupConfig> {
        None
    }
}
