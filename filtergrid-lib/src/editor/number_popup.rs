//! Numeric interval popup editor
//!
//! Models the popup behind a numeric column filter as a small state machine,
//! independent of how the popup is drawn. The UI layer forwards raw field
//! text and button presses; the editor decides what gets committed.

use crate::decorator::NumberPopupLabels;
use crate::filter::is_float_literal;
use crate::model::types::NumberInterval;
use crate::model::types::is_blank;
use crate::widget::NumberPopupSpec;

/// Visibility and commit state of the popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopupState {
    /// Popup hidden, no interval committed.
    #[default]
    Closed,
    /// Popup visible, fields being edited.
    Editing,
    /// Popup hidden, an interval is committed.
    Committed,
}

/// One of the three input fields of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupField {
    LessThan,
    GreaterThan,
    Equals,
}

/// Editor state of a numeric filter popup.
///
/// # Example
///
/// ```
/// use filtergrid_lib::editor::NumberFilterPopup;
/// use filtergrid_lib::editor::PopupField;
/// use filtergrid_lib::widget::NumberPopupSpec;
///
/// let mut popup = NumberFilterPopup::new(&NumberPopupSpec::default());
/// popup.open();
/// popup.input(PopupField::GreaterThan, "10");
/// popup.input(PopupField::LessThan, "20");
/// popup.commit();
///
/// assert_eq!(popup.caption(), "10 < [x] < 20");
/// ```
#[derive(Debug, Clone)]
pub struct NumberFilterPopup {
    labels: NumberPopupLabels,
    empty_caption: String,
    state: PopupState,
    read_only: bool,
    value: Option<NumberInterval>,
    less_than: String,
    greater_than: String,
    equals: String,
}

impl NumberFilterPopup {
    pub fn new(spec: &NumberPopupSpec) -> Self {
        Self {
            labels: spec.labels.clone(),
            empty_caption: spec.empty_caption.clone(),
            state: PopupState::Closed,
            read_only: false,
            value: None,
            less_than: String::new(),
            greater_than: String::new(),
            equals: String::new(),
        }
    }

    pub fn labels(&self) -> &NumberPopupLabels {
        &self.labels
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    /// The committed interval, `None` when no filter is set.
    pub fn value(&self) -> Option<&NumberInterval> {
        self.value.as_ref()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Current text of an input field.
    pub fn field(&self, field: PopupField) -> &str {
        match field {
            PopupField::LessThan => &self.less_than,
            PopupField::GreaterThan => &self.greater_than,
            PopupField::Equals => &self.equals,
        }
    }

    /// Whether an input field accepts input.
    ///
    /// A non-blank equals field disables the two bound fields.
    pub fn is_enabled(&self, field: PopupField) -> bool {
        if self.read_only {
            return false;
        }
        match field {
            PopupField::Equals => true,
            PopupField::LessThan | PopupField::GreaterThan => is_blank(&self.equals),
        }
    }

    /// Opens the popup, seeding the fields from the committed interval.
    pub fn open(&mut self) {
        self.seed_fields();
        self.state = PopupState::Editing;
    }

    /// Replaces the text of a field while editing.
    ///
    /// Returns `false` when the popup is not open or the field is disabled.
    pub fn input(&mut self, field: PopupField, text: impl Into<String>) -> bool {
        if self.state != PopupState::Editing || !self.is_enabled(field) {
            return false;
        }
        let text = text.into();
        match field {
            PopupField::LessThan => self.less_than = text,
            PopupField::GreaterThan => self.greater_than = text,
            PopupField::Equals => self.equals = text,
        }
        true
    }

    /// The "Set" action: commits the fields and closes the popup.
    ///
    /// A field that does not parse as a number is committed as blank instead
    /// of rejecting the commit. Returns `false` when nothing was committed
    /// because the popup is read-only or not open.
    pub fn commit(&mut self) -> bool {
        if self.read_only || self.state != PopupState::Editing {
            return false;
        }
        let interval = NumberInterval::new(
            numeric_or_blank(&self.less_than),
            numeric_or_blank(&self.greater_than),
            numeric_or_blank(&self.equals),
        );
        self.set_value(Some(interval));
        true
    }

    /// The "Clear" action: commits the absent interval and closes.
    pub fn clear(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        self.set_value(None);
        true
    }

    /// Closes without committing.
    pub fn cancel(&mut self) {
        if self.state == PopupState::Editing {
            self.seed_fields();
            self.state = self.resting_state();
        }
    }

    /// Sets the committed interval programmatically.
    ///
    /// An interval without any bound is stored as `None`.
    pub fn set_value(&mut self, value: Option<NumberInterval>) {
        self.value = value.and_then(NumberInterval::normalize);
        self.seed_fields();
        self.state = self.resting_state();
    }

    /// Disables input and both actions while `true`.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Caption of the collapsed popup button.
    pub fn caption(&self) -> String {
        let Some(interval) = &self.value else {
            return self.empty_caption.clone();
        };
        let marker = &self.labels.value_marker;
        match (
            interval.greater_than_value(),
            interval.less_than_value(),
            interval.equals_value(),
        ) {
            (_, _, Some(eq)) => format!("{marker} = {eq}"),
            (Some(gt), Some(lt), None) => format!("{gt} < {marker} < {lt}"),
            (Some(gt), None, None) => format!("{marker} > {gt}"),
            (None, Some(lt), None) => format!("{marker} < {lt}"),
            (None, None, None) => self.empty_caption.clone(),
        }
    }

    fn seed_fields(&mut self) {
        let (lt, gt, eq) = match &self.value {
            Some(interval) => (
                interval.less_than_value(),
                interval.greater_than_value(),
                interval.equals_value(),
            ),
            None => (None, None, None),
        };
        self.less_than = lt.unwrap_or_default().to_string();
        self.greater_than = gt.unwrap_or_default().to_string();
        self.equals = eq.unwrap_or_default().to_string();
    }

    fn resting_state(&self) -> PopupState {
        match self.value {
            Some(_) => PopupState::Committed,
            None => PopupState::Closed,
        }
    }
}

fn numeric_or_blank(text: &str) -> String {
    if is_blank(text) || is_float_literal(text) {
        return text.to_string();
    }
    log::debug!("Dropping non-numeric popup input '{text}'");
    String::new()
}
