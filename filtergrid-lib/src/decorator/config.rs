//! Decorator configuration

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::FilterDecorator;
use crate::error::ConfigError;
use crate::model::ColumnDef;
use crate::model::types::OptionValue;

const DEFAULT_LT_PROMPT: &str = "Less than";
const DEFAULT_GT_PROMPT: &str = "Greater than";
const DEFAULT_EQ_PROMPT: &str = "Equal to";
const DEFAULT_OK_CAPTION: &str = "Set";
const DEFAULT_RESET_CAPTION: &str = "Clear";
const DEFAULT_VALUE_MARKER: &str = "[x]";

/// Optional prompts and captions for the numeric filter popup.
///
/// Unset entries fall back to the built-in defaults when resolved.
///
/// # Example
///
/// ```
/// use filtergrid_lib::decorator::NumberFilterPopupConfig;
///
/// let labels = NumberFilterPopupConfig::default()
///     .with_value_marker("n")
///     .resolve();
/// assert_eq!(labels.value_marker, "n");
/// assert_eq!(labels.ok_caption, "Set");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFilterPopupConfig {
    pub lt_prompt: Option<String>,
    pub gt_prompt: Option<String>,
    pub eq_prompt: Option<String>,
    pub ok_caption: Option<String>,
    pub reset_caption: Option<String>,
    pub value_marker: Option<String>,
}

impl NumberFilterPopupConfig {
    /// Sets the less-than prompt.
    pub fn with_lt_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.lt_prompt = Some(prompt.into());
        self
    }

    /// Sets the greater-than prompt.
    pub fn with_gt_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.gt_prompt = Some(prompt.into());
        self
    }

    /// Sets the equals prompt.
    pub fn with_eq_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.eq_prompt = Some(prompt.into());
        self
    }

    /// Sets the caption of the commit action.
    pub fn with_ok_caption(mut self, caption: impl Into<String>) -> Self {
        self.ok_caption = Some(caption.into());
        self
    }

    /// Sets the caption of the clear action.
    pub fn with_reset_caption(mut self, caption: impl Into<String>) -> Self {
        self.reset_caption = Some(caption.into());
        self
    }

    /// Sets the marker standing for the value in the popup caption.
    pub fn with_value_marker(mut self, marker: impl Into<String>) -> Self {
        self.value_marker = Some(marker.into());
        self
    }

    /// Fills unset entries with the defaults.
    pub fn resolve(&self) -> NumberPopupLabels {
        let pick = |v: &Option<String>, default: &str| v.clone().unwrap_or_else(|| default.to_string());
        NumberPopupLabels {
            lt_prompt: pick(&self.lt_prompt, DEFAULT_LT_PROMPT),
            gt_prompt: pick(&self.gt_prompt, DEFAULT_GT_PROMPT),
            eq_prompt: pick(&self.eq_prompt, DEFAULT_EQ_PROMPT),
            ok_caption: pick(&self.ok_caption, DEFAULT_OK_CAPTION),
            reset_caption: pick(&self.reset_caption, DEFAULT_RESET_CAPTION),
            value_marker: pick(&self.value_marker, DEFAULT_VALUE_MARKER),
        }
    }
}

/// Fully resolved labels of the numeric filter popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPopupLabels {
    pub lt_prompt: String,
    pub gt_prompt: String,
    pub eq_prompt: String,
    pub ok_caption: String,
    pub reset_caption: String,
    pub value_marker: String,
}

impl Default for NumberPopupLabels {
    fn default() -> Self {
        NumberFilterPopupConfig::default().resolve()
    }
}

/// A data-only [`FilterDecorator`], loadable from JSON.
///
/// Boolean captions apply to every boolean column; enum captions are keyed
/// by constant name and apply to every enum column.
///
/// # Example
///
/// ```
/// use filtergrid_lib::decorator::DecoratorConfig;
///
/// let config = DecoratorConfig::from_json(r#"{
///     "all_items_visible": "Show all",
///     "text_change_timeout_ms": 250,
///     "number_popup": { "value_marker": "n" }
/// }"#).unwrap();
///
/// let config = config.with_boolean_captions("Yes", "No");
/// assert_eq!(config.all_items_visible.as_deref(), Some("Show all"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoratorConfig {
    /// Prompt shown when a filter is not set.
    pub all_items_visible: Option<String>,

    /// Whether text filters update while typing.
    ///
    /// Default: `true`
    pub text_filter_immediate: bool,

    /// Text change timeout in milliseconds; `0` uses lazy updates.
    ///
    /// Default: `0`
    pub text_change_timeout_ms: u32,

    /// Boolean selector caption for `true`.
    pub true_caption: Option<String>,

    /// Boolean selector caption for `false`.
    pub false_caption: Option<String>,

    /// Enum selector captions, keyed by constant name.
    pub enum_captions: HashMap<String, String>,

    pub from_caption: Option<String>,
    pub to_caption: Option<String>,
    pub set_caption: Option<String>,
    pub clear_caption: Option<String>,

    /// Display pattern for dates.
    pub date_format: Option<String>,

    /// Locale tag for date filters.
    pub locale: Option<String>,

    /// Numeric popup labels.
    pub number_popup: Option<NumberFilterPopupConfig>,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            all_items_visible: None,
            text_filter_immediate: true,
            text_change_timeout_ms: 0,
            true_caption: None,
            false_caption: None,
            enum_captions: HashMap::new(),
            from_caption: None,
            to_caption: None,
            set_caption: None,
            clear_caption: None,
            date_format: None,
            locale: None,
            number_popup: None,
        }
    }
}

impl DecoratorConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the "no filter" prompt.
    pub fn with_all_items_visible(mut self, prompt: impl Into<String>) -> Self {
        self.all_items_visible = Some(prompt.into());
        self
    }

    /// Sets text filtering to update on blur only.
    pub fn with_text_on_blur(mut self) -> Self {
        self.text_filter_immediate = false;
        self
    }

    /// Sets the text change timeout.
    pub fn with_text_change_timeout(mut self, millis: u32) -> Self {
        self.text_change_timeout_ms = millis;
        self
    }

    /// Sets the boolean selector captions.
    pub fn with_boolean_captions(
        mut self,
        true_caption: impl Into<String>,
        false_caption: impl Into<String>,
    ) -> Self {
        self.true_caption = Some(true_caption.into());
        self.false_caption = Some(false_caption.into());
        self
    }

    /// Sets the caption of one enum constant.
    pub fn with_enum_caption(mut self, constant: impl Into<String>, caption: impl Into<String>) -> Self {
        self.enum_captions.insert(constant.into(), caption.into());
        self
    }

    /// Sets the date display pattern.
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = Some(pattern.into());
        self
    }

    /// Sets the locale tag.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the numeric popup labels.
    pub fn with_number_popup(mut self, config: NumberFilterPopupConfig) -> Self {
        self.number_popup = Some(config);
        self
    }
}

impl FilterDecorator for DecoratorConfig {
    fn enum_caption(&self, _column: &ColumnDef, value: &OptionValue) -> Option<String> {
        value
            .name
            .as_ref()
            .and_then(|name| self.enum_captions.get(name))
            .cloned()
    }

    fn boolean_display_name(&self, _column: &ColumnDef, value: bool) -> Option<String> {
        if value {
            self.true_caption.clone()
        } else {
            self.false_caption.clone()
        }
    }

    fn is_text_filter_immediate(&self, _column: &ColumnDef) -> bool {
        self.text_filter_immediate
    }

    fn text_change_timeout(&self, _column: &ColumnDef) -> u32 {
        self.text_change_timeout_ms
    }

    fn from_caption(&self) -> Option<String> {
        self.from_caption.clone()
    }

    fn to_caption(&self) -> Option<String> {
        self.to_caption.clone()
    }

    fn set_caption(&self) -> Option<String> {
        self.set_caption.clone()
    }

    fn clear_caption(&self) -> Option<String> {
        self.clear_caption.clone()
    }

    fn date_format_pattern(&self, _column: &ColumnDef) -> Option<String> {
        self.date_format.clone()
    }

    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn all_items_visible_string(&self) -> Option<String> {
        self.all_items_visible.clone()
    }

    fn number_filter_popup_config(&self) -> Option<NumberFilterPopupConfig> {
        self.number_popup.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueType;

    #[test]
    fn test_popup_defaults() {
        let labels = NumberPopupLabels::default();
        assert_eq!(labels.lt_prompt, "Less than");
        assert_eq!(labels.gt_prompt, "Greater than");
        assert_eq!(labels.eq_prompt, "Equal to");
        assert_eq!(labels.ok_caption, "Set");
        assert_eq!(labels.reset_caption, "Clear");
        assert_eq!(labels.value_marker, "[x]");
    }

    #[test]
    fn test_from_json_partial() {
        let config = DecoratorConfig::from_json(
            r#"{"text_filter_immediate": false, "number_popup": {"ok_caption": "Apply"}}"#,
        )
        .unwrap();
        assert!(!config.text_filter_immediate);
        assert_eq!(config.text_change_timeout_ms, 0);
        let labels = config.number_popup.unwrap().resolve();
        assert_eq!(labels.ok_caption, "Apply");
        assert_eq!(labels.reset_caption, "Clear");
    }

    #[test]
    fn test_from_json_empty_uses_defaults() {
        let config = DecoratorConfig::from_json("{}").unwrap();
        assert_eq!(config, DecoratorConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = DecoratorConfig::from_json(r#"{"text_change_timeout_ms": "soon"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_captions_lookup() {
        let column = ColumnDef::new("active", ValueType::Bool);
        let config = DecoratorConfig::new()
            .with_boolean_captions("Yes", "No")
            .with_enum_caption("ACTIVE", "Active");

        assert_eq!(config.boolean_display_name(&column, true).as_deref(), Some("Yes"));
        assert_eq!(config.boolean_display_name(&column, false).as_deref(), Some("No"));
        assert_eq!(
            config.enum_caption(&column, &OptionValue::new(0, "ACTIVE")).as_deref(),
            Some("Active")
        );
        assert_eq!(config.enum_caption(&column, &OptionValue::code(0)), None);
    }
}
