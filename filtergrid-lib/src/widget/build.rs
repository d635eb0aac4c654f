//! Default widget construction per filter kind

use super::DateRangeSpec;
use super::NumberPopupSpec;
use super::SelectItem;
use super::SelectSpec;
use super::TextChangeMode;
use super::TextInputSpec;
use super::WidgetSpec;
use crate::decorator::FilterDecorator;
use crate::filter::FilterKind;
use crate::model::ColumnDef;
use crate::model::Value;

/// Builds the default widget for a column of the given kind.
pub fn default_widget(
    kind: FilterKind,
    column: &ColumnDef,
    decorator: Option<&dyn FilterDecorator>,
) -> WidgetSpec {
    match kind {
        FilterKind::Boolean => WidgetSpec::Select(boolean_select(column, decorator)),
        FilterKind::Enum => WidgetSpec::Select(enum_select(column, decorator)),
        FilterKind::DateTime => WidgetSpec::DateRange(date_range_field(column, decorator)),
        FilterKind::Numeric => WidgetSpec::NumberPopup(number_popup(decorator)),
        FilterKind::Text => WidgetSpec::Text(text_input(column, decorator)),
    }
}

pub fn text_input(column: &ColumnDef, decorator: Option<&dyn FilterDecorator>) -> TextInputSpec {
    let Some(decorator) = decorator else {
        return TextInputSpec::default();
    };
    let change_mode = if decorator.is_text_filter_immediate(column) {
        match decorator.text_change_timeout(column) {
            0 => TextChangeMode::Lazy,
            millis => TextChangeMode::Timeout(millis),
        }
    } else {
        TextChangeMode::Blur
    };
    TextInputSpec {
        change_mode,
        placeholder: decorator.all_items_visible_string(),
    }
}

pub fn boolean_select(column: &ColumnDef, decorator: Option<&dyn FilterDecorator>) -> SelectSpec {
    let items = [true, false]
        .into_iter()
        .map(|state| SelectItem {
            value: Value::Bool(state),
            caption: decorator
                .and_then(|d| d.boolean_display_name(column, state))
                .unwrap_or_else(|| state.to_string()),
            icon: decorator.and_then(|d| d.boolean_icon(column, state)),
        })
        .collect();
    SelectSpec {
        items,
        empty_caption: decorator.and_then(|d| d.all_items_visible_string()),
    }
}

pub fn enum_select(column: &ColumnDef, decorator: Option<&dyn FilterDecorator>) -> SelectSpec {
    let constants = column
        .value_type
        .enum_type()
        .map(|e| e.constants())
        .unwrap_or_default();
    let items = constants
        .iter()
        .map(|constant| SelectItem {
            value: Value::Enum(constant.clone()),
            caption: decorator
                .and_then(|d| d.enum_caption(column, constant))
                .unwrap_or_else(|| constant.to_string()),
            icon: decorator.and_then(|d| d.enum_icon(column, constant)),
        })
        .collect();
    SelectSpec {
        items,
        empty_caption: decorator.and_then(|d| d.all_items_visible_string()),
    }
}

pub fn date_range_field(column: &ColumnDef, decorator: Option<&dyn FilterDecorator>) -> DateRangeSpec {
    let Some(d) = decorator else {
        return DateRangeSpec::default();
    };
    DateRangeSpec {
        from_caption: d.from_caption(),
        to_caption: d.to_caption(),
        set_caption: d.set_caption(),
        clear_caption: d.clear_caption(),
        date_format: d.date_format_pattern(column),
        locale: d.locale(),
    }
}

pub fn number_popup(decorator: Option<&dyn FilterDecorator>) -> NumberPopupSpec {
    NumberPopupSpec {
        labels: decorator
            .and_then(|d| d.number_filter_popup_config())
            .map(|c| c.resolve())
            .unwrap_or_default(),
        empty_caption: decorator
            .and_then(|d| d.all_items_visible_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::DecoratorConfig;
    use crate::decorator::NumberFilterPopupConfig;
    use crate::model::ValueType;
    use crate::model::types::EnumType;
    use crate::model::types::OptionValue;

    fn status_column() -> ColumnDef {
        let status = EnumType::new("Status")
            .with_constant(0, "ACTIVE")
            .with_constant(1, "INACTIVE");
        ColumnDef::new("status", ValueType::Enum(status))
    }

    #[test]
    fn test_text_input_modes() {
        let column = ColumnDef::new("name", ValueType::String);
        assert_eq!(text_input(&column, None), TextInputSpec::default());

        let lazy = DecoratorConfig::new();
        assert_eq!(text_input(&column, Some(&lazy)).change_mode, TextChangeMode::Lazy);

        let timed = DecoratorConfig::new().with_text_change_timeout(300);
        assert_eq!(
            text_input(&column, Some(&timed)).change_mode,
            TextChangeMode::Timeout(300)
        );

        let blur = DecoratorConfig::new()
            .with_text_change_timeout(300)
            .with_text_on_blur()
            .with_all_items_visible("All");
        let spec = text_input(&column, Some(&blur));
        assert_eq!(spec.change_mode, TextChangeMode::Blur);
        assert_eq!(spec.placeholder.as_deref(), Some("All"));
    }

    #[test]
    fn test_boolean_select_default_captions() {
        let column = ColumnDef::new("active", ValueType::Bool);
        let spec = boolean_select(&column, None);
        let captions: Vec<_> = spec.items.iter().map(|i| i.caption.as_str()).collect();
        assert_eq!(captions, ["true", "false"]);
        assert_eq!(spec.empty_caption, None);
    }

    #[test]
    fn test_boolean_select_decorated() {
        let column = ColumnDef::new("active", ValueType::Bool);
        let config = DecoratorConfig::new()
            .with_boolean_captions("Yes", "No")
            .with_all_items_visible("Any");
        let spec = boolean_select(&column, Some(&config));
        assert_eq!(spec.items[0].caption, "Yes");
        assert_eq!(spec.items[0].value, Value::Bool(true));
        assert_eq!(spec.items[1].caption, "No");
        assert_eq!(spec.empty_caption.as_deref(), Some("Any"));
    }

    #[test]
    fn test_enum_select_lists_every_constant() {
        let column = status_column();
        let config = DecoratorConfig::new().with_enum_caption("INACTIVE", "Dormant");
        let spec = enum_select(&column, Some(&config));

        assert_eq!(spec.items.len(), 2);
        assert_eq!(spec.items[0].caption, "ACTIVE");
        assert_eq!(spec.items[1].caption, "Dormant");
        assert_eq!(spec.items[1].value, Value::Enum(OptionValue::code(1)));
    }

    #[test]
    fn test_number_popup_labels() {
        assert_eq!(number_popup(None), NumberPopupSpec::default());

        let config = DecoratorConfig::new()
            .with_all_items_visible("All")
            .with_number_popup(NumberFilterPopupConfig::default().with_lt_prompt("Below"));
        let spec = number_popup(Some(&config));
        assert_eq!(spec.labels.lt_prompt, "Below");
        assert_eq!(spec.labels.gt_prompt, "Greater than");
        assert_eq!(spec.empty_caption, "All");
    }

    #[test]
    fn test_default_widget_per_kind() {
        let column = ColumnDef::new("x", ValueType::Int);
        assert!(matches!(
            default_widget(FilterKind::Numeric, &column, None),
            WidgetSpec::NumberPopup(_)
        ));
        assert!(matches!(
            default_widget(FilterKind::DateTime, &column, None),
            WidgetSpec::DateRange(_)
        ));
        assert!(matches!(
            default_widget(FilterKind::Text, &column, None),
            WidgetSpec::Text(_)
        ));
    }
}
