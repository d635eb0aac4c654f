//! End-to-end filtering through the public grid API.

use std::sync::Arc;

use chrono::NaiveDate;
use filtergrid_lib::decorator::DecoratorConfig;
use filtergrid_lib::editor::NumberFilterPopup;
use filtergrid_lib::editor::PopupField;
use filtergrid_lib::filter::Criterion;
use filtergrid_lib::filter::FilterGenerator;
use filtergrid_lib::filter::FilterKind;
use filtergrid_lib::filter::Predicate;
use filtergrid_lib::filter::ValueProvider;
use filtergrid_lib::grid::FilterGrid;
use filtergrid_lib::model::ColumnDef;
use filtergrid_lib::model::Row;
use filtergrid_lib::model::Value;
use filtergrid_lib::model::ValueType;
use filtergrid_lib::model::types::DateRange;
use filtergrid_lib::model::types::EnumType;
use filtergrid_lib::model::types::NumberInterval;
use filtergrid_lib::model::types::OptionValue;
use filtergrid_lib::widget::WidgetSpec;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TestLogger;

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|r| r.value("id").to_string()).collect()
}

#[test]
fn test_int_column_less_than() {
    init_logging();
    let mut grid = FilterGrid::new().column("amount", ValueType::Int);
    grid.initialize_filters();
    grid.set_criterion("amount", Some(Criterion::from(NumberInterval::less_than("100"))))
        .unwrap();

    assert!(grid.test_row(&Row::new().set("amount", 50)).unwrap());
    assert!(!grid.test_row(&Row::new().set("amount", 150)).unwrap());
    assert!(!grid.test_row(&Row::new().set("amount", Value::Null)).unwrap());
    assert!(!grid.test_row(&Row::new()).unwrap());
}

#[test]
fn test_every_column_gets_a_kind() {
    init_logging();
    let status = EnumType::new("Status").with_constant(0, "ACTIVE");
    let mut grid = FilterGrid::new()
        .column("active", ValueType::Bool)
        .column("status", ValueType::Enum(status))
        .column("created", ValueType::Timestamp)
        .column("born", ValueType::SqlDate)
        .column("total", ValueType::BigDecimal)
        .column("id", ValueType::Guid)
        .column("blob", ValueType::Other("bytes".to_string()));
    grid.initialize_filters();

    let kinds: Vec<_> = grid
        .columns()
        .iter()
        .map(|c| c.filter().unwrap().kind())
        .collect();
    assert_eq!(
        kinds,
        [
            FilterKind::Boolean,
            FilterKind::Enum,
            FilterKind::DateTime,
            FilterKind::DateTime,
            FilterKind::Numeric,
            FilterKind::Text,
            FilterKind::Text,
        ]
    );
}

#[test]
fn test_single_day_range_includes_whole_day() {
    init_logging();
    let mut grid = FilterGrid::new().column("created", ValueType::DateTime);
    grid.initialize_filters();
    let day = date(2024, 3, 15);
    grid.set_criterion("created", Some(Criterion::from(DateRange::between(day, day))))
        .unwrap();

    let at = |d: NaiveDate, h: u32, m: u32| Row::new().set("created", d.and_hms_opt(h, m, 0).unwrap());
    assert!(grid.test_row(&at(day, 0, 0)).unwrap());
    assert!(grid.test_row(&at(day, 23, 59)).unwrap());
    assert!(grid.test_row(&at(date(2024, 3, 16), 0, 0)).unwrap());
    assert!(!grid.test_row(&at(date(2024, 3, 16), 0, 1)).unwrap());
    assert!(!grid.test_row(&at(date(2024, 3, 14), 23, 59)).unwrap());
}

#[test]
fn test_empty_range_is_no_filter() {
    init_logging();
    let mut grid = FilterGrid::new().column("born", ValueType::Date);
    grid.initialize_filters();
    grid.set_criterion("born", Some(Criterion::from(DateRange::new(None, None))))
        .unwrap();

    assert_eq!(grid.criterion("born"), None);
    assert!(grid.test_row(&Row::new()).unwrap());
}

#[test]
fn test_boolean_and_enum_selection() {
    init_logging();
    let status = EnumType::new("Status")
        .with_constant(0, "ACTIVE")
        .with_constant(1, "INACTIVE");
    let mut grid = FilterGrid::new()
        .column("active", ValueType::Bool)
        .column("status", ValueType::Enum(status));
    grid.initialize_filters();
    grid.set_criterion("active", Some(Criterion::from(true))).unwrap();
    grid.set_criterion("status", Some(Criterion::from(OptionValue::code(1))))
        .unwrap();

    let rows = vec![
        Row::new().set("id", 1).set("active", true).set("status", OptionValue::new(1, "INACTIVE")),
        Row::new().set("id", 2).set("active", false).set("status", OptionValue::new(1, "INACTIVE")),
        Row::new().set("id", 3).set("active", true).set("status", OptionValue::new(0, "ACTIVE")),
    ];
    assert_eq!(ids(&grid.filter_rows(&rows)), ["1"]);
}

#[test]
fn test_text_filter_on_guid_column() {
    init_logging();
    let mut grid = FilterGrid::new().column("id", ValueType::Guid);
    grid.initialize_filters();
    grid.set_criterion("id", Some(Criterion::from("ABCD"))).unwrap();

    let id = uuid::Uuid::parse_str("1234abcd-0000-0000-0000-000000000000").unwrap();
    assert!(grid.test_row(&Row::new().set("id", id)).unwrap());
    assert!(!grid.test_row(&Row::new().set("id", uuid::Uuid::nil())).unwrap());
}

struct Overrides;

impl FilterGenerator for Overrides {
    fn value_provider(&self, column: &ColumnDef) -> Option<ValueProvider> {
        if column.id != "amount" {
            return None;
        }
        Some(Arc::new(|row: &Row| match row.value("amount") {
            Value::Int(cents) => Value::Int(cents / 100),
            other => other,
        }))
    }

    fn predicate(&self, column: &ColumnDef) -> Option<Predicate> {
        if column.id != "name" {
            return None;
        }
        Some(Arc::new(|value: &Value, criterion: Option<&Criterion>| {
            Ok(match criterion {
                Some(Criterion::Text(prefix)) => value.to_string().starts_with(prefix.as_str()),
                _ => true,
            })
        }))
    }

    fn custom_widget(&self, column: &ColumnDef) -> Option<WidgetSpec> {
        (column.id == "name").then(|| WidgetSpec::Custom("prefix".to_string()))
    }
}

#[test]
fn test_generator_overrides_are_independent() {
    init_logging();
    let mut grid = FilterGrid::new()
        .column("name", ValueType::String)
        .column("amount", ValueType::Int)
        .with_generator(Arc::new(Overrides));
    grid.initialize_filters();

    let name = grid.get_column("name").unwrap().filter().unwrap();
    assert_eq!(name.widget(), &WidgetSpec::Custom("prefix".to_string()));
    let amount = grid.get_column("amount").unwrap().filter().unwrap();
    assert!(matches!(amount.widget(), WidgetSpec::NumberPopup(_)));
    assert!(amount.has_value_provider());

    grid.set_criterion("name", Some(Criterion::from("Con"))).unwrap();
    grid.set_criterion("amount", Some(Criterion::from(NumberInterval::equal_to("5"))))
        .unwrap();

    let rows = vec![
        Row::new().set("id", 1).set("name", "Contoso").set("amount", 500),
        Row::new().set("id", 2).set("name", "Fabrikam Contoso").set("amount", 500),
        Row::new().set("id", 3).set("name", "Contoso").set("amount", 5),
    ];
    assert_eq!(ids(&grid.filter_rows(&rows)), ["1"]);
}

#[test]
fn test_popup_commit_drives_grid() {
    init_logging();
    let decorator = DecoratorConfig::new().with_all_items_visible("All");
    let mut grid = FilterGrid::new()
        .column("id", ValueType::Long)
        .with_decorator(Arc::new(decorator));
    grid.initialize_filters();

    let Some(WidgetSpec::NumberPopup(spec)) = grid.get_column("id").map(|c| c.filter().unwrap().widget().clone())
    else {
        panic!("expected number popup widget");
    };
    let mut popup = NumberFilterPopup::new(&spec);
    assert_eq!(popup.caption(), "All");

    popup.open();
    popup.input(PopupField::GreaterThan, "1");
    popup.input(PopupField::LessThan, "4");
    popup.commit();
    grid.set_criterion("id", popup.value().cloned().map(Criterion::from))
        .unwrap();

    let rows: Vec<_> = (1..=5i64).map(|i| Row::new().set("id", i)).collect();
    assert_eq!(ids(&grid.filter_rows(&rows)), ["2", "3"]);
}

#[test]
fn test_inverted_interval_matches_nothing() {
    init_logging();
    let mut grid = FilterGrid::new().column("amount", ValueType::Double);
    grid.initialize_filters();
    grid.set_criterion("amount", Some(Criterion::from(NumberInterval::new("1", "9", ""))))
        .unwrap();

    let rows: Vec<_> = [0.0, 5.0, 10.0].iter().map(|v| Row::new().set("amount", *v)).collect();
    assert!(grid.filter_rows(&rows).is_empty());
}

#[test]
fn test_malformed_bound_hides_rows_without_aborting() {
    init_logging();
    let mut grid = FilterGrid::new()
        .column("amount", ValueType::Int)
        .column("name", ValueType::String);
    grid.initialize_filters();
    grid.set_criterion("amount", Some(Criterion::from(NumberInterval::greater_than("x"))))
        .unwrap();

    let rows = vec![
        Row::new().set("id", 1).set("amount", 3),
        Row::new().set("id", 2).set("amount", Value::Null),
    ];
    assert!(grid.test_row(&rows[0]).is_err());
    assert!(grid.filter_rows(&rows).is_empty());
}

#[test]
fn test_recommitting_same_criteria_keeps_rows() {
    init_logging();
    let mut grid = FilterGrid::new()
        .column("id", ValueType::Long)
        .column("created", ValueType::Date);
    grid.initialize_filters();
    let Some(WidgetSpec::NumberPopup(spec)) = grid.get_column("id").map(|c| c.filter().unwrap().widget().clone())
    else {
        panic!("expected number popup widget");
    };
    let mut popup = NumberFilterPopup::new(&spec);

    let rows: Vec<_> = (1..=6i64)
        .map(|i| Row::new().set("id", i).set("created", date(2024, 3, i as u32)))
        .collect();
    let range = DateRange::between(date(2024, 3, 2), date(2024, 3, 5));

    let mut visible = Vec::new();
    for _ in 0..2 {
        popup.open();
        popup.input(PopupField::GreaterThan, "1");
        popup.input(PopupField::LessThan, "5");
        popup.commit();
        grid.set_criterion("id", popup.value().cloned().map(Criterion::from))
            .unwrap();
        grid.set_criterion("created", Some(Criterion::from(range))).unwrap();
        visible.push(ids(&grid.filter_rows(&rows)));
    }

    assert_eq!(visible[0], ["2", "3", "4"]);
    assert_eq!(visible[0], visible[1]);
}
