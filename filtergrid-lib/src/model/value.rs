//! Value enum for dynamic cell values

use std::fmt;

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::NumericType;
use super::types::OptionValue;

/// A dynamic value held by a grid cell.
///
/// Row values reach the filter engine as `Value`s. Numeric predicates parse
/// their bounds into the *runtime* numeric variant of the row value, so an
/// `Int` column fed a `Long` value compares as `Long`.
///
/// # Type Mapping
///
/// | Column type | Rust Variant |
/// |-------------|--------------|
/// | null | `Null` |
/// | boolean | `Bool` |
/// | byte / short / int / long | `Byte` / `Short` / `Int` / `Long` |
/// | float / double | `Float` / `Double` |
/// | fixed decimal | `Decimal` |
/// | big integer / big decimal | `BigInteger` / `BigDecimal` |
/// | text | `String` |
/// | guid | `Guid` |
/// | local date, SQL date | `Date` |
/// | local date-time | `DateTime` |
/// | instant, timestamp | `Instant` |
/// | enumerated | `Enum` |
///
/// # Example
///
/// ```
/// use filtergrid_lib::model::Value;
///
/// let name = Value::from("Contoso");
/// let revenue = Value::from(1_000_000i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 8-bit integer.
    Byte(i8),
    /// 16-bit integer.
    Short(i16),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 32-bit floating point.
    Float(f32),
    /// 64-bit floating point.
    Double(f64),
    /// Fixed precision decimal.
    Decimal(Decimal),
    /// Arbitrary precision integer.
    BigInteger(BigInt),
    /// Arbitrary precision decimal.
    BigDecimal(BigDecimal),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Local date and time.
    DateTime(NaiveDateTime),
    /// Point in time (UTC).
    Instant(DateTime<Utc>),
    /// Enumerated constant.
    Enum(OptionValue),
    /// Fallback for structured values.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Byte(_) => "byte",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Decimal(_) => "decimal",
            Value::BigInteger(_) => "big_integer",
            Value::BigDecimal(_) => "big_decimal",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Instant(_) => "instant",
            Value::Enum(_) => "enum",
            Value::Json(_) => "json",
        }
    }

    /// Returns the numeric type of this value, if it holds a number.
    pub fn numeric_type(&self) -> Option<NumericType> {
        match self {
            Value::Byte(_) => Some(NumericType::Byte),
            Value::Short(_) => Some(NumericType::Short),
            Value::Int(_) => Some(NumericType::Int),
            Value::Long(_) => Some(NumericType::Long),
            Value::Float(_) => Some(NumericType::Float),
            Value::Double(_) => Some(NumericType::Double),
            Value::Decimal(_) => Some(NumericType::Decimal),
            Value::BigInteger(_) => Some(NumericType::BigInteger),
            Value::BigDecimal(_) => Some(NumericType::BigDecimal),
            _ => None,
        }
    }

    /// Returns `true` if values of this variant have a natural ordering.
    ///
    /// Null and structured JSON values are not orderable.
    pub fn is_orderable(&self) -> bool {
        !matches!(self, Value::Null | Value::Json(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::BigInteger(v) => write!(f, "{v}"),
            Value::BigDecimal(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::Guid(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "{v}"),
            Value::DateTime(v) => write!(f, "{v}"),
            Value::Instant(v) => write!(f, "{v}"),
            Value::Enum(v) => write!(f, "{v}"),
            Value::Json(serde_json::Value::String(s)) => f.write_str(s),
            Value::Json(v) => write!(f, "{v}"),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::BigInteger(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Value::BigDecimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Instant(v)
    }
}

impl From<OptionValue> for Value {
    fn from(v: OptionValue) -> Self {
        Value::Enum(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
