//! Declared column value types

use super::types::EnumType;

/// The declared value type of a grid column.
///
/// This is the closed set of type tags the surrounding UI layer can declare.
/// Anything it cannot describe more precisely is `Other`, which filters as
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    /// Boolean (true/false).
    Bool,
    /// Enumerated type with a fixed set of constants.
    Enum(EnumType),
    /// 8-bit integer.
    Byte,
    /// 16-bit integer.
    Short,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Fixed precision decimal.
    Decimal,
    /// Arbitrary precision integer.
    BigInteger,
    /// Arbitrary precision decimal.
    BigDecimal,
    /// Local calendar date.
    Date,
    /// Calendar date as stored by SQL drivers.
    SqlDate,
    /// Local date and time.
    DateTime,
    /// Point in time.
    Instant,
    /// Point in time as stored by SQL drivers.
    Timestamp,
    /// Single-line or multi-line text.
    String,
    /// Unique identifier (GUID).
    Guid,
    /// Structured JSON.
    Json,
    /// Any other type, by name.
    Other(String),
}

impl ValueType {
    /// Returns the numeric type for numeric tags.
    pub fn numeric_type(&self) -> Option<NumericType> {
        match self {
            ValueType::Byte => Some(NumericType::Byte),
            ValueType::Short => Some(NumericType::Short),
            ValueType::Int => Some(NumericType::Int),
            ValueType::Long => Some(NumericType::Long),
            ValueType::Float => Some(NumericType::Float),
            ValueType::Double => Some(NumericType::Double),
            ValueType::Decimal => Some(NumericType::Decimal),
            ValueType::BigInteger => Some(NumericType::BigInteger),
            ValueType::BigDecimal => Some(NumericType::BigDecimal),
            _ => None,
        }
    }

    /// Returns `true` for date and date-time tags.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            ValueType::Date
                | ValueType::SqlDate
                | ValueType::DateTime
                | ValueType::Instant
                | ValueType::Timestamp
        )
    }

    /// Returns the enumerated type for enum tags.
    pub fn enum_type(&self) -> Option<&EnumType> {
        match self {
            ValueType::Enum(e) => Some(e),
            _ => None,
        }
    }
}

/// The concrete numeric types a numeric bound can be parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Decimal,
    BigInteger,
    BigDecimal,
}

impl NumericType {
    /// Returns the type name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            NumericType::Byte => "byte",
            NumericType::Short => "short",
            NumericType::Int => "int",
            NumericType::Long => "long",
            NumericType::Float => "float",
            NumericType::Double => "double",
            NumericType::Decimal => "decimal",
            NumericType::BigInteger => "big_integer",
            NumericType::BigDecimal => "big_decimal",
        }
    }
}
