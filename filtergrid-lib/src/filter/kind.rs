//! Filter kind classification

use std::fmt;

use crate::model::ValueType;

/// The closed set of default filtering behaviours a column can get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Two-state selector, equality predicate.
    Boolean,
    /// Constant selector, equality predicate.
    Enum,
    /// Date range editor, day-inclusive range predicate.
    DateTime,
    /// Numeric interval popup, interval predicate.
    Numeric,
    /// Free text input, case-insensitive containment predicate.
    Text,
}

impl FilterKind {
    /// Returns the kind name.
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Boolean => "boolean",
            FilterKind::Enum => "enum",
            FilterKind::DateTime => "datetime",
            FilterKind::Numeric => "numeric",
            FilterKind::Text => "text",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a declared column type to its filter kind.
///
/// Rules apply in order: boolean, enum, date/time, numeric, then text for
/// everything else. Unrecognized types never fail; they filter as text.
pub fn classify(value_type: &ValueType) -> FilterKind {
    if matches!(value_type, ValueType::Bool) {
        FilterKind::Boolean
    } else if value_type.enum_type().is_some() {
        FilterKind::Enum
    } else if value_type.is_temporal() {
        FilterKind::DateTime
    } else if value_type.numeric_type().is_some() {
        FilterKind::Numeric
    } else {
        FilterKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::EnumType;

    #[test]
    fn test_classify_boolean() {
        assert_eq!(classify(&ValueType::Bool), FilterKind::Boolean);
    }

    #[test]
    fn test_classify_enum() {
        let status = EnumType::new("Status").with_constant(0, "ACTIVE");
        assert_eq!(classify(&ValueType::Enum(status)), FilterKind::Enum);
    }

    #[test]
    fn test_classify_temporal() {
        for ty in [
            ValueType::Date,
            ValueType::SqlDate,
            ValueType::DateTime,
            ValueType::Instant,
            ValueType::Timestamp,
        ] {
            assert_eq!(classify(&ty), FilterKind::DateTime, "{ty:?}");
        }
    }

    #[test]
    fn test_classify_numeric() {
        for ty in [
            ValueType::Byte,
            ValueType::Short,
            ValueType::Int,
            ValueType::Long,
            ValueType::Float,
            ValueType::Double,
            ValueType::Decimal,
            ValueType::BigInteger,
            ValueType::BigDecimal,
        ] {
            assert_eq!(classify(&ty), FilterKind::Numeric, "{ty:?}");
        }
    }

    #[test]
    fn test_classify_falls_back_to_text() {
        assert_eq!(classify(&ValueType::String), FilterKind::Text);
        assert_eq!(classify(&ValueType::Guid), FilterKind::Text);
        assert_eq!(classify(&ValueType::Json), FilterKind::Text);
        assert_eq!(
            classify(&ValueType::Other("com.example.Address".into())),
            FilterKind::Text
        );
    }
}
