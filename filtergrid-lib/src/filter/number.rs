//! Numeric bound parsing and comparison

use std::cmp::Ordering;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::error::CriterionError;
use crate::model::NumericType;
use crate::model::Value;

/// A numeric bound parsed into a concrete numeric type.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
    BigInteger(BigInt),
    BigDecimal(BigDecimal),
}

impl NumericType {
    /// Parses bound text as this numeric type.
    ///
    /// Surrounding whitespace is ignored. Text that is not a valid literal
    /// for the type fails with [`CriterionError::MalformedCriterion`].
    /// Floating point types take the classic `double` literal syntax, so
    /// `10d` and `0x1p3` parse while `inf` does not.
    ///
    /// # Example
    ///
    /// ```
    /// use filtergrid_lib::filter::Number;
    /// use filtergrid_lib::model::NumericType;
    ///
    /// assert_eq!(NumericType::Int.parse(" 42 ").unwrap(), Number::Int(42));
    /// assert!(NumericType::Byte.parse("300").is_err());
    /// ```
    pub fn parse(&self, text: &str) -> Result<Number, CriterionError> {
        let target = self.name();
        Ok(match self {
            NumericType::Byte => Number::Byte(parse_as(text, target)?),
            NumericType::Short => Number::Short(parse_as(text, target)?),
            NumericType::Int => Number::Int(parse_as(text, target)?),
            NumericType::Long => Number::Long(parse_as(text, target)?),
            NumericType::Float => Number::Float(parse_float(text, target, |v| v as f32)?),
            NumericType::Double => Number::Double(parse_float(text, target, |v| v)?),
            NumericType::Decimal => Number::Decimal(parse_as(text, target)?),
            NumericType::BigInteger => Number::BigInteger(parse_as(text, target)?),
            NumericType::BigDecimal => Number::BigDecimal(parse_as(text, target)?),
        })
    }
}

fn parse_as<T: FromStr>(text: &str, target: &'static str) -> Result<T, CriterionError> {
    text.trim()
        .parse::<T>()
        .map_err(|_| CriterionError::malformed(text, target))
}

/// Parses floating point text in the classic `double` literal syntax.
fn parse_float<T: FromStr>(
    text: &str,
    target: &'static str,
    from_hex: impl Fn(f64) -> T,
) -> Result<T, CriterionError> {
    match float_literal(text) {
        Some(FloatLiteral::Text(literal)) => literal
            .parse::<T>()
            .map_err(|_| CriterionError::malformed(text, target)),
        Some(FloatLiteral::Hex(value)) => Ok(from_hex(value)),
        None => Err(CriterionError::malformed(text, target)),
    }
}

/// A floating point literal checked against the classic `double` syntax.
enum FloatLiteral<'a> {
    /// Decimal, `NaN` or `Infinity` text, sign kept and type suffix removed.
    Text(&'a str),
    /// Value of a hexadecimal literal.
    Hex(f64),
}

/// Returns `true` for text in the classic `double` literal syntax.
///
/// That is an optional sign, then `NaN`, `Infinity`, a decimal literal or a
/// hexadecimal literal with a binary exponent. Decimal and hexadecimal
/// literals may end in one of `f`, `F`, `d` or `D`. Spellings such as `inf`
/// or `nan` are rejected.
pub(crate) fn is_float_literal(text: &str) -> bool {
    float_literal(text).is_some()
}

fn float_literal(text: &str) -> Option<FloatLiteral<'_>> {
    let text = text.trim_matches(|c: char| c <= ' ');
    let (negative, unsigned) = match text.strip_prefix(['+', '-']) {
        Some(rest) => (text.starts_with('-'), rest),
        None => (false, text),
    };
    if unsigned == "NaN" || unsigned == "Infinity" {
        return Some(FloatLiteral::Text(text));
    }
    let trimmed = text.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(text);
    let body = unsigned.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(unsigned);

    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        let (mantissa, exponent) = hex.split_once(['p', 'P'])?;
        if !is_mantissa(mantissa, |c| c.is_ascii_hexdigit()) || !is_exponent(exponent) {
            return None;
        }
        let value = hex_value(mantissa, exponent);
        return Some(FloatLiteral::Hex(if negative { -value } else { value }));
    }

    let valid = match body.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => {
            is_mantissa(mantissa, |c| c.is_ascii_digit()) && is_exponent(exponent)
        }
        None => is_mantissa(body, |c| c.is_ascii_digit()),
    };
    valid.then_some(FloatLiteral::Text(trimmed))
}

fn is_mantissa(text: &str, is_digit: impl Fn(char) -> bool) -> bool {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    !(whole.is_empty() && fraction.is_empty())
        && whole.chars().all(&is_digit)
        && fraction.chars().all(&is_digit)
}

fn is_exponent(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Evaluates a validated hexadecimal mantissa and binary exponent.
fn hex_value(mantissa: &str, exponent: &str) -> f64 {
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = whole
        .chars()
        .chain(fraction.chars())
        .filter_map(|c| c.to_digit(16))
        .fold(0f64, |acc, d| acc * 16.0 + f64::from(d));
    // Out-of-range exponents saturate to infinity or zero.
    let exponent = exponent
        .parse::<i32>()
        .unwrap_or(if exponent.starts_with('-') { -4096 } else { 4096 });
    let fraction_bits = i32::try_from(fraction.len() * 4).unwrap_or(i32::MAX);
    digits * 2f64.powi(exponent.clamp(-4096, 4096).saturating_sub(fraction_bits))
}

impl Number {
    /// Compares a row value against this bound (`value.cmp(bound)`).
    ///
    /// Returns `None` when the value is not of the same numeric type.
    /// Floating point uses total ordering; decimals compare by numeric value
    /// regardless of scale, see [`Number::equals_value`] for exact equality.
    pub fn compare_value(&self, value: &Value) -> Option<Ordering> {
        match (value, self) {
            (Value::Byte(a), Number::Byte(b)) => Some(a.cmp(b)),
            (Value::Short(a), Number::Short(b)) => Some(a.cmp(b)),
            (Value::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (Value::Long(a), Number::Long(b)) => Some(a.cmp(b)),
            (Value::Float(a), Number::Float(b)) => Some(a.total_cmp(b)),
            (Value::Double(a), Number::Double(b)) => Some(a.total_cmp(b)),
            (Value::Decimal(a), Number::Decimal(b)) => Some(a.cmp(b)),
            (Value::BigInteger(a), Number::BigInteger(b)) => Some(a.cmp(b)),
            (Value::BigDecimal(a), Number::BigDecimal(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Tests a row value for exact equality with this bound.
    ///
    /// Decimals must also agree in scale, so `2.0` does not equal `2.00`.
    /// Returns `None` when the value is not of the same numeric type.
    pub fn equals_value(&self, value: &Value) -> Option<bool> {
        match (value, self) {
            (Value::Decimal(a), Number::Decimal(b)) => Some(a == b && a.scale() == b.scale()),
            (Value::BigDecimal(a), Number::BigDecimal(b)) => {
                Some(a.as_bigint_and_exponent() == b.as_bigint_and_exponent())
            }
            _ => self.compare_value(value).map(Ordering::is_eq),
        }
    }
}

/// Parses `bound` as the numeric type of `value` and compares them.
pub(crate) fn compare_to_bound(value: &Value, bound: &str) -> Result<Ordering, CriterionError> {
    let numeric_type = value
        .numeric_type()
        .ok_or_else(|| CriterionError::unsupported(value.type_name()))?;
    let parsed = numeric_type.parse(bound)?;
    parsed
        .compare_value(value)
        .ok_or_else(|| CriterionError::unsupported(value.type_name()))
}

/// Parses `bound` as the numeric type of `value` and tests exact equality.
pub(crate) fn equals_bound(value: &Value, bound: &str) -> Result<bool, CriterionError> {
    let numeric_type = value
        .numeric_type()
        .ok_or_else(|| CriterionError::unsupported(value.type_name()))?;
    numeric_type
        .parse(bound)?
        .equals_value(value)
        .ok_or_else(|| CriterionError::unsupported(value.type_name()))
}
