//! Enumerated type and constant values

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Serialize;

/// A single constant of an enumerated column type.
///
/// The numeric code identifies the constant; the name is the human-readable
/// text used when no caption is supplied by a decorator. Two values are equal
/// when their codes are equal, so a row value carrying only a code matches a
/// selection made from the full [`EnumType`].
///
/// # Example
///
/// ```
/// use filtergrid_lib::model::types::OptionValue;
///
/// let active = OptionValue::new(0, "ACTIVE");
/// assert_eq!(active, OptionValue::code(0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionValue {
    /// The numeric code of the constant.
    pub value: i32,
    /// The constant name, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl OptionValue {
    /// Creates a new constant with a name.
    pub fn new(value: i32, name: impl Into<String>) -> Self {
        Self {
            value,
            name: Some(name.into()),
        }
    }

    /// Creates a constant known only by its code.
    pub fn code(value: i32) -> Self {
        Self { value, name: None }
    }
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for OptionValue {}

impl Hash for OptionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.value),
        }
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::code(value)
    }
}

/// An enumerated column type: a name and its ordered constants.
///
/// # Example
///
/// ```
/// use filtergrid_lib::model::types::EnumType;
///
/// let status = EnumType::new("Status")
///     .with_constant(0, "ACTIVE")
///     .with_constant(1, "INACTIVE");
/// assert_eq!(status.constants().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    /// The type name.
    pub name: String,
    /// All constants, in declaration order.
    #[serde(default)]
    pub constants: Vec<OptionValue>,
}

impl EnumType {
    /// Creates an enumerated type with no constants.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constants: Vec::new(),
        }
    }

    /// Adds a constant (builder pattern).
    pub fn with_constant(mut self, value: i32, name: impl Into<String>) -> Self {
        self.constants.push(OptionValue::new(value, name));
        self
    }

    /// Returns all constants, in declaration order.
    pub fn constants(&self) -> &[OptionValue] {
        &self.constants
    }

    /// Finds the constant with the given code.
    pub fn constant(&self, value: i32) -> Option<&OptionValue> {
        self.constants.iter().find(|c| c.value == value)
    }
}
