//! Engine options

use chrono::FixedOffset;

/// Engine-level options shared by the default predicates.
///
/// # Example
///
/// ```
/// use chrono::FixedOffset;
/// use filtergrid_lib::filter::FilterOptions;
///
/// let options = FilterOptions::default()
///     .with_instant_offset(FixedOffset::east_opt(2 * 3600).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Offset used to turn instant values into local date-times.
    ///
    /// Default: `None`, the system's local time zone.
    pub instant_offset: Option<FixedOffset>,
}

impl FilterOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offset used to localize instant values.
    pub fn with_instant_offset(mut self, offset: FixedOffset) -> Self {
        self.instant_offset = Some(offset);
        self
    }

    /// Creates options that localize instants as UTC.
    pub fn utc() -> Self {
        Self {
            instant_offset: FixedOffset::east_opt(0),
        }
    }
}
