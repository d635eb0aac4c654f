//! Column value and criterion types

mod date_range;
mod interval;
mod option_set;

pub use date_range::*;
pub use interval::*;
pub use option_set::*;
