//! Typed models

mod column;
mod row;
pub mod types;
mod value;
mod value_type;

pub use column::*;
pub use row::*;
pub use value::*;
pub use value_type::*;
