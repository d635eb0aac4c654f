//! Column filter engine
//!
//! Classifies columns into [`FilterKind`]s, provides the default predicate
//! for each kind and assembles a [`ColumnFilter`] per column, applying
//! generator overrides where given.

mod assembly;
mod criterion;
mod kind;
mod number;
mod options;
mod predicate;
pub mod temporal;

pub use assembly::*;
pub use criterion::*;
pub use kind::*;
pub use number::Number;
pub(crate) use number::is_float_literal;
pub use options::*;
pub use predicate::*;
