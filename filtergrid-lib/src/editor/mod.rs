//! Criterion editors with behaviour beyond a single input

mod number_popup;

pub use number_popup::*;
