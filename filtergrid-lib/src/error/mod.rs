//! Error types

mod config;
mod criterion;
mod filter;

pub use config::*;
pub use criterion::*;
pub use filter::*;
