//! Column filtering engine for data grids
//!
//! Chooses a filter widget and a predicate for each grid column from its
//! declared value type, turns user-entered criteria into predicate
//! parameters, and decides which rows stay visible. Rendering is left to
//! the caller: widgets are described by [`widget::WidgetSpec`] and captions
//! come from an injected [`decorator::FilterDecorator`].

pub mod decorator;
pub mod editor;
pub mod error;
pub mod filter;
pub mod grid;
pub mod model;
pub mod widget;
