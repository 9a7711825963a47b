//! Animated dot field behind the hero banner.
//!
//! # Modules
//!
//! - [`field`] - dot generation and per-event redraw ([`DotField`])
//! - [`host`] - the [`CanvasHost`] drawing abstraction and [`FieldEvent`]
//! - [`canvas`] - browser implementation over a 2D canvas context

pub mod canvas;
pub mod field;
pub mod host;

#[cfg(test)]
pub(crate) mod recording;

pub use canvas::WebCanvasHost;
pub use field::{DotField, DotFieldConfig};
pub use host::{CanvasHost, FieldEvent};
