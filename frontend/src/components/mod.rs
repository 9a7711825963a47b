//! UI Components for the landing page.
//!
//! # Layout Components
//! - [`Hero`] - Banner copy, call to action and the animated dot field
//! - [`SectionTitle`] - Centered section caption
//! - [`Footer`] - Page footer

mod hero;
mod title;
mod footer;

pub use hero::*;
pub use title::*;
pub use footer::*;
