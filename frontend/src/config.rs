//! Application configuration.
//!
//! Centralized constants for the landing page and its dot field.
//! These are compiled in; [`crate::DotFieldConfig::default`] is built
//! from them.

use crate::types::Color;

/// Application name, used as the document title.
pub const APP_NAME: &str = "Digital Experiences";

/// Console log level for the WASM build.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Number of dots generated per (re)initialization.
pub const DOT_COUNT: usize = 50;

/// Smallest dot radius in pixels (inclusive).
pub const DOT_RADIUS_MIN: f64 = 5.0;

/// Largest dot radius in pixels (exclusive).
pub const DOT_RADIUS_MAX: f64 = 8.0;

/// A line is drawn from a dot to the pointer when the pointer is
/// strictly closer than this many pixels.
pub const LINK_DISTANCE: f64 = 300.0;

/// Stroke width of pointer links, in pixels.
pub const LINE_WIDTH: f64 = 1.0;

/// Dot colors.
pub const DOT_PALETTE: &[Color] = &[
    Color::new("#eee"),
    Color::new("#545454"),
    Color::new("#596d91"),
    Color::new("#bb5a68"),
    Color::new("#696541"),
];
