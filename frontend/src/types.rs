//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Geometry Types** - sizes and positions in container pixels
//! - **Dot Types** - the points drawn by the dot field
//! - **Error Types** - frontend error handling

use std::fmt;

// =============================================================================
// Geometry Types
// =============================================================================

/// Container size in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a size from DOM offsets, clamping negatives to zero.
    pub fn from_offsets(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }
    }

    /// True when either side is zero, so no point fits inside.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A container-relative coordinate in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// =============================================================================
// Dot Types
// =============================================================================

/// A CSS color string from a static palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub const fn new(css: &'static str) -> Self {
        Self(css)
    }

    /// The CSS value, ready for `fillStyle` / `strokeStyle`.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A single dot of the hero background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Center, relative to the container's top-left corner
    pub position: Position,
    /// Radius in pixels
    pub radius: f64,
    /// Fill color, also used for the pointer link
    pub color: Color,
}

impl Point {
    /// Whether a link to `pointer` should be drawn. The comparison is strict.
    pub fn links_to(&self, pointer: Position, max_distance: f64) -> bool {
        self.position.distance_to(pointer) < max_distance
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// None of these reach the user: the hero falls back to a static banner.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// A DOM node the dot field needs is not mounted.
    MissingElement(String),
    /// The 2D drawing context is unavailable or rejected a call.
    Canvas(String),
    /// Invalid dot field configuration.
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingElement(msg) => write!(f, "Missing element: {}", msg),
            AppError::Canvas(msg) => write!(f, "Canvas error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
