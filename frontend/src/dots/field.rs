//! Dot field state and drawing.
//!
//! The field owns a batch of randomly placed [`Point`]s. Every event
//! redraws the whole surface from scratch: no incremental updates, and
//! z-order follows the point array (first point drawn first).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{CanvasHost, FieldEvent};
use crate::config::{DOT_COUNT, DOT_PALETTE, DOT_RADIUS_MAX, DOT_RADIUS_MIN, LINE_WIDTH, LINK_DISTANCE};
use crate::types::{AppError, AppResult, Color, Point, Position, Size};

// =============================================================================
// Configuration
// =============================================================================

/// Tunables of the dot field.
#[derive(Clone, Debug, PartialEq)]
pub struct DotFieldConfig {
    /// Dots per generated batch
    pub dot_count: usize,
    /// Smallest radius (inclusive)
    pub radius_min: f64,
    /// Largest radius (exclusive)
    pub radius_max: f64,
    /// Links are drawn strictly below this distance
    pub link_distance: f64,
    /// Link stroke width
    pub line_width: f64,
    /// Colors picked uniformly for each dot
    pub palette: &'static [Color],
}

impl Default for DotFieldConfig {
    fn default() -> Self {
        Self {
            dot_count: DOT_COUNT,
            radius_min: DOT_RADIUS_MIN,
            radius_max: DOT_RADIUS_MAX,
            link_distance: LINK_DISTANCE,
            line_width: LINE_WIDTH,
            palette: DOT_PALETTE,
        }
    }
}

impl DotFieldConfig {
    /// Check that dots can actually be generated and drawn.
    pub fn validate(&self) -> AppResult<()> {
        if self.palette.is_empty() {
            return Err(AppError::Config("palette is empty".into()));
        }
        if !(self.radius_min.is_finite() && self.radius_max.is_finite())
            || self.radius_min < 0.0
            || self.radius_min >= self.radius_max
        {
            return Err(AppError::Config(format!(
                "invalid radius range [{}, {})",
                self.radius_min, self.radius_max
            )));
        }
        if !self.link_distance.is_finite() || self.link_distance < 0.0 {
            return Err(AppError::Config(format!(
                "invalid link distance {}",
                self.link_distance
            )));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(AppError::Config(format!("invalid line width {}", self.line_width)));
        }
        Ok(())
    }
}

// =============================================================================
// Dot field
// =============================================================================

/// Decorative dots that link to the pointer.
///
/// Generic over the random source so placement can be seeded.
pub struct DotField<R = StdRng> {
    config: DotFieldConfig,
    rng: R,
    points: Vec<Point>,
}

impl DotField<StdRng> {
    /// Field backed by an OS-seeded generator.
    pub fn with_entropy(config: DotFieldConfig) -> AppResult<Self> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> DotField<R> {
    pub fn new(config: DotFieldConfig, rng: R) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            points: Vec::new(),
        })
    }

    pub fn config(&self) -> &DotFieldConfig {
        &self.config
    }

    /// Current dots, in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Clear the surface, regenerate all dots for the host's size and draw them.
    ///
    /// A zero-sized host leaves the field empty.
    pub fn initialize(&mut self, host: &mut impl CanvasHost) {
        let size = host.size();
        host.clear();
        self.points = self.generate(size);
        self.draw_points(host);
        log::debug!("Dot field initialized: {} dots in {}", self.points.len(), size);
    }

    /// Same as [`Self::initialize`]; placement is not stable across calls.
    pub fn resize(&mut self, host: &mut impl CanvasHost) {
        self.initialize(host);
    }

    /// Redraw the dots and link every dot closer than the link distance to
    /// `pointer`. Returns the number of links drawn.
    pub fn pointer_move(&self, host: &mut impl CanvasHost, pointer: Position) -> usize {
        host.clear();
        self.draw_points(host);

        let mut links = 0;
        for point in &self.points {
            if point.links_to(pointer, self.config.link_distance) {
                host.stroke_line(point.position, pointer, point.color, self.config.line_width);
                links += 1;
            }
        }
        log::trace!("Pointer at ({}, {}): {} links", pointer.x, pointer.y, links);
        links
    }

    /// Redraw the dots without links.
    pub fn pointer_leave(&self, host: &mut impl CanvasHost) {
        host.clear();
        self.draw_points(host);
    }

    pub fn handle(&mut self, host: &mut impl CanvasHost, event: FieldEvent) {
        match event {
            FieldEvent::Resize => self.resize(host),
            FieldEvent::PointerMove(pointer) => {
                self.pointer_move(host, pointer);
            }
            FieldEvent::PointerLeave => self.pointer_leave(host),
        }
    }

    fn generate(&mut self, size: Size) -> Vec<Point> {
        if size.is_empty() {
            return Vec::new();
        }

        let DotFieldConfig {
            dot_count,
            radius_min,
            radius_max,
            palette,
            ..
        } = self.config;
        let rng = &mut self.rng;

        (0..dot_count)
            .filter_map(|_| {
                let x = rng.gen_range(0..size.width) as f64;
                let y = rng.gen_range(0..size.height) as f64;
                let radius = rng.gen_range(radius_min..radius_max);
                let color = *palette.choose(&mut *rng)?;
                Some(Point {
                    position: Position::new(x, y),
                    radius,
                    color,
                })
            })
            .collect()
    }

    fn draw_points(&self, host: &mut impl CanvasHost) {
        for point in &self.points {
            host.fill_circle(point.position, point.radius, point.color);
        }
    }
}
