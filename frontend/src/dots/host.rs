//! Drawing surface abstraction for the dot field.

use crate::types::{Color, Position, Size};

/// What the dot field needs from its environment.
///
/// The browser implementation is [`super::WebCanvasHost`]; tests use a
/// recorder that captures draw commands.
pub trait CanvasHost {
    /// Current drawable size of the container.
    fn size(&self) -> Size;

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Position, radius: f64, color: Color);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Position, to: Position, color: Color, width: f64);
}

/// Environment events the dot field reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
    /// The container changed size; regenerate the dots.
    Resize,
    /// The pointer moved inside the container.
    PointerMove(Position),
    /// The pointer left the container.
    PointerLeave,
}
