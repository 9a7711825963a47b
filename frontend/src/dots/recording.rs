//! Test double that records draw commands.

use super::CanvasHost;
use crate::types::{Color, Position, Size};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Position,
        radius: f64,
        color: Color,
    },
    Line {
        from: Position,
        to: Position,
        color: Color,
        width: f64,
    },
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

impl RecordingHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Commands issued since the last clear, i.e. what is visible.
    pub fn frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    pub fn lines(&self) -> Vec<&DrawCommand> {
        self.frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .collect()
    }

    pub fn circles(&self) -> Vec<&DrawCommand> {
        self.frame()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .collect()
    }
}

impl CanvasHost for RecordingHost {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Position, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Position, to: Position, color: Color, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }
}
