//! `CanvasRenderingContext2d` implementation of [`CanvasHost`].

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};

use super::CanvasHost;
use crate::types::{AppError, AppResult, Color, Position, Size};

/// A `<canvas>` laid over its container element.
pub struct WebCanvasHost {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl WebCanvasHost {
    /// Grab the 2D context of `canvas`.
    pub fn attach(container: HtmlElement, canvas: HtmlCanvasElement) -> AppResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| AppError::Canvas(format!("getContext failed: {:?}", e)))?
            .ok_or_else(|| AppError::Canvas("2D context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Canvas("context is not a CanvasRenderingContext2d".into()))?;

        Ok(Self {
            container,
            canvas,
            context,
        })
    }

    /// Resize the canvas backing store to the container's layout size.
    pub fn fit_to_container(&self) -> Size {
        let size = Size::from_offsets(self.container.offset_width(), self.container.offset_height());
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        size
    }

    /// Pointer coordinates relative to the container's top-left corner.
    pub fn pointer_position(&self, event: &MouseEvent) -> Position {
        let rect = self.container.get_bounding_client_rect();
        Position::new(
            event.client_x() as f64 - rect.left(),
            event.client_y() as f64 - rect.top(),
        )
    }
}

impl CanvasHost for WebCanvasHost {
    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) {
        let size = self.size();
        self.context
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_circle(&mut self, center: Position, radius: f64, color: Color) {
        self.context.set_fill_style_str(color.as_str());
        self.context.begin_path();
        if let Err(e) = self.context.arc(center.x, center.y, radius, 0.0, TAU) {
            log::warn!("Skipping dot at ({}, {}): {:?}", center.x, center.y, e);
            return;
        }
        self.context.fill();
    }

    fn stroke_line(&mut self, from: Position, to: Position, color: Color, width: f64) {
        self.context.set_stroke_style_str(color.as_str());
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context.stroke();
    }
}
