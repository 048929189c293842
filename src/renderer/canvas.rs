//! Canvas 2D surface (browser only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::{Rgba, Surface};
use crate::error::{AmbientError, Result};
use crate::sim::SurfaceDims;

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to the canvas with the given id. Fails if the element is missing,
    /// is not a canvas, or has no 2D context.
    pub fn from_element_id(window: &Window, id: &str) -> Result<Self> {
        let document = window.document().ok_or(AmbientError::NoDocument)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| AmbientError::MissingElement(id.to_string()))?
            .dyn_into()
            .map_err(|_| AmbientError::NotACanvas(id.to_string()))?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
            .ok_or_else(|| AmbientError::ContextUnavailable(id.to_string()))?;

        Ok(Self { canvas, ctx })
    }

    /// Match the canvas backing size to the viewport
    pub fn resize_to_viewport(&self, window: &Window) -> SurfaceDims {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.dims()
    }
}

impl Surface for CanvasSurface {
    fn dims(&self) -> SurfaceDims {
        SurfaceDims::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let dims = self.dims();
        self.ctx
            .clear_rect(0.0, 0.0, dims.width as f64, dims.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }

    fn stroke_pulse(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let gradient = self.ctx.create_linear_gradient(
            from.x as f64,
            from.y as f64,
            to.x as f64,
            to.y as f64,
        );
        let clear = color.with_alpha(0.0).to_css();
        let solid = color.to_css();
        let stops = [(0.0, clear.as_str()), (0.5, solid.as_str()), (1.0, clear.as_str())];
        for (offset, css) in stops {
            if let Err(e) = gradient.add_color_stop(offset, css) {
                log::debug!("Gradient stop {offset} {css} rejected: {:?}", e);
            }
        }

        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.stroke();
    }
}
