//! Rendering module
//!
//! Everything that touches pixels goes through the `Surface` trait, so the
//! same painting code drives a browser canvas and the headless recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod paint;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::Rgba;
pub use paint::{Paint, render_frame};
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::sim::SurfaceDims;

/// A drawing surface bound to the viewport
pub trait Surface {
    /// Current pixel dimensions
    fn dims(&self) -> SurfaceDims;

    /// Wipe the whole surface
    fn clear(&mut self);

    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Solid line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Line segment fading transparent -> `color` -> transparent
    fn stroke_pulse(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
