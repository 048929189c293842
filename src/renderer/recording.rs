//! Headless surface that records draw calls

use glam::Vec2;

use super::{Rgba, Surface};
use crate::sim::SurfaceDims;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
    Pulse { from: Vec2, to: Vec2, width: f32, color: Rgba },
}

/// Surface that keeps the draw calls of the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    dims: SurfaceDims,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    pub fn new(dims: SurfaceDims) -> Self {
        Self {
            dims,
            commands: Vec::new(),
            frames: 0,
        }
    }

    /// Change size, as a viewport resize would
    pub fn resize(&mut self, dims: SurfaceDims) -> SurfaceDims {
        self.dims = dims;
        dims
    }

    /// Draw calls since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears, i.e. frames started
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for RecordingSurface {
    fn dims(&self) -> SurfaceDims {
        self.dims
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn stroke_pulse(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Pulse {
            from,
            to,
            width,
            color,
        });
    }
}
