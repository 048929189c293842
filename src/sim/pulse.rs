//! Light pulse travelling along a grid lane

use rand::Rng;

use super::entity::{AmbientEntity, SurfaceDims, uniform};
use crate::consts::*;

/// Grid tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// Distance between grid lines (pixels)
    pub spacing: f32,
    /// Static grid line opacity
    pub line_alpha: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            spacing: GRID_SPACING,
            line_alpha: GRID_LINE_ALPHA,
        }
    }
}

impl GridParams {
    /// Spacing actually used for layout. Non-finite falls back to the
    /// default; anything under `MIN_GRID_SPACING` is raised to it.
    pub fn pitch(&self) -> f32 {
        if self.spacing.is_finite() {
            self.spacing.max(MIN_GRID_SPACING)
        } else {
            GRID_SPACING
        }
    }

    /// Number of lanes across `extent`, never zero
    pub fn lanes(&self, extent: f32) -> u32 {
        ((extent.max(0.0) / self.pitch()).ceil() as u32).max(1)
    }

    /// Offset of lane `index` from the surface origin
    pub fn lane_offset(&self, index: u32) -> f32 {
        index as f32 * self.pitch()
    }
}

/// Lane a pulse travels along. The tag is the orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// Horizontal travel, left to right, along a grid row
    Row(u32),
    /// Vertical travel, top to bottom, along a grid column
    Column(u32),
}

/// A pulse entity
#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    pub lane: Lane,
    /// Leading edge coordinate along the direction of travel
    pub edge: f32,
    pub speed: f32,
    pub opacity: f32,
}

impl Pulse {
    /// Far bound of the pulse's axis on the given surface
    fn far_edge(&self, dims: SurfaceDims) -> f32 {
        match self.lane {
            Lane::Row(_) => dims.width,
            Lane::Column(_) => dims.height,
        }
    }
}

impl AmbientEntity for Pulse {
    type Params = GridParams;

    fn spawn<R: Rng + ?Sized>(rng: &mut R, dims: SurfaceDims, params: &GridParams) -> Self {
        let horizontal = rng.random_bool(0.5);
        let speed = uniform(rng, PULSE_SPEED_MIN, PULSE_SPEED_MAX);
        let opacity = uniform(rng, PULSE_OPACITY_MIN, PULSE_OPACITY_MAX);

        let (lane, speed) = if horizontal {
            let row = rng.random_range(0..params.lanes(dims.height));
            (Lane::Row(row), speed)
        } else {
            let col = rng.random_range(0..params.lanes(dims.width));
            (Lane::Column(col), speed * VERTICAL_SPEED_SCALE)
        };

        Self {
            lane,
            edge: -PULSE_START_OFFSET,
            speed,
            opacity,
        }
    }

    fn advance(&mut self, _dims: SurfaceDims) {
        self.edge += self.speed;
    }

    fn is_expired(&self, dims: SurfaceDims) -> bool {
        self.edge > self.far_edge(dims) + PULSE_CULL_MARGIN
    }
}
