//! Per-variant painting and the frame sequence

use glam::Vec2;

use super::Surface;
use super::color::{GRID_COLOR, STAR_COLOR};
use crate::consts::PULSE_LENGTH;
use crate::sim::{AmbientEngine, AmbientEntity, FrameOutcome, GridParams, Lane, Pulse, Star, SurfaceDims};

/// Pulse stroke width (pixels)
const PULSE_WIDTH: f32 = 1.5;
/// Grid line stroke width (pixels)
const GRID_LINE_WIDTH: f32 = 1.0;

/// How an entity variant shows up on a surface
pub trait Paint: AmbientEntity {
    /// Draw one entity
    fn paint<S: Surface + ?Sized>(&self, params: &Self::Params, surface: &mut S);

    /// Static layer drawn under the entities every frame
    fn paint_backdrop<S: Surface + ?Sized>(
        _params: &Self::Params,
        _dims: SurfaceDims,
        _surface: &mut S,
    ) {
    }
}

impl Paint for Star {
    fn paint<S: Surface + ?Sized>(&self, _params: &Self::Params, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, STAR_COLOR.with_alpha(self.twinkle_alpha()));
    }
}

impl Paint for Pulse {
    fn paint<S: Surface + ?Sized>(&self, params: &GridParams, surface: &mut S) {
        let half = PULSE_LENGTH / 2.0;
        let (from, to) = match self.lane {
            Lane::Row(row) => {
                let y = params.lane_offset(row);
                (Vec2::new(self.edge - half, y), Vec2::new(self.edge + half, y))
            }
            Lane::Column(col) => {
                let x = params.lane_offset(col);
                (Vec2::new(x, self.edge - half), Vec2::new(x, self.edge + half))
            }
        };
        surface.stroke_pulse(from, to, PULSE_WIDTH, GRID_COLOR.with_alpha(self.opacity));
    }

    fn paint_backdrop<S: Surface + ?Sized>(params: &GridParams, dims: SurfaceDims, surface: &mut S) {
        let color = GRID_COLOR.with_alpha(params.line_alpha);

        for col in 0..params.lanes(dims.width) {
            let x = params.lane_offset(col);
            surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, dims.height), GRID_LINE_WIDTH, color);
        }
        for row in 0..params.lanes(dims.height) {
            let y = params.lane_offset(row);
            surface.stroke_line(Vec2::new(0.0, y), Vec2::new(dims.width, y), GRID_LINE_WIDTH, color);
        }
    }
}

/// Render one frame: clear, backdrop, advance and draw every entity, then
/// cull and run the spawn cadence
pub fn render_frame<E, S>(engine: &mut AmbientEngine<E>, surface: &mut S) -> FrameOutcome
where
    E: Paint,
    S: Surface + ?Sized,
{
    surface.clear();
    E::paint_backdrop(engine.params(), engine.dims(), surface);
    engine.advance(|entity, params| entity.paint(params, surface));
    engine.finish_frame()
}
