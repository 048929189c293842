//! Twinkling, drifting star

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::entity::{AmbientEntity, SurfaceDims, uniform};
use crate::consts::*;
use crate::wrap_coordinate;

/// Star field tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarParams {
    pub radius: (f32, f32),
    pub alpha: (f32, f32),
    pub drift: f32,
    pub twinkle_speed: (f32, f32),
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            radius: (STAR_RADIUS_MIN, STAR_RADIUS_MAX),
            alpha: (STAR_ALPHA_MIN, STAR_ALPHA_MAX),
            drift: STAR_DRIFT,
            twinkle_speed: (TWINKLE_SPEED_MIN, TWINKLE_SPEED_MAX),
        }
    }
}

/// A star entity
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation
    pub radius: f32,
    /// Fixed at creation
    pub alpha: f32,
    /// Radians, kept in [0, 2π)
    pub twinkle_phase: f32,
    pub twinkle_speed: f32,
}

impl Star {
    /// Brightness after the twinkle modulation
    #[inline]
    pub fn twinkle_alpha(&self) -> f32 {
        twinkle(self.alpha, self.twinkle_phase)
    }
}

/// `base * (0.7 + 0.3 * sin(phase))`
#[inline]
pub fn twinkle(base_alpha: f32, phase: f32) -> f32 {
    base_alpha * (0.7 + 0.3 * phase.sin())
}

impl AmbientEntity for Star {
    type Params = StarParams;

    fn spawn<R: Rng + ?Sized>(rng: &mut R, dims: SurfaceDims, params: &StarParams) -> Self {
        Self {
            pos: Vec2::new(
                uniform(rng, 0.0, dims.width),
                uniform(rng, 0.0, dims.height),
            ),
            radius: uniform(rng, params.radius.0, params.radius.1),
            alpha: uniform(rng, params.alpha.0, params.alpha.1),
            vel: Vec2::new(
                uniform(rng, -params.drift, params.drift),
                uniform(rng, -params.drift, params.drift),
            ),
            twinkle_speed: uniform(rng, params.twinkle_speed.0, params.twinkle_speed.1),
            twinkle_phase: uniform(rng, 0.0, TAU),
        }
    }

    fn advance(&mut self, dims: SurfaceDims) {
        self.pos += self.vel;
        self.pos.x = wrap_coordinate(self.pos.x, dims.width);
        self.pos.y = wrap_coordinate(self.pos.y, dims.height);

        self.twinkle_phase = (self.twinkle_phase + self.twinkle_speed).rem_euclid(TAU);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn star_at(x: f32, y: f32, dx: f32, dy: f32) -> Star {
        Star {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
            radius: 1.0,
            alpha: 0.5,
            twinkle_phase: 0.0,
            twinkle_speed: 0.01,
        }
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let dims = SurfaceDims::new(800.0, 600.0);
        let params = StarParams::default();
        for _ in 0..500 {
            let s = Star::spawn(&mut rng, dims, &params);
            assert!(dims.contains(s.pos.x, s.pos.y));
            assert!((0.3..1.8).contains(&s.radius));
            assert!((0.1..0.6).contains(&s.alpha));
            assert!(s.vel.x.abs() <= 0.075 && s.vel.y.abs() <= 0.075);
            assert!((0.003..0.013).contains(&s.twinkle_speed));
            assert!((0.0..TAU).contains(&s.twinkle_phase));
        }
    }

    #[test]
    fn test_wraps_left_edge_to_right() {
        let dims = SurfaceDims::new(100.0, 100.0);
        let mut s = star_at(0.01, 50.0, -0.05, 0.0);
        s.advance(dims);
        assert!(s.pos.x > 99.0 && s.pos.x < 100.0);
        assert_eq!(s.pos.y, 50.0);
    }

    #[test]
    fn test_wraps_bottom_edge_to_top() {
        let dims = SurfaceDims::new(100.0, 100.0);
        let mut s = star_at(50.0, 99.99, 0.0, 0.05);
        s.advance(dims);
        assert_eq!(s.pos.y, 0.0);
    }

    #[test]
    fn test_radius_and_alpha_fixed() {
        let dims = SurfaceDims::new(100.0, 100.0);
        let mut s = star_at(10.0, 10.0, 0.05, 0.05);
        for _ in 0..1000 {
            s.advance(dims);
        }
        assert_eq!(s.radius, 1.0);
        assert_eq!(s.alpha, 0.5);
    }

    #[test]
    fn test_twinkle_bounds() {
        // sin spans [-1, 1] so brightness spans [0.4, 1.0] of base
        assert!((twinkle(0.5, -std::f32::consts::FRAC_PI_2) - 0.2).abs() < 1e-6);
        assert!((twinkle(0.5, std::f32::consts::FRAC_PI_2) - 0.5).abs() < 1e-6);
        assert!((twinkle(0.5, 0.0) - 0.35).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_stars_stay_on_surface(
            seed in any::<u64>(),
            width in 1.0f32..3000.0,
            height in 1.0f32..2000.0,
            frames in 0usize..1500,
        ) {
            let dims = SurfaceDims::new(width, height);
            let mut rng = Pcg32::seed_from_u64(seed);
            let params = StarParams::default();
            let mut stars: Vec<Star> = (0..8).map(|_| Star::spawn(&mut rng, dims, &params)).collect();
            for _ in 0..frames {
                for s in &mut stars {
                    s.advance(dims);
                }
            }
            for s in &stars {
                prop_assert!(s.pos.x >= 0.0 && s.pos.x < width);
                prop_assert!(s.pos.y >= 0.0 && s.pos.y < height);
            }
        }

        #[test]
        fn prop_twinkle_is_periodic(base in 0.1f32..0.6, phase in 0.0f32..TAU) {
            let a = twinkle(base, phase);
            let b = twinkle(base, phase + TAU);
            prop_assert!((a - b).abs() < 1e-5);
        }
    }
}
