//! Entity strategy shared by every ambient variant

use std::fmt;

use rand::Rng;

/// Pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceDims {
    pub width: f32,
    pub height: f32,
}

impl SurfaceDims {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if the point lies in `[0, width) x [0, height)`
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

/// One kind of animated entity.
///
/// The engine owns the store and the scheduling; a variant only says how a
/// single entity is born, moves, and dies.
pub trait AmbientEntity: Sized {
    /// Per-variant tuning handed to `spawn` and the painter
    type Params: Clone + fmt::Debug;

    /// Materialize a new entity for the current surface
    fn spawn<R: Rng + ?Sized>(rng: &mut R, dims: SurfaceDims, params: &Self::Params) -> Self;

    /// Advance one frame
    fn advance(&mut self, dims: SurfaceDims);

    /// Whether the entity should be dropped from the store
    fn is_expired(&self, _dims: SurfaceDims) -> bool {
        false
    }
}

/// How a store is populated and replenished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPolicy {
    /// Entities created on start (and on regeneration)
    pub initial: usize,
    /// Spawn one entity every N frames
    pub cadence: Option<u32>,
    /// Throw the store away and repopulate when the surface resizes
    pub regenerate_on_resize: bool,
}

impl SpawnPolicy {
    /// Fixed population, rebuilt on resize, never replenished
    pub const fn fixed(count: usize) -> Self {
        Self {
            initial: count,
            cadence: None,
            regenerate_on_resize: true,
        }
    }

    /// Small seed population topped up on a frame cadence
    pub const fn streaming(seed: usize, every_frames: u32) -> Self {
        Self {
            initial: seed,
            cadence: Some(every_frames),
            regenerate_on_resize: false,
        }
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` when the range is empty
#[inline]
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_contains_half_open() {
        let dims = SurfaceDims::new(100.0, 50.0);
        assert!(dims.contains(0.0, 0.0));
        assert!(dims.contains(99.9, 49.9));
        assert!(!dims.contains(100.0, 10.0));
        assert!(!dims.contains(10.0, 50.0));
        assert!(!dims.contains(-0.1, 10.0));
    }

    #[test]
    fn test_uniform_empty_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(uniform(&mut rng, 0.0, 0.0), 0.0);
        assert_eq!(uniform(&mut rng, 5.0, 2.0), 5.0);
        let v = uniform(&mut rng, 1.0, 2.0);
        assert!((1.0..2.0).contains(&v));
    }
}
