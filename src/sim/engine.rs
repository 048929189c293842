//! Ambient effect engine
//!
//! Owns the entity store for one variant, the seeded RNG that feeds its
//! spawner, and the frame counter that drives the spawn cadence.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{AmbientEntity, SpawnPolicy, SurfaceDims};

/// What happened to the store at the end of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Entities removed by the cull
    pub culled: usize,
    /// Whether the cadence spawned an entity
    pub spawned: bool,
}

/// Store, spawner and cadence for one entity variant
#[derive(Debug, Clone)]
pub struct AmbientEngine<E: AmbientEntity> {
    entities: Vec<E>,
    params: E::Params,
    policy: SpawnPolicy,
    dims: SurfaceDims,
    rng: Pcg32,
    /// Frames completed since start (survives resize)
    frame: u64,
}

impl<E: AmbientEntity> AmbientEngine<E> {
    /// Create an engine and populate its initial store
    pub fn new(params: E::Params, policy: SpawnPolicy, dims: SurfaceDims, seed: u64) -> Self {
        let mut engine = Self {
            entities: Vec::new(),
            params,
            policy,
            dims,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
        };
        engine.populate();
        engine
    }

    /// Discard the store and fill it with `policy.initial` fresh entities
    pub fn populate(&mut self) {
        self.entities.clear();
        for _ in 0..self.policy.initial {
            self.spawn_one();
        }
    }

    /// Materialize one entity at the end of the store
    pub fn spawn_one(&mut self) {
        let entity = E::spawn(&mut self.rng, self.dims, &self.params);
        self.entities.push(entity);
    }

    /// Adopt new surface dimensions.
    ///
    /// Fixed-population variants are regenerated against the new surface.
    /// Streaming variants keep their entities, including lanes computed
    /// against the old size.
    pub fn resize(&mut self, dims: SurfaceDims) {
        self.dims = dims;
        if self.policy.regenerate_on_resize {
            self.populate();
        }
    }

    /// Advance every entity one frame, in store order, handing each to
    /// `visit` right after it moves
    pub fn advance<F>(&mut self, mut visit: F)
    where
        F: FnMut(&E, &E::Params),
    {
        let dims = self.dims;
        for entity in &mut self.entities {
            entity.advance(dims);
            visit(entity, &self.params);
        }
    }

    /// Drop expired entities
    pub fn cull(&mut self) -> usize {
        let dims = self.dims;
        let before = self.entities.len();
        self.entities.retain(|e| !e.is_expired(dims));
        before - self.entities.len()
    }

    /// Close out a frame: cull, bump the frame counter, run the cadence
    pub fn finish_frame(&mut self) -> FrameOutcome {
        let culled = self.cull();
        self.frame += 1;

        let spawned = match self.policy.cadence {
            Some(every) if every > 0 && self.frame % every as u64 == 0 => {
                self.spawn_one();
                true
            }
            _ => false,
        };

        FrameOutcome { culled, spawned }
    }

    /// One full frame without drawing
    pub fn step(&mut self) -> FrameOutcome {
        self.advance(|_, _| {});
        self.finish_frame()
    }

    pub fn entities(&self) -> &[E] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn params(&self) -> &E::Params {
        &self.params
    }

    pub fn policy(&self) -> SpawnPolicy {
        self.policy
    }

    pub fn dims(&self) -> SurfaceDims {
        self.dims
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
