//! Ambient effect selected by configuration

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SEED_PULSES, MAX_STAR_COUNT};
use crate::renderer::{Surface, render_frame};
use crate::settings::Settings;
use crate::sim::{
    AmbientEngine, FrameOutcome, GridParams, Pulse, SpawnPolicy, Star, StarParams, SurfaceDims,
};

/// Which background a page variant shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Twinkling, drifting stars
    #[default]
    Starfield,
    /// Static grid with light pulses running along its lanes
    Grid,
}

impl EffectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Starfield => "starfield",
            EffectKind::Grid => "grid",
        }
    }
}

/// One running ambient effect
#[derive(Debug, Clone)]
pub enum Effect {
    Starfield(AmbientEngine<Star>),
    Grid(AmbientEngine<Pulse>),
}

impl Effect {
    /// Build the effect the settings ask for, sized to `dims`. Counts are
    /// capped even when `settings` skipped `Settings::validate`.
    pub fn from_settings(settings: &Settings, dims: SurfaceDims, seed: u64) -> Self {
        match settings.effect {
            EffectKind::Starfield => Effect::Starfield(AmbientEngine::new(
                StarParams::default(),
                SpawnPolicy::fixed(settings.star_count.min(MAX_STAR_COUNT)),
                dims,
                seed,
            )),
            EffectKind::Grid => Effect::Grid(AmbientEngine::new(
                GridParams {
                    spacing: settings.grid.spacing,
                    line_alpha: settings.grid.line_alpha,
                },
                SpawnPolicy::streaming(
                    settings.grid.seed_pulses.min(MAX_SEED_PULSES),
                    settings.grid.spawn_every,
                ),
                dims,
                seed,
            )),
        }
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Starfield(_) => EffectKind::Starfield,
            Effect::Grid(_) => EffectKind::Grid,
        }
    }

    /// Adopt new surface dimensions (regenerates the star field)
    pub fn resize(&mut self, dims: SurfaceDims) {
        match self {
            Effect::Starfield(engine) => engine.resize(dims),
            Effect::Grid(engine) => engine.resize(dims),
        }
        log::debug!("{} resized to {}x{}", self.kind().as_str(), dims.width, dims.height);
    }

    /// Draw one frame onto `surface`
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameOutcome {
        match self {
            Effect::Starfield(engine) => render_frame(engine, surface),
            Effect::Grid(engine) => render_frame(engine, surface),
        }
    }

    /// Entities currently alive
    pub fn len(&self) -> usize {
        match self {
            Effect::Starfield(engine) => engine.len(),
            Effect::Grid(engine) => engine.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn frame(&self) -> u64 {
        match self {
            Effect::Starfield(engine) => engine.frame(),
            Effect::Grid(engine) => engine.frame(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::RecordingSurface;

    const DIMS: SurfaceDims = SurfaceDims::new(800.0, 600.0);

    #[test]
    fn test_selected_by_settings() {
        let mut settings = Settings::default();
        let effect = Effect::from_settings(&settings, DIMS, 1);
        assert_eq!(effect.kind(), EffectKind::Starfield);
        assert_eq!(effect.len(), STAR_COUNT);

        settings.effect = EffectKind::Grid;
        let effect = Effect::from_settings(&settings, DIMS, 1);
        assert_eq!(effect.kind(), EffectKind::Grid);
        assert_eq!(effect.len(), GRID_SEED_PULSES);
    }

    #[test]
    fn test_unvalidated_counts_are_capped() {
        let mut settings = Settings {
            star_count: usize::MAX,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
        assert_eq!(Effect::from_settings(&settings, DIMS, 1).len(), MAX_STAR_COUNT);

        settings.effect = EffectKind::Grid;
        settings.grid.seed_pulses = usize::MAX;
        assert_eq!(Effect::from_settings(&settings, DIMS, 1).len(), MAX_SEED_PULSES);
    }

    #[test]
    fn test_starfield_resize_mid_animation() {
        let settings = Settings::default();
        let mut effect = Effect::from_settings(&settings, DIMS, 3);
        let mut surface = RecordingSurface::new(DIMS);
        for _ in 0..100 {
            effect.render_frame(&mut surface);
        }

        let dims = surface.resize(SurfaceDims::new(400.0, 300.0));
        effect.resize(dims);

        let Effect::Starfield(engine) = &effect else {
            panic!("expected starfield");
        };
        assert_eq!(engine.len(), settings.star_count);
        assert!(engine.entities().iter().all(|s| dims.contains(s.pos.x, s.pos.y)));
        // The frame counter is not reset by a resize
        assert_eq!(effect.frame(), 100);
    }

    #[test]
    fn test_grid_keeps_spawning() {
        let settings = Settings {
            effect: EffectKind::Grid,
            ..Settings::default()
        };
        let mut effect = Effect::from_settings(&settings, DIMS, 5);
        let mut surface = RecordingSurface::new(DIMS);
        let spawns = (0..900)
            .filter(|_| effect.render_frame(&mut surface).spawned)
            .count();
        assert_eq!(spawns, 10);
        assert!(!effect.is_empty());
    }
}
