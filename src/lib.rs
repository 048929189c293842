//! Portfolio Ambient - background effects for a single-page portfolio
//!
//! Core modules:
//! - `sim`: Deterministic simulation (stars, pulses, spawn cadence, typing machine)
//! - `renderer`: Drawing surface abstraction and per-frame painting
//! - `effect`: Config-selected ambient effect (star field or pulsing grid)
//! - `platform`: Task handles and browser bindings
//! - `settings`: Page-level configuration

pub mod effect;
pub mod error;
pub mod greeting;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use effect::{Effect, EffectKind};
pub use error::AmbientError;
pub use settings::Settings;

/// Effect configuration constants
pub mod consts {
    /// Stars in the star field
    pub const STAR_COUNT: usize = 50;
    /// Largest star count a page may ask for
    pub const MAX_STAR_COUNT: usize = 2_000;
    /// Star radius range
    pub const STAR_RADIUS_MIN: f32 = 0.3;
    pub const STAR_RADIUS_MAX: f32 = 1.8;
    /// Star base alpha range
    pub const STAR_ALPHA_MIN: f32 = 0.1;
    pub const STAR_ALPHA_MAX: f32 = 0.6;
    /// Maximum drift per frame along each axis
    pub const STAR_DRIFT: f32 = 0.075;
    /// Twinkle phase advance per frame
    pub const TWINKLE_SPEED_MIN: f32 = 0.003;
    pub const TWINKLE_SPEED_MAX: f32 = 0.013;

    /// Grid line spacing (pixels)
    pub const GRID_SPACING: f32 = 60.0;
    /// Smallest grid spacing a page may ask for
    pub const MIN_GRID_SPACING: f32 = 1.0;
    /// Static grid line opacity
    pub const GRID_LINE_ALPHA: f32 = 0.04;
    /// Pulses alive when the grid starts
    pub const GRID_SEED_PULSES: usize = 3;
    /// Largest seed pulse count a page may ask for
    pub const MAX_SEED_PULSES: usize = 200;
    /// Frames between pulse spawns (~1.5s at 60 Hz)
    pub const PULSE_SPAWN_EVERY: u32 = 90;
    /// Pulses start this far before the near edge
    pub const PULSE_START_OFFSET: f32 = 100.0;
    /// Pulses are culled this far past the far edge
    pub const PULSE_CULL_MARGIN: f32 = 300.0;
    /// Visible length of a pulse segment
    pub const PULSE_LENGTH: f32 = 100.0;
    /// Pulse speed range (pixels per frame, horizontal lanes)
    pub const PULSE_SPEED_MIN: f32 = 1.0;
    pub const PULSE_SPEED_MAX: f32 = 2.5;
    /// Vertical lanes travel a little slower
    pub const VERTICAL_SPEED_SCALE: f32 = 0.8;
    /// Pulse opacity range
    pub const PULSE_OPACITY_MIN: f32 = 0.12;
    pub const PULSE_OPACITY_MAX: f32 = 0.20;

    /// Typing effect delays (milliseconds)
    pub const TYPE_DELAY_MS: u32 = 80;
    pub const DELETE_DELAY_MS: u32 = 40;
    pub const PAUSE_AFTER_TYPE_MS: u32 = 1800;
    pub const PAUSE_AFTER_DELETE_MS: u32 = 400;
}

/// Wrap a coordinate into `[0, max)`.
///
/// Out-of-range values are reset to the opposite bound, not reflected and not
/// carried over. A degenerate (zero or negative) extent pins to 0.
#[inline]
pub fn wrap_coordinate(value: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    if value < 0.0 {
        // Largest float strictly below `max`
        max * (1.0 - f32::EPSILON)
    } else if value >= max {
        0.0
    } else {
        value
    }
}
