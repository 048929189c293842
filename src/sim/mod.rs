//! Deterministic simulation module
//!
//! All animation state lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Frame-counted cadence, never wall-clock time
//! - Stable store order (insertion order)
//! - No rendering or platform dependencies

pub mod engine;
pub mod entity;
pub mod pulse;
pub mod star;
pub mod typing;

pub use engine::{AmbientEngine, FrameOutcome};
pub use entity::{AmbientEntity, SpawnPolicy, SurfaceDims};
pub use pulse::{GridParams, Lane, Pulse};
pub use star::{Star, StarParams, twinkle};
pub use typing::{TypingDelays, TypingDriver, TypingMachine, TypingPhase, TypingStep};
