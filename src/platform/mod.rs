//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Task scheduling (requestAnimationFrame, setTimeout)
//! - Element lookup and mounting
//! - RNG seeding

pub mod task;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use task::TaskHandle;
