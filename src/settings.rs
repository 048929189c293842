//! Page settings
//!
//! Defaults match the live site. A page can override any subset through a
//! JSON `<script type="application/json" id="ambient-settings">` block.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::effect::EffectKind;
use crate::error::{AmbientError, Result};
use crate::sim::TypingDelays;

/// Grid variant tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Distance between grid lines (pixels)
    pub spacing: f32,
    /// Grid line opacity
    pub line_alpha: f32,
    /// Pulses alive at start
    pub seed_pulses: usize,
    /// Frames between spawns
    pub spawn_every: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            spacing: GRID_SPACING,
            line_alpha: GRID_LINE_ALPHA,
            seed_pulses: GRID_SEED_PULSES,
            spawn_every: PULSE_SPAWN_EVERY,
        }
    }
}

/// Typing effect content and pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingSettings {
    /// Strings cycled by the typing effect, in order
    pub roles: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_after_type_ms: u32,
    pub pause_after_delete_ms: u32,
}

impl Default for TypingSettings {
    fn default() -> Self {
        Self {
            roles: vec![
                "Software Engineer".to_string(),
                "Data Scientist".to_string(),
                "AI Engineer".to_string(),
            ],
            type_ms: TYPE_DELAY_MS,
            delete_ms: DELETE_DELAY_MS,
            pause_after_type_ms: PAUSE_AFTER_TYPE_MS,
            pause_after_delete_ms: PAUSE_AFTER_DELETE_MS,
        }
    }
}

impl TypingSettings {
    pub fn delays(&self) -> TypingDelays {
        TypingDelays::from_millis(
            self.type_ms,
            self.delete_ms,
            self.pause_after_type_ms,
            self.pause_after_delete_ms,
        )
    }
}

/// Ids of the elements the effects bind to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub canvas: String,
    pub typed_text: String,
    pub greeting: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            canvas: "stars-canvas".to_string(),
            typed_text: "typed-role".to_string(),
            greeting: "greeting-text".to_string(),
        }
    }
}

/// All page settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which background to run
    pub effect: EffectKind,
    /// Stars in the star field
    pub star_count: usize,
    pub grid: GridSettings,
    pub typing: TypingSettings,
    pub elements: ElementIds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            effect: EffectKind::Starfield,
            star_count: STAR_COUNT,
            grid: GridSettings::default(),
            typing: TypingSettings::default(),
            elements: ElementIds::default(),
        }
    }
}

impl Settings {
    /// Id of the optional JSON settings block
    pub const ELEMENT_ID: &'static str = "ambient-settings";

    /// Parse settings, filling anything missing with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the effects cannot draw in bounded time and memory
    pub fn validate(&self) -> Result<()> {
        let spacing = self.grid.spacing;
        if !spacing.is_finite() || spacing < MIN_GRID_SPACING {
            return Err(out_of_range("grid.spacing", spacing));
        }
        if !self.grid.line_alpha.is_finite() {
            return Err(out_of_range("grid.line_alpha", self.grid.line_alpha));
        }
        if self.star_count > MAX_STAR_COUNT {
            return Err(out_of_range("star_count", self.star_count));
        }
        if self.grid.seed_pulses > MAX_SEED_PULSES {
            return Err(out_of_range("grid.seed_pulses", self.grid.seed_pulses));
        }
        Ok(())
    }

    /// Load settings from the page's JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring #{}: {}", Self::ELEMENT_ID, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

fn out_of_range(field: &'static str, value: impl std::fmt::Display) -> AmbientError {
    AmbientError::OutOfRange {
        field,
        value: value.to_string(),
    }
}
