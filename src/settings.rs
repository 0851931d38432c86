//! Game settings and preferences
//!
//! Read from LocalStorage on the web. Only settings are stored; game state never is.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Key bindings for the human paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    /// Key identifiers (as reported by `KeyboardEvent.key`) that move the paddle up
    pub up: Vec<String>,
    /// Key identifiers that move the paddle down
    pub down: Vec<String>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            up: vec!["ArrowUp".to_string()],
            down: vec!["ArrowDown".to_string()],
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay balance
    pub tuning: Tuning,
    /// Keyboard bindings
    pub controls: Controls,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Silence all cues
    pub muted: bool,
    /// Also play the "ball left" cue when the bot concedes a point
    pub cue_on_both_exits: bool,

    // === Visuals ===
    /// Opacity of the black wash laid over the previous frame (1.0 = no trail)
    pub trail_alpha: f32,
    /// Stroke the ball outline in addition to filling it
    pub ball_outline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            controls: Controls::default(),

            master_volume: 0.8,
            muted: false,
            cue_on_both_exits: false,

            trail_alpha: 0.2,
            ball_outline: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "trail_pong_settings";

    /// Parse a settings document; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
            }
        }
    }

    /// Clamp out-of-range values
    pub fn sanitized(mut self) -> Self {
        self.tuning = self.tuning.sanitized();
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.trail_alpha = self.trail_alpha.clamp(0.0, 1.0);
        self
    }

    /// Volume actually applied to cues
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
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
