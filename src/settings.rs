//! Presentation settings and the page config document
//!
//! A page may embed `<script id="game-config" type="application/json">` with a
//! [`Config`] document; missing fields fall back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::Tuning;

/// Errors raised while reading a config document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

/// Image paths by logical role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub player: String,
    pub bug: String,
    pub coffee: String,
    pub background: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: "player.png".into(),
            bug: "bug.png".into(),
            coffee: "coffee.png".into(),
            background: "background.png".into(),
        }
    }
}

/// Sound clip paths by cue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundPaths {
    pub collect: String,
    pub hit: String,
    pub game_over: String,
}

impl Default for SoundPaths {
    fn default() -> Self {
        Self {
            collect: "collect.mp3".into(),
            hit: "hit.mp3".into(),
            game_over: "gameover.mp3".into(),
        }
    }
}

/// HUD text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudStyle {
    pub font: String,
    pub color: String,
    pub score_label: String,
    pub lives_label: String,
    /// Inset from the arena's left/right edges
    pub margin: f32,
    /// Text baseline
    pub baseline_y: f32,
}

impl Default for HudStyle {
    fn default() -> Self {
        Self {
            font: "24px \"Courier New\", Courier, monospace".into(),
            color: "white".into(),
            score_label: "Puntuación".into(),
            lives_label: "Vidas".into(),
            margin: 10.0,
            baseline_y: 30.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hud: HudStyle,
    pub assets: AssetPaths,
    pub sounds: SoundPaths,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hud: HudStyle::default(),
            assets: AssetPaths::default(),
            sounds: SoundPaths::default(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Volume applied to sound cues, 0 when muted
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }
}

/// Full page configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tuning: Tuning,
    pub settings: Settings,
}

impl Config {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.tuning.validate()?;
        Ok(config)
    }

    /// Parse a config, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => {
                log::info!("Loaded game config");
                config
            }
            Err(e) => {
                log::warn!("Ignoring game config: {}", e);
                Self::default()
            }
        }
    }
}
