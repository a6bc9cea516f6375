//! Game balance knobs
//!
//! Every gameplay number lives here so a page can override it from an inline
//! JSON config without rebuilding the wasm module.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::ConfigError;
use crate::sim::ItemKind;

/// Gameplay tuning (spawning, ramp, sizes, scoring)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fallback arena size when the canvas reports none
    pub arena_width: f32,
    pub arena_height: f32,

    pub player_size: f32,
    pub player_bottom_margin: f32,

    pub start_lives: u32,
    pub coffee_points: u64,

    pub start_game_speed: f32,
    pub game_speed_ramp: f32,
    pub speed_jitter: f32,
    /// Cap on the base fall speed. `None` keeps the ramp unbounded.
    pub max_game_speed: Option<f32>,

    pub start_spawn_interval_ms: f64,
    pub min_spawn_interval_ms: f64,
    pub spawn_interval_decay: f64,

    /// Probability that a spawned item is a bug
    pub bug_chance: f32,
    pub bug_size: f32,
    pub coffee_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_size: PLAYER_SIZE,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            start_lives: START_LIVES,
            coffee_points: COFFEE_POINTS,
            start_game_speed: START_GAME_SPEED,
            game_speed_ramp: GAME_SPEED_RAMP,
            speed_jitter: SPEED_JITTER,
            max_game_speed: None,
            start_spawn_interval_ms: START_SPAWN_INTERVAL_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            spawn_interval_decay: SPAWN_INTERVAL_DECAY,
            bug_chance: BUG_CHANCE,
            bug_size: BUG_SIZE,
            coffee_size: COFFEE_SIZE,
        }
    }
}

impl Tuning {
    /// Square sprite size for an item kind
    pub fn item_size(&self, kind: ItemKind) -> f32 {
        match kind {
            ItemKind::Bug => self.bug_size,
            ItemKind::Coffee => self.coffee_size,
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_size", self.player_size),
            ("bug_size", self.bug_size),
            ("coffee_size", self.coffee_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, "must be a positive number"));
            }
        }

        if !(0.0..=1.0).contains(&self.bug_chance) {
            return Err(ConfigError::invalid("bug_chance", "must be within [0, 1]"));
        }
        if self.start_game_speed < 0.0 || self.speed_jitter < 0.0 || self.game_speed_ramp < 0.0 {
            return Err(ConfigError::invalid(
                "start_game_speed",
                "speeds, jitter and ramp must not be negative",
            ));
        }
        if let Some(cap) = self.max_game_speed {
            if cap < self.start_game_speed {
                return Err(ConfigError::invalid(
                    "max_game_speed",
                    "must not be below start_game_speed",
                ));
            }
        }
        if !(self.min_spawn_interval_ms > 0.0) {
            return Err(ConfigError::invalid("min_spawn_interval_ms", "must be positive"));
        }
        if self.start_spawn_interval_ms < self.min_spawn_interval_ms {
            return Err(ConfigError::invalid(
                "start_spawn_interval_ms",
                "must not be below min_spawn_interval_ms",
            ));
        }
        if !(self.spawn_interval_decay > 0.0 && self.spawn_interval_decay <= 1.0) {
            return Err(ConfigError::invalid("spawn_interval_decay", "must be within (0, 1]"));
        }
        if self.start_lives == 0 {
            return Err(ConfigError::invalid("start_lives", "must be at least 1"));
        }
        Ok(())
    }
}
