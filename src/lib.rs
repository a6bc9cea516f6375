//! Coffee Rush - catch the coffee, dodge the bugs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, ramp, falling items, collisions)
//! - `session`: Game lifecycle (idle, running, game over) around the simulation
//! - `renderer`: Canvas 2D projection of the game state
//! - `platform`: Frame clock and pointer input mapping
//! - `audio`: Sound cues for simulation events
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation, asset and audio configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::{Game, GamePhase};
pub use settings::{Config, ConfigError, Settings};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Arena dimensions used when no canvas size is known
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player sprite box
    pub const PLAYER_SIZE: f32 = 64.0;
    /// Distance from the arena bottom to the player's top edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 80.0;

    pub const START_LIVES: u32 = 3;
    pub const COFFEE_POINTS: u64 = 10;

    /// Base fall speed (pixels per tick)
    pub const START_GAME_SPEED: f32 = 2.0;
    /// Added to the base fall speed on every spawn
    pub const GAME_SPEED_RAMP: f32 = 0.05;
    /// Upper bound of the uniform speed bonus rolled per item
    pub const SPEED_JITTER: f32 = 2.0;

    /// Spawn interval (ms)
    pub const START_SPAWN_INTERVAL_MS: f64 = 1000.0;
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 300.0;
    pub const SPAWN_INTERVAL_DECAY: f64 = 0.995;

    pub const BUG_CHANCE: f32 = 0.3;
    pub const BUG_SIZE: f32 = 40.0;
    pub const COFFEE_SIZE: f32 = 48.0;
}
