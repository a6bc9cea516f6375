//! Game state and core simulation types
//!
//! Everything one play-through mutates lives in [`GameState`], owned by the
//! session controller and threaded through `tick` and the renderer.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Aabb;
use crate::tuning::Tuning;

/// What a falling item is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Costs a life when caught
    Bug,
    /// Worth points when caught
    Coffee,
}

/// A falling item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick
    pub speed: f32,
}

impl Item {
    pub fn new(kind: ItemKind, pos: Vec2, size: f32, speed: f32) -> Self {
        Self {
            kind,
            pos,
            size: Vec2::splat(size),
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// The catcher at the bottom of the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    /// Centered horizontally, a fixed margin above the bottom edge
    pub fn spawn(arena: Arena, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                arena.width / 2.0 - tuning.player_size / 2.0,
                arena.height - tuning.player_bottom_margin,
            ),
            size: Vec2::splat(tuning.player_size),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Visible play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Score, lives and the difficulty ramp for one play-through
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub score: u64,
    pub lives: u32,
    /// Latched once lives hit zero; cleared only by a reset
    pub is_over: bool,
    /// Base fall speed for new items
    pub game_speed: f32,
    /// Milliseconds between spawns
    pub spawn_interval: f64,
    /// Milliseconds until the next spawn
    pub spawn_timer: f64,
}

impl Session {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            lives: tuning.start_lives,
            is_over: false,
            game_speed: tuning.start_game_speed,
            spawn_interval: tuning.start_spawn_interval_ms,
            spawn_timer: tuning.start_spawn_interval_ms,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub arena: Arena,
    pub session: Session,
    pub player: Player,
    pub items: Vec<Item>,
}

impl GameState {
    /// Create a fresh game state with the given seed
    pub fn new(seed: u64, arena: Arena, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            session: Session::new(&tuning),
            player: Player::spawn(arena, &tuning),
            items: Vec::new(),
            tuning,
        }
    }

    /// Back to a fresh session under a new seed, keeping arena and tuning
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.session = Session::new(&self.tuning);
        self.player = Player::spawn(self.arena, &self.tuning);
        self.items.clear();
    }
}
