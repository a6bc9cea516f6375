//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed spawn -> fall -> collide order within a tick
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use spawn::{apply_ramp, try_spawn};
pub use state::{Arena, GameState, Item, ItemKind, Player, Session};
pub use tick::{GameEvent, tick};
