//! Item spawning and the difficulty ramp

use glam::Vec2;
use rand::Rng;

use super::state::{Item, ItemKind, Session};
use crate::tuning::Tuning;

/// Roll a new item just above the top edge.
///
/// Returns `None` when the arena is too narrow to fit the rolled item.
pub fn try_spawn<R: Rng + ?Sized>(
    session: &Session,
    area_width: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<Item> {
    let kind = roll_kind(tuning.bug_chance, rng);
    let size = tuning.item_size(kind);
    let max_x = area_width - size;
    if !(max_x >= 0.0) {
        return None;
    }

    let x = rng.random::<f32>() * max_x;
    let speed = session.game_speed + rng.random::<f32>() * tuning.speed_jitter;

    Some(Item::new(kind, Vec2::new(x, -size), size, speed))
}

fn roll_kind<R: Rng + ?Sized>(bug_chance: f32, rng: &mut R) -> ItemKind {
    if rng.random::<f32>() < bug_chance {
        ItemKind::Bug
    } else {
        ItemKind::Coffee
    }
}

/// Speed up after a spawn: faster items, shorter interval (never below the floor),
/// timer re-armed with the interval that just elapsed.
pub fn apply_ramp(session: &mut Session, tuning: &Tuning) {
    session.spawn_timer = session.spawn_interval;

    session.game_speed += tuning.game_speed_ramp;
    if let Some(cap) = tuning.max_game_speed {
        session.game_speed = session.game_speed.min(cap);
    }

    session.spawn_interval = (session.spawn_interval * tuning.spawn_interval_decay)
        .max(tuning.min_spawn_interval_ms);
}
