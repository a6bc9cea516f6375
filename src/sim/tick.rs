//! Per-frame simulation step
//!
//! Order within a tick is fixed: spawn decision, fall, collision/removal.
//! Side effects (sounds, overlays) are not performed here; they are reported
//! as [`GameEvent`]s for the caller to dispatch.

use super::spawn::{apply_ramp, try_spawn};
use super::state::{GameState, ItemKind};

/// Something the outside world may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An item entered at the top edge
    Spawned(ItemKind),
    /// Coffee caught; carries the new score
    Collected { score: u64 },
    /// Bug caught; carries the remaining lives
    Hit { lives: u32 },
    /// Lives ran out
    GameOver { final_score: u64 },
}

/// Advance the game state by one frame.
///
/// `delta_ms` only drives the spawn timer. Items fall by their speed once per
/// call regardless of elapsed time. Events are appended to `events`.
pub fn tick(state: &mut GameState, delta_ms: f64, events: &mut Vec<GameEvent>) {
    if state.session.is_over {
        return;
    }

    // Spawn
    state.session.spawn_timer -= delta_ms;
    if state.session.spawn_timer <= 0.0 {
        if let Some(item) = try_spawn(
            &state.session,
            state.arena.width,
            &state.tuning,
            &mut state.rng,
        ) {
            log::debug!(
                "Spawned {:?} at x={:.1} speed={:.2}",
                item.kind,
                item.pos.x,
                item.speed
            );
            events.push(GameEvent::Spawned(item.kind));
            state.items.push(item);
        }
        apply_ramp(&mut state.session, &state.tuning);
    }

    // Fall
    for item in &mut state.items {
        item.pos.y += item.speed;
    }

    // Collide / cull
    let player = state.player.bounds();
    let floor = state.arena.height;
    let coffee_points = state.tuning.coffee_points;
    let session = &mut state.session;

    state.items.retain(|item| {
        if player.overlaps(&item.bounds()) {
            match item.kind {
                ItemKind::Coffee => {
                    session.score += coffee_points;
                    events.push(GameEvent::Collected {
                        score: session.score,
                    });
                }
                // A bug after the last life is gone only gets removed
                ItemKind::Bug if session.lives == 0 => {}
                ItemKind::Bug => {
                    session.lives -= 1;
                    events.push(GameEvent::Hit {
                        lives: session.lives,
                    });
                    if session.lives == 0 {
                        session.is_over = true;
                        events.push(GameEvent::GameOver {
                            final_score: session.score,
                        });
                    }
                }
            }
            return false;
        }

        item.pos.y <= floor
    });

    if state.session.is_over {
        log::info!("Game over with score {}", state.session.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Arena, Item};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    /// 400x600 arena, player at (168, 520) 64x64
    fn scenario_state() -> GameState {
        GameState::new(12345, Arena::new(400.0, 600.0), Tuning::default())
    }

    fn coffee_at(x: f32, y: f32, speed: f32) -> Item {
        Item::new(ItemKind::Coffee, Vec2::new(x, y), 48.0, speed)
    }

    fn bug_at(x: f32, y: f32, speed: f32) -> Item {
        Item::new(ItemKind::Bug, Vec2::new(x, y), 40.0, speed)
    }

    #[test]
    fn test_coffee_catch_scenario() {
        let mut state = scenario_state();
        assert_eq!(state.player.pos, Vec2::new(168.0, 520.0));
        state.items.push(coffee_at(168.0, -48.0, 568.0));

        let mut events = Vec::new();
        tick(&mut state, 0.0, &mut events);

        assert_eq!(state.session.score, 10);
        assert_eq!(state.session.lives, 3);
        assert!(state.items.is_empty());
        assert_eq!(events, vec![GameEvent::Collected { score: 10 }]);
    }

    #[test]
    fn test_three_bugs_end_the_game() {
        let mut state = scenario_state();
        let mut events = Vec::new();

        for expected_lives in [2, 1, 0] {
            state.items.push(bug_at(180.0, 500.0, 1.0));
            events.clear();
            tick(&mut state, 0.0, &mut events);

            assert_eq!(state.session.lives, expected_lives);
            assert_eq!(state.session.score, 0);
            assert!(state.items.is_empty());
            assert_eq!(state.session.is_over, expected_lives == 0);
        }
        assert_eq!(
            events,
            vec![
                GameEvent::Hit { lives: 0 },
                GameEvent::GameOver { final_score: 0 }
            ]
        );
    }

    #[test]
    fn test_simultaneous_collisions_all_resolve() {
        let mut state = scenario_state();
        state.session.lives = 1;
        state.items.push(coffee_at(170.0, 500.0, 1.0));
        state.items.push(bug_at(180.0, 500.0, 1.0));
        state.items.push(bug_at(190.0, 500.0, 1.0));
        state.items.push(coffee_at(200.0, 500.0, 1.0));

        let mut events = Vec::new();
        tick(&mut state, 0.0, &mut events);

        assert!(state.items.is_empty());
        assert_eq!(state.session.score, 20);
        assert_eq!(state.session.lives, 0);
        assert!(state.session.is_over);
        assert_eq!(
            events,
            vec![
                GameEvent::Collected { score: 10 },
                GameEvent::Hit { lives: 0 },
                GameEvent::GameOver { final_score: 10 },
                GameEvent::Collected { score: 20 },
            ]
        );
    }

    #[test]
    fn test_bugs_after_last_life_are_silent() {
        let mut state = scenario_state();
        state.session.lives = 1;
        state.items.push(bug_at(180.0, 500.0, 1.0));
        state.items.push(bug_at(190.0, 500.0, 1.0));

        let mut events = Vec::new();
        tick(&mut state, 0.0, &mut events);

        assert!(state.items.is_empty());
        assert_eq!(state.session.lives, 0);
        assert!(state.session.is_over);
        assert_eq!(
            events,
            vec![
                GameEvent::Hit { lives: 0 },
                GameEvent::GameOver { final_score: 0 }
            ]
        );
    }

    #[test]
    fn test_offscreen_items_are_culled() {
        let mut state = scenario_state();
        // Far from the player, about to leave the arena
        state.items.push(bug_at(0.0, 598.0, 5.0));
        // Exactly on the floor stays one more tick
        state.items.push(coffee_at(350.0, 595.0, 5.0));

        let mut events = Vec::new();
        tick(&mut state, 0.0, &mut events);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].pos.y, 600.0);
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.lives, 3);
        assert!(events.is_empty());

        tick(&mut state, 0.0, &mut events);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_collision_wins_over_culling() {
        let mut state = scenario_state();
        state.arena.height = 520.0;
        // Ends at y=525: below the floor but still overlapping the player
        state.items.push(coffee_at(168.0, 500.0, 25.0));

        let mut events = Vec::new();
        tick(&mut state, 0.0, &mut events);

        assert_eq!(state.session.score, 10);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_spawn_timer_drives_spawns() {
        let mut state = scenario_state();
        let mut events = Vec::new();

        tick(&mut state, 999.0, &mut events);
        assert!(state.items.is_empty());
        assert_eq!(state.session.spawn_timer, 1.0);

        tick(&mut state, 1.0, &mut events);
        assert_eq!(state.items.len(), 1);
        assert!(matches!(events[..], [GameEvent::Spawned(_)]));
        assert_eq!(state.session.spawn_timer, 1000.0);
        assert!((state.session.spawn_interval - 995.0).abs() < 1e-9);
        assert!((state.session.game_speed - 2.05).abs() < 1e-6);

        // The new item already fell once this tick
        let item = &state.items[0];
        assert_eq!(item.pos.y, -item.size.y + item.speed);
    }

    #[test]
    fn test_one_spawn_per_tick_on_large_delta() {
        let mut state = scenario_state();
        let mut events = Vec::new();
        tick(&mut state, 10_000.0, &mut events);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_determinism() {
        let mut a = scenario_state();
        let mut b = scenario_state();
        let mut events = Vec::new();

        for frame in 0..600 {
            a.player.pos.x = (frame % 336) as f32;
            b.player.pos.x = (frame % 336) as f32;
            tick(&mut a, 16.0, &mut events);
            tick(&mut b, 16.0, &mut events);
        }

        assert_eq!(a.session, b.session);
        assert_eq!(a.items, b.items);
    }

    proptest! {
        #[test]
        fn prop_game_over_freezes_state(delta in 0.0f64..10_000.0, y in -100.0f32..700.0) {
            let mut state = scenario_state();
            state.session.is_over = true;
            state.session.lives = 0;
            state.session.score = 40;
            state.items.push(coffee_at(168.0, y, 3.0));
            let before_items = state.items.clone();
            let before_session = state.session.clone();

            let mut events = Vec::new();
            tick(&mut state, delta, &mut events);

            prop_assert_eq!(&state.items, &before_items);
            prop_assert_eq!(&state.session, &before_session);
            prop_assert!(events.is_empty());
        }

        #[test]
        fn prop_items_fall_by_speed(
            x in 0.0f32..352.0,
            y in -48.0f32..300.0,
            speed in 0.0f32..20.0,
        ) {
            let mut state = scenario_state();
            state.items.push(coffee_at(x, y, speed));

            let mut events = Vec::new();
            tick(&mut state, 0.0, &mut events);

            // Nothing below y=320 can reach the player this tick
            prop_assert_eq!(state.items.len(), 1);
            prop_assert_eq!(state.items[0].pos.y, y + speed);
        }

        #[test]
        fn prop_coffee_only_scores(x in 120.5f32..231.5, lives in 1u32..5) {
            let mut state = scenario_state();
            state.session.lives = lives;
            state.items.push(coffee_at(x, 500.0, 0.0));

            let mut events = Vec::new();
            tick(&mut state, 0.0, &mut events);

            prop_assert_eq!(state.session.score, 10);
            prop_assert_eq!(state.session.lives, lives);
        }

        #[test]
        fn prop_bug_only_costs_a_life(x in 128.5f32..231.5, lives in 1u32..5, score in 0u64..1000) {
            let mut state = scenario_state();
            state.session.lives = lives;
            state.session.score = score;
            state.items.push(bug_at(x, 500.0, 0.0));

            let mut events = Vec::new();
            tick(&mut state, 0.0, &mut events);

            prop_assert_eq!(state.session.lives, lives - 1);
            prop_assert_eq!(state.session.score, score);
            prop_assert_eq!(state.session.is_over, lives == 1);
        }

        #[test]
        fn prop_spawn_interval_ramps_down_to_floor(
            seed in any::<u64>(),
            deltas in proptest::collection::vec(0.0f64..2_000.0, 1..200),
        ) {
            let mut state = GameState::new(seed, Arena::new(400.0, 600.0), Tuning::default());
            // Keep the run alive: park the player out of reach
            state.player.pos.y = 10_000.0;
            let mut events = Vec::new();

            for delta in deltas {
                let before = state.session.spawn_interval;
                tick(&mut state, delta, &mut events);
                prop_assert!(state.session.spawn_interval <= before);
                prop_assert!(state.session.spawn_interval >= 300.0);
                prop_assert!(!state.session.is_over);
            }
        }
    }
}
