//! Session controller
//!
//! Owns the game state and the lifecycle around it:
//! `Idle -> Running -> GameOver`, with `start` leading back to `Running`.

use crate::platform::{FrameClock, follow_pointer};
use crate::sim::{Arena, GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Start overlay, nothing simulated yet
    Idle,
    /// Frame loop active
    Running,
    /// Game-over overlay; only `start` leaves this phase
    GameOver,
}

/// Result of one animation frame
#[derive(Debug)]
pub struct FrameOutcome<'a> {
    /// Events raised by this frame's tick
    pub events: &'a [GameEvent],
    /// Whether another frame should be requested
    pub keep_running: bool,
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    phase: GamePhase,
    state: GameState,
    clock: FrameClock,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64, arena: Arena, tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Idle,
            state: GameState::new(seed, arena, tuning),
            clock: FrameClock::new(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Begin a fresh run from `Idle` or `GameOver`.
    ///
    /// `now` anchors the frame clock so the first frame has a zero delta.
    /// Returns `false` (and changes nothing) while a run is in progress.
    pub fn start(&mut self, now: f64, seed: u64) -> bool {
        if self.phase == GamePhase::Running {
            log::warn!("Start requested while running; ignored");
            return false;
        }

        self.state.reset(seed);
        self.clock.reset(now);
        self.events.clear();
        self.phase = GamePhase::Running;
        log::info!("Game started with seed: {}", seed);
        true
    }

    /// Run one frame at `timestamp` (ms).
    ///
    /// Outside `Running` this does nothing and asks the loop to stop.
    pub fn frame(&mut self, timestamp: f64) -> FrameOutcome<'_> {
        self.events.clear();
        if self.phase != GamePhase::Running {
            return FrameOutcome {
                events: &self.events,
                keep_running: false,
            };
        }

        let delta = self.clock.tick(timestamp);
        tick(&mut self.state, delta, &mut self.events);

        if self.state.session.is_over {
            self.phase = GamePhase::GameOver;
        }

        FrameOutcome {
            events: &self.events,
            keep_running: self.phase == GamePhase::Running,
        }
    }

    /// Pointer moved to canvas-relative `x`
    pub fn pointer_moved(&mut self, x: f32) {
        let width = self.state.arena.width;
        follow_pointer(&mut self.state.player, x, width);
    }

    /// Score to show on the game-over overlay
    pub fn final_score(&self) -> u64 {
        self.state.session.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Item, ItemKind};
    use glam::Vec2;

    fn game() -> Game {
        Game::new(1, Arena::new(400.0, 600.0), Tuning::default())
    }

    fn drop_bug_on_player(game: &mut Game) {
        let pos = game.state.player.pos;
        game.state
            .items
            .push(Item::new(ItemKind::Bug, pos, 40.0, 0.0));
    }

    #[test]
    fn test_idle_until_started() {
        let mut g = game();
        assert_eq!(g.phase(), GamePhase::Idle);

        let outcome = g.frame(16.0);
        assert!(!outcome.keep_running);
        assert!(outcome.events.is_empty());
        assert_eq!(g.state().session.spawn_timer, 1000.0);
    }

    #[test]
    fn test_start_runs_first_frame_with_zero_delta() {
        let mut g = game();
        assert!(g.start(5_000.0, 2));
        assert_eq!(g.phase(), GamePhase::Running);

        let outcome = g.frame(5_000.0);
        assert!(outcome.keep_running);
        assert_eq!(g.state().session.spawn_timer, 1000.0);

        g.frame(5_016.0);
        assert_eq!(g.state().session.spawn_timer, 984.0);
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut g = game();
        g.start(0.0, 2);
        g.state.session.score = 50;
        assert!(!g.start(10.0, 3));
        assert_eq!(g.state().session.score, 50);
        assert_eq!(g.state().seed, 2);
    }

    #[test]
    fn test_game_over_stops_loop_and_restart_resets() {
        let mut g = game();
        g.start(0.0, 2);
        g.state.session.score = 70;

        let keep_running: Vec<bool> = (1..=3)
            .map(|frame| {
                drop_bug_on_player(&mut g);
                g.frame(frame as f64).keep_running
            })
            .collect();
        assert_eq!(keep_running, vec![true, true, false]);
        assert_eq!(g.phase(), GamePhase::GameOver);
        assert_eq!(g.final_score(), 70);
        assert_eq!(g.state().session.lives, 0);

        // Frozen until restart
        assert!(!g.frame(100.0).keep_running);
        assert_eq!(g.state().session.lives, 0);

        assert!(g.start(200.0, 9));
        assert_eq!(g.phase(), GamePhase::Running);
        assert_eq!(g.state().session.lives, 3);
        assert_eq!(g.state().session.score, 0);
        assert!(g.state().items.is_empty());
        assert_eq!(g.state().player.pos, Vec2::new(168.0, 520.0));
    }

    #[test]
    fn test_game_over_frame_reports_events() {
        let mut g = game();
        g.start(0.0, 2);
        g.state.session.lives = 1;
        drop_bug_on_player(&mut g);

        let outcome = g.frame(16.0);
        assert!(!outcome.keep_running);
        assert_eq!(
            outcome.events,
            &[
                GameEvent::Hit { lives: 0 },
                GameEvent::GameOver { final_score: 0 }
            ]
        );
    }

    #[test]
    fn test_pointer_clamps() {
        let mut g = game();
        g.pointer_moved(1000.0);
        assert_eq!(g.state().player.pos.x, 336.0);
        g.pointer_moved(-50.0);
        assert_eq!(g.state().player.pos.x, 0.0);
    }
}
