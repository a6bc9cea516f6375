//! Coffee Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, PointerEvent};

    use coffee_rush::audio::{AudioManager, SoundEffect};
    use coffee_rush::renderer::{CanvasSurface, draw_backdrop, draw_frame};
    use coffee_rush::renderer::canvas::SpriteSheet;
    use coffee_rush::sim::{Arena, GameEvent};
    use coffee_rush::{Config, Game, GamePhase, Settings};

    /// Everything the browser callbacks share
    struct App {
        game: Game,
        settings: Settings,
        surface: CanvasSurface,
        audio: AudioManager,
        screens: Screens,
    }

    /// Start and game-over overlays
    struct Screens {
        start: Option<HtmlElement>,
        game_over: Option<HtmlElement>,
        final_score: Option<HtmlElement>,
    }

    impl Screens {
        fn find(document: &Document) -> Self {
            let html = |id: &str| {
                let el = document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                if el.is_none() {
                    log::warn!("No #{} element", id);
                }
                el
            };
            Self {
                start: html("start-screen"),
                game_over: html("game-over-screen"),
                final_score: html("final-score"),
            }
        }

        fn show_start(&self) {
            set_display(&self.game_over, "none");
            set_display(&self.start, "flex");
        }

        fn show_gameplay(&self) {
            set_display(&self.start, "none");
            set_display(&self.game_over, "none");
        }

        fn show_game_over(&self, score: u64) {
            if let Some(el) = &self.final_score {
                el.set_text_content(Some(&score.to_string()));
            }
            set_display(&self.game_over, "flex");
        }
    }

    fn set_display(el: &Option<HtmlElement>, value: &str) {
        if let Some(el) = el {
            let _ = el.style().set_property("display", value);
        }
    }

    impl App {
        /// Begin a run; returns false if one is already going
        fn start(&mut self, now: f64) -> bool {
            let seed = js_sys::Date::now() as u64;
            if !self.game.start(now, seed) {
                return false;
            }
            self.screens.show_gameplay();
            true
        }

        /// Simulate, dispatch effects, draw. Returns whether to keep looping.
        fn frame(&mut self, time: f64) -> bool {
            let outcome = self.game.frame(time);
            let keep_running = outcome.keep_running;

            for event in outcome.events {
                if let Some(effect) = SoundEffect::for_event(event) {
                    self.audio.play(effect);
                }
                if let GameEvent::GameOver { final_score } = event {
                    self.screens.show_game_over(*final_score);
                }
            }

            draw_frame(&mut self.surface, self.game.state(), &self.settings.hud);
            keep_running
        }
    }


    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    /// Inline `<script id="game-config" type="application/json">`, if present
    fn read_config(document: &Document) -> Config {
        match document
            .get_element_by_id("game-config")
            .and_then(|el| el.text_content())
        {
            Some(json) => Config::from_json_or_default(&json),
            None => Config::default(),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger already set: {e}").into());
        }

        log::info!("Coffee Rush starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas"))?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let Config { tuning, settings } = read_config(&document);
        let arena = if canvas.width() > 0 && canvas.height() > 0 {
            Arena::new(canvas.width() as f32, canvas.height() as f32)
        } else {
            Arena::new(tuning.arena_width, tuning.arena_height)
        };

        let sprites = SpriteSheet::load(&settings.assets)?;
        let surface = CanvasSurface::new(ctx, sprites);
        let audio = AudioManager::new(&settings);
        let screens = Screens::find(&document);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(seed, arena, tuning),
            settings,
            surface,
            audio,
            screens,
        }));
        log::info!("Arena {}x{}", arena.width, arena.height);

        app.borrow().screens.show_start();
        setup_backdrop(app.clone(), arena);
        setup_pointer(&canvas, app.clone())?;
        setup_start_button(&document, "startButton", app.clone())?;
        setup_start_button(&document, "restartButton", app)?;

        Ok(())
    }

    /// Paint the background as soon as it has loaded, before any game starts
    fn setup_backdrop(app: Rc<RefCell<App>>, arena: Arena) {
        let closure = Closure::<dyn FnMut()>::new({
            let app = app.clone();
            move || {
                let mut a = app.borrow_mut();
                if a.game.phase() == GamePhase::Idle {
                    draw_backdrop(&mut a.surface, arena);
                }
            }
        });
        let a = app.borrow();
        a.surface
            .sprites()
            .background()
            .set_onload(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f64 - rect.left();
            app.borrow_mut().game.pointer_moved(x as f32);
        });
        canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_start_button(
        document: &Document,
        id: &str,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("No #{} button", id);
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let now = now();
            let started = app.borrow_mut().start(now);
            if started {
                game_loop(app.clone(), now);
            }
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One frame; re-arms itself until the game ends
    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_running = app.borrow_mut().frame(time);
        if keep_running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coffee Rush (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    demo::run(0xC0FFEE);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless autopilot run
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use coffee_rush::sim::{Arena, GameEvent, GameState, ItemKind};
    use coffee_rush::{Game, GamePhase, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 180;

    /// Chase the lowest coffee that is not right above a bug
    fn pick_target(state: &GameState) -> Option<f32> {
        state
            .items
            .iter()
            .filter(|item| item.kind == ItemKind::Coffee)
            .filter(|coffee| {
                !state.items.iter().any(|bug| {
                    bug.kind == ItemKind::Bug
                        && bug.pos.y > coffee.pos.y
                        && (bug.pos.x - coffee.pos.x).abs() < state.player.size.x
                })
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|coffee| coffee.pos.x + coffee.size.x / 2.0)
    }

    pub fn run(seed: u64) {
        let tuning = Tuning::default();
        let arena = Arena::new(tuning.arena_width, tuning.arena_height);
        let mut game = Game::new(seed, arena, tuning);
        game.start(0.0, seed);

        let (mut caught, mut hits) = (0u32, 0u32);
        let mut frames = 0;
        while frames < MAX_FRAMES {
            if let Some(x) = pick_target(game.state()) {
                game.pointer_moved(x);
            }

            let outcome = game.frame(frames as f64 * FRAME_MS);
            for event in outcome.events {
                match event {
                    GameEvent::Collected { .. } => caught += 1,
                    GameEvent::Hit { lives } => {
                        hits += 1;
                        log::info!("Bug! {} lives left", lives);
                    }
                    _ => {}
                }
            }
            frames += 1;
            if !outcome.keep_running {
                break;
            }
        }

        let session = &game.state().session;
        log::info!(
            "Demo finished after {} frames ({}): score {}, {} coffees, {} bugs",
            frames,
            if game.phase() == GamePhase::GameOver { "game over" } else { "time up" },
            session.score,
            caught,
            hits
        );
        match serde_json::to_string(session) {
            Ok(json) => log::debug!("Final session: {}", json),
            Err(e) => log::warn!("Could not serialize session: {}", e),
        }
    }
}
