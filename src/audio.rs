//! Audio cues
//!
//! Short clips played fire-and-forget in response to simulation events.
//! Playback failures (autoplay policy, missing files) are ignored.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Coffee caught
    Collect,
    /// Bug caught
    Hit,
    /// Lives ran out
    GameOver,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Collected { .. } => Some(Self::Collect),
            GameEvent::Hit { .. } => Some(Self::Hit),
            GameEvent::GameOver { .. } => Some(Self::GameOver),
            GameEvent::Spawned(_) => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::Promise;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::HtmlAudioElement;

    use super::SoundEffect;
    use crate::settings::{Settings, SoundPaths};

    /// Audio manager for the game
    pub struct AudioManager {
        collect: Option<HtmlAudioElement>,
        hit: Option<HtmlAudioElement>,
        game_over: Option<HtmlAudioElement>,
        volume: f32,
        /// Swallows rejected `play()` promises (autoplay blocked, missing file)
        on_rejected: Closure<dyn FnMut(JsValue)>,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            let SoundPaths {
                collect,
                hit,
                game_over,
            } = &settings.sounds;
            Self {
                collect: load_clip(collect),
                hit: load_clip(hit),
                game_over: load_clip(game_over),
                volume: settings.effective_volume(),
                on_rejected: Closure::new(|e: JsValue| {
                    log::debug!("Sound playback failed: {:?}", e);
                }),
            }
        }

        /// Play a sound effect from the start
        pub fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }

            let clip = match effect {
                SoundEffect::Collect => &self.collect,
                SoundEffect::Hit => &self.hit,
                SoundEffect::GameOver => &self.game_over,
            };
            if let Some(clip) = clip {
                self.play_clip(clip, effect);
            }
        }

        /// Start `clip`; the returned promise settles once playback started or failed
        /// and never rejects
        fn play_clip(&self, clip: &HtmlAudioElement, effect: SoundEffect) -> Option<Promise> {
            clip.set_volume(self.volume as f64);
            clip.set_current_time(0.0);
            match clip.play() {
                Ok(playing) => Some(playing.catch(&self.on_rejected)),
                Err(e) => {
                    log::debug!("{:?} playback failed: {:?}", effect, e);
                    None
                }
            }
        }
    }

    fn load_clip(src: &str) -> Option<HtmlAudioElement> {
        match HtmlAudioElement::new_with_src(src) {
            Ok(clip) => Some(clip),
            Err(e) => {
                log::warn!("Failed to create audio clip {}: {:?}", src, e);
                None
            }
        }
    }

}
