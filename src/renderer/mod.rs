//! Rendering module
//!
//! Draws a [`GameState`] onto any [`Surface`]. Drawing is a pure projection of
//! the state; nothing here mutates it. The browser surface lives in `canvas`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::settings::HudStyle;
use crate::sim::{Arena, GameState, ItemKind};

/// Image roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Player,
    Bug,
    Coffee,
}

impl From<ItemKind> for Sprite {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Bug => Sprite::Bug,
            ItemKind::Coffee => Sprite::Coffee,
        }
    }
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
        }
    }
}

/// Destination box for a sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

/// 2D drawing target
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self, arena: Arena);
    /// Draw a sprite stretched to `rect`; an image that is not loaded yet draws nothing
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    /// Draw one line of HUD text with its baseline at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, style: &HudStyle);
}

/// Background only, for the page before the first game starts
pub fn draw_backdrop<S: Surface + ?Sized>(surface: &mut S, arena: Arena) {
    surface.draw_sprite(
        Sprite::Background,
        Rect::new(Vec2::ZERO, Vec2::new(arena.width, arena.height)),
    );
}

/// Render the current frame
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState, hud: &HudStyle) {
    let arena = state.arena;
    surface.clear(arena);
    draw_backdrop(surface, arena);

    surface.draw_sprite(
        Sprite::Player,
        Rect::new(state.player.pos, state.player.size),
    );
    for item in &state.items {
        surface.draw_sprite(item.kind.into(), Rect::new(item.pos, item.size));
    }

    let (score, lives) = hud_lines(state, hud);
    surface.draw_text(
        &score,
        Vec2::new(hud.margin, hud.baseline_y),
        TextAlign::Left,
        hud,
    );
    surface.draw_text(
        &lives,
        Vec2::new(arena.width - hud.margin, hud.baseline_y),
        TextAlign::Right,
        hud,
    );
}

/// Score and lives lines as shown in the HUD
pub fn hud_lines(state: &GameState, hud: &HudStyle) -> (String, String) {
    (
        format!("{}: {}", hud.score_label, state.session.score),
        format!("{}: {}", hud.lives_label, state.session.lives),
    )
}
