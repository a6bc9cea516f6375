//! Canvas 2D surface
//!
//! Images load asynchronously; until an image has decoded, draws of it are
//! skipped rather than waited on.

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::{Rect, Sprite, Surface, TextAlign};
use crate::settings::{AssetPaths, HudStyle};
use crate::sim::Arena;

/// The four game images
pub struct SpriteSheet {
    player: HtmlImageElement,
    bug: HtmlImageElement,
    coffee: HtmlImageElement,
    background: HtmlImageElement,
}

impl SpriteSheet {
    /// Start loading every image; returns immediately
    pub fn load(paths: &AssetPaths) -> Result<Self, JsValue> {
        Ok(Self {
            player: load_image(&paths.player)?,
            bug: load_image(&paths.bug)?,
            coffee: load_image(&paths.coffee)?,
            background: load_image(&paths.background)?,
        })
    }

    fn get(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::Background => &self.background,
            Sprite::Player => &self.player,
            Sprite::Bug => &self.bug,
            Sprite::Coffee => &self.coffee,
        }
    }

    /// Background image, to redraw once it finishes loading
    pub fn background(&self) -> &HtmlImageElement {
        &self.background
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}

fn is_ready(img: &HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0
}

/// Surface backed by a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprites: SpriteSheet,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, sprites: SpriteSheet) -> Self {
        Self { ctx, sprites }
    }

    pub fn sprites(&self) -> &SpriteSheet {
        &self.sprites
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, arena: Arena) {
        self.ctx
            .clear_rect(0.0, 0.0, arena.width as f64, arena.height as f64);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let img = self.sprites.get(sprite);
        if !is_ready(img) {
            return;
        }
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                img,
                rect.pos.x as f64,
                rect.pos.y as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            )
            .ok();
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, style: &HudStyle) {
        self.ctx.set_fill_style_str(&style.color);
        self.ctx.set_font(&style.font);
        self.ctx.set_text_align(align.as_str());
        self.ctx.fill_text(text, pos.x as f64, pos.y as f64).ok();
    }
}
