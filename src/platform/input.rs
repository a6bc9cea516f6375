//! Pointer to player mapping
//!
//! Only the horizontal axis is used. Coordinates are canvas-relative; the web
//! layer subtracts the canvas bounding rect before calling in here.

use crate::sim::Player;

/// Center a player of `player_width` under `pointer_x`, kept inside the arena
pub fn clamp_player_x(pointer_x: f32, player_width: f32, area_width: f32) -> f32 {
    let max_x = (area_width - player_width).max(0.0);
    (pointer_x - player_width / 2.0).clamp(0.0, max_x)
}

/// Move the player under the pointer. Non-finite coordinates are ignored.
pub fn follow_pointer(player: &mut Player, pointer_x: f32, area_width: f32) {
    if !pointer_x.is_finite() {
        return;
    }
    player.pos.x = clamp_player_x(pointer_x, player.size.x, area_width);
}
