//! Session rendering
//!
//! Draws one frame of the play field: background shade, player glow, orbs,
//! then enemies. Pure draw calls - no state changes happen here.

use macroquad::prelude::*;

use crate::ui::Rect;
use super::session::Session;

/// Glow circles shrink by this much per layer.
const GLOW_STEP: f32 = 5.0;

/// Radius of the player's bright core.
const CORE_RADIUS: f32 = 10.0;

/// Draw the whole session into the play field rect.
///
/// Order matters: background, player, all orbs, all enemies.
pub fn draw_session(session: &Session, area: Rect) {
    let b = session.brightness;
    draw_rectangle(area.x, area.y, area.w, area.h, Color::from_rgba(b, b, b, 255));

    draw_player(area.x + session.player.x, area.y + session.player.y, session.player.size);

    for orb in &session.orbs {
        draw_orb(area.x + orb.x, area.y + orb.y, session.config.orb_size);
    }

    for enemy in &session.enemies {
        draw_enemy(area.x + enemy.x, area.y + enemy.y, session.config.enemy_size);
    }
}

/// Layered glow: concentric circles with alpha fading from 50 down to 0 as
/// the radius shrinks toward the core, then a bright center.
fn draw_player(x: f32, y: f32, size: f32) {
    let mut r = size;
    while r > CORE_RADIUS {
        let alpha = map_range(r, size, CORE_RADIUS, 50.0, 0.0);
        draw_circle(x, y, r, Color::from_rgba(255, 255, 100, alpha as u8));
        r -= GLOW_STEP;
    }
    draw_circle(x, y, CORE_RADIUS, Color::from_rgba(255, 255, 150, 255));
}

/// Outer glow, body, inner highlight.
fn draw_orb(x: f32, y: f32, size: f32) {
    draw_circle(x, y, (size + 5.0) / 2.0, Color::from_rgba(255, 255, 100, 100));
    draw_circle(x, y, size / 2.0, Color::from_rgba(255, 255, 100, 255));
    draw_circle(x, y, size / 4.0, Color::from_rgba(255, 255, 180, 255));
}

/// Outer glow, body, inner dark core.
fn draw_enemy(x: f32, y: f32, size: f32) {
    draw_circle(x, y, (size + 5.0) / 2.0, Color::from_rgba(255, 50, 50, 80));
    draw_circle(x, y, size / 2.0, Color::from_rgba(255, 50, 50, 255));
    draw_circle(x, y, size / 4.0, Color::from_rgba(200, 0, 0, 255));
}

/// Linear remap of `v` from [in_start, in_end] to [out_start, out_end].
fn map_range(v: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    out_start + (v - in_start) / (in_end - in_start) * (out_end - out_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints() {
        assert_eq!(map_range(30.0, 30.0, 10.0, 50.0, 0.0), 50.0);
        assert_eq!(map_range(10.0, 30.0, 10.0, 50.0, 0.0), 0.0);
        assert_eq!(map_range(20.0, 30.0, 10.0, 50.0, 0.0), 25.0);
    }
}
