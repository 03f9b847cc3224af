//! Menu, instructions, and overlay panels
//!
//! Macroquad-drawn stand-ins for the original page's HTML panels. Each draw
//! function renders one screen for this frame and returns the action the
//! user triggered, if any.

use macroquad::prelude::*;

use crate::app::ScreenAction;
use crate::hud::Hud;
use crate::ui::{draw_text_centered, text_button, PointerState, Rect, ACCENT_COLOR};

/// Window fill behind every screen, including around the play field.
pub const BG_COLOR: Color = Color::new(0.05, 0.05, 0.08, 1.0);
const TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const MUTED_COLOR: Color = Color::new(0.6, 0.6, 0.65, 1.0);
const OVERLAY_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.65);
const PANEL_BG: Color = Color::new(0.08, 0.08, 0.11, 1.0);

const BUTTON_W: f32 = 240.0;
const BUTTON_H: f32 = 48.0;
const BUTTON_GAP: f32 = 16.0;

/// A button centered on `center_x` at `y`.
fn centered_button(pointer: &PointerState, center_x: f32, y: f32, label: &str) -> bool {
    let rect = Rect::new((center_x - BUTTON_W * 0.5).round(), y.round(), BUTTON_W, BUTTON_H);
    text_button(pointer, rect, label)
}

/// Draw the main menu
pub fn draw_menu(screen: Rect, pointer: &PointerState) -> Option<ScreenAction> {
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, BG_COLOR);

    let cx = screen.center_x();
    let mut y = screen.h * 0.28;

    draw_text_centered("GLIMMER", cx, y, 56.0, ACCENT_COLOR);
    y += 36.0;
    draw_text_centered("Gather the light. Outlast the dark.", cx, y, 20.0, MUTED_COLOR);
    y += 70.0;

    if centered_button(pointer, cx, y, "Play") {
        return Some(ScreenAction::Play);
    }
    y += BUTTON_H + BUTTON_GAP;

    if centered_button(pointer, cx, y, "How to Play") {
        return Some(ScreenAction::ShowInstructions);
    }

    None
}

/// Draw the instructions screen
pub fn draw_instructions(screen: Rect, pointer: &PointerState) -> Option<ScreenAction> {
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, BG_COLOR);

    let cx = screen.center_x();
    let mut y = screen.h * 0.2;

    draw_text_centered("How to Play", cx, y, 36.0, ACCENT_COLOR);
    y += 50.0;

    let lines = [
        "Move your light with the mouse or a finger.",
        "Collect the glowing hope orbs - each one is a point",
        "and makes the world a little brighter.",
        "Avoid the red shadows. One touch ends the run.",
        "More shadows appear the longer you survive.",
    ];
    for line in lines {
        draw_text_centered(line, cx, y, 20.0, TEXT_COLOR);
        y += 30.0;
    }
    y += 40.0;

    if centered_button(pointer, cx, y, "Start") {
        return Some(ScreenAction::StartFromInstructions);
    }
    y += BUTTON_H + BUTTON_GAP;

    if centered_button(pointer, cx, y, "Back") {
        return Some(ScreenAction::Back);
    }

    None
}

/// Draw the chrome around the play field: score line and menu button.
/// Runs after the session render, so it must not touch the play field itself.
pub fn draw_game_chrome(area: Rect, hud: &Hud, pointer: &PointerState) -> Option<ScreenAction> {
    draw_text(hud.score_line(), area.x, (area.y - 12.0).round(), 22.0, TEXT_COLOR);

    let menu_rect = Rect::new(area.right() - 90.0, (area.y - 34.0).round(), 90.0, 28.0);
    if text_button(pointer, menu_rect, "Menu") {
        return Some(ScreenAction::ShowMenu);
    }

    None
}

/// Draw the game-over overlay on top of the play field.
pub fn draw_game_over(area: Rect, hud: &Hud, pointer: &PointerState) -> Option<ScreenAction> {
    draw_rectangle(area.x, area.y, area.w, area.h, OVERLAY_DIM);

    let panel_w = 360.0;
    let panel_h = 260.0;
    let panel = Rect::new(
        (area.center_x() - panel_w * 0.5).round(),
        (area.center_y() - panel_h * 0.5).round(),
        panel_w,
        panel_h,
    );
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, PANEL_BG);
    draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 2.0, ACCENT_COLOR);

    let cx = panel.center_x();
    let mut y = panel.y + 56.0;

    draw_text_centered("The darkness caught you", cx, y, 26.0, TEXT_COLOR);
    y += 36.0;

    let final_score = hud.final_score().unwrap_or(0);
    draw_text_centered(&format!("Final Score: {}", final_score), cx, y, 22.0, ACCENT_COLOR);
    y += 48.0;

    if centered_button(pointer, cx, y, "Play Again") {
        return Some(ScreenAction::Restart);
    }
    y += BUTTON_H + BUTTON_GAP;

    if centered_button(pointer, cx, y, "Menu") {
        return Some(ScreenAction::ShowMenu);
    }

    None
}
