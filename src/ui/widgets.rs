//! Basic UI widgets

use macroquad::prelude::*;

use super::{PointerState, Rect};

/// Accent color shared by buttons and headings
pub const ACCENT_COLOR: Color = Color::new(1.0, 0.95, 0.45, 1.0);

const BUTTON_BG: Color = Color::new(0.14, 0.14, 0.18, 1.0);
const BUTTON_BG_HOVER: Color = Color::new(0.22, 0.22, 0.28, 1.0);
const BUTTON_BG_PRESSED: Color = Color::new(0.30, 0.30, 0.37, 1.0);
const BUTTON_TEXT: Color = Color::new(0.92, 0.92, 0.92, 1.0);
const BUTTON_BORDER: Color = Color::new(0.35, 0.35, 0.43, 1.0);

/// Draw a flat text button, returns true if clicked
pub fn text_button(pointer: &PointerState, rect: Rect, label: &str) -> bool {
    let hovered = pointer.inside(&rect);
    let pressed = pointer.clicking(&rect);

    let bg = if pressed {
        BUTTON_BG_PRESSED
    } else if hovered {
        BUTTON_BG_HOVER
    } else {
        BUTTON_BG
    };

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    let border = if hovered { ACCENT_COLOR } else { BUTTON_BORDER };
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, border);

    let font_size = 22.0;
    let dims = measure_text(label, None, font_size as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let text_x = (rect.center_x() - dims.width * 0.5).round();
    let text_y = (rect.center_y() + dims.height * 0.5).round();
    draw_text(label, text_x, text_y, font_size, BUTTON_TEXT);

    pointer.clicked(&rect)
}

/// Draw text horizontally centered on `center_x`
pub fn draw_text_centered(text: &str, center_x: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (center_x - dims.width * 0.5).round(), y.round(), font_size, color);
}
