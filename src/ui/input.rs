//! Pointer input sampling
//!
//! One `PointerState` is sampled at the start of every frame and passed down
//! to whatever screen is active. Active touches take precedence over the
//! mouse position, so the game plays the same with a finger as with a mouse.

use macroquad::prelude::{
    is_mouse_button_down, is_mouse_button_pressed, mouse_position, touches, MouseButton,
    TouchPhase,
};

use super::Rect;

/// The latest known pointer position and button edges for this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    /// Just pressed this frame
    pub left_pressed: bool,
}

impl PointerState {
    /// Sample the pointer once for this frame. If any touch is active its
    /// position wins over the mouse.
    pub fn sample() -> Self {
        let (mut x, mut y) = mouse_position();

        let touch = touches()
            .into_iter()
            .find(|t| !matches!(t.phase, TouchPhase::Ended | TouchPhase::Cancelled));
        if let Some(touch) = touch {
            x = touch.position.x;
            y = touch.position.y;
        }

        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        }
    }

    /// Check if the pointer is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if the pointer is held down inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if the pointer just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_needs_press_edge_inside() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let hover = PointerState { x: 50.0, y: 50.0, left_down: false, left_pressed: false };
        let press = PointerState { left_pressed: true, left_down: true, ..hover };
        let outside = PointerState { x: 200.0, ..press };

        assert!(!hover.clicked(&rect));
        assert!(press.clicked(&rect));
        assert!(!outside.clicked(&rect));
    }
}
