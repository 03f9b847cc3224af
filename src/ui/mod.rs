//! Immediate-mode UI helpers
//!
//! The menu, instructions, and overlay panels are rebuilt from scratch every
//! frame - no retained widget state, just rectangles, a pointer sample, and
//! draw calls. Macroquad does the rendering.

mod input;
mod rect;
mod widgets;

pub use input::*;
pub use rect::*;
pub use widgets::*;
