//! Game core
//!
//! Everything that makes the game tick, kept free of window/UI concerns so
//! the simulation can be driven headlessly in tests:
//! - entities: plain data records for player, orbs, enemies
//! - spawn: random placement of new orbs and enemies
//! - session: per-play-through state and the per-frame update
//! - events: decoupled notifications for the HUD bridge
//! - render: macroquad draw calls for one frame (the only display-aware part)

pub mod entities;
pub mod events;
pub mod render;
pub mod session;
pub mod spawn;

pub use entities::{Canvas, Enemy, HopeOrb, Player};
pub use events::Events;
pub use render::draw_session;
pub use session::Session;
