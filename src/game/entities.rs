//! Entity records
//!
//! Plain data for everything that lives on the play field. Entities carry no
//! behavior of their own; the session update loop owns all of it.

/// The play field, derived from the viewport once at startup and never
/// resized afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub w: f32,
    pub h: f32,
}

impl Canvas {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// The player's light avatar. One per session, recreated on every restart,
/// position driven by the latest pointer/touch sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Player {
    /// Spawn at the center of the play field.
    pub fn centered(canvas: Canvas, size: f32) -> Self {
        Self {
            x: canvas.w / 2.0,
            y: canvas.h / 2.0,
            size,
        }
    }
}

/// A collectible orb. No velocity, no identity beyond membership in the
/// session's orb list; destroyed on collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HopeOrb {
    pub x: f32,
    pub y: f32,
}

/// A roaming enemy. Random-walks with an elastic wall bounce; persists until
/// game over or restart, never despawned individually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub vel_x: f32,
    pub vel_y: f32,
}

impl Enemy {
    /// Velocity components are clamped to [-MAX_SPEED, MAX_SPEED] per axis.
    pub const MAX_SPEED: f32 = 3.0;
}

/// Euclidean distance between two points.
pub fn dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Circle-overlap test for two entities given their diameters.
pub fn circles_overlap(x1: f32, y1: f32, size1: f32, x2: f32, y2: f32, size2: f32) -> bool {
    dist(x1, y1, x2, y2) < (size1 + size2) / 2.0
}
