//! Game tuning configuration
//!
//! All gameplay numbers live in one serde struct. Defaults reproduce the
//! shipped tuning; on native builds an optional `glimmer.ron` next to the
//! binary can override individual fields for quick experiments.

use serde::{Deserialize, Serialize};

use crate::game::Canvas;

/// Margin kept between the play field and the window edges (horizontal).
const CANVAS_MARGIN_X: f32 = 40.0;

/// Vertical margin, larger to leave room for the score line.
const CANVAS_MARGIN_Y: f32 = 100.0;

/// Gameplay tuning knobs. Sizes are diameters in pixels, intervals in frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play field cap; the actual canvas also fits the viewport
    pub max_canvas_width: f32,
    pub max_canvas_height: f32,

    pub player_size: f32,
    pub orb_size: f32,
    pub enemy_size: f32,

    /// Entities pre-spawned at session start
    pub initial_orbs: usize,
    pub initial_enemies: usize,

    /// One extra orb/enemy every this many frames
    pub orb_spawn_interval: u32,
    pub enemy_spawn_interval: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_canvas_width: 800.0,
            max_canvas_height: 600.0,
            player_size: 30.0,
            orb_size: 20.0,
            enemy_size: 30.0,
            initial_orbs: 5,
            initial_enemies: 3,
            orb_spawn_interval: 180,
            enemy_spawn_interval: 300,
        }
    }
}

impl GameConfig {
    /// Parse a config from RON text. Missing fields fall back to defaults.
    pub fn load_from_str(text: &str) -> Result<GameConfig, String> {
        ron::from_str(text).map_err(|e| format!("invalid config: {}", e))
    }

    /// Load a config file if present, falling back to defaults on a missing
    /// or unparsable file (with a logged warning for the latter).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &str) -> GameConfig {
        match std::fs::read_to_string(path) {
            Ok(text) => match Self::load_from_str(&text) {
                Ok(config) => {
                    println!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    eprintln!("Failed to parse {}: {} - using defaults", path, e);
                    GameConfig::default()
                }
            },
            Err(_) => GameConfig::default(),
        }
    }

    /// WASM has no filesystem; always use defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default(_path: &str) -> GameConfig {
        GameConfig::default()
    }

    /// Derive the play field size from the viewport. Called once at startup;
    /// the canvas is never resized afterwards.
    pub fn resolve_canvas(&self, screen_w: f32, screen_h: f32) -> Canvas {
        Canvas::new(
            self.max_canvas_width.min(screen_w - CANVAS_MARGIN_X),
            self.max_canvas_height.min(screen_h - CANVAS_MARGIN_Y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.max_canvas_width, 800.0);
        assert_eq!(config.max_canvas_height, 600.0);
        assert_eq!(config.player_size, 30.0);
        assert_eq!(config.orb_size, 20.0);
        assert_eq!(config.enemy_size, 30.0);
        assert_eq!(config.initial_orbs, 5);
        assert_eq!(config.initial_enemies, 3);
        assert_eq!(config.orb_spawn_interval, 180);
        assert_eq!(config.enemy_spawn_interval, 300);
    }

    #[test]
    fn test_partial_ron_overrides() {
        let config = GameConfig::load_from_str("(initial_orbs: 9, orb_spawn_interval: 60)")
            .expect("partial config should parse");
        assert_eq!(config.initial_orbs, 9);
        assert_eq!(config.orb_spawn_interval, 60);
        // Untouched fields keep their defaults
        assert_eq!(config.initial_enemies, 3);
    }

    #[test]
    fn test_invalid_ron_is_an_error() {
        let err = GameConfig::load_from_str("(initial_orbs: \"many\")").unwrap_err();
        assert!(err.contains("invalid config"));
    }

    #[test]
    fn test_resolve_canvas_caps_and_fits() {
        let config = GameConfig::default();

        // Large viewport: capped at the configured maximum
        let canvas = config.resolve_canvas(1920.0, 1080.0);
        assert_eq!(canvas.w, 800.0);
        assert_eq!(canvas.h, 600.0);

        // Small viewport: shrinks to fit with margins
        let canvas = config.resolve_canvas(640.0, 480.0);
        assert_eq!(canvas.w, 600.0);
        assert_eq!(canvas.h, 380.0);
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glimmer.ron");
        std::fs::write(&path, "(initial_enemies: 7)").unwrap();

        let config = GameConfig::load_or_default(path.to_str().unwrap());
        assert_eq!(config.initial_enemies, 7);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default("does-not-exist.ron");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_or_default_bad_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glimmer.ron");
        std::fs::write(&path, "not ron at all {{{").unwrap();

        let config = GameConfig::load_or_default(path.to_str().unwrap());
        assert_eq!(config, GameConfig::default());
    }
}
