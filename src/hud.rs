//! HUD / overlay bridge
//!
//! The HUD owns the display strings shown around the play field. Like the
//! original's external score element, the score line is only re-rendered when
//! a collection event arrives, and the final score is latched once when the
//! player is hit - not recomputed while the overlay is up.

use crate::game::Events;

/// Cached display state for the score line and game-over overlay.
#[derive(Debug)]
pub struct Hud {
    score: u32,
    score_line: String,
    final_score: Option<u32>,
}

impl Hud {
    pub fn new() -> Self {
        let mut hud = Self {
            score: 0,
            score_line: String::new(),
            final_score: None,
        };
        hud.reset();
        hud
    }

    /// Back to a fresh session: zero score line, no latched final score.
    pub fn reset(&mut self) {
        self.refresh_score(0);
        self.final_score = None;
    }

    /// Drain this frame's session events into the cached display state.
    pub fn drain(&mut self, events: &mut Events) {
        for collected in events.orb_collected.drain() {
            self.refresh_score(collected.score);
        }
        if !events.player_hit.is_empty() {
            events.player_hit.clear();
            self.final_score = Some(self.score);
        }
    }

    fn refresh_score(&mut self, score: u32) {
        self.score = score;
        self.score_line = format!("Hope Orbs Collected: {}", score);
    }

    pub fn score_line(&self) -> &str {
        &self.score_line
    }

    /// The score latched at the moment of the hit, if the session ended.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::events::{OrbCollected, PlayerHit};

    #[test]
    fn test_score_line_follows_collections() {
        let mut hud = Hud::new();
        assert_eq!(hud.score_line(), "Hope Orbs Collected: 0");

        let mut events = Events::new();
        events.orb_collected.send(OrbCollected { x: 0.0, y: 0.0, score: 1, brightness: 30 });
        events.orb_collected.send(OrbCollected { x: 0.0, y: 0.0, score: 2, brightness: 40 });
        hud.drain(&mut events);

        assert_eq!(hud.score_line(), "Hope Orbs Collected: 2");
        assert!(events.orb_collected.is_empty());
    }

    #[test]
    fn test_final_score_latched_on_hit() {
        let mut hud = Hud::new();
        let mut events = Events::new();

        events.orb_collected.send(OrbCollected { x: 0.0, y: 0.0, score: 12, brightness: 140 });
        events.player_hit.send(PlayerHit { x: 0.0, y: 0.0 });
        hud.drain(&mut events);

        assert_eq!(hud.final_score(), Some(12));

        hud.reset();
        assert_eq!(hud.final_score(), None);
        assert_eq!(hud.score_line(), "Hope Orbs Collected: 0");
    }
}
