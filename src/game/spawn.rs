//! Entity Spawner
//!
//! Produces orbs at uniform random positions and enemies at random positions
//! biased away from the player. Enemy placement is best-effort rejection
//! sampling: after `MAX_SPAWN_ATTEMPTS` tries the last sample is used even if
//! it lands near the player. This soft constraint is intentional - a cramped
//! play field still gets its enemy without erroring.

use rand::Rng;

use crate::config::GameConfig;
use super::entities::{dist, Canvas, Enemy, HopeOrb, Player};

/// Enemies try to spawn at least this far from the player.
pub const MIN_PLAYER_DISTANCE: f32 = 100.0;

/// How many rejection samples before giving up on the distance constraint.
pub const MAX_SPAWN_ATTEMPTS: u32 = 50;

/// Initial enemy velocity components are uniform in [-2, 2).
const INITIAL_SPEED: f32 = 2.0;

/// Spawn an orb at a uniform random position. No overlap check: orbs may
/// stack on each other or on the player.
pub fn spawn_orb(rng: &mut impl Rng, config: &GameConfig, canvas: Canvas) -> HopeOrb {
    let margin = config.orb_size;
    HopeOrb {
        x: rng.gen_range(margin..canvas.w - margin),
        y: rng.gen_range(margin..canvas.h - margin),
    }
}

/// Spawn an enemy away from the player when possible.
pub fn spawn_enemy(
    rng: &mut impl Rng,
    config: &GameConfig,
    canvas: Canvas,
    player: &Player,
) -> Enemy {
    let margin = config.enemy_size;
    let mut x = 0.0;
    let mut y = 0.0;

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        x = rng.gen_range(margin..canvas.w - margin);
        y = rng.gen_range(margin..canvas.h - margin);
        if dist(x, y, player.x, player.y) >= MIN_PLAYER_DISTANCE {
            break;
        }
    }

    Enemy {
        x,
        y,
        vel_x: rng.gen_range(-INITIAL_SPEED..INITIAL_SPEED),
        vel_y: rng.gen_range(-INITIAL_SPEED..INITIAL_SPEED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_orbs_spawn_in_bounds() {
        let config = GameConfig::default();
        let canvas = Canvas::new(800.0, 600.0);
        let mut rng = rng(7);

        for _ in 0..100 {
            let orb = spawn_orb(&mut rng, &config, canvas);
            assert!(orb.x >= config.orb_size && orb.x <= canvas.w - config.orb_size);
            assert!(orb.y >= config.orb_size && orb.y <= canvas.h - config.orb_size);
        }
    }

    #[test]
    fn test_enemies_spawn_away_from_player() {
        let config = GameConfig::default();
        let canvas = Canvas::new(800.0, 600.0);
        let player = Player::centered(canvas, config.player_size);
        let mut rng = rng(42);

        // 800x600 has plenty of room beyond 100 units from the center, so
        // every spawn must satisfy the distance constraint.
        for _ in 0..100 {
            let enemy = spawn_enemy(&mut rng, &config, canvas, &player);
            assert!(dist(enemy.x, enemy.y, player.x, player.y) >= MIN_PLAYER_DISTANCE);
            assert!(enemy.x >= config.enemy_size && enemy.x <= canvas.w - config.enemy_size);
            assert!(enemy.y >= config.enemy_size && enemy.y <= canvas.h - config.enemy_size);
        }
    }

    #[test]
    fn test_enemy_initial_velocity_range() {
        let config = GameConfig::default();
        let canvas = Canvas::new(800.0, 600.0);
        let player = Player::centered(canvas, config.player_size);
        let mut rng = rng(3);

        for _ in 0..100 {
            let enemy = spawn_enemy(&mut rng, &config, canvas, &player);
            assert!(enemy.vel_x >= -INITIAL_SPEED && enemy.vel_x < INITIAL_SPEED);
            assert!(enemy.vel_y >= -INITIAL_SPEED && enemy.vel_y < INITIAL_SPEED);
        }
    }

    #[test]
    fn test_cramped_canvas_still_spawns() {
        let config = GameConfig::default();
        // Every samplable point is within 100 units of the centered player,
        // so the constraint can never be met. The spawner must still return
        // an in-bounds enemy rather than spin or fail.
        let canvas = Canvas::new(150.0, 150.0);
        let player = Player::centered(canvas, config.player_size);
        let mut rng = rng(11);

        let enemy = spawn_enemy(&mut rng, &config, canvas, &player);
        assert!(enemy.x >= config.enemy_size && enemy.x <= canvas.w - config.enemy_size);
        assert!(enemy.y >= config.enemy_size && enemy.y <= canvas.h - config.enemy_size);
    }
}
