//! Session state and per-frame update
//!
//! A `Session` is one play-through from initialization to game over or return
//! to the menu. It owns every piece of mutable game state - no globals - so
//! tests can instantiate and drive sessions independently of any window.
//!
//! The update runs single-threaded and frame-driven: exactly one
//! update-and-render pass per scheduled tick, each step running to completion
//! before the next frame. Pointer input is sampled by the caller as the
//! latest known value (last-write-wins).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use super::entities::{circles_overlap, Canvas, Enemy, HopeOrb, Player};
use super::events::{Events, OrbCollected, PlayerHit};
use super::spawn::{spawn_enemy, spawn_orb};

/// Background brightness at session start.
pub const BRIGHTNESS_START: u8 = 20;

/// Brightness gained per collected orb (saturating at 255).
pub const BRIGHTNESS_STEP: u8 = 10;

/// Per-axis velocity perturbation applied to every enemy every frame.
const VELOCITY_JITTER: f32 = 0.1;

/// All state for one play-through.
pub struct Session {
    pub config: GameConfig,
    pub canvas: Canvas,

    pub player: Player,
    pub orbs: Vec<HopeOrb>,
    pub enemies: Vec<Enemy>,

    /// Orbs collected this session
    pub score: u32,
    /// Background shade, rises with each orb, never falls within a session
    pub brightness: u8,
    /// Set on enemy contact; the session stops updating once true
    pub game_over: bool,
    /// Frames ticked since start/restart, drives the periodic spawn policy
    pub frames: u32,

    /// Events pushed during the tick, drained by the HUD afterwards
    pub events: Events,

    rng: StdRng,
}

impl Session {
    /// Create a session with an entropy-seeded RNG and the initial entity
    /// populations already spawned.
    pub fn new(config: GameConfig, canvas: Canvas) -> Self {
        Self::with_rng(config, canvas, StdRng::from_entropy())
    }

    /// Create a session with a fixed seed (deterministic, for tests).
    pub fn with_seed(config: GameConfig, canvas: Canvas, seed: u64) -> Self {
        Self::with_rng(config, canvas, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, canvas: Canvas, rng: StdRng) -> Self {
        let player = Player::centered(canvas, config.player_size);
        let mut session = Self {
            config,
            canvas,
            player,
            orbs: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            brightness: BRIGHTNESS_START,
            game_over: false,
            frames: 0,
            events: Events::new(),
            rng,
        };
        session.populate();
        session
    }

    /// Reset to a fresh play-through: counters back to start, entity lists
    /// cleared and repopulated, player recentered. The RNG stream continues.
    pub fn restart(&mut self) {
        self.orbs.clear();
        self.enemies.clear();
        self.score = 0;
        self.brightness = BRIGHTNESS_START;
        self.game_over = false;
        self.frames = 0;
        self.events.clear_all();
        self.player = Player::centered(self.canvas, self.config.player_size);
        self.populate();
    }

    /// Pre-spawn the initial orb and enemy populations.
    fn populate(&mut self) {
        for _ in 0..self.config.initial_orbs {
            let orb = spawn_orb(&mut self.rng, &self.config, self.canvas);
            self.orbs.push(orb);
        }
        for _ in 0..self.config.initial_enemies {
            let enemy = spawn_enemy(&mut self.rng, &self.config, self.canvas, &self.player);
            self.enemies.push(enemy);
        }
    }

    /// Run one frame of simulation toward the sampled pointer target.
    ///
    /// Once `game_over` is set this is a no-op; the caller shows the overlay
    /// instead of scheduling further updates.
    pub fn tick(&mut self, target_x: f32, target_y: f32) {
        if self.game_over {
            return;
        }

        self.track_pointer(target_x, target_y);
        self.move_enemies();
        self.collect_orbs();
        self.check_enemy_contact();
        self.periodic_spawns();
    }

    /// Step 1: the player follows the latest pointer/touch position, clamped
    /// to the play field. Out-of-range input is clamped, never rejected.
    fn track_pointer(&mut self, target_x: f32, target_y: f32) {
        let half = self.player.size / 2.0;
        self.player.x = target_x.clamp(half, self.canvas.w - half);
        self.player.y = target_y.clamp(half, self.canvas.h - half);
    }

    /// Step 2: enemy random walk with an elastic wall bounce.
    fn move_enemies(&mut self) {
        let half = self.config.enemy_size / 2.0;
        let (w, h) = (self.canvas.w, self.canvas.h);

        for enemy in &mut self.enemies {
            enemy.vel_x += self.rng.gen_range(-VELOCITY_JITTER..VELOCITY_JITTER);
            enemy.vel_y += self.rng.gen_range(-VELOCITY_JITTER..VELOCITY_JITTER);

            enemy.vel_x = enemy.vel_x.clamp(-Enemy::MAX_SPEED, Enemy::MAX_SPEED);
            enemy.vel_y = enemy.vel_y.clamp(-Enemy::MAX_SPEED, Enemy::MAX_SPEED);

            enemy.x += enemy.vel_x;
            enemy.y += enemy.vel_y;

            // Bounce off walls
            if enemy.x <= half || enemy.x >= w - half {
                enemy.vel_x *= -1.0;
            }
            if enemy.y <= half || enemy.y >= h - half {
                enemy.vel_y *= -1.0;
            }

            // Defensive clamp after the bounce
            enemy.x = enemy.x.clamp(half, w - half);
            enemy.y = enemy.y.clamp(half, h - half);
        }
    }

    /// Step 3: collect every orb overlapping the player this frame.
    ///
    /// Reverse index order so in-place removal never skips an element.
    fn collect_orbs(&mut self) {
        for i in (0..self.orbs.len()).rev() {
            let orb = self.orbs[i];
            if circles_overlap(
                self.player.x,
                self.player.y,
                self.player.size,
                orb.x,
                orb.y,
                self.config.orb_size,
            ) {
                self.collect_orb(i);
            }
        }
    }

    /// Remove one orb and apply its rewards: score +1, brightness +10
    /// (capped at 255).
    fn collect_orb(&mut self, index: usize) {
        let orb = self.orbs.remove(index);
        self.score += 1;
        self.brightness = self.brightness.saturating_add(BRIGHTNESS_STEP);
        self.events.orb_collected.send(OrbCollected {
            x: orb.x,
            y: orb.y,
            score: self.score,
            brightness: self.brightness,
        });
    }

    /// Step 4: the first enemy overlapping the player ends the session.
    fn check_enemy_contact(&mut self) {
        for enemy in &self.enemies {
            if circles_overlap(
                self.player.x,
                self.player.y,
                self.player.size,
                enemy.x,
                enemy.y,
                self.config.enemy_size,
            ) {
                self.game_over = true;
                self.events.player_hit.send(PlayerHit {
                    x: enemy.x,
                    y: enemy.y,
                });
                println!("Hit enemy - game over at score {}", self.score);
                break;
            }
        }
    }

    /// Step 6: one extra orb every `orb_spawn_interval` frames and one extra
    /// enemy every `enemy_spawn_interval` frames.
    fn periodic_spawns(&mut self) {
        self.frames += 1;

        if self.frames % self.config.orb_spawn_interval == 0 {
            let orb = spawn_orb(&mut self.rng, &self.config, self.canvas);
            self.orbs.push(orb);
        }
        if self.frames % self.config.enemy_spawn_interval == 0 {
            let enemy = spawn_enemy(&mut self.rng, &self.config, self.canvas, &self.player);
            self.enemies.push(enemy);
        }
    }
}
