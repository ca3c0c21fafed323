//! Game state and core simulation types
//!
//! All mutable state of a running game lives in [`GameState`]; nothing is
//! global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::chain::Chain;
use super::particles::ParticleSystem;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamePhase {
    /// Snakes move, collisions are checked
    Playing,
    /// Enemy caught the player; the red overlay is fading in
    GameOverAnimating {
        /// Overlay opacity, 0 to 1
        fade: f32,
        /// Real time spent at full fade (ms)
        held_ms: f64,
    },
}

impl GamePhase {
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// Overlay opacity (0 while playing)
    pub fn fade(&self) -> f32 {
        match *self {
            GamePhase::Playing => 0.0,
            GamePhase::GameOverAnimating { fade, .. } => fade,
        }
    }
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    /// Drawing surface size
    pub viewport: Vec2,
    /// Last known pointer position
    pub pointer: Vec2,
    pub player: Chain,
    pub enemy: Chain,
    /// Player head follow rate for the next frame
    pub player_speed: f32,
    /// Set on frames where the player head is within bite range.
    ///
    /// Only the renderer reads it: the head glow is drawn 25% larger.
    pub mouth_open: bool,
    /// Index into [`ACCENT_PALETTE`]
    pub accent: usize,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    pub phase: GamePhase,
    /// Drives the player glow pulse
    pub glow_clock: f32,
    /// Frames simulated so far
    pub frame: u64,
    /// Rounds started, including the first
    pub rounds: u32,
}

impl GameState {
    /// New game with default tuning; the pointer starts at the viewport center
    pub fn new(seed: u64, viewport: Vec2) -> Self {
        Self::with_tuning(seed, viewport, Tuning::default())
    }

    pub fn with_tuning(seed: u64, viewport: Vec2, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pointer = viewport / 2.0;
        let player = Chain::trailing(pointer, tuning.segment_count, tuning.segment_spacing);
        let mut enemy = Chain::scattered(
            tuning.segment_count,
            tuning.segment_spacing,
            viewport,
            &mut rng,
        );
        enemy.follow();
        Self {
            seed,
            rng,
            player_speed: tuning.player_speed,
            tuning,
            viewport,
            pointer,
            player,
            enemy,
            mouth_open: false,
            accent: DEFAULT_ACCENT,
            particles: ParticleSystem::new(),
            phase: GamePhase::Playing,
            glow_clock: 0.0,
            frame: 0,
            rounds: 1,
        }
    }

    /// Rebuild both snakes and resume play.
    ///
    /// The player is laid out behind the pointer. The enemy is scattered over
    /// the viewport and pulled into shape behind its head. Particles, accent
    /// color and clocks carry over.
    pub fn reset_round(&mut self) {
        let count = self.tuning.segment_count;
        let spacing = self.tuning.segment_spacing;
        self.player = Chain::trailing(self.pointer, count, spacing);
        self.enemy = Chain::scattered(count, spacing, self.viewport, &mut self.rng);
        self.enemy.follow();
        self.player_speed = self.tuning.player_speed;
        self.mouth_open = false;
        self.phase = GamePhase::Playing;
        self.rounds += 1;
    }

    /// Track a new drawing surface size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    pub fn accent_color(&self) -> &'static str {
        ACCENT_PALETTE[self.accent % ACCENT_PALETTE.len()]
    }

    /// Emit one spark at the current pointer position
    pub fn spawn_pointer_particle(&mut self) {
        self.particles.spawn(self.pointer, &mut self.rng);
    }

    /// Pick a new accent color uniformly from the palette
    pub fn reroll_accent(&mut self) {
        self.accent = self.rng.random_range(0..ACCENT_PALETTE.len());
    }
}
