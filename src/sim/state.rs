//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{FallingHeart, FloatingHeart, Particle, Player};
use super::score::ScoreTracker;
use super::spawner::Spawner;
use crate::consts::PARTICLE_BURST;

/// Current scene. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen shown, waiting for the start button
    Start,
    /// Catching hearts
    Playing,
    /// Target reached; proposal screen and story
    Proposal,
    /// Said yes
    Celebration,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::Proposal => "proposal",
            GamePhase::Celebration => "celebration",
        }
    }
}

/// Things that happened during a tick, for the scene layer and the HUD
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    HeartCaught { id: u32, pos: Vec2 },
    HeartMissed { id: u32 },
    /// New score and meter percentage
    ScoreChanged { score: u32, meter: f32 },
    /// Score reached the win target (emitted once per game)
    TargetReached,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Surface size in CSS pixels
    pub surface: Vec2,
    pub score: ScoreTracker,
    /// Created on start
    pub player: Option<Player>,
    pub hearts: Vec<FallingHeart>,
    pub floating: Vec<FloatingHeart>,
    pub particles: Vec<Particle>,
    pub heart_spawner: Spawner,
    pub floating_spawner: Spawner,
    /// Emit particle bursts on catches
    pub particles_enabled: bool,
    /// Spawn background hearts
    pub floating_enabled: bool,
    /// Frames simulated since creation
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Create a new game state on the start screen
    pub fn new(seed: u64, surface: Vec2) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            surface,
            score: ScoreTracker::default(),
            player: None,
            hearts: Vec::new(),
            floating: Vec::new(),
            particles: Vec::new(),
            heart_spawner: Spawner::default(),
            floating_spawner: Spawner::default(),
            particles_enabled: true,
            floating_enabled: true,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset score, basket and falling hearts and enter `Playing`.
    ///
    /// Returns false (and does nothing) outside the start screen.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Start {
            log::warn!("Ignoring start in phase {}", self.phase.as_str());
            return false;
        }
        self.player = Some(Player::new(self.surface));
        self.hearts.clear();
        self.score.reset();
        self.phase = GamePhase::Playing;
        log::info!("Game started (seed {})", self.seed);
        true
    }

    /// Surface resized; re-anchor the basket if there is one
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Vec2::new(width.max(0.0), height.max(0.0));
        if let Some(player) = &mut self.player {
            player.anchor(self.surface.y);
        }
    }

    /// Pointer/touch moved to absolute x
    pub fn pointer_moved(&mut self, x: f32) {
        if let Some(player) = &mut self.player {
            player.follow_pointer(x);
        }
    }

    /// Emit a particle burst at `pos`
    pub fn spawn_particles(&mut self, pos: Vec2) {
        if !self.particles_enabled {
            return;
        }
        for _ in 0..PARTICLE_BURST {
            let particle = Particle::random(pos, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// Spawn one falling heart at the top
    pub fn spawn_heart(&mut self) {
        let id = self.next_entity_id();
        let heart = FallingHeart::random(id, self.surface.x, &mut self.rng);
        self.hearts.push(heart);
    }

    /// Spawn one floating heart at the bottom
    pub fn spawn_floating(&mut self) {
        let heart = FloatingHeart::random(self.surface, &mut self.rng);
        self.floating.push(heart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_on_start_screen() {
        let state = GameState::new(1, Vec2::new(800.0, 600.0));
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.player.is_none());
        assert_eq!(state.score.score(), 0);
    }

    #[test]
    fn test_start_resets_and_only_once() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0));
        state.spawn_heart();
        assert!(state.start());
        assert!(state.hearts.is_empty());
        assert!(state.player.is_some());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.start());
    }

    #[test]
    fn test_resize_without_player_is_noop() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0));
        state.resize(1024.0, 768.0);
        assert!(state.player.is_none());
        assert_eq!(state.surface, Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn test_resize_reanchors_player() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0));
        state.start();
        state.resize(800.0, 900.0);
        assert_eq!(state.player.as_ref().map(|p| p.pos.y), Some(800.0));
    }

    #[test]
    fn test_particle_burst_size() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0));
        state.spawn_particles(Vec2::new(10.0, 10.0));
        assert_eq!(state.particles.len(), PARTICLE_BURST);

        state.particles_enabled = false;
        state.spawn_particles(Vec2::new(10.0, 10.0));
        assert_eq!(state.particles.len(), PARTICLE_BURST);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0));
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }
}
