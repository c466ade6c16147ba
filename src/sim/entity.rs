//! Entity types
//!
//! Every entity advances one step per frame. Speeds are in pixels per frame,
//! matching the display-refresh-driven loop.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The player's basket at the bottom of the surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left x; y is the rim line hearts are caught against
    pub pos: Vec2,
    pub size: Vec2,
    /// Pending horizontal displacement applied on the next update
    pub dx: f32,
}

impl Player {
    /// Centered horizontally, anchored near the bottom of the surface
    pub fn new(surface: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                surface.x / 2.0 - PLAYER_WIDTH / 2.0,
                surface.y - PLAYER_BOTTOM_OFFSET,
            ),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            dx: 0.0,
        }
    }

    /// Position control: center the basket on the pointer
    pub fn follow_pointer(&mut self, pointer_x: f32) {
        self.pos.x = pointer_x - self.size.x / 2.0;
    }

    /// Apply displacement and clamp inside `[0, surface_width - w]`
    pub fn update(&mut self, surface_width: f32) {
        self.pos.x += self.dx;
        let max_x = (surface_width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    /// Keep the basket anchored to the bottom after a resize
    pub fn anchor(&mut self, surface_height: f32) {
        self.pos.y = surface_height - PLAYER_BOTTOM_OFFSET;
    }

    /// Horizontal catch span `[x, x + w)`
    pub fn span(&self) -> (f32, f32) {
        (self.pos.x, self.pos.x + self.size.x)
    }
}

/// A falling heart worth one point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingHeart {
    pub id: u32,
    /// Top-center of the heart shape
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    /// Hue in degrees
    pub hue: f32,
}

impl FallingHeart {
    /// Random heart just above the top edge
    pub fn random(id: u32, surface_width: f32, rng: &mut impl Rng) -> Self {
        let size = rng.random_range(HEART_SIZE_MIN..HEART_SIZE_MAX);
        let x = rng.random::<f32>() * (surface_width - size).max(0.0);
        Self {
            id,
            pos: Vec2::new(x, -size),
            size,
            speed: rng.random_range(HEART_SPEED_MIN..HEART_SPEED_MAX),
            hue: rng.random_range(HEART_HUE_MIN..HEART_HUE_MAX),
        }
    }

    pub fn update(&mut self) {
        self.pos.y += self.speed;
    }

    /// Leading (bottom) edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// Fully past the bottom of the surface
    pub fn is_below(&self, surface_height: f32) -> bool {
        self.pos.y > surface_height
    }
}

/// Decorative heart drifting up behind everything
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingHeart {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
}

impl FloatingHeart {
    /// Random heart just below the bottom edge
    pub fn random(surface: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random::<f32>() * surface.x,
                surface.y + FLOATING_MARGIN,
            ),
            size: rng.random_range(FLOATING_SIZE_MIN..FLOATING_SIZE_MAX),
            speed: rng.random_range(FLOATING_SPEED_MIN..FLOATING_SPEED_MAX),
            opacity: rng.random_range(FLOATING_OPACITY_MIN..FLOATING_OPACITY_MAX),
        }
    }

    pub fn update(&mut self) {
        self.pos.y -= self.speed;
    }

    pub fn is_gone(&self) -> bool {
        self.pos.y < -FLOATING_MARGIN
    }
}

/// A spark from a caught heart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Starts at 100, used as alpha percentage
    pub life: f32,
}

impl Particle {
    pub fn random(pos: Vec2, rng: &mut impl Rng) -> Self {
        let mut axis = || (rng.random::<f32>() - 0.5) * 2.0 * PARTICLE_SPEED_MAX;
        let vel = Vec2::new(axis(), axis());
        Self {
            pos,
            vel,
            size: rng.random_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            life: PARTICLE_LIFE,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= PARTICLE_DECAY;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Render alpha in [0, 1]
    pub fn alpha(&self) -> f32 {
        (self.life / PARTICLE_LIFE).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_player_starts_centered() {
        let player = Player::new(Vec2::new(800.0, 600.0));
        assert_eq!(player.pos.x, 350.0);
        assert_eq!(player.pos.y, 500.0);
    }

    #[test]
    fn test_player_clamps_to_surface() {
        let mut player = Player::new(Vec2::new(800.0, 600.0));
        player.follow_pointer(-300.0);
        player.update(800.0);
        assert_eq!(player.pos.x, 0.0);

        player.follow_pointer(5000.0);
        player.update(800.0);
        assert_eq!(player.pos.x, 700.0);
    }

    #[test]
    fn test_heart_attributes_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..500 {
            let heart = FallingHeart::random(id, 800.0, &mut rng);
            assert!((HEART_SIZE_MIN..HEART_SIZE_MAX).contains(&heart.size));
            assert!((HEART_SPEED_MIN..HEART_SPEED_MAX).contains(&heart.speed));
            assert!((HEART_HUE_MIN..HEART_HUE_MAX).contains(&heart.hue));
            assert!(heart.pos.x >= 0.0 && heart.pos.x <= 800.0 - heart.size);
            assert_eq!(heart.pos.y, -heart.size);
        }
    }

    #[test]
    fn test_floating_heart_leaves_top() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut heart = FloatingHeart::random(Vec2::new(400.0, 300.0), &mut rng);
        assert_eq!(heart.pos.y, 320.0);
        let mut frames = 0;
        while !heart.is_gone() {
            heart.update();
            frames += 1;
            assert!(frames < 10_000, "floating heart never left the surface");
        }
        assert!(heart.pos.y < -FLOATING_MARGIN);
    }

    #[test]
    fn test_particle_dies_after_fifty_updates() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particle = Particle::random(Vec2::ZERO, &mut rng);
        for _ in 0..49 {
            particle.update();
            assert!(!particle.is_dead());
        }
        particle.update();
        assert!(particle.is_dead());
        assert_eq!(particle.alpha(), 0.0);
    }

    #[test]
    fn test_particle_velocity_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..500 {
            let p = Particle::random(Vec2::ZERO, &mut rng);
            assert!(p.vel.x >= -PARTICLE_SPEED_MAX && p.vel.x < PARTICLE_SPEED_MAX);
            assert!(p.vel.y >= -PARTICLE_SPEED_MAX && p.vel.y < PARTICLE_SPEED_MAX);
            assert!((PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX).contains(&p.size));
        }
    }
}
