//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - One tick per display frame
//! - Seeded RNG only
//! - Filter-based pruning, so entity lists are never mutated mid-iteration

pub mod collision;
pub mod entity;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{HeartFate, heart_caught, heart_fate};
pub use entity::{FallingHeart, FloatingHeart, Particle, Player};
pub use score::{ScoreChange, ScoreTracker};
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
