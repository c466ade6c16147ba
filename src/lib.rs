//! Heart Catch - catch falling hearts, then answer the question
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, collisions, score)
//! - `scene`: Scene state machine, timed cues and the story reveal
//! - `renderer`: Drawing surface abstraction and entity shapes
//! - `platform`: Browser DOM helpers
//! - `session`: The single owned game session tying it all together

pub mod platform;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::GameSession;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Score needed to trigger the proposal
    pub const WIN_SCORE: u32 = 15;
    /// Per-frame spawn probability for both heart kinds
    pub const SPAWN_PROBABILITY: f32 = 0.02;
    /// Particles emitted per caught heart
    pub const PARTICLE_BURST: usize = 5;

    /// Player basket
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Distance from the bottom of the surface to the player's y
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;

    /// Falling hearts: size in [min, max), speed in px/frame
    pub const HEART_SIZE_MIN: f32 = 20.0;
    pub const HEART_SIZE_MAX: f32 = 40.0;
    pub const HEART_SPEED_MIN: f32 = 2.0;
    pub const HEART_SPEED_MAX: f32 = 5.0;
    /// Hue band in degrees
    pub const HEART_HUE_MIN: f32 = 340.0;
    pub const HEART_HUE_MAX: f32 = 360.0;

    /// Floating background hearts
    pub const FLOATING_SIZE_MIN: f32 = 10.0;
    pub const FLOATING_SIZE_MAX: f32 = 25.0;
    pub const FLOATING_SPEED_MIN: f32 = 0.3;
    pub const FLOATING_SPEED_MAX: f32 = 0.8;
    pub const FLOATING_OPACITY_MIN: f32 = 0.3;
    pub const FLOATING_OPACITY_MAX: f32 = 0.8;
    /// Spawn below the bottom edge / cull above the top edge by this margin
    pub const FLOATING_MARGIN: f32 = 20.0;

    /// Particles
    pub const PARTICLE_LIFE: f32 = 100.0;
    pub const PARTICLE_DECAY: f32 = 2.0;
    pub const PARTICLE_SIZE_MIN: f32 = 2.0;
    pub const PARTICLE_SIZE_MAX: f32 = 7.0;
    /// Velocity per axis in [-max, max)
    pub const PARTICLE_SPEED_MAX: f32 = 2.0;

    /// Scene timing (milliseconds)
    pub const PROPOSAL_DELAY_MS: f64 = 600.0;
    pub const CELEBRATION_DELAY_MS: f64 = 600.0;
    pub const HIDDEN_MESSAGE_DELAY_MS: f64 = 3000.0;
    pub const STORY_CHAR_MS: f64 = 30.0;
    pub const STORY_LINE_PAUSE_MS: f64 = 500.0;

    /// Frame time clamp so a backgrounded tab doesn't flush every cue at once
    pub const MAX_FRAME_MS: f64 = 100.0;
}
