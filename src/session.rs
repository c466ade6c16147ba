//! The single owned game session
//!
//! Holds the simulation, the scene controller and the settings. Platform
//! glue forwards input here and calls `frame` once per display refresh.

use glam::Vec2;

use crate::consts::MAX_FRAME_MS;
use crate::renderer::{Surface, render};
use crate::scene::{SceneController, SceneUpdate, Screen};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Default size of the negative-choice control, before the DOM reports it
pub const NO_BUTTON_SIZE: Vec2 = Vec2::new(120.0, 48.0);

/// Everything one frame produced
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    pub events: Vec<GameEvent>,
    pub scene: SceneUpdate,
}

impl FrameReport {
    /// Latest meter value, if the score moved this frame
    pub fn meter(&self) -> Option<f32> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::ScoreChanged { meter, .. } => Some(*meter),
            _ => None,
        })
    }
}

/// Game state, scene flow and settings behind one owner
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    pub scene: SceneController,
    pub settings: Settings,
    last_frame_ms: Option<f64>,
}

impl GameSession {
    pub fn new(settings: Settings, seed: u64, surface: Vec2) -> Self {
        let mut state = GameState::new(settings.seed.unwrap_or(seed), surface);
        state.particles_enabled = settings.particles;
        state.floating_enabled = settings.floating_hearts;

        let mut scene = SceneController::new(NO_BUTTON_SIZE);
        scene.reduced_motion = settings.reduced_motion;

        Self {
            state,
            scene,
            settings,
            last_frame_ms: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn screen(&self) -> Screen {
        self.scene.screen
    }

    /// Start button
    pub fn start(&mut self) -> bool {
        self.scene.start(&mut self.state)
    }

    /// Absolute pointer or touch x
    pub fn pointer_moved(&mut self, x: f32) {
        self.state.pointer_moved(x);
    }

    /// Viewport resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// Affirmative choice
    pub fn accept(&mut self) -> bool {
        self.scene.accept(&self.state)
    }

    /// Negative choice hovered/touched; returns the control's new position
    pub fn dodge(&mut self, viewport: Vec2) -> Option<Vec2> {
        self.scene
            .dodge(self.state.phase, viewport, &mut self.state.rng)
    }

    /// Report the real size of the negative-choice control
    pub fn set_no_button_size(&mut self, size: Vec2) {
        self.scene.no_button.size = size;
    }

    /// One animation frame at timestamp `now_ms`: bring scene timers up to
    /// this frame, simulate, then draw
    pub fn frame(&mut self, surface: &mut dyn Surface, now_ms: f64) -> FrameReport {
        let elapsed = match self.last_frame_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        // Cues raised by this tick are scheduled against this frame's clock
        let scene = self.scene.advance(&mut self.state, elapsed);
        let events = tick(&mut self.state);
        for event in &events {
            self.scene.handle_event(event);
        }

        render(&self.state, surface);
        FrameReport { events, scene }
    }
}
