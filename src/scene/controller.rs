//! Scene state machine
//!
//! Start → Playing → Proposal → Celebration, forward only. Delayed steps
//! (screen switches, the hidden message) go through a `Timeline` so they can
//! be cancelled and stepped deterministically.
//!
//! The clock moves to the current frame time before anything is scheduled
//! against it. Choices made between frames are queued and scheduled on the
//! next frame, so a delay never starts before the input that caused it.

use glam::Vec2;
use rand::Rng;

use super::runaway::RunawayButton;
use super::story::Typewriter;
use super::timeline::Timeline;
use crate::consts::*;
use crate::sim::{GameEvent, GamePhase, GameState};

/// Which full-screen container is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    /// No overlay, the canvas is the game
    Gameplay,
    Proposal,
    Celebration,
}

impl Screen {
    /// DOM id of the overlay container, if any
    pub fn element_id(&self) -> Option<&'static str> {
        match self {
            Screen::Start => Some("start-screen"),
            Screen::Gameplay => None,
            Screen::Proposal => Some("proposal-screen"),
            Screen::Celebration => Some("celebration-screen"),
        }
    }
}

/// Delayed scene steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCue {
    /// Show the proposal screen and start the story
    ShowProposal,
    /// Switch to the celebration screen
    ShowCelebration,
    /// Fade in the hidden message on the celebration screen
    RevealHiddenMessage,
}

/// What changed during `SceneController::advance`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneUpdate {
    pub cues: Vec<SceneCue>,
    pub story_changed: bool,
}

/// Drives screen visibility from game events and user choices
#[derive(Debug, Clone)]
pub struct SceneController {
    pub screen: Screen,
    pub timeline: Timeline<SceneCue>,
    /// Cues requested between frames, scheduled on the next `advance`
    queued: Vec<(f64, SceneCue)>,
    pub story: Typewriter,
    pub no_button: RunawayButton,
    /// The affirmative choice was made
    pub accepted: bool,
    pub hidden_message_visible: bool,
    /// Reveal the story at once instead of typing it
    pub reduced_motion: bool,
}

impl SceneController {
    /// `no_button_size` is the rendered size of the negative control
    pub fn new(no_button_size: Vec2) -> Self {
        Self {
            screen: Screen::Start,
            timeline: Timeline::new(),
            queued: Vec::new(),
            story: Typewriter::default(),
            no_button: RunawayButton::new(no_button_size),
            accepted: false,
            hidden_message_visible: false,
            reduced_motion: false,
        }
    }

    /// Start button: reset the game and hide the start screen
    pub fn start(&mut self, state: &mut GameState) -> bool {
        if !state.start() {
            return false;
        }
        if self.timeline.pending() > 0 {
            log::debug!("Cancelling {} pending cues", self.timeline.pending());
        }
        self.timeline.clear();
        self.queued.clear();
        self.story.cancel();
        self.screen = Screen::Gameplay;
        true
    }

    /// React to simulation events. Call after `advance` for the same frame.
    pub fn handle_event(&mut self, event: &GameEvent) {
        if *event == GameEvent::TargetReached {
            log::info!("Proposal in {} ms", PROPOSAL_DELAY_MS);
            self.timeline.schedule(PROPOSAL_DELAY_MS, SceneCue::ShowProposal);
        }
    }

    /// Affirmative choice. Only counts once, and only on the proposal screen.
    pub fn accept(&mut self, state: &GameState) -> bool {
        if state.phase != GamePhase::Proposal || self.screen != Screen::Proposal || self.accepted
        {
            return false;
        }
        self.accepted = true;
        self.queued
            .push((CELEBRATION_DELAY_MS, SceneCue::ShowCelebration));
        log::info!("Yes!");
        true
    }

    /// Negative choice hovered or touched: move the control away.
    ///
    /// Never changes the phase.
    pub fn dodge(
        &mut self,
        phase: GamePhase,
        viewport: Vec2,
        rng: &mut impl Rng,
    ) -> Option<Vec2> {
        if phase != GamePhase::Proposal {
            return None;
        }
        let pos = self.no_button.dodge(viewport, rng);
        log::debug!("No button dodged ({} times)", self.no_button.dodges);
        Some(pos)
    }

    /// Advance timers by `elapsed_ms`, apply every cue that came due, then
    /// schedule queued cues from the new clock
    pub fn advance(&mut self, state: &mut GameState, elapsed_ms: f64) -> SceneUpdate {
        let mut update = SceneUpdate {
            story_changed: self.story.advance(elapsed_ms),
            ..Default::default()
        };

        let due = self.timeline.advance(elapsed_ms);
        for (delay, cue) in self.queued.drain(..) {
            self.timeline.schedule(delay, cue);
        }

        for cue in due {
            match cue {
                SceneCue::ShowProposal => {
                    self.screen = Screen::Proposal;
                    self.story.start();
                    if self.reduced_motion {
                        self.story.finish();
                    }
                    update.story_changed = true;
                    log::info!("Proposal screen shown");
                }
                SceneCue::ShowCelebration => {
                    state.phase = GamePhase::Celebration;
                    self.screen = Screen::Celebration;
                    self.timeline
                        .schedule(HIDDEN_MESSAGE_DELAY_MS, SceneCue::RevealHiddenMessage);
                    log::info!("Celebration screen shown");
                }
                SceneCue::RevealHiddenMessage => {
                    self.hidden_message_visible = true;
                }
            }
            update.cues.push(cue);
        }
        update
    }
}
