//! Scene flow layered on top of the simulation
//!
//! The simulation only knows the current phase. Everything that happens on a
//! clock (screen switches, the typed story, the hidden message) lives here.

pub mod controller;
pub mod runaway;
pub mod story;
pub mod timeline;

pub use controller::{SceneController, SceneCue, SceneUpdate, Screen};
pub use runaway::{RUNAWAY_LABEL, RunawayButton};
pub use story::{LINE_BREAK, STORY_LINES, Typewriter};
pub use timeline::Timeline;
