//! Per-frame simulation tick
//!
//! One call per display refresh. Order matters and mirrors the draw order:
//! background hearts first (any phase), then gameplay while `Playing`.

use super::collision::{HeartFate, heart_fate};
use super::score::ScoreChange;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one frame, returning what happened
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Background hearts run on every screen
    if state.floating_enabled && state.floating_spawner.roll(&mut state.rng) {
        state.spawn_floating();
    }
    for heart in &mut state.floating {
        heart.update();
    }
    state.floating.retain(|h| !h.is_gone());

    if state.phase != GamePhase::Playing {
        return events;
    }

    let width = state.surface.x;
    if let Some(player) = &mut state.player {
        player.update(width);
    }

    if state.heart_spawner.roll(&mut state.rng) {
        state.spawn_heart();
    }

    resolve_hearts(state, &mut events);

    for particle in &mut state.particles {
        particle.update();
    }
    state.particles.retain(|p| !p.is_dead());

    events
}

/// Move every falling heart, then catch or cull it.
///
/// The list is rebuilt rather than spliced in place, so each heart is
/// visited exactly once per frame and removed at most once.
fn resolve_hearts(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let Some(player) = state.player.clone() else {
        return;
    };
    let height = state.surface.y;
    let hearts = std::mem::take(&mut state.hearts);
    let mut kept = Vec::with_capacity(hearts.len());

    for mut heart in hearts {
        heart.update();
        match heart_fate(&heart, &player, height) {
            HeartFate::Falling => kept.push(heart),
            HeartFate::Missed => events.push(GameEvent::HeartMissed { id: heart.id }),
            HeartFate::Caught => {
                events.push(GameEvent::HeartCaught {
                    id: heart.id,
                    pos: heart.pos,
                });
                state.spawn_particles(heart.pos);

                let change = state.score.increment();
                events.push(GameEvent::ScoreChanged {
                    score: state.score.score(),
                    meter: state.score.meter_percent(),
                });
                if let ScoreChange::TargetReached(score) = change {
                    log::info!("Target reached with {} hearts", score);
                    state.phase = GamePhase::Proposal;
                    events.push(GameEvent::TargetReached);
                }
            }
        }
    }

    state.hearts = kept;
}
