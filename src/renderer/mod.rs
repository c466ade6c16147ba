//! 2D rendering
//!
//! The simulation never draws directly. Each frame the session clears a
//! `Surface` and paints entities through the `Draw` trait, back to front.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod paint;
pub mod recorder;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use paint::{Color, Paint};
pub use recorder::{DrawCommand, RecordingSurface};
pub use shapes::{ArcShape, CubicBezier, Draw, Path, heart_path};

use crate::sim::{GamePhase, GameState};

/// Minimal 2D drawing backend
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self);
    fn fill_arc(&mut self, arc: &ArcShape, paint: Paint);
    fn stroke_arc(&mut self, arc: &ArcShape, paint: Paint, line_width: f32);
    fn fill_path(&mut self, path: &Path, paint: Paint);
}

/// Paint the current frame: background hearts always, gameplay while playing
pub fn render(state: &GameState, surface: &mut dyn Surface) {
    surface.clear();

    for heart in &state.floating {
        heart.draw(surface);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    if let Some(player) = &state.player {
        player.draw(surface);
    }
    for heart in &state.hearts {
        heart.draw(surface);
    }
    for particle in &state.particles {
        particle.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_start_screen_draws_only_background() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0));
        state.spawn_floating();
        state.spawn_heart();

        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert_eq!(surface.shapes().count(), 1);
    }

    #[test]
    fn test_playing_draw_order() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0));
        state.start();
        state.spawn_floating();
        state.spawn_heart();
        state.spawn_particles(Vec2::new(50.0, 50.0));

        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);
        let shapes: Vec<_> = surface.shapes().collect();

        // floating, basket bowl + rim, heart, 5 particles
        assert_eq!(shapes.len(), 1 + 2 + 1 + crate::consts::PARTICLE_BURST);
        assert!(matches!(shapes[2], DrawCommand::StrokeArc(_, _, w) if *w == 5.0));
        assert!(matches!(shapes[3], DrawCommand::FillPath(..)));
    }

    #[test]
    fn test_particle_alpha_follows_life() {
        let mut state = GameState::new(1, Vec2::new(800.0, 600.0));
        state.start();
        state.floating_enabled = false;
        state.spawn_particles(Vec2::ZERO);
        for p in &mut state.particles {
            p.life = 40.0;
        }

        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);
        let alphas: Vec<f32> = surface
            .shapes()
            .filter_map(|c| match c {
                DrawCommand::FillArc(arc, paint) if arc.end == std::f32::consts::TAU => {
                    Some(paint.alpha)
                }
                _ => None,
            })
            .collect();
        assert_eq!(alphas.len(), crate::consts::PARTICLE_BURST);
        assert!(alphas.iter().all(|a| (*a - 0.4).abs() < 1e-6));
    }
}
