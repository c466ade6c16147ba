//! Shape generation for the game's 2D primitives

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::Surface;
use super::paint::{Paint, colors};
use crate::sim::{FallingHeart, FloatingHeart, Particle, Player};

/// A circular arc, swept clockwise in screen space (y down) from `start` to
/// `end`, like `CanvasRenderingContext2d::arc` with `anticlockwise = false`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub center: Vec2,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
}

impl ArcShape {
    pub fn new(center: Vec2, radius: f32, start: f32, end: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            start,
            end,
        }
    }

    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::new(center, radius, 0.0, TAU)
    }
}

/// One cubic Bézier segment continuing from the previous point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub c1: Vec2,
    pub c2: Vec2,
    pub end: Vec2,
}

/// A closed path made of cubic segments
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub start: Vec2,
    pub curves: Vec<CubicBezier>,
}

/// Heart outline whose top notch sits at `top` and tip at `top + size` below
pub fn heart_path(top: Vec2, size: f32) -> Path {
    let Vec2 { x, y } = top;
    let half = size / 2.0;
    let notch = size * 0.3;
    let waist = y + (size + notch) / 2.0;

    Path {
        start: Vec2::new(x, y + notch),
        curves: vec![
            // Top left lobe
            CubicBezier {
                c1: Vec2::new(x, y),
                c2: Vec2::new(x - half, y),
                end: Vec2::new(x - half, y + notch),
            },
            // Down to the tip
            CubicBezier {
                c1: Vec2::new(x - half, waist),
                c2: Vec2::new(x, waist),
                end: Vec2::new(x, y + size),
            },
            // Back up the right side
            CubicBezier {
                c1: Vec2::new(x, waist),
                c2: Vec2::new(x + half, waist),
                end: Vec2::new(x + half, y + notch),
            },
            // Top right lobe, closing at the notch
            CubicBezier {
                c1: Vec2::new(x + half, y),
                c2: Vec2::new(x, y),
                end: Vec2::new(x, y + notch),
            },
        ],
    }
}

/// Something that can paint itself onto a surface
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface);
}

/// Basket rim line width
const RIM_WIDTH: f32 = 5.0;
/// The rim is drawn this far above the bowl
const RIM_LIFT: f32 = 10.0;

impl Draw for Player {
    fn draw(&self, surface: &mut dyn Surface) {
        let radius = self.size.x / 2.0;
        let cx = self.pos.x + radius;

        // Bowl: lower half-disc
        surface.fill_arc(
            &ArcShape::new(Vec2::new(cx, self.pos.y), radius, 0.0, PI),
            Paint::solid(colors::BASKET),
        );
        // Rim: upper half-circle outline
        surface.stroke_arc(
            &ArcShape::new(Vec2::new(cx, self.pos.y - RIM_LIFT), radius, PI, 0.0),
            Paint::solid(colors::BASKET_RIM),
            RIM_WIDTH,
        );
    }
}

impl Draw for FallingHeart {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_path(
            &heart_path(self.pos, self.size),
            Paint::solid(colors::heart(self.hue)),
        );
    }
}

impl Draw for FloatingHeart {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_arc(
            &ArcShape::circle(self.pos, self.size / 2.0),
            Paint::with_alpha(colors::FLOATING_HEART, self.opacity),
        );
    }
}

impl Draw for Particle {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_arc(
            &ArcShape::circle(self.pos, self.size),
            Paint::with_alpha(colors::PARTICLE, self.alpha()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_path_is_closed_and_symmetric() {
        let path = heart_path(Vec2::new(100.0, 50.0), 40.0);
        assert_eq!(path.curves.len(), 4);
        assert_eq!(path.curves[3].end, path.start);

        // Tip straight below the notch
        assert_eq!(path.curves[1].end, Vec2::new(100.0, 90.0));
        // Lobes mirrored around x = 100
        assert_eq!(path.curves[0].end.x, 80.0);
        assert_eq!(path.curves[2].end.x, 120.0);
    }

    #[test]
    fn test_negative_radius_clamped() {
        assert_eq!(ArcShape::circle(Vec2::ZERO, -3.0).radius, 0.0);
    }
}
