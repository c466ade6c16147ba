//! The "no" button that never lets itself be pressed

use glam::Vec2;
use rand::Rng;

/// Label shown once the button has started running away
pub const RUNAWAY_LABEL: &str = "Further Audit Required 😅";

/// Position and label of the negative-choice control
#[derive(Debug, Clone)]
pub struct RunawayButton {
    /// Fixed viewport position; `None` until the first dodge (laid out by CSS)
    pub pos: Option<Vec2>,
    /// Rendered size of the control
    pub size: Vec2,
    /// Replacement label, set on the first dodge
    pub label: Option<&'static str>,
    /// Number of times it has moved
    pub dodges: u32,
}

impl RunawayButton {
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: None,
            size,
            label: None,
            dodges: 0,
        }
    }

    /// Jump to a random spot that keeps the control fully inside the viewport
    pub fn dodge(&mut self, viewport: Vec2, rng: &mut impl Rng) -> Vec2 {
        let room = (viewport - self.size).max(Vec2::ZERO);
        let pos = Vec2::new(rng.random::<f32>() * room.x, rng.random::<f32>() * room.y);
        self.pos = Some(pos);
        self.label = Some(RUNAWAY_LABEL);
        self.dodges += 1;
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_dodge_stays_in_viewport() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut button = RunawayButton::new(Vec2::new(120.0, 40.0));
        let viewport = Vec2::new(375.0, 667.0);
        for _ in 0..200 {
            let pos = button.dodge(viewport, &mut rng);
            assert!(pos.x >= 0.0 && pos.x + button.size.x <= viewport.x);
            assert!(pos.y >= 0.0 && pos.y + button.size.y <= viewport.y);
        }
        assert_eq!(button.dodges, 200);
        assert_eq!(button.label, Some(RUNAWAY_LABEL));
    }

    #[test]
    fn test_oversized_button_pins_to_origin() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut button = RunawayButton::new(Vec2::new(500.0, 40.0));
        let pos = button.dodge(Vec2::new(300.0, 300.0), &mut rng);
        assert_eq!(pos.x, 0.0);
    }
}
