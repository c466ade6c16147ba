//! Catch detection between the basket and falling hearts
//!
//! A discrete per-frame test, not a swept one: the heart's bottom edge must
//! have reached the basket rim and its x must sit inside the basket span on
//! a sampled frame.

use super::entity::{FallingHeart, Player};

/// What happens to a heart after this frame's update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartFate {
    /// Still in play
    Falling,
    /// Landed in the basket
    Caught,
    /// Fell off the bottom of the surface
    Missed,
}

/// True when the heart's leading edge is at or below the rim and its x lies
/// within `[player.x, player.x + player.w)`
pub fn heart_caught(heart: &FallingHeart, player: &Player) -> bool {
    let (left, right) = player.span();
    heart.bottom() >= player.pos.y && heart.pos.x >= left && heart.pos.x < right
}

/// Classify a heart; a catch always wins over a miss on the same frame
pub fn heart_fate(heart: &FallingHeart, player: &Player, surface_height: f32) -> HeartFate {
    if heart_caught(heart, player) {
        HeartFate::Caught
    } else if heart.is_below(surface_height) {
        HeartFate::Missed
    } else {
        HeartFate::Falling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player() -> Player {
        // x = 350..450, rim at y = 500
        Player::new(Vec2::new(800.0, 600.0))
    }

    fn heart_at(x: f32, y: f32) -> FallingHeart {
        FallingHeart {
            id: 1,
            pos: Vec2::new(x, y),
            size: 30.0,
            speed: 3.0,
            hue: 350.0,
        }
    }

    #[test]
    fn test_catch_inside_span() {
        assert!(heart_caught(&heart_at(400.0, 470.0), &player()));
        assert!(heart_caught(&heart_at(350.0, 480.0), &player()));
    }

    #[test]
    fn test_span_is_half_open() {
        assert!(!heart_caught(&heart_at(450.0, 480.0), &player()));
        assert!(!heart_caught(&heart_at(349.9, 480.0), &player()));
    }

    #[test]
    fn test_above_rim_not_caught() {
        // bottom edge at 469 < 500
        assert!(!heart_caught(&heart_at(400.0, 439.0), &player()));
    }

    #[test]
    fn test_fate_catch_wins_over_miss() {
        let p = player();
        assert_eq!(heart_fate(&heart_at(400.0, 700.0), &p, 600.0), HeartFate::Caught);
        assert_eq!(heart_fate(&heart_at(10.0, 700.0), &p, 600.0), HeartFate::Missed);
        assert_eq!(heart_fate(&heart_at(10.0, 100.0), &p, 600.0), HeartFate::Falling);
    }
}
