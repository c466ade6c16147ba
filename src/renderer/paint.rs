//! Colors and fills for 2D drawing

/// A solid color, expressed the way the canvas expects it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// 0xRRGGBB
    Hex(u32),
    /// Hue in degrees, saturation and lightness in percent
    Hsl { h: f32, s: f32, l: f32 },
}

impl Color {
    /// CSS color string
    pub fn to_css(&self) -> String {
        match self {
            Color::Hex(rgb) => format!("#{:06x}", rgb & 0xff_ffff),
            Color::Hsl { h, s, l } => format!("hsl({}, {}%, {}%)", h, s, l),
        }
    }
}

/// A color with a global alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    /// 0-1
    pub alpha: f32,
}

impl Paint {
    pub const fn solid(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }

    pub fn with_alpha(color: Color, alpha: f32) -> Self {
        Self {
            color,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BASKET: Color = Color::Hex(0xff4d6d);
    pub const BASKET_RIM: Color = Color::Hex(0xc9184a);
    pub const FLOATING_HEART: Color = Color::Hex(0xff4d6d);
    pub const PARTICLE: Color = Color::Hex(0xffffff);

    /// Falling heart color for a hue in the pink/red band
    pub fn heart(hue: f32) -> Color {
        Color::Hsl {
            h: hue,
            s: 100.0,
            l: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        assert_eq!(colors::BASKET.to_css(), "#ff4d6d");
        assert_eq!(Color::Hex(0x00000f).to_css(), "#00000f");
        assert_eq!(colors::heart(350.0).to_css(), "hsl(350, 100%, 60%)");
    }

    #[test]
    fn test_alpha_clamped() {
        assert_eq!(Paint::with_alpha(colors::PARTICLE, 1.5).alpha, 1.0);
        assert_eq!(Paint::with_alpha(colors::PARTICLE, -0.5).alpha, 0.0);
    }
}
