//! RGBA colour record and a few named colours.

/// One pixel: 8-bit red, green, blue and alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Multiply the colour channels by `intensity`, clamped to [0, 1].
    /// Alpha is left alone.
    #[inline]
    pub fn scale(self, intensity: f32) -> Self {
        let k = intensity.clamp(0.0, 1.0);
        let channel = |c: u8| (c as f32 * k) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
            a: self.a,
        }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(255, 0, 0);

pub const WIREFRAME: Color = WHITE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_keeps_alpha() {
        let c = Color::rgba(200, 100, 50, 128).scale(0.5);
        assert_eq!(c, Color::rgba(100, 50, 25, 128));
    }

    #[test]
    fn scale_clamps_intensity() {
        assert_eq!(WHITE.scale(2.0), WHITE);
        assert_eq!(WHITE.scale(-1.0), BLACK);
    }
}
