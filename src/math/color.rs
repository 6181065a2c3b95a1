/// RGB colour with a straight (non-premultiplied) alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Colour from a packed `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse `#RRGGBB` (or `RRGGBB`). Returns None on anything else.
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::hex)
    }

    /// CSS-style hsla: hue in degrees (any value, wrapped), saturation and
    /// lightness as fractions
    pub fn hsla(hue_degrees: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let hue = if hue_degrees.is_finite() {
            hue_degrees.rem_euclid(360.0) / 360.0
        } else {
            0.0
        };
        let [r, g, b] = hsl_to_rgb(hue, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
            a: alpha,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Alpha clamped into [0, 1]; NaN counts as fully transparent
    pub fn opacity(&self) -> f32 {
        if self.a.is_nan() {
            0.0
        } else {
            self.a.clamp(0.0, 1.0)
        }
    }

    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn to_channel(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// HSL → RGB, hue in [0, 1)
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = (h * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_to_rgb_red() {
        let rgb = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!(rgb[1].abs() < 0.01);
        assert!(rgb[2].abs() < 0.01);
    }

    #[test]
    fn test_hsl_to_rgb_white() {
        let rgb = hsl_to_rgb(0.0, 0.0, 1.0);
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!((rgb[1] - 1.0).abs() < 0.01);
        assert!((rgb[2] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_hsla_cyan() {
        let c = Color::hsla(180.0, 1.0, 0.5, 0.15);
        assert_eq!((c.r, c.g, c.b), (0, 255, 255));
        assert_eq!(c.a, 0.15);
    }

    #[test]
    fn test_hsla_wraps_large_hue() {
        assert_eq!(Color::hsla(540.0, 1.0, 0.5, 1.0), Color::hsla(180.0, 1.0, 0.5, 1.0));
        assert_eq!(Color::hsla(-180.0, 1.0, 0.5, 1.0), Color::hsla(180.0, 1.0, 0.5, 1.0));
    }

    #[test]
    fn test_hsla_non_finite_hue() {
        let c = Color::hsla(f32::NAN, 1.0, 0.5, 1.0);
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::hex(0x00F7FF), Color::rgb(0, 247, 255));
        assert_eq!(Color::parse_hex("#ed4543"), Some(Color::rgb(0xed, 0x45, 0x43)));
        assert_eq!(Color::parse_hex("red"), None);
        assert_eq!(Color::hex(0x00F7FF).to_hex_string(), "#00F7FF");
    }

    #[test]
    fn test_opacity_clamps() {
        assert_eq!(Color::WHITE.with_alpha(1.7).opacity(), 1.0);
        assert_eq!(Color::WHITE.with_alpha(-0.3).opacity(), 0.0);
        assert_eq!(Color::WHITE.with_alpha(f32::NAN).opacity(), 0.0);
    }
}
