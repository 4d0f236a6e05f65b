use std::fmt;

/// 8-bit RGBA color serialized as a CSS `#rrggbbaa` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Star palette, picked uniformly per particle.
pub const PALETTE: [Rgba; 6] = [
    Rgba::rgb(0xff, 0xff, 0xff), // white
    Rgba::rgb(0xff, 0xe4, 0xb5), // moccasin
    Rgba::rgb(0xff, 0xd7, 0x00), // gold
    Rgba::rgb(0x87, 0xce, 0xeb), // sky blue
    Rgba::rgb(0xff, 0x69, 0xb4), // hot pink
    Rgba::rgb(0x93, 0x70, 0xdb), // medium purple
];

pub const TRAIL_COLOR: Rgba = Rgba::rgb(0, 0, 0).with_alpha(0x33);

// Core glow stops: white 0.3 -> blue violet 0.1 -> transparent
pub const CORE_GLOW_CENTER: Rgba = Rgba::rgb(0xff, 0xff, 0xff).with_alpha(0x4d);
pub const CORE_GLOW_MID: Rgba = Rgba::rgb(0x8a, 0x2b, 0xe2).with_alpha(0x1a);
pub const CORE_GLOW_EDGE: Rgba = Rgba::rgb(0x8a, 0x2b, 0xe2).with_alpha(0x00);

/// Map a perspective scale to an opacity byte: `round(min(1, scale) * 255)`.
#[inline]
pub fn alpha_byte(scale: f64) -> u8 {
    (scale.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a fractional opacity in [0, 1] to a byte.
#[inline]
pub fn opacity_to_byte(opacity: f64) -> u8 {
    alpha_byte(opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_is_lowercase_hex_with_alpha() {
        assert_eq!(PALETTE[1].with_alpha(0x0a).to_css(), "#ffe4b50a");
        assert_eq!(TRAIL_COLOR.to_css(), "#00000033");
    }

    #[test]
    fn trail_alpha_byte_is_exactly_one_fifth() {
        assert_eq!(opacity_to_byte(crate::TRAIL_ALPHA), TRAIL_COLOR.a);
    }
}
