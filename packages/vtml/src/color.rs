//! Hex colors (`#RGB` / `#RRGGBB`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from arbitrary integers, clamping each channel into 0..=255
    pub fn from_clamped(r: i64, g: i64, b: i64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    pub fn to_hex(self) -> String {
        to_hex_rgb(self)
    }

    pub fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub fn opaque(self) -> Rgba {
        self.with_alpha(u8::MAX)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid hex color: {0:?}")]
pub struct ColorParseError(pub String);

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s).ok_or_else(|| ColorParseError(s.to_string()))
    }
}

/// A resolved foreground color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Replace the alpha channel with `opacity` (0..=1) scaled to 0..=255
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rgb())?;
        if self.a != u8::MAX {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Parse `#RGB` or `#RRGGBB` (hash optional, hex digits in any case).
///
/// ```
/// use workbench_vtml::{parse_hex_color, Rgb};
///
/// assert_eq!(parse_hex_color("#ffcc00"), Some(Rgb::new(0xFF, 0xCC, 0x00)));
/// assert_eq!(parse_hex_color("fc0"), Some(Rgb::new(0xFF, 0xCC, 0x00)));
/// assert_eq!(parse_hex_color("red"), None);
/// ```
pub fn parse_hex_color(input: &str) -> Option<Rgb> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    let channel = |at: usize| u8::from_str_radix(&expanded[at..at + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format as `#RRGGBB` with uppercase digits
pub fn to_hex_rgb(color: Rgb) -> String {
    color.to_string()
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form_doubles_digits() {
        assert_eq!(parse_hex_color("#abc"), Some(Rgb::new(0xAA, 0xBB, 0xCC)));
    }

    #[test]
    fn test_rejects_other_forms() {
        for input in ["", "#", "#ff", "#ffcc00ff", "#ggg", "+f+f+f", "#ffcc0", " # fff"] {
            assert_eq!(parse_hex_color(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_hex_color("  #FFCC00 "), Some(Rgb::new(0xFF, 0xCC, 0x00)));
    }

    #[test]
    fn test_hex_roundtrip_all_channels() {
        for v in 0..=255u8 {
            for color in [Rgb::new(v, 0, 255 - v), Rgb::new(v, v, v), Rgb::new(255 - v, v, 17)] {
                assert_eq!(parse_hex_color(&to_hex_rgb(color)), Some(color));
            }
        }
    }

    #[test]
    fn test_from_clamped() {
        assert_eq!(Rgb::from_clamped(-5, 128, 999), Rgb::new(0, 128, 255));
    }

    #[test]
    fn test_opacity_sets_alpha() {
        let c = Rgb::new(0x11, 0x22, 0x33).opaque().with_opacity(0.5);
        assert_eq!(c.a, 128);
        assert_eq!(c.to_string(), "#11223380");
        assert_eq!(Rgb::new(1, 2, 3).opaque().to_string(), "#010203");
    }
}
