use std::{fmt, str::FromStr};
use serde::{Serialize, Deserialize};

use super::error::HexParseError;

/// Red, green and blue channels on a 0-255 scale. Values may fall outside
/// that range until they are rounded into a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse::<Color>().ok().map(Color::to_rgb)
}

pub fn rgb_to_hex(red: f64, green: f64, blue: f64) -> String {
    Color::rgb(to_byte(red), to_byte(green), to_byte(blue)).to_string()
}

// saturating cast, NaN maps to 0
fn to_byte(c: f64) -> u8 {
    c.round() as u8
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.red / 255.;
    let g = rgb.green / 255.;
    let b = rgb.blue / 255.;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.;

    let mut h = 0.;
    let mut s = 0.;

    if max != min {
        let d = max - min;
        s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
        h = if max == r {
            (g - b) / d + if g < b { 6. } else { 0. }
        } else if max == g {
            (b - r) / d + 2.
        } else {
            (r - g) / d + 4.
        };
        h /= 6.;
    }

    Hsl {
        hue: h * 360.,
        saturation: s * 100.,
        lightness: l * 100.,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let s = hsl.saturation / 100.;
    let l = hsl.lightness / 100.;

    let k = |n: f64| (n + hsl.hue / 30.) % 12.;
    let a = s * l.min(1. - l);
    let f = |n: f64| l - a * (k(n) - 3.).min(9. - k(n)).min(1.).max(-1.);

    Rgb {
        red: 255. * f(0.),
        green: 255. * f(8.),
        blue: 255. * f(4.),
    }
}

/// An opaque 8-bit sRGB color. Displays and serializes as `#RRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        Color::rgb(to_byte(rgb.red), to_byte(rgb.green), to_byte(rgb.blue))
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        Color::from_rgb(hsl_to_rgb(hsl))
    }

    pub fn to_rgb(self) -> Rgb {
        Rgb {
            red: self.red as f64,
            green: self.green as f64,
            blue: self.blue as f64,
        }
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.to_rgb())
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Accepts exactly six hex digits, case-insensitive, with an optional
/// leading `#`.
impl FromStr for Color {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Color, HexParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 {
            return Err(HexParseError::Length(digits.len()))
        }

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HexParseError::Digit)
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| HexParseError::Digit);

        Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = HexParseError;

    fn try_from(s: String) -> Result<Color, HexParseError> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}
