//! Color primitives - RGB, HSL and CSS color values
//!
//! Provides:
//! - Hex parsing (3- and 6-digit forms, optional leading `#`)
//! - RGB <-> HSL conversion with percentages for saturation/lightness
//! - Perceived brightness for the text contrast rule
//! - `ColorValue`, the CSS-formatted value stored per palette role

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, ThemeError};

/// Brightness threshold on the 0-255 scale, scaled by 1000 to stay integral
const BRIGHTNESS_THRESHOLD: u32 = 128_000;

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` / `#rrggbb` (the `#` is optional)
    pub fn from_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::invalid_color(input));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ThemeError::invalid_color(input));

        match hex.len() {
            3 => Ok(Self {
                r: channel(&hex[0..1])? * 17,
                g: channel(&hex[1..2])? * 17,
                b: channel(&hex[2..3])? * 17,
            }),
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => Err(ThemeError::invalid_color(input)),
        }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Weighted brightness `299R + 587G + 114B` (Y scaled by 1000)
    pub fn brightness_milli(&self) -> u32 {
        299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
    }

    /// Perceived brightness Y on the 0-255 scale
    pub fn brightness(&self) -> f64 {
        f64::from(self.brightness_milli()) / 1000.0
    }

    /// True when Y >= 128, i.e. dark text reads better on this color
    pub fn is_light(&self) -> bool {
        self.brightness_milli() >= BRIGHTNESS_THRESHOLD
    }

    /// Channels in `0.0..=1.0`, the layout shader uniforms expect
    pub fn to_unit(&self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    pub fn from_unit(rgb: [f32; 3]) -> Self {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]))
    }

    /// Convert to HSL (hue in degrees, saturation/lightness in percent)
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An HSL color with alpha
///
/// Saturation and lightness are percentages clamped to `[0, 100]`; hue is
/// normalized into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
            a: 1.0,
        }
    }

    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = a.clamp(0.0, 1.0);
        self
    }

    /// Convert back to an opaque RGB color (alpha is dropped)
    pub fn to_rgb(&self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = self.h / 60.0;
        let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |v: f64| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a < 1.0 {
            write!(
                f,
                "hsla({:.1}, {:.1}%, {:.1}%, {})",
                self.h, self.s, self.l, self.a
            )
        } else {
            write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
        }
    }
}

/// A resolved value for one palette role, formatted as CSS
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    Rgb(Rgb),
    Rgba(Rgb, f64),
    Hsl(Hsl),
}

impl ColorValue {
    /// Parse a CSS color: `#hex`, `rgb()`, `rgba()`, `hsl()` or `hsla()`
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();

        if s.starts_with('#') {
            return Rgb::from_hex(s).map(ColorValue::Rgb);
        }

        let (name, args) = s
            .strip_suffix(')')
            .and_then(|body| body.split_once('('))
            .ok_or_else(|| ThemeError::invalid_color(input))?;

        let args: Vec<&str> = args.split(',').map(str::trim).collect();

        match (name.trim(), args.len()) {
            ("rgb", 3) => Ok(ColorValue::Rgb(parse_rgb_args(input, &args)?)),
            ("rgba", 4) => Ok(ColorValue::Rgba(
                parse_rgb_args(input, &args[..3])?,
                parse_alpha(input, args[3])?,
            )),
            ("hsl", 3) => parse_hsl_args(input, &args).map(ColorValue::Hsl),
            ("hsla", 4) => {
                let hsl = parse_hsl_args(input, &args[..3])?;
                Ok(ColorValue::Hsl(hsl.with_alpha(parse_alpha(input, args[3])?)))
            }
            _ => Err(ThemeError::invalid_color(input)),
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            ColorValue::Rgb(_) => 1.0,
            ColorValue::Rgba(_, a) => *a,
            ColorValue::Hsl(hsl) => hsl.a,
        }
    }

    /// Opaque RGB for surfaces that cannot express CSS (alpha is dropped)
    pub fn to_rgb(&self) -> Rgb {
        match self {
            ColorValue::Rgb(rgb) | ColorValue::Rgba(rgb, _) => *rgb,
            ColorValue::Hsl(hsl) => hsl.to_rgb(),
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        match self {
            ColorValue::Hsl(hsl) => *hsl,
            ColorValue::Rgb(rgb) => rgb.to_hsl(),
            ColorValue::Rgba(rgb, a) => rgb.to_hsl().with_alpha(*a),
        }
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        ColorValue::Rgb(rgb)
    }
}

impl From<Hsl> for ColorValue {
    fn from(hsl: Hsl) -> Self {
        ColorValue::Hsl(hsl)
    }
}

impl FromStr for ColorValue {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            ColorValue::Rgba(rgb, a) => write!(f, "rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, a),
            ColorValue::Hsl(hsl) => fmt::Display::fmt(hsl, f),
        }
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn parse_rgb_args(input: &str, args: &[&str]) -> Result<Rgb> {
    let channel = |s: &str| s.parse::<u8>().map_err(|_| ThemeError::invalid_color(input));
    Ok(Rgb::new(channel(args[0])?, channel(args[1])?, channel(args[2])?))
}

fn parse_hsl_args(input: &str, args: &[&str]) -> Result<Hsl> {
    let number = |s: &str| {
        s.trim_end_matches('%')
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ThemeError::invalid_color(input))
    };
    Ok(Hsl::new(number(args[0])?, number(args[1])?, number(args[2])?))
}

fn parse_alpha(input: &str, arg: &str) -> Result<f64> {
    arg.parse::<f64>()
        .ok()
        .filter(|a| (0.0..=1.0).contains(a))
        .ok_or_else(|| ThemeError::invalid_color(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::from_hex("#ABC").unwrap(), Rgb::new(170, 187, 204));
        assert_eq!(Rgb::from_hex("f00").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(Rgb::from_hex("#8b5cf6").unwrap(), Rgb::new(139, 92, 246));
        assert_eq!(Rgb::from_hex("#7E3AF2").unwrap(), Rgb::new(126, 58, 242));
    }

    #[test]
    fn test_reject_malformed_hex() {
        for bad in ["#zzz", "", "#", "#12345", "#1234567", "#+12", "#ggg", "rgb"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(ThemeError::InvalidColorFormat { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_roundtrip_lowercase() {
        assert_eq!(Rgb::from_hex("#8B5CF6").unwrap().to_hex(), "#8b5cf6");
    }

    #[test]
    fn test_rgb_to_hsl() {
        let hsl = Rgb::new(139, 92, 246).to_hsl();
        assert!((hsl.h - 258.3).abs() < 0.1);
        assert!((hsl.s - 89.5).abs() < 0.1);
        assert!((hsl.l - 66.3).abs() < 0.1);

        let gray = Rgb::new(128, 128, 128).to_hsl();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_hsl_clamps() {
        let hsl = Hsl::new(-30.0, 140.0, -5.0);
        assert_eq!(hsl.h, 330.0);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 0.0);
    }

    #[test]
    fn test_brightness_boundary() {
        assert_eq!(Rgb::new(128, 128, 128).brightness_milli(), 128_000);
        assert!(Rgb::new(128, 128, 128).is_light());
        assert!(!Rgb::new(127, 127, 127).is_light());
    }

    #[test]
    fn test_parse_css_values() {
        assert_eq!(
            ColorValue::parse("rgba(31, 41, 55, 0.8)").unwrap(),
            ColorValue::Rgba(Rgb::new(31, 41, 55), 0.8)
        );
        assert_eq!(
            ColorValue::parse("rgb(1,2,3)").unwrap(),
            ColorValue::Rgb(Rgb::new(1, 2, 3))
        );
        let hsla = ColorValue::parse("hsla(258.3, 89.5%, 61.3%, 0.2)").unwrap();
        assert!((hsla.alpha() - 0.2).abs() < f64::EPSILON);
        assert!(ColorValue::parse("rgba(1, 2, 3, 1.5)").is_err());
        assert!(ColorValue::parse("hsl(1, 2%)").is_err());
        assert!(ColorValue::parse("cmyk(1, 2, 3, 4)").is_err());
    }

    #[test]
    fn test_css_display() {
        assert_eq!(ColorValue::Rgb(Rgb::new(139, 92, 246)).to_string(), "#8b5cf6");
        assert_eq!(
            ColorValue::Hsl(Hsl::new(258.3, 89.5, 10.0)).to_string(),
            "hsl(258.3, 89.5%, 10.0%)"
        );
        assert_eq!(
            ColorValue::Hsl(Hsl::new(10.0, 20.0, 30.0).with_alpha(0.2)).to_string(),
            "hsla(10.0, 20.0%, 30.0%, 0.2)"
        );
    }
}
