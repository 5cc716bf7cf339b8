//! RGBA colors for labels and regions
//!
//! Colors are stored as 8-bit channels and serialize as `#RRGGBBAA` hex.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    REGION_BASE_ALPHA, REGION_HOVER_ALPHA, REGION_HOVER_DARKER_FACTOR, REGION_TEXT_ALPHA,
    REGION_TEXT_DARKER_FACTOR,
};
use crate::error::ColorError;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 255,
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex {
                value: value.to_string(),
            });
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::WrongDigitCount {
                digits: digits.len(),
            });
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHex {
                value: value.to_string(),
            })
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Darken by `factor` percent of the HSV value: 150 yields two thirds of
    /// the brightness. Factors below 100 lighten instead.
    pub fn darker(self, factor: u32) -> Self {
        if factor == 0 {
            return self;
        }
        if factor < 100 {
            return self.lighter(10_000 / factor);
        }
        let (h, s, v) = self.to_hsv();
        let v = v * 100 / factor;
        Self::from_hsv(h, s, v, self.a)
    }

    /// Lighten by `factor` percent of the HSV value. Once the value
    /// saturates at 255 the excess is taken out of the saturation.
    pub fn lighter(self, factor: u32) -> Self {
        if factor == 0 {
            return self;
        }
        if factor < 100 {
            return self.darker(10_000 / factor);
        }
        let (h, mut s, mut v) = self.to_hsv();
        v = v * factor / 100;
        if v > 255 {
            s = s.saturating_sub(v - 255);
            v = 255;
        }
        Self::from_hsv(h, s, v, self.a)
    }

    /// Hue in degrees (`None` for greys), saturation and value in 0..=255.
    fn to_hsv(self) -> (Option<f64>, u32, u32) {
        let (r, g, b) = (self.r as u32, self.g as u32, self.b as u32);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let s = if max == 0 { 0 } else { (delta * 255 + max / 2) / max };
        if delta == 0 {
            return (None, s, max);
        }
        let (rf, gf, bf, df) = (r as f64, g as f64, b as f64, delta as f64);
        let h = if max == r {
            60.0 * ((gf - bf) / df)
        } else if max == g {
            60.0 * ((bf - rf) / df) + 120.0
        } else {
            60.0 * ((rf - gf) / df) + 240.0
        };
        (Some(h.rem_euclid(360.0)), s, max)
    }

    fn from_hsv(h: Option<f64>, s: u32, v: u32, a: u8) -> Self {
        let v = v.min(255);
        let Some(h) = h.filter(|_| s > 0) else {
            let v = v as u8;
            return Self::new(v, v, v, a);
        };
        let vf = v as f64;
        let sf = s.min(255) as f64 / 255.0;
        let sector = h / 60.0;
        let i = sector.floor() as i32 % 6;
        let f = sector - sector.floor();
        let p = vf * (1.0 - sf);
        let q = vf * (1.0 - sf * f);
        let t = vf * (1.0 - sf * (1.0 - f));
        let (r, g, b) = match i {
            0 => (vf, t, p),
            1 => (q, vf, p),
            2 => (p, vf, t),
            3 => (p, q, vf),
            4 => (t, p, vf),
            _ => (vf, p, q),
        };
        let c = |x: f64| x.round().clamp(0.0, 255.0) as u8;
        Self::new(c(r), c(g), c(b), a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Combine the colors of a region's labels, in selection order.
///
/// A single color is returned unchanged. Several colors are folded into an
/// accumulator starting at black, halving both sides with integer division
/// at every step, so later colors weigh more. Returns `None` for no colors.
pub fn blend(colors: &[Rgba]) -> Option<Rgba> {
    match colors {
        [] => None,
        [only] => Some(*only),
        _ => Some(colors.iter().fold(Rgba::new(0, 0, 0, 255), |acc, c| {
            Rgba::new(acc.r / 2 + c.r / 2, acc.g / 2 + c.g / 2, acc.b / 2 + c.b / 2, 255)
        })),
    }
}

/// The three shades a region is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionShades {
    /// Translucent fill.
    pub base: Rgba,
    /// Edge lines and hover fill.
    pub hover: Rgba,
    /// Label text.
    pub text: Rgba,
}

impl RegionShades {
    pub fn from_color(color: Rgba) -> Self {
        Self {
            base: color.with_alpha(REGION_BASE_ALPHA),
            hover: color
                .darker(REGION_HOVER_DARKER_FACTOR)
                .with_alpha(REGION_HOVER_ALPHA),
            text: color
                .darker(REGION_TEXT_DARKER_FACTOR)
                .with_alpha(REGION_TEXT_ALPHA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgba::from_hex("#4E79A7").unwrap(), Rgba::new(0x4e, 0x79, 0xa7, 255));
        assert_eq!(Rgba::from_hex("ff000080").unwrap(), Rgba::new(255, 0, 0, 0x80));
        assert_eq!(
            Rgba::from_hex("#12345"),
            Err(ColorError::WrongDigitCount { digits: 5 })
        );
        assert!(matches!(Rgba::from_hex("#zz0000"), Err(ColorError::InvalidHex { .. })));
    }

    #[test]
    fn test_hex_formatting() {
        let color = Rgba::from_rgb_u32(0xF28E2C);
        assert_eq!(color.to_hex(), "#f28e2cff");
        assert_eq!(color.to_hex().parse::<Rgba>().unwrap(), color);
    }

    #[test]
    fn test_serializes_as_hex() {
        let json = serde_json::to_string(&Rgba::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, "\"#01020304\"");
        assert!(serde_json::from_str::<Rgba>("\"#nothex\"").is_err());
    }

    #[test]
    fn test_blend_single_is_identity() {
        let color = Rgba::new(13, 77, 201, 255);
        assert_eq!(blend(&[color]), Some(color));
        assert_eq!(blend(&[]), None);
    }

    #[test]
    fn test_blend_is_sequential_halving() {
        let red = Rgba::new(200, 0, 0, 255);
        let green = Rgba::new(0, 200, 0, 255);
        let blended = blend(&[red, green]).unwrap();
        assert_eq!((blended.r, blended.g, blended.b), (50, 100, 0));

        let reversed = blend(&[green, red]).unwrap();
        assert_eq!((reversed.r, reversed.g, reversed.b), (100, 50, 0));
    }

    #[test]
    fn test_blend_truncates() {
        let blended = blend(&[Rgba::new(255, 3, 1, 255), Rgba::new(255, 3, 1, 255)]).unwrap();
        // 0/2 + 255/2 = 127, then 127/2 + 255/2 = 63 + 127
        assert_eq!((blended.r, blended.g, blended.b), (190, 1, 0));
    }

    #[test]
    fn test_darker_scales_value() {
        let color = Rgba::new(150, 0, 0, 255);
        assert_eq!(color.darker(150), Rgba::new(100, 0, 0, 255));
        assert_eq!(color.darker(100), color);
        let grey = Rgba::new(90, 90, 90, 10);
        assert_eq!(grey.darker(300), Rgba::new(30, 30, 30, 10));
    }

    #[test]
    fn test_darker_below_hundred_lightens() {
        let color = Rgba::new(120, 0, 0, 255);
        let lighter = color.darker(75);
        assert!(lighter.r > color.r);
        assert_eq!(lighter.g, 0);
    }

    #[test]
    fn test_lighter_saturated_value_desaturates() {
        let color = Rgba::new(255, 0, 0, 255);
        let lighter = color.lighter(200);
        assert_eq!(lighter.r, 255);
        assert!(lighter.g > 0 && lighter.g == lighter.b);
    }

    #[test]
    fn test_region_shades() {
        let shades = RegionShades::from_color(Rgba::new(150, 60, 30, 255));
        assert_eq!(shades.base, Rgba::new(150, 60, 30, 75));
        assert_eq!(shades.hover.a, 150);
        assert_eq!(shades.text.a, 255);
        assert!(shades.text.r < shades.base.r);
        assert!(shades.hover.r > shades.text.r);
    }
}
