//! RGBA color with channel-wise interpolation and hex-string serde.

use std::fmt;

use eyre::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Mixes two colors; `proportion` is the share of `self` in the result.
    /// Written as `b + (a - b)·p` so equal endpoints mix to themselves
    /// exactly instead of drifting a unit under float rounding.
    pub fn interpolate(self, other: Rgba, proportion: f64) -> Rgba {
        let mix = |a: u8, b: u8| (f64::from(b) + (f64::from(a) - f64::from(b)) * proportion) as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(text: &str) -> Result<Rgba> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 && digits.len() != 8 {
            bail!("expected #rrggbb or #rrggbbaa, got {text:?}");
        }
        let channel = |range: std::ops::Range<usize>| -> Result<u8> {
            let slice = digits
                .get(range)
                .ok_or_else(|| eyre::eyre!("non-ascii color literal {text:?}"))?;
            Ok(u8::from_str_radix(slice, 16)?)
        };
        let a = if digits.len() == 8 { channel(6..8)? } else { 255 };
        Ok(Rgba {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a,
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Rgba, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Rgba::parse_hex(&text).map_err(serde::de::Error::custom)
    }
}
