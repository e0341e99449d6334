use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must be 6 hexadecimal digits (RRGGBB), got '{0}'")]
    Length(String),
    #[error("'{0}' is not a hexadecimal color")]
    Digits(String),
}

/// Opaque RGB color with every channel in `0.0..=1.0`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn new_int(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            0xFF,
        )
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses `RRGGBB`, two hex digits per channel and no alpha.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 {
            return Err(ColorError::Length(s.into()));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Digits(s.into()));
        }

        let channel = |idx: usize| {
            u8::from_str_radix(&s[idx..idx + 2], 16).map_err(|_| ColorError::Digits(s.into()))
        };

        Ok(Self::new_int(channel(0)?, channel(2)?, channel(4)?))
    }
}

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};
pub const IRIS: Color = Color {
    r: 0xc4 as f32 / 255.0,
    g: 0xa7 as f32 / 255.0,
    b: 0xe7 as f32 / 255.0,
};
