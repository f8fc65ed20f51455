// Simple color struct, created from an unsigned 32 representing RRGGBBAA,
// or from a "#rrggbb" / "#rrggbbaa" hex string in the options

use crate::error::FieldError;
use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn parse_hex(text: &str) -> Result<Color, FieldError> {
        let invalid = || FieldError::InvalidColor(text.to_owned());
        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Color::from_u32(value << 8 | 0xff)),
            8 => Ok(Color::from_u32(value)),
            _ => Err(invalid()),
        }
    }

    // Canvas fill/stroke styles take CSS color strings
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.r,
            self.g,
            self.b,
            self.a as f64 / 255.0
        )
    }
}

impl TryFrom<String> for Color {
    type Error = FieldError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&text)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
