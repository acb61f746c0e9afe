use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShowroomError;

/// sRGB paint color, written `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaintColor {
    rgb: [u8; 3],
}

impl PaintColor {
    /// Color from 8-bit sRGB channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// 8-bit sRGB channels.
    #[must_use]
    pub const fn rgb(self) -> [u8; 3] {
        self.rgb
    }

    /// Linear-light RGB in `[0, 1]`, ready for a material uniform.
    #[must_use]
    pub fn to_linear(self) -> [f32; 3] {
        self.rgb.map(|channel| {
            let c = f32::from(channel) / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

impl FromStr for PaintColor {
    type Err = ShowroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ShowroomError::InvalidColor(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid())
        };
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for PaintColor {
    type Error = ShowroomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaintColor> for String {
    fn from(color: PaintColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for PaintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
