//! Theme configuration

use iced::Color;

use crate::error::{Error, Result};

/// Light palette matching the stock iOS system colors
pub struct LightTheme;

impl LightTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.949, 0.949, 0.969);
    pub const SURFACE: Color = Color::WHITE;
    pub const PRIMARY: Color = Color::from_rgb(0.0, 0.478, 1.0);
    pub const TEXT: Color = Color::BLACK;
    pub const TEXT_MUTED: Color = Color::from_rgb(0.667, 0.667, 0.667);
    pub const CONTROL: Color = Color::from_rgb(0.5, 0.5, 0.5);
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub fn parse_hex(value: &str) -> Result<Color> {
    let invalid = || Error::InvalidColor(value.to_string());

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Ok(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

/// Format a color as `#RRGGBB`, or `#RRGGBBAA` when translucent.
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}
