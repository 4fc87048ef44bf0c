/// Color parsing for fill, background and overlay colors
use crate::error::G2Error;
use palette::Srgba;

/// Fill used by the preview when no color is given
pub const DEFAULT_FILL: &str = "#4F46E5";

/// Baseline overlay: opaque red
pub fn baseline_color() -> Srgba<u8> {
    Srgba::new(255, 0, 0, 255)
}

/// Parse a hex color string into an sRGBA color.
/// Accepts:
/// - "transparent" or empty => (0, 0, 0, 0)
/// - #RRGGBB or RRGGBB => (r, g, b, 255)
/// - #RRGGBBAA or RRGGBBAA => (r, g, b, a)
pub fn parse_color(color_str: &str) -> Result<Srgba<u8>, G2Error> {
    let trimmed = color_str.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(Srgba::new(0, 0, 0, 0));
    }

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || G2Error::InvalidColor(color_str.to_string());
    if !hex.is_ascii() {
        return Err(invalid());
    }

    let component = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(Srgba::new(component(0)?, component(2)?, component(4)?, 255)),
        8 => Ok(Srgba::new(component(0)?, component(2)?, component(4)?, component(6)?)),
        _ => Err(invalid()),
    }
}

/// Format as `#rrggbb`, the form SVG attributes expect
pub fn to_hex_rgb(color: Srgba<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Alpha as a 0..1 opacity value
pub fn opacity(color: Srgba<u8>) -> f32 {
    color.alpha as f32 / 255.0
}

pub fn to_skia_color(color: Srgba<u8>) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}
