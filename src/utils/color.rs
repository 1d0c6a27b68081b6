//! Employee display color helpers: `#RRGGBB` validation and the
//! conversions needed by the PDF, XLSX and terminal renderings.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

const RESET: &str = "\x1b[0m";

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap())
}

/// Validate a `#RRGGBB` string and split it into its byte components.
pub fn parse_hex(color: &str) -> AppResult<(u8, u8, u8)> {
    if !hex_re().is_match(color) {
        return Err(AppError::InvalidColor(color.to_string()));
    }

    let r = u8::from_str_radix(&color[1..3], 16).map_err(|_| AppError::InvalidColor(color.to_string()))?;
    let g = u8::from_str_radix(&color[3..5], 16).map_err(|_| AppError::InvalidColor(color.to_string()))?;
    let b = u8::from_str_radix(&color[5..7], 16).map_err(|_| AppError::InvalidColor(color.to_string()))?;

    Ok((r, g, b))
}

/// Color as 0.0–1.0 components, the form pdf-writer expects.
pub fn hex_to_rgb_f32(color: &str) -> AppResult<(f32, f32, f32)> {
    let (r, g, b) = parse_hex(color)?;
    Ok((r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
}

/// Color as a packed 0xRRGGBB integer, the form rust_xlsxwriter expects.
pub fn hex_to_u32(color: &str) -> AppResult<u32> {
    let (r, g, b) = parse_hex(color)?;
    Ok(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
}

/// Small colored block for terminal output. Falls back to plain spaces
/// when the color string is not valid.
pub fn ansi_swatch(color: &str) -> String {
    match parse_hex(color) {
        Ok((r, g, b)) => format!("\x1b[48;2;{};{};{}m  {}", r, g, b, RESET),
        Err(_) => "  ".to_string(),
    }
}
