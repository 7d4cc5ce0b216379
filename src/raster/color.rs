use crate::error::{IconError, Result};
use image::{Rgb, Rgba};

/// Parse a `#RRGGBB` or `#RGB` colour literal
pub fn parse_hex_color(literal: &str) -> Result<Rgb<u8>> {
    let invalid = || IconError::InvalidColor(literal.to_string());
    let hex = literal.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        // #RGB expands each nibble (#F80 == #FF8800)
        3 => {
            let mut out = [0u8; 3];
            for (slot, i) in out.iter_mut().zip(0..3) {
                *slot = channel(&hex[i..i + 1])? * 17;
            }
            Ok(Rgb(out))
        }
        _ => Err(invalid()),
    }
}

/// Fully opaque RGBA version of an RGB colour
pub fn opaque(color: Rgb<u8>) -> Rgba<u8> {
    let [r, g, b] = color.0;
    Rgba([r, g, b, 255])
}

/// Rec. 601 luma with the same integer weights the sampler uses
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((76 * r as u32 + 150 * g as u32 + 29 * b as u32) >> 8).min(255) as u8
}
