//! QR code data mode decoders
//!
//! - Numeric: digits 0-9, three per 10 bits
//! - Alphanumeric: 45-character set, two per 11 bits
//! - Byte: raw 8-bit data (UTF-8 in practice)

pub mod alphanumeric;
pub mod byte;
pub mod numeric;

use crate::models::Version;

/// Segment mode indicator (4 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Terminator,
    Numeric,
    Alphanumeric,
    Byte,
    Eci,
    Kanji,
}

impl Mode {
    pub fn from_indicator(bits: u32) -> Option<Self> {
        match bits {
            0b0000 => Some(Mode::Terminator),
            0b0001 => Some(Mode::Numeric),
            0b0010 => Some(Mode::Alphanumeric),
            0b0100 => Some(Mode::Byte),
            0b0111 => Some(Mode::Eci),
            0b1000 => Some(Mode::Kanji),
            _ => None,
        }
    }

    /// Width of the character count field for this mode and version
    pub fn char_count_bits(&self, version: Version) -> usize {
        let tier = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            Mode::Numeric => [10, 12, 14][tier],
            Mode::Alphanumeric => [9, 11, 13][tier],
            Mode::Byte => [8, 16, 16][tier],
            Mode::Kanji => [8, 10, 12][tier],
            Mode::Terminator | Mode::Eci => 0,
        }
    }
}
