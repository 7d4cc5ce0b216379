//! QR code decoding modules
//!
//! Turns a sampled module matrix back into its payload:
//! - Format information extraction (mask pattern, EC level)
//! - Unmasking and zig-zag bitstream extraction
//! - Block de-interleaving and Reed-Solomon correction
//! - Data mode decoding (numeric, alphanumeric, byte)

/// Bitstream extraction from QR matrix
pub mod bitstream;
/// Format information extraction (mask pattern, EC level)
pub mod format;
/// Function module mask builder (finder/timing/format/alignment/version)
pub mod function_mask;
/// Data mode decoders (numeric, alphanumeric, byte)
pub mod modes;
/// De-interleaving, error correction and segment parsing
pub mod payload;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// QR standard tables (ECC codewords/blocks)
pub mod tables;
/// QR code unmasking (removes mask patterns)
pub mod unmask;

use crate::error::{IconError, Result};
use crate::models::{BitMatrix, DecodedQr, Version};
use bitstream::BitstreamExtractor;
use format::FormatInfo;
use function_mask::FunctionMask;
use log::debug;

/// Decode an upright module matrix (no quiet zone, dark = true)
pub fn decode_matrix(matrix: &BitMatrix) -> Result<DecodedQr> {
    if matrix.width() != matrix.height() {
        return Err(IconError::Decode(format!(
            "matrix is not square ({}x{})",
            matrix.width(),
            matrix.height()
        )));
    }
    let version = Version::from_size(matrix.width())
        .ok_or_else(|| IconError::Decode(format!("{} modules is not a QR size", matrix.width())))?;

    let format = FormatInfo::extract(matrix)
        .ok_or_else(|| IconError::Decode("format information unreadable".into()))?;
    debug!(
        "Version {} with EC level {} and mask {}",
        version,
        format.ec_level,
        format.mask_pattern.bits()
    );

    let func = FunctionMask::new(version);
    let mut unmasked = matrix.clone();
    unmask::unmask(&mut unmasked, format.mask_pattern, &func);

    let bits = BitstreamExtractor::extract(&unmasked, &func);
    let codewords = BitstreamExtractor::to_codewords(&bits);
    let data_codewords = payload::deinterleave_and_correct(&codewords, version, format.ec_level)?;
    let data = payload::decode_segments(&data_codewords, version)?;
    if data.is_empty() {
        return Err(IconError::Decode("symbol carries no data".into()));
    }

    Ok(DecodedQr {
        content: String::from_utf8_lossy(&data).into_owned(),
        data,
        version,
        ec_level: format.ec_level,
        mask_pattern: format.mask_pattern,
    })
}

#[cfg(test)]
mod tests;
