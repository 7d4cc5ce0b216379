/// Format information (EC level + mask) read from the symbol corners
use crate::models::{BitMatrix, EcLevel, MaskPattern};

/// XOR pattern applied to every format codeword
const FORMAT_MASK: u16 = 0x5412;
/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const GENERATOR: u16 = 0x537;
/// BCH(15,5) corrects up to three bit errors
const MAX_CORRECTABLE: u32 = 3;

/// 15 bits: 5 data (EC level, mask) + 10 BCH parity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: EcLevel,
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Masked 15-bit codeword as it appears in the symbol
    pub fn encode(&self) -> u16 {
        let data = ((self.ec_level.format_bits() << 3) | self.mask_pattern.bits()) as u16;
        let mut rem = data;
        for _ in 0..10 {
            rem = (rem << 1) ^ ((rem >> 9) * GENERATOR);
        }
        ((data << 10) | rem) ^ FORMAT_MASK
    }

    /// Nearest valid format for a raw 15-bit read, if within correction range
    pub fn decode(bits: u16) -> Option<Self> {
        let mut best: Option<(u32, FormatInfo)> = None;
        for ec_level in EcLevel::ALL {
            for mask in 0..8u8 {
                let candidate = FormatInfo {
                    ec_level,
                    mask_pattern: MaskPattern::from_bits(mask),
                };
                let distance = (candidate.encode() ^ bits).count_ones();
                if best.is_none_or(|(d, _)| distance < d) {
                    best = Some((distance, candidate));
                }
            }
        }
        best.filter(|(d, _)| *d <= MAX_CORRECTABLE)
            .map(|(_, info)| info)
    }

    /// Read format info, trying the copy around the top-left finder first
    pub fn extract(matrix: &BitMatrix) -> Option<Self> {
        if matrix.width() < 21 {
            return None;
        }
        Self::decode(Self::read_primary(matrix)).or_else(|| Self::decode(Self::read_secondary(matrix)))
    }

    /// Copy wrapped around the top-left finder; bit 0 at (8, 0)
    fn read_primary(matrix: &BitMatrix) -> u16 {
        let mut positions = Vec::with_capacity(15);
        positions.extend((0..6).map(|i| (8, i)));
        positions.extend([(8, 7), (8, 8), (7, 8)]);
        positions.extend((9..15).map(|i| (14 - i, 8)));
        Self::read_bits(matrix, &positions)
    }

    /// Copy split between the top-right and bottom-left finders
    fn read_secondary(matrix: &BitMatrix) -> u16 {
        let size = matrix.width();
        let mut positions = Vec::with_capacity(15);
        positions.extend((0..8).map(|i| (size - 1 - i, 8)));
        positions.extend((8..15).map(|i| (8, size - 15 + i)));
        Self::read_bits(matrix, &positions)
    }

    fn read_bits(matrix: &BitMatrix, positions: &[(usize, usize)]) -> u16 {
        positions
            .iter()
            .enumerate()
            .fold(0u16, |bits, (i, &(x, y))| bits | ((matrix.get(x, y) as u16) << i))
    }
}
