/// Codeword extraction from a QR matrix
use crate::decoder::function_mask::FunctionMask;
use crate::models::BitMatrix;

/// Reads data bits in placement order
pub struct BitstreamExtractor;

impl BitstreamExtractor {
    /// Data bits in zig-zag order: column pairs from the right edge,
    /// alternating upward and downward, skipping the vertical timing column
    pub fn extract(matrix: &BitMatrix, func: &FunctionMask) -> Vec<bool> {
        let dimension = func.size();
        let mut bits = Vec::with_capacity(func.data_modules_count());

        let mut upward = true;
        let mut right = dimension as isize - 1;

        while right > 0 {
            if right == 6 {
                right -= 1;
            }
            for step in 0..dimension {
                let row = if upward { dimension - 1 - step } else { step };
                for col in [right as usize, right as usize - 1] {
                    if !func.is_function(col, row) {
                        bits.push(matrix.get(col, row));
                    }
                }
            }
            upward = !upward;
            right -= 2;
        }

        bits
    }

    /// Pack bits MSB-first into codewords, dropping trailing remainder bits
    pub fn to_codewords(bits: &[bool]) -> Vec<u8> {
        bits.chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit as u8))
            .collect()
    }
}
