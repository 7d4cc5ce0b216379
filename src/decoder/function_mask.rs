use crate::models::{BitMatrix, Version};

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
pub struct FunctionMask {
    mask: BitMatrix,
    version: Version,
}

impl FunctionMask {
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut mask = BitMatrix::square(size);

        // Finder patterns plus their separators
        Self::mark_block(&mut mask, 0, 0, 8, 8);
        Self::mark_block(&mut mask, size - 8, 0, 8, 8);
        Self::mark_block(&mut mask, 0, size - 8, 8, 8);

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            mask.set(6, i, true);
            mask.set(i, 6, true);
        }

        // Alignment patterns, except where they would overlap a finder
        let centers = alignment_pattern_positions(version);
        let last = centers.len().saturating_sub(1);
        for (i, &cx) in centers.iter().enumerate() {
            for (j, &cy) in centers.iter().enumerate() {
                let on_finder = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
                if !on_finder {
                    Self::mark_block(&mut mask, cx - 2, cy - 2, 5, 5);
                }
            }
        }

        // Format information, both copies, and the dark module
        Self::mark_block(&mut mask, 0, 8, 9, 1);
        Self::mark_block(&mut mask, 8, 0, 1, 9);
        Self::mark_block(&mut mask, size - 8, 8, 8, 1);
        Self::mark_block(&mut mask, 8, size - 8, 1, 8);

        // Version information (v7+)
        if version.number() >= 7 {
            Self::mark_block(&mut mask, size - 11, 0, 3, 6);
            Self::mark_block(&mut mask, 0, size - 11, 6, 3);
        }

        Self { mask, version }
    }

    pub fn size(&self) -> usize {
        self.mask.width()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Number of modules that carry codeword bits
    pub fn data_modules_count(&self) -> usize {
        self.size() * self.size() - self.mask.count_dark()
    }

    fn mark_block(mask: &mut BitMatrix, x: usize, y: usize, width: usize, height: usize) {
        for yy in y..y + height {
            for xx in x..x + width {
                mask.set(xx, yy, true);
            }
        }
    }
}

/// Alignment pattern centres (shared by rows and columns) for a version.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let count = v / 7 + 2;
    let size = version.size();
    let step = if v == 32 {
        26
    } else {
        (v * 4 + count * 2 + 1) / (count * 2 - 2) * 2
    };

    let mut positions = vec![6usize; count];
    for (k, slot) in positions.iter_mut().skip(1).rev().enumerate() {
        *slot = size - 7 - k * step;
    }
    positions
}
