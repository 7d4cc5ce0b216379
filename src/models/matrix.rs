/// Packed bit matrix for QR module grids
///
/// `true` is a dark module. Out-of-range reads return `false` and
/// out-of-range writes are ignored, so callers can probe past the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-light matrix with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Create a square matrix (QR symbols are always square)
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Build a matrix from a row-major slice of module values
    pub fn from_modules(width: usize, height: usize, modules: &[bool]) -> Self {
        let mut matrix = Self::new(width, height);
        for (idx, &dark) in modules.iter().enumerate().take(width * height) {
            if dark {
                matrix.set(idx % width, idx / width, true);
            }
        }
        matrix
    }

    /// Matrix width in modules
    pub fn width(&self) -> usize {
        self.width
    }

    /// Matrix height in modules
    pub fn height(&self) -> usize {
        self.height
    }

    /// Module at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> bool {
        match self.index(x, y) {
            Some((byte, bit)) => (self.data[byte] >> bit) & 1 == 1,
            None => false,
        }
    }

    /// Set module at column `x`, row `y`
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some((byte, bit)) = self.index(x, y) {
            if value {
                self.data[byte] |= 1 << bit;
            } else {
                self.data[byte] &= !(1 << bit);
            }
        }
    }

    /// Flip module at column `x`, row `y`
    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some((byte, bit)) = self.index(x, y) {
            self.data[byte] ^= 1 << bit;
        }
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn index(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y * self.width + x;
        Some((index / 8, index % 8))
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_toggle() {
        let mut matrix = BitMatrix::square(21);
        assert_eq!(matrix.width(), 21);
        assert_eq!(matrix.height(), 21);

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(4, 3));

        matrix.toggle(3, 4);
        assert!(!matrix.get(3, 4));
        assert_eq!(matrix.count_dark(), 0);
    }

    #[test]
    fn test_out_of_bounds_is_light() {
        let mut matrix = BitMatrix::new(8, 8);
        matrix.set(10, 10, true);
        matrix.toggle(8, 0);
        assert!(!matrix.get(10, 10));
        assert_eq!(matrix.count_dark(), 0);
    }

    #[test]
    fn test_from_modules_row_major() {
        let modules = [true, false, false, false, true, false];
        let matrix = BitMatrix::from_modules(3, 2, &modules);
        assert!(matrix.get(0, 0));
        assert!(matrix.get(1, 1));
        assert!(!matrix.get(2, 1));
        assert_eq!(matrix.count_dark(), 2);
    }
}
