/// Removes the data mask from a sampled symbol
use crate::decoder::function_mask::FunctionMask;
use crate::models::{BitMatrix, MaskPattern};

/// XOR every data module with the mask pattern; function modules are untouched
pub fn unmask(matrix: &mut BitMatrix, mask_pattern: MaskPattern, func: &FunctionMask) {
    for y in 0..matrix.height() {
        for x in 0..matrix.width() {
            if !func.is_function(x, y) && mask_pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    #[test]
    fn test_unmask_skips_function_modules() {
        let mut matrix = BitMatrix::square(21);
        matrix.set(10, 10, true);
        matrix.set(0, 0, true);

        let func = FunctionMask::new(Version::MIN);
        unmask(&mut matrix, MaskPattern::Pattern0, &func);

        // (10 + 10) % 2 == 0: toggled
        assert!(!matrix.get(10, 10));
        // (11 + 10) % 2 == 1: untouched
        assert!(!matrix.get(11, 10));
        // (9 + 9) % 2 == 0: toggled from light
        assert!(matrix.get(9, 9));
        // Finder module keeps its value
        assert!(matrix.get(0, 0));
    }

    #[test]
    fn test_unmask_is_an_involution() {
        let func = FunctionMask::new(Version::MIN);
        let mut matrix = BitMatrix::square(21);
        matrix.set(12, 3, true);
        let original = matrix.clone();
        unmask(&mut matrix, MaskPattern::Pattern4, &func);
        unmask(&mut matrix, MaskPattern::Pattern4, &func);
        assert_eq!(matrix, original);
    }
}
