use super::BitMatrix;
use std::fmt;

/// QR code version (1-40, Model 2 only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Smallest version
    pub const MIN: Version = Version(1);
    /// Largest version
    pub const MAX: Version = Version(40);

    /// Version from its number, `None` outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Self(number))
    }

    /// Version whose symbol is `size` modules wide
    pub fn from_size(size: usize) -> Option<Self> {
        if size < 21 || (size - 17) % 4 != 0 {
            return None;
        }
        u8::try_from((size - 17) / 4).ok().and_then(Self::new)
    }

    /// Version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl EcLevel {
    /// All levels, lowest first
    pub const ALL: [EcLevel; 4] = [EcLevel::L, EcLevel::M, EcLevel::Q, EcLevel::H];

    /// Level from the two format-information bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => EcLevel::L,
            0b00 => EcLevel::M,
            0b11 => EcLevel::Q,
            _ => EcLevel::H,
        }
    }

    /// The two format-information bits for this level
    pub fn format_bits(&self) -> u8 {
        match self {
            EcLevel::L => 0b01,
            EcLevel::M => 0b00,
            EcLevel::Q => 0b11,
            EcLevel::H => 0b10,
        }
    }

    pub(crate) fn table_index(&self) -> usize {
        match self {
            EcLevel::L => 0,
            EcLevel::M => 1,
            EcLevel::Q => 2,
            EcLevel::H => 3,
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(name)
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Mask pattern from its three reference bits
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => MaskPattern::Pattern0,
            1 => MaskPattern::Pattern1,
            2 => MaskPattern::Pattern2,
            3 => MaskPattern::Pattern3,
            4 => MaskPattern::Pattern4,
            5 => MaskPattern::Pattern5,
            6 => MaskPattern::Pattern6,
            _ => MaskPattern::Pattern7,
        }
    }

    /// Reference bits of this pattern
    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// Whether the module at row `i`, column `j` is inverted by this mask
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// An encoded QR symbol, without quiet zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    /// Symbol version
    pub version: Version,
    /// Error correction level the payload was encoded at
    pub ec_level: EcLevel,
    /// Module grid (true = dark)
    pub modules: BitMatrix,
}

impl QrSymbol {
    /// Width of the symbol in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }
}

/// A QR symbol read back from a matrix or image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQr {
    /// Raw decoded bytes
    pub data: Vec<u8>,
    /// Decoded content as text (lossy UTF-8)
    pub content: String,
    /// Symbol version
    pub version: Version,
    /// Error correction level
    pub ec_level: EcLevel,
    /// Mask pattern used
    pub mask_pattern: MaskPattern,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::MIN.size(), 21);
        assert_eq!(Version::new(2).map(|v| v.size()), Some(25));
        assert_eq!(Version::MAX.size(), 177);
        assert_eq!(Version::new(0), None);
        assert_eq!(Version::new(41), None);
    }

    #[test]
    fn test_version_from_size() {
        assert_eq!(Version::from_size(21), Version::new(1));
        assert_eq!(Version::from_size(29), Version::new(3));
        assert_eq!(Version::from_size(22), None);
        assert_eq!(Version::from_size(17), None);
        assert_eq!(Version::from_size(181), None);
    }

    #[test]
    fn test_ec_level_format_bits() {
        for level in EcLevel::ALL {
            assert_eq!(EcLevel::from_format_bits(level.format_bits()), level);
        }
        assert_eq!(EcLevel::from_format_bits(0b01), EcLevel::L);
        assert_eq!(EcLevel::from_format_bits(0b10), EcLevel::H);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));
        assert_eq!(MaskPattern::from_bits(5).bits(), 5);
    }
}
