/// Module grid storage
pub mod matrix;
/// Symbol metadata (version, EC level, mask) and decoded results
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{DecodedQr, EcLevel, MaskPattern, QrSymbol, Version};
