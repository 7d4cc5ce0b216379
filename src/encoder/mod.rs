//! QR symbol encoding
//!
//! Payloads are encoded with the `qrcode` crate (smallest fitting version,
//! minimum-penalty mask) and converted into the crate's own [`QrSymbol`] so
//! that rendering and verification share one module representation.

/// Pixel rendering of encoded symbols
pub mod render;

pub use render::QrStyle;

use crate::error::Result;
use crate::models::{BitMatrix, EcLevel, QrSymbol, Version};
use log::debug;
use qrcode::types::QrError;
use qrcode::{Color, QrCode};

/// Default pixels per module
pub const DEFAULT_BOX_SIZE: u32 = 10;
/// Default quiet zone width, in modules
pub const DEFAULT_BORDER: u32 = 4;

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

/// Encodes payloads and renders them with a fixed module size and border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrEncoder {
    ec_level: EcLevel,
    box_size: u32,
    border: u32,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(EcLevel::M)
    }
}

impl QrEncoder {
    /// Encoder at `ec_level` with the default box size and border
    pub fn new(ec_level: EcLevel) -> Self {
        Self {
            ec_level,
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
        }
    }

    /// Pixels per module edge
    pub fn with_box_size(mut self, box_size: u32) -> Self {
        self.box_size = box_size.max(1);
        self
    }

    /// Quiet zone width in modules
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Error correction level
    pub fn ec_level(&self) -> EcLevel {
        self.ec_level
    }

    /// Pixels per module edge
    pub fn box_size(&self) -> u32 {
        self.box_size
    }

    /// Quiet zone width in modules
    pub fn border(&self) -> u32 {
        self.border
    }

    /// Encode `payload` into the smallest symbol that holds it
    pub fn encode(&self, payload: &str) -> Result<QrSymbol> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), self.ec_level.into())?;
        let version = match code.version() {
            qrcode::Version::Normal(n) => u8::try_from(n).ok().and_then(Version::new),
            qrcode::Version::Micro(_) => None,
        }
        .ok_or(QrError::InvalidVersion)?;

        let width = code.width();
        let modules: Vec<bool> = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        let modules = BitMatrix::from_modules(width, width, &modules);

        debug!(
            "Encoded {} byte payload as version {}-{} ({} dark modules)",
            payload.len(),
            version,
            self.ec_level,
            modules.count_dark()
        );

        Ok(QrSymbol {
            version,
            ec_level: self.ec_level,
            modules,
        })
    }

    /// Edge length in pixels of a rendered symbol, quiet zone included
    pub fn image_size(&self, symbol: &QrSymbol) -> u32 {
        (symbol.size() as u32 + 2 * self.border) * self.box_size
    }
}
