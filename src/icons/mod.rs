//! Icon generators
//!
//! Each generator is a fixed sequence of draw calls ending in one or two PNG
//! writes. Generators share nothing and may run concurrently.

/// Solid blue icon with a white QR symbol
pub mod colorful;
/// Rounded blue icon with a decorative, non-scannable QR motif
pub mod modern;
/// Plain black-on-white QR symbol
pub mod plain;

use crate::config::IconConfig;
use crate::error::Result;
use log::info;
use rayon::prelude::*;
use std::fmt;
use std::path::PathBuf;

/// Edge length of every square icon, in pixels
pub const ICON_SIZE: u32 = 512;

/// The available generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// `macQR_colorful.png`
    Colorful,
    /// `macQR_modern.png`
    Modern,
    /// `qrcode.png` and `qrcode_512.png`
    Plain,
}

impl IconKind {
    /// Every generator, in a stable order
    pub const ALL: [IconKind; 3] = [IconKind::Colorful, IconKind::Modern, IconKind::Plain];

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Colorful => "colorful",
            IconKind::Modern => "modern",
            IconKind::Plain => "plain",
        }
    }

    /// Files this generator writes, relative to the output directory
    pub fn file_names(&self) -> &'static [&'static str] {
        match self {
            IconKind::Colorful => &[colorful::FILE_NAME],
            IconKind::Modern => &[modern::FILE_NAME],
            IconKind::Plain => &[plain::FILE_NAME, plain::RESIZED_FILE_NAME],
        }
    }

    /// Line printed once the generator has succeeded
    pub fn confirmation(&self) -> &'static str {
        match self {
            IconKind::Colorful => "Colorful QR code icon generated successfully!",
            IconKind::Modern => "Modern QR code icon generated successfully!",
            IconKind::Plain => "QR code icon generated successfully!",
        }
    }

    /// Run the generator, returning the paths it wrote
    pub fn generate(&self, config: &IconConfig) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(config.output_dir())?;
        let written = match self {
            IconKind::Colorful => colorful::generate(config)?,
            IconKind::Modern => modern::generate(config)?,
            IconKind::Plain => plain::generate(config)?,
        };
        for path in &written {
            info!("Wrote {}", path.display());
        }
        Ok(written)
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run every generator in parallel
///
/// Paths are returned in [`IconKind::ALL`] order. The first failure is
/// reported; generators that already finished keep their files.
pub fn generate_all(config: &IconConfig) -> Result<Vec<PathBuf>> {
    let written: Vec<Vec<PathBuf>> = IconKind::ALL
        .par_iter()
        .map(|kind| kind.generate(config))
        .collect::<Result<_>>()?;
    Ok(written.into_iter().flatten().collect())
}
