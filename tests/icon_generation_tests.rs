//! Integration tests for the icon generators
//!
//! Every generator is run into a scratch directory and its output is read
//! back with the `image` crate: dimensions, pixel layout, determinism and,
//! for the scannable icons, the decoded payload.

use image::{ColorType, GenericImageView};
use macqr_icons::{EcLevel, IconConfig, IconError, IconKind, scan_png};
use std::path::Path;
use tempfile::TempDir;

fn generate(kind: IconKind) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = IconConfig::default().with_output_dir(dir.path());
    kind.generate(&config).expect("Generator failed");
    dir
}

fn assert_png(path: &Path, size: u32, color: ColorType) {
    let img = image::open(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    assert_eq!(img.dimensions(), (size, size), "{}", path.display());
    assert_eq!(img.color(), color, "{}", path.display());
}

#[test]
fn test_colorful_icon() {
    let dir = generate(IconKind::Colorful);
    let path = dir.path().join("macQR_colorful.png");
    assert_png(&path, 512, ColorType::Rgb8);

    let decoded = scan_png(&path).unwrap();
    assert_eq!(decoded.content, "macQR");
    assert_eq!(decoded.ec_level, EcLevel::H);
    assert_eq!(decoded.version.number(), 1);

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.get_pixel(0, 0).0, [74, 144, 226]);
    assert_eq!(img.get_pixel(511, 511).0, [74, 144, 226]);
}

#[test]
fn test_modern_icon() {
    let dir = generate(IconKind::Modern);
    let path = dir.path().join("macQR_modern.png");
    assert_png(&path, 512, ColorType::Rgba8);

    let img = image::open(&path).unwrap().to_rgba8();
    for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511)] {
        assert_eq!(img.get_pixel(x, y).0[3], 0, "corner ({x}, {y}) is not transparent");
    }
    assert_eq!(img.get_pixel(300, 300).0, [0, 122, 255, 255]);
    assert_eq!(img.get_pixel(256, 256).0, [255, 255, 255, 255]);

    // Decorative only
    assert!(matches!(scan_png(&path), Err(IconError::NotFound(_))));
}

#[test]
fn test_plain_icons() {
    let dir = generate(IconKind::Plain);
    let small = dir.path().join("qrcode.png");
    let large = dir.path().join("qrcode_512.png");
    assert_png(&small, 290, ColorType::L8);
    assert_png(&large, 512, ColorType::L8);

    for path in [&small, &large] {
        let decoded = scan_png(path).unwrap();
        assert_eq!(decoded.content, "macQR", "{}", path.display());
        assert_eq!(decoded.ec_level, EcLevel::L, "{}", path.display());
    }
}

#[test]
fn test_outputs_are_deterministic() {
    for kind in IconKind::ALL {
        let first = generate(kind);
        let second = generate(kind);
        for name in kind.file_names() {
            let a = std::fs::read(first.path().join(name)).unwrap();
            let b = std::fs::read(second.path().join(name)).unwrap();
            assert!(a == b, "{name} differs between runs");
        }
    }
}

#[test]
fn test_custom_payload() {
    let dir = tempfile::tempdir().unwrap();
    let config = IconConfig::default()
        .with_output_dir(dir.path())
        .with_payload("https://example.com/macqr");
    IconKind::Colorful.generate(&config).unwrap();
    IconKind::Plain.generate(&config).unwrap();

    for name in ["macQR_colorful.png", "qrcode.png", "qrcode_512.png"] {
        let decoded = scan_png(dir.path().join(name)).unwrap();
        assert_eq!(decoded.content, "https://example.com/macqr", "{name}");
    }
}

#[test]
fn test_missing_image_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = scan_png(dir.path().join("absent.png"));
    assert!(matches!(result, Err(IconError::Image(_))));
}
