use super::*;
use crate::encoder::QrEncoder;
use crate::models::{EcLevel, MaskPattern};

/// Version 1-M symbol for "4376471154038" produced by an independent encoder
const NUMERIC_V1_M: [&str; 21] = [
    "#######.....#.#######",
    "#.....#..#....#.....#",
    "#.###.#...##..#.###.#",
    "#.###.#...#...#.###.#",
    "#.###.#..####.#.###.#",
    "#.....#.#.#...#.....#",
    "#######.#.#.#.#######",
    ".........#...........",
    "#..#.##.######.#.....",
    "###.#..##..#.#.#.##..",
    "#..#.####.##..###...#",
    "..#.#..#....#####....",
    "..#...##.#.#.###.##..",
    "........#.#..####.##.",
    "#######...###.#.####.",
    "#.....#.#.....##....#",
    "#.###.#..##.###..#.##",
    "#.###.#.#.#..####..##",
    "#.###.#..###.###.#..#",
    "#.....#..####..##..#.",
    "#######.###..#.###...",
];

fn parse_grid(rows: &[&str]) -> BitMatrix {
    let mut matrix = BitMatrix::new(rows[0].len(), rows.len());
    for (y, row) in rows.iter().enumerate() {
        for (x, cell) in row.bytes().enumerate() {
            matrix.set(x, y, cell == b'#');
        }
    }
    matrix
}

#[test]
fn test_golden_matrix_decode() {
    let matrix = parse_grid(&NUMERIC_V1_M);
    let qr = decode_matrix(&matrix).expect("golden matrix should decode");
    assert_eq!(qr.content, "4376471154038");
    assert_eq!(qr.version, Version::MIN);
    assert_eq!(qr.ec_level, EcLevel::M);
    assert_eq!(qr.mask_pattern, MaskPattern::Pattern7);
}

#[test]
fn test_golden_matrix_survives_damage() {
    let mut matrix = parse_grid(&NUMERIC_V1_M);
    // Scribble over a 2x3 patch of data modules (up to 3 codewords)
    for y in 10..13 {
        for x in 11..13 {
            matrix.toggle(x, y);
        }
    }
    let qr = decode_matrix(&matrix).expect("damaged matrix should still decode");
    assert_eq!(qr.content, "4376471154038");
}

#[test]
fn test_encoder_round_trip_all_levels() {
    for level in EcLevel::ALL {
        let symbol = QrEncoder::new(level).encode("macQR").unwrap();
        let qr = decode_matrix(&symbol.modules).unwrap();
        assert_eq!(qr.content, "macQR");
        assert_eq!(qr.ec_level, level);
        assert_eq!(qr.version, symbol.version);
    }
}

#[test]
fn test_encoder_round_trip_multi_block() {
    // Version 7+ brings version information and several RS blocks
    let payload = "https://example.com/macQR/history?entry=0123456789&source=menu-bar";
    let symbol = QrEncoder::new(EcLevel::H).encode(&payload.repeat(2)).unwrap();
    assert!(symbol.version.number() >= 7);
    let qr = decode_matrix(&symbol.modules).unwrap();
    assert_eq!(qr.content, payload.repeat(2));
}

#[test]
fn test_encoder_round_trip_utf8() {
    let payload = "二维码 macQR ✓";
    let symbol = QrEncoder::new(EcLevel::Q).encode(payload).unwrap();
    let qr = decode_matrix(&symbol.modules).unwrap();
    assert_eq!(qr.content, payload);
    assert_eq!(qr.data, payload.as_bytes());
}

#[test]
fn test_blank_matrix_is_rejected() {
    let matrix = BitMatrix::square(21);
    assert!(decode_matrix(&matrix).is_err());
}

#[test]
fn test_non_qr_size_is_rejected() {
    let matrix = BitMatrix::square(22);
    assert!(matches!(decode_matrix(&matrix), Err(IconError::Decode(_))));
}
