/// Alphanumeric mode decoder (Mode 0010)
/// Character set: 0-9, A-Z, space, $%*+-./:
use crate::decoder::payload::BitReader;

const ALPHANUMERIC_TABLE: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Pairs = 11 bits, trailing single = 6 bits
pub fn decode(reader: &mut BitReader<'_>, character_count: usize) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(character_count);
    let mut remaining = character_count;

    while remaining >= 2 {
        let value = reader.read_bits(11)? as usize;
        out.push(*ALPHANUMERIC_TABLE.get(value / 45)?);
        out.push(ALPHANUMERIC_TABLE[value % 45]);
        remaining -= 2;
    }
    if remaining == 1 {
        let value = reader.read_bits(6)? as usize;
        out.push(*ALPHANUMERIC_TABLE.get(value)?);
    }

    Some(out)
}
