/// Byte mode decoder (Mode 0100) for 8-bit data
use crate::decoder::payload::BitReader;

/// Read `character_count` raw bytes
pub fn decode(reader: &mut BitReader<'_>, character_count: usize) -> Option<Vec<u8>> {
    (0..character_count)
        .map(|_| reader.read_bits(8).map(|b| b as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_decode() {
        let data = b"HI!";
        let mut reader = BitReader::new(data);
        assert_eq!(decode(&mut reader, 2), Some(b"HI".to_vec()));
        assert_eq!(reader.remaining(), 8);
    }

    #[test]
    fn test_byte_decode_truncated() {
        let mut reader = BitReader::new(b"H");
        assert_eq!(decode(&mut reader, 2), None);
    }
}
