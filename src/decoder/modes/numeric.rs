/// Numeric mode decoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::decoder::payload::BitReader;

pub fn decode(reader: &mut BitReader<'_>, character_count: usize) -> Option<Vec<u8>> {
    let mut digits = Vec::with_capacity(character_count);
    let mut remaining = character_count;

    while remaining > 0 {
        let group = remaining.min(3);
        let width = match group {
            3 => 10,
            2 => 7,
            _ => 4,
        };
        let value = reader.read_bits(width)?;
        if value >= 10u32.pow(group as u32) {
            return None;
        }
        digits.extend(format!("{value:0group$}").bytes());
        remaining -= group;
    }

    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_groups() {
        // "01234567": 012 -> 0000001100, 345 -> 0101011001, 67 -> 1000011
        let bits: u32 = 0b0000001100_0101011001_1000011;
        let bytes = (bits << 5).to_be_bytes();
        let mut reader = BitReader::new(&bytes);
        assert_eq!(decode(&mut reader, 8), Some(b"01234567".to_vec()));
    }

    #[test]
    fn test_numeric_rejects_out_of_range_group() {
        // 1023 does not fit in three digits
        let bytes = [0xFF, 0xC0];
        let mut reader = BitReader::new(&bytes);
        assert_eq!(decode(&mut reader, 3), None);
    }
}
