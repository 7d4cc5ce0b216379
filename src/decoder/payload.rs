/// Block de-interleaving, error correction and segment parsing
use crate::decoder::modes::{self, Mode};
use crate::decoder::reed_solomon::ReedSolomonDecoder;
use crate::decoder::tables::ec_block_info;
use crate::error::{IconError, Result};
use crate::models::{EcLevel, Version};
use log::debug;

/// MSB-first bit cursor over a byte slice
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.pos)
    }

    /// Read `n` (<= 32) bits, `None` when the stream is too short
    pub fn read_bits(&mut self, n: usize) -> Option<u32> {
        if n > 32 || n > self.remaining() {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..n {
            let bit = (self.data[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | bit as u32;
            self.pos += 1;
        }
        Some(value)
    }
}

/// Split interleaved codewords into blocks, correct each, and concatenate
/// the data portions
pub fn deinterleave_and_correct(
    codewords: &[u8],
    version: Version,
    ec_level: EcLevel,
) -> Result<Vec<u8>> {
    let info = ec_block_info(version, ec_level);
    let total = codewords.len();
    let ecc_total = info.num_blocks * info.ecc_per_block;
    if total <= ecc_total {
        return Err(IconError::Decode(format!(
            "{total} codewords cannot hold {ecc_total} ECC codewords"
        )));
    }

    let data_total = total - ecc_total;
    let num_long = data_total % info.num_blocks;
    let num_short = info.num_blocks - num_long;
    let short_len = data_total / info.num_blocks;
    let data_len = |block: usize| if block < num_short { short_len } else { short_len + 1 };

    let mut blocks: Vec<Vec<u8>> = (0..info.num_blocks)
        .map(|b| Vec::with_capacity(data_len(b) + info.ecc_per_block))
        .collect();

    let mut stream = codewords.iter().copied();
    let mut next = || {
        stream
            .next()
            .ok_or_else(|| IconError::Decode("codeword stream ended early".into()))
    };

    // Data codewords are interleaved column-wise; short blocks drop out of the last column
    for i in 0..=short_len {
        for (b, block) in blocks.iter_mut().enumerate() {
            if i < data_len(b) {
                block.push(next()?);
            }
        }
    }
    for _ in 0..info.ecc_per_block {
        for block in blocks.iter_mut() {
            block.push(next()?);
        }
    }

    let rs = ReedSolomonDecoder::new(info.ecc_per_block);
    let mut data = Vec::with_capacity(data_total);
    for (b, block) in blocks.iter_mut().enumerate() {
        let corrected = rs.decode(block)?;
        if corrected > 0 {
            debug!("Corrected {corrected} codewords in block {b}");
        }
        data.extend_from_slice(&block[..data_len(b)]);
    }
    Ok(data)
}

/// Parse data segments up to the terminator (or end of capacity)
pub fn decode_segments(data_codewords: &[u8], version: Version) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(data_codewords);
    let mut out = Vec::new();
    let truncated = |what: &str| IconError::Decode(format!("truncated {what} segment"));

    while reader.remaining() >= 4 {
        let indicator = reader.read_bits(4).unwrap_or(0);
        let mode = Mode::from_indicator(indicator)
            .ok_or_else(|| IconError::Decode(format!("unknown mode indicator {indicator:#06b}")))?;

        let count_bits = mode.char_count_bits(version);
        let segment = match mode {
            Mode::Terminator => break,
            Mode::Eci => {
                // Assignment number only; payloads are treated as UTF-8
                let first = reader.read_bits(8).ok_or_else(|| truncated("ECI"))?;
                let extra = match first {
                    0x00..=0x7F => 0,
                    0x80..=0xBF => 8,
                    _ => 16,
                };
                reader.read_bits(extra).ok_or_else(|| truncated("ECI"))?;
                continue;
            }
            Mode::Kanji => {
                return Err(IconError::Decode("kanji segments are not supported".into()));
            }
            Mode::Numeric => {
                let count = reader.read_bits(count_bits).ok_or_else(|| truncated("numeric"))?;
                modes::numeric::decode(&mut reader, count as usize)
                    .ok_or_else(|| truncated("numeric"))?
            }
            Mode::Alphanumeric => {
                let count = reader
                    .read_bits(count_bits)
                    .ok_or_else(|| truncated("alphanumeric"))?;
                modes::alphanumeric::decode(&mut reader, count as usize)
                    .ok_or_else(|| truncated("alphanumeric"))?
            }
            Mode::Byte => {
                let count = reader.read_bits(count_bits).ok_or_else(|| truncated("byte"))?;
                modes::byte::decode(&mut reader, count as usize).ok_or_else(|| truncated("byte"))?
            }
        };
        debug!("Decoded {:?} segment of {} bytes", mode, segment.len());
        out.extend_from_slice(&segment);
    }

    Ok(out)
}
