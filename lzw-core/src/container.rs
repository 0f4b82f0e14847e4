//! Byte-stream framing and the self-describing container format.
//!
//! This is the thin wrapper around code-level encode/decode: it turns a
//! code sequence into bytes and back, and optionally prepends a 4-byte
//! header so a file doesn't need its encoding parameters supplied
//! out-of-band. It performs no file I/O itself (that is `lzw-cli`'s job)
//! so the core stays a pure bytes-to-bytes/codes transformation.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{LzwError, Result};
use crate::policy::CodeWidthPolicy;
use crate::Code;

/// Which of the two framings to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// F1: every code occupies `ceil(final_bits / 8)` bytes, big-endian,
    /// zero-padded. Byte-aligned, simpler, wastes bits.
    Fixed,
    /// F2: each code occupies exactly `current_bits` bits at the moment
    /// of its emission, concatenated MSB-first. The classical LZW
    /// framing, required for cross-tool interoperability.
    Packed,
}

impl Framing {
    fn tag(self) -> u8 {
        match self {
            Framing::Fixed => 0,
            Framing::Packed => 1,
        }
    }

    fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Framing::Fixed),
            1 => Ok(Framing::Packed),
            other => Err(LzwError::invalid_argument(format!(
                "unknown framing tag {other}"
            ))),
        }
    }
}

/// Pack `codes` into bytes under `framing`.
///
/// Neither framing needs the dictionary: the bit width at each position
/// is purely a function of how many codes have been produced so far, so
/// this replays [`CodeWidthPolicy`] on its own rather than taking an
/// encoder reference.
pub fn pack(codes: &[Code], initial_bits: u8, max_bits: u8, framing: Framing) -> Vec<u8> {
    match framing {
        Framing::Fixed => pack_fixed(codes, final_width(codes.len(), initial_bits, max_bits)),
        Framing::Packed => pack_bits(codes, initial_bits, max_bits),
    }
}

/// Unpack a code sequence from bytes under `framing`.
pub fn unpack(data: &[u8], initial_bits: u8, max_bits: u8, framing: Framing) -> Result<Vec<Code>> {
    match framing {
        Framing::Fixed => unpack_fixed(data, final_width_for_byte_len(data.len(), initial_bits, max_bits)),
        Framing::Packed => unpack_bits(data, initial_bits, max_bits),
    }
}

/// Replay the width-growth schedule to find the width reached after
/// `code_count` codes have been assigned, without touching a dictionary.
fn final_width(code_count: usize, initial_bits: u8, max_bits: u8) -> u8 {
    let mut policy = CodeWidthPolicy::new(initial_bits, max_bits);
    // Every emitted code triggers one insertion attempt except the last.
    for _ in 0..code_count.saturating_sub(1) {
        policy.reserve_next();
    }
    policy.current_bits()
}

/// For fixed framing, the byte-per-code width can't be recovered from
/// the raw data length alone without knowing which width produced it;
/// callers that kept the header (see [`Header`]) should call
/// [`unpack_fixed`] directly with the recorded width instead. This
/// fallback assumes the stream was packed at `max_bits`, which matches
/// what most callers want when no header is available.
fn final_width_for_byte_len(_byte_len: usize, _initial_bits: u8, max_bits: u8) -> u8 {
    max_bits
}

fn pack_fixed(codes: &[Code], final_bits: u8) -> Vec<u8> {
    let bytes_per_code = final_bits.div_ceil(8) as usize;
    let mut out = Vec::with_capacity(codes.len() * bytes_per_code);
    for &code in codes {
        let be = code.to_be_bytes();
        out.extend_from_slice(&be[4 - bytes_per_code..]);
    }
    out
}

/// Unpack codes packed with [`pack_fixed`] at the given final width.
pub fn unpack_fixed(data: &[u8], final_bits: u8) -> Result<Vec<Code>> {
    let bytes_per_code = final_bits.div_ceil(8) as usize;
    if bytes_per_code == 0 || !data.len().is_multiple_of(bytes_per_code) {
        return Err(LzwError::TruncatedStream);
    }
    let mut codes = Vec::with_capacity(data.len() / bytes_per_code);
    for chunk in data.chunks_exact(bytes_per_code) {
        let mut buf = [0u8; 4];
        buf[4 - bytes_per_code..].copy_from_slice(chunk);
        codes.push(Code::from_be_bytes(buf));
    }
    Ok(codes)
}

fn pack_bits(codes: &[Code], initial_bits: u8, max_bits: u8) -> Vec<u8> {
    let mut policy = CodeWidthPolicy::new(initial_bits, max_bits);
    let mut writer = BitWriter::new();
    for &code in codes {
        writer.write_bits(code, policy.current_bits());
        policy.reserve_next();
    }
    writer.into_vec()
}

fn unpack_bits(data: &[u8], initial_bits: u8, max_bits: u8) -> Result<Vec<Code>> {
    let mut policy = CodeWidthPolicy::new(initial_bits, max_bits);
    let mut reader = BitReader::new(data);
    let mut codes = Vec::new();
    while let Some(code) = reader.read_bits(policy.current_bits())? {
        codes.push(code);
        policy.reserve_next();
    }
    Ok(codes)
}

/// A 4-byte header making a compressed file self-describing instead of
/// relying on encoding parameters supplied out-of-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Starting code width.
    pub initial_bits: u8,
    /// Maximum code width.
    pub max_bits: u8,
    /// Which framing the payload uses.
    pub framing: Framing,
    /// For [`Framing::Fixed`], the final bit width the payload was
    /// packed at (needed to recover `bytes_per_code` on read). Unused
    /// (zero) for [`Framing::Packed`].
    pub final_bits: u8,
}

impl Header {
    const LEN: usize = 4;

    /// Serialize the header to its 4-byte on-disk form.
    pub fn to_bytes(self) -> [u8; Self::LEN] {
        [self.initial_bits, self.max_bits, self.framing.tag(), self.final_bits]
    }

    /// Parse a header from the front of `data`, returning it and the
    /// remaining payload bytes.
    pub fn parse(data: &[u8]) -> Result<(Self, &[u8])> {
        if data.len() < Self::LEN {
            return Err(LzwError::TruncatedStream);
        }
        let header = Header {
            initial_bits: data[0],
            max_bits: data[1],
            framing: Framing::from_tag(data[2])?,
            final_bits: data[3],
        };
        crate::validate_bit_width(header.initial_bits, header.max_bits)?;
        Ok((header, &data[Self::LEN..]))
    }
}

/// Compress `input` into a self-describing container: header + framed
/// codes.
pub fn compress_to_container(
    input: &[u8],
    initial_bits: u8,
    max_bits: u8,
    framing: Framing,
) -> Result<Vec<u8>> {
    let (codes, final_bits) = crate::encode(input.to_vec(), initial_bits, max_bits)?;
    let header = Header {
        initial_bits,
        max_bits,
        framing,
        final_bits,
    };
    let mut out = Vec::with_capacity(Header::LEN + codes.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend(pack_for_header(&codes, &header));
    Ok(out)
}

fn pack_for_header(codes: &[Code], header: &Header) -> Vec<u8> {
    match header.framing {
        Framing::Fixed => pack_fixed(codes, header.final_bits.max(header.initial_bits)),
        Framing::Packed => pack_bits(codes, header.initial_bits, header.max_bits),
    }
}

/// Decompress a container produced by [`compress_to_container`].
pub fn decompress_from_container(data: &[u8]) -> Result<Vec<u8>> {
    let (header, payload) = Header::parse(data)?;
    let codes = match header.framing {
        Framing::Fixed => unpack_fixed(payload, header.final_bits.max(header.initial_bits))?,
        Framing::Packed => unpack_bits(payload, header.initial_bits, header.max_bits)?,
    };
    crate::decode(codes, header.initial_bits, header.max_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    #[test]
    fn fixed_framing_round_trips() {
        let codes = encode(b"TOBEORNOTTOBEORTOBEORNOT".to_vec(), 12, 12).unwrap().0;
        let packed = pack(&codes, 12, 12, Framing::Fixed);
        let unpacked = unpack_fixed(&packed, 12).unwrap();
        assert_eq!(unpacked, codes);
    }

    #[test]
    fn packed_framing_round_trips_with_growth() {
        let input = vec![0x41u8; 300];
        let (codes, _) = encode(input, 9, 12).unwrap();
        let packed = pack(&codes, 9, 12, Framing::Packed);
        let unpacked = unpack(&packed, 9, 12, Framing::Packed).unwrap();
        assert_eq!(unpacked, codes);
    }

    #[test]
    fn container_round_trips_fixed() {
        let input = b"TOBEORNOTTOBEORTOBEORNOT".to_vec();
        let container = compress_to_container(&input, 12, 12, Framing::Fixed).unwrap();
        let output = decompress_from_container(&container).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn container_round_trips_packed_with_growth() {
        let input: Vec<u8> = (0..2000u32).map(|i| (i % 7) as u8).collect();
        let container = compress_to_container(&input, 9, 12, Framing::Packed).unwrap();
        let output = decompress_from_container(&container).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn header_round_trips_bytes() {
        let header = Header {
            initial_bits: 9,
            max_bits: 12,
            framing: Framing::Packed,
            final_bits: 11,
        };
        let bytes = header.to_bytes();
        let (parsed, rest) = Header::parse(&bytes).unwrap();
        assert_eq!(parsed, header);
        assert!(rest.is_empty());
    }

    #[test]
    fn truncated_header_is_rejected() {
        assert!(matches!(Header::parse(&[9, 12]), Err(LzwError::TruncatedStream)));
    }
}
