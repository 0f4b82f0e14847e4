//! Pure Rust LZW (Lempel-Ziv-Welch) dictionary codec core.
//!
//! This crate implements the compression algorithm only: a growable
//! dictionary, the bit-width growth policy that governs it, an encoder
//! and decoder operating purely on codes, and the byte-level framing
//! that turns a code sequence into a self-describing container. File
//! I/O, argument parsing, and progress reporting belong to the `lzw-cli`
//! binary built on top of this crate, not here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod container;
pub mod dictionary;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod observer;
pub mod policy;

pub use container::{compress_to_container, decompress_from_container, Framing, Header};
pub use decoder::{decode, Decoder};
pub use encoder::{encode, Encoder};
pub use error::{LzwError, Result};
pub use observer::{NullObserver, Observer};

/// An LZW dictionary code. `u32` comfortably covers the practical
/// ceiling of 24-bit codes with headroom to spare.
pub type Code = u32;

/// The narrowest code width that can address the 256 singleton-byte
/// codes plus at least one dynamic entry.
pub const MIN_BITS: u8 = 9;

/// The practical ceiling on code width this codec enforces.
pub const MAX_BITS: u8 = 24;

/// Validate `(initial_bits, max_bits)` against the supported range.
///
/// `initial_bits` must be able to address at least code 256 (the first
/// dynamic code), so 9 is the true floor regardless of the wider `8`
/// mentioned elsewhere; `max_bits` is capped at 24 as the practical
/// ceiling for this implementation's bit-packing. `initial_bits` may
/// not exceed `max_bits`.
pub fn validate_bit_width(initial_bits: u8, max_bits: u8) -> Result<()> {
    if !(MIN_BITS..=MAX_BITS).contains(&initial_bits) {
        return Err(LzwError::invalid_argument(format!(
            "initial_bits must be in {MIN_BITS}..={MAX_BITS}, got {initial_bits}"
        )));
    }
    if !(MIN_BITS..=MAX_BITS).contains(&max_bits) {
        return Err(LzwError::invalid_argument(format!(
            "max_bits must be in {MIN_BITS}..={MAX_BITS}, got {max_bits}"
        )));
    }
    if initial_bits > max_bits {
        return Err(LzwError::invalid_argument(format!(
            "initial_bits ({initial_bits}) must not exceed max_bits ({max_bits})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_initial_bits_below_nine() {
        assert!(validate_bit_width(8, 12).is_err());
    }

    #[test]
    fn rejects_max_bits_above_twenty_four() {
        assert!(validate_bit_width(9, 25).is_err());
    }

    #[test]
    fn rejects_initial_above_max() {
        assert!(validate_bit_width(12, 10).is_err());
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(validate_bit_width(9, 9).is_ok());
        assert!(validate_bit_width(9, 24).is_ok());
        assert!(validate_bit_width(24, 24).is_ok());
    }
}
