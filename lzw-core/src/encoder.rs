//! LZW encoder (compression).

use crate::dictionary::Dictionary;
use crate::error::{LzwError, Result};
use crate::observer::{NullObserver, Observer};
use crate::policy::CodeWidthPolicy;
use crate::{validate_bit_width, Code};

/// Encodes a byte stream into LZW codes.
#[derive(Debug)]
pub struct Encoder {
    dict: Dictionary,
    policy: CodeWidthPolicy,
}

impl Encoder {
    /// Create an encoder with the given width bounds.
    pub fn new(initial_bits: u8, max_bits: u8) -> Result<Self> {
        validate_bit_width(initial_bits, max_bits)?;
        Ok(Self {
            dict: Dictionary::new(),
            policy: CodeWidthPolicy::new(initial_bits, max_bits),
        })
    }

    /// The code width in effect for the *next* code to be emitted.
    pub fn current_bits(&self) -> u8 {
        self.policy.current_bits()
    }

    /// Encode `input`, reporting dictionary events to `observer`.
    ///
    /// Maintains the longest current match, extends it while it stays in
    /// the dictionary, otherwise emits the match's code, registers the
    /// mismatching extension, and starts a new match with the
    /// mismatching byte.
    pub fn encode_with_observer<I, O>(&mut self, input: I, mut observer: O) -> Result<Vec<Code>>
    where
        I: IntoIterator<Item = u8>,
        O: Observer,
    {
        let mut codes = Vec::new();
        let mut iter = input.into_iter();

        // The very first byte transitions current_match from empty to
        // its singleton without emitting anything.
        let mut current_code = match iter.next() {
            Some(b) => b as Code,
            None => return Ok(codes),
        };

        for byte in iter {
            match self.dict.contains_extension(current_code, byte) {
                Some(extended) => current_code = extended,
                None => {
                    codes.push(current_code);
                    observer.on_emit(current_code);

                    if let Some(new_code) = self.policy.reserve_next() {
                        self.dict.insert(current_code, byte, new_code);
                        observer.on_insert(new_code);
                    }

                    current_code = byte as Code;
                }
            }
        }

        // current_match is never empty here: it was seeded above and
        // every subsequent step leaves it pointing at a known code.
        if !self.dict.is_known(current_code) {
            return Err(LzwError::InternalInvariant(
                "current_match absent from dictionary at flush",
            ));
        }
        codes.push(current_code);
        observer.on_emit(current_code);

        Ok(codes)
    }

    /// Encode `input` without observation.
    pub fn encode<I: IntoIterator<Item = u8>>(&mut self, input: I) -> Result<Vec<Code>> {
        self.encode_with_observer(input, NullObserver)
    }
}

/// Encode `input` and return its codes plus the final bit width reached.
///
/// Pure byte-in/code-out: this function has no knowledge of how the
/// codes will later be packed into bytes.
pub fn encode<I: IntoIterator<Item = u8>>(
    input: I,
    initial_bits: u8,
    max_bits: u8,
) -> Result<(Vec<Code>, u8)> {
    let mut encoder = Encoder::new(initial_bits, max_bits)?;
    let codes = encoder.encode(input)?;
    Ok((codes, encoder.current_bits()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;

    #[test]
    fn empty_input_yields_no_codes() {
        let (codes, _) = encode(Vec::new(), 9, 12).unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn single_byte_yields_itself() {
        let (codes, _) = encode(vec![65u8], 9, 12).unwrap();
        assert_eq!(codes, vec![65]);
    }

    #[test]
    fn kwkwk_pattern_matches_spec_scenario_s1() {
        // The about-to-be-assigned code 258 is reused for the final
        // match itself, so it never needs a standalone singleton after
        // it: four codes, not five. Verified against the reference
        // trie-based implementation this is grounded on.
        let (codes, _) = encode(b"ABABABA".to_vec(), 12, 12).unwrap();
        assert_eq!(codes, vec![65, 66, 256, 258]);
    }

    #[test]
    fn dictionary_reuse_matches_spec_scenario_s2() {
        let input = b"TOBEORNOTTOBEORTOBEORNOT".to_vec();
        let (codes, _) = encode(input.clone(), 12, 12).unwrap();
        assert_eq!(codes.len(), 16);
        assert_eq!(decode(codes, 12, 12).unwrap(), input);
    }

    #[test]
    fn round_trips_through_decoder() {
        let input = b"The quick brown fox jumps over the lazy dog".to_vec();
        let (codes, _final_bits) = encode(input.clone(), 9, 12).unwrap();
        assert_eq!(decode(codes, 9, 12).unwrap(), input);
    }
}
