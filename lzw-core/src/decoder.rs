//! LZW decoder (decompression).

use crate::dictionary::Dictionary;
use crate::error::{LzwError, Result};
use crate::observer::{NullObserver, Observer};
use crate::policy::CodeWidthPolicy;
use crate::{validate_bit_width, Code};

/// Decodes a sequence of LZW codes back into bytes.
#[derive(Debug)]
pub struct Decoder {
    dict: Dictionary,
    policy: CodeWidthPolicy,
}

impl Decoder {
    /// Create a decoder with the same width bounds used to encode.
    pub fn new(initial_bits: u8, max_bits: u8) -> Result<Self> {
        validate_bit_width(initial_bits, max_bits)?;
        Ok(Self {
            dict: Dictionary::new(),
            policy: CodeWidthPolicy::new(initial_bits, max_bits),
        })
    }

    /// The code width the bit-unpacker should be using right now.
    pub fn current_bits(&self) -> u8 {
        self.policy.current_bits()
    }

    /// Decode `input`, reporting dictionary events to `observer`.
    ///
    /// The first code must be a singleton; every subsequent code is
    /// either already registered, or is exactly the about-to-be-assigned
    /// `next_code` (the KwKwK case), or is invalid. A new entry is
    /// registered from `previous · entry[0]` after each code is
    /// resolved, mirroring the encoder's emit-then-insert order.
    pub fn decode_with_observer<I, O>(&mut self, input: I, mut observer: O) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = Code>,
        O: Observer,
    {
        let mut output = Vec::new();
        let mut iter = input.into_iter();

        let first = match iter.next() {
            Some(code) => code,
            None => return Ok(output),
        };
        if first >= 256 {
            return Err(LzwError::InvalidCode(first));
        }
        output.push(first as u8);
        observer.on_emit(first);
        let mut previous_code = first;

        for code in iter {
            let (entry, entry_first_byte) = if self.dict.is_known(code) {
                let entry = self.dict.expand(code)?;
                let first_byte = entry[0];
                (entry, first_byte)
            } else if code == self.dict.next_code() {
                let first_byte = self.dict.first_byte(previous_code)?;
                let mut entry = self.dict.expand(previous_code)?;
                entry.push(first_byte);
                log::trace!("KwKwK resolved: code {code} = previous · previous[0]");
                (entry, first_byte)
            } else {
                return Err(LzwError::InvalidCode(code));
            };

            output.extend_from_slice(&entry);
            observer.on_emit(code);

            if let Some(new_code) = self.policy.reserve_next() {
                self.dict.insert(previous_code, entry_first_byte, new_code);
                observer.on_insert(new_code);
            }

            previous_code = code;
        }

        Ok(output)
    }

    /// Decode `input` without observation.
    pub fn decode<I: IntoIterator<Item = Code>>(&mut self, input: I) -> Result<Vec<u8>> {
        self.decode_with_observer(input, NullObserver)
    }
}

/// Decode a code sequence produced by a conforming encoder with the same
/// `(initial_bits, max_bits)`.
pub fn decode<I: IntoIterator<Item = Code>>(
    input: I,
    initial_bits: u8,
    max_bits: u8,
) -> Result<Vec<u8>> {
    let mut decoder = Decoder::new(initial_bits, max_bits)?;
    decoder.decode(input)
}
