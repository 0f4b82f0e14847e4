//! LZW dictionary (code table) management.
//!
//! Entries are stored as `(prefix_code, appended_byte)` pairs rather than
//! full byte strings: extending the current match by one byte is then a
//! single `HashMap` lookup keyed by `(prefix_code, byte)`, not a clone of
//! the whole candidate string. A string is only materialized (via
//! [`Dictionary::expand`]) when it actually needs to be written to the
//! output.

use crate::error::{LzwError, Result};
use crate::Code;
use std::collections::HashMap;

/// The first 256 codes are permanently assigned to their singleton byte.
const SINGLE_BYTE_CODES: Code = 256;

#[derive(Debug, Clone, Copy)]
struct DictEntry {
    prefix: Code,
    byte: u8,
}

/// Append-only LZW code table.
///
/// Codes `0..256` are the singleton bytes and are always present; codes
/// `256..` are registered one at a time via [`Dictionary::insert`].
#[derive(Debug)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    index: HashMap<(Code, u8), Code>,
}

impl Dictionary {
    /// Create a dictionary seeded with the 256 singleton-byte codes.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The next code that will be assigned by [`Dictionary::insert`].
    pub fn next_code(&self) -> Code {
        SINGLE_BYTE_CODES + self.entries.len() as Code
    }

    /// Whether `code` has already been assigned (singleton or dynamic).
    pub fn is_known(&self, code: Code) -> bool {
        code < self.next_code()
    }

    /// If `prefix · byte` is already registered, return its code.
    ///
    /// Runs in O(1): this is the "(prefix_code, next_byte) → new_code"
    /// formulation, not a lookup keyed by the full candidate string.
    pub fn contains_extension(&self, prefix: Code, byte: u8) -> Option<Code> {
        self.index.get(&(prefix, byte)).copied()
    }

    /// Register `prefix · byte` under `code`.
    ///
    /// Preconditions (debug-checked): `code` is the next unassigned code,
    /// and `prefix` already names a present string.
    pub fn insert(&mut self, prefix: Code, byte: u8, code: Code) {
        debug_assert_eq!(code, self.next_code(), "codes must be assigned in order");
        debug_assert!(self.is_known(prefix), "prefix must already be present");
        self.entries.push(DictEntry { prefix, byte });
        self.index.insert((prefix, byte), code);
    }

    /// Reconstruct the byte string named by `code`.
    pub fn expand(&self, code: Code) -> Result<Vec<u8>> {
        let mut reversed = Vec::new();
        let mut current = code;
        loop {
            if current < SINGLE_BYTE_CODES {
                reversed.push(current as u8);
                break;
            }
            let idx = (current - SINGLE_BYTE_CODES) as usize;
            let entry = *self
                .entries
                .get(idx)
                .ok_or(LzwError::InvalidCode(code))?;
            reversed.push(entry.byte);
            current = entry.prefix;
        }
        reversed.reverse();
        Ok(reversed)
    }

    /// The first byte of the string named by `code`, without
    /// materializing the whole string.
    pub fn first_byte(&self, code: Code) -> Result<u8> {
        let mut current = code;
        loop {
            if current < SINGLE_BYTE_CODES {
                return Ok(current as u8);
            }
            let idx = (current - SINGLE_BYTE_CODES) as usize;
            let entry = self
                .entries
                .get(idx)
                .ok_or(LzwError::InvalidCode(code))?;
            current = entry.prefix;
        }
    }

    /// Find the code for a byte string, if present.
    ///
    /// Used only at stream termination (or by tests checking dictionary
    /// invariants) — it is O(next_code) and is not on the encode/decode
    /// hot path, which tracks the current code directly instead.
    pub fn code_of(&self, bytes: &[u8]) -> Option<Code> {
        if bytes.len() == 1 {
            return Some(bytes[0] as Code);
        }
        (SINGLE_BYTE_CODES..self.next_code()).find(|&code| {
            self.expand(code)
                .map(|expanded| expanded == bytes)
                .unwrap_or(false)
        })
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
