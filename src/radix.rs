//! Decimal string conversion.
//!
//! Radix conversion is composed from the engine's own primitives, the same
//! way a host drives them across the boundary: parsing multiplies by 10^9
//! and adds nine digits at a time, and formatting converts the magnitude
//! into base-10^9 chunks with a per-word Horner pass. Nine digits per chunk
//! is the largest power of ten that still fits a single 30-bit word.

use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::str::FromStr;

use crate::bigint::{Bigint, Sign};
use crate::error::{Error, ErrorCode};
use crate::word::WORD_BITS;

// 10^9 fits a word (2^30 - 1 = 1_073_741_823), ten digits would not.
const CHUNK_RADIX: u32 = 1_000_000_000;
const CHUNK_DIGITS: usize = 9;

/// Value of a group of at most nine ASCII digits.
#[inline]
fn chunk_value(digits: &[u8]) -> u32 {
    let mut chunk = 0u32;
    for &byte in digits {
        chunk = chunk * 10 + u32::from(byte - b'0');
    }
    chunk
}

impl Bigint {
    // Magnitude as little-endian base-10^9 chunks: for each word from most
    // to least significant, chunks := chunks * 2^30 + word. The inter-chunk
    // carry stays below 2^30 + 2, so every step fits the u64 accumulator.
    fn decimal_chunks(&self) -> Vec<u64> {
        let radix = u64::from(CHUNK_RADIX);
        let mut chunks: Vec<u64> = Vec::with_capacity(self.word_count() + 1);
        chunks.push(0);
        for &word in self.words().iter().rev() {
            let mut carry = u64::from(word);
            for chunk in chunks.iter_mut() {
                let wide = (*chunk << WORD_BITS) + carry;
                *chunk = wide % radix;
                carry = wide / radix;
            }
            while carry != 0 {
                chunks.push(carry % radix);
                carry /= radix;
            }
        }
        chunks
    }
}

impl Display for Bigint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign() == Sign::Negative {
            f.write_str("-")?;
        }
        let chunks = self.decimal_chunks();
        let mut buffer = itoa::Buffer::new();
        let mut iter = chunks.iter().rev();
        if let Some(&top) = iter.next() {
            f.write_str(buffer.format(top))?;
        }
        for &chunk in iter {
            // Lower chunks are fixed-width: zero-pad to nine digits.
            let digits = buffer.format(chunk);
            for _ in digits.len()..CHUNK_DIGITS {
                f.write_str("0")?;
            }
            f.write_str(digits)?;
        }
        Ok(())
    }
}

impl FromStr for Bigint {
    type Err = Error;

    /// Parse an optionally `-`-prefixed ASCII decimal string.
    fn from_str(s: &str) -> Result<Bigint, Error> {
        let bytes = s.as_bytes();
        let (negative, digits) = match bytes.split_first() {
            Some((&b'-', rest)) => (true, rest),
            _ => (false, bytes),
        };
        if digits.is_empty() {
            return Err(Error::parse(ErrorCode::EmptyInput));
        }
        for &byte in digits {
            if !byte.is_ascii_digit() {
                return Err(Error::parse(ErrorCode::InvalidDigit(byte)));
            }
        }

        let mut value = Bigint::from_word(Sign::Zero, 0)?;
        // Ten bits per three digits overestimates log2(10)/3 slightly, so a
        // single up-front growth covers the whole build; the exact-fit
        // allocator would otherwise reallocate once per chunk.
        let bits = digits.len() * 10 / 3 + 1;
        value.ensure_capacity(bits / WORD_BITS as usize + 1)?;

        // Leading group first, sized so the remainder splits into full
        // nine-digit chunks.
        let first = (digits.len() - 1) % CHUNK_DIGITS + 1;
        value.add_word(chunk_value(&digits[..first]))?;
        let mut index = first;
        while index < digits.len() {
            value.mul_word(CHUNK_RADIX as i32)?;
            value.add_word(chunk_value(&digits[index..index + CHUNK_DIGITS]))?;
            index += CHUNK_DIGITS;
        }

        if negative {
            value.negate();
        }
        Ok(value)
    }
}
