//! Bit extraction.
//!
//! Input bytes expand to an ordered bit sequence, most-significant bit first
//! within each byte. Bits are plain `bool`s, so only 0/1 ever reach the
//! encoders.

use bitvec::prelude::{BitSlice, BitVec, Msb0};

/// Borrowed view over a run of bits (one layout row, for example).
pub type Bits = BitSlice<u8, Msb0>;

/// Immutable, MSB-first bit sequence extracted from input bytes.
///
/// # Examples
/// ```
/// use linepaint_core::BitSequence;
///
/// let bits = BitSequence::from_bytes(b"A");
/// assert_eq!(bits.len(), 8);
/// assert_eq!(bits.to_bit_string(), "01000001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSequence {
    bits: BitVec<u8, Msb0>,
}

impl BitSequence {
    pub fn from_bytes(input: &[u8]) -> Self {
        Self {
            bits: BitVec::from_slice(input),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bitslice(&self) -> &Bits {
        self.bits.as_bitslice()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Textual `0`/`1` form, handy in logs and test assertions.
    pub fn to_bit_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

/// Expand input bytes into their bit sequence.
pub fn extract(input: &[u8]) -> BitSequence {
    BitSequence::from_bytes(input)
}

#[cfg(test)]
mod tests {
    use super::{BitSequence, extract};

    #[test]
    fn expands_each_byte_msb_first() {
        let bits = extract(&[0x80, 0x01]);
        assert_eq!(bits.to_bit_string(), "1000000000000001");
    }

    #[test]
    fn length_is_eight_bits_per_byte() {
        for len in 0..16usize {
            let input = vec![0xA5u8; len];
            assert_eq!(extract(&input).len(), 8 * len);
        }
    }

    #[test]
    fn empty_input_gives_empty_sequence() {
        let bits = BitSequence::from_bytes(&[]);
        assert!(bits.is_empty());
        assert_eq!(bits.to_bit_string(), "");
    }

    #[test]
    fn multibyte_utf8_is_taken_byte_by_byte() {
        let bits = extract("ぴ".as_bytes());
        assert_eq!(bits.len(), 24);
        assert_eq!(&bits.to_bit_string()[..8], "11100011");
    }
}
