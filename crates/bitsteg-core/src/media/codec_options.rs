use std::fmt;

use crate::SteganoError;

/// The bit of a color channel that carries the payload, `0` is the least significant bit.
///
/// Always within `0..=7`, construct it via [`TryFrom<u8>`].
/// Higher positions make the hidden data visible to the naked eye.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BitPosition(u8);

impl BitPosition {
    pub const LEAST_SIGNIFICANT: BitPosition = BitPosition(0);
    pub const MOST_SIGNIFICANT: BitPosition = BitPosition(7);

    pub fn get(&self) -> u8 {
        self.0
    }

    /// the single bit set at this position
    pub fn mask(&self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<u8> for BitPosition {
    type Error = SteganoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 7 {
            return Err(SteganoError::InvalidBitPosition(value));
        }
        Ok(Self(value))
    }
}

impl From<BitPosition> for u8 {
    fn from(value: BitPosition) -> Self {
        value.0
    }
}

impl fmt::Display for BitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Codec configuration for bit-plane encoding/decoding
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CodecOptions {
    /// The bit of the first color channel (red) that is overwritten with payload.
    pub bit_position: BitPosition,
}

impl CodecOptions {
    pub fn with_bit_position(mut self, bit_position: BitPosition) -> Self {
        self.bit_position = bit_position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_the_least_significant_bit() {
        assert_eq!(CodecOptions::default().bit_position, BitPosition::LEAST_SIGNIFICANT);
        assert_eq!(BitPosition::default().mask(), 0b0000_0001);
    }

    #[test]
    fn should_accept_bits_of_a_byte() {
        for n in 0..=7u8 {
            let bit = BitPosition::try_from(n).expect("bit position should be valid");
            assert_eq!(bit.get(), n);
            assert_eq!(bit.mask(), 1 << n);
        }
        assert_eq!(BitPosition::MOST_SIGNIFICANT.mask(), 0b1000_0000);
    }

    #[test]
    fn should_reject_bits_outside_of_a_byte() {
        match BitPosition::try_from(8) {
            Err(SteganoError::InvalidBitPosition(8)) => (),
            other => panic!("expected InvalidBitPosition(8), got {other:?}"),
        }
        assert!(BitPosition::try_from(u8::MAX).is_err());
    }
}
