use crate::{Result, SteganoError};

/// number of bits a payload byte is spread over
pub const BITS_PER_BYTE: usize = 8;

/// Splits a byte into its bits, most significant bit first.
///
/// ## Example of usage
/// ```rust
/// use bitsteg_core::bits::byte_to_bits;
///
/// assert_eq!(
///     byte_to_bits(b'H'),
///     [false, true, false, false, true, false, false, false]
/// );
/// ```
pub fn byte_to_bits(byte: u8) -> [bool; BITS_PER_BYTE] {
    let mut bits = [false; BITS_PER_BYTE];
    let mut residual = byte;
    for (i, bit) in bits.iter_mut().enumerate() {
        let weight = 1u8 << (7 - i);
        if residual >= weight {
            *bit = true;
            residual -= weight;
        }
    }

    bits
}

/// Assembles a byte from exactly 8 bits, most significant bit first.
pub fn bits_to_byte(bits: &[bool]) -> Result<u8> {
    if bits.len() != BITS_PER_BYTE {
        return Err(SteganoError::InvalidBitCount(bits.len()));
    }

    Ok(bits
        .iter()
        .enumerate()
        .filter(|(_, bit)| **bit)
        .fold(0, |byte, (i, _)| byte | (1u8 << (7 - i))))
}
