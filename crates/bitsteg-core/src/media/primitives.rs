use super::BitPosition;

/// Stores one payload bit inside a color channel value
pub trait HideBit {
    fn hide_bit(self, bit: bool, position: BitPosition);
}

/// Reads one payload bit from a color channel value
pub trait UnveilBit {
    fn unveil_bit(self, position: BitPosition) -> bool;
}

impl HideBit for &mut u8 {
    #[inline(always)]
    fn hide_bit(self, bit: bool, position: BitPosition) {
        if bit {
            *self |= position.mask();
        } else {
            *self &= !position.mask();
        }
    }
}

impl UnveilBit for u8 {
    #[inline(always)]
    fn unveil_bit(self, position: BitPosition) -> bool {
        self & position.mask() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_only_touch_the_chosen_bit() {
        let third = BitPosition::try_from(3).unwrap();

        let mut color: u8 = 0b1010_0000;
        color.hide_bit(true, third);
        assert_eq!(color, 0b1010_1000);

        let mut color: u8 = 0b1111_1111;
        color.hide_bit(false, third);
        assert_eq!(color, 0b1111_0111);

        let mut color: u8 = 0b0000_1000;
        color.hide_bit(true, third);
        assert_eq!(color, 0b0000_1000, "setting a set bit is a no-op");
    }

    #[test]
    fn should_unveil_what_was_hidden() {
        for n in 0..=7u8 {
            let position = BitPosition::try_from(n).unwrap();
            for bit in [true, false] {
                let mut color: u8 = 0b0101_0101;
                color.hide_bit(bit, position);
                assert_eq!(color.unveil_bit(position), bit, "bit {n}");
            }
        }
    }
}
