//! Digit Definitions
//!
//! A magnitude is stored as a little-endian sequence of `BigDigit`s. Every
//! arithmetic primitive works on `DoubleBigDigit` intermediates so that a
//! digit product plus two carries never overflows.
//!
//! The default digit is 32 bits wide. Enabling the `u64_digit` feature
//! switches to 64-bit digits with 128-bit intermediates.

#[cfg(not(feature = "u64_digit"))]
pub type BigDigit = u32;
#[cfg(not(feature = "u64_digit"))]
pub type DoubleBigDigit = u64;

#[cfg(feature = "u64_digit")]
pub type BigDigit = u64;
#[cfg(feature = "u64_digit")]
pub type DoubleBigDigit = u128;

/// Width of one digit in bits
pub const BITS: u32 = BigDigit::BITS;

/// `2^BITS`, the numeric base of a magnitude
pub(crate) const BASE: DoubleBigDigit = 1 << BITS;

const LO_MASK: DoubleBigDigit = BigDigit::MAX as DoubleBigDigit;

#[inline]
fn get_hi(n: DoubleBigDigit) -> BigDigit {
    (n >> BITS) as BigDigit
}

#[inline]
fn get_lo(n: DoubleBigDigit) -> BigDigit {
    (n & LO_MASK) as BigDigit
}

/// Split one `DoubleBigDigit` into `(hi, lo)` digits.
#[inline]
pub(crate) fn from_doublebigdigit(n: DoubleBigDigit) -> (BigDigit, BigDigit) {
    (get_hi(n), get_lo(n))
}

/// Join two digits into one `DoubleBigDigit`.
#[inline]
pub(crate) fn to_doublebigdigit(hi: BigDigit, lo: BigDigit) -> DoubleBigDigit {
    (DoubleBigDigit::from(hi) << BITS) | DoubleBigDigit::from(lo)
}

/// Largest power of `radix` that fits in one digit, and its exponent.
///
/// Parsing and formatting process that many radix digits per digit-sized
/// multiply or divide.
pub(crate) fn radix_base(radix: u32) -> (BigDigit, usize) {
    debug_assert!((2..=36).contains(&radix));
    let radix = BigDigit::from(radix);
    let mut base = radix;
    let mut power = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        power += 1;
    }
    (base, power)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_join() {
        let n: DoubleBigDigit = (DoubleBigDigit::from(7u8) << BITS) | 9;
        assert_eq!(from_doublebigdigit(n), (7, 9));
        assert_eq!(to_doublebigdigit(7, 9), n);
    }

    #[test]
    fn test_radix_base_is_maximal() {
        for radix in 2..=36u32 {
            let (base, power) = radix_base(radix);
            assert_eq!(base, BigDigit::from(radix).pow(power as u32));
            assert!(base.checked_mul(BigDigit::from(radix)).is_none());
        }
    }

    #[cfg(not(feature = "u64_digit"))]
    #[test]
    fn test_radix_base_known_values() {
        assert_eq!(radix_base(10), (1_000_000_000, 9));
        assert_eq!(radix_base(16), (0x1000_0000, 7));
    }
}
