//! Textual Parsing and Formatting
//!
//! Converts big integers to and from digit strings in any radix from 2 to 36.
//!
//! ## Parsing
//!
//! Input is an optional sign (`+` or `-`; only `+` for `BigUint`) followed by
//! one or more digits. Letters are case-insensitive. Power-of-two radices
//! pack digit bits directly into the magnitude; other radices consume
//! chunks of as many radix digits as fit one `BigDigit`, multiplying the
//! accumulated magnitude by the chunk base once per chunk.
//!
//! ## Formatting
//!
//! Output uses lower-case letters, a leading `-` for negative values, and
//! `"0"` for zero. Non-power-of-two radices repeatedly divide by the chunk
//! base and expand each remainder into digit characters, so the number of
//! long divisions is a fraction of the number of output digits.
//!
//! ## Examples
//!
//! ```rust
//! use entities_bignum::{format, parse, BigInt};
//!
//! let n = parse("-1010", 2).unwrap();
//! assert_eq!(n, BigInt::from(-10));
//! assert_eq!(format(&n, 10), "-10");
//! assert_eq!(format(&parse("FF", 16).unwrap(), 16), "ff");
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::algorithms;
use crate::big_digit::{self, BigDigit, DoubleBigDigit};
use crate::bigint::BigInt;
use crate::biguint::BigUint;
use crate::error::ParseBigIntError;
use crate::sign::Sign;

const DIGIT_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Parse a signed integer from `text` in the given radix.
pub fn parse(text: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
    BigInt::from_str_radix(text, radix)
}

/// Render `value` in the given radix.
///
/// Panics if `radix` is not in `2..=36`.
pub fn format(value: &BigInt, radix: u32) -> String {
    value.to_str_radix(radix)
}

fn check_radix(radix: u32) -> Result<(), ParseBigIntError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(ParseBigIntError::InvalidRadix(radix))
    }
}

// Split off an optional sign; returns (negative, digits).
fn split_sign(text: &str, allow_negative: bool) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'+') => (false, &text[1..]),
        Some(b'-') if allow_negative => (true, &text[1..]),
        _ => (false, text),
    }
}

// Map every character to its digit value, most significant first.
fn digit_values(digits: &str, radix: u32, offset: usize) -> Result<Vec<u8>, ParseBigIntError> {
    digits
        .char_indices()
        .map(|(i, c)| {
            c.to_digit(radix)
                .map(|d| d as u8)
                .ok_or(ParseBigIntError::InvalidDigitForRadix {
                    character: c,
                    index: offset + i,
                    radix,
                })
        })
        .collect()
}

fn parse_signed(text: &str, radix: u32, allow_negative: bool) -> Result<(bool, BigUint), ParseBigIntError> {
    check_radix(radix)?;
    if text.is_empty() {
        return Err(ParseBigIntError::EmptyInput);
    }

    let (negative, digits) = split_sign(text, allow_negative);
    if digits.is_empty() {
        return Err(ParseBigIntError::MissingDigitsAfterSign);
    }

    let values = digit_values(digits, radix, text.len() - digits.len())?;
    let magnitude = if radix.is_power_of_two() {
        from_bitwise_digits_be(&values, radix.trailing_zeros())
    } else {
        from_radix_digits_be(&values, radix)
    };
    Ok((negative, magnitude))
}

// Pack power-of-two radix digits straight into magnitude digits.
fn from_bitwise_digits_be(values: &[u8], bits: u32) -> BigUint {
    let total_bits = values.len() * bits as usize;
    let mut data = Vec::with_capacity(total_bits / big_digit::BITS as usize + 1);

    let mut acc: DoubleBigDigit = 0;
    let mut acc_bits = 0;
    for &v in values.iter().rev() {
        acc |= DoubleBigDigit::from(v) << acc_bits;
        acc_bits += bits;
        if acc_bits >= big_digit::BITS {
            data.push(acc as BigDigit);
            acc >>= big_digit::BITS;
            acc_bits -= big_digit::BITS;
        }
    }
    if acc_bits > 0 {
        data.push(acc as BigDigit);
    }

    BigUint::new(data)
}

// Horner's rule over chunks: every chunk of `power` digits is one digit in
// base `radix^power`.
fn from_radix_digits_be(values: &[u8], radix: u32) -> BigUint {
    let (base, power) = big_digit::radix_base(radix);
    let radix = BigDigit::from(radix);

    let head_len = match values.len() % power {
        0 => power.min(values.len()),
        r => r,
    };
    let (head, tail) = values.split_at(head_len);

    let chunk_value = |chunk: &[u8]| {
        chunk
            .iter()
            .fold(0, |acc: BigDigit, &d| acc * radix + BigDigit::from(d))
    };

    let mut data = vec![chunk_value(head)];
    for chunk in tail.chunks(power) {
        // data = data * base + chunk, in one pass
        let mut carry = chunk_value(chunk);
        for d in data.iter_mut() {
            *d = algorithms::mac_with_carry(0, *d, base, &mut carry);
        }
        if carry != 0 {
            data.push(carry);
        }
    }

    BigUint::new(data)
}

// Least significant first, no high zeros; empty for zero.
fn to_bitwise_digits_le(u: &BigUint, bits: u32) -> Vec<u8> {
    let mask: DoubleBigDigit = (1 << bits) - 1;
    let mut out = Vec::with_capacity((u.bits() as usize + bits as usize - 1) / bits as usize);

    let mut acc: DoubleBigDigit = 0;
    let mut acc_bits = 0;
    for &d in u.digits() {
        acc |= DoubleBigDigit::from(d) << acc_bits;
        acc_bits += big_digit::BITS;
        while acc_bits >= bits {
            out.push((acc & mask) as u8);
            acc >>= bits;
            acc_bits -= bits;
        }
    }
    if acc_bits > 0 {
        out.push((acc & mask) as u8);
    }

    while let Some(&0) = out.last() {
        out.pop();
    }
    out
}

// Least significant first, no high zeros; empty for zero.
fn to_radix_digits_le(u: &BigUint, radix: u32) -> Vec<u8> {
    let (base, power) = big_digit::radix_base(radix);
    let radix = BigDigit::from(radix);

    // Scratch copy divided in place on every round
    let mut scratch = u.digits().to_vec();
    let mut out = Vec::new();

    while scratch.len() > 1 {
        let mut r = algorithms::div_rem_digit_in_place(&mut scratch, base);
        algorithms::trim_vec(&mut scratch);
        for _ in 0..power {
            out.push((r % radix) as u8);
            r /= radix;
        }
    }

    let mut r = scratch.first().copied().unwrap_or(0);
    while r != 0 {
        out.push((r % radix) as u8);
        r /= radix;
    }

    while let Some(&0) = out.last() {
        out.pop();
    }
    out
}

fn to_str_radix_unsigned(u: &BigUint, radix: u32) -> String {
    assert!((2..=36).contains(&radix), "radix must be within 2..=36, got {}", radix);

    let digits = if radix.is_power_of_two() {
        to_bitwise_digits_le(u, radix.trailing_zeros())
    } else {
        to_radix_digits_le(u, radix)
    };

    if digits.is_empty() {
        return String::from("0");
    }
    digits
        .iter()
        .rev()
        .map(|&d| char::from(DIGIT_CHARS[d as usize]))
        .collect()
}

impl BigUint {
    /// Parse a non-negative integer; a leading `+` is accepted, `-` is not.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigUint, ParseBigIntError> {
        parse_signed(text, radix, false)
            .map(|(_, magnitude)| magnitude)
            .map_err(|e| {
                debug!(error = %e, radix, "rejected unsigned integer literal");
                e
            })
    }

    /// Render in the given radix. Panics if `radix` is not in `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        to_str_radix_unsigned(self, radix)
    }
}

impl BigInt {
    /// Parse an integer with an optional leading `+` or `-`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        let (negative, magnitude) = parse_signed(text, radix, true).map_err(|e| {
            debug!(error = %e, radix, "rejected integer literal");
            e
        })?;
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        Ok(BigInt::from_biguint(sign, magnitude))
    }

    /// Render in the given radix. Panics if `radix` is not in `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let digits = to_str_radix_unsigned(self.magnitude(), radix);
        if self.is_negative() {
            format!("-{}", digits)
        } else {
            digits
        }
    }
}

impl FromStr for BigUint {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<BigUint, ParseBigIntError> {
        BigUint::from_str_radix(s, 10)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        BigInt::from_str_radix(s, 10)
    }
}

macro_rules! impl_radix_fmt {
    ($trait:ident, $radix:expr, $prefix:expr, $upper:expr) => {
        impl fmt::$trait for BigUint {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let mut digits = self.to_str_radix($radix);
                if $upper {
                    digits.make_ascii_uppercase();
                }
                f.pad_integral(true, $prefix, &digits)
            }
        }

        impl fmt::$trait for BigInt {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let mut digits = self.magnitude().to_str_radix($radix);
                if $upper {
                    digits.make_ascii_uppercase();
                }
                f.pad_integral(!self.is_negative(), $prefix, &digits)
            }
        }
    };
}

impl_radix_fmt!(Display, 10, "", false);
impl_radix_fmt!(LowerHex, 16, "0x", false);
impl_radix_fmt!(UpperHex, 16, "0x", true);
impl_radix_fmt!(Octal, 8, "0o", false);
impl_radix_fmt!(Binary, 2, "0b", false);
