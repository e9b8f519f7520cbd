//! Common Encoding/Decoding Utilities
//!
//! Provides shared helper functions for encoding and decoding big integers in
//! the external term format. [`BignumCodec`](crate::BignumCodec) picks the
//! tag; the functions here handle the two big integer layouts.
//!
//! ## Encoding Format
//!
//! - **SMALL_BIG_EXT** (tag 110): 1 byte tag + 1 byte arity + 1 byte sign + n bytes (little-endian)
//! - **LARGE_BIG_EXT** (tag 111): 1 byte tag + 4 bytes arity (big-endian) + 1 byte sign + n bytes (little-endian)

use std::fmt;

use entities_bignum::{BigInt, Sign};

/// Unsigned 8-bit integer: tag + 1 byte
pub const SMALL_INTEGER_EXT: u8 = 97;
/// Signed 32-bit big-endian integer: tag + 4 bytes
pub const INTEGER_EXT: u8 = 98;
/// Big integer with up to 255 magnitude bytes
pub const SMALL_BIG_EXT: u8 = 110;
/// Big integer with a 32-bit byte count
pub const LARGE_BIG_EXT: u8 = 111;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Buffer too small
    BufferTooSmall,
    /// Value too large to encode
    ValueTooLarge,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodeError::BufferTooSmall => write!(f, "buffer too small for encoded value"),
            EncodeError::ValueTooLarge => write!(f, "value too large to encode"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer too short
    BufferTooShort,
    /// Invalid format
    InvalidFormat(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::BufferTooShort => write!(f, "buffer too short"),
            DecodeError::InvalidFormat(msg) => write!(f, "invalid format: {}", msg),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Number of bytes [`encode_big_integer`] writes for `value`.
pub fn big_integer_size(value: &BigInt) -> usize {
    let arity = magnitude_len(value);
    if arity > 255 {
        6 + arity
    } else {
        3 + arity
    }
}

fn magnitude_len(value: &BigInt) -> usize {
    (value.magnitude().bits() as usize).div_ceil(8).max(1)
}

/// Encode a big integer as SMALL_BIG_EXT or LARGE_BIG_EXT
///
/// Appends to `buf` starting at `index`, growing it as needed, and advances
/// `index` past the written bytes.
///
/// # Returns
///
/// * `Ok(bytes_written)` - Number of bytes written
/// * `Err(EncodeError::ValueTooLarge)` - Magnitude needs more than `u32::MAX` bytes
pub fn encode_big_integer(
    buf: &mut Vec<u8>,
    index: &mut usize,
    value: &BigInt,
) -> Result<usize, EncodeError> {
    let start_index = *index;
    let (bytes, is_negative) = integer_to_bytes(value);
    let arity = bytes.len();

    let needed = big_integer_size(value);
    buf.resize(buf.len().max(*index + needed), 0);

    if arity > 255 {
        let arity_u32 = u32::try_from(arity).map_err(|_| EncodeError::ValueTooLarge)?;
        buf[*index] = LARGE_BIG_EXT;
        *index += 1;
        buf[*index..*index + 4].copy_from_slice(&arity_u32.to_be_bytes());
        *index += 4;
    } else {
        buf[*index] = SMALL_BIG_EXT;
        *index += 1;
        buf[*index] = arity as u8;
        *index += 1;
    }

    buf[*index] = u8::from(is_negative);
    *index += 1;

    buf[*index..*index + arity].copy_from_slice(&bytes);
    *index += arity;

    Ok(*index - start_index)
}

/// Decode a big integer from SMALL_BIG_EXT or LARGE_BIG_EXT
///
/// # Returns
///
/// * `Ok((integer, bytes_consumed))` - Decoded value and number of bytes consumed
/// * `Err(DecodeError)` - Decoding error
pub fn decode_big_integer(data: &[u8]) -> Result<(BigInt, usize), DecodeError> {
    let (&tag, rest) = data.split_first().ok_or(DecodeError::BufferTooShort)?;

    let (arity, header) = match tag {
        SMALL_BIG_EXT => {
            let &n = rest.first().ok_or(DecodeError::BufferTooShort)?;
            (n as usize, 2)
        }
        LARGE_BIG_EXT => {
            let n: [u8; 4] = rest
                .get(..4)
                .and_then(|b| b.try_into().ok())
                .ok_or(DecodeError::BufferTooShort)?;
            (u32::from_be_bytes(n) as usize, 5)
        }
        other => {
            return Err(DecodeError::InvalidFormat(format!(
                "Expected big integer tag ({} or {}), got {}",
                SMALL_BIG_EXT, LARGE_BIG_EXT, other
            )))
        }
    };

    let &sign = data.get(header).ok_or(DecodeError::BufferTooShort)?;
    let start = header + 1;
    let end = start
        .checked_add(arity)
        .filter(|&end| end <= data.len())
        .ok_or(DecodeError::BufferTooShort)?;

    let value = bytes_to_integer(&data[start..end], sign != 0);
    Ok((value, end))
}

/// Split a big integer into little-endian magnitude bytes and a sign flag
///
/// Zero is a single `0` byte and is never negative.
pub fn integer_to_bytes(value: &BigInt) -> (Vec<u8>, bool) {
    let (sign, bytes) = value.to_bytes_le();
    (bytes, sign == Sign::Negative)
}

/// Rebuild a big integer from little-endian magnitude bytes and a sign flag
///
/// Trailing zero bytes are ignored, and a zero magnitude is zero whatever
/// the flag says.
pub fn bytes_to_integer(bytes: &[u8], is_negative: bool) -> BigInt {
    let sign = if is_negative { Sign::Negative } else { Sign::Positive };
    BigInt::from_bytes_le(sign, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_big_layout() {
        let value = BigInt::from(-0x0102_0304_0506_0708_090a_i128);
        let mut buf = Vec::new();
        let mut index = 0;
        let written = encode_big_integer(&mut buf, &mut index, &value).unwrap();
        assert_eq!(written, 13);
        assert_eq!(index, 13);
        assert_eq!(
            buf,
            vec![110, 10, 1, 0x0a, 0x09, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(decode_big_integer(&buf), Ok((value, 13)));
    }

    #[test]
    fn test_large_big_layout() {
        let value = BigInt::one() << 2048;
        let mut buf = vec![0xff; 2];
        let mut index = 2;
        let written = encode_big_integer(&mut buf, &mut index, &value).unwrap();
        assert_eq!(written, 6 + 257);
        assert_eq!(written, big_integer_size(&value));
        assert_eq!(&buf[..2], &[0xff, 0xff]);
        assert_eq!(&buf[2..8], &[111, 0, 0, 1, 1, 0]);
        assert_eq!(buf[buf.len() - 1], 1);

        let (decoded, consumed) = decode_big_integer(&buf[2..]).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(consumed, written);
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode_big_integer(&[]), Err(DecodeError::BufferTooShort));
        assert_eq!(decode_big_integer(&[110]), Err(DecodeError::BufferTooShort));
        assert_eq!(decode_big_integer(&[110, 2]), Err(DecodeError::BufferTooShort));
        assert_eq!(decode_big_integer(&[110, 2, 0, 1]), Err(DecodeError::BufferTooShort));
        assert_eq!(decode_big_integer(&[111, 0, 0]), Err(DecodeError::BufferTooShort));
        assert_eq!(
            decode_big_integer(&[111, 0xff, 0xff, 0xff, 0xff, 0]),
            Err(DecodeError::BufferTooShort)
        );
    }

    #[test]
    fn test_decode_wrong_tag() {
        assert!(matches!(
            decode_big_integer(&[97, 1]),
            Err(DecodeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_tolerates_non_canonical_bytes() {
        // trailing zero bytes and a negative zero
        assert_eq!(
            decode_big_integer(&[110, 3, 0, 5, 0, 0]),
            Ok((BigInt::from(5), 6))
        );
        assert_eq!(decode_big_integer(&[110, 0, 1]), Ok((BigInt::zero(), 3)));
    }

    #[test]
    fn test_bytes_helpers() {
        assert_eq!(integer_to_bytes(&BigInt::zero()), (vec![0], false));
        assert_eq!(integer_to_bytes(&BigInt::from(-256)), (vec![0, 1], true));
        assert_eq!(bytes_to_integer(&[0, 1], true), BigInt::from(-256));
        assert_eq!(bytes_to_integer(&[0], true), BigInt::zero());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(EncodeError::BufferTooSmall.to_string(), "buffer too small for encoded value");
        assert_eq!(
            DecodeError::InvalidFormat("bad tag".to_string()).to_string(),
            "invalid format: bad tag"
        );
    }
}
