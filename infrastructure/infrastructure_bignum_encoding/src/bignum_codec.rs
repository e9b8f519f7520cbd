//! Bignum Codec Module
//!
//! Encodes and decodes [`BigInt`] values as external term format integers.
//! The smallest representation is always chosen:
//!
//! | Value range            | Tag                     |
//! |------------------------|-------------------------|
//! | `0..=255`              | SMALL_INTEGER_EXT (97)  |
//! | `i32`                  | INTEGER_EXT (98)        |
//! | up to 255 bytes        | SMALL_BIG_EXT (110)     |
//! | anything larger        | LARGE_BIG_EXT (111)     |
//!
//! Decoding accepts all four tags regardless of the value's size.

use entities_bignum::BigInt;
use tracing::debug;

use crate::common::{
    big_integer_size, decode_big_integer, encode_big_integer, DecodeError, EncodeError,
    INTEGER_EXT, LARGE_BIG_EXT, SMALL_BIG_EXT, SMALL_INTEGER_EXT,
};

/// Bignum codec
pub struct BignumCodec;

impl BignumCodec {
    /// Encode an integer into a freshly allocated buffer
    pub fn encode(value: &BigInt) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(Self::encoded_size(value));
        let mut index = 0;
        Self::encode_at(&mut buf, &mut index, value)?;
        Ok(buf)
    }

    /// Encode an integer into a caller-provided buffer
    ///
    /// # Returns
    ///
    /// * `Ok(bytes_written)` - Number of bytes written at the start of `buf`
    /// * `Err(EncodeError::BufferTooSmall)` - `buf` is shorter than [`encoded_size`](Self::encoded_size)
    pub fn encode_into(value: &BigInt, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let needed = Self::encoded_size(value);
        if buf.len() < needed {
            return Err(EncodeError::BufferTooSmall);
        }
        let encoded = Self::encode(value)?;
        buf[..encoded.len()].copy_from_slice(&encoded);
        Ok(encoded.len())
    }

    /// Number of bytes [`encode`](Self::encode) produces for `value`
    pub fn encoded_size(value: &BigInt) -> usize {
        if u8::try_from(value).is_ok() {
            2
        } else if i32::try_from(value).is_ok() {
            5
        } else {
            big_integer_size(value)
        }
    }

    fn encode_at(buf: &mut Vec<u8>, index: &mut usize, value: &BigInt) -> Result<usize, EncodeError> {
        if let Ok(small) = u8::try_from(value) {
            buf.extend_from_slice(&[SMALL_INTEGER_EXT, small]);
            *index += 2;
            return Ok(2);
        }
        if let Ok(int) = i32::try_from(value) {
            buf.push(INTEGER_EXT);
            buf.extend_from_slice(&int.to_be_bytes());
            *index += 5;
            return Ok(5);
        }
        encode_big_integer(buf, index, value)
    }

    /// Decode an integer from the start of `data`
    ///
    /// # Returns
    ///
    /// * `Ok((value, bytes_consumed))` - Decoded value and number of bytes consumed
    /// * `Err(DecodeError)` - Truncated input or a tag that is not an integer
    pub fn decode(data: &[u8]) -> Result<(BigInt, usize), DecodeError> {
        let result = match data.first() {
            None => Err(DecodeError::BufferTooShort),
            Some(&SMALL_INTEGER_EXT) => data
                .get(1)
                .map(|&b| (BigInt::from(b), 2))
                .ok_or(DecodeError::BufferTooShort),
            Some(&INTEGER_EXT) => data
                .get(1..5)
                .and_then(|b| <[u8; 4]>::try_from(b).ok())
                .map(|b| (BigInt::from(i32::from_be_bytes(b)), 5))
                .ok_or(DecodeError::BufferTooShort),
            Some(&SMALL_BIG_EXT) | Some(&LARGE_BIG_EXT) => decode_big_integer(data),
            Some(&tag) => Err(DecodeError::InvalidFormat(format!(
                "Expected integer tag ({}, {}, {} or {}), got {}",
                SMALL_INTEGER_EXT, INTEGER_EXT, SMALL_BIG_EXT, LARGE_BIG_EXT, tag
            ))),
        };
        if let Err(ref e) = result {
            debug!(error = %e, len = data.len(), "integer decode failed");
        }
        result
    }
}
