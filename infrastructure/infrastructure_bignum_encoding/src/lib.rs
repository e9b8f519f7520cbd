//! Infrastructure Layer: Bignum Encoding
//!
//! Provides binary encoding and decoding of arbitrary precision integers in
//! the external term format, for network transmission and storage.
//!
//! ## Overview
//!
//! The `infrastructure_bignum_encoding` crate is part of the infrastructure layer.
//! It depends on the Entities layer for the [`BigInt`](entities_bignum::BigInt)
//! type and adds nothing to its arithmetic.
//!
//! ## Codecs
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: Codec for arbitrary precision integers.
//!   Chooses the smallest integer tag on encode and accepts every integer tag on decode.
//!
//! ## See Also
//!
//! - [`entities_bignum`](../entities_bignum/index.html): BigInt and BigUint types

mod common;

pub mod bignum_codec;

pub use bignum_codec::BignumCodec;

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};

// Re-export tags and byte conversion helpers for in-memory representations
pub use common::{bytes_to_integer, integer_to_bytes};
pub use common::{INTEGER_EXT, LARGE_BIG_EXT, SMALL_BIG_EXT, SMALL_INTEGER_EXT};
