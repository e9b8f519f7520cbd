//! Entities Layer: Arbitrary Precision Integers
//!
//! Provides signed and unsigned integers of unbounded magnitude:
//! - [`BigUint`]: a normalized little-endian digit vector
//! - [`BigInt`]: a [`Sign`] paired with a [`BigUint`] magnitude
//!
//! Arithmetic, comparison, radix parsing/formatting and conversions to and
//! from every native integer width are implemented here without any
//! external arithmetic backend.
//!
//! ## Modules
//!
//! - **`algorithms`**: digit-slice primitives (carry/borrow, schoolbook and
//!   Karatsuba multiplication, Knuth long division, shifts)
//! - **`biguint`** / **`bigint`**: the value types, their operators and
//!   number theory helpers (`pow`, `gcd`, `lcm`, `extended_gcd`)
//! - **`radix`**: `parse`/`format` in radix 2 to 36 and the `fmt` traits
//! - **`convert`**: native integer conversions
//! - **`error`**: [`ParseBigIntError`], [`DivisionByZero`], [`ConversionOverflow`]
//!
//! ## Example
//!
//! ```rust
//! use entities_bignum::{parse, BigInt};
//!
//! let a = parse("99999999999999999999", 10).unwrap();
//! let square = &a * &a;
//! assert_eq!(square.to_string(), "9999999999999999999800000000000000000001");
//! assert!(i64::try_from(&square).is_err());
//! assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
//! ```

#[macro_use]
mod macros;

mod algorithms;
pub mod big_digit;
pub mod bigint;
pub mod biguint;
pub mod convert;
pub mod error;
pub mod radix;
pub mod sign;

#[cfg(any(test, feature = "arb"))]
mod arb;

pub use algorithms::KARATSUBA_THRESHOLD;
pub use big_digit::BigDigit;
pub use bigint::{BigInt, ExtendedGcd};
pub use biguint::BigUint;
pub use convert::NativeInt;
pub use error::{ConversionOverflow, DivisionByZero, ParseBigIntError};
pub use radix::{format, parse};
pub use sign::Sign;
