//! Native Integer Conversions
//!
//! Widening is always exact: every native integer type converts into
//! `BigInt` with `From`, and every unsigned one into `BigUint`.
//!
//! Narrowing has two flavours, chosen by the caller:
//!
//! - `TryFrom<&BigInt>` / `TryFrom<&BigUint>` for each native type fails with
//!   [`ConversionOverflow`] when the value does not fit.
//! - [`BigInt::wrapping_to`] / [`BigUint::wrapping_to`] keep the low bits of
//!   the two's complement representation, like an `as` cast between
//!   primitives.
//!
//! There is no saturating conversion.

use crate::bigint::BigInt;
use crate::biguint::BigUint;
use crate::error::ConversionOverflow;
use crate::sign::Sign;

mod sealed {
    pub trait Sealed {}
}

/// Native integer types a big integer converts to and from.
///
/// Sealed; implemented for `i8..=i128`, `u8..=u128`, `isize` and `usize`.
pub trait NativeInt: Copy + sealed::Sealed {
    /// Type name used in conversion errors
    const NAME: &'static str;

    #[doc(hidden)]
    fn to_sign_magnitude(self) -> (bool, u128);

    #[doc(hidden)]
    fn from_sign_magnitude(negative: bool, magnitude: u128) -> Option<Self>;

    #[doc(hidden)]
    fn wrapping_from_sign_magnitude(negative: bool, low: u128) -> Self;
}

macro_rules! impl_native_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl NativeInt for $t {
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn to_sign_magnitude(self) -> (bool, u128) {
                (false, self as u128)
            }

            #[inline]
            fn from_sign_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
                if negative && magnitude != 0 {
                    return None;
                }
                <$t>::try_from(magnitude).ok()
            }

            #[inline]
            fn wrapping_from_sign_magnitude(negative: bool, low: u128) -> Self {
                (if negative { low.wrapping_neg() } else { low }) as $t
            }
        }
    )*};
}

macro_rules! impl_native_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl NativeInt for $t {
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn to_sign_magnitude(self) -> (bool, u128) {
                (self < 0, (self as i128).unsigned_abs())
            }

            #[inline]
            fn from_sign_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
                let value = if negative {
                    if magnitude > i128::MIN.unsigned_abs() {
                        return None;
                    }
                    (magnitude as i128).wrapping_neg()
                } else {
                    i128::try_from(magnitude).ok()?
                };
                <$t>::try_from(value).ok()
            }

            #[inline]
            fn wrapping_from_sign_magnitude(negative: bool, low: u128) -> Self {
                (if negative { low.wrapping_neg() } else { low }) as $t
            }
        }
    )*};
}

impl_native_unsigned!(u8, u16, u32, u64, u128, usize);
impl_native_signed!(i8, i16, i32, i64, i128, isize);

impl BigInt {
    /// Convert to a native integer, keeping only the low bits of the two's
    /// complement representation.
    ///
    /// ```rust
    /// use entities_bignum::BigInt;
    ///
    /// assert_eq!(BigInt::from(300).wrapping_to::<u8>(), 44);
    /// assert_eq!(BigInt::from(-1).wrapping_to::<u16>(), u16::MAX);
    /// ```
    pub fn wrapping_to<T: NativeInt>(&self) -> T {
        T::wrapping_from_sign_magnitude(self.is_negative(), self.magnitude().low_u128())
    }

    fn checked_to<T: NativeInt>(&self) -> Result<T, ConversionOverflow> {
        self.magnitude()
            .to_u128()
            .and_then(|m| T::from_sign_magnitude(self.is_negative(), m))
            .ok_or_else(|| ConversionOverflow::new(T::NAME))
    }

    fn from_native<T: NativeInt>(n: T) -> BigInt {
        let (negative, magnitude) = n.to_sign_magnitude();
        let sign = if negative { Sign::Negative } else { Sign::Positive };
        BigInt::from_biguint(sign, BigUint::from_u128(magnitude))
    }
}

impl BigUint {
    /// Convert to a native integer, keeping only the low bits.
    pub fn wrapping_to<T: NativeInt>(&self) -> T {
        T::wrapping_from_sign_magnitude(false, self.low_u128())
    }

    fn checked_to<T: NativeInt>(&self) -> Result<T, ConversionOverflow> {
        self.to_u128()
            .and_then(|m| T::from_sign_magnitude(false, m))
            .ok_or_else(|| ConversionOverflow::new(T::NAME))
    }
}

macro_rules! impl_conversions {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(n: $t) -> Self {
                BigInt::from_native(n)
            }
        }

        impl TryFrom<&BigInt> for $t {
            type Error = ConversionOverflow;

            #[inline]
            fn try_from(value: &BigInt) -> Result<$t, ConversionOverflow> {
                value.checked_to()
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = ConversionOverflow;

            #[inline]
            fn try_from(value: BigInt) -> Result<$t, ConversionOverflow> {
                value.checked_to()
            }
        }

        impl TryFrom<&BigUint> for $t {
            type Error = ConversionOverflow;

            #[inline]
            fn try_from(value: &BigUint) -> Result<$t, ConversionOverflow> {
                value.checked_to()
            }
        }

        impl TryFrom<BigUint> for $t {
            type Error = ConversionOverflow;

            #[inline]
            fn try_from(value: BigUint) -> Result<$t, ConversionOverflow> {
                value.checked_to()
            }
        }
    )*};
}

impl_conversions!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_biguint_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigUint {
            #[inline]
            fn from(n: $t) -> Self {
                BigUint::from_u128(n as u128)
            }
        }
    )*};
}

macro_rules! impl_biguint_try_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for BigUint {
            type Error = ConversionOverflow;

            #[inline]
            fn try_from(n: $t) -> Result<BigUint, ConversionOverflow> {
                match n.to_sign_magnitude() {
                    (true, _) => Err(ConversionOverflow::new("BigUint")),
                    (false, magnitude) => Ok(BigUint::from_u128(magnitude)),
                }
            }
        }
    )*};
}

impl_biguint_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_biguint_try_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<BigInt> for BigUint {
    type Error = ConversionOverflow;

    fn try_from(value: BigInt) -> Result<BigUint, ConversionOverflow> {
        match value.into_parts() {
            (Sign::Negative, _) => Err(ConversionOverflow::new("BigUint")),
            (_, magnitude) => Ok(magnitude),
        }
    }
}

impl TryFrom<&BigInt> for BigUint {
    type Error = ConversionOverflow;

    fn try_from(value: &BigInt) -> Result<BigUint, ConversionOverflow> {
        value.to_biguint().ok_or_else(|| ConversionOverflow::new("BigUint"))
    }
}
