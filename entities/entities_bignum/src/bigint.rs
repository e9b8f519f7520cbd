//! Signed Big Integer
//!
//! `BigInt` pairs a [`Sign`] with a [`BigUint`] magnitude. The sign is
//! `Zero` exactly when the magnitude is zero; every constructor goes through
//! [`BigInt::from_biguint`], which enforces that.
//!
//! ## Semantics
//!
//! - **Addition / subtraction** dispatch on the operand signs. Opposite signs
//!   subtract the smaller magnitude from the larger, so the magnitude layer
//!   never sees an underflowing subtraction.
//! - **Division** truncates toward zero. The remainder carries the
//!   dividend's sign, the same convention as Rust's primitive `/` and `%`.
//! - **Ordering** is `Negative < Zero < Positive`, then by magnitude
//!   (reversed for negatives).
//! - **Shift right** rounds toward negative infinity, like an arithmetic
//!   shift on a two's complement primitive.
//!
//! ## Examples
//!
//! ```rust
//! use entities_bignum::BigInt;
//!
//! let a = BigInt::from(-7);
//! let b = BigInt::from(2);
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(q, BigInt::from(-3));
//! assert_eq!(r, BigInt::from(-1));
//! ```

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, Shr, Sub, SubAssign};

use crate::biguint::BigUint;
use crate::error::DivisionByZero;
use crate::sign::Sign;

/// An arbitrary precision signed integer
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    data: BigUint,
}

impl BigInt {
    /// Combine a sign and a magnitude.
    ///
    /// A zero magnitude always yields zero, and a `Zero` sign discards the
    /// magnitude, so the result upholds the sign invariant whatever the input.
    pub fn from_biguint(sign: Sign, data: BigUint) -> Self {
        if sign == Sign::Zero || data.is_zero() {
            return Self::zero();
        }
        Self { sign, data }
    }

    /// Create a value from a sign and little-endian 32-bit digits.
    pub fn from_u32_digits(sign: Sign, digits: &[u32]) -> Self {
        Self::from_biguint(sign, BigUint::from_u32_digits(digits))
    }

    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            data: BigUint::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            data: BigUint::one(),
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Absolute value as an unsigned integer
    pub fn magnitude(&self) -> &BigUint {
        &self.data
    }

    pub fn into_parts(self) -> (Sign, BigUint) {
        (self.sign, self.data)
    }

    /// The value as a `BigUint`, or `None` if it is negative.
    pub fn to_biguint(&self) -> Option<BigUint> {
        match self.sign {
            Sign::Negative => None,
            _ => Some(self.data.clone()),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    pub fn is_even(&self) -> bool {
        self.data.is_even()
    }

    pub fn is_odd(&self) -> bool {
        self.data.is_odd()
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_biguint(Sign::Positive, self.data.clone())
    }

    /// -1, 0 or 1 according to the sign.
    pub fn signum(&self) -> BigInt {
        BigInt::from_biguint(self.sign, BigUint::one())
    }

    /// Significant bits of the magnitude
    pub fn bits(&self) -> u64 {
        self.data.bits()
    }

    /// Truncating division: `self = other * q + r`, `|r| < |other|`, and
    /// `r` has the sign of `self` unless it is zero.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), DivisionByZero> {
        let (q, r) = self.data.div_rem(&other.data)?;
        Ok((
            BigInt::from_biguint(self.sign * other.sign, q),
            BigInt::from_biguint(self.sign, r),
        ))
    }

    pub fn checked_div(&self, other: &BigInt) -> Option<BigInt> {
        self.div_rem(other).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(&self, other: &BigInt) -> Option<BigInt> {
        self.div_rem(other).ok().map(|(_, r)| r)
    }

    /// `self` raised to `exp`; the result is negative only for a negative
    /// base and an odd exponent.
    pub fn pow(&self, exp: u32) -> BigInt {
        let sign = if self.is_negative() && exp & 1 == 1 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        BigInt::from_biguint(sign, self.data.pow(exp))
    }

    /// Greatest common divisor of the magnitudes, never negative.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        BigInt::from_biguint(Sign::Positive, self.data.gcd(&other.data))
    }

    /// Least common multiple of the magnitudes, never negative.
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        BigInt::from_biguint(Sign::Positive, self.data.lcm(&other.data))
    }

    /// Greatest common divisor together with Bézout coefficients.
    ///
    /// The result satisfies `gcd == self * x + other * y` with `gcd >= 0`.
    ///
    /// ```rust
    /// use entities_bignum::BigInt;
    ///
    /// let e = BigInt::from(240).extended_gcd(&BigInt::from(46));
    /// assert_eq!(e.gcd, BigInt::from(2));
    /// assert_eq!((e.x, e.y), (BigInt::from(-9), BigInt::from(47)));
    /// ```
    pub fn extended_gcd(&self, other: &BigInt) -> ExtendedGcd {
        let (mut old_r, mut r) = (self.clone(), other.clone());
        let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
        let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

        while !r.is_zero() {
            let q = &old_r / &r;
            let next_r = &old_r - &(&q * &r);
            old_r = std::mem::replace(&mut r, next_r);
            let next_x = &old_x - &(&q * &x);
            old_x = std::mem::replace(&mut x, next_x);
            let next_y = &old_y - &(&q * &y);
            old_y = std::mem::replace(&mut y, next_y);
        }

        if old_r.is_negative() {
            old_r = -old_r;
            old_x = -old_x;
            old_y = -old_y;
        }
        ExtendedGcd {
            gcd: old_r,
            x: old_x,
            y: old_y,
        }
    }

    /// Sign and little-endian magnitude bytes.
    pub fn to_bytes_le(&self) -> (Sign, Vec<u8>) {
        (self.sign, self.data.to_bytes_le())
    }

    /// Sign and big-endian magnitude bytes.
    pub fn to_bytes_be(&self) -> (Sign, Vec<u8>) {
        (self.sign, self.data.to_bytes_be())
    }

    pub fn from_bytes_le(sign: Sign, bytes: &[u8]) -> BigInt {
        BigInt::from_biguint(sign, BigUint::from_bytes_le(bytes))
    }

    pub fn from_bytes_be(sign: Sign, bytes: &[u8]) -> BigInt {
        BigInt::from_biguint(sign, BigUint::from_bytes_be(bytes))
    }
}

/// Result of [`BigInt::extended_gcd`]: `gcd == a * x + b * y`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedGcd {
    /// Non-negative greatest common divisor
    pub gcd: BigInt,
    /// Coefficient of the receiver
    pub x: BigInt,
    /// Coefficient of the argument
    pub y: BigInt,
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Zero => Ordering::Equal,
                Sign::Positive => self.data.cmp(&other.data),
                Sign::Negative => other.data.cmp(&self.data),
            },
            unequal => unequal,
        }
    }
}

impl From<BigUint> for BigInt {
    fn from(n: BigUint) -> Self {
        BigInt::from_biguint(Sign::Positive, n)
    }
}

// Signed sum of two sign/magnitude pairs.
fn add_signed(a_sign: Sign, a: &BigUint, b_sign: Sign, b: &BigUint) -> BigInt {
    match (a_sign, b_sign) {
        (_, Sign::Zero) => BigInt::from_biguint(a_sign, a.clone()),
        (Sign::Zero, _) => BigInt::from_biguint(b_sign, b.clone()),
        (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
            BigInt::from_biguint(a_sign, a + b)
        }
        (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => match a.cmp(b) {
            Ordering::Greater => BigInt::from_biguint(a_sign, a - b),
            Ordering::Less => BigInt::from_biguint(b_sign, b - a),
            Ordering::Equal => BigInt::zero(),
        },
    }
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        add_signed(self.sign, &self.data, other.sign, &other.data)
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        add_signed(self.sign, &self.data, -other.sign, &other.data)
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        BigInt::from_biguint(self.sign * other.sign, &self.data * &other.data)
    }
}

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Panics when `other` is zero; see [`BigInt::div_rem`].
    fn div(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((q, _)) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Panics when `other` is zero; see [`BigInt::div_rem`].
    fn rem(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((_, r)) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

forward_binop!(impl Add for BigInt, add);
forward_binop!(impl Sub for BigInt, sub);
forward_binop!(impl Mul for BigInt, mul);
forward_binop!(impl Div for BigInt, div);
forward_binop!(impl Rem for BigInt, rem);

forward_assign_op!(impl AddAssign for BigInt, add_assign, add);
forward_assign_op!(impl SubAssign for BigInt, sub_assign, sub);
forward_assign_op!(impl MulAssign for BigInt, mul_assign, mul);
forward_assign_op!(impl DivAssign for BigInt, div_assign, div);
forward_assign_op!(impl RemAssign for BigInt, rem_assign, rem);

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl<'a> Shl<usize> for &'a BigInt {
    type Output = BigInt;

    fn shl(self, bits: usize) -> BigInt {
        BigInt::from_biguint(self.sign, &self.data << bits)
    }
}

impl<'a> Shr<usize> for &'a BigInt {
    type Output = BigInt;

    fn shr(self, bits: usize) -> BigInt {
        let mut data = &self.data >> bits;
        // Negative values round toward negative infinity
        if self.is_negative() && self.data.trailing_zeros().map_or(false, |tz| tz < bits as u64) {
            data += BigUint::one();
        }
        BigInt::from_biguint(self.sign, data)
    }
}

forward_shift!(impl Shl for BigInt, shl);
forward_shift!(impl Shr for BigInt, shr);

forward_iter_fold!(impl Sum for BigInt, sum, BigInt::zero(), add);
forward_iter_fold!(impl Product for BigInt, product, BigInt::one(), mul);
