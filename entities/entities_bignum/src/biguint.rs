//! Unsigned Big Integer
//!
//! `BigUint` is a normalized magnitude: a little-endian vector of
//! `BigDigit`s with no high-order zero digits. Zero is the empty vector, so
//! derived equality and hashing agree with numeric equality.
//!
//! ## Operations
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%` on owned and borrowed values
//! - **Checked forms**: `checked_sub`, `checked_div`, `checked_rem`, `div_rem`
//! - **Bits**: `<<`, `>>`, `bits`, `trailing_zeros`
//! - **Number theory**: `pow`, `gcd`, `lcm`
//! - **Bytes and digits**: little/big-endian bytes, `u32` digit literals
//!
//! Subtraction that would go below zero panics (`-`) or returns `None`
//! (`checked_sub`). Division by zero panics through the operators and is
//! reported as [`DivisionByZero`] by `div_rem`.

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, Shr, Sub, SubAssign};

use crate::algorithms;
use crate::big_digit::{self, BigDigit};
use crate::error::DivisionByZero;

/// An arbitrary precision non-negative integer
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    data: Vec<BigDigit>,
}

impl BigUint {
    /// Create a value from little-endian digits, dropping high-order zeros.
    pub fn new(digits: Vec<BigDigit>) -> Self {
        let mut value = Self { data: digits };
        value.normalize();
        value
    }

    /// Create a value from a little-endian digit slice.
    pub fn from_slice(digits: &[BigDigit]) -> Self {
        Self::new(digits.to_vec())
    }

    /// Create a value from little-endian 32-bit digits.
    ///
    /// Works the same whatever the internal digit width is, so digit
    /// literals in callers do not depend on the `u64_digit` feature.
    pub fn from_u32_digits(digits: &[u32]) -> Self {
        #[cfg(not(feature = "u64_digit"))]
        {
            Self::from_slice(digits)
        }
        #[cfg(feature = "u64_digit")]
        {
            Self::new(
                digits
                    .chunks(2)
                    .map(|pair| {
                        let lo = BigDigit::from(pair[0]);
                        let hi = pair.get(1).map_or(0, |&hi| BigDigit::from(hi));
                        (hi << 32) | lo
                    })
                    .collect(),
            )
        }
    }

    /// Little-endian 32-bit digits of the value; empty for zero.
    pub fn to_u32_digits(&self) -> Vec<u32> {
        #[cfg(not(feature = "u64_digit"))]
        {
            self.data.clone()
        }
        #[cfg(feature = "u64_digit")]
        {
            let mut digits: Vec<u32> = self
                .data
                .iter()
                .flat_map(|&d| [d as u32, (d >> 32) as u32])
                .collect();
            while let Some(&0) = digits.last() {
                digits.pop();
            }
            digits
        }
    }

    /// The normalized little-endian digits
    pub fn digits(&self) -> &[BigDigit] {
        &self.data
    }

    /// The value 0, an empty digit vector.
    pub fn zero() -> Self {
        Self { data: Vec::new() }
    }

    /// The value 1.
    pub fn one() -> Self {
        Self { data: vec![1] }
    }

    /// True for 0.
    pub fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    /// True for 1.
    pub fn is_one(&self) -> bool {
        self.data == [1]
    }

    /// True when the lowest bit is clear; 0 is even.
    pub fn is_even(&self) -> bool {
        self.data.first().map_or(true, |d| d & 1 == 0)
    }

    /// True when the lowest bit is set.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Restore the no-high-zeros invariant and release excess capacity.
    pub(crate) fn normalize(&mut self) {
        algorithms::trim_vec(&mut self.data);
        if self.data.len() < self.data.capacity() / 4 {
            self.data.shrink_to_fit();
        }
    }

    /// Number of significant bits; zero has none.
    pub fn bits(&self) -> u64 {
        match self.data.last() {
            Some(&top) => {
                self.data.len() as u64 * u64::from(big_digit::BITS) - u64::from(top.leading_zeros())
            }
            None => 0,
        }
    }

    /// Number of trailing zero bits, or `None` for zero.
    pub fn trailing_zeros(&self) -> Option<u64> {
        let i = self.data.iter().position(|&d| d != 0)?;
        Some(i as u64 * u64::from(big_digit::BITS) + u64::from(self.data[i].trailing_zeros()))
    }

    /// `self - other`, or `None` when `other > self`.
    pub fn checked_sub(&self, other: &BigUint) -> Option<BigUint> {
        if self < other {
            return None;
        }
        Some(self - other)
    }

    /// Quotient and remainder, `self = other * q + r` with `r < other`.
    pub fn div_rem(&self, other: &BigUint) -> Result<(BigUint, BigUint), DivisionByZero> {
        if other.is_zero() {
            return Err(DivisionByZero);
        }
        let (q, r) = algorithms::div_rem(&self.data, &other.data);
        Ok((BigUint::new(q), BigUint::new(r)))
    }

    pub fn checked_div(&self, other: &BigUint) -> Option<BigUint> {
        self.div_rem(other).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(&self, other: &BigUint) -> Option<BigUint> {
        self.div_rem(other).ok().map(|(_, r)| r)
    }

    /// `self` raised to `exp`, by repeated squaring. `0^0` is 1.
    pub fn pow(&self, mut exp: u32) -> BigUint {
        if exp == 0 || self.is_one() {
            return BigUint::one();
        }
        let mut base = self.clone();
        let mut acc = BigUint::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Greatest common divisor; `gcd(0, 0)` is 0.
    pub fn gcd(&self, other: &BigUint) -> BigUint {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    /// Least common multiple; 0 if either operand is 0.
    pub fn lcm(&self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }
        &(self / &self.gcd(other)) * other
    }

    /// Little-endian bytes; zero is `[0]`.
    pub fn to_bytes_le(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        let mut bytes: Vec<u8> = self.data.iter().flat_map(|d| d.to_le_bytes()).collect();
        while let Some(&0) = bytes.last() {
            bytes.pop();
        }
        bytes
    }

    /// Big-endian bytes; zero is `[0]`.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = self.to_bytes_le();
        bytes.reverse();
        bytes
    }

    /// Create a value from little-endian bytes.
    pub fn from_bytes_le(bytes: &[u8]) -> BigUint {
        const DIGIT_BYTES: usize = (big_digit::BITS / 8) as usize;
        BigUint::new(
            bytes
                .chunks(DIGIT_BYTES)
                .map(|chunk| {
                    chunk
                        .iter()
                        .rev()
                        .fold(0, |acc: BigDigit, &b| (acc << 8) | BigDigit::from(b))
                })
                .collect(),
        )
    }

    /// Create a value from big-endian bytes.
    pub fn from_bytes_be(bytes: &[u8]) -> BigUint {
        let mut le = bytes.to_vec();
        le.reverse();
        BigUint::from_bytes_le(&le)
    }

    /// Build from a `u128`, the widest native integer.
    pub(crate) fn from_u128(mut n: u128) -> BigUint {
        let mut data = Vec::new();
        while n != 0 {
            data.push(n as BigDigit);
            n >>= big_digit::BITS;
        }
        BigUint { data }
    }

    /// The value as a `u128`, if it fits.
    pub(crate) fn to_u128(&self) -> Option<u128> {
        if self.bits() > 128 {
            return None;
        }
        Some(self.low_u128())
    }

    /// The value modulo `2^128`.
    pub(crate) fn low_u128(&self) -> u128 {
        let take = (128 / big_digit::BITS) as usize;
        self.data
            .iter()
            .take(take)
            .rev()
            .fold(0, |acc, &d| (acc << big_digit::BITS) | u128::from(d))
    }
}

impl PartialOrd for BigUint {
    #[inline]
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    #[inline]
    fn cmp(&self, other: &BigUint) -> Ordering {
        algorithms::cmp_slice(&self.data, &other.data)
    }
}

impl<'a, 'b> Add<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    fn add(self, other: &BigUint) -> BigUint {
        let (long, short) = if self.data.len() >= other.data.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut data = long.data.clone();
        algorithms::add_assign_vec(&mut data, &short.data);
        BigUint { data }
    }
}

impl<'a, 'b> Sub<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    /// Panics when `other > self`.
    fn sub(self, other: &BigUint) -> BigUint {
        let mut data = self.data.clone();
        algorithms::sub2(&mut data, &other.data);
        BigUint::new(data)
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    fn mul(self, other: &BigUint) -> BigUint {
        BigUint {
            data: algorithms::mul3(&self.data, &other.data),
        }
    }
}

impl<'a, 'b> Div<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    /// Panics when `other` is zero; see [`BigUint::div_rem`].
    fn div(self, other: &BigUint) -> BigUint {
        match self.div_rem(other) {
            Ok((q, _)) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Rem<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    /// Panics when `other` is zero; see [`BigUint::div_rem`].
    fn rem(self, other: &BigUint) -> BigUint {
        match self.div_rem(other) {
            Ok((_, r)) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

forward_binop!(impl Add for BigUint, add);
forward_binop!(impl Sub for BigUint, sub);
forward_binop!(impl Mul for BigUint, mul);
forward_binop!(impl Div for BigUint, div);
forward_binop!(impl Rem for BigUint, rem);

forward_assign_op!(impl AddAssign for BigUint, add_assign, add);
forward_assign_op!(impl SubAssign for BigUint, sub_assign, sub);
forward_assign_op!(impl MulAssign for BigUint, mul_assign, mul);
forward_assign_op!(impl DivAssign for BigUint, div_assign, div);
forward_assign_op!(impl RemAssign for BigUint, rem_assign, rem);

impl<'a> Shl<usize> for &'a BigUint {
    type Output = BigUint;

    fn shl(self, bits: usize) -> BigUint {
        BigUint {
            data: algorithms::shl_bits(&self.data, bits),
        }
    }
}

impl<'a> Shr<usize> for &'a BigUint {
    type Output = BigUint;

    fn shr(self, bits: usize) -> BigUint {
        BigUint {
            data: algorithms::shr_bits(&self.data, bits),
        }
    }
}

forward_shift!(impl Shl for BigUint, shl);
forward_shift!(impl Shr for BigUint, shr);

forward_iter_fold!(impl Sum for BigUint, sum, BigUint::zero(), add);
forward_iter_fold!(impl Product for BigUint, product, BigUint::one(), mul);

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u128) -> BigUint {
        BigUint::from_u128(n)
    }

    #[test]
    fn test_new_normalizes() {
        let n = BigUint::new(vec![5, 0, 0]);
        assert_eq!(n.digits(), &[5]);
        assert!(BigUint::new(vec![0, 0]).is_zero());
        assert_eq!(BigUint::new(vec![0, 0]), BigUint::zero());
    }

    #[test]
    fn test_zero_and_one() {
        assert!(BigUint::zero().is_zero());
        assert!(!BigUint::zero().is_one());
        assert!(BigUint::one().is_one());
        assert!(BigUint::new(vec![1, 0]).is_one());
        assert!(!big(1 << 32).is_one());
        assert_eq!(BigUint::one().pow(u32::MAX), BigUint::one());
    }

    #[test]
    fn test_u32_digits_roundtrip() {
        let n = BigUint::from_u32_digits(&[1, 2, 3]);
        assert_eq!(n.to_u32_digits(), vec![1, 2, 3]);
        assert_eq!(n, big(1 + (2 << 32) + (3 << 64)));
        assert!(BigUint::from_u32_digits(&[0, 0]).to_u32_digits().is_empty());
    }

    #[test]
    fn test_add_and_sub() {
        let a = big(u64::MAX as u128);
        let b = big(1);
        assert_eq!(&a + &b, big(1 << 64));
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a - &a, BigUint::zero());
    }

    #[test]
    #[should_panic(expected = "attempt to subtract with overflow")]
    fn test_sub_underflow_panics() {
        let _ = big(1) - big(2);
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(big(5).checked_sub(&big(3)), Some(big(2)));
        assert_eq!(big(3).checked_sub(&big(5)), None);
    }

    #[test]
    fn test_mul() {
        assert_eq!(big(u64::MAX as u128) * big(u64::MAX as u128), big(u64::MAX as u128 * u64::MAX as u128));
        assert_eq!(big(12345) * BigUint::zero(), BigUint::zero());
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = big(1000).div_rem(&big(7)).unwrap();
        assert_eq!((q, r), (big(142), big(6)));

        let n = big(u128::MAX);
        let d = big(0x1_0000_0001_0000_0001);
        let (q, r) = n.div_rem(&d).unwrap();
        assert_eq!(q, big(u128::MAX / 0x1_0000_0001_0000_0001));
        assert_eq!(r, big(u128::MAX % 0x1_0000_0001_0000_0001));
    }

    #[test]
    fn test_div_by_zero_is_reported() {
        assert_eq!(big(1).div_rem(&BigUint::zero()), Err(DivisionByZero));
        assert_eq!(big(1).checked_div(&BigUint::zero()), None);
        assert_eq!(big(1).checked_rem(&BigUint::zero()), None);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_operator_by_zero_panics() {
        let _ = big(1) / BigUint::zero();
    }

    #[test]
    fn test_compound_assignment() {
        let mut n = big(10);
        n += big(5);
        n *= &big(3);
        n -= big(1);
        n /= big(4);
        n %= &big(7);
        assert_eq!(n, big(((10 + 5) * 3 - 1) / 4 % 7));
    }

    #[test]
    fn test_ordering() {
        assert!(big(1 << 64) > big(u64::MAX as u128));
        assert!(BigUint::zero() < big(1));
        assert_eq!(big(42).cmp(&big(42)), Ordering::Equal);
    }

    #[test]
    fn test_bits_and_trailing_zeros() {
        assert_eq!(BigUint::zero().bits(), 0);
        assert_eq!(big(1).bits(), 1);
        assert_eq!(big(1 << 100).bits(), 101);
        assert_eq!(BigUint::zero().trailing_zeros(), None);
        assert_eq!(big(1 << 100).trailing_zeros(), Some(100));
        assert!(big(4).is_even());
        assert!(big(5).is_odd());
        assert!(BigUint::zero().is_even());
    }

    #[test]
    fn test_shifts() {
        assert_eq!(big(3) << 100, big(3 << 100));
        assert_eq!(big(3 << 100) >> 99, big(6));
        assert_eq!(big(3) >> 2, BigUint::zero());
    }

    #[test]
    fn test_pow() {
        assert_eq!(big(2).pow(100), big(1 << 100));
        assert_eq!(big(10).pow(0), BigUint::one());
        assert_eq!(BigUint::zero().pow(0), BigUint::one());
        assert_eq!(BigUint::zero().pow(5), BigUint::zero());
        assert_eq!(big(3).pow(40), big(3u128.pow(40)));
    }

    #[test]
    fn test_gcd_and_lcm() {
        assert_eq!(big(48).gcd(&big(180)), big(12));
        assert_eq!(big(0).gcd(&big(7)), big(7));
        assert_eq!(big(0).gcd(&big(0)), big(0));
        assert_eq!(big(4).lcm(&big(6)), big(12));
        assert_eq!(big(0).lcm(&big(6)), big(0));
    }

    #[test]
    fn test_bytes() {
        let n = big(0x0102_0304_0506_0708_090a);
        assert_eq!(n.to_bytes_le(), vec![0x0a, 0x09, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(n.to_bytes_be(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0x0a]);
        assert_eq!(BigUint::from_bytes_le(&n.to_bytes_le()), n);
        assert_eq!(BigUint::from_bytes_be(&n.to_bytes_be()), n);
        assert_eq!(BigUint::zero().to_bytes_le(), vec![0]);
        assert_eq!(BigUint::from_bytes_le(&[0, 0, 0]), BigUint::zero());
    }

    #[test]
    fn test_u128_conversion() {
        assert_eq!(big(u128::MAX).to_u128(), Some(u128::MAX));
        assert_eq!((big(u128::MAX) + big(1)).to_u128(), None);
        assert_eq!((big(u128::MAX) + big(6)).low_u128(), 5);
    }

    #[test]
    fn test_sum_and_product() {
        let values = vec![big(1), big(2), big(3), big(4)];
        assert_eq!(values.iter().sum::<BigUint>(), big(10));
        assert_eq!(values.into_iter().product::<BigUint>(), big(24));
    }
}
