//! Magnitude Algorithms
//!
//! Digit-slice primitives underneath `BigUint`. Every function here works on
//! little-endian digit slices and leaves normalization to the caller unless
//! it returns an owned vector, in which case the vector is trimmed.
//!
//! ## Overview
//!
//! - **Carry primitives**: `adc`, `sbb`, `mac_with_carry`
//! - **Addition / subtraction**: in-place with carry or borrow propagation
//! - **Multiplication**: schoolbook below `KARATSUBA_THRESHOLD`, Karatsuba above
//! - **Division**: single-digit fast path and Knuth's Algorithm D
//! - **Shifts**: bit shifts producing new digit vectors

use std::cmp::Ordering;

use tracing::trace;

use crate::big_digit::{self, BigDigit, DoubleBigDigit, BASE, BITS};

/// Operand length (in digits) at which multiplication switches from the
/// schoolbook method to Karatsuba.
pub const KARATSUBA_THRESHOLD: usize = 32;

// Add with carry
#[inline]
pub(crate) fn adc(a: BigDigit, b: BigDigit, carry: &mut BigDigit) -> BigDigit {
    let (hi, lo) = big_digit::from_doublebigdigit(
        DoubleBigDigit::from(a) + DoubleBigDigit::from(b) + DoubleBigDigit::from(*carry),
    );
    *carry = hi;
    lo
}

// Subtract with borrow
#[inline]
pub(crate) fn sbb(a: BigDigit, b: BigDigit, borrow: &mut BigDigit) -> BigDigit {
    let (d1, o1) = a.overflowing_sub(b);
    let (d2, o2) = d1.overflowing_sub(*borrow);
    *borrow = BigDigit::from(o1 || o2);
    d2
}

// a + b * c + carry, never overflows a double digit
#[inline]
pub(crate) fn mac_with_carry(a: BigDigit, b: BigDigit, c: BigDigit, carry: &mut BigDigit) -> BigDigit {
    let (hi, lo) = big_digit::from_doublebigdigit(
        DoubleBigDigit::from(a)
            + DoubleBigDigit::from(b) * DoubleBigDigit::from(c)
            + DoubleBigDigit::from(*carry),
    );
    *carry = hi;
    lo
}

/// Strip high-order zero digits from a borrowed slice.
#[inline]
pub(crate) fn trim(a: &[BigDigit]) -> &[BigDigit] {
    let len = a.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
    &a[..len]
}

/// Strip high-order zero digits from an owned vector.
#[inline]
pub(crate) fn trim_vec(a: &mut Vec<BigDigit>) {
    while let Some(&0) = a.last() {
        a.pop();
    }
}

/// Compare two normalized magnitudes.
pub(crate) fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// `a += b`, returning the carry out of the top of `a`.
///
/// Requires `a.len() >= b.len()`.
pub(crate) fn __add2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry
}

/// `a += b` where the caller guarantees the sum fits in `a`.
pub(crate) fn add2(a: &mut [BigDigit], b: &[BigDigit]) {
    let carry = __add2(a, b);
    debug_assert!(carry == 0, "sum does not fit in destination");
}

/// `a += b`, growing `a` as needed.
pub(crate) fn add_assign_vec(a: &mut Vec<BigDigit>, b: &[BigDigit]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }
    let carry = __add2(a, b);
    if carry != 0 {
        a.push(carry);
    }
}

/// `a -= b`.
///
/// Panics when `b > a`: a magnitude cannot go negative, and the signed layer
/// never calls this out of order.
pub(crate) fn sub2(a: &mut [BigDigit], b: &[BigDigit]) {
    let len = a.len().min(b.len());
    let (a_lo, a_hi) = a.split_at_mut(len);
    let (b_lo, b_hi) = b.split_at(len);

    let mut borrow = 0;
    for (a, &b) in a_lo.iter_mut().zip(b_lo) {
        *a = sbb(*a, b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    assert!(
        borrow == 0 && b_hi.iter().all(|&d| d == 0),
        "attempt to subtract with overflow"
    );
}

/// `acc += b * c` for a single digit `c`.
pub(crate) fn mac_digit(acc: &mut [BigDigit], b: &[BigDigit], c: BigDigit) {
    if c == 0 {
        return;
    }

    let mut carry = 0;
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    for a in a_hi {
        if carry == 0 {
            break;
        }
        *a = adc(*a, 0, &mut carry);
    }

    debug_assert!(carry == 0, "product does not fit in accumulator");
}

/// `acc += x * y`.
///
/// `acc` must have room for the full product, i.e. at least
/// `x.len() + y.len()` digits past any value it already holds.
pub(crate) fn mac3(acc: &mut [BigDigit], x: &[BigDigit], y: &[BigDigit]) {
    let (x, y) = (trim(x), trim(y));
    let (x, y) = if x.len() <= y.len() { (x, y) } else { (y, x) };

    if x.is_empty() {
        return;
    }

    if x.len() < KARATSUBA_THRESHOLD {
        for (i, &xi) in x.iter().enumerate() {
            mac_digit(&mut acc[i..], y, xi);
        }
        return;
    }

    // Very unbalanced operands: multiply `x` against `x`-sized slices of `y`
    // so that every Karatsuba step sees roughly square inputs.
    if y.len() >= 2 * x.len() {
        for (i, chunk) in y.chunks(x.len()).enumerate() {
            mac3(&mut acc[i * x.len()..], x, chunk);
        }
        return;
    }

    karatsuba(acc, x, y);
}

/*
 * Karatsuba: split both operands at m digits,
 *
 *     x = x1 * B^m + x0,  y = y1 * B^m + y0
 *     z0 = x0 * y0
 *     z2 = x1 * y1
 *     z1 = (x0 + x1) * (y0 + y1) - z0 - z2
 *     x * y = z2 * B^2m + z1 * B^m + z0
 *
 * trading one of four half-size products for a few additions.
 */
fn karatsuba(acc: &mut [BigDigit], x: &[BigDigit], y: &[BigDigit]) {
    let m = x.len() / 2;
    trace!(x_len = x.len(), y_len = y.len(), split = m, "karatsuba multiply");

    let (x0, x1) = x.split_at(m);
    let (y0, y1) = y.split_at(m);

    let mut z0 = vec![0; x0.len() + y0.len()];
    mac3(&mut z0, x0, y0);
    trim_vec(&mut z0);

    let mut z2 = vec![0; x1.len() + y1.len()];
    mac3(&mut z2, x1, y1);
    trim_vec(&mut z2);

    let mut sx = x1.to_vec();
    add_assign_vec(&mut sx, x0);
    let mut sy = y1.to_vec();
    add_assign_vec(&mut sy, y0);

    let mut z1 = vec![0; sx.len() + sy.len()];
    mac3(&mut z1, &sx, &sy);
    sub2(&mut z1, &z0);
    sub2(&mut z1, &z2);
    trim_vec(&mut z1);

    add2(acc, &z0);
    add2(&mut acc[m..], &z1);
    add2(&mut acc[2 * m..], &z2);
}

/// Full product of two magnitudes, trimmed.
pub(crate) fn mul3(x: &[BigDigit], y: &[BigDigit]) -> Vec<BigDigit> {
    let (x, y) = (trim(x), trim(y));
    if x.is_empty() || y.is_empty() {
        return Vec::new();
    }
    let mut prod = vec![0; x.len() + y.len()];
    mac3(&mut prod, x, y);
    trim_vec(&mut prod);
    prod
}

/// Divide `a` by a single digit in place, returning the remainder.
pub(crate) fn div_rem_digit_in_place(a: &mut [BigDigit], b: BigDigit) -> BigDigit {
    debug_assert!(b != 0);

    let divisor = DoubleBigDigit::from(b);
    let mut rem: BigDigit = 0;

    for d in a.iter_mut().rev() {
        let lhs = big_digit::to_doublebigdigit(rem, *d);
        *d = (lhs / divisor) as BigDigit;
        rem = (lhs % divisor) as BigDigit;
    }

    rem
}

/// Divide `a` by a single digit, returning `(quotient, remainder)`.
pub(crate) fn div_rem_digit(a: &[BigDigit], b: BigDigit) -> (Vec<BigDigit>, BigDigit) {
    let mut q = a.to_vec();
    let rem = div_rem_digit_in_place(&mut q, b);
    trim_vec(&mut q);
    (q, rem)
}

/// Divide normalized `u` by normalized, nonzero `v`.
///
/// Returns `(quotient, remainder)`, both trimmed.
pub(crate) fn div_rem(u: &[BigDigit], v: &[BigDigit]) -> (Vec<BigDigit>, Vec<BigDigit>) {
    debug_assert!(!v.is_empty() && v[v.len() - 1] != 0);

    if v.len() == 1 {
        let (q, r) = div_rem_digit(u, v[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }

    match cmp_slice(u, v) {
        Ordering::Less => return (Vec::new(), u.to_vec()),
        Ordering::Equal => return (vec![1], Vec::new()),
        Ordering::Greater => {}
    }

    div_rem_knuth(u, v)
}

/*
 * Knuth, TAOCP vol. 2, section 4.3.1, Algorithm D.
 *
 * Both operands are shifted so that the divisor's top digit has its high bit
 * set. Each quotient digit is then estimated from the top two digits of the
 * running remainder and the top digit of the divisor; the estimate is at most
 * one too large once the second divisor digit has been checked, and a single
 * add-back corrects it.
 */
fn div_rem_knuth(u: &[BigDigit], v: &[BigDigit]) -> (Vec<BigDigit>, Vec<BigDigit>) {
    let n = v.len();
    let shift = v[n - 1].leading_zeros() as usize;
    trace!(dividend_len = u.len(), divisor_len = n, shift, "long division");

    let v = shl_bits(v, shift);
    debug_assert_eq!(v.len(), n);

    // One extra high digit so every step can read u[j + n].
    let mut u = shl_bits(u, shift);
    let m = u.len().max(n) - n;
    u.resize(m + n + 1, 0);

    let mut q = vec![0; m + 1];
    let v_top = DoubleBigDigit::from(v[n - 1]);
    let v_next = DoubleBigDigit::from(v[n - 2]);

    for j in (0..=m).rev() {
        let num = big_digit::to_doublebigdigit(u[j + n], u[j + n - 1]);
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;

        while qhat >= BASE
            || qhat * v_next > ((rhat << BITS) | DoubleBigDigit::from(u[j + n - 2]))
        {
            qhat -= 1;
            rhat += v_top;
            if rhat >= BASE {
                break;
            }
        }

        // u[j..=j+n] -= qhat * v
        let mut borrow = 0;
        let mut carry: BigDigit = 0;
        for i in 0..n {
            let p = qhat * DoubleBigDigit::from(v[i]) + DoubleBigDigit::from(carry);
            carry = (p >> BITS) as BigDigit;
            u[i + j] = sbb(u[i + j], p as BigDigit, &mut borrow);
        }
        u[j + n] = sbb(u[j + n], carry, &mut borrow);

        if borrow != 0 {
            // Estimate was one too large
            qhat -= 1;
            let mut c = 0;
            for i in 0..n {
                u[i + j] = adc(u[i + j], v[i], &mut c);
            }
            u[j + n] = u[j + n].wrapping_add(c);
        }

        q[j] = qhat as BigDigit;
    }

    trim_vec(&mut q);
    let mut r = shr_bits(&u[..n], shift);
    trim_vec(&mut r);
    (q, r)
}

/// `a << bits`, trimmed.
pub(crate) fn shl_bits(a: &[BigDigit], bits: usize) -> Vec<BigDigit> {
    let a = trim(a);
    if a.is_empty() {
        return Vec::new();
    }

    let digits = bits / BITS as usize;
    let shift = (bits % BITS as usize) as u32;

    let mut out = Vec::with_capacity(digits + a.len() + 1);
    out.resize(digits, 0);

    if shift == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry = 0;
        for &d in a {
            out.push((d << shift) | carry);
            carry = d >> (BITS - shift);
        }
        if carry != 0 {
            out.push(carry);
        }
    }

    out
}

/// `a >> bits`, trimmed.
pub(crate) fn shr_bits(a: &[BigDigit], bits: usize) -> Vec<BigDigit> {
    let digits = bits / BITS as usize;
    if digits >= a.len() {
        return Vec::new();
    }

    let shift = (bits % BITS as usize) as u32;
    let a = &a[digits..];

    let mut out: Vec<BigDigit> = if shift == 0 {
        a.to_vec()
    } else {
        a.iter()
            .enumerate()
            .map(|(i, &lo)| {
                let hi = a.get(i + 1).map_or(0, |&hi| hi << (BITS - shift));
                (lo >> shift) | hi
            })
            .collect()
    };

    trim_vec(&mut out);
    out
}
