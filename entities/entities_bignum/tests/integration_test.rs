//! Integration tests for entities_bignum crate
//!
//! These tests exercise the public API end-to-end: parsing, arithmetic,
//! formatting and native conversions, cross-checked against malachite.

use entities_bignum::*;
use malachite::Integer;

// Deterministic pseudo-random decimal strings of the requested length
fn decimal(seed: u64, len: usize, negative: bool) -> String {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut s = String::with_capacity(len + 1);
    if negative {
        s.push('-');
    }
    for i in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let d = ((state >> 33) % 10) as u8;
        let d = if i == 0 && d == 0 { 7 } else { d };
        s.push(char::from(b'0' + d));
    }
    s
}

fn both(text: &str) -> (BigInt, Integer) {
    (text.parse().unwrap(), text.parse().unwrap())
}

#[test]
fn test_end_to_end_scenarios() {
    let n = parse("-1010", 2).unwrap();
    assert_eq!(n, BigInt::from(-10));
    assert_eq!(format(&n, 10), "-10");

    let n = parse("ff", 16).unwrap();
    assert_eq!(n, BigInt::from(255));
    assert_eq!(format(&BigInt::from(255), 16), "ff");

    let a = parse("99999999999999999999", 10).unwrap();
    let expected = parse("9999999999999999999800000000000000000001", 10).unwrap();
    assert_eq!(&a * &a, expected);

    let (q, r) = parse("-7", 10).unwrap().div_rem(&parse("2", 10).unwrap()).unwrap();
    assert_eq!(q, BigInt::from(-3));
    assert_eq!(r, BigInt::from(-1));

    assert_eq!(parse("", 10), Err(ParseBigIntError::EmptyInput));
    assert!(matches!(
        parse("12g", 16),
        Err(ParseBigIntError::InvalidDigitForRadix { .. })
    ));
}

#[test]
fn test_arithmetic_matches_malachite() {
    let lengths = [1, 9, 10, 19, 20, 39, 40, 100, 300, 700, 1500];
    for (i, &la) in lengths.iter().enumerate() {
        for (j, &lb) in lengths.iter().enumerate() {
            let seed = (i * 31 + j) as u64;
            let (a, ma) = both(&decimal(seed, la, i % 2 == 1));
            let (b, mb) = both(&decimal(seed + 1000, lb, j % 3 == 0));

            assert_eq!((&a + &b).to_string(), (&ma + &mb).to_string());
            assert_eq!((&a - &b).to_string(), (&ma - &mb).to_string());
            assert_eq!((&a * &b).to_string(), (&ma * &mb).to_string(), "{} x {} digits", la, lb);

            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(q.to_string(), (&ma / &mb).to_string(), "{} / {} digits", la, lb);
            assert_eq!(r.to_string(), (&ma % &mb).to_string(), "{} % {} digits", la, lb);
        }
    }
}

#[test]
fn test_division_identity_on_large_values() {
    let a: BigInt = decimal(7, 2000, true).parse().unwrap();
    let b: BigInt = decimal(8, 613, false).parse().unwrap();
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(&(&b * &q) + &r, a);
    assert!(r.magnitude() < b.magnitude());
    assert_eq!(r.sign(), Sign::Negative);
}

#[test]
fn test_division_by_zero_is_an_error() {
    let a: BigInt = decimal(3, 50, false).parse().unwrap();
    assert_eq!(a.div_rem(&BigInt::zero()), Err(DivisionByZero));
    assert_eq!(
        a.magnitude().div_rem(&BigUint::zero()),
        Err(DivisionByZero)
    );
}

#[test]
fn test_radix_roundtrip_large_values() {
    let n: BigInt = decimal(11, 500, true).parse().unwrap();
    for radix in 2..=36 {
        let text = format(&n, radix);
        assert!(text.starts_with('-'));
        assert_eq!(parse(&text, radix).unwrap(), n, "radix {}", radix);
        assert_eq!(parse(&text.to_uppercase(), radix).unwrap(), n, "radix {}", radix);
    }
}

#[test]
fn test_hex_matches_malachite() {
    let (n, m) = both(&decimal(5, 400, true));
    assert_eq!(format!("{:x}", n), format!("{:x}", m));
    assert_eq!(format!("{:b}", n), format!("{:b}", m));
}

#[test]
fn test_native_conversions_at_boundaries() {
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)), Ok(i64::MIN));
    assert_eq!(u64::try_from(&BigInt::from(u64::MAX)), Ok(u64::MAX));
    assert!(i64::try_from(&(BigInt::from(i64::MAX) + BigInt::one())).is_err());
    assert!(u64::try_from(&(BigInt::from(u64::MAX) + BigInt::one())).is_err());
    assert_eq!((BigInt::from(u64::MAX) + BigInt::one()).wrapping_to::<u64>(), 0);

    let err = u16::try_from(&BigInt::from(-1)).unwrap_err();
    assert_eq!(err.to_string(), "value out of range for u16");
}

#[test]
fn test_power_and_factorial() {
    let two = BigInt::from(2);
    assert_eq!(two.pow(200), BigInt::one() << 200);
    assert_eq!(BigInt::from(-3).pow(3), BigInt::from(-27));

    let factorial: BigUint = (1u32..=50).map(BigUint::from).product();
    assert_eq!(
        factorial.to_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );
}

#[test]
fn test_digit_literals() {
    let n = BigUint::from_u32_digits(&[0, 0, 1]);
    assert_eq!(n, BigUint::from(1u128 << 64));
    let neg = BigInt::from_u32_digits(Sign::Negative, &[5]);
    assert_eq!(neg, BigInt::from(-5));
    assert_eq!(BigInt::from_u32_digits(Sign::Negative, &[]).sign(), Sign::Zero);
}

#[test]
fn test_extended_gcd_on_large_values() {
    let a: BigInt = decimal(21, 120, true).parse().unwrap();
    let b: BigInt = decimal(22, 80, false).parse().unwrap();
    let common = BigInt::from(2).pow(64) + BigInt::one();
    let (a, b) = (&a * &common, &b * &common);

    let ExtendedGcd { gcd, x, y } = a.extended_gcd(&b);
    assert_eq!(&(&a * &x) + &(&b * &y), gcd);
    assert_eq!(gcd, a.gcd(&b));
    assert!(gcd.is_positive());
    assert!((&gcd % &common).is_zero());
}
