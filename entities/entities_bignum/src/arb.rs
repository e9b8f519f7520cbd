use quickcheck::{Arbitrary, Gen};

use crate::{BigInt, BigUint, Sign};

impl Arbitrary for BigUint {
    fn arbitrary(g: &mut Gen) -> Self {
        let digits: Vec<u32> = Arbitrary::arbitrary(g);
        BigUint::from_u32_digits(&digits)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.to_u32_digits()
                .shrink()
                .map(|digits| BigUint::from_u32_digits(&digits)),
        )
    }
}

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let magnitude = BigUint::arbitrary(g);
        let sign = if bool::arbitrary(g) { Sign::Negative } else { Sign::Positive };
        BigInt::from_biguint(sign, magnitude)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let sign = self.sign();
        Box::new(
            self.magnitude()
                .shrink()
                .map(move |magnitude| BigInt::from_biguint(sign, magnitude)),
        )
    }
}
