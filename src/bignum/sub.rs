use core::cmp::Ordering;
use core::ops::Sub;

use crate::bignum::cmp::cmp_magnitudes;
use crate::bignum::BigNumber;

/// Subtracts magnitude sequence `b` from `a` (most-significant first, signs
/// ignored) with borrow propagation from the least-significant end, then
/// strips leading zeros. Requires `|a| >= |b|`; the long-division core leans
/// on this helper too.
pub(crate) fn sub_magnitudes(a: &[i32], b: &[i32], base: u32) -> Vec<i32> {
    debug_assert!(cmp_magnitudes(a, b) != Ordering::Less);
    let base = base as i32;
    let mut result = Vec::with_capacity(a.len());
    let mut borrow = 0;
    let mut b_iter = b.iter().rev();
    for x in a.iter().rev() {
        let y = b_iter.next().map_or(0, |d| d.abs());
        let mut total = x.abs() - y - borrow;
        if total < 0 {
            total += base;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(total);
    }
    while result.len() > 1 && result.last() == Some(&0) {
        result.pop();
    }
    result.reverse();
    result
}

impl BigNumber {
    /// Returns `self - other`.
    ///
    /// Sign combinations reduce to addition and negation: `(-a) - (-b)` is
    /// `|b| - |a|`, `(-a) - b` is `-(|a| + b)`, and `a - (-b)` is `a + |b|`.
    /// With both operands non-negative, the smaller magnitude is subtracted
    /// from the larger and the result negated when the operands were swapped.
    pub fn subtract(&self, other: &BigNumber) -> BigNumber {
        self.check_same_base(other);
        if self.is_negative() && other.is_negative() {
            return other.abs().subtract(&self.abs());
        }
        if self.is_negative() {
            return self.abs().add(other).negate();
        }
        if other.is_negative() {
            return self.add(&other.abs());
        }
        if cmp_magnitudes(&self.digits, &other.digits) == Ordering::Less {
            return other.subtract(self).negate();
        }
        let digits = sub_magnitudes(&self.digits, &other.digits, self.base);
        Self::normalized(self.base, digits)
    }
}

impl Sub for &BigNumber {
    type Output = BigNumber;

    fn sub(self, rhs: &BigNumber) -> BigNumber {
        BigNumber::subtract(self, rhs)
    }
}

impl Sub for BigNumber {
    type Output = BigNumber;

    fn sub(self, rhs: BigNumber) -> BigNumber {
        BigNumber::subtract(&self, &rhs)
    }
}

#[cfg(test)]
mod test {
    use crate::bignum::testutil::from_bigint;
    use crate::bignum::BigNumber;
    use num_bigint::{BigInt, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_sub_matches_oracle() {
        let mut prng = ChaCha20Rng::seed_from_u64(3);
        for base in [2, 10, 16, 36] {
            for _ in 0..100 {
                let a: BigInt = prng.sample(RandomBits::new(96));
                let b: BigInt = prng.sample(RandomBits::new(96));
                let expected = from_bigint(&(&a - &b), base);
                assert_eq!(
                    from_bigint(&a, base).subtract(&from_bigint(&b, base)),
                    expected,
                    "{a} - {b} in base {base}"
                );
            }
        }
    }

    #[test]
    fn test_sub_pinned() {
        let five = BigNumber::from_str_radix("5", 10).unwrap();
        let nine = BigNumber::from_str_radix("9", 10).unwrap();
        assert_eq!(five.subtract(&nine).to_string(), "-4");
        assert_eq!((&nine - &five).to_string(), "4");
    }

    #[test]
    fn test_sub_all_sign_combinations() {
        let cases = [(7, 3), (3, 7), (-7, 3), (7, -3), (-7, -3), (-3, -7)];
        for (x, y) in cases {
            let expected = from_bigint(&BigInt::from(x - y), 10);
            assert_eq!(
                BigNumber::from_i128(x, 10).subtract(&BigNumber::from_i128(y, 10)),
                expected,
                "{x} - {y}"
            );
        }
    }

    #[test]
    fn test_sub_self_is_canonical_zero() {
        let a = BigNumber::from_str_radix("100000", 10).unwrap();
        assert_eq!(a.subtract(&a), BigNumber::zero(10));
        assert_eq!(a.negate().subtract(&a.negate()), BigNumber::zero(10));
    }

    #[test]
    fn test_sub_borrow_chain() {
        let a = BigNumber::from_str_radix("1000", 10).unwrap();
        let one = BigNumber::one(10);
        assert_eq!(a.subtract(&one).to_string(), "999");
    }
}
