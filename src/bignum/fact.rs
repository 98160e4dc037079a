use crate::bignum::{BigNumError, BigNumber};

impl BigNumber {
    /// Returns `self!`. Fails with [`BigNumError::InvalidDomain`] for a
    /// negative operand before any multiplication begins.
    ///
    /// Iterative: an accumulator starting at one is multiplied by a counter
    /// running from one through `self` inclusive. The loop bound uses the
    /// engine's own comparison, so termination is exact for any operand.
    pub fn factorial(&self) -> Result<BigNumber, BigNumError> {
        if self.is_negative() {
            return Err(BigNumError::InvalidDomain);
        }
        let one = BigNumber::one(self.base);
        let mut accumulator = one.clone();
        let mut counter = one.clone();
        while counter <= *self {
            accumulator = accumulator.multiply(&counter);
            counter = counter.add(&one);
        }
        Ok(accumulator)
    }
}

#[cfg(test)]
mod test {
    use crate::bignum::testutil::from_bigint;
    use crate::bignum::{BigNumError, BigNumber};
    use num_bigint::BigInt;

    #[test]
    fn test_factorial_pinned() {
        let five = BigNumber::from_str_radix("5", 10).unwrap();
        assert_eq!(five.factorial().unwrap().to_string(), "120");
        assert_eq!(
            BigNumber::from_str_radix("20", 10).unwrap().factorial().unwrap().to_string(),
            "2432902008176640000"
        );
    }

    #[test]
    fn test_factorial_of_zero_and_one() {
        let one = BigNumber::one(10);
        assert_eq!(BigNumber::zero(10).factorial().unwrap(), one);
        assert_eq!(one.factorial().unwrap(), one);
    }

    #[test]
    fn test_factorial_matches_oracle_past_u64() {
        // 30! overflows u64; compare against the oracle in a couple of bases.
        let mut expected = BigInt::from(1);
        for i in 2..=30 {
            expected *= i;
        }
        for base in [10, 16] {
            let thirty = BigNumber::from_i128(30, base);
            assert_eq!(thirty.factorial().unwrap(), from_bigint(&expected, base));
        }
    }

    #[test]
    fn test_factorial_rejects_negative_operands() {
        let minus_one = BigNumber::from_str_radix("-1", 10).unwrap();
        assert_eq!(minus_one.factorial(), Err(BigNumError::InvalidDomain));
        assert_eq!(
            BigNumber::from_i128(-5, 16).factorial(),
            Err(BigNumError::InvalidDomain)
        );
    }

    #[test]
    fn test_factorial_keeps_the_operand_base() {
        let five = BigNumber::from_i128(5, 16);
        let result = five.factorial().unwrap();
        assert_eq!(result.base(), 16);
        assert_eq!(result.to_string(), "78");
    }
}
