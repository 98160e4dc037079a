mod add;
mod cmp;
mod convert;
mod div;
mod fact;
mod mul;
mod sub;

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;
/// Largest supported radix; ends the single-character `0-9a-z` repertoire.
pub const MAX_BASE: u32 = 36;

/// A signed arbitrary-precision integer in a fixed radix.
///
/// Digits are stored most-significant first. The sign lives in the digit
/// values themselves: a non-negative value stores non-negative digits and a
/// negative value stores every digit negated, so decimal −23 is `[-2, -3]`.
/// Canonical zero is the single digit `[0]`. No value other than zero keeps
/// a leading zero-magnitude digit, and the digits of one value never mix
/// signs.
///
/// Values are immutable. Every arithmetic operation borrows its operands and
/// returns a freshly allocated, normalized result, so a `BigNumber` is safe
/// to share across threads without synchronization.
///
/// Binary operations require both operands to carry the same base; mixing
/// bases is a programmer error and panics, like an out-of-bounds index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigNumber {
    base: u32,
    digits: Vec<i32>,
}

/// Everything that can go wrong when constructing or combining [`BigNumber`]s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigNumError {
    /// A supplied digit or numeral character whose magnitude does not fit
    /// `[0, base)`. Validation is by magnitude, never by raw sign: negative
    /// digit values are how negative numbers are spelled.
    #[error("digit `{digit}` is out of range for base {base}")]
    OutOfRangeDigit { digit: String, base: u32 },

    /// Zero divisor, detected before any long-division work begins.
    #[error("division by zero")]
    DivisionByZero,

    /// Factorial of a negative operand.
    #[error("factorial is not defined for negative numbers")]
    InvalidDomain,
}

impl BigNumber {
    /// Canonical zero in the given base.
    pub fn zero(base: u32) -> BigNumber {
        Self::check_base(base);
        BigNumber {
            base,
            digits: vec![0],
        }
    }

    /// One in the given base.
    pub fn one(base: u32) -> BigNumber {
        Self::check_base(base);
        BigNumber {
            base,
            digits: vec![1],
        }
    }

    /// The radix this value is represented in.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// The digit sequence, most-significant first.
    pub fn digits(&self) -> &[i32] {
        &self.digits
    }

    /// True iff the value is below zero, read off the leading digit.
    pub fn is_negative(&self) -> bool {
        self.digits[0] < 0
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// The magnitude: same base, every digit forced non-negative.
    pub fn abs(&self) -> BigNumber {
        BigNumber {
            base: self.base,
            digits: self.digits.iter().map(|d| d.abs()).collect(),
        }
    }

    /// The negation: same base, every digit sign flipped. Zero maps to itself.
    pub fn negate(&self) -> BigNumber {
        BigNumber {
            base: self.base,
            digits: self.digits.iter().map(|d| -d).collect(),
        }
    }

    /// Strips leading zero-magnitude digits (never below one digit) and wraps
    /// the result. An empty sequence becomes canonical zero. Every arithmetic
    /// result funnels through here.
    pub(crate) fn normalized(base: u32, mut digits: Vec<i32>) -> BigNumber {
        let leading_zeros = digits.iter().take_while(|d| **d == 0).count();
        let strip = leading_zeros.min(digits.len().saturating_sub(1));
        digits.drain(..strip);
        if digits.is_empty() {
            digits.push(0);
        }
        BigNumber { base, digits }
    }

    pub(crate) fn check_base(base: u32) {
        assert!(
            (MIN_BASE..=MAX_BASE).contains(&base),
            "base {base} outside supported range {MIN_BASE}..={MAX_BASE}"
        );
    }

    pub(crate) fn check_same_base(&self, other: &BigNumber) {
        assert_eq!(
            self.base, other.base,
            "operands carry different bases ({} vs {})",
            self.base, other.base
        );
    }
}

impl std::ops::Neg for &BigNumber {
    type Output = BigNumber;

    fn neg(self) -> BigNumber {
        self.negate()
    }
}

impl std::ops::Neg for BigNumber {
    type Output = BigNumber;

    fn neg(self) -> BigNumber {
        self.negate()
    }
}


#[cfg(test)]
mod test {
    use super::BigNumber;

    #[test]
    fn test_normalized_strips_leading_zeros() {
        assert_eq!(BigNumber::normalized(10, vec![0, 0, 7]).digits(), [7]);
        assert_eq!(BigNumber::normalized(10, vec![0, -2, -3]).digits(), [-2, -3]);
        assert_eq!(BigNumber::normalized(10, vec![0, 0, 0]).digits(), [0]);
        assert_eq!(BigNumber::normalized(10, vec![]).digits(), [0]);
    }

    #[test]
    fn test_sign_queries() {
        let pos = BigNumber::from_str_radix("23", 10).unwrap();
        let neg = BigNumber::from_str_radix("-23", 10).unwrap();
        assert!(!pos.is_negative());
        assert!(neg.is_negative());
        assert_eq!(neg.digits(), [-2, -3]);
        assert_eq!(neg.abs(), pos);
        assert_eq!(neg.negate(), pos);
        assert_eq!(pos.negate(), neg);
        assert_eq!(-&pos, neg);
    }

    #[test]
    fn test_zero_is_its_own_negation() {
        let zero = BigNumber::zero(10);
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(zero.negate(), zero);
        assert_eq!(zero.abs(), zero);
    }

    #[test]
    #[should_panic(expected = "outside supported range")]
    fn test_base_ceiling() {
        BigNumber::zero(37);
    }

    #[test]
    #[should_panic(expected = "different bases")]
    fn test_mixed_base_operands() {
        let a = BigNumber::one(10);
        let b = BigNumber::one(16);
        let _ = a.add(&b);
    }
}
