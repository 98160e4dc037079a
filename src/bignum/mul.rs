use core::ops::Mul;

use crate::bignum::BigNumber;

impl BigNumber {
    /// Returns `self * other` by schoolbook multiplication, O(n·m).
    ///
    /// A result buffer of `len(self) + len(other)` slots accumulates every
    /// digit product into its shifted position, with the carry propagating
    /// leftward within each outer pass and landing one slot past it. The
    /// result is negative iff exactly one operand is.
    pub fn multiply(&self, other: &BigNumber) -> BigNumber {
        self.check_same_base(other);
        let base = self.base as i32;
        let negative = self.is_negative() != other.is_negative();
        let mut result = vec![0i32; self.digits.len() + other.digits.len()];
        for i in (0..self.digits.len()).rev() {
            let mut carry = 0;
            for j in (0..other.digits.len()).rev() {
                let total = self.digits[i].abs() * other.digits[j].abs() + result[i + j + 1] + carry;
                carry = total / base;
                result[i + j + 1] = total % base;
            }
            result[i] = carry;
        }
        if negative {
            for digit in &mut result {
                *digit = -*digit;
            }
        }
        Self::normalized(self.base, result)
    }
}

impl Mul for &BigNumber {
    type Output = BigNumber;

    fn mul(self, rhs: &BigNumber) -> BigNumber {
        BigNumber::multiply(self, rhs)
    }
}

impl Mul for BigNumber {
    type Output = BigNumber;

    fn mul(self, rhs: BigNumber) -> BigNumber {
        BigNumber::multiply(&self, &rhs)
    }
}
