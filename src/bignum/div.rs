use core::cmp::Ordering;

use crate::bignum::cmp::cmp_magnitudes;
use crate::bignum::sub::sub_magnitudes;
use crate::bignum::{BigNumError, BigNumber};

/// Digit-at-a-time long division over magnitude sequences. For each dividend
/// digit: append it to the running remainder, strip the leading zero it may
/// have introduced, then count how many times the divisor magnitude fits —
/// that count is the next quotient digit. One pass yields both quotient and
/// remainder, unnormalized and most-significant first.
fn long_division(dividend: &[i32], divisor: &[i32], base: u32) -> (Vec<i32>, Vec<i32>) {
    let mut quotient = Vec::with_capacity(dividend.len());
    let mut remainder: Vec<i32> = Vec::new();
    for &digit in dividend {
        remainder.push(digit.abs());
        if remainder.len() > 1 && remainder[0] == 0 {
            remainder.remove(0);
        }
        let mut count = 0;
        while cmp_magnitudes(&remainder, divisor) != Ordering::Less {
            remainder = sub_magnitudes(&remainder, divisor, base);
            count += 1;
        }
        quotient.push(count);
    }
    (quotient, remainder)
}

impl BigNumber {
    /// Returns the integer quotient of `self / other`, truncated toward zero.
    /// The quotient is negative iff exactly one operand is. Fails with
    /// [`BigNumError::DivisionByZero`] before any work when `other` is zero.
    pub fn floor_div(&self, other: &BigNumber) -> Result<BigNumber, BigNumError> {
        self.check_same_base(other);
        if other.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        let negative = self.is_negative() != other.is_negative();
        let divisor: Vec<i32> = other.digits.iter().map(|d| d.abs()).collect();
        let (mut quotient, _) = long_division(&self.digits, &divisor, self.base);
        if negative {
            for digit in &mut quotient {
                *digit = -*digit;
            }
        }
        Ok(Self::normalized(self.base, quotient))
    }

    /// Returns the remainder of `self / other`, carrying the dividend's sign
    /// (the truncating convention of [`BigNumber::floor_div`], matching
    /// primitive `%`). Fails with [`BigNumError::DivisionByZero`] when
    /// `other` is zero.
    pub fn modulo(&self, other: &BigNumber) -> Result<BigNumber, BigNumError> {
        self.check_same_base(other);
        if other.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        let divisor: Vec<i32> = other.digits.iter().map(|d| d.abs()).collect();
        let (_, mut remainder) = long_division(&self.digits, &divisor, self.base);
        if self.is_negative() {
            for digit in &mut remainder {
                *digit = -*digit;
            }
        }
        Ok(Self::normalized(self.base, remainder))
    }
}
