use core::ops::Add;

use crate::bignum::BigNumber;

/// Adds two magnitude sequences (most-significant first, signs ignored) with
/// carry propagation from the least-significant end. The result grows by one
/// digit only when a final carry remains.
pub(crate) fn add_magnitudes(a: &[i32], b: &[i32], base: u32) -> Vec<i32> {
    let base = base as i32;
    let mut result = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0;
    let mut a_iter = a.iter().rev();
    let mut b_iter = b.iter().rev();
    for _ in 0..a.len().max(b.len()) {
        let x = a_iter.next().map_or(0, |d| d.abs());
        let y = b_iter.next().map_or(0, |d| d.abs());
        let total = x + y + carry;
        carry = total / base;
        result.push(total % base);
    }
    if carry > 0 {
        result.push(carry);
    }
    result.reverse();
    result
}

impl BigNumber {
    /// Returns `self + other`.
    ///
    /// Mixed signs are resolved through subtraction: `(-a) + b` is
    /// `b - |a|` and `a + (-b)` is `a - |b|`. Same-sign operands add their
    /// magnitudes and re-apply the shared sign.
    pub fn add(&self, other: &BigNumber) -> BigNumber {
        self.check_same_base(other);
        match (self.is_negative(), other.is_negative()) {
            (true, false) => other.subtract(&self.abs()),
            (false, true) => self.subtract(&other.abs()),
            (shared_negative, _) => {
                let mut digits = add_magnitudes(&self.digits, &other.digits, self.base);
                if shared_negative {
                    for digit in &mut digits {
                        *digit = -*digit;
                    }
                }
                Self::normalized(self.base, digits)
            }
        }
    }
}

impl Add for &BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: &BigNumber) -> BigNumber {
        BigNumber::add(self, rhs)
    }
}

impl Add for BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: BigNumber) -> BigNumber {
        BigNumber::add(&self, &rhs)
    }
}
