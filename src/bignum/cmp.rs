use core::cmp::Ordering;

use crate::bignum::BigNumber;

/// Lexicographic-after-length comparison of two digit sequences by magnitude:
/// the longer sequence is larger, equal lengths compare digit by digit from
/// the most significant. Inputs must be normalized (no leading zeros); digit
/// signs are ignored, so stored negative encodings compare by magnitude too.
pub(crate) fn cmp_magnitudes(a: &[i32], b: &[i32]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    for (x, y) in a.iter().zip(b) {
        match x.unsigned_abs().cmp(&y.unsigned_abs()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

impl Ord for BigNumber {
    /// Signed comparison. Panics when the operands carry different bases,
    /// like every binary operation on [`BigNumber`].
    fn cmp(&self, other: &BigNumber) -> Ordering {
        self.check_same_base(other);
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitudes(&self.digits, &other.digits),
            (true, true) => cmp_magnitudes(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &BigNumber) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
