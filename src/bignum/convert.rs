use core::fmt;
use core::str::FromStr;

use crate::bignum::{BigNumError, BigNumber};

impl BigNumber {
    /// Builds a value from a primitive integer by repeated division,
    /// least-significant digit first. Digits are extracted from the unsigned
    /// magnitude and negated afterwards for negative input, so `i128::MIN`
    /// is handled.
    pub fn from_i128(value: i128, base: u32) -> BigNumber {
        Self::check_base(base);
        if value == 0 {
            return Self::zero(base);
        }
        let mut magnitude = value.unsigned_abs();
        let radix = u128::from(base);
        let mut digits = Vec::new();
        while magnitude > 0 {
            digits.push((magnitude % radix) as i32);
            magnitude /= radix;
        }
        digits.reverse();
        if value < 0 {
            for digit in &mut digits {
                *digit = -*digit;
            }
        }
        BigNumber { base, digits }
    }

    /// Parses a numeral string: optional leading `-`, then one character per
    /// digit from the `0-9a-z` repertoire (case-insensitive). Surrounding
    /// ASCII whitespace is ignored. A character whose digit value is `>= base`
    /// — or an empty magnitude, as in `""` or `"-"` — is rejected with
    /// [`BigNumError::OutOfRangeDigit`].
    pub fn from_str_radix(text: &str, base: u32) -> Result<BigNumber, BigNumError> {
        Self::check_base(base);
        let trimmed = text.trim();
        let (negative, magnitude) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if magnitude.is_empty() {
            return Err(BigNumError::OutOfRangeDigit {
                digit: text.to_string(),
                base,
            });
        }
        let mut digits = Vec::with_capacity(magnitude.len());
        for character in magnitude.chars() {
            let value = character
                .to_digit(base)
                .ok_or_else(|| BigNumError::OutOfRangeDigit {
                    digit: character.to_string(),
                    base,
                })?;
            let value = value as i32;
            digits.push(if negative { -value } else { value });
        }
        Ok(Self::normalized(base, digits))
    }

    /// Accepts an explicit digit sequence verbatim after validating every
    /// digit's magnitude against the base. The check is `|d| < base`, not
    /// `d >= 0`: negative digit values are the encoding of negative numbers
    /// and must pass. The caller is responsible for normalization and for
    /// keeping digit signs uniform. An empty sequence becomes canonical zero.
    pub fn from_digits(digits: Vec<i32>, base: u32) -> Result<BigNumber, BigNumError> {
        Self::check_base(base);
        for &digit in &digits {
            if digit.unsigned_abs() >= base {
                return Err(BigNumError::OutOfRangeDigit {
                    digit: digit.to_string(),
                    base,
                });
            }
        }
        if digits.is_empty() {
            return Ok(Self::zero(base));
        }
        Ok(BigNumber { base, digits })
    }

    /// Folds the digits back into a primitive integer, checked: `None` when
    /// the value does not fit an `i128`. The `i128::MIN` boundary fits and
    /// round-trips.
    pub fn to_i128(&self) -> Option<i128> {
        let radix = u128::from(self.base);
        let mut magnitude: u128 = 0;
        for &digit in &self.digits {
            magnitude = magnitude
                .checked_mul(radix)?
                .checked_add(u128::from(digit.unsigned_abs()))?;
        }
        if self.is_negative() {
            if magnitude > i128::MAX as u128 + 1 {
                return None;
            }
            Some((magnitude as i128).wrapping_neg())
        } else {
            i128::try_from(magnitude).ok()
        }
    }
}

macro_rules! impl_from_primitive {
    ($($primitive:ty),*) => {
        $(
            impl From<$primitive> for BigNumber {
                fn from(value: $primitive) -> BigNumber {
                    BigNumber::from_i128(value as i128, 10)
                }
            }
        )*
    };
}
impl_from_primitive!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl FromStr for BigNumber {
    type Err = BigNumError;

    fn from_str(text: &str) -> Result<BigNumber, BigNumError> {
        BigNumber::from_str_radix(text, 10)
    }
}

impl fmt::Display for BigNumber {
    /// Optional leading `-`, then one character per digit, most-significant
    /// first. Zero renders as `"0"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        for &digit in &self.digits {
            // Digit magnitudes below the base are a type invariant.
            let character = char::from_digit(digit.unsigned_abs(), self.base).ok_or(fmt::Error)?;
            write!(f, "{character}")?;
        }
        Ok(())
    }
}
