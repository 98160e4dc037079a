//! Arbitrary-precision signed integer arithmetic over a configurable radix,
//! built on a plain digit vector instead of a host big-integer type.
//!
//! The whole surface is the [`BigNumber`] value type: construct one from a
//! primitive integer, a numeral string, or an explicit digit sequence, combine
//! values with `add`/`subtract`/`multiply`/`floor_div`/`modulo`/`factorial`,
//! and convert back with [`BigNumber::to_i128`] or `Display`. Every operation
//! borrows its operands and returns a fresh, normalized value.

pub mod bignum;

pub use bignum::{BigNumError, BigNumber};
