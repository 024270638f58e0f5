//! The numeral-string type and its radix codec.
//!
//! A numeral string is a slice of `u32`, each element in `[0, radix)`.
//! Converting between numeral strings and human-readable alphabets is an
//! external collaborator's job, not this module's: everything here works
//! directly on numerals.

use num_bigint::BigUint;

use crate::bigint;
use crate::error::{Error, Result};

/// Checks that `radix` is usable (`>= 2`).
pub fn validate_radix(radix: u32) -> Result<()> {
    if radix < 2 {
        return Err(Error::InvalidRadix { got: radix });
    }
    Ok(())
}

/// Checks that every numeral in `x` lies in `[0, radix)`.
pub fn validate(x: &[u32], radix: u32) -> Result<()> {
    for &value in x {
        if value >= radix {
            return Err(Error::InvalidNumeral { value, radix });
        }
    }
    Ok(())
}

/// `NUMradix(X, radix)`.
pub fn to_bignum(x: &[u32], radix: u32) -> BigUint {
    bigint::numerals_to_bignum(x, radix)
}

/// `STR^m_radix(x, radix)`.
pub fn from_bignum(x: &BigUint, radix: u32, m: usize) -> Vec<u32> {
    bigint::bignum_to_numerals(x, radix, m)
}
