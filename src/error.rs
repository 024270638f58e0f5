//! Errors returned by this crate.

use thiserror::Error;

/// Errors surfaced at the crate boundary.
///
/// `InternalPreconditionViolated` indicates a bug in this crate rather than
/// bad caller input: it can only occur after every other precondition has
/// already been validated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid key length: expected 16, 24, or 32 bytes, got {got}")]
    InvalidKeyLength { got: usize },

    #[error("invalid input length: expected between {min} and {max} numerals, got {got}")]
    InvalidInputLength { got: usize, min: usize, max: usize },

    #[error("numeral {value} is out of range for radix {radix}")]
    InvalidNumeral { value: u32, radix: u32 },

    #[error("invalid radix: must be at least 2, got {got}")]
    InvalidRadix { got: u32 },

    #[error("invalid tweak length: expected between {min} and {max} bytes, got {got}")]
    InvalidTweakLength { got: usize, min: usize, max: usize },

    #[error("internal precondition violated: {0}")]
    InternalPreconditionViolated(String),
}

/// Results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;
