//! Format-preserving encryption
//!
//! Implements the FF1 construction from NIST SP 800-38G: given a key and an
//! optional tweak, it permutes a sequence of numerals in `[0, radix)` onto
//! another sequence of the same length and radix. There is no alphabet or
//! character mapping here — callers that want strings convert to and from
//! numeral sequences themselves, the same way this crate never learns what
//! the plaintext means.
//!
//! # Example
//! ```rust
//! let ff1 = ff1::Ff1::new(
//!     &[
//!         0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
//!         0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
//!     ],    // the encryption key
//!     None, // no default tweak
//!     0, 0, // no minimum and maximum tweak size
//!     usize::MAX, // no maximum text length beyond the radix-dependent minimum
//!     10,   // radix
//! ).unwrap();
//!
//! // the first NIST-specified test vector for FF1
//! let pt = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let ct = vec![2, 4, 3, 3, 4, 7, 7, 4, 8, 4];
//!
//! let out = ff1.encrypt(None, &pt).unwrap();
//! assert_eq!(out, ct);
//!
//! let out = ff1.decrypt(None, &ct).unwrap();
//! assert_eq!(out, pt);
//! ```

pub(crate) mod bigint;
pub(crate) mod bytes;
pub mod error;
pub mod ff1;
pub(crate) mod numeral;
pub(crate) mod prf;

pub use error::{Error, Result};
pub use ff1::Ff1;
