//! CBC-MAC under AES with a zero IV.
//!
//! `Prf::apply` is Algorithm 6 (`PRF`) from NIST SP 800-38G: the input is
//! split into 16-byte blocks, chained through AES-CBC starting from an
//! all-zero IV, and only the final block is returned. `Prf::single_block`
//! runs the same zero-IV CBC path over exactly one block — used for the
//! `CIPH_K(R XOR [j]_16)` calls during `S` expansion, which are just `PRF`
//! applied to a single block.

use aes::cipher::{BlockEncryptMut, KeyIvInit};

use crate::error::{Error, Result};

const ZERO_IV: [u8; 16] = [0u8; 16];

#[derive(Clone)]
enum Cipher {
    Aes128(cbc::Encryptor<aes::Aes128>),
    Aes192(cbc::Encryptor<aes::Aes192>),
    Aes256(cbc::Encryptor<aes::Aes256>),
}

/// A keyed pseudorandom function over 16-byte blocks, built from AES-CBC
/// with a fixed zero IV.
#[derive(Clone)]
pub struct Prf {
    cipher: Cipher,
}

impl Prf {
    /// Builds a `Prf` from an AES-128/192/256 key.
    pub fn new(key: &[u8]) -> Result<Self> {
        let cipher = match key.len() {
            16 => Cipher::Aes128(cbc::Encryptor::<aes::Aes128>::new(key.into(), &ZERO_IV.into())),
            24 => Cipher::Aes192(cbc::Encryptor::<aes::Aes192>::new(key.into(), &ZERO_IV.into())),
            32 => Cipher::Aes256(cbc::Encryptor::<aes::Aes256>::new(key.into(), &ZERO_IV.into())),
            got => return Err(Error::InvalidKeyLength { got }),
        };
        Ok(Prf { cipher })
    }

    /// Runs CBC-MAC under a fresh zero-IV encryptor and returns the final
    /// block. `data.len()` must be a positive multiple of 16.
    pub fn apply(&self, data: &[u8]) -> Result<[u8; 16]> {
        if data.is_empty() || data.len() % 16 != 0 {
            return Err(Error::InternalPreconditionViolated(format!(
                "PRF input length must be a positive multiple of 16, got {}",
                data.len()
            )));
        }

        let mut out = [0u8; 16];
        let mut cipher = self.cipher.clone();
        for block in data.chunks_exact(16) {
            match &mut cipher {
                Cipher::Aes128(e) => e.encrypt_block_b2b_mut(block.into(), (&mut out).into()),
                Cipher::Aes192(e) => e.encrypt_block_b2b_mut(block.into(), (&mut out).into()),
                Cipher::Aes256(e) => e.encrypt_block_b2b_mut(block.into(), (&mut out).into()),
            }
        }
        Ok(out)
    }

    /// `PRF` applied to exactly one 16-byte block.
    pub fn single_block(&self, block: &[u8; 16]) -> [u8; 16] {
        self.apply(block)
            .expect("single_block always passes exactly 16 bytes")
    }
}
