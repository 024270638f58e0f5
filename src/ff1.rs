//! The FF1 algorithm (NIST SP 800-38G).
//!
//! `Ff1` is a context structure holding a validated AES key, an optional
//! default tweak, and the tweak/text length bounds for one (key, radix)
//! combination. Once built it can encrypt and decrypt any number of
//! numeral strings without repeating key-schedule or bounds-validation
//! work.

use byteorder::{BigEndian, ByteOrder};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Euclid;

use crate::bigint;
use crate::bytes;
use crate::error::{Error, Result};
use crate::numeral;
use crate::prf::Prf;

const ROUNDS: u8 = 10;
/// `radix^n >= MIN_DOMAIN_SIZE` is the minimum domain size FF1 requires.
const MIN_DOMAIN_SIZE: u64 = 100;

enum CipherDirection {
    Encrypt,
    Decrypt,
}

/// An FF1 context bound to one key, radix, and tweak-length policy.
pub struct Ff1 {
    prf: Prf,
    radix: u32,
    default_tweak: Vec<u8>,
    min_tweak_len: usize,
    max_tweak_len: usize,
    max_text_len: usize,
    min_text_len: usize,
}

impl Ff1 {
    /// Builds a new FF1 context.
    ///
    /// `min_tweak_len`/`max_tweak_len` bound the tweak length; `0` for both
    /// leaves it unbounded. `max_text_len` bounds the numeral-string length;
    /// pass `usize::MAX` to leave it unbounded subject only to the
    /// radix-dependent minimum.
    pub fn new(
        key: &[u8],
        default_tweak: Option<&[u8]>,
        min_tweak_len: usize,
        max_tweak_len: usize,
        max_text_len: usize,
        radix: u32,
    ) -> Result<Self> {
        numeral::validate_radix(radix)?;

        // Smallest n with radix^n >= 100.
        let min_text_len = {
            let mut n = 1usize;
            let mut value = BigUint::from(radix);
            while value < BigUint::from(MIN_DOMAIN_SIZE) {
                n += 1;
                value *= radix;
            }
            n.max(2)
        };
        if min_text_len > max_text_len {
            return Err(Error::InvalidInputLength {
                got: 0,
                min: min_text_len,
                max: max_text_len,
            });
        }

        if min_tweak_len > max_tweak_len && max_tweak_len != 0 {
            return Err(Error::InternalPreconditionViolated(
                "minimum tweak length must not exceed the maximum".to_string(),
            ));
        }

        let default_tweak = match default_tweak {
            None => Vec::new(),
            Some(t) => {
                Self::check_tweak_len(t.len(), min_tweak_len, max_tweak_len)?;
                t.to_vec()
            }
        };

        Ok(Ff1 {
            prf: Prf::new(key)?,
            radix,
            default_tweak,
            min_tweak_len,
            max_tweak_len,
            max_text_len,
            min_text_len,
        })
    }

    fn check_tweak_len(len: usize, min: usize, max: usize) -> Result<()> {
        if len < min || (max > 0 && len > max) {
            return Err(Error::InvalidTweakLength {
                got: len,
                min,
                max,
            });
        }
        Ok(())
    }

    fn resolve_tweak<'a>(&'a self, tweak: Option<&'a [u8]>) -> &'a [u8] {
        tweak.unwrap_or(&self.default_tweak)
    }

    /// Encrypts a numeral string.
    pub fn encrypt(&self, tweak: Option<&[u8]>, x: &[u32]) -> Result<Vec<u32>> {
        self.cipher(tweak, x, CipherDirection::Encrypt)
    }

    /// Decrypts a numeral string.
    pub fn decrypt(&self, tweak: Option<&[u8]>, y: &[u32]) -> Result<Vec<u32>> {
        self.cipher(tweak, y, CipherDirection::Decrypt)
    }

    fn cipher(
        &self,
        tweak: Option<&[u8]>,
        input: &[u32],
        which: CipherDirection,
    ) -> Result<Vec<u32>> {
        numeral::validate(input, self.radix)?;

        let t_bytes = self.resolve_tweak(tweak);
        Self::check_tweak_len(t_bytes.len(), self.min_tweak_len, self.max_tweak_len)?;

        let n = input.len();
        if n < self.min_text_len || n > self.max_text_len {
            return Err(Error::InvalidInputLength {
                got: n,
                min: self.min_text_len,
                max: self.max_text_len,
            });
        }

        let t = t_bytes.len();

        // Step 1.
        let u = n / 2;
        let v = n - u;

        // Step 2.
        let (a_slice, b_slice) = input.split_at(u);
        let mut a = numeral::to_bignum(a_slice, self.radix);
        let mut b = numeral::to_bignum(b_slice, self.radix);

        // Step 3: b = ceil(ceil(v * log2(radix)) / 8).
        let bit_len = (v as f64 * (self.radix as f64).log2()).ceil() as u64;
        let byte_len = ((bit_len + 7) / 8) as usize;
        if byte_len == 0 {
            return Err(Error::InternalPreconditionViolated(
                "b must be at least 1 byte".to_string(),
            ));
        }

        // Step 4: d = 4 * ceil(b / 4) + 4.
        let d = 4 * ((byte_len + 3) / 4) + 4;

        // Step 5: build P.
        let p = self.build_p(u, n, t)?;

        let mod_u = bigint::pow_biguint(self.radix, u);
        let mod_v = if u == v {
            mod_u.clone()
        } else {
            bigint::pow_biguint(self.radix, v)
        };

        // Encryption runs i = 0..10; decryption runs i = 9..=0 (the same
        // ten P/Q round numbers, visited in reverse). `m` only ever depends
        // on the parity of this round number, for both directions.
        for round in 0..ROUNDS {
            let i = match which {
                CipherDirection::Encrypt => round,
                CipherDirection::Decrypt => ROUNDS - 1 - round,
            };

            let m = if i % 2 == 0 { &mod_u } else { &mod_v };

            // Step 6i: Q's numeral field is NUM(B) for encryption, NUM(A)
            // for decryption (the asymmetry called out in the distilled
            // spec's design notes).
            let q_input = match which {
                CipherDirection::Encrypt => &b,
                CipherDirection::Decrypt => &a,
            };
            let q = self.build_q(t_bytes, byte_len, i, q_input)?;

            // Step 6ii.
            let mut combined = p.clone();
            combined.extend_from_slice(&q);
            let r = self.prf.apply(&combined)?;

            // Step 6iii: S = first d bytes of R || CIPH(R^[1]) || CIPH(R^[2]) || ...
            let s = self.expand_s(&r, d);

            // Step 6iv.
            let y = bigint::bignum_from_bytes(&s);
            let y_signed = BigInt::from_biguint(Sign::Plus, y);

            // Step 6vi: c = (NUM(A) + y) mod radix^m for encryption,
            // (NUM(B) - y) mod radix^m for decryption.
            let c = match which {
                CipherDirection::Encrypt => {
                    let a_signed = BigInt::from_biguint(Sign::Plus, a.clone());
                    bigint::mod_euclid_big(&(a_signed + y_signed), m)
                }
                CipherDirection::Decrypt => {
                    let b_signed = BigInt::from_biguint(Sign::Plus, b.clone());
                    bigint::mod_euclid_big(&(b_signed - y_signed), m)
                }
            };

            // Step 6viii/6ix: encryption does A<-B, B<-C; decryption does
            // the mirror image, B<-A, A<-C.
            match which {
                CipherDirection::Encrypt => {
                    a = b;
                    b = c;
                }
                CipherDirection::Decrypt => {
                    b = a;
                    a = c;
                }
            }
        }

        let a_numerals = numeral::from_bignum(&a, self.radix, u);
        let b_numerals = numeral::from_bignum(&b, self.radix, v);

        Ok([a_numerals, b_numerals].concat())
    }

    fn build_p(&self, u: usize, n: usize, t: usize) -> Result<[u8; 16]> {
        let mut p = [0u8; 16];
        p[0] = 0x01;
        p[1] = 0x02;
        p[2] = 0x01;
        let radix_bytes = bigint::be_bytes_fixed(&BigUint::from(self.radix), 3)?;
        p[3..6].copy_from_slice(&radix_bytes);
        p[6] = ROUNDS;
        p[7] = (u % 256) as u8;
        BigEndian::write_u32(&mut p[8..12], n as u32);
        BigEndian::write_u32(&mut p[12..16], t as u32);
        Ok(p)
    }

    fn build_q(&self, tweak: &[u8], b: usize, i: u8, num: &BigUint) -> Result<Vec<u8>> {
        let t = tweak.len();
        // pad = mod_euclid(-t - b - 1, 16)
        let pad = (-(t as i64) - (b as i64) - 1).rem_euclid(16) as usize;

        let mut q = Vec::with_capacity(t + pad + 1 + b);
        q.extend_from_slice(tweak);
        q.resize(q.len() + pad, 0);
        q.push(i);
        q.extend_from_slice(&bigint::be_bytes_fixed(num, b)?);
        Ok(q)
    }

    fn expand_s(&self, r: &[u8; 16], d: usize) -> Vec<u8> {
        let mut s = r.to_vec();
        let mut j: u64 = 1;
        while s.len() < d {
            let block = bytes::xor_equal_len(r, &bytes::counter_block_16(j));
            let mut block_arr = [0u8; 16];
            block_arr.copy_from_slice(&block);
            s.extend_from_slice(&self.prf.single_block(&block_arr));
            j += 1;
        }
        s.truncate(d);
        s
    }
}

/// One-shot encryption with a freshly-built [`Ff1`] context.
pub fn encrypt(key: &[u8], tweak: Option<&[u8]>, x: &[u32], radix: u32) -> Result<Vec<u32>> {
    let ff1 = Ff1::new(key, None, 0, 0, usize::MAX, radix)?;
    ff1.encrypt(tweak, x)
}

/// One-shot decryption with a freshly-built [`Ff1`] context.
pub fn decrypt(key: &[u8], tweak: Option<&[u8]>, y: &[u32], radix: u32) -> Result<Vec<u32>> {
    let ff1 = Ff1::new(key, None, 0, 0, usize::MAX, radix)?;
    ff1.decrypt(tweak, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn key128() -> Vec<u8> {
        hex("2B7E151628AED2A6ABF7158809CF4F3C")
    }

    fn key192() -> Vec<u8> {
        hex("2B7E151628AED2A6ABF7158809CF4F3CEF4359D8D580AA4F")
    }

    #[test]
    fn nist_vector_1_radix10_empty_tweak() {
        let x: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let y = encrypt(&key128(), None, &x, 10).unwrap();
        assert_eq!(y, vec![2, 4, 3, 3, 4, 7, 7, 4, 8, 4]);
        assert_eq!(decrypt(&key128(), None, &y, 10).unwrap(), x);
    }

    #[test]
    fn nist_vector_2_radix10_with_tweak() {
        let tweak = hex("39383736353433323130");
        let x: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let y = encrypt(&key128(), Some(&tweak), &x, 10).unwrap();
        assert_eq!(y, vec![6, 1, 2, 4, 2, 0, 0, 7, 7, 3]);
        assert_eq!(decrypt(&key128(), Some(&tweak), &y, 10).unwrap(), x);
    }

    #[test]
    fn nist_vector_3_radix36_aes192() {
        let tweak = hex("3737373770717273373737");
        let x: Vec<u32> = vec![
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
        ];
        let y = encrypt(&key192(), Some(&tweak), &x, 36).unwrap();
        let expected: Vec<u32> = "xbj3kv35jrawxv32ysr"
            .chars()
            .map(|c| c.to_digit(36).unwrap())
            .collect();
        assert_eq!(y, expected);
        assert_eq!(decrypt(&key192(), Some(&tweak), &y, 36).unwrap(), x);
    }

    #[test]
    fn length_is_preserved_and_numerals_in_range() {
        let x: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let y = encrypt(&key128(), None, &x, 10).unwrap();
        assert_eq!(y.len(), x.len());
        assert!(y.iter().all(|&n| n < 10));
    }

    #[test]
    fn tweak_separation() {
        let x: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let t1 = [0u8; 4];
        let t2 = [1u8; 4];
        let y1 = encrypt(&key128(), Some(&t1), &x, 10).unwrap();
        let y2 = encrypt(&key128(), Some(&t2), &x, 10).unwrap();
        assert_ne!(y1, y2);
    }

    #[test]
    fn determinism() {
        let x: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let y1 = encrypt(&key128(), None, &x, 10).unwrap();
        let y2 = encrypt(&key128(), None, &x, 10).unwrap();
        assert_eq!(y1, y2);
    }

    #[test]
    fn minimum_length_for_radix_10_is_2() {
        // radix^2 = 100 >= 100, so n = 2 is the smallest accepted length.
        let ff1 = Ff1::new(&key128(), None, 0, 0, usize::MAX, 10).unwrap();
        assert_eq!(ff1.min_text_len, 2);
        assert!(ff1.encrypt(None, &[1, 2]).is_ok());
    }

    #[test]
    fn rejects_text_shorter_than_minimum() {
        let ff1 = Ff1::new(&key128(), None, 0, 0, usize::MAX, 100).unwrap();
        // radix 100: n=1 gives 100 >= 100, so minimum is clamped to 2 regardless.
        assert_eq!(ff1.min_text_len, 2);
        assert!(matches!(
            ff1.encrypt(None, &[1]),
            Err(Error::InvalidInputLength { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_numeral() {
        let ff1 = Ff1::new(&key128(), None, 0, 0, usize::MAX, 10).unwrap();
        let err = ff1.encrypt(None, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 10]).unwrap_err();
        assert!(matches!(err, Error::InvalidNumeral { .. }));
    }

    #[test]
    fn rejects_bad_key_length() {
        assert!(Ff1::new(&[0u8; 10], None, 0, 0, usize::MAX, 10).is_err());
    }

    #[test]
    fn rejects_bad_radix() {
        assert!(Ff1::new(&key128(), None, 0, 0, usize::MAX, 1).is_err());
        assert!(Ff1::new(&key128(), None, 0, 0, usize::MAX, 0).is_err());
    }

    #[test]
    fn empty_tweak_is_valid() {
        let x: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let y = encrypt(&key128(), Some(&[]), &x, 10).unwrap();
        assert_eq!(decrypt(&key128(), Some(&[]), &y, 10).unwrap(), x);
    }

    #[test]
    fn numerals_at_upper_boundary_roundtrip() {
        let x: Vec<u32> = vec![9; 10];
        let y = encrypt(&key128(), None, &x, 10).unwrap();
        assert_eq!(decrypt(&key128(), None, &y, 10).unwrap(), x);
    }

    #[test]
    fn large_radix_forces_d_greater_than_16() {
        // radix 2^16, v = 7 numerals -> b = 14 bytes -> d = 20, forcing the
        // S-expansion loop to run an extra AES block past the first 16 bytes.
        let radix = 1 << 16;
        let x: Vec<u32> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];
        let y = encrypt(&key128(), None, &x, radix).unwrap();
        assert_eq!(decrypt(&key128(), None, &y, radix).unwrap(), x);
    }
}
