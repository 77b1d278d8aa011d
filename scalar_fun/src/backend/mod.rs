//! The operations we need from the big-integer engine.
//!
//! Everything here works on [`BigUint`] from `num-bigint`. The `modulus` passed to the
//! `mod_*` methods must be non-zero; [`CurveScalar`] guarantees this for its order.
//!
//! [`CurveScalar`]: crate::CurveScalar
use alloc::vec::Vec;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand_core::RngCore;

pub(crate) trait ModArith: Sized {
    fn mod_add(&self, rhs: &Self, modulus: &Self) -> Self;
    fn mod_sub(&self, rhs: &Self, modulus: &Self) -> Self;
    fn mod_mul(&self, rhs: &Self, modulus: &Self) -> Self;
    fn mod_neg(&self, modulus: &Self) -> Self;
    /// Variable time.
    fn mod_exp(&self, exponent: &Self, modulus: &Self) -> Self;
    /// Variable time. `None` unless `gcd(self, modulus) == 1`.
    fn mod_inverse(&self, modulus: &Self) -> Option<Self>;
    /// The non-negative remainder. `None` if `modulus` is zero.
    fn nonneg_mod(&self, modulus: &Self) -> Option<Self>;
    /// The number of bytes needed to encode `self`, i.e. OpenSSL's `BN_num_bytes`.
    fn byte_len(&self) -> usize;
    /// Big-endian bytes left padded with zeros to `len` bytes.
    fn to_be_bytes_padded(&self, len: usize) -> Vec<u8>;
}

impl ModArith for BigUint {
    fn mod_add(&self, rhs: &Self, modulus: &Self) -> Self {
        (self + rhs) % modulus
    }

    fn mod_sub(&self, rhs: &Self, modulus: &Self) -> Self {
        let lhs = self % modulus;
        let rhs = rhs % modulus;
        if lhs >= rhs {
            lhs - rhs
        } else {
            modulus - (rhs - lhs)
        }
    }

    fn mod_mul(&self, rhs: &Self, modulus: &Self) -> Self {
        (self * rhs) % modulus
    }

    fn mod_neg(&self, modulus: &Self) -> Self {
        BigUint::zero().mod_sub(self, modulus)
    }

    fn mod_exp(&self, exponent: &Self, modulus: &Self) -> Self {
        self.modpow(exponent, modulus)
    }

    fn mod_inverse(&self, modulus: &Self) -> Option<Self> {
        if modulus == &BigUint::from(1u8) {
            // everything is zero mod 1 and zero has no inverse
            return None;
        }
        self.modinv(modulus)
    }

    fn nonneg_mod(&self, modulus: &Self) -> Option<Self> {
        if modulus.is_zero() {
            return None;
        }
        Some(self % modulus)
    }

    fn byte_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }

    fn to_be_bytes_padded(&self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        if self.is_zero() {
            return bytes;
        }
        let be = self.to_bytes_be();
        let start = len.saturating_sub(be.len());
        let skip = be.len().saturating_sub(len);
        bytes[start..].copy_from_slice(&be[skip..]);
        bytes
    }
}

/// Samples uniformly from `[0, bound)` by rejection sampling.
///
/// `bound` must be non-zero.
pub(crate) fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    rng.gen_biguint_below(bound)
}

#[cfg(test)]
mod test {
    use super::*;

    fn int(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn mod_sub_wraps_around() {
        assert_eq!(int(5).mod_sub(&int(4), &int(7)), int(1));
        assert_eq!(int(4).mod_sub(&int(5), &int(7)), int(6));
        assert_eq!(int(3).mod_sub(&int(3), &int(7)), int(0));
    }

    #[test]
    fn mod_neg_of_zero_is_zero() {
        assert_eq!(int(0).mod_neg(&int(7)), int(0));
        assert_eq!(int(2).mod_neg(&int(7)), int(5));
    }

    #[test]
    fn inverse_requires_coprime() {
        assert_eq!(int(5).mod_inverse(&int(7)), Some(int(3)));
        assert_eq!(int(0).mod_inverse(&int(7)), None);
        assert_eq!(int(4).mod_inverse(&int(8)), None);
        assert_eq!(int(3).mod_inverse(&int(1)), None);
    }

    #[test]
    fn nonneg_mod_rejects_zero_modulus() {
        assert_eq!(int(10).nonneg_mod(&int(3)), Some(int(1)));
        assert_eq!(int(10).nonneg_mod(&int(0)), None);
    }

    #[test]
    fn padded_encoding() {
        assert_eq!(int(0).to_be_bytes_padded(3), vec![0, 0, 0]);
        assert_eq!(int(0x0102).to_be_bytes_padded(4), vec![0, 0, 1, 2]);
        assert_eq!(int(0x0102).byte_len(), 2);
        assert_eq!(int(0).byte_len(), 0);
        assert_eq!(int(256).byte_len(), 2);
        assert_eq!(int(255).byte_len(), 1);
    }

    #[test]
    fn random_below_stays_in_range() {
        let mut rng = rand::thread_rng();
        let bound = int(3);
        for _ in 0..100 {
            assert!(random_below(&mut rng, &bound) < bound);
        }
    }
}
