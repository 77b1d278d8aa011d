//! Hashing things into scalars.
//!
//! In general, things in here are defined against the [`Digest`] trait from the [`RustCrypto`] project.
//!
//! [`Digest`]: digest::Digest
//! [`RustCrypto`]: https://github.com/RustCrypto/hashes
use crate::{CurveScalar, Params};
use alloc::{string::String, vec::Vec};
use digest::{Digest, generic_array::typenum::U64};
use num_bigint::BigUint;
use num_traits::Zero;

/// The hash [`hash_to_scalar`] uses.
pub type DefaultHash = blake2::Blake2b512;

/// Anything that can be hashed.
///
/// The implementations of this trait decide how the type will be converted into
/// bytes so that it can be included in the hash. The encoding must be canonical: the same value
/// always produces the same bytes.
///
/// # Example
///
/// ```
/// use scalar_fun::{Curve, CurveScalar, Params, hash::HashInto};
/// struct Capsule([u8; 42]);
///
/// impl HashInto for Capsule {
///     fn hash_into(&self, hash: &mut dyn digest::Update) {
///         hash.update(&self.0[..])
///     }
/// }
///
/// let capsule = Capsule([42u8; 42]);
/// let params = Params::new(Curve::Secp256k1);
/// let scalar = CurveScalar::hash_to_scalar(&params, &[&capsule, b"context"]);
/// ```
pub trait HashInto {
    /// Asks the item to convert itself to bytes and add itself to `hash`.
    fn hash_into(&self, hash: &mut dyn digest::Update);
}

impl HashInto for [u8] {
    fn hash_into(&self, hash: &mut dyn digest::Update) {
        hash.update(self)
    }
}

impl<const N: usize> HashInto for [u8; N] {
    fn hash_into(&self, hash: &mut dyn digest::Update) {
        hash.update(&self[..])
    }
}

impl HashInto for Vec<u8> {
    fn hash_into(&self, hash: &mut dyn digest::Update) {
        hash.update(&self[..])
    }
}

impl HashInto for str {
    fn hash_into(&self, hash: &mut dyn digest::Update) {
        hash.update(self.as_bytes())
    }
}

impl HashInto for String {
    fn hash_into(&self, hash: &mut dyn digest::Update) {
        hash.update(self.as_bytes())
    }
}

impl<T: HashInto + ?Sized> HashInto for &T {
    fn hash_into(&self, hash: &mut dyn digest::Update) {
        (**self).hash_into(hash)
    }
}

impl HashInto for CurveScalar {
    fn hash_into(&self, hash: &mut dyn digest::Update) {
        hash.update(&self.to_bytes())
    }
}

/// Extension trait for [`digest::Update`] to make adding things to the hash convenient.
pub trait HashAdd {
    /// Converts something that implements [`HashInto`] to bytes and then incorporate the result into the digest (`self`).
    fn add<HI: HashInto + ?Sized>(self, data: &HI) -> Self;
}

impl<D: digest::Update> HashAdd for D {
    fn add<HI: HashInto + ?Sized>(mut self, data: &HI) -> Self {
        data.hash_into(&mut self);
        self
    }
}

/// Derives a non-zero scalar on `params.curve()` from `items` with BLAKE2b-512.
///
/// See [`hash_to_scalar_with`] for the exact construction.
pub fn hash_to_scalar(params: &Params, items: &[&dyn HashInto]) -> CurveScalar {
    hash_to_scalar_with::<DefaultHash>(params, items)
}

/// Derives a non-zero scalar on `params.curve()` from `items` with the 64-byte hash `H`.
///
/// The digest of every item's bytes (in order) followed by a 4-byte big-endian iteration
/// counter is interpreted as a big-endian integer and reduced modulo the curve order. The counter
/// starts at `0`. If the reduction is zero the counter is incremented and the items are hashed
/// again. A retry happens with probability `1/order` so the loop has no cap.
///
/// # Example
/// ```
/// use scalar_fun::{Curve, Params, hash};
/// let params = Params::new(Curve::Secp256k1);
/// let a = hash::hash_to_scalar_with::<sha2::Sha512>(&params, &[b"alice", b"bob"]);
/// let b = hash::hash_to_scalar_with::<sha2::Sha512>(&params, &[b"bob", b"alice"]);
/// assert_ne!(a, b);
/// ```
pub fn hash_to_scalar_with<H>(params: &Params, items: &[&dyn HashInto]) -> CurveScalar
where
    H: Digest<OutputSize = U64> + digest::Update,
{
    let curve = params.curve();
    let order = curve.order();
    let mut iteration = 0u32;

    loop {
        let digest = items
            .iter()
            .fold(<H as Digest>::new(), |hash, item| hash.add(*item))
            .add(&iteration.to_be_bytes())
            .finalize();

        let value = BigUint::from_bytes_be(digest.as_slice()) % &order;
        if !value.is_zero() {
            return CurveScalar::from_parts(value, Some(curve), order);
        }
        iteration += 1;
    }
}
