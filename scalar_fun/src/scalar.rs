//! Scalar arithmetic (integers mod the order of a curve)
use crate::{Curve, Error, Params, backend, backend::ModArith, hash, hex, op};
use alloc::vec::Vec;
use core::{
    fmt,
    ops::{AddAssign, MulAssign, SubAssign},
};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};

/// An integer modulo the order of an elliptic curve.
///
/// The term _scalar_ comes from interpreting the group of points on the curve as a notional
/// vector space whose scalars are the integers modulo the group order `q`. A `CurveScalar` holds
/// a value in `[0, q)` together with the curve it belongs to and `q` itself. Every arithmetic
/// operation reduces modulo the `q` of its left hand operand and hands that curve and order on
/// to the result. Scalars are immutable; every operation returns a new one.
///
/// ```
/// use scalar_fun::{Curve, CurveScalar};
/// let x = CurveScalar::random(Curve::Secp256k1, &mut rand::thread_rng());
/// let two = CurveScalar::from_int(2, Curve::Secp256k1).unwrap();
/// assert_eq!(&x + &x, x.mul(&two).unwrap());
/// assert_eq!(x.sub(&x), CurveScalar::zero(Curve::Secp256k1));
/// ```
///
/// A scalar can also be built against an explicit modulus with no curve attached (see
/// [`with_modulus`]). This is handy for small toy fields:
///
/// ```
/// use scalar_fun::CurveScalar;
/// let a = CurveScalar::with_modulus(5, 7u32.into()).unwrap();
/// let b = CurveScalar::with_modulus(4, 7u32.into()).unwrap();
/// assert!((&a + &b).equals(2u32));
/// assert!(a.invert().unwrap().equals(3u32));
/// ```
///
/// **Division, exponentiation and inversion are not constant time.**
///
/// [`with_modulus`]: Self::with_modulus
#[derive(Clone)]
pub struct CurveScalar {
    pub(crate) value: BigUint,
    curve: Option<Curve>,
    pub(crate) order: BigUint,
}

/// The right hand side of an operation that accepts either a scalar or a bare integer.
///
/// Bare integers are never validated against a curve. They are only compared against or used as
/// an exponent or modulus.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    /// Another scalar.
    Scalar(&'a CurveScalar),
    /// A bare non-negative integer.
    Integer(BigUint),
}

impl Operand<'_> {
    /// The integer value of the operand.
    pub fn value(&self) -> &BigUint {
        match self {
            Operand::Scalar(scalar) => &scalar.value,
            Operand::Integer(int) => int,
        }
    }
}

impl<'a> From<&'a CurveScalar> for Operand<'a> {
    fn from(scalar: &'a CurveScalar) -> Self {
        Operand::Scalar(scalar)
    }
}

impl From<BigUint> for Operand<'_> {
    fn from(int: BigUint) -> Self {
        Operand::Integer(int)
    }
}

impl_operand_from_uint!(u8, u16, u32, u64, u128, usize);

impl CurveScalar {
    pub(crate) fn from_parts(value: BigUint, curve: Option<Curve>, order: BigUint) -> Self {
        debug_assert!(value < order);
        CurveScalar {
            value,
            curve,
            order,
        }
    }

    /// A new scalar with `self`'s curve and order.
    pub(crate) fn with_value(&self, value: BigUint) -> Self {
        Self::from_parts(value, self.curve, self.order.clone())
    }

    fn from_uint(value: BigUint, curve: Curve) -> Result<Self, Error> {
        if !curve.contains(&value) {
            return Err(Error::InvalidScalar);
        }
        Ok(Self::from_parts(value, Some(curve), curve.order()))
    }

    /// The canonical size in bytes of a scalar on `curve`.
    pub fn size_for(curve: Curve) -> usize {
        curve.scalar_size()
    }

    /// The canonical size in bytes of a scalar on the curve called `name`.
    ///
    /// Returns [`Error::UnsupportedCurve`] if no curve goes by that name.
    pub fn size_for_name(name: &str) -> Result<usize, Error> {
        Ok(Self::size_for(Curve::from_name(name)?))
    }

    /// Generates a uniformly random scalar in `[0, order)` from a caller provided
    /// cryptographically secure random number generator.
    ///
    /// Values are drawn from `[0, order)` directly by rejection sampling so there is no modulo
    /// bias.
    ///
    /// # Example
    /// ```
    /// use scalar_fun::{Curve, CurveScalar};
    /// let x = CurveScalar::random(Curve::Secp256r1, &mut rand::thread_rng());
    /// assert!(x.to_int() < Curve::Secp256r1.order());
    /// ```
    pub fn random<R: RngCore + CryptoRng>(curve: Curve, rng: &mut R) -> Self {
        let order = curve.order();
        loop {
            let value = backend::random_below(rng, &order);
            // only fails if the sampler and the registry disagree about the order
            if curve.contains(&value) {
                return Self::from_parts(value, Some(curve), order);
            }
        }
    }

    /// Generates a uniformly random scalar in `[0, modulus)` with no curve attached.
    ///
    /// Returns [`Error::ZeroModulus`] if `modulus` is zero.
    pub fn random_with_modulus<R: RngCore + CryptoRng>(
        modulus: &BigUint,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::ZeroModulus);
        }
        let value = backend::random_below(rng, modulus);
        Ok(Self::from_parts(value, None, modulus.clone()))
    }

    /// Creates a scalar on `curve` from an integer.
    ///
    /// Returns [`Error::InvalidScalar`] if `value` is negative or not less than the curve order.
    /// The value is checked, not reduced.
    ///
    /// # Example
    /// ```
    /// use scalar_fun::{Curve, CurveScalar, Error};
    /// let order = Curve::Secp256k1.order();
    /// assert!(CurveScalar::from_int(42, Curve::Secp256k1).is_ok());
    /// assert_eq!(CurveScalar::from_int(-1, Curve::Secp256k1).unwrap_err(), Error::InvalidScalar);
    /// assert_eq!(CurveScalar::from_int(order, Curve::Secp256k1).unwrap_err(), Error::InvalidScalar);
    /// ```
    pub fn from_int(value: impl Into<BigInt>, curve: Curve) -> Result<Self, Error> {
        let value = value.into().to_biguint().ok_or(Error::InvalidScalar)?;
        Self::from_uint(value, curve)
    }

    /// Creates a scalar on `curve` from big-endian bytes.
    ///
    /// Any number of bytes is accepted as long as the integer they encode is less than the curve
    /// order, otherwise [`Error::InvalidScalar`] is returned.
    pub fn from_bytes(bytes: &[u8], curve: Curve) -> Result<Self, Error> {
        Self::from_uint(BigUint::from_bytes_be(bytes), curve)
    }

    /// Converts big-endian bytes into a scalar by reducing the integer they encode modulo the
    /// curve order.
    ///
    /// # Example
    /// ```
    /// use scalar_fun::{Curve, CurveScalar};
    /// let mut bytes = Curve::Secp256k1.order_bytes().to_vec();
    /// *bytes.last_mut().unwrap() += 1;
    /// assert!(CurveScalar::from_bytes_mod_order(&bytes, Curve::Secp256k1).equals(1u32));
    /// ```
    pub fn from_bytes_mod_order(bytes: &[u8], curve: Curve) -> Self {
        let order = curve.order();
        let value = BigUint::from_bytes_be(bytes) % &order;
        Self::from_parts(value, Some(curve), order)
    }

    /// Creates a scalar with no curve whose arithmetic is done modulo `modulus`.
    ///
    /// Returns [`Error::ZeroModulus`] if `modulus` is zero and [`Error::InvalidScalar`] if `value`
    /// is negative or not less than `modulus`.
    pub fn with_modulus(value: impl Into<BigInt>, modulus: BigUint) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::ZeroModulus);
        }
        let value = value.into().to_biguint().ok_or(Error::InvalidScalar)?;
        if value >= modulus {
            return Err(Error::InvalidScalar);
        }
        Ok(Self::from_parts(value, None, modulus))
    }

    /// Parses a hex encoded big-endian integer as a scalar on `curve`.
    ///
    /// Malformed hex is reported as [`Error::InvalidScalar`].
    pub fn parse(hex: &str, curve: Curve) -> Result<Self, Error> {
        let bytes = hex::decode(hex).map_err(|_| Error::InvalidScalar)?;
        Self::from_bytes(&bytes, curve)
    }

    /// Deterministically derives a non-zero scalar from `items` with BLAKE2b-512.
    ///
    /// See [`hash::hash_to_scalar_with`] for the construction.
    ///
    /// # Example
    /// ```
    /// use scalar_fun::{Curve, CurveScalar, Params};
    /// let params = Params::new(Curve::Secp256k1);
    /// let a = CurveScalar::hash_to_scalar(&params, &[b"public key", b"message"]);
    /// let b = CurveScalar::hash_to_scalar(&params, &[b"public key", b"message"]);
    /// assert_eq!(a, b);
    /// assert!(!a.is_zero());
    /// ```
    pub fn hash_to_scalar(params: &Params, items: &[&dyn hash::HashInto]) -> Self {
        hash::hash_to_scalar(params, items)
    }

    /// Returns the zero scalar on `curve`.
    pub fn zero(curve: Curve) -> Self {
        Self::from_parts(BigUint::zero(), Some(curve), curve.order())
    }

    /// Returns the integer `1` as a scalar on `curve`.
    pub fn one(curve: Curve) -> Self {
        Self::from_parts(BigUint::one(), Some(curve), curve.order())
    }

    /// Serializes the scalar to big-endian bytes.
    ///
    /// The output is zero padded to the byte length of the order the scalar is reduced by (which
    /// for a curve is [`Curve::scalar_size`]).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.to_be_bytes_padded(self.size())
    }

    /// The integer value of the scalar.
    pub fn to_int(&self) -> BigUint {
        self.value.clone()
    }

    /// Borrows the integer value of the scalar.
    pub fn as_int(&self) -> &BigUint {
        &self.value
    }

    /// The curve the scalar belongs to, if it was not created with an explicit modulus.
    pub fn curve(&self) -> Option<Curve> {
        self.curve
    }

    /// The modulus the scalar's arithmetic is done with.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// The length of [`to_bytes`](Self::to_bytes).
    pub fn size(&self) -> usize {
        self.order.byte_len()
    }

    /// Returns true if the scalar is equal to zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

#[allow(clippy::should_implement_trait)]
impl CurveScalar {
    /// Whether the scalar's value equals `other`'s.
    ///
    /// A bare integer is compared as is, without checking it belongs to the curve.
    pub fn equals<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        op::scalar_eq(self, other.into().value())
    }

    /// `self + rhs` modulo the order.
    pub fn add(&self, rhs: &CurveScalar) -> CurveScalar {
        op::scalar_add(self, rhs)
    }

    /// `self - rhs` modulo the order.
    pub fn sub(&self, rhs: &CurveScalar) -> CurveScalar {
        op::scalar_sub(self, rhs)
    }

    /// `self * rhs` modulo the order.
    ///
    /// Returns [`Error::TypeMismatch`] if `rhs` is a bare integer. Scalars only multiply with
    /// scalars.
    pub fn mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<CurveScalar, Error> {
        match rhs.into() {
            Operand::Scalar(rhs) => Ok(op::scalar_mul(self, rhs)),
            Operand::Integer(_) => Err(Error::TypeMismatch),
        }
    }

    /// `self * rhs⁻¹` modulo the order. **Not constant time.**
    ///
    /// Returns [`Error::NoInverse`] if `rhs` is not invertible (it is zero or, for a composite
    /// modulus, shares a factor with it).
    pub fn div(&self, rhs: &CurveScalar) -> Result<CurveScalar, Error> {
        op::scalar_div(self, rhs)
    }

    /// `self ^ exponent` modulo the order. **Not constant time.**
    pub fn pow<'a>(&self, exponent: impl Into<Operand<'a>>) -> CurveScalar {
        op::scalar_pow(self, exponent.into().value())
    }

    /// The multiplicative inverse of `self` modulo the order. **Not constant time.**
    ///
    /// # Example
    /// ```
    /// use scalar_fun::{Curve, CurveScalar, Error};
    /// let a = CurveScalar::random(Curve::Secp256k1, &mut rand::thread_rng());
    /// let a_inverse = a.invert().unwrap();
    /// assert_eq!(a.mul(&a_inverse).unwrap(), CurveScalar::one(Curve::Secp256k1));
    /// assert_eq!(CurveScalar::zero(Curve::Secp256k1).invert().unwrap_err(), Error::NoInverse);
    /// ```
    pub fn invert(&self) -> Result<CurveScalar, Error> {
        op::scalar_invert(self)
    }

    /// The non-negative remainder of `self` divided by `modulus`.
    ///
    /// Unlike every other operation this reduces by `modulus` rather than the order. The result
    /// keeps `self`'s curve and order. Returns [`Error::ZeroModulus`] if `modulus` is zero.
    ///
    /// # Example
    /// ```
    /// use scalar_fun::{Curve, CurveScalar};
    /// let ten = CurveScalar::from_int(10, Curve::Secp256k1).unwrap();
    /// assert!(ten.rem(3u32).unwrap().equals(1u32));
    /// ```
    pub fn rem<'a>(&self, modulus: impl Into<Operand<'a>>) -> Result<CurveScalar, Error> {
        op::scalar_rem(self, modulus.into().value())
    }
}

impl PartialEq for CurveScalar {
    fn eq(&self, rhs: &CurveScalar) -> bool {
        op::scalar_eq(self, &rhs.value)
    }
}

impl Eq for CurveScalar {}

impl core::hash::Hash for CurveScalar {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl_scalar_binop! {
    Add, add => op::scalar_add;
    Sub, sub => op::scalar_sub;
    Mul, mul => op::scalar_mul;
}

impl core::ops::Neg for CurveScalar {
    type Output = CurveScalar;

    fn neg(self) -> Self::Output {
        op::scalar_negate(&self)
    }
}

impl core::ops::Neg for &CurveScalar {
    type Output = CurveScalar;

    fn neg(self) -> Self::Output {
        op::scalar_negate(self)
    }
}

impl AddAssign<&CurveScalar> for CurveScalar {
    fn add_assign(&mut self, rhs: &CurveScalar) {
        *self = op::scalar_add(self, rhs);
    }
}

impl SubAssign<&CurveScalar> for CurveScalar {
    fn sub_assign(&mut self, rhs: &CurveScalar) {
        *self = op::scalar_sub(self, rhs);
    }
}

impl MulAssign<&CurveScalar> for CurveScalar {
    fn mul_assign(&mut self, rhs: &CurveScalar) {
        *self = op::scalar_mul(self, rhs);
    }
}

impl fmt::Display for CurveScalar {
    /// Displays the fixed width big-endian encoding as hex.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        hex::write_hex(f, &self.to_bytes())
    }
}

impl fmt::Debug for CurveScalar {
    /// Formats the scalar as hex along with its curve (or modulus).
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CurveScalar<")?;
        match self.curve {
            Some(curve) => write!(f, "{}", curve)?,
            None => {
                write!(f, "mod ")?;
                hex::write_hex(f, &self.order.to_bytes_be())?;
            }
        }
        write!(f, ">(")?;
        hex::write_hex(f, &self.to_bytes())?;
        write!(f, ")")
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    /// Hex in human readable formats, raw bytes otherwise.
    struct Bytes(Vec<u8>);

    impl Serialize for Bytes {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&hex::encode(&self.0))
            } else {
                serializer.serialize_bytes(&self.0)
            }
        }
    }

    impl<'de> Deserialize<'de> for Bytes {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct BytesVisitor;

            impl<'de> de::Visitor<'de> for BytesVisitor {
                type Value = Bytes;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "a hex string or a byte array")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Bytes, E> {
                    hex::decode(v)
                        .map(Bytes)
                        .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Bytes, E> {
                    Ok(Bytes(v.to_vec()))
                }

                fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Bytes, E> {
                    Ok(Bytes(v))
                }

                fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Bytes, A::Error> {
                    let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                    while let Some(byte) = seq.next_element()? {
                        bytes.push(byte);
                    }
                    Ok(Bytes(bytes))
                }
            }

            if deserializer.is_human_readable() {
                deserializer.deserialize_str(BytesVisitor)
            } else {
                deserializer.deserialize_bytes(BytesVisitor)
            }
        }
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename = "CurveScalar")]
    struct Repr {
        curve: Option<Curve>,
        order: Option<Bytes>,
        value: Bytes,
    }

    impl Serialize for CurveScalar {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Repr {
                curve: self.curve,
                // a curve implies its order
                order: match self.curve {
                    Some(_) => None,
                    None => Some(Bytes(self.order.to_bytes_be())),
                },
                value: Bytes(self.to_bytes()),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for CurveScalar {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = Repr::deserialize(deserializer)?;
            let scalar = match (repr.curve, repr.order) {
                (Some(curve), None) => CurveScalar::from_bytes(&repr.value.0, curve),
                (None, Some(order)) => CurveScalar::with_modulus(
                    BigUint::from_bytes_be(&repr.value.0),
                    BigUint::from_bytes_be(&order.0),
                ),
                (Some(_), Some(_)) => {
                    return Err(de::Error::custom(
                        "a scalar on a named curve cannot also have an explicit order",
                    ));
                }
                (None, None) => return Err(de::Error::missing_field("order")),
            }
            .map_err(de::Error::custom)?;

            if repr.value.0.len() != scalar.size() {
                return Err(de::Error::invalid_length(
                    repr.value.0.len(),
                    &"the byte length of the order",
                ));
            }
            Ok(scalar)
        }
    }
}
