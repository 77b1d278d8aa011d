//! The registry of curves a [`CurveScalar`] can be bound to.
//!
//! Each [`Curve`] knows its opaque identifier (the OpenSSL NID), its group order and the
//! canonical byte length of a scalar. Nothing here does point arithmetic.
//!
//! [`CurveScalar`]: crate::CurveScalar
use crate::Error;
use core::{fmt, str::FromStr};
use num_bigint::BigUint;

/// A named elliptic curve whose group order defines a scalar field.
///
/// # Example
/// ```
/// use scalar_fun::Curve;
/// let curve: Curve = "secp256k1".parse().unwrap();
/// assert_eq!(curve, Curve::Secp256k1);
/// assert_eq!(curve.scalar_size(), 32);
/// assert_eq!(Curve::from_nid(715).unwrap(), Curve::Secp384r1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Curve {
    /// NIST P-224
    Secp224r1,
    /// NIST P-256 (a.k.a. `prime256v1`)
    Secp256r1,
    /// The Bitcoin curve
    Secp256k1,
    /// NIST P-384
    Secp384r1,
    /// NIST P-521
    Secp521r1,
}

#[rustfmt::skip]
const SECP224R1_ORDER: [u8; 28] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x16, 0xa2,
    0xe0, 0xb8, 0xf0, 0x3e, 0x13, 0xdd, 0x29, 0x45,
    0x5c, 0x5c, 0x2a, 0x3d,
];

#[rustfmt::skip]
const SECP256R1_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84,
    0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
];

#[rustfmt::skip]
const SECP256K1_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b,
    0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

#[rustfmt::skip]
const SECP384R1_ORDER: [u8; 48] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xc7, 0x63, 0x4d, 0x81, 0xf4, 0x37, 0x2d, 0xdf,
    0x58, 0x1a, 0x0d, 0xb2, 0x48, 0xb0, 0xa7, 0x7a,
    0xec, 0xec, 0x19, 0x6a, 0xcc, 0xc5, 0x29, 0x73,
];

#[rustfmt::skip]
const SECP521R1_ORDER: [u8; 66] = [
    0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xfa, 0x51, 0x86, 0x87, 0x83, 0xbf, 0x2f,
    0x96, 0x6b, 0x7f, 0xcc, 0x01, 0x48, 0xf7, 0x09,
    0xa5, 0xd0, 0x3b, 0xb5, 0xc9, 0xb8, 0x89, 0x9c,
    0x47, 0xae, 0xbb, 0x6f, 0xb7, 0x1e, 0x91, 0x38,
    0x64, 0x09,
];

impl Curve {
    /// Every curve in the registry.
    pub const ALL: [Curve; 5] = [
        Curve::Secp224r1,
        Curve::Secp256r1,
        Curve::Secp256k1,
        Curve::Secp384r1,
        Curve::Secp521r1,
    ];

    /// The OpenSSL numeric identifier of the curve.
    pub fn nid(self) -> i32 {
        match self {
            Curve::Secp224r1 => 713,
            Curve::Secp256r1 => 415,
            Curve::Secp256k1 => 714,
            Curve::Secp384r1 => 715,
            Curve::Secp521r1 => 716,
        }
    }

    /// Looks up a curve by its OpenSSL numeric identifier.
    pub fn from_nid(nid: i32) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|curve| curve.nid() == nid)
            .ok_or(Error::UnsupportedCurve)
    }

    /// The SEC 2 name of the curve.
    pub fn name(self) -> &'static str {
        match self {
            Curve::Secp224r1 => "secp224r1",
            Curve::Secp256r1 => "secp256r1",
            Curve::Secp256k1 => "secp256k1",
            Curve::Secp384r1 => "secp384r1",
            Curve::Secp521r1 => "secp521r1",
        }
    }

    /// Looks up a curve by its SEC 2 name or a common alias (`prime256v1`, `P-256`, ...).
    /// Matching ignores ASCII case.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let aliases: [(&str, Curve); 10] = [
            ("secp224r1", Curve::Secp224r1),
            ("p-224", Curve::Secp224r1),
            ("secp256r1", Curve::Secp256r1),
            ("prime256v1", Curve::Secp256r1),
            ("p-256", Curve::Secp256r1),
            ("secp256k1", Curve::Secp256k1),
            ("secp384r1", Curve::Secp384r1),
            ("p-384", Curve::Secp384r1),
            ("secp521r1", Curve::Secp521r1),
            ("p-521", Curve::Secp521r1),
        ];
        aliases
            .into_iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, curve)| curve)
            .ok_or(Error::UnsupportedCurve)
    }

    /// The size of the curve's field in bits.
    pub fn key_size(self) -> usize {
        match self {
            Curve::Secp224r1 => 224,
            Curve::Secp256r1 | Curve::Secp256k1 => 256,
            Curve::Secp384r1 => 384,
            Curve::Secp521r1 => 521,
        }
    }

    /// The canonical length in bytes of a scalar on this curve.
    pub fn scalar_size(self) -> usize {
        self.key_size().div_ceil(8)
    }

    /// The big-endian encoding of the group order.
    pub fn order_bytes(self) -> &'static [u8] {
        match self {
            Curve::Secp224r1 => &SECP224R1_ORDER,
            Curve::Secp256r1 => &SECP256R1_ORDER,
            Curve::Secp256k1 => &SECP256K1_ORDER,
            Curve::Secp384r1 => &SECP384R1_ORDER,
            Curve::Secp521r1 => &SECP521R1_ORDER,
        }
    }

    /// The order of the group generated by the curve's base point.
    pub fn order(self) -> BigUint {
        BigUint::from_bytes_be(self.order_bytes())
    }

    /// Whether `value` is a member of the scalar field, i.e. `value < order`.
    pub fn contains(self, value: &BigUint) -> bool {
        value < &self.order()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Curve::from_name(name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Curve {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Curve {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CurveVisitor;

        impl serde::de::Visitor<'_> for CurveVisitor {
            type Value = Curve;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "the name of a supported elliptic curve")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Curve, E> {
                Curve::from_name(v)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(CurveVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::ModArith;

    #[test]
    fn order_lengths_match_scalar_size() {
        for curve in Curve::ALL {
            assert_eq!(curve.order().byte_len(), curve.scalar_size(), "{}", curve);
            assert_eq!(curve.order().bits() as usize, curve.key_size(), "{}", curve);
        }
    }

    #[test]
    fn secp256k1_order() {
        assert_eq!(
            Curve::Secp256k1.order(),
            BigUint::parse_bytes(
                b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
                16
            )
            .unwrap()
        );
    }

    #[test]
    fn lookup_by_name_and_nid() {
        for curve in Curve::ALL {
            assert_eq!(Curve::from_name(curve.name()), Ok(curve));
            assert_eq!(Curve::from_nid(curve.nid()), Ok(curve));
        }
        assert_eq!(Curve::from_name("PRIME256V1"), Ok(Curve::Secp256r1));
        assert_eq!(Curve::from_name("P-521"), Ok(Curve::Secp521r1));
        assert_eq!(Curve::from_name("curve25519"), Err(Error::UnsupportedCurve));
        assert_eq!(Curve::from_nid(0), Err(Error::UnsupportedCurve));
    }

    #[test]
    fn contains_is_strictly_below_order() {
        let order = Curve::Secp256k1.order();
        assert!(Curve::Secp256k1.contains(&BigUint::from(0u8)));
        assert!(Curve::Secp256k1.contains(&(&order - 1u8)));
        assert!(!Curve::Secp256k1.contains(&order));
    }
}
