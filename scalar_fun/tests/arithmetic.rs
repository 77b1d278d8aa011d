#![cfg(feature = "proptest")]
use proptest::prelude::*;
use scalar_fun::{Curve, CurveScalar, Error, proptest::*};

proptest! {
    #[test]
    fn add_sub_inverse((a, b) in curve().prop_flat_map(|curve| (scalar(curve), scalar(curve)))) {
        prop_assert_eq!(a.add(&b).sub(&b), a.clone());
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert!((&a - &a).is_zero());
    }

    #[test]
    fn field_laws(
        a in scalar(Curve::Secp256k1),
        b in scalar(Curve::Secp256k1),
        c in scalar(Curve::Secp256k1),
    ) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&a + &(-&a), CurveScalar::zero(Curve::Secp256k1));
    }

    #[test]
    fn division_is_mul_by_inverse(a in scalar(Curve::Secp384r1), b in non_zero_scalar(Curve::Secp384r1)) {
        let quotient = a.div(&b).unwrap();
        prop_assert_eq!(&quotient, &a.mul(&b.invert().unwrap()).unwrap());
        prop_assert_eq!(quotient.mul(&b).unwrap(), a);
    }

    #[test]
    fn inverse_of_inverse(x in non_zero_scalar(Curve::Secp521r1)) {
        prop_assert_eq!(x.invert().unwrap().invert().unwrap(), x.clone());
        prop_assert_eq!(x.pow(x.order() - 2u32), x.invert().unwrap());
    }

    #[test]
    fn zero_never_inverts(curve in curve(), x in any::<u8>()) {
        let x = CurveScalar::from_int(x, curve).unwrap();
        let zero = CurveScalar::zero(curve);
        prop_assert_eq!(zero.invert(), Err(Error::NoInverse));
        prop_assert_eq!(x.div(&zero), Err(Error::NoInverse));
    }

    #[test]
    fn pow_adds_exponents(x in scalar(Curve::Secp256r1), e1 in any::<u32>(), e2 in any::<u32>()) {
        let lhs = x.pow(u64::from(e1) + u64::from(e2));
        let rhs = x.pow(e1).mul(&x.pow(e2)).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn byte_round_trip(curve in curve(), bytes in prop::collection::vec(any::<u8>(), 0..80)) {
        let x = CurveScalar::from_bytes_mod_order(&bytes, curve);
        let encoded = x.to_bytes();
        prop_assert_eq!(encoded.len(), CurveScalar::size_for(curve));
        prop_assert_eq!(CurveScalar::from_bytes(&encoded, curve).unwrap(), x);
    }

    #[test]
    fn rem_is_nonnegative_remainder(x in scalar(Curve::Secp256k1), m in 1u64..) {
        let rem = x.rem(m).unwrap();
        prop_assert_eq!(rem.to_int(), x.to_int() % m);
        prop_assert_eq!(rem.curve(), Some(Curve::Secp256k1));
    }

    #[test]
    fn toy_field(a in toy_scalar(7), b in toy_scalar(7)) {
        let expected = (a.to_int() + b.to_int()) % 7u32;
        prop_assert!((&a + &b).equals(expected));
        if !b.is_zero() {
            prop_assert_eq!(a.div(&b).unwrap().mul(&b).unwrap(), a);
        }
    }
}

#[test]
fn equals_accepts_out_of_range_integers() {
    let x = CurveScalar::from_int(5, Curve::Secp256k1).unwrap();
    assert!(x.equals(5u32));
    assert!(!x.equals(Curve::Secp256k1.order() + 5u32));
    assert!(!x.equals(Curve::Secp256k1.order()));
    assert!(x.equals(&CurveScalar::from_int(5, Curve::Secp256r1).unwrap()));
}
