//! Functions used to generate test data for property-based testing with [`proptest`].
//!
//! [`proptest`]: https://github.com/altsysrq/proptest
use crate::{Curve, CurveScalar};
use ::proptest::prelude::*;
use num_bigint::BigUint;

prop_compose! {
    /// Generate a random `CurveScalar` on `curve`.
    pub fn scalar(curve: Curve)(
        bytes in prop::collection::vec(any::<u8>(), curve.scalar_size() + 16),
    ) -> CurveScalar {
        CurveScalar::from_bytes_mod_order(&bytes, curve)
    }
}

prop_compose! {
    /// Generate a random, non-zero `CurveScalar` on `curve`.
    pub fn non_zero_scalar(curve: Curve)(
        x in scalar(curve).prop_filter("Value cannot be zero", |x| !x.is_zero()),
    ) -> CurveScalar {
        x
    }
}

prop_compose! {
    /// Generate a random `CurveScalar` modulo a small `modulus` with no curve attached.
    pub fn toy_scalar(modulus: u32)(
        value in 0..modulus.max(1),
    ) -> CurveScalar {
        CurveScalar::with_modulus(value, BigUint::from(modulus.max(1)))
            .unwrap_or_else(|_| unreachable!("value is below the modulus"))
    }
}

/// Generate a random curve from the registry.
pub fn curve() -> impl Strategy<Value = Curve> {
    prop::sample::select(Curve::ALL.to_vec())
}
