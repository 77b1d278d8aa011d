//! Arithmetic on [`CurveScalar`]s.
//!
//! Every function here (except [`scalar_rem`]) reduces its result modulo the order of the left
//! hand operand and returns a new scalar carrying the left hand operand's curve and order.
//! Usually you will call these through the methods on [`CurveScalar`] or the `+`, `-`, `*`
//! operators rather than directly.
//!
//! **[`scalar_div`], [`scalar_pow`] and [`scalar_invert`] do not run in constant time.**
use crate::{CurveScalar, Error, backend::ModArith};
use num_bigint::BigUint;

/// Adds two scalars together (modulo the curve order)
pub fn scalar_add(x: &CurveScalar, y: &CurveScalar) -> CurveScalar {
    x.with_value(x.value.mod_add(&y.value, &x.order))
}

/// Subtracts one scalar from another (modulo the curve order)
pub fn scalar_sub(x: &CurveScalar, y: &CurveScalar) -> CurveScalar {
    x.with_value(x.value.mod_sub(&y.value, &x.order))
}

/// Multiplies two scalars together (modulo the curve order)
pub fn scalar_mul(x: &CurveScalar, y: &CurveScalar) -> CurveScalar {
    x.with_value(x.value.mod_mul(&y.value, &x.order))
}

/// Negates a scalar (modulo the curve order)
pub fn scalar_negate(x: &CurveScalar) -> CurveScalar {
    x.with_value(x.value.mod_neg(&x.order))
}

/// Computes `x * y⁻¹` (modulo the curve order).
///
/// Returns [`Error::NoInverse`] if `y` shares a factor with the order. For a prime order that
/// only happens when `y` is zero.
pub fn scalar_div(x: &CurveScalar, y: &CurveScalar) -> Result<CurveScalar, Error> {
    let y_inv = y.value.mod_inverse(&x.order).ok_or(Error::NoInverse)?;
    Ok(x.with_value(x.value.mod_mul(&y_inv, &x.order)))
}

/// Raises `x` to the power `exponent` (modulo the curve order).
pub fn scalar_pow(x: &CurveScalar, exponent: &BigUint) -> CurveScalar {
    x.with_value(x.value.mod_exp(exponent, &x.order))
}

/// Computes the multiplicative inverse of `x` (modulo the curve order).
pub fn scalar_invert(x: &CurveScalar) -> Result<CurveScalar, Error> {
    let inverse = x.value.mod_inverse(&x.order).ok_or(Error::NoInverse)?;
    Ok(x.with_value(inverse))
}

/// Reduces `x` modulo `modulus` (**not** the curve order).
///
/// The result is non-negative and keeps `x`'s curve and order.
pub fn scalar_rem(x: &CurveScalar, modulus: &BigUint) -> Result<CurveScalar, Error> {
    let rem = x.value.nonneg_mod(modulus).ok_or(Error::ZeroModulus)?;
    Ok(x.with_value(rem))
}

/// Whether the integer value of `x` equals `y`.
pub fn scalar_eq(x: &CurveScalar, y: &BigUint) -> bool {
    &x.value == y
}
