//! The error type shared by every fallible scalar operation.
use core::fmt;

/// Why constructing or operating on a [`CurveScalar`] failed.
///
/// [`CurveScalar`]: crate::CurveScalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The integer is not a member of the field defined by the curve order (it is negative or
    /// greater than or equal to the order).
    InvalidScalar,
    /// The curve name or identifier is not in the registry.
    UnsupportedCurve,
    /// The operand was an integer where a scalar was required.
    TypeMismatch,
    /// The element has no multiplicative inverse modulo the order.
    NoInverse,
    /// A modulus of zero was supplied.
    ZeroModulus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            InvalidScalar => write!(f, "value is not a valid scalar for the curve order"),
            UnsupportedCurve => write!(f, "unsupported elliptic curve"),
            TypeMismatch => write!(f, "operand must be a scalar, not a bare integer"),
            NoInverse => write!(f, "element is not invertible modulo the order"),
            ZeroModulus => write!(f, "modulus must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
