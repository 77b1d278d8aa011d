//! Explicit configuration for scalar derivation.
use crate::Curve;

/// The parameters a protocol derives its scalars under.
///
/// There is no default curve: every derivation names the curve it works on so the result is
/// fully determined by the inputs.
///
/// # Example
/// ```
/// use scalar_fun::{Curve, Params};
/// let params = Params::new(Curve::Secp256k1);
/// assert_eq!(params.curve(), Curve::Secp256k1);
/// assert_eq!(Params::from(Curve::Secp256k1), params);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    curve: Curve,
}

impl Params {
    /// Parameters for scalars on `curve`.
    pub fn new(curve: Curve) -> Self {
        Params { curve }
    }

    /// The curve whose order scalars are reduced by.
    pub fn curve(&self) -> Curve {
        self.curve
    }
}

impl From<Curve> for Params {
    fn from(curve: Curve) -> Self {
        Params::new(curve)
    }
}
