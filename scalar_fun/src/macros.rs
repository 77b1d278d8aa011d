/// Implements a `core::ops` binary operator for every owned/borrowed combination of
/// `CurveScalar` operands by delegating to a function in [`op`](crate::op).
macro_rules! impl_scalar_binop {
    ($($trait:ident, $method:ident => $op:path;)+) => {
        $(
            impl core::ops::$trait<&CurveScalar> for &CurveScalar {
                type Output = CurveScalar;

                fn $method(self, rhs: &CurveScalar) -> CurveScalar {
                    $op(self, rhs)
                }
            }

            impl core::ops::$trait<CurveScalar> for &CurveScalar {
                type Output = CurveScalar;

                fn $method(self, rhs: CurveScalar) -> CurveScalar {
                    $op(self, &rhs)
                }
            }

            impl core::ops::$trait<&CurveScalar> for CurveScalar {
                type Output = CurveScalar;

                fn $method(self, rhs: &CurveScalar) -> CurveScalar {
                    $op(&self, rhs)
                }
            }

            impl core::ops::$trait<CurveScalar> for CurveScalar {
                type Output = CurveScalar;

                fn $method(self, rhs: CurveScalar) -> CurveScalar {
                    $op(&self, &rhs)
                }
            }
        )+
    };
}

/// Implements `From<$t> for Operand` for primitive unsigned integers.
macro_rules! impl_operand_from_uint {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Operand<'_> {
                fn from(value: $t) -> Self {
                    Operand::Integer(BigUint::from(value))
                }
            }
        )+
    };
}
