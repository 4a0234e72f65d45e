use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that compare values approximately or divide by
/// a determinant ([`Matrix::approx_eq`], [`Matrix::inverse`]).
///
/// [`Matrix::approx_eq`]: crate::Matrix::approx_eq
/// [`Matrix::inverse`]: crate::Matrix::inverse
pub trait FloatScalar: Scalar + Float {
    /// Absolute tolerance for approximate comparison and singularity checks.
    ///
    /// Two elements closer than this are considered equal, and a matrix
    /// whose determinant modulus is at most this value is treated as
    /// singular.
    fn tolerance() -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                fn tolerance() -> $t {
                    1e-7
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
