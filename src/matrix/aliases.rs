//! Pre-defined type aliases for common `Matrix` element types.

use super::Matrix;

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// Matrix with `i32` elements.
pub type Matrixi32 = Matrix<i32>;
/// Matrix with `i64` elements.
pub type Matrixi64 = Matrix<i64>;
