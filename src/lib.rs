//! # tabula
//!
//! Dense dynamically-sized matrix type with exact row/column semantics,
//! explicit error signaling, and an adjugate-based inverse. Pure Rust,
//! no-std compatible (requires `alloc`).
//!
//! The crate deliberately stays small: one owning 2D container with the
//! standard value-type operations (equality, elementwise arithmetic,
//! scalar and matrix multiplication, transpose) and the classical
//! cofactor-expansion algorithms (determinant, cofactor matrix, adjugate,
//! inverse). There is no pivoting and no decomposition machinery; the
//! determinant is O(n!) and intended for the small matrices this type
//! targets.
//!
//! ## Quick start
//!
//! ```
//! use tabula::Matrix;
//!
//! let a = Matrix::from_rows(2, 2, &[3.0_f64, 1.0, 2.0, -2.0]).unwrap();
//! assert_eq!(a.det().unwrap(), -8.0);
//!
//! let inv = a.inverse().unwrap();
//! let id = Matrix::eye(2).unwrap();
//! assert!((&a * &inv).approx_eq(&id));
//! ```
//!
//! ## Error handling
//!
//! Every operation with a precondition returns a `Result` whose error is
//! [`MatrixError`]: [`MatrixError::InvalidSize`] for zero,
//! mismatched, or non-square dimensions, [`MatrixError::IndexOutOfBounds`]
//! for element access outside the matrix, and
//! [`MatrixError::DeterminantIsZero`] for the inverse of a numerically
//! singular matrix. Validation always precedes mutation. The operator
//! forms (`+`, `-`, `*`, `m[(i, j)]`) panic on violation instead, like the
//! rest of the ecosystem.
//!
//! ## Modules
//!
//! - [`matrix`] — The [`Matrix<T>`] type: constructors, element access,
//!   resizing, arithmetic operators, and the square-matrix algorithms.
//!   [`Matrixf64`] and friends are element-type aliases.
//!
//! - [`traits`] — Element trait hierarchy: [`Scalar`] for all matrix
//!   elements (`f32`, `f64`, integers), [`FloatScalar`] for the
//!   operations that need approximate comparison or division
//!   (`approx_eq`, `inverse`).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm; `std::error::Error` for [`MatrixError`] |
//! | `libm`  | no      | Pure-Rust software float fallback for no_std targets |
//!
//! [`Matrix<T>`]: Matrix

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod matrix;
pub mod traits;

pub use matrix::aliases::{Matrixf32, Matrixf64, Matrixi32, Matrixi64};
pub use matrix::{Matrix, MatrixError};
pub use traits::{FloatScalar, Scalar};
