use alloc::vec;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

// ── Fallible arithmetic ─────────────────────────────────────────────
//
// The named methods validate shapes and return `Result`; the operator
// impls below delegate to them and panic on violation.

impl<T: Scalar> Matrix<T> {
    /// Elementwise sum, as a new matrix.
    ///
    /// Fails with [`MatrixError::InvalidSize`] unless both operands have
    /// identical dimensions.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.try_add(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 6.0);
    /// assert_eq!(c[(1, 1)], 12.0);
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if (self.nrows, self.ncols) != (rhs.nrows, rhs.ncols) {
            return Err(MatrixError::InvalidSize);
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Elementwise difference, as a new matrix.
    ///
    /// Fails with [`MatrixError::InvalidSize`] unless both operands have
    /// identical dimensions.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if (self.nrows, self.ncols) != (rhs.nrows, rhs.ncols) {
            return Err(MatrixError::InvalidSize);
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Matrix product `(M×N) * (N×P) → (M×P)`, as a new matrix.
    ///
    /// Fails with [`MatrixError::InvalidSize`] unless
    /// `self.ncols() == rhs.nrows()`. Plain triple loop; no blocking.
    ///
    /// ```
    /// use tabula::{Matrix, MatrixError};
    /// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let b = Matrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
    /// let c = a.try_mul(&b).unwrap();
    /// assert_eq!((c.nrows(), c.ncols()), (2, 2));
    /// assert_eq!(c[(0, 0)], 58.0);
    ///
    /// assert_eq!(b.try_mul(&b).unwrap_err(), MatrixError::InvalidSize);
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::InvalidSize);
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    /// Multiply every element by `factor` in place. Always succeeds.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// m.scale(3.0);
    /// assert_eq!(m[(1, 1)], 12.0);
    /// ```
    pub fn scale(&mut self, factor: T) {
        for x in self.data.iter_mut() {
            *x = *x * factor;
        }
    }
}

// ── Elementwise addition ────────────────────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.try_add(rhs) {
            Ok(sum) => sum,
            Err(_) => panic!(
                "dimension mismatch: {}x{} + {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols,
            ),
        }
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

// ── Elementwise subtraction ─────────────────────────────────────────

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.try_sub(rhs) {
            Ok(diff) => diff,
            Err(_) => panic!(
                "dimension mismatch: {}x{} - {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols,
            ),
        }
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        let data = self.data.iter().map(|&x| T::zero() - x).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.try_mul(rhs) {
            Ok(product) => product,
            Err(_) => panic!(
                "dimension mismatch: {}x{} * {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols,
            ),
        }
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> MulAssign<&Matrix<T>> for Matrix<T> {
    /// `a *= &b` replaces `a` with the product; the shape becomes
    /// `(a.nrows, b.ncols)`.
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self * rhs;
    }
}

impl<T: Scalar> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.mul_assign(&rhs);
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        let data = self.data.iter().map(|&x| x * rhs).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.scale(rhs);
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Scalar division: matrix / scalar ────────────────────────────────

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        let data = self.data.iter().map(|&x| x / rhs).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x / rhs;
        }
    }
}
