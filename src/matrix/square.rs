use alloc::vec;

use crate::traits::{FloatScalar, Scalar};

use super::{Matrix, MatrixError};

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Integer matrix power via repeated squaring.
    ///
    /// `pow(0)` returns the identity matrix. Fails with
    /// [`MatrixError::InvalidSize`] unless square.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 1.0, 0.0, 1.0]).unwrap();
    /// let m3 = m.pow(3).unwrap();
    /// assert_eq!(m3[(0, 1)], 3.0);
    /// ```
    pub fn pow(&self, mut n: u32) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::InvalidSize);
        }
        let mut result = Self::eye(self.nrows)?;
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            n >>= 1;
        }
        Ok(result)
    }

    /// Determinant via cofactor (Laplace) expansion along row 0.
    ///
    /// Runs in O(n!); intended for the small matrices this type targets.
    /// Fails with [`MatrixError::InvalidSize`] unless square.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[3.0_f64, 1.0, 2.0, -2.0]).unwrap();
    /// assert_eq!(m.det().unwrap(), -8.0);
    /// ```
    pub fn det(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::InvalidSize);
        }
        Ok(self.det_unchecked())
    }

    /// Recursive expansion on a matrix already known to be square.
    fn det_unchecked(&self) -> T {
        let n = self.nrows;
        if n == 1 {
            return self[(0, 0)];
        }
        if n == 2 {
            return self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)];
        }
        let mut det = T::zero();
        let mut sign = T::one();
        for j in 0..n {
            let minor = self.minor_unchecked(0, j);
            det = det + self[(0, j)] * minor.det_unchecked() * sign;
            sign = T::zero() - sign;
        }
        det
    }

    /// Submatrix with the given row and column deleted (zero-based),
    /// preserving the relative order of the remaining rows and columns.
    ///
    /// Fails with [`MatrixError::InvalidSize`] if either dimension is
    /// less than 2, and [`MatrixError::IndexOutOfBounds`] if the indices
    /// fall outside the matrix.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
    /// let minor = m.minor(0, 1).unwrap();
    /// assert_eq!(minor, Matrix::from_rows(2, 2, &[4.0, 6.0, 7.0, 9.0]).unwrap());
    /// ```
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        if self.nrows < 2 || self.ncols < 2 {
            return Err(MatrixError::InvalidSize);
        }
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexOutOfBounds);
        }
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let mut out = Matrix {
            data: vec![T::zero(); (self.nrows - 1) * (self.ncols - 1)],
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
        };
        let mut r = 0;
        for i in 0..self.nrows {
            if i == row {
                continue;
            }
            let mut c = 0;
            for j in 0..self.ncols {
                if j == col {
                    continue;
                }
                out[(r, c)] = self[(i, j)];
                c += 1;
            }
            r += 1;
        }
        out
    }

    /// Matrix of cofactors: entry `(i, j)` is
    /// `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// Fails with [`MatrixError::InvalidSize`] unless square. A 1x1 input
    /// yields the 1x1 matrix `[1]`, which keeps
    /// `A * adjugate(A) = det(A) * I` valid in the degenerate case.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 0.0, 4.0, 2.0, 5.0, 2.0, 1.0]).unwrap();
    /// let c = m.cofactor_matrix().unwrap();
    /// let expected =
    ///     Matrix::from_rows(3, 3, &[0.0, 10.0, -20.0, 4.0, -14.0, 8.0, -8.0, -2.0, 4.0]).unwrap();
    /// assert_eq!(c, expected);
    /// ```
    pub fn cofactor_matrix(&self) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::InvalidSize);
        }
        if self.nrows == 1 {
            return Ok(Matrix {
                data: vec![T::one()],
                nrows: 1,
                ncols: 1,
            });
        }
        let n = self.nrows;
        let mut out = Self::zeros(n, n)?;
        for i in 0..n {
            for j in 0..n {
                let d = self.minor_unchecked(i, j).det_unchecked();
                out[(i, j)] = if (i + j) % 2 == 0 { d } else { T::zero() - d };
            }
        }
        Ok(out)
    }

    /// Adjugate: the transposed cofactor matrix.
    ///
    /// Fails with [`MatrixError::InvalidSize`] unless square.
    pub fn adjugate(&self) -> Result<Self, MatrixError> {
        Ok(self.cofactor_matrix()?.transpose())
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Inverse via the adjugate method: `adjugate(A) / det(A)`.
    ///
    /// Does not mutate `self`. Fails with [`MatrixError::InvalidSize`]
    /// unless square, and with [`MatrixError::DeterminantIsZero`] when the
    /// determinant modulus is at most [`FloatScalar::tolerance`].
    ///
    /// ```
    /// use tabula::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[3.0_f64, 1.0, 2.0, -2.0]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// assert!((&a * &inv).approx_eq(&Matrix::eye(2).unwrap()));
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.det()?;
        if det.abs() <= T::tolerance() {
            return Err(MatrixError::DeterminantIsZero);
        }
        Ok(self.adjugate()?.map(|x| x / det))
    }
}
