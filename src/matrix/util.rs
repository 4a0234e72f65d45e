use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::traits::{FloatScalar, Scalar};

use super::{Matrix, MatrixError};

// ── Shape transforms ────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Transpose: `(M×N) → (N×M)`. Does not mutate `self`.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t.ncols(), 2);
    /// assert_eq!(t[(1, 0)], 2.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let mut out = Matrix {
            data: vec![T::zero(); self.nrows * self.ncols],
            nrows: self.ncols,
            ncols: self.nrows,
        };
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Grow or shrink the row count in place.
    ///
    /// The overlapping top rows are kept; rows beyond the old bound are
    /// zero. Fails with [`MatrixError::InvalidSize`] if `nrows` is 0.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// m.set_rows(3).unwrap();
    /// assert_eq!(m[(1, 1)], 4.0);
    /// assert_eq!(m[(2, 0)], 0.0);
    /// ```
    pub fn set_rows(&mut self, nrows: usize) -> Result<(), MatrixError> {
        if nrows == 0 {
            return Err(MatrixError::InvalidSize);
        }
        if nrows != self.nrows {
            // Row-major layout: rows are contiguous, so this is a plain
            // truncate or zero-extend of the backing storage.
            self.data.resize(nrows * self.ncols, T::zero());
            self.nrows = nrows;
        }
        Ok(())
    }

    /// Grow or shrink the column count in place.
    ///
    /// The overlapping left columns are kept; columns beyond the old
    /// bound are zero. Fails with [`MatrixError::InvalidSize`] if `ncols`
    /// is 0.
    pub fn set_cols(&mut self, ncols: usize) -> Result<(), MatrixError> {
        if ncols == 0 {
            return Err(MatrixError::InvalidSize);
        }
        if ncols != self.ncols {
            let mut next = Self::zeros(self.nrows, ncols)?;
            let keep = self.ncols.min(ncols);
            for i in 0..self.nrows {
                for j in 0..keep {
                    next[(i, j)] = self[(i, j)];
                }
            }
            *self = next;
        }
        Ok(())
    }
}

// ── Map ─────────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]).unwrap();
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Approximate equality ────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Approximate elementwise equality.
    ///
    /// True iff both matrices have the same dimensions and every element
    /// pair differs by at most [`FloatScalar::tolerance`] in absolute
    /// value. A shape mismatch is plain `false`, never an error.
    ///
    /// ```
    /// use tabula::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// let mut b = a.clone();
    /// b[(0, 0)] += 5e-8;
    /// assert!(a.approx_eq(&b));
    /// b[(0, 0)] = 1.1;
    /// assert!(!a.approx_eq(&b));
    /// ```
    pub fn approx_eq(&self, other: &Self) -> bool {
        if (self.nrows, self.ncols) != (other.nrows, other.ncols) {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= T::tolerance())
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Measure column widths so every column lines up.
        let mut widths = vec![0usize; self.ncols];
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                let w = format!("{}", self[(i, j)]).len();
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..self.nrows {
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            if i < self.nrows - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn transpose() {
        let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = a.transpose();
        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t[(2, 1)], 6.0);
    }

    #[test]
    fn transpose_twice_round_trips() {
        let a = Matrix::from_fn(3, 4, |i, j| (i * 7 + j) as f64).unwrap();
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn set_rows_grow_and_shrink() {
        let mut m = Matrix::from_rows(2, 2, &[3.0, 1.0, 2.0, -2.0]).unwrap();
        m.set_rows(3).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m[(1, 1)], -2.0);
        assert_eq!(m[(2, 0)], 0.0);
        assert_eq!(m[(2, 1)], 0.0);

        // Shrink to 1x1, then grow back: the newly exposed cells are zero.
        m.set_rows(1).unwrap();
        m.set_cols(1).unwrap();
        m.set_rows(2).unwrap();
        m.set_cols(2).unwrap();
        assert_eq!(m[(0, 0)], 3.0);
        assert_eq!(m[(1, 1)], 0.0);
    }

    #[test]
    fn set_cols_grow() {
        let mut m = Matrix::from_rows(2, 1, &[3.0, 2.0]).unwrap();
        m.set_cols(10).unwrap();
        assert_eq!(m.ncols(), 10);
        assert_eq!(m[(0, 0)], 3.0);
        assert_eq!(m[(1, 0)], 2.0);
        assert_eq!(m[(1, 9)], 0.0);
    }

    #[test]
    fn set_cols_shrink_keeps_left() {
        let mut m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        m.set_cols(2).unwrap();
        assert_eq!(m, Matrix::from_rows(2, 2, &[1.0, 2.0, 4.0, 5.0]).unwrap());
    }

    #[test]
    fn resize_invalid() {
        let mut m = Matrix::<f64>::zeros(2, 2).unwrap();
        assert_eq!(m.set_rows(0), Err(MatrixError::InvalidSize));
        assert_eq!(m.set_cols(0), Err(MatrixError::InvalidSize));
        // The failed resize leaves the matrix untouched.
        assert_eq!((m.nrows(), m.ncols()), (2, 2));
    }

    #[test]
    fn resize_noop() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        m.set_rows(2).unwrap();
        m.set_cols(2).unwrap();
        assert_eq!(m, Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap());
    }

    #[test]
    fn map() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let doubled = m.map(|x| x * 2.0);
        assert_eq!(doubled[(0, 0)], 2.0);
        assert_eq!(doubled[(1, 1)], 8.0);
    }

    #[test]
    fn map_type_change() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        let rounded = m.map(|x| x as i32);
        assert_eq!(rounded[(0, 0)], 1);
        assert_eq!(rounded[(1, 1)], 4);
    }

    #[test]
    fn approx_eq_reflexive_symmetric() {
        let a = Matrix::from_fn(3, 3, |i, j| (i + j) as f64).unwrap();
        let b = a.clone();
        assert!(a.approx_eq(&a));
        assert!(a.approx_eq(&b));
        assert!(b.approx_eq(&a));
    }

    #[test]
    fn approx_eq_tolerance_boundary() {
        let a = Matrix::<f64>::zeros(2, 2).unwrap();
        let mut b = a.clone();

        // Exactly at the tolerance: still equal.
        b[(0, 0)] = 1e-7;
        assert!(a.approx_eq(&b));
        assert!(b.approx_eq(&a));

        // Past the tolerance: not equal.
        b[(0, 0)] = 1.5e-7;
        assert!(!a.approx_eq(&b));
        assert!(!b.approx_eq(&a));
    }

    #[test]
    fn approx_eq_shape_mismatch_is_false() {
        let a = Matrix::<f64>::zeros(2, 2).unwrap();
        let b = Matrix::<f64>::zeros(2, 3).unwrap();
        assert!(!a.approx_eq(&b));
    }

    #[test]
    fn display() {
        let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let s = format!("{}", m);
        assert!(s.contains('1'));
        assert!(s.contains('4'));
        assert_eq!(s.lines().count(), 2);
    }

    #[test]
    fn display_alignment() {
        let m = Matrix::from_rows(2, 2, &[1.0, 100.0, 1000.0, 2.0]).unwrap();
        let s = format!("{}", m);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn display_integers() {
        let m = Matrix::from_rows(2, 2, &[1_i32, 22, 333, 4]).unwrap();
        let s: String = format!("{}", m);
        assert_eq!(s, "  1  22\n333   4");
    }
}
