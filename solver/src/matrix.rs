//! Dense row-major `f64` matrices and borrowed rectangular views.
//!
//! Storage is a single `Vec<f64>` of length `rows * cols`; element (i, j)
//! lives at `i * cols + j`. A [`MatrixView`] borrows a rectangular block of
//! a parent matrix without copying, which is how the solver reads the
//! transient block Q out of the full transition matrix.

use std::ops::{Index, IndexMut};

use crate::error::LinalgError;

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LinalgError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(LinalgError::DimensionMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Swap rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * self.cols);
        head[lo * self.cols..(lo + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    /// Borrow the block starting at (`row0`, `col0`) with the given shape.
    ///
    /// Panics if the block does not fit inside the matrix.
    pub fn view(&self, row0: usize, col0: usize, rows: usize, cols: usize) -> MatrixView<'_> {
        assert!(
            row0 + rows <= self.rows && col0 + cols <= self.cols,
            "view {}x{} at ({}, {}) exceeds {}x{} matrix",
            rows,
            cols,
            row0,
            col0,
            self.rows,
            self.cols
        );
        MatrixView {
            parent: self,
            row0,
            col0,
            rows,
            cols,
        }
    }

    /// Elementwise `self -= other`.
    pub fn sub_assign_view(&mut self, other: &MatrixView<'_>) -> Result<(), LinalgError> {
        if other.rows() != self.rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.rows,
                actual: other.rows(),
            });
        }
        if other.cols() != self.cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.cols,
                actual: other.cols(),
            });
        }
        for i in 0..self.rows {
            let src = other.row(i);
            for (dst, &q) in self.row_mut(i).iter_mut().zip(src) {
                *dst -= q;
            }
        }
        Ok(())
    }

    /// `self * v`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, LinalgError> {
        if v.len() != self.cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.cols,
                actual: v.len(),
            });
        }
        Ok((0..self.rows)
            .map(|i| self.row(i).iter().zip(v).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// `vᵀ * self`: propagates a row distribution one step through a transition matrix.
    pub fn vec_mul(&self, v: &[f64]) -> Result<Vec<f64>, LinalgError> {
        if v.len() != self.rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.rows,
                actual: v.len(),
            });
        }
        let mut out = vec![0.0; self.cols];
        for (i, &p) in v.iter().enumerate() {
            if p == 0.0 {
                continue;
            }
            for (o, &t) in out.iter_mut().zip(self.row(i)) {
                *o += p * t;
            }
        }
        Ok(out)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.data[i * self.cols + j]
    }
}

/// Read-only rectangular block of a [`Matrix`].
#[derive(Clone, Copy, Debug)]
pub struct MatrixView<'a> {
    parent: &'a Matrix,
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
}

impl<'a> MatrixView<'a> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.rows && j < self.cols);
        self.parent[(self.row0 + i, self.col0 + j)]
    }

    #[inline]
    pub fn row(&self, i: usize) -> &'a [f64] {
        let full = self.parent.row(self.row0 + i);
        &full[self.col0..self.col0 + self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_view_reads_block() {
        let m = sample();
        let v = m.view(1, 1, 2, 2);
        assert_eq!(v.get(0, 0), 5.0);
        assert_eq!(v.get(1, 1), 9.0);
        assert_eq!(v.row(1), &[8.0, 9.0]);
        assert_eq!(v.row(0), &[5.0, 6.0]);
        assert_eq!((v.rows(), v.cols()), (2, 2));
    }

    #[test]
    #[should_panic]
    fn test_view_out_of_bounds() {
        let m = sample();
        let _ = m.view(2, 0, 2, 3);
    }

    #[test]
    fn test_identity_minus_view() {
        let m = sample();
        let mut id = Matrix::identity(2);
        id.sub_assign_view(&m.view(0, 0, 2, 2)).unwrap();
        assert_eq!(
            id,
            Matrix::from_rows(&[vec![0.0, -2.0], vec![-4.0, -4.0]]).unwrap()
        );
    }

    #[test]
    fn test_swap_rows() {
        let mut m = sample();
        m.swap_rows(2, 0);
        assert_eq!(m.row(0), &[7.0, 8.0, 9.0]);
        assert_eq!(m.row(2), &[1.0, 2.0, 3.0]);
        m.swap_rows(1, 1);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_mul_vec_and_vec_mul() {
        let m = sample();
        assert_eq!(m.mul_vec(&[1.0, 1.0, 1.0]).unwrap(), vec![6.0, 15.0, 24.0]);
        assert_eq!(m.vec_mul(&[1.0, 0.0, 1.0]).unwrap(), vec![8.0, 10.0, 12.0]);
        assert!(m.mul_vec(&[1.0]).is_err());
    }
}
