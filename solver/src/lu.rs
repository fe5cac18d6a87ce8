//! LU decomposition with partial pivoting: P·A = L·U.
//!
//! The factorization is stored compactly in one matrix: U on and above the
//! diagonal, the multipliers of the unit-lower-triangular L strictly below it.
//! `perm[i]` is the row of A that ended up in row i, so P·A has row i equal to
//! A's row `perm[i]`.
//!
//! Inversion solves A·x = e_j for each unit vector, reusing the factors.

use crate::constants::SINGULAR_EPSILON;
use crate::error::LinalgError;
use crate::matrix::Matrix;

pub struct LuDecomposition {
    lu: Matrix,
    perm: Vec<usize>,
    /// +1 or -1: parity of the row permutation.
    sign: f64,
}

impl LuDecomposition {
    /// Factor `a` in place. Fails on the first pivot smaller than [`SINGULAR_EPSILON`].
    pub fn new(a: Matrix) -> Result<Self, LinalgError> {
        if !a.is_square() {
            return Err(LinalgError::NotSquare {
                rows: a.rows(),
                cols: a.cols(),
            });
        }
        let n = a.rows();
        let mut lu = a;
        let mut perm: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;

        for k in 0..n {
            let mut p = k;
            let mut best = lu[(k, k)].abs();
            for i in (k + 1)..n {
                let v = lu[(i, k)].abs();
                if v > best {
                    best = v;
                    p = i;
                }
            }
            if best < SINGULAR_EPSILON {
                return Err(LinalgError::Singular {
                    column: k,
                    pivot: lu[(p, k)],
                });
            }
            if p != k {
                lu.swap_rows(p, k);
                perm.swap(p, k);
                sign = -sign;
            }

            let pivot = lu[(k, k)];
            for i in (k + 1)..n {
                let factor = lu[(i, k)] / pivot;
                lu[(i, k)] = factor;
                if factor == 0.0 {
                    continue;
                }
                for j in (k + 1)..n {
                    let ukj = lu[(k, j)];
                    lu[(i, j)] -= factor * ukj;
                }
            }
        }

        Ok(Self { lu, perm, sign })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.lu.rows()
    }

    /// det(A) = sign(P) · Π U[i][i].
    pub fn determinant(&self) -> f64 {
        (0..self.dim()).fold(self.sign, |acc, i| acc * self.lu[(i, i)])
    }

    /// Solve A·x = b.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>, LinalgError> {
        let n = self.dim();
        if b.len() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: n,
                actual: b.len(),
            });
        }
        let mut x: Vec<f64> = self.perm.iter().map(|&p| b[p]).collect();
        self.substitute(&mut x);
        Ok(x)
    }

    /// Forward substitution with unit L, then back substitution with U, in place.
    fn substitute(&self, x: &mut [f64]) {
        let n = self.dim();
        for i in 0..n {
            let row = self.lu.row(i);
            let s: f64 = row[..i].iter().zip(&x[..i]).map(|(l, y)| l * y).sum();
            x[i] -= s;
        }
        for i in (0..n).rev() {
            let row = self.lu.row(i);
            let s: f64 = row[i + 1..].iter().zip(&x[i + 1..]).map(|(u, y)| u * y).sum();
            x[i] = (x[i] - s) / row[i];
        }
    }

    /// A⁻¹, one column per unit right-hand side.
    pub fn inverse(&self) -> Matrix {
        let n = self.dim();
        let mut inv = Matrix::zeros(n, n);
        let mut col = vec![0.0; n];
        for j in 0..n {
            // P·e_j has its single 1 in the row i where perm[i] == j.
            for (i, c) in col.iter_mut().enumerate() {
                *c = if self.perm[i] == j { 1.0 } else { 0.0 };
            }
            self.substitute(&mut col);
            for (i, &v) in col.iter().enumerate() {
                inv[(i, j)] = v;
            }
        }
        inv
    }
}

/// Convenience: factor and invert `a`.
pub fn invert(a: Matrix) -> Result<Matrix, LinalgError> {
    Ok(LuDecomposition::new(a)?.inverse())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Matrix, b: &Matrix, tol: f64) {
        assert_eq!(a.rows(), b.rows());
        assert_eq!(a.cols(), b.cols());
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                assert!(
                    (a[(i, j)] - b[(i, j)]).abs() < tol,
                    "({i},{j}): {} vs {}",
                    a[(i, j)],
                    b[(i, j)]
                );
            }
        }
    }

    fn matmul(a: &Matrix, b: &Matrix) -> Matrix {
        let mut c = Matrix::zeros(a.rows(), b.cols());
        for i in 0..a.rows() {
            for k in 0..a.cols() {
                for j in 0..b.cols() {
                    c[(i, j)] += a[(i, k)] * b[(k, j)];
                }
            }
        }
        c
    }

    #[test]
    fn test_inverse_2x2() {
        let a = Matrix::from_rows(&[vec![4.0, 7.0], vec![2.0, 6.0]]).unwrap();
        let inv = invert(a).unwrap();
        let expected = Matrix::from_rows(&[vec![0.6, -0.7], vec![-0.2, 0.4]]).unwrap();
        assert_close(&inv, &expected, 1e-12);
    }

    #[test]
    fn test_requires_pivoting() {
        // Zero in the leading position: fails without row exchange.
        let a = Matrix::from_rows(&[
            vec![0.0, 2.0, 1.0],
            vec![1.0, 1.0, 0.0],
            vec![3.0, 0.0, 1.0],
        ])
        .unwrap();
        let lu = LuDecomposition::new(a.clone()).unwrap();
        assert!((lu.determinant() - (-5.0)).abs() < 1e-12);
        let inv = lu.inverse();
        assert_close(&matmul(&a, &inv), &Matrix::identity(3), 1e-12);
    }

    #[test]
    fn test_solve() {
        let a = Matrix::from_rows(&[
            vec![2.0, 1.0, -1.0],
            vec![-3.0, -1.0, 2.0],
            vec![-2.0, 1.0, 2.0],
        ])
        .unwrap();
        let lu = LuDecomposition::new(a).unwrap();
        let x = lu.solve(&[8.0, -11.0, -3.0]).unwrap();
        for (got, want) in x.iter().zip([2.0, 3.0, -1.0]) {
            assert!((got - want).abs() < 1e-12);
        }
        assert!(lu.solve(&[1.0]).is_err());
    }

    #[test]
    fn test_singular() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        match LuDecomposition::new(a) {
            Err(LinalgError::Singular { column, .. }) => assert_eq!(column, 1),
            other => panic!("expected singular, got {:?}", other.map(|lu| lu.dim())),
        }
    }

    #[test]
    fn test_not_square() {
        let err = LuDecomposition::new(Matrix::zeros(2, 3)).err().unwrap();
        assert_eq!(err, LinalgError::NotSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn test_identity_is_own_inverse() {
        let inv = invert(Matrix::identity(5)).unwrap();
        assert_close(&inv, &Matrix::identity(5), 1e-15);
    }
}
