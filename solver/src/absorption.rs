//! Absorption-time analysis via the fundamental matrix N = (I − Q)⁻¹.
//!
//! N[i][j] is the expected number of turns started on transient square j
//! when play begins on square i. Row sums of N give the expected number of
//! rolls to reach the final square:
//!
//! | Quantity | Formula | Function |
//! |----------|---------|----------|
//! | fundamental matrix | N = (I − Q)⁻¹ | [`fundamental_matrix`] |
//! | expected rolls from i | t = N·1 | [`expected_moves`], [`expected_moves_all`] |
//! | variance of rolls | (2N − I)·t − t∘t | [`move_count_variance`] |
//!
//! Pass-through squares have all-zero rows in Q, so their row of N is the
//! unit row and their expected count is exactly 1.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{LinalgError, SolverError};
use crate::lu;
use crate::matrix::{Matrix, MatrixView};
use crate::transition::{build_transition_matrix, transient_block};

/// Per-square absorption statistics.
#[derive(Clone, Debug, Serialize)]
pub struct SquareSummary {
    pub square: usize,
    /// False for ladder feet and snake heads.
    pub resting: bool,
    pub expected_moves: f64,
    pub variance: f64,
    pub std_dev: f64,
}

/// N = (I − Q)⁻¹.
pub fn fundamental_matrix(q: MatrixView<'_>) -> Result<Matrix, LinalgError> {
    if q.rows() != q.cols() {
        return Err(LinalgError::NotSquare {
            rows: q.rows(),
            cols: q.cols(),
        });
    }
    let t0 = Instant::now();
    let mut m = Matrix::identity(q.rows());
    m.sub_assign_view(&q)?;
    let n = lu::invert(m)?;
    debug!(
        dim = n.rows(),
        elapsed_us = t0.elapsed().as_micros() as u64,
        "inverted I - Q"
    );
    Ok(n)
}

/// Expected rolls to finish when starting on `start`: Σ_j N[start][j].
pub fn expected_moves(n: &Matrix, start: usize) -> Result<f64, SolverError> {
    if start >= n.rows() {
        return Err(SolverError::StartOutOfRange { square: start });
    }
    Ok(n.row_sum(start))
}

/// t = N·1 for every transient square.
pub fn expected_moves_all(n: &Matrix) -> Vec<f64> {
    (0..n.rows()).map(|i| n.row_sum(i)).collect()
}

/// Variance of the number of rolls from every transient square.
pub fn move_count_variance(n: &Matrix) -> Result<Vec<f64>, LinalgError> {
    let t = expected_moves_all(n);
    let nt = n.mul_vec(&t)?;
    Ok(nt
        .iter()
        .zip(&t)
        .map(|(&nt_i, &t_i)| 2.0 * nt_i - t_i - t_i * t_i)
        .collect())
}

/// Mean, variance and standard deviation for every transient square of `board`.
pub fn square_summaries(board: &Board, n: &Matrix) -> Result<Vec<SquareSummary>, LinalgError> {
    let expected = expected_moves_all(n);
    let variance = move_count_variance(n)?;
    Ok(expected
        .into_iter()
        .zip(variance)
        .enumerate()
        .map(|(square, (expected_moves, variance))| {
            // Round-off can leave a tiny negative variance on squares with
            // a deterministic outcome.
            let variance = variance.max(0.0);
            SquareSummary {
                square,
                resting: !board.is_pass_through(square),
                expected_moves,
                variance,
                std_dev: variance.sqrt(),
            }
        })
        .collect())
}

/// Build T for `board`, invert I − Q, and return N. T is dropped before returning.
pub fn solve_fundamental(board: &Board) -> Result<Matrix, SolverError> {
    let t = build_transition_matrix(board);
    let n = fundamental_matrix(transient_block(&t))?;
    Ok(n)
}

/// Expected rolls to finish from square 0.
pub fn expected_moves_to_win(board: &Board) -> Result<f64, SolverError> {
    let t0 = Instant::now();
    let n = solve_fundamental(board)?;
    let moves = expected_moves(&n, 0)?;
    info!(
        expected_moves = moves,
        elapsed_ms = t0.elapsed().as_secs_f64() * 1e3,
        "solved absorbing chain"
    );
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn test_plain_board_last_square() {
        // From 99 only a 1 finishes: geometric with p = 1/6.
        let n = solve_fundamental(&Board::plain()).unwrap();
        let t = expected_moves(&n, 99).unwrap();
        assert!((t - 6.0).abs() < 1e-9, "t={t}");
        let var = move_count_variance(&n).unwrap();
        // Var of geometric(p) = (1 - p) / p^2 = 30.
        assert!((var[99] - 30.0).abs() < 1e-7, "var={}", var[99]);
    }

    #[test]
    fn test_pass_through_rows_count_once() {
        let board = Board::classic();
        let n = solve_fundamental(&board).unwrap();
        for (&sq, _) in board.jumps() {
            if sq < NUM_TRANSIENT {
                assert!((expected_moves(&n, sq).unwrap() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_start_out_of_range() {
        let n = solve_fundamental(&Board::classic()).unwrap();
        assert_eq!(
            expected_moves(&n, NUM_TRANSIENT).unwrap_err(),
            SolverError::StartOutOfRange {
                square: NUM_TRANSIENT
            }
        );
    }

    #[test]
    fn test_non_square_view_rejected() {
        let t = Matrix::zeros(4, 4);
        let err = fundamental_matrix(t.view(0, 0, 2, 3)).unwrap_err();
        assert_eq!(err, LinalgError::NotSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn test_summaries_flag_pass_through() {
        let board = Board::classic();
        let n = solve_fundamental(&board).unwrap();
        let summaries = square_summaries(&board, &n).unwrap();
        assert_eq!(summaries.len(), NUM_TRANSIENT);
        assert!(!summaries[1].resting);
        assert!(summaries[0].resting);
        assert!(summaries.iter().all(|s| s.variance >= 0.0));
        assert!((summaries[99].expected_moves - 6.0).abs() < 1e-9);
    }
}
