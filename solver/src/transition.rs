//! One-turn transition matrix T for a board.
//!
//! T is [`NUM_SQUARES`] × [`NUM_SQUARES`]. Row `start` is the distribution of
//! the square the counter rests on after one roll from `start`:
//!
//! 1. `target = start + die` for each face 1..=6
//! 2. jump redirect (single lookup)
//! 3. overshoot past [`FINAL_SQUARE`] forfeits the move
//! 4. `T[start][target] += 1/6`, accumulating when faces coincide
//!
//! The final square is absorbing. Rows of pass-through squares (ladder feet,
//! snake heads) are left all-zero: the counter never starts a turn there.

use tracing::debug;

use crate::board::Board;
use crate::constants::*;
use crate::matrix::{Matrix, MatrixView};

/// Square the counter rests on after rolling `die` from `start`.
#[inline]
pub fn resolve_roll(board: &Board, start: usize, die: usize) -> usize {
    debug_assert!((1..=DIE_FACES).contains(&die));
    let target = board.redirect(start + die);
    if target > FINAL_SQUARE {
        start
    } else {
        target
    }
}

/// Build T for `board`.
pub fn build_transition_matrix(board: &Board) -> Matrix {
    let mut t = Matrix::zeros(NUM_SQUARES, NUM_SQUARES);
    t[(FINAL_SQUARE, FINAL_SQUARE)] = 1.0;

    let mut populated = 0usize;
    for start in 0..FINAL_SQUARE {
        if board.is_pass_through(start) {
            continue;
        }
        for die in 1..=DIE_FACES {
            let target = resolve_roll(board, start, die);
            t[(start, target)] += FACE_PROBABILITY;
        }
        populated += 1;
    }

    debug!(
        populated_rows = populated,
        pass_through_rows = FINAL_SQUARE - populated,
        "built transition matrix"
    );
    t
}

/// Q: the transient-to-transient block of T (top-left [`NUM_TRANSIENT`] square).
pub fn transient_block(t: &Matrix) -> MatrixView<'_> {
    t.view(0, 0, NUM_TRANSIENT, NUM_TRANSIENT)
}
