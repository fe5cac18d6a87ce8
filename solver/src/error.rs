//! Error types for board validation and the linear-algebra kernel.

use thiserror::Error;

/// A board layout that breaks the chain's modeling assumptions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square {square} is outside the board (0..={last})")]
    SquareOutOfRange { square: usize, last: usize },

    #[error("square {square} starts more than one snake or ladder")]
    OverlappingSquare { square: usize },

    #[error("the start square 0 cannot be landed on, so it cannot start a jump")]
    JumpFromStart,

    #[error("jump from {square} lands on itself")]
    DegenerateJump { square: usize },

    #[error("jump {from} -> {to} lands on another snake or ladder start")]
    ChainedRedirect { from: usize, to: usize },

    #[error("square {square} is the final square and cannot start a jump")]
    NotAbsorbing { square: usize },

    #[error("ladder {foot} -> {top} does not climb")]
    LadderGoesDown { foot: usize, top: usize },

    #[error("snake {head} -> {tail} does not descend")]
    SnakeGoesUp { head: usize, tail: usize },
}

/// Failures of the dense LU kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    #[error("matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is singular: pivot in column {column} is {pivot:e}")]
    Singular { column: usize, pivot: f64 },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Anything the end-to-end pipeline can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("linear algebra failure: {0}")]
    Linalg(#[from] LinalgError),

    #[error("start square {square} is out of range for this matrix")]
    StartOutOfRange { square: usize },

    #[error("square {square} is a snake or ladder start and is never rested on")]
    NotResting { square: usize },
}
