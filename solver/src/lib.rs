//! # Snakes — expected game length of MB Snakes and Ladders
//!
//! Models a single-player game of the 100-square MB layout as an **absorbing
//! Markov chain** and solves for the expected number of rolls in closed form.
//!
//! ## Algorithm overview
//!
//! | Step | Rust module | Description |
//! |------|-------------|-------------|
//! | 1 | [`transition`] | Build the 101×101 one-turn matrix T (square 100 absorbing) |
//! | 2 | [`absorption`] | Take the 100×100 transient block Q, compute N = (I − Q)⁻¹ |
//! | 3 | [`lu`] | Invert via LU decomposition with partial pivoting |
//! | 4 | [`absorption::expected_moves`] | Sum row 0 of N |
//!
//! Optional analyses reuse the same matrices: per-square expectation and
//! variance ([`absorption::square_summaries`]) and the exact distribution of
//! the game length by forward density evolution ([`density`]).
//!
//! ## State representation
//!
//! State i ∈ [0, 100] is the square the counter rests on at the start of a
//! turn; 0 is off-board. Ladder feet and snake heads are pass-through squares:
//! landing there redirects immediately, so their rows of T are left empty.
//! [`board::Board::new`] rejects layouts where a jump lands on another jump
//! start, which is what keeps those empty rows sound.

#![allow(clippy::needless_range_loop)]

pub mod absorption;
pub mod board;
pub mod constants;
pub mod density;
pub mod env_config;
pub mod error;
pub mod lu;
pub mod matrix;
pub mod report;
pub mod transition;

pub use board::Board;
pub use error::{BoardError, LinalgError, SolverError};
