//! Exact game-length distribution by forward density evolution.
//!
//! Instead of sampling games, push the occupancy vector p_k = p_0·T^k forward
//! one turn at a time. The mass that enters the final square on turn k is
//! P(game length = k). Evolution stops once the mass still on the board drops
//! below [`DENSITY_TOLERANCE`] or the turn cap is hit; whatever is left is
//! reported as `residual_mass`.

use serde::Serialize;
use tracing::debug;

use crate::constants::*;
use crate::error::SolverError;
use crate::matrix::Matrix;

/// P(game finishes on exactly turn k), k = 0, 1, 2, ...
#[derive(Clone, Debug)]
pub struct LengthDistribution {
    pub start: usize,
    pub pmf: Vec<f64>,
    /// Probability mass not yet absorbed when evolution stopped.
    pub residual_mass: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Percentiles {
    pub p10: usize,
    pub p25: usize,
    pub p50: usize,
    pub p75: usize,
    pub p90: usize,
    pub p95: usize,
    pub p99: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct DistributionSummary {
    pub start: usize,
    pub turns_computed: usize,
    pub shortest_game: Option<usize>,
    pub mode: usize,
    pub mean: f64,
    pub residual_mass: f64,
    pub percentiles: Option<Percentiles>,
}

/// Evolve from `start` through transition matrix `t` for at most `max_turns` turns.
///
/// The last row of `t` is taken as the absorbing state. `start` must either be
/// that state or a square with an outgoing distribution.
pub fn game_length_distribution(
    t: &Matrix,
    start: usize,
    max_turns: usize,
) -> Result<LengthDistribution, SolverError> {
    let final_square = t.rows().saturating_sub(1);
    if start > final_square {
        return Err(SolverError::StartOutOfRange { square: start });
    }
    if start != final_square && t.row_sum(start) == 0.0 {
        return Err(SolverError::NotResting { square: start });
    }

    let mut p = vec![0.0; t.rows()];
    p[start] = 1.0;
    let mut absorbed = p[final_square];
    let mut pmf = vec![absorbed];
    let mut residual = 1.0 - absorbed;

    let mut turn = 0;
    while residual >= DENSITY_TOLERANCE && turn < max_turns {
        p = t.vec_mul(&p)?;
        turn += 1;
        pmf.push(p[final_square] - absorbed);
        absorbed = p[final_square];
        residual = p[..final_square].iter().sum();
    }

    debug!(start, turns = turn, residual, "density evolution finished");
    Ok(LengthDistribution {
        start,
        pmf,
        residual_mass: residual,
    })
}

impl LengthDistribution {
    /// Number of turns evolved.
    pub fn turns(&self) -> usize {
        self.pmf.len() - 1
    }

    /// P(length ≤ k).
    pub fn cdf(&self, k: usize) -> f64 {
        self.pmf.iter().take(k + 1).sum()
    }

    /// E[length] over the evolved turns. Truncation error is bounded by the residual tail.
    pub fn mean(&self) -> f64 {
        self.pmf
            .iter()
            .enumerate()
            .map(|(k, &p)| k as f64 * p)
            .sum()
    }

    /// Smallest k with P(length ≤ k) ≥ `q`, or None if the evolved mass never reaches `q`.
    pub fn percentile(&self, q: f64) -> Option<usize> {
        let mut acc = 0.0;
        for (k, &p) in self.pmf.iter().enumerate() {
            acc += p;
            if acc >= q {
                return Some(k);
            }
        }
        None
    }

    pub fn median(&self) -> Option<usize> {
        self.percentile(0.5)
    }

    /// Fewest turns with a non-zero chance of finishing.
    pub fn shortest_game(&self) -> Option<usize> {
        self.pmf.iter().position(|&p| p > 0.0)
    }

    /// Most likely game length.
    pub fn mode(&self) -> usize {
        let mut best = 0;
        for (k, &p) in self.pmf.iter().enumerate() {
            if p > self.pmf[best] {
                best = k;
            }
        }
        best
    }

    pub fn summary(&self) -> DistributionSummary {
        let percentiles = (|| {
            Some(Percentiles {
                p10: self.percentile(0.10)?,
                p25: self.percentile(0.25)?,
                p50: self.percentile(0.50)?,
                p75: self.percentile(0.75)?,
                p90: self.percentile(0.90)?,
                p95: self.percentile(0.95)?,
                p99: self.percentile(0.99)?,
            })
        })();
        DistributionSummary {
            start: self.start,
            turns_computed: self.turns(),
            shortest_game: self.shortest_game(),
            mode: self.mode(),
            mean: self.mean(),
            residual_mass: self.residual_mass,
            percentiles,
        }
    }
}
