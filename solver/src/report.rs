//! Result assembly and formatting: the headline line, per-square table,
//! distribution summary, and the JSON report.

use std::fmt::Write;

use serde::Serialize;

use crate::absorption::{expected_moves, fundamental_matrix, square_summaries, SquareSummary};
use crate::board::Board;
use crate::constants::*;
use crate::density::{game_length_distribution, DistributionSummary};
use crate::error::SolverError;
use crate::transition::{build_transition_matrix, transient_block};

/// Which optional sections to compute.
#[derive(Clone, Copy, Debug)]
pub struct ReportOptions {
    pub per_square: bool,
    pub distribution: bool,
    pub max_turns: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            per_square: false,
            distribution: false,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

// ── Report ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SolveReport {
    pub board: Board,
    pub expected_moves: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squares: Option<Vec<SquareSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<DistributionSummary>,
}

/// Run the pipeline for `board` and collect the requested sections.
///
/// T is only kept alive past the inversion when the distribution is requested.
pub fn build_report(board: &Board, options: ReportOptions) -> Result<SolveReport, SolverError> {
    let t = build_transition_matrix(board);
    let n = fundamental_matrix(transient_block(&t))?;

    let distribution = if options.distribution {
        Some(game_length_distribution(&t, 0, options.max_turns)?.summary())
    } else {
        None
    };
    drop(t);

    let expected_moves = expected_moves(&n, 0)?;
    let squares = if options.per_square {
        Some(square_summaries(board, &n)?)
    } else {
        None
    };

    Ok(SolveReport {
        board: board.clone(),
        expected_moves,
        squares,
        distribution,
    })
}

// ── Text formatting ─────────────────────────────────────────────────

/// `Average number of moves to win the MB version of Snakes and Ladders: 39.225122`
pub fn format_headline(value: f64, precision: usize) -> String {
    format!("{}: {:.*}", HEADLINE_PREFIX, precision, value)
}

pub fn format_square_table(squares: &[SquareSummary], precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:>12}  {:>12}  note", "square", "expected", "std_dev");
    for s in squares {
        let note = if s.resting { "" } else { "pass-through" };
        let _ = writeln!(
            out,
            "{:>6}  {:>12.*}  {:>12.*}  {}",
            s.square, precision, s.expected_moves, precision, s.std_dev, note
        );
    }
    out
}

pub fn format_distribution(d: &DistributionSummary, precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Game length from square {}:", d.start);
    let _ = writeln!(out, "  mean          {:.*}", precision, d.mean);
    if let Some(k) = d.shortest_game {
        let _ = writeln!(out, "  shortest      {}", k);
    }
    let _ = writeln!(out, "  mode          {}", d.mode);
    match &d.percentiles {
        Some(p) => {
            let _ = writeln!(
                out,
                "  percentiles   p10={} p25={} p50={} p75={} p90={} p95={} p99={}",
                p.p10, p.p25, p.p50, p.p75, p.p90, p.p95, p.p99
            );
        }
        None => {
            let _ = writeln!(out, "  percentiles   (turn cap reached before p99)");
        }
    }
    let _ = writeln!(
        out,
        "  turns         {} (residual mass {:e})",
        d.turns_computed, d.residual_mass
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_format() {
        assert_eq!(
            format_headline(39.2251223, 6),
            "Average number of moves to win the MB version of Snakes and Ladders: 39.225122"
        );
        assert_eq!(
            format_headline(6.0, 2),
            "Average number of moves to win the MB version of Snakes and Ladders: 6.00"
        );
    }

    #[test]
    fn test_default_report_has_only_headline() {
        let report = build_report(&Board::classic(), ReportOptions::default()).unwrap();
        assert!(report.squares.is_none());
        assert!(report.distribution.is_none());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("squares").is_none());
        assert_eq!(json["board"]["ladders"]["80"], 100);
        assert_eq!(json["board"]["snakes"]["98"], 78);
    }

    #[test]
    fn test_full_report_sections() {
        let options = ReportOptions {
            per_square: true,
            distribution: true,
            ..ReportOptions::default()
        };
        let report = build_report(&Board::classic(), options).unwrap();
        let squares = report.squares.as_ref().unwrap();
        assert_eq!(squares.len(), NUM_TRANSIENT);
        assert_eq!(squares[0].expected_moves, report.expected_moves);

        let d = report.distribution.as_ref().unwrap();
        assert!((d.mean - report.expected_moves).abs() < 1e-6);

        let table = format_square_table(squares, 3);
        assert_eq!(table.lines().count(), NUM_TRANSIENT + 1);
        assert!(table.contains("pass-through"));
        assert!(format_distribution(d, 3).contains("p50="));
    }
}
