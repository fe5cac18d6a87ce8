//! snakes: Expected number of rolls to finish MB Snakes and Ladders.
//!
//! With no arguments prints exactly one line:
//! `Average number of moves to win the MB version of Snakes and Ladders: <value>`
//!
//! Logging goes to stderr, filtered by `SNAKES_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use snakes::board::Board;
use snakes::constants::{DEFAULT_MAX_TURNS, MAX_PRECISION};
use snakes::env_config;
use snakes::report::{
    build_report, format_distribution, format_headline, format_square_table, ReportOptions,
};

#[derive(Parser, Debug)]
#[command(name = "snakes", about = "Expected game length of MB Snakes and Ladders")]
struct Args {
    /// Also print expected moves and standard deviation from every square.
    #[arg(long)]
    per_square: bool,

    /// Also compute the exact distribution of the game length.
    #[arg(long)]
    distribution: bool,

    /// Print the full report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Decimal places in printed values, at most 17 (defaults to SNAKES_PRECISION, then 6).
    #[arg(long, value_parser = clap::value_parser!(u8).range(..=MAX_PRECISION as i64))]
    precision: Option<u8>,

    /// Turn cap for the game-length distribution.
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_config::init_tracing();

    let precision = args
        .precision
        .map(usize::from)
        .unwrap_or_else(env_config::precision);
    let board = Board::classic();
    info!(
        ladders = board.ladders().len(),
        snakes = board.snakes().len(),
        "solving MB layout"
    );

    let options = ReportOptions {
        per_square: args.per_square,
        distribution: args.distribution,
        max_turns: args.max_turns,
    };
    let report = build_report(&board, options).context("failed to solve the absorbing chain")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", format_headline(report.expected_moves, precision));
    if let Some(squares) = &report.squares {
        println!();
        print!("{}", format_square_table(squares, precision));
    }
    if let Some(d) = &report.distribution {
        println!();
        print!("{}", format_distribution(d, precision));
    }
    Ok(())
}
