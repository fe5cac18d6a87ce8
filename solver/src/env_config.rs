//! Shared environment configuration for the `snakes` binary.
//!
//! - `SNAKES_LOG`: tracing filter directive (default `warn`)
//! - `SNAKES_PRECISION`: decimal places in printed values (default 6)
//!
//! Logs go to stderr; stdout carries only results.

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_PRECISION, MAX_PRECISION};

/// Default filter when `SNAKES_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Read `SNAKES_LOG` into a filter.
pub fn log_filter() -> EnvFilter {
    std::env::var("SNAKES_LOG")
        .ok()
        .and_then(|s| EnvFilter::try_new(s.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the stderr subscriber. Tolerates an already-installed global subscriber.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Read `SNAKES_PRECISION` (default 6).
pub fn precision() -> usize {
    parse_precision(std::env::var("SNAKES_PRECISION").ok().as_deref())
}

fn parse_precision(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse().ok())
        .filter(|&p: &usize| p <= usize::from(MAX_PRECISION))
        .unwrap_or(DEFAULT_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_precision() {
        assert_eq!(parse_precision(None), DEFAULT_PRECISION);
        assert_eq!(parse_precision(Some("3")), 3);
        assert_eq!(parse_precision(Some(" 10 ")), 10);
        assert_eq!(parse_precision(Some("abc")), DEFAULT_PRECISION);
        assert_eq!(parse_precision(Some("-1")), DEFAULT_PRECISION);
        assert_eq!(parse_precision(Some("17")), 17);
        assert_eq!(parse_precision(Some("18")), DEFAULT_PRECISION);
        assert_eq!(parse_precision(Some("40")), DEFAULT_PRECISION);
    }
}
