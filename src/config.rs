use crate::coordinate::Coordinate;
use anyhow::{bail, Result};
use clap::Parser;
use std::time::Duration;

/// Layouts tried by `--require-path` before giving up on a reachable goal.
pub const MAX_LAYOUT_ATTEMPTS: usize = 1_000;

/// Slowest accepted replay speed, one step per minute.
pub const MAX_TICK_MS: u64 = 60_000;

/// Robot navigating a grid of random obstacles with A*.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    #[arg(long, default_value_t = 20)]
    pub cols: usize,

    /// Number of random obstacle placement attempts
    #[arg(long, default_value_t = 100)]
    pub obstacles: usize,

    /// Seed for a reproducible obstacle layout
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between replay steps
    #[arg(long, default_value_t = 200)]
    pub tick_ms: u64,

    /// Start cell as ROW,COL (default: top-left corner)
    #[arg(long, value_parser = parse_coordinate)]
    pub start: Option<Coordinate>,

    /// Goal cell as ROW,COL (default: bottom-right corner)
    #[arg(long, value_parser = parse_coordinate)]
    pub goal: Option<Coordinate>,

    /// Regenerate the layout until the goal is reachable
    #[arg(long, default_value_t = false)]
    pub require_path: bool,

    /// Print the solved map once instead of animating it
    #[arg(long, default_value_t = false)]
    pub no_animation: bool,
}

impl Config {
    pub fn start(&self) -> Coordinate {
        self.start.unwrap_or_default()
    }

    pub fn goal(&self) -> Coordinate {
        self.goal.unwrap_or(Coordinate::new(
            self.rows.saturating_sub(1),
            self.cols.saturating_sub(1),
        ))
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            bail!("grid must have at least one row and one column");
        }
        if self.tick_ms == 0 || self.tick_ms > MAX_TICK_MS {
            bail!("--tick-ms must be between 1 and {MAX_TICK_MS}");
        }
        for (name, p) in [("start", self.start()), ("goal", self.goal())] {
            if p.row >= self.rows || p.col >= self.cols {
                bail!("{name} {p} is outside the {}x{} grid", self.rows, self.cols);
            }
        }
        Ok(())
    }
}

fn parse_coordinate(s: &str) -> std::result::Result<Coordinate, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid index {v:?}: {e}"))
    };
    Ok(Coordinate::new(parse(row)?, parse(col)?))
}
