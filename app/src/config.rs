//! Command-line options and the [`Config`] the program is built from.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, ensure};
use clap::{Parser, ValueEnum};

/// Accepted grid sizes (rows, equal to columns).
pub const SIZE_RANGE: RangeInclusive<i32> = 2..=200;

/// Which search the run key starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Uniform-cost search.
    #[default]
    Dijkstra,
    /// A* with a straight-line estimate.
    #[value(name = "astar")]
    AStar,
}

impl Algorithm {
    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra's shortest path",
            Self::AStar => "A star",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dijkstra => Self::AStar,
            Self::AStar => Self::Dijkstra,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        })
    }
}

/// Watch Dijkstra and A* explore a grid you draw, or a maze.
#[derive(Parser, Debug)]
#[command(name = "gridpath", version, about)]
pub struct Cli {
    /// Rows (and columns) of the grid.
    #[arg(short, long, default_value_t = 30)]
    pub size: i32,

    /// Search selected at start-up.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Dijkstra)]
    pub algorithm: Algorithm,

    /// Seed for reproducible mazes.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each animation step, in milliseconds.
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Write logs to this file (RUST_LOG filters, default `info`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not capture the mouse.
    #[arg(long)]
    pub no_mouse: bool,
}

/// Validated program settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub size: i32,
    pub algorithm: Algorithm,
    pub seed: Option<u64>,
    pub delay: Duration,
    pub log_file: Option<PathBuf>,
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 30,
            algorithm: Algorithm::Dijkstra,
            seed: None,
            delay: Duration::from_millis(10),
            log_file: None,
            mouse: true,
        }
    }
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = Self {
            size: cli.size,
            algorithm: cli.algorithm,
            seed: cli.seed,
            delay: Duration::from_millis(cli.delay_ms),
            log_file: cli.log_file,
            mouse: !cli.no_mouse,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            SIZE_RANGE.contains(&self.size),
            "grid size {} is outside {}..={}",
            self.size,
            SIZE_RANGE.start(),
            SIZE_RANGE.end()
        );
        Ok(())
    }
}
