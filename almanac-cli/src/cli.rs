//! CLI argument parsing using clap

use almanac_solver::Part2Strategy;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How Part 2 searches for the lowest location
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Strategy {
    /// Scan locations upward from zero, one at a time (default)
    #[default]
    Scan,
    /// Scan locations upward in parallel blocks
    ParallelScan,
    /// Split seed ranges at map boundaries; needs no bound
    Split,
}

impl From<Strategy> for Part2Strategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Scan => Part2Strategy::ReverseScan,
            Strategy::ParallelScan => Part2Strategy::ParallelReverseScan,
            Strategy::Split => Part2Strategy::IntervalSplit,
        }
    }
}

/// Seed almanac solver
#[derive(Parser, Debug)]
#[command(
    name = "almanac",
    about = "Find the lowest location reachable from the almanac's seeds",
    version
)]
pub struct Args {
    /// Almanac input file
    #[arg(default_value = "day5_input.txt")]
    pub input: PathBuf,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Exclusive upper bound for the Part 2 reverse scan [default: twice the largest seed]
    #[arg(long)]
    pub bound: Option<u64>,

    /// Part 2 search strategy
    #[arg(long, value_enum, default_value = "scan")]
    pub strategy: Strategy,

    /// Number of threads for the parallel scan
    #[arg(long)]
    pub threads: Option<usize>,

    /// Emit a progress event every N scanned locations
    #[arg(long, default_value_t = 1_000_000)]
    pub progress_every: u64,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
