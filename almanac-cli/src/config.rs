//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use almanac_solver::SolveOptions;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Almanac input path, with `~` expanded
    pub input: PathBuf,
    /// Parts to solve, in order
    pub parts: RangeInclusive<u8>,
    /// Part 2 bound and strategy
    pub options: SolveOptions,
    /// Number of threads for the parallel scan
    pub thread_count: usize,
    /// Progress cadence for the reverse scan
    pub progress_every: u64,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.progress_every == 0 {
            return Err(CliError::Config(
                "--progress-every must be at least 1".to_string(),
            ));
        }
        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config(
                    "--threads must be at least 1".to_string(),
                ));
            }
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            input: expand_tilde(&args.input),
            parts: args.part.map_or(1..=2, |p| p..=p),
            options: SolveOptions {
                bound: args.bound,
                strategy: args.strategy.into(),
            },
            thread_count,
            progress_every: args.progress_every,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
