//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file missing or unreadable
    #[error("Cannot read input file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not a well-formed almanac
    #[error("Malformed almanac: {0}")]
    Almanac(#[from] almanac_solver::AlmanacError),

    /// Parts that failed to solve; each was already reported on its own line
    #[error("{0} part(s) failed")]
    PartsFailed(usize),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// The result channel closed before every part was reported
    #[error("Channel send error")]
    ChannelSend,

    /// The solver thread panicked
    #[error("Executor thread panicked")]
    ExecutorPanicked,
}
