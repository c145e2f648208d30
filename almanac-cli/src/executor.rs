//! Executor for reading the almanac and running the part solvers

use crate::config::Config;
use crate::error::CliError;
use almanac_solver::{
    ProgressReporter, ScanProgress, SolveError, SolveOptions, SolveResult, SolverInstance,
};
use chrono::{TimeDelta, Utc};
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// Result from solving a single part
#[derive(Debug)]
pub struct PartReport {
    pub part: u8,
    pub answer: Result<u64, SolveError>,
    pub solve_duration: TimeDelta,
    /// Parse time, attached to the first report only
    pub parse_duration: Option<TimeDelta>,
}

/// Runs the selected parts on a dedicated rayon pool
pub struct Executor {
    input: PathBuf,
    parts: RangeInclusive<u8>,
    options: SolveOptions,
    progress_every: u64,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(config: &Config) -> Result<Self, CliError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;

        Ok(Self {
            input: config.input.clone(),
            parts: config.parts.clone(),
            options: config.options,
            progress_every: config.progress_every,
            thread_pool,
        })
    }

    /// Parts this executor will report, in order
    pub fn parts(&self) -> RangeInclusive<u8> {
        self.parts.clone()
    }

    /// Read the almanac file
    pub fn read_input(&self) -> Result<String, CliError> {
        fs::read_to_string(&self.input).map_err(|source| CliError::FileAccess {
            path: self.input.clone(),
            source,
        })
    }

    /// Parse the almanac and wire progress events into tracing
    pub fn prepare(&self, input: &str) -> Result<SolverInstance, CliError> {
        let instance = SolverInstance::new(input, self.options)?;
        let solver = instance.solver();
        info!(
            path = %self.input.display(),
            seeds = solver.almanac().seeds().len(),
            bound = solver.search_bound(),
            "parsed almanac"
        );
        for (stage, map) in solver.almanac().pipeline().stages() {
            debug!(stage = %stage, triples = map.len(), "loaded map");
        }

        Ok(instance.with_progress(progress_reporter(self.progress_every)))
    }

    /// Solve every selected part and send each report to the channel
    pub fn execute(&self, mut instance: SolverInstance, tx: Sender<PartReport>) -> Result<(), CliError> {
        let mut parse_duration = Some(instance.parse_duration());
        let parts = self.parts();

        self.thread_pool.install(|| {
            for part in parts {
                let report = solve_part_internal(&mut instance, part, parse_duration.take());
                tx.send(report).map_err(|_| CliError::ChannelSend)?;
            }
            Ok(())
        })
    }
}

/// Progress events become `info` records
fn progress_reporter(every: u64) -> ProgressReporter {
    ProgressReporter::new(every, |progress: ScanProgress| {
        info!(
            checked = progress.checked,
            bound = progress.bound,
            "reverse scan {:.1}% done",
            progress.fraction() * 100.0
        );
    })
}

/// Solve a single part, timing it even when it fails
fn solve_part_internal(
    instance: &mut SolverInstance,
    part: u8,
    parse_duration: Option<TimeDelta>,
) -> PartReport {
    let start = Utc::now();
    let result = instance.solve(part);
    let solve_duration = result
        .as_ref()
        .map(SolveResult::duration)
        .unwrap_or_else(|_| Utc::now() - start);

    match &result {
        Ok(solved) => info!(part, answer = solved.answer, "solved"),
        Err(e) if e.is_inconclusive() => warn!(part, "{}", e),
        Err(e) => warn!(part, error = %e, "part failed"),
    }

    PartReport {
        part,
        answer: result.map(|solved| solved.answer),
        solve_duration,
        parse_duration,
    }
}
