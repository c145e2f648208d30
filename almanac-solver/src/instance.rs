//! Solver instance with parse and solve timing

use crate::almanac::Almanac;
use crate::error::{AlmanacError, SolveError};
use crate::progress::ProgressReporter;
use crate::solver::{AlmanacSolver, SolveOptions};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    /// The part that was solved
    pub part: u8,
    /// The numeric answer
    pub answer: u64,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed almanac ready to be solved, with parse timing recorded
///
/// # Example
///
/// ```no_run
/// use almanac_solver::{SolveOptions, SolverInstance};
///
/// fn example(input: &str) -> Result<(), Box<dyn std::error::Error>> {
///     let mut instance = SolverInstance::new(input, SolveOptions::default())?;
///     println!("Parse took {:?}", instance.parse_duration());
///
///     for part in 1..=instance.parts() {
///         let result = instance.solve(part)?;
///         println!("Part {}: {} (took {:?})", part, result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SolverInstance {
    solver: AlmanacSolver,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl SolverInstance {
    /// Create a new solver instance by parsing input
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Successfully parsed, with timing
    /// * `Err(AlmanacError)` - The input is malformed
    pub fn new(input: &str, options: SolveOptions) -> Result<Self, AlmanacError> {
        let parse_start = Utc::now();
        let almanac: Almanac = input.parse()?;
        let parse_end = Utc::now();

        Ok(Self {
            solver: AlmanacSolver::new(almanac, options),
            parse_start,
            parse_end,
        })
    }

    /// Attach a progress reporter for the Part 2 reverse scan
    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.solver = self.solver.with_progress(progress);
        self
    }

    /// Solve the specified part with timing
    pub fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = self.solver.solve_part(part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            part,
            answer,
            solve_start,
            solve_end,
        })
    }

    pub fn solver(&self) -> &AlmanacSolver {
        &self.solver
    }

    /// Number of parts the solver supports
    pub fn parts(&self) -> u8 {
        AlmanacSolver::PARTS
    }

    /// Convenience: get parse duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }
}
