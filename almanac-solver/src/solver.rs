//! Part 1 and Part 2 solvers over a parsed almanac

use crate::almanac::Almanac;
use crate::error::SolveError;
use crate::progress::ProgressReporter;
use crate::search::{
    default_search_bound, min_location, min_location_in_ranges, reverse_search,
    reverse_search_parallel, SearchOutcome,
};

/// How Part 2 finds the lowest location over the seed ranges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Part2Strategy {
    /// Scan locations upward, translating each one backward (reference behavior)
    #[default]
    ReverseScan,
    /// The reverse scan spread over the current rayon pool
    ParallelReverseScan,
    /// Translate whole seed ranges forward by splitting them at map boundaries
    IntervalSplit,
}

/// Knobs for solving the parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Exclusive scan bound for the reverse scan; `None` uses
    /// [`default_search_bound`]
    pub bound: Option<u64>,
    pub strategy: Part2Strategy,
}

/// Trait for solving a specific part of the puzzle.
///
/// The const generic `N` is the part number, so each part is its own impl and
/// a missing one is a compile error rather than a runtime fallthrough.
pub trait PartSolver<const N: u8> {
    /// Solve this part, returning the numeric answer
    fn solve(&mut self) -> Result<u64, SolveError>;
}

/// Solver for both parts of the seed almanac
///
/// # Example
///
/// ```
/// use almanac_solver::{Almanac, AlmanacSolver, Pipeline, SolveOptions};
///
/// let almanac = Almanac::new(vec![4, 2, 10, 3], Pipeline::identity());
/// let mut solver = AlmanacSolver::new(almanac, SolveOptions::default());
///
/// assert_eq!(solver.solve_part(1).unwrap(), 2);
/// // seeds 4..6 and 10..13; the identity pipeline keeps the lowest at 4
/// assert_eq!(solver.solve_part(2).unwrap(), 4);
/// ```
#[derive(Debug)]
pub struct AlmanacSolver {
    almanac: Almanac,
    options: SolveOptions,
    progress: ProgressReporter,
}

impl AlmanacSolver {
    /// Number of parts this solver implements
    pub const PARTS: u8 = 2;

    pub fn new(almanac: Almanac, options: SolveOptions) -> Self {
        Self {
            almanac,
            options,
            progress: ProgressReporter::silent(),
        }
    }

    /// Attach a progress reporter for the reverse scan
    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    pub fn almanac(&self) -> &Almanac {
        &self.almanac
    }

    /// The exclusive bound the reverse scan will use
    pub fn search_bound(&self) -> u64 {
        self.options
            .bound
            .unwrap_or_else(|| default_search_bound(self.almanac.seeds()))
    }

    /// Solve a part by number
    ///
    /// # Returns
    /// * `Ok(u64)` - The answer for this part
    /// * `Err(SolveError::PartOutOfRange)` - `part` is not in `1..=PARTS`
    /// * `Err(SolveError::SearchExhausted)` - Part 2's scan found nothing below its bound
    pub fn solve_part(&mut self, part: u8) -> Result<u64, SolveError> {
        match part {
            1 => PartSolver::<1>::solve(self),
            2 => PartSolver::<2>::solve(self),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

impl PartSolver<1> for AlmanacSolver {
    fn solve(&mut self) -> Result<u64, SolveError> {
        min_location(self.almanac.pipeline(), self.almanac.seeds()).ok_or(SolveError::NoSeeds)
    }
}

impl PartSolver<2> for AlmanacSolver {
    fn solve(&mut self) -> Result<u64, SolveError> {
        let ranges = self
            .almanac
            .seed_ranges()
            .map_err(SolveError::InvalidSeedRanges)?;
        if ranges.is_empty() {
            return Err(SolveError::NoSeeds);
        }

        let pipeline = self.almanac.pipeline();
        let bound = self.search_bound();
        let outcome = match self.options.strategy {
            Part2Strategy::ReverseScan => {
                reverse_search(pipeline, &ranges, bound, &mut self.progress)
            }
            Part2Strategy::ParallelReverseScan => {
                reverse_search_parallel(pipeline, &ranges, bound, &mut self.progress)
            }
            Part2Strategy::IntervalSplit => {
                return min_location_in_ranges(pipeline, &ranges).ok_or(SolveError::NoSeeds);
            }
        };

        match outcome {
            SearchOutcome::Found { location, .. } => Ok(location),
            SearchOutcome::Exhausted { bound } => Err(SolveError::SearchExhausted { bound }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;

    fn solver(seeds: Vec<u64>, options: SolveOptions) -> AlmanacSolver {
        AlmanacSolver::new(Almanac::new(seeds, Pipeline::identity()), options)
    }

    #[test]
    fn test_part_out_of_range() {
        let mut solver = solver(vec![1, 1], SolveOptions::default());
        assert_eq!(solver.solve_part(0), Err(SolveError::PartOutOfRange(0)));
        assert_eq!(solver.solve_part(3), Err(SolveError::PartOutOfRange(3)));
    }

    #[test]
    fn test_no_seeds() {
        let mut solver = solver(vec![], SolveOptions::default());
        assert_eq!(solver.solve_part(1), Err(SolveError::NoSeeds));
        assert_eq!(solver.solve_part(2), Err(SolveError::NoSeeds));
    }

    #[test]
    fn test_unpaired_seeds_fail_part_two_only() {
        let mut solver = solver(vec![5, 1, 9], SolveOptions::default());
        assert_eq!(solver.solve_part(1), Ok(1));
        assert!(matches!(solver.solve_part(2), Err(SolveError::InvalidSeedRanges(_))));
    }

    #[test]
    fn test_explicit_bound_can_exhaust() {
        let options = SolveOptions {
            bound: Some(5),
            ..SolveOptions::default()
        };
        let mut solver = solver(vec![10, 2], options);
        assert_eq!(solver.search_bound(), 5);
        let err = solver.solve_part(2).unwrap_err();
        assert_eq!(err, SolveError::SearchExhausted { bound: 5 });
        assert!(err.is_inconclusive());
    }

    #[test]
    fn test_strategies_agree_on_identity() {
        for strategy in [
            Part2Strategy::ReverseScan,
            Part2Strategy::ParallelReverseScan,
            Part2Strategy::IntervalSplit,
        ] {
            let options = SolveOptions {
                bound: None,
                strategy,
            };
            assert_eq!(solver(vec![7, 3, 4, 2], options).solve_part(2), Ok(4));
        }
    }
}
