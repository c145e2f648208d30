//! Minimum-location searches over the pipeline

use crate::pipeline::Pipeline;
use crate::progress::ProgressReporter;
use crate::seeds::{in_any_range, SeedRange};
use rayon::prelude::*;

/// Result of a reverse scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The lowest location whose backward-translated seed lies in a seed range
    Found { location: u64, seed: u64 },
    /// No candidate below `bound` qualified
    Exhausted { bound: u64 },
}

impl SearchOutcome {
    pub fn location(&self) -> Option<u64> {
        match self {
            SearchOutcome::Found { location, .. } => Some(*location),
            SearchOutcome::Exhausted { .. } => None,
        }
    }
}

/// Lowest location reached by forward-translating each seed.
///
/// Returns `None` for an empty seed list.
pub fn min_location(pipeline: &Pipeline, seeds: &[u64]) -> Option<u64> {
    seeds
        .iter()
        .map(|&seed| pipeline.translate_forward(seed))
        .min()
}

/// Lowest location reachable from any seed in `ranges`, by interval splitting
pub fn min_location_in_ranges(pipeline: &Pipeline, ranges: &[SeedRange]) -> Option<u64> {
    pipeline
        .translate_ranges_forward(ranges)
        .iter()
        .filter(|range| !range.is_empty())
        .map(|range| range.start())
        .min()
}

/// Default scan bound: twice the largest flat seed value.
///
/// This is a heuristic, not a guarantee that the answer lies below it.
pub fn default_search_bound(seeds: &[u64]) -> u64 {
    seeds
        .iter()
        .max()
        .map_or(0, |&max| max.saturating_mul(2))
}

/// Scan locations `0..bound` upward and stop at the first one whose
/// backward-translated seed falls inside a seed range.
pub fn reverse_search(
    pipeline: &Pipeline,
    ranges: &[SeedRange],
    bound: u64,
    progress: &mut ProgressReporter,
) -> SearchOutcome {
    for location in 0..bound {
        let seed = pipeline.translate_backward(location);
        if in_any_range(seed, ranges) {
            return SearchOutcome::Found { location, seed };
        }
        progress.tick(location + 1, bound);
    }
    SearchOutcome::Exhausted { bound }
}

/// Parallel form of [`reverse_search`] with the same result.
///
/// Candidates are scanned in consecutive blocks of `progress.every()`; each
/// block is searched on the current rayon pool with `find_first`, so the lowest
/// qualifying location still wins. Progress fires once per finished block.
pub fn reverse_search_parallel(
    pipeline: &Pipeline,
    ranges: &[SeedRange],
    bound: u64,
    progress: &mut ProgressReporter,
) -> SearchOutcome {
    let block = progress.every();
    let mut start = 0;
    while start < bound {
        let end = start.saturating_add(block).min(bound);
        let hit = (start..end)
            .into_par_iter()
            .map(|location| (location, pipeline.translate_backward(location)))
            .find_first(|&(_, seed)| in_any_range(seed, ranges));
        if let Some((location, seed)) = hit {
            return SearchOutcome::Found { location, seed };
        }
        progress.report(end, bound);
        start = end;
    }
    SearchOutcome::Exhausted { bound }
}
