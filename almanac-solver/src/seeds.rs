//! Seed identifiers and seed ranges

use crate::error::{ParseError, RangeError};
use itertools::Itertools;

/// A half-open block of identifiers `[start, start + length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeedRange {
    start: u64,
    length: u64,
}

impl SeedRange {
    /// Create a range, rejecting one whose end does not fit in a `u64`
    pub fn new(start: u64, length: u64) -> Result<Self, RangeError> {
        start
            .checked_add(length)
            .ok_or(RangeError::Overflow { start, length })?;
        Ok(Self { start, length })
    }

    /// Build a range from half-open bounds `[start, end)`
    pub(crate) fn from_bounds(start: u64, end: u64) -> Self {
        Self {
            start,
            length: end - start,
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Exclusive end of the range
    pub fn end(&self) -> u64 {
        self.start + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn contains(&self, id: u64) -> bool {
        self.start <= id && id < self.end()
    }

    /// Iterate over every identifier of the range
    pub fn iter(&self) -> std::ops::Range<u64> {
        self.start..self.end()
    }
}

/// Pair up a flat seed list into `(start, length)` ranges
pub fn pair_seeds(seeds: &[u64]) -> Result<Vec<SeedRange>, ParseError> {
    if seeds.len() % 2 != 0 {
        return Err(ParseError::UnpairedSeed(seeds.len()));
    }
    seeds
        .iter()
        .tuples()
        .map(|(&start, &length)| SeedRange::new(start, length).map_err(ParseError::from))
        .collect()
}

/// Whether any range contains `id`
pub fn in_any_range(id: u64, ranges: &[SeedRange]) -> bool {
    ranges.iter().any(|range| range.contains(id))
}

/// The flat expansion of a set of ranges, in the order given
pub fn expand_ranges(ranges: &[SeedRange]) -> impl Iterator<Item = u64> + '_ {
    ranges.iter().flat_map(SeedRange::iter)
}
