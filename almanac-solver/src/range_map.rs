//! Offset-based interval maps with identity fallback

use crate::error::RangeError;
use crate::seeds::SeedRange;

/// A single `(destination_start, source_start, length)` triple.
///
/// Maps the half-open source interval `[source_start, source_start + length)`
/// onto `[destination_start, destination_start + length)` by a constant offset.
/// Both ends are guaranteed to fit in a `u64`, so translation never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapRange {
    destination_start: u64,
    source_start: u64,
    length: u64,
}

impl MapRange {
    /// Create a triple, rejecting empty or overflowing ranges
    pub fn new(destination_start: u64, source_start: u64, length: u64) -> Result<Self, RangeError> {
        if length == 0 {
            return Err(RangeError::EmptyLength {
                destination_start,
                source_start,
            });
        }
        for start in [source_start, destination_start] {
            start
                .checked_add(length)
                .ok_or(RangeError::Overflow { start, length })?;
        }
        Ok(Self {
            destination_start,
            source_start,
            length,
        })
    }

    pub fn destination_start(&self) -> u64 {
        self.destination_start
    }

    pub fn source_start(&self) -> u64 {
        self.source_start
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Exclusive end of the source interval
    pub fn source_end(&self) -> u64 {
        self.source_start + self.length
    }

    /// Exclusive end of the destination interval
    pub fn destination_end(&self) -> u64 {
        self.destination_start + self.length
    }

    pub fn contains_source(&self, key: u64) -> bool {
        self.source_start <= key && key < self.source_end()
    }

    pub fn contains_destination(&self, value: u64) -> bool {
        self.destination_start <= value && value < self.destination_end()
    }

    /// Translate a key known to lie in the source interval
    fn forward(&self, key: u64) -> u64 {
        self.destination_start + (key - self.source_start)
    }

    /// Translate a value known to lie in the destination interval
    fn backward(&self, value: u64) -> u64 {
        self.source_start + (value - self.destination_start)
    }
}

/// An insertion-ordered set of [`MapRange`]s.
///
/// Identifiers outside every source interval translate to themselves. When
/// source intervals overlap, the triple inserted first wins.
///
/// # Example
///
/// ```
/// use almanac_solver::{MapRange, RangeMap};
///
/// let map: RangeMap = [
///     MapRange::new(50, 98, 2).unwrap(),
///     MapRange::new(52, 50, 48).unwrap(),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(map.lookup(79), 81);
/// assert_eq!(map.lookup(14), 14);
/// assert_eq!(map.reverse_lookup(81), 79);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeMap {
    ranges: Vec<MapRange>,
}

impl RangeMap {
    /// Create an empty map (identity everywhere)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a triple; it ranks below every triple already present
    pub fn push(&mut self, range: MapRange) {
        self.ranges.push(range);
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Triples in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, MapRange> {
        self.ranges.iter()
    }

    /// Translate a source key, falling back to identity
    pub fn lookup(&self, key: u64) -> u64 {
        self.ranges
            .iter()
            .find(|range| range.contains_source(key))
            .map_or(key, |range| range.forward(key))
    }

    /// Translate a destination value back to its source, falling back to identity
    pub fn reverse_lookup(&self, value: u64) -> u64 {
        self.ranges
            .iter()
            .find(|range| range.contains_destination(value))
            .map_or(value, |range| range.backward(value))
    }

    /// Whether some triple's source interval contains `key`
    pub fn contains_key(&self, key: u64) -> bool {
        self.ranges.iter().any(|range| range.contains_source(key))
    }

    /// Whether some triple's destination interval contains `value`
    pub fn contains_value(&self, value: u64) -> bool {
        self.ranges.iter().any(|range| range.contains_destination(value))
    }

    /// Find the triple whose source interval fully covers
    /// `[query_start, query_start + query_length)`.
    ///
    /// Returns `None` when no single triple covers the whole query, including
    /// when the query straddles two triples. Use [`RangeMap::map_interval`] to
    /// translate such queries.
    pub fn find_covering_range(&self, query_start: u64, query_length: u64) -> Option<&MapRange> {
        let query_end = query_start.checked_add(query_length)?;
        self.ranges
            .iter()
            .find(|range| range.source_start <= query_start && query_end <= range.source_end())
    }

    /// Translate a whole interval of keys.
    ///
    /// The interval is cut at every triple boundary it crosses. Each piece
    /// claimed by a triple is shifted by that triple's offset; pieces no triple
    /// claims pass through unchanged. The output pieces are disjoint in the
    /// source domain and their lengths sum to the input length. Their order is
    /// unspecified.
    pub fn map_interval(&self, range: SeedRange) -> Vec<SeedRange> {
        let mut mapped = Vec::new();
        let mut pending = if range.is_empty() {
            Vec::new()
        } else {
            vec![(range.start(), range.end())]
        };

        for triple in &self.ranges {
            if pending.is_empty() {
                break;
            }
            let mut unclaimed = Vec::with_capacity(pending.len() + 1);
            for (start, end) in pending {
                let lo = start.max(triple.source_start);
                let hi = end.min(triple.source_end());
                if lo >= hi {
                    unclaimed.push((start, end));
                    continue;
                }
                let shifted = triple.forward(lo);
                mapped.push(SeedRange::from_bounds(shifted, shifted + (hi - lo)));
                if start < lo {
                    unclaimed.push((start, lo));
                }
                if hi < end {
                    unclaimed.push((hi, end));
                }
            }
            pending = unclaimed;
        }

        mapped.extend(
            pending
                .into_iter()
                .map(|(start, end)| SeedRange::from_bounds(start, end)),
        );
        mapped
    }
}

impl FromIterator<MapRange> for RangeMap {
    fn from_iter<T: IntoIterator<Item = MapRange>>(iter: T) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RangeMap {
    type Item = &'a MapRange;
    type IntoIter = std::slice::Iter<'a, MapRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
