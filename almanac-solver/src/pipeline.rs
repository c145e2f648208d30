//! The seven-stage translation pipeline

use crate::range_map::RangeMap;
use crate::seeds::SeedRange;
use crate::stage::Stage;

/// Seven [`RangeMap`]s chained in [`Stage`] order.
///
/// Stage *i*'s output domain is stage *i+1*'s input domain, so a seed
/// identifier translated forward through every stage becomes a location
/// identifier, and a location translated backward becomes a seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    maps: [RangeMap; Stage::COUNT],
}

impl Pipeline {
    /// Build a pipeline from one map per stage, in stage order
    pub fn new(maps: [RangeMap; Stage::COUNT]) -> Self {
        Self { maps }
    }

    /// A pipeline whose every stage is the identity
    pub fn identity() -> Self {
        Self::default()
    }

    /// The map for a given stage
    pub fn stage(&self, stage: Stage) -> &RangeMap {
        &self.maps[stage.index()]
    }

    /// Stages paired with their maps, in pipeline order
    pub fn stages(&self) -> impl DoubleEndedIterator<Item = (Stage, &RangeMap)> + '_ {
        Stage::ALL.into_iter().zip(self.maps.iter())
    }

    /// Translate a seed identifier into a location identifier
    pub fn translate_forward(&self, seed: u64) -> u64 {
        self.maps.iter().fold(seed, |id, map| map.lookup(id))
    }

    /// Translate a location identifier back into a seed identifier
    pub fn translate_backward(&self, location: u64) -> u64 {
        self.maps
            .iter()
            .rev()
            .fold(location, |id, map| map.reverse_lookup(id))
    }

    /// Translate whole seed ranges into the location ranges they reach
    pub fn translate_ranges_forward(&self, ranges: &[SeedRange]) -> Vec<SeedRange> {
        self.maps.iter().fold(ranges.to_vec(), |current, map| {
            current
                .into_iter()
                .flat_map(|range| map.map_interval(range))
                .collect()
        })
    }
}
