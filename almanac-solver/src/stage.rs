//! The seven stage boundaries of the almanac

use std::fmt;

/// One boundary between two adjacent categories of the almanac.
///
/// Stages are listed in pipeline order: the destination category of one stage
/// is the source category of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    SeedToSoil,
    SoilToFertilizer,
    FertilizerToWater,
    WaterToLight,
    LightToTemperature,
    TemperatureToHumidity,
    HumidityToLocation,
}

impl Stage {
    /// Number of stages in the pipeline
    pub const COUNT: usize = 7;

    /// All stages in pipeline order
    pub const ALL: [Stage; Stage::COUNT] = [
        Stage::SeedToSoil,
        Stage::SoilToFertilizer,
        Stage::FertilizerToWater,
        Stage::WaterToLight,
        Stage::LightToTemperature,
        Stage::TemperatureToHumidity,
        Stage::HumidityToLocation,
    ];

    /// Position of this stage in the pipeline (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The header line that introduces this stage's block in the input
    pub fn header(self) -> &'static str {
        match self {
            Stage::SeedToSoil => "seed-to-soil map:",
            Stage::SoilToFertilizer => "soil-to-fertilizer map:",
            Stage::FertilizerToWater => "fertilizer-to-water map:",
            Stage::WaterToLight => "water-to-light map:",
            Stage::LightToTemperature => "light-to-temperature map:",
            Stage::TemperatureToHumidity => "temperature-to-humidity map:",
            Stage::HumidityToLocation => "humidity-to-location map:",
        }
    }

    /// Look up the stage introduced by a header line
    pub fn from_header(line: &str) -> Option<Stage> {
        let line = line.trim();
        Stage::ALL.into_iter().find(|stage| stage.header() == line)
    }

    /// Category this stage translates from
    pub fn source_category(self) -> &'static str {
        match self {
            Stage::SeedToSoil => "seed",
            Stage::SoilToFertilizer => "soil",
            Stage::FertilizerToWater => "fertilizer",
            Stage::WaterToLight => "water",
            Stage::LightToTemperature => "light",
            Stage::TemperatureToHumidity => "temperature",
            Stage::HumidityToLocation => "humidity",
        }
    }

    /// Category this stage translates into
    pub fn destination_category(self) -> &'static str {
        match self.next() {
            Some(next) => next.source_category(),
            None => "location",
        }
    }

    /// The stage that consumes this stage's output
    pub fn next(self) -> Option<Stage> {
        Stage::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
