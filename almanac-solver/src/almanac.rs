//! Parsing the almanac text into seeds and a pipeline

use crate::error::{AlmanacError, FormatError, ParseError};
use crate::pipeline::Pipeline;
use crate::range_map::{MapRange, RangeMap};
use crate::seeds::{pair_seeds, SeedRange};
use crate::stage::Stage;
use anyhow::{anyhow, Context};
use std::str::FromStr;

const SEEDS_PREFIX: &str = "seeds:";

/// The parsed puzzle input: the seed line and the seven stage maps
///
/// # Example
///
/// ```
/// use almanac_solver::Almanac;
///
/// let input = "seeds: 1 2\n\n\
///     seed-to-soil map:\n5 1 1\n\n\
///     soil-to-fertilizer map:\n\n\
///     fertilizer-to-water map:\n\n\
///     water-to-light map:\n\n\
///     light-to-temperature map:\n\n\
///     temperature-to-humidity map:\n\n\
///     humidity-to-location map:\n";
/// let almanac: Almanac = input.parse().unwrap();
/// assert_eq!(almanac.seeds(), &[1, 2]);
/// assert_eq!(almanac.pipeline().translate_forward(1), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<u64>,
    pipeline: Pipeline,
}

impl Almanac {
    pub fn new(seeds: Vec<u64>, pipeline: Pipeline) -> Self {
        Self { seeds, pipeline }
    }

    /// Seed identifiers as a flat list
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Seed identifiers read as `(start, length)` pairs
    pub fn seed_ranges(&self) -> Result<Vec<SeedRange>, ParseError> {
        pair_seeds(&self.seeds)
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

impl FromStr for Almanac {
    type Err = AlmanacError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()));

        let (_, seed_line) = lines
            .by_ref()
            .find(|(_, line)| !line.is_empty())
            .ok_or_else(|| ParseError::InvalidSeeds("input is empty".to_string()))?;
        let seeds = parse_seed_line(seed_line)?;

        let mut maps: [RangeMap; Stage::COUNT] = Default::default();
        for stage in Stage::ALL {
            let (line, text) = lines
                .by_ref()
                .find(|(_, line)| !line.is_empty())
                .ok_or(FormatError::MissingHeader(stage))?;
            if Stage::from_header(text) != Some(stage) {
                return Err(FormatError::UnexpectedLine {
                    line,
                    expected: stage,
                    found: text.to_string(),
                }
                .into());
            }
            // A block runs until the first blank line or the end of input
            for (line, text) in lines.by_ref().take_while(|(_, line)| !line.is_empty()) {
                maps[stage.index()].push(parse_triple(line, text)?);
            }
        }

        if let Some((line, text)) = lines.find(|(_, line)| !line.is_empty()) {
            return Err(FormatError::TrailingContent {
                line,
                found: text.to_string(),
            }
            .into());
        }

        Ok(Almanac::new(seeds, Pipeline::new(maps)))
    }
}

fn parse_numbers(text: &str) -> anyhow::Result<Vec<u64>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("`{}` is not a non-negative integer", token))
        })
        .collect()
}

fn parse_seed_line(line: &str) -> Result<Vec<u64>, ParseError> {
    let numbers = line
        .strip_prefix(SEEDS_PREFIX)
        .ok_or_else(|| anyhow!("expected `{}` prefix, found `{}`", SEEDS_PREFIX, line))
        .and_then(parse_numbers)
        .map_err(|e| ParseError::InvalidSeeds(format!("{:#}", e)))?;
    Ok(numbers)
}

fn parse_triple(line: usize, text: &str) -> Result<MapRange, ParseError> {
    let (destination_start, source_start, length) = parse_numbers(text)
        .and_then(|numbers| match numbers[..] {
            [destination_start, source_start, length] => {
                Ok((destination_start, source_start, length))
            }
            _ => Err(anyhow!("expected 3 integers, found {}", numbers.len())),
        })
        .map_err(|e| ParseError::InvalidTriple {
            line,
            message: format!("{:#}", e),
        })?;
    Ok(MapRange::new(destination_start, source_start, length)?)
}
