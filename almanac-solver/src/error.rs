//! Error types for the almanac library

use crate::stage::Stage;
use thiserror::Error;

/// Error raised when a range triple or seed range cannot be represented
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A map range must cover at least one identifier
    #[error("range length must be > 0 (destination_start = {destination_start}, source_start = {source_start})")]
    EmptyLength {
        destination_start: u64,
        source_start: u64,
    },
    /// `start + length` does not fit in a `u64`
    #[error("range end overflows u64 (start = {start}, length = {length})")]
    Overflow { start: u64, length: u64 },
}

/// Error type for malformed data lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The `seeds:` line is missing or contains something other than integers
    #[error("Invalid seed line: {0}")]
    InvalidSeeds(String),
    /// A map line does not hold exactly three integers
    #[error("Invalid map line {line}: {message}")]
    InvalidTriple { line: usize, message: String },
    /// A map line or seed pair describes an impossible range
    #[error("Invalid range: {0}")]
    InvalidRange(#[from] RangeError),
    /// Seed ranges need an even number of seed values
    #[error("Seed ranges need start/length pairs, got {0} values")]
    UnpairedSeed(usize),
}

/// Error type for the block structure of the almanac
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A line appeared where the next header was expected
    #[error("line {line}: expected header `{expected}`, found `{found}`")]
    UnexpectedLine {
        line: usize,
        expected: Stage,
        found: String,
    },
    /// Input ended before this header was seen
    #[error("missing header `{0}`")]
    MissingHeader(Stage),
    /// Non-blank content after the last map block
    #[error("line {line}: unexpected content after the last map: `{found}`")]
    TrailingContent { line: usize, found: String },
}

/// Error type for building an [`Almanac`](crate::Almanac) from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlmanacError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// Error type for solving a specific part
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The requested part number is out of range (exceeds `PARTS`)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The seed line listed no seeds, so there is no minimum
    #[error("No seeds to translate")]
    NoSeeds,
    /// The seed line cannot be read as start/length pairs
    #[error("Invalid seed ranges: {0}")]
    InvalidSeedRanges(#[source] ParseError),
    /// The reverse scan reached its bound without a match
    #[error("No solution found within bound {bound}")]
    SearchExhausted { bound: u64 },
}

impl SolveError {
    /// Whether this error is a reported outcome rather than a failure
    pub fn is_inconclusive(&self) -> bool {
        matches!(self, SolveError::SearchExhausted { .. })
    }
}
