//! Seed Almanac Range Remapping
//!
//! Translates numeric identifiers through the almanac's seven range maps
//! (seed → soil → fertilizer → water → light → temperature → humidity →
//! location) and answers the two puzzle questions over them.
//!
//! # Overview
//!
//! This library provides:
//! - [`RangeMap`]: ordered offset intervals with identity fallback, forward and
//!   reverse lookup, and interval splitting
//! - [`Pipeline`]: the seven maps chained in [`Stage`] order
//! - [`Almanac`]: parsing of the `seeds:` line and the seven map blocks
//! - Searches: forward minimum over seeds, reverse brute-force scan over
//!   locations, and exact minimum over seed ranges
//! - [`AlmanacSolver`] and [`SolverInstance`]: Part 1 / Part 2 with timing
//!
//! # Quick Example
//!
//! ```
//! use almanac_solver::{SolveOptions, SolverInstance};
//!
//! let input = "\
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//!
//! soil-to-fertilizer map:
//! 0 15 37
//! 37 52 2
//! 39 0 15
//!
//! fertilizer-to-water map:
//! 49 53 8
//! 0 11 42
//! 42 0 7
//! 57 7 4
//!
//! water-to-light map:
//! 88 18 7
//! 18 25 70
//!
//! light-to-temperature map:
//! 45 77 23
//! 81 45 19
//! 68 64 13
//!
//! temperature-to-humidity map:
//! 0 69 1
//! 1 0 69
//!
//! humidity-to-location map:
//! 60 56 37
//! 56 93 4
//! ";
//!
//! let mut instance = SolverInstance::new(input, SolveOptions::default()).unwrap();
//! assert_eq!(instance.solve(1).unwrap().answer, 35);
//! assert_eq!(instance.solve(2).unwrap().answer, 46);
//! ```
//!
//! # Part 2 strategies
//!
//! The reverse scan walks location identifiers upward from zero and stops at
//! the first one whose backward translation lands in a seed range. It needs an
//! upper bound, which defaults to twice the largest seed value. The
//! interval-splitting strategy needs no bound: it pushes whole seed ranges
//! through every stage, cutting them wherever they straddle a map boundary.

mod almanac;
mod error;
mod instance;
mod pipeline;
mod progress;
mod range_map;
mod search;
mod seeds;
mod solver;
mod stage;

// Re-export public API
pub use almanac::Almanac;
pub use error::{AlmanacError, FormatError, ParseError, RangeError, SolveError};
pub use instance::{SolveResult, SolverInstance};
pub use pipeline::Pipeline;
pub use progress::{ProgressReporter, ScanProgress};
pub use range_map::{MapRange, RangeMap};
pub use search::{
    default_search_bound, min_location, min_location_in_ranges, reverse_search,
    reverse_search_parallel, SearchOutcome,
};
pub use seeds::{expand_ranges, in_any_range, pair_seeds, SeedRange};
pub use solver::{AlmanacSolver, Part2Strategy, PartSolver, SolveOptions};
pub use stage::Stage;
