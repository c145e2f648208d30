//! Scenario tests against the small sample almanac

use almanac_solver::{
    default_search_bound, expand_ranges, min_location, min_location_in_ranges, reverse_search,
    reverse_search_parallel, Almanac, Part2Strategy, ProgressReporter, SearchOutcome,
    SeedRange, SolveError, SolveOptions, SolverInstance, Stage,
};

const SAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

fn sample() -> Almanac {
    SAMPLE.parse().expect("sample almanac parses")
}

#[test]
fn test_seed_to_soil_lookups() {
    let almanac = sample();
    let map = almanac.pipeline().stage(Stage::SeedToSoil);
    assert_eq!(map.len(), 2);
    assert_eq!(map.lookup(79), 81);
    assert_eq!(map.lookup(14), 14);
    assert_eq!(map.lookup(55), 57);
    assert_eq!(map.lookup(13), 13);
    assert_eq!(map.lookup(2), 2);
}

#[test]
fn test_forward_translation_of_each_seed() {
    let almanac = sample();
    let locations: Vec<u64> = almanac
        .seeds()
        .iter()
        .map(|&seed| almanac.pipeline().translate_forward(seed))
        .collect();
    assert_eq!(locations, vec![82, 43, 86, 35]);
    assert_eq!(min_location(almanac.pipeline(), almanac.seeds()), Some(35));
}

#[test]
fn test_flat_expansion_minimum() {
    let almanac = sample();
    let ranges = almanac.seed_ranges().unwrap();
    assert_eq!(ranges, vec![SeedRange::new(79, 14).unwrap(), SeedRange::new(55, 13).unwrap()]);
    assert_eq!(expand_ranges(&ranges).count(), 27);

    let minimum = expand_ranges(&ranges)
        .map(|seed| almanac.pipeline().translate_forward(seed))
        .min();
    assert_eq!(minimum, Some(46));
    assert_eq!(min_location_in_ranges(almanac.pipeline(), &ranges), Some(46));
}

#[test]
fn test_reverse_search_finds_seed_82() {
    let almanac = sample();
    let ranges = almanac.seed_ranges().unwrap();
    let bound = default_search_bound(almanac.seeds());
    assert_eq!(bound, 158);

    let expected = SearchOutcome::Found { location: 46, seed: 82 };
    let mut progress = ProgressReporter::silent();
    assert_eq!(reverse_search(almanac.pipeline(), &ranges, bound, &mut progress), expected);
    assert_eq!(
        reverse_search_parallel(almanac.pipeline(), &ranges, bound, &mut ProgressReporter::new(16, |_| {})),
        expected
    );
    assert_eq!(almanac.pipeline().translate_backward(46), 82);
}

#[test]
fn test_reverse_search_bound_too_low() {
    let almanac = sample();
    let ranges = almanac.seed_ranges().unwrap();
    let outcome = reverse_search(almanac.pipeline(), &ranges, 46, &mut ProgressReporter::silent());
    assert_eq!(outcome, SearchOutcome::Exhausted { bound: 46 });
}

#[test]
fn test_solver_instance_all_strategies() {
    for strategy in [
        Part2Strategy::ReverseScan,
        Part2Strategy::ParallelReverseScan,
        Part2Strategy::IntervalSplit,
    ] {
        let options = SolveOptions { bound: None, strategy };
        let mut instance = SolverInstance::new(SAMPLE, options).unwrap();
        assert_eq!(instance.parts(), 2);
        assert_eq!(instance.solve(1).unwrap().answer, 35);

        let result = instance.solve(2).unwrap();
        assert_eq!(result.part, 2);
        assert_eq!(result.answer, 46);
        assert!(result.duration() >= chrono::TimeDelta::zero());
    }
}

#[test]
fn test_solver_instance_reports_exhausted_search() {
    let options = SolveOptions {
        bound: Some(10),
        strategy: Part2Strategy::ReverseScan,
    };
    let mut instance = SolverInstance::new(SAMPLE, options).unwrap();
    assert_eq!(instance.solve(2), Err(SolveError::SearchExhausted { bound: 10 }));
}

#[test]
fn test_progress_fires_during_scan() {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&calls);
    let progress = ProgressReporter::new(10, move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
    });
    let mut instance = SolverInstance::new(SAMPLE, SolveOptions::default())
        .unwrap()
        .with_progress(progress);

    assert_eq!(instance.solve(2).unwrap().answer, 46);
    // candidates 0..=45 are rejected before 46 matches
    assert_eq!(calls.load(Ordering::Relaxed), 4);
}
