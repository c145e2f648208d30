//! Property-based tests for RangeMap lookups and interval splitting
//!
//! **Feature: range-map**

use almanac_solver::{MapRange, RangeMap, SeedRange};
use proptest::prelude::*;
use proptest::sample::Index;

/// Triples with pairwise disjoint source intervals and pairwise disjoint
/// destination intervals, in shuffled insertion order
fn disjoint_triples() -> impl Strategy<Value = Vec<(u64, u64, u64)>> {
    prop::collection::vec((0u64..1_000, 0u64..1_000, 1u64..50), 1..6)
        .prop_map(|specs| {
            let mut source = 0;
            let mut destination = 5_000_000;
            specs
                .into_iter()
                .map(|(source_gap, destination_gap, length)| {
                    let triple = (destination + destination_gap, source + source_gap, length);
                    source += source_gap + length;
                    destination += destination_gap + length;
                    triple
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

fn build(triples: &[(u64, u64, u64)]) -> RangeMap {
    triples
        .iter()
        .map(|&(d, s, len)| MapRange::new(d, s, len).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Feature: range-map, Property 1: Identity fallback**
    /// *For any* key outside every source interval, `lookup(key) == key`.
    #[test]
    fn prop_unmapped_keys_pass_through(triples in disjoint_triples(), key in 0u64..8_000) {
        let map = build(&triples);
        prop_assume!(!map.contains_key(key));
        prop_assert_eq!(map.lookup(key), key);
    }

    /// **Feature: range-map, Property 2: Offset translation and round trip**
    /// *For any* triple `(d, s, len)` and `k` in `[s, s + len)`,
    /// `lookup(k) == d + (k - s)` and `reverse_lookup(lookup(k)) == k`.
    #[test]
    fn prop_mapped_keys_shift_and_round_trip(
        triples in disjoint_triples(),
        which in any::<Index>(),
        offset in any::<Index>(),
    ) {
        let map = build(&triples);
        let (d, s, len) = *which.get(&triples);
        let k = s + offset.index(len as usize) as u64;

        prop_assert!(map.contains_key(k));
        prop_assert_eq!(map.lookup(k), d + (k - s));
        prop_assert!(map.contains_value(map.lookup(k)));
        prop_assert_eq!(map.reverse_lookup(map.lookup(k)), k);
    }

    /// **Feature: range-map, Property 3: Interval splitting matches point lookups**
    /// *For any* query interval, the pieces from `map_interval` hold exactly the
    /// point-wise images of the interval's keys.
    #[test]
    fn prop_map_interval_matches_lookup(
        triples in disjoint_triples(),
        start in 0u64..6_000,
        length in 0u64..300,
    ) {
        let map = build(&triples);
        let pieces = map.map_interval(SeedRange::new(start, length).unwrap());

        prop_assert_eq!(pieces.iter().map(|p| p.length()).sum::<u64>(), length);
        prop_assert!(pieces.iter().all(|p| !p.is_empty()));

        let mut from_pieces: Vec<u64> = pieces.iter().flat_map(SeedRange::iter).collect();
        let mut from_lookup: Vec<u64> = (start..start + length).map(|k| map.lookup(k)).collect();
        from_pieces.sort_unstable();
        from_lookup.sort_unstable();
        prop_assert_eq!(from_pieces, from_lookup);
    }

    /// **Feature: range-map, Property 4: Covering range really covers**
    /// *For any* query, a triple returned by `find_covering_range` contains the
    /// whole query in its source interval.
    #[test]
    fn prop_covering_range_contains_query(
        triples in disjoint_triples(),
        start in 0u64..6_000,
        length in 1u64..60,
    ) {
        let map = build(&triples);
        if let Some(range) = map.find_covering_range(start, length) {
            prop_assert!(range.source_start() <= start);
            prop_assert!(start + length <= range.source_end());
        } else {
            prop_assert!(map.iter().all(|r| r.source_start() > start || start + length > r.source_end()));
        }
    }

    /// **Feature: range-map, Property 5: Empty triples are rejected**
    #[test]
    fn prop_zero_length_rejected(d in any::<u64>(), s in any::<u64>()) {
        prop_assert!(MapRange::new(d, s, 0).is_err());
    }
}
