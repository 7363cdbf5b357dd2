use itertools::Itertools;
use proptest::prelude::*;

use crate::indexing::{elmn_to_index, flmn_size, harmonic_indices, index_to_elmn};
use crate::parameters::{So3Params, StorageConvention};

const CONVENTIONS: [StorageConvention; 4] = [
    StorageConvention::ZeroFirstPad,
    StorageConvention::ZeroFirstCompact,
    StorageConvention::NegFirstPad,
    StorageConvention::NegFirstCompact,
];

fn params(l: usize, n: usize, storage: StorageConvention) -> So3Params {
    So3Params::builder()
        .harmonic_band_limit(l)
        .orientational_band_limit(n)
        .storage(storage)
        .build()
        .unwrap()
}

fn params_real(l: usize, n: usize, storage: StorageConvention) -> So3Params {
    So3Params::builder()
        .harmonic_band_limit(l)
        .orientational_band_limit(n)
        .storage(storage)
        .reality(true)
        .build()
        .unwrap()
}

#[test]
fn test_indexing_flmn_size_padded() {
    // (2N-1) L^2, or N L^2 for real signals.
    assert_eq!(flmn_size(&params(3, 2, StorageConvention::ZeroFirstPad)), 27);
    assert_eq!(flmn_size(&params(3, 2, StorageConvention::NegFirstPad)), 27);
    assert_eq!(
        flmn_size(&params_real(3, 2, StorageConvention::ZeroFirstPad)),
        18
    );
    assert_eq!(flmn_size(&params(8, 4, StorageConvention::NegFirstPad)), 448);
    assert_eq!(
        flmn_size(&params_real(8, 4, StorageConvention::NegFirstPad)),
        256
    );
}

#[test]
fn test_indexing_flmn_size_compact() {
    // (2N-1)(3L^2 - N(N-1))/3, or N(6L^2 - (N-1)(2N-1))/6 for real signals.
    assert_eq!(
        flmn_size(&params(3, 2, StorageConvention::ZeroFirstCompact)),
        25
    );
    assert_eq!(
        flmn_size(&params_real(3, 2, StorageConvention::NegFirstCompact)),
        17
    );
    // Slice-by-slice: sum of L^2 - n^2 over n = -(N-1) ..= N-1.
    assert_eq!(
        flmn_size(&params(4, 3, StorageConvention::NegFirstCompact)),
        12 + 15 + 16 + 15 + 12
    );
    assert_eq!(
        flmn_size(&params_real(4, 3, StorageConvention::ZeroFirstCompact)),
        16 + 15 + 12
    );
}

#[test]
fn test_indexing_size_padded_dominates_compact() {
    for (l, n) in (1usize..=8).cartesian_product(1usize..=4) {
        if n > l {
            continue;
        }
        for reality in [false, true] {
            let make = |storage| {
                let mut p = params(l, n, storage);
                p.reality = reality;
                p
            };
            let padded = flmn_size(&make(StorageConvention::NegFirstPad));
            let compact = flmn_size(&make(StorageConvention::NegFirstCompact));
            assert!(
                padded >= compact,
                "Padded size {padded} < compact size {compact} at L = {l}, N = {n}."
            );
            if n == 1 {
                assert_eq!(padded, compact);
            } else {
                assert!(padded > compact);
            }
        }
    }
}

#[test]
fn test_indexing_elmn_to_index_zero_first_pad() {
    // L = 3, N = 2: 27 slots, slices in the order n = 0, -1, +1.
    let p = params(3, 2, StorageConvention::ZeroFirstPad);
    assert_eq!(elmn_to_index(0, 0, 0, &p).unwrap(), 0);
    assert_eq!(elmn_to_index(1, -1, 0, &p).unwrap(), 1);
    assert_eq!(elmn_to_index(2, 2, 0, &p).unwrap(), 8);
    assert_eq!(elmn_to_index(0, 0, -1, &p).unwrap(), 9);
    assert_eq!(elmn_to_index(0, 0, 1, &p).unwrap(), 18);
    // Last valid slot.
    assert_eq!(elmn_to_index(2, 2, 1, &p).unwrap(), 26);
}

#[test]
fn test_indexing_elmn_to_index_neg_first_pad() {
    // L = 3, N = 2: slices in the order n = -1, 0, +1.
    let p = params(3, 2, StorageConvention::NegFirstPad);
    assert_eq!(elmn_to_index(0, 0, -1, &p).unwrap(), 0);
    assert_eq!(elmn_to_index(2, -2, -1, &p).unwrap(), 4);
    assert_eq!(elmn_to_index(0, 0, 0, &p).unwrap(), 9);
    assert_eq!(elmn_to_index(2, 2, 1, &p).unwrap(), 26);
}

#[test]
fn test_indexing_elmn_to_index_zero_first_compact() {
    // L = 2, N = 2: slice sizes 4, 3, 3 in the order n = 0, -1, +1.
    let p = params(2, 2, StorageConvention::ZeroFirstCompact);
    assert_eq!(elmn_to_index(0, 0, 0, &p).unwrap(), 0);
    assert_eq!(elmn_to_index(1, 1, 0, &p).unwrap(), 3);
    assert_eq!(elmn_to_index(1, -1, -1, &p).unwrap(), 4);
    assert_eq!(elmn_to_index(1, 0, -1, &p).unwrap(), 5);
    assert_eq!(elmn_to_index(1, -1, 1, &p).unwrap(), 7);
    assert_eq!(elmn_to_index(1, 1, 1, &p).unwrap(), 9);
}

#[test]
fn test_indexing_elmn_to_index_neg_first_compact() {
    // L = 2, N = 2: slice sizes 3, 4, 3 in the order n = -1, 0, +1.
    let p = params(2, 2, StorageConvention::NegFirstCompact);
    assert_eq!(elmn_to_index(1, -1, -1, &p).unwrap(), 0);
    assert_eq!(elmn_to_index(1, 1, -1, &p).unwrap(), 2);
    assert_eq!(elmn_to_index(0, 0, 0, &p).unwrap(), 3);
    assert_eq!(elmn_to_index(1, 1, 0, &p).unwrap(), 6);
    assert_eq!(elmn_to_index(1, -1, 1, &p).unwrap(), 7);
    assert_eq!(elmn_to_index(1, 1, 1, &p).unwrap(), 9);
}

#[test]
fn test_indexing_elmn_to_index_out_of_range() {
    let p = params(3, 3, StorageConvention::ZeroFirstCompact);
    // |n| > el is not storable under a compact convention.
    assert!(elmn_to_index(1, 0, 2, &p).is_err());
    assert!(elmn_to_index(1, 0, -2, &p).is_err());
    // ... but is addressable (as a structurally-zero slot) under a padded one.
    let p_pad = params(3, 3, StorageConvention::ZeroFirstPad);
    assert!(elmn_to_index(1, 0, 2, &p_pad).is_ok());

    assert!(elmn_to_index(3, 0, 0, &p).is_err());
    assert!(elmn_to_index(-1, 0, 0, &p).is_err());
    assert!(elmn_to_index(2, 3, 0, &p).is_err());
    assert!(elmn_to_index(2, -3, 0, &p).is_err());
    assert!(elmn_to_index(2, 0, 3, &p).is_err());
}

#[test]
fn test_indexing_index_to_elmn_out_of_range() {
    for storage in CONVENTIONS {
        let p = params(3, 2, storage);
        let size = flmn_size(&p);
        assert!(index_to_elmn(size, &p).is_err());
        assert!(index_to_elmn(size + 7, &p).is_err());
        assert!(index_to_elmn(size - 1, &p).is_ok());
    }
}

#[test]
fn test_indexing_bijection_coverage() {
    // Every storable triple maps onto [0, size) in iteration order with no gaps or
    // duplicates, and the inverse recovers the triple exactly.
    for (l, n) in (1usize..=8).cartesian_product(1usize..=4) {
        if n > l {
            continue;
        }
        for storage in CONVENTIONS {
            let p = params(l, n, storage);
            let size = flmn_size(&p);
            let mut count = 0;
            for (expected, (el, m, nn)) in harmonic_indices(&p).enumerate() {
                let ind = elmn_to_index(el, m, nn, &p).unwrap_or_else(|err| {
                    panic!("({el}, {m}, {nn}) rejected under {storage:?}: {err}")
                });
                assert_eq!(
                    ind, expected,
                    "({el}, {m}, {nn}) maps to {ind}, expected {expected} under {storage:?}."
                );
                assert_eq!(index_to_elmn(ind, &p).unwrap(), (el, m, nn));
                count += 1;
            }
            assert_eq!(count, size, "Triple count mismatch under {storage:?}.");
        }
    }
}

#[test]
fn test_indexing_round_trip_from_flat() {
    for (l, n) in [(5usize, 3usize), (8, 4), (6, 1)] {
        for storage in CONVENTIONS {
            let p = params(l, n, storage);
            for ind in 0..flmn_size(&p) {
                let (el, m, nn) = index_to_elmn(ind, &p).unwrap();
                assert_eq!(
                    elmn_to_index(el, m, nn, &p).unwrap(),
                    ind,
                    "Round trip failed at flat index {ind} under {storage:?}."
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn test_indexing_round_trip_proptest(
        l in 1usize..32,
        n in 1usize..8,
        conv in 0usize..4,
        pick in 0usize..1_000_000,
    ) {
        prop_assume!(n <= l);
        let p = params(l, n, CONVENTIONS[conv]);
        let ind = pick % flmn_size(&p);
        let (el, m, nn) = index_to_elmn(ind, &p).unwrap();
        prop_assert_eq!(elmn_to_index(el, m, nn, &p).unwrap(), ind);
    }
}
