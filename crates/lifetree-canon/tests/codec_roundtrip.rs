//! Canonicalization and apgcode round trips over random soups.

use lifetree_canon::{
    canonical_digest, canonicalize, decode, encode, min_apgcode, same_pattern, Apgcode,
};
use lifetree_core::{SparseGrid, Transform};
use lifetree_test_utils::fixtures::{glider, r_pentomino};
use lifetree_test_utils::{random_grid, random_multistate_grid, random_nonempty_grid};
use proptest::prelude::*;

// ── Seeded soups ────────────────────────────────────────────────

#[test]
fn soups_round_trip_through_canonical_form() {
    for seed in 0..64 {
        let soup = random_nonempty_grid(seed, 16, 16, 0.375);
        let canon = canonicalize(&soup).unwrap().grid;
        let code = encode(&canon).unwrap();
        assert_eq!(decode(code.as_str()).unwrap(), canon, "seed {seed}: {code}");
    }
}

#[test]
fn tall_and_wide_soups_round_trip() {
    for (seed, w, h) in [(1, 60, 3), (2, 3, 60), (3, 90, 11)] {
        let soup = random_nonempty_grid(seed, w, h, 0.05);
        let canon = canonicalize(&soup).unwrap().grid;
        assert_eq!(decode(encode(&canon).unwrap().as_str()).unwrap(), canon);
    }
}

#[test]
fn states_do_not_affect_identity() {
    let multi = random_multistate_grid(9, 12, 12, 0.4, 6);
    let presence = multi.to_presence();
    assert_eq!(canonical_digest(&multi), canonical_digest(&presence));
    assert_eq!(min_apgcode(&multi), min_apgcode(&presence));
}

#[test]
fn empty_soup_encodes_as_zero() {
    let empty = random_grid(0, 8, 8, 0.0);
    assert_eq!(encode(&empty).unwrap().as_str(), "0");
    assert!(decode("0").unwrap().is_empty());
}

#[test]
fn every_orientation_shares_min_apgcode() {
    for grid in [glider(), r_pentomino()] {
        let want = min_apgcode(&grid);
        for t in Transform::ALL {
            let moved = grid.transformed(t).and_then(|g| g.shifted(-3, 8)).unwrap();
            assert_eq!(min_apgcode(&moved), want, "{t}");
        }
    }
}

// ── Properties ──────────────────────────────────────────────────

fn arb_grid() -> impl Strategy<Value = SparseGrid> {
    proptest::collection::btree_set((-20i64..20, -20i64..20), 1..40)
        .prop_map(SparseGrid::from_coords)
}

fn arb_code() -> impl Strategy<Value = String> {
    "[0-9a-z]{1,24}".prop_filter("dangling y", |s| {
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == 'y' && chars.next().is_none() {
                return false;
            }
        }
        true
    })
}

proptest! {
    #[test]
    fn decode_encode_canonical(grid in arb_grid()) {
        let canon = canonicalize(&grid).unwrap().grid;
        prop_assert_eq!(decode(encode(&canon).unwrap().as_str()).unwrap(), canon);
    }

    #[test]
    fn encode_is_a_fixed_point_after_decode(code in arb_code()) {
        let grid = decode(&code).unwrap();
        let minimal = encode(&grid).unwrap();
        let again = encode(&decode(minimal.as_str()).unwrap()).unwrap();
        prop_assert_eq!(again, minimal);
    }

    #[test]
    fn valid_codes_parse(code in arb_code()) {
        prop_assert!(Apgcode::parse(&code).is_ok());
    }

    #[test]
    fn same_pattern_across_orientations(grid in arb_grid(), i in 0usize..8, dx in -9i64..9) {
        let moved = grid
            .transformed(Transform::ALL[i])
            .and_then(|g| g.shifted(dx, -dx))
            .unwrap();
        prop_assert_eq!(same_pattern(&grid, &moved), Ok(true));
        prop_assert_eq!(min_apgcode(&grid), min_apgcode(&moved));
    }
}
