//! Symmetry expansion of transition clauses.
//!
//! Every group acts on the eight-position neighbor ring only; the center
//! and next-state fields are left alone. Expansions are deduplicated
//! (removing later duplicates) so that each distinct orientation appears
//! exactly once, in a deterministic order.

use indexmap::IndexSet;

use crate::spec::{Clause, Field, Symmetry, RING};

/// Quarter turn clockwise: `new[i] = old[ROTATE_90[i]]`.
pub const ROTATE_90: [usize; RING] = [6, 7, 0, 1, 2, 3, 4, 5];

/// Mirror across the horizontal axis: `new[i] = old[REFLECT[i]]`.
pub const REFLECT: [usize; RING] = [4, 3, 2, 1, 0, 7, 6, 5];

/// Number of orderings of the neighbor ring (`8!`).
pub const RING_PERMUTATIONS: usize = 40_320;

fn remap(ring: &[Field; RING], table: &[usize; RING]) -> [Field; RING] {
    std::array::from_fn(|i| ring[table[i]])
}

/// Rotate a clause's ring a quarter turn clockwise.
pub fn rotate_90(clause: &Clause) -> Clause {
    clause.with_neighbors(remap(&clause.neighbors(), &ROTATE_90))
}

/// Reflect a clause's ring across the horizontal axis.
pub fn reflect(clause: &Clause) -> Clause {
    clause.with_neighbors(remap(&clause.neighbors(), &REFLECT))
}

/// Cyclically shift a clause's ring so that `new[n] = old[(n + k) % 8]`.
pub fn shift_ring(clause: &Clause, k: usize) -> Clause {
    let ring = clause.neighbors();
    clause.with_neighbors(std::array::from_fn(|n| ring[(n + k) % RING]))
}

/// Step `indices` to the next lexicographic permutation.
///
/// Returns `false` (leaving `indices` sorted ascending) once the last
/// permutation has been passed.
pub fn next_permutation<T: Ord>(indices: &mut [T]) -> bool {
    let Some(pivot) = indices.windows(2).rposition(|w| w[0] < w[1]) else {
        indices.reverse();
        return false;
    };
    // The suffix after `pivot` is non-increasing, so a successor exists.
    let successor = indices
        .iter()
        .rposition(|x| *x > indices[pivot])
        .unwrap_or(pivot + 1);
    indices.swap(pivot, successor);
    indices[pivot + 1..].reverse();
    true
}

/// Expand one clause over a symmetry group.
///
/// Orders:
/// - `None`: the clause itself.
/// - `Permute`: every index permutation of the ring in lexicographic order.
/// - `Rotate4`: identity, 90°, 180°, 270°.
/// - `Rotate4Reflect`: the four rotations starting from 90° (ending on
///   identity), then the same four of the reflected clause.
/// - `Rotate8`: the eight cyclic shifts `k = 0..8`.
pub fn expand(clause: &Clause, symmetry: Symmetry) -> Vec<Clause> {
    let mut seen: IndexSet<Clause> = IndexSet::new();
    match symmetry {
        Symmetry::None => {
            seen.insert(*clause);
        }
        Symmetry::Permute => {
            let ring = clause.neighbors();
            let mut order: [usize; RING] = std::array::from_fn(|i| i);
            loop {
                seen.insert(clause.with_neighbors(order.map(|i| ring[i])));
                if !next_permutation(&mut order) {
                    break;
                }
            }
        }
        Symmetry::Rotate4 => {
            let mut current = *clause;
            for _ in 0..4 {
                seen.insert(current);
                current = rotate_90(&current);
            }
        }
        Symmetry::Rotate4Reflect => {
            let mut current = *clause;
            for _ in 0..2 {
                for _ in 0..4 {
                    current = rotate_90(&current);
                    seen.insert(current);
                }
                current = reflect(&current);
            }
        }
        Symmetry::Rotate8 => {
            for k in 0..RING {
                seen.insert(shift_ring(clause, k));
            }
        }
    }
    seen.into_iter().collect()
}
